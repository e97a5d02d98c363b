//! One run of the commit/verify exchange with OS-provided seeds.
//!
//! Run with `cargo run --example proof_demo`. Set `RUST_LOG=debug` to see the
//! prover and verifier internals.

use log::info;
use rand::rngs::OsRng;
use ringproof::{ProtocolConfig, Prover, ProverSeeds, RngSeedSource, Verifier};

fn main() -> ringproof::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ProtocolConfig::default();
    info!(
        "ring {}: q = {}, n = 256, eta1 = {}",
        config.ring().name,
        config.q(),
        config.ring().eta1
    );

    let mut source = RngSeedSource::new(OsRng);
    let seeds = ProverSeeds::generate(&mut source);

    let prover = Prover::new(config.clone())?;
    let verifier = Verifier::new(config)?;

    let transcript = prover.prove(&seeds, &mut source)?;
    let verdict = verifier.verify(&transcript)?;

    info!("proof1: {:?}", verdict.lhs);
    info!("proof2: {:?}", verdict.rhs);
    info!(
        "{} mismatches ({})",
        verdict.mismatches,
        if verdict.accepted {
            "accepted"
        } else {
            "rejected"
        }
    );

    Ok(())
}
