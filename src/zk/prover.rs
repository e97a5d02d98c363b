//! Prover side of the commit/verify exchange
//!
//! Given seeds for the challenge, two error terms and the public matrix, the
//! prover publishes an approximate module-LWE sample B = A·x + e1 for a secret
//! x fixed by (`secret`, `salt`), then masks x with a fresh ephemeral v:
//!
//! ```text
//! r = v − x·c        Z = A·v + e2
//! ```
//!
//! so that r·A ≈ Z − c·B up to the small term e2 − c·e1.
//!
//! # Security
//!
//! This is a demonstration protocol. A and B are published, x is hidden only
//! by the masking above, and no zero-knowledge property is claimed.

use log::debug;

use super::config::ProtocolConfig;
use super::seed::{ProverSeeds, Seed, SeedSource};
use super::transcript::Transcript;
use crate::error::Result;
use crate::hash::{hash_secret, prf};
use crate::lattice::ntt::NttTables;
use crate::lattice::ring::{NttPoly, Poly, Ring};
use crate::lattice::sample::{sample_ntt, sample_poly_cbd};

/// Challenge polynomial in both domains: CBD sample of PRF(seed), transformed,
/// and its inverse transform.
pub fn derive_challenge(
    tables: &NttTables,
    config: &ProtocolConfig,
    seed: &Seed,
) -> Result<(NttPoly, Poly)> {
    let eta = config.ring().eta1;
    let c_hat = tables.forward(&sample_poly_cbd(&prf(seed, eta), eta, config.q())?);
    let c = tables.inverse(&c_hat);
    Ok((c_hat, c))
}

/// Small error polynomial: CBD sample of PRF(seed)
pub fn derive_error(config: &ProtocolConfig, seed: &Seed) -> Result<Poly> {
    let eta = config.ring().eta1;
    sample_poly_cbd(&prf(seed, eta), eta, config.q())
}

/// Secret x̂, a fixed function of the configured secret and salt
pub fn derive_secret(config: &ProtocolConfig) -> NttPoly {
    sample_ntt(&hash_secret(config.secret(), config.salt()), config.q())
}

pub struct Prover {
    config: ProtocolConfig,
    tables: NttTables,
}

impl Prover {
    pub fn new(config: ProtocolConfig) -> Result<Self> {
        config.validate()?;
        let tables = NttTables::new(config.ring())?;
        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Run the prover once. The ephemeral seed for v is drawn from `source`.
    pub fn prove<S: SeedSource + ?Sized>(
        &self,
        seeds: &ProverSeeds,
        source: &mut S,
    ) -> Result<Transcript> {
        let t = &self.tables;
        let q = self.config.q();

        let (c_hat, c) = derive_challenge(t, &self.config, &seeds.challenge)?;
        let x_hat = derive_secret(&self.config);

        let e1 = derive_error(&self.config, &seeds.error1)?;
        let e2 = derive_error(&self.config, &seeds.error2)?;

        let a_hat = sample_ntt(&seeds.matrix, q);
        let a = t.inverse(&a_hat);

        let b = t.inverse(&t.multiply(&a_hat, &x_hat)).add(&e1);

        let v_hat = sample_ntt(&source.next_seed(), q);
        let v = t.inverse(&v_hat);

        let r = v.sub(&t.inverse(&t.multiply(&x_hat, &c_hat)));
        let z = t.inverse(&t.multiply(&a_hat, &v_hat)).add(&e2);

        debug!(
            "prover: transcript ready (|c|∞ = {}, |e1|∞ = {}, |e2|∞ = {})",
            c.linf_norm(),
            e1.linf_norm(),
            e2.linf_norm()
        );

        Ok(Transcript { b, r, z, c, a })
    }
}
