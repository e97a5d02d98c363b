//! Toy lattice commit/verify exchange
//!
//! A single-shot, in-process exchange: the [`Prover`] turns four seeds into a
//! [`Transcript`], the [`Verifier`] compares two 1-bit compressions of the
//! transcript's ring relation and reports a [`Verdict`].

pub mod config;
pub mod prover;
pub mod seed;
pub mod transcript;
pub mod verifier;

pub use config::{ProtocolConfig, DEFAULT_MAX_MISMATCHES};
pub use prover::{derive_challenge, derive_error, derive_secret, Prover};
pub use seed::{FixedSeedSource, ProverSeeds, RngSeedSource, Seed, SeedSource, SEED_LEN};
pub use transcript::{Transcript, TRANSCRIPT_BYTES};
pub use verifier::{Verdict, Verifier};
