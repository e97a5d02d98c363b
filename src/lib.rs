//! # ringproof
//!
//! Polynomial-ring arithmetic over R_q = Z_3329[X]/(X^256 + 1) and a toy
//! lattice commit/verify exchange built on it:
//!
//! - **Encoding**: bit packing, fixed-width byte codecs, lossy compression
//! - **Hashing**: SHAKE-128 XOF context, SHA3-256 adapters, SHAKE-256 PRF
//! - **Lattice**: modular arithmetic, domain-typed ring elements, NTT,
//!   deterministic samplers, multiplication backends
//! - **ZK**: prover, verifier, transcript and seed sources
//!
//! ## Modules
//!
//! - [`encode`]: ByteEncode/ByteDecode, Compress/Decompress
//! - [`hash`]: XOF, H and PRF
//! - [`lattice`]: ring arithmetic and sampling
//! - [`zk`]: the commit/verify exchange
//!
//! Not side-channel hardened; not a key-encapsulation scheme.

pub mod encode;
pub mod error;
pub mod hash;
pub mod lattice;
pub mod zk;

pub use error::{Error, Result};
pub use lattice::{NttPoly, NttTables, Poly, Ring, RingParams, TOY_KYBER};
pub use zk::{
    FixedSeedSource, ProtocolConfig, Prover, ProverSeeds, RngSeedSource, SeedSource, Transcript,
    Verdict, Verifier,
};
