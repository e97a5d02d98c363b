//! Seed sources for the prover
//!
//! The prover never reaches for a global RNG. Seeds come from a [`SeedSource`]
//! supplied by the caller: [`RngSeedSource`] over a cryptographic RNG for real
//! runs, [`FixedSeedSource`] for reproducible fixtures.

use rand::{CryptoRng, RngCore};

pub const SEED_LEN: usize = 32;

pub type Seed = [u8; SEED_LEN];

/// Anything that hands out 32-byte seeds.
pub trait SeedSource {
    fn next_seed(&mut self) -> Seed;
}

/// Seeds drawn from a cryptographically secure RNG.
#[derive(Clone, Debug)]
pub struct RngSeedSource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSeedSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> SeedSource for RngSeedSource<R> {
    fn next_seed(&mut self) -> Seed {
        let mut seed = [0u8; SEED_LEN];
        self.rng.fill_bytes(&mut seed);
        seed
    }
}

/// Replays a fixed list of seeds, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct FixedSeedSource {
    seeds: Vec<Seed>,
    next: usize,
}

impl FixedSeedSource {
    /// # Panics
    ///
    /// Panics if `seeds` is empty.
    pub fn new(seeds: Vec<Seed>) -> Self {
        assert!(!seeds.is_empty(), "fixed seed source needs at least one seed");
        Self { seeds, next: 0 }
    }

    /// Always returns the same seed
    pub fn repeat(seed: Seed) -> Self {
        Self::new(vec![seed])
    }
}

impl SeedSource for FixedSeedSource {
    fn next_seed(&mut self) -> Seed {
        let seed = self.seeds[self.next];
        self.next = (self.next + 1) % self.seeds.len();
        seed
    }
}

/// The four independent seeds of one proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverSeeds {
    /// Challenge polynomial c
    pub challenge: Seed,
    /// Error term e1 of B
    pub error1: Seed,
    /// Error term e2 of Z
    pub error2: Seed,
    /// Public matrix element A
    pub matrix: Seed,
}

impl ProverSeeds {
    pub fn generate<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        Self {
            challenge: source.next_seed(),
            error1: source.next_seed(),
            error2: source.next_seed(),
            matrix: source.next_seed(),
        }
    }
}
