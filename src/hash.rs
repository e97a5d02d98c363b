//! Hash, XOF and PRF primitives
//!
//! - [`Xof`]: SHAKE-128 absorb/squeeze context used by uniform sampling.
//! - `hash_*`: SHA3-256 adapters, one per input shape. Each fixes how its input
//!   is normalized to bytes before hashing.
//! - [`prf`]: SHAKE-256 expansion of a seed into `64·η` bytes for CBD sampling.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Shake128, Shake256};

/// Fixed-output digest length.
pub const DIGEST_LEN: usize = 32;

pub type Digest32 = [u8; DIGEST_LEN];

// ============================================================================
// Extendable-output context
// ============================================================================

/// SHAKE-128 context supporting interleaved absorb and squeeze.
///
/// Output is always a function of everything absorbed so far. Consecutive
/// squeezes continue one stream; absorbing more input restarts the stream over
/// the extended input.
#[derive(Clone, Default)]
pub struct Xof {
    hasher: Shake128,
    position: usize,
}

impl Xof {
    /// Fresh context with nothing absorbed (XOF.Init)
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes into the context (XOF.Absorb)
    pub fn absorb(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
        self.position = 0;
    }

    /// Fill `out` with the next bytes of the stream
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        let mut reader = self.hasher.clone().finalize_xof();
        let mut skip = [0u8; 64];
        let mut remaining = self.position;
        while remaining > 0 {
            let step = remaining.min(skip.len());
            reader.read(&mut skip[..step]);
            remaining -= step;
        }
        reader.read(out);
        self.position += out.len();
    }

    /// Extract `n` output bytes (XOF.Squeeze)
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.squeeze_into(&mut out);
        out
    }
}

// ============================================================================
// Fixed-output hash adapters
// ============================================================================

/// SHA3-256 of raw bytes
pub fn hash_bytes(bytes: &[u8]) -> Digest32 {
    Sha3_256::digest(bytes).into()
}

/// SHA3-256 of a sequence of integers, each reduced mod 256 to one byte
pub fn hash_coefficients(values: &[u32]) -> Digest32 {
    let bytes: Vec<u8> = values.iter().map(|&v| (v % 256) as u8).collect();
    hash_bytes(&bytes)
}

/// SHA3-256 of a non-negative integer in minimal big-endian form.
///
/// Zero has an empty representation.
pub fn hash_integer(value: u128) -> Digest32 {
    let be = value.to_be_bytes();
    let leading = (value.leading_zeros() / 8) as usize;
    hash_bytes(&be[leading..])
}

/// Key for secret derivation: the code points of `secret ++ salt`
/// hashed through [`hash_coefficients`].
pub fn hash_secret(secret: &str, salt: &str) -> Digest32 {
    let points: Vec<u32> = secret.chars().chain(salt.chars()).map(u32::from).collect();
    hash_coefficients(&points)
}

// ============================================================================
// PRF
// ============================================================================

/// PRF_η(seed): the first `64·η` bytes of SHAKE-256(seed)
pub fn prf(seed: &[u8], eta: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(seed);
    let mut out = vec![0u8; 64 * eta];
    hasher.finalize_xof().read(&mut out);
    out
}

// ============================================================================
// Tests
// ============================================================================
