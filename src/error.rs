//! Error type shared by the encoding, sampling, transform and protocol layers.

use thiserror::Error;

/// Errors raised by ring arithmetic and the proof exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Twiddle index outside the 7-bit range used by the transform.
    #[error("bit-reversal index {0} is outside [0, 127]")]
    BitReversalOutOfRange(usize),

    #[error("bit string of length {0} is not a multiple of 8")]
    UnalignedBits(usize),

    /// Encoding or compression width outside [1, 12].
    #[error("width d = {0} is outside [1, 12]")]
    InvalidWidth(u32),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("modulus {0} must be below 4096 and congruent to 1 mod 256")]
    InvalidModulus(u32),

    #[error("{zeta} is not a primitive 256th root of unity modulo {q}")]
    InvalidRoot { zeta: u32, q: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
