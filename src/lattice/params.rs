//! Parameter set for the ring R_q = Z_q[X]/(X^256 + 1)
//!
//! The transform, samplers and encoders all assume a degree-256 ring whose
//! modulus fits in 12 bits and splits X^256 + 1 into 128 quadratic factors,
//! i.e. q ≡ 1 (mod 256) with a primitive 256th root of unity ζ.
//!
//! | Name | n | q | ζ | η₁ |
//! |------|---|---|---|----|
//! | `TOY_KYBER` | 256 | 3329 | 17 | 3 |
//!
//! # References
//!
//! - NIST FIPS 203 (ML-KEM), Section 4.3

use super::modular::{mod_inv, pow_mod};
use crate::error::{Error, Result};

/// Ring degree n. Fixed: the 7-bit twiddle indexing only covers 256 coefficients.
pub const N: usize = 256;

/// Number of degree-1 blocks in the transform domain.
pub const NTT_BLOCKS: usize = N / 2;

/// Parameters of the polynomial ring and its error distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingParams {
    /// Field modulus q (prime, q < 2^12)
    pub q: u32,
    /// Primitive 256th root of unity mod q
    pub zeta: u32,
    /// CBD parameter η₁ for challenge and error polynomials
    pub eta1: usize,
    /// Human-readable name
    pub name: &'static str,
}

impl RingParams {
    /// Check that the modulus and root support the 128-block transform.
    pub fn validate(&self) -> Result<()> {
        if self.q >= 1 << 12 || self.q % N as u32 != 1 {
            return Err(Error::InvalidModulus(self.q));
        }
        if !self.is_primitive_root(self.zeta) {
            return Err(Error::InvalidRoot {
                zeta: self.zeta,
                q: self.q,
            });
        }
        Ok(())
    }

    /// ζ^256 = 1 and ζ^128 = -1 (mod q)
    pub fn is_primitive_root(&self, zeta: u32) -> bool {
        pow_mod(zeta, N as u64, self.q) == 1 && pow_mod(zeta, NTT_BLOCKS as u64, self.q) == self.q - 1
    }

    /// Scalar applied at the end of the inverse transform: 128^{-1} mod q.
    pub fn ntt_scale(&self) -> Result<u32> {
        mod_inv(NTT_BLOCKS as u32, self.q).ok_or(Error::InvalidModulus(self.q))
    }

    /// Byte length of a PRF output feeding CBD sampling with η₁.
    pub fn cbd_bytes(&self) -> usize {
        64 * self.eta1
    }
}

/// Kyber modulus with η₁ = 3, as used by the demonstration protocol.
pub const TOY_KYBER: RingParams = RingParams {
    q: 3329,
    zeta: 17,
    eta1: 3,
    name: "Toy_Kyber",
};

impl Default for RingParams {
    fn default() -> Self {
        TOY_KYBER
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toy_kyber_is_valid() {
        assert_eq!(TOY_KYBER.validate(), Ok(()));
        assert_eq!(TOY_KYBER.ntt_scale(), Ok(3303));
        assert_eq!(TOY_KYBER.cbd_bytes(), 192);
    }

    #[test]
    fn test_rejects_bad_modulus() {
        // Dilithium's q is NTT-friendly but does not fit 12-bit encodings
        let wide = RingParams {
            q: 8_380_417,
            ..TOY_KYBER
        };
        assert_eq!(wide.validate(), Err(Error::InvalidModulus(8_380_417)));

        // 3331 ≢ 1 (mod 256)
        let odd = RingParams {
            q: 3331,
            ..TOY_KYBER
        };
        assert_eq!(odd.validate(), Err(Error::InvalidModulus(3331)));
    }

    #[test]
    fn test_rejects_non_primitive_root() {
        // 17^2 is only a primitive 128th root
        let params = RingParams {
            zeta: 289,
            ..TOY_KYBER
        };
        assert_eq!(
            params.validate(),
            Err(Error::InvalidRoot { zeta: 289, q: 3329 })
        );
        assert!(!params.is_primitive_root(1));
    }
}
