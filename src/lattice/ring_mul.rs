//! Ring multiplication backends for R_q = Z_q[X]/(X^256 + 1)
//!
//! - [`NttBackend`]: forward transform, MultiplyNTTs, inverse transform
//! - [`SchoolbookBackend`]: O(n²) negacyclic convolution, used as a reference
//!
//! The verifier is generic over this trait, so a transcript can be checked with
//! either backend and both must agree.

use super::ntt::NttTables;
use super::params::RingParams;
use super::ring::Poly;
use crate::error::Result;

/// Backend for multiplying two standard-domain ring elements.
pub trait RingMulBackend {
    fn ring_mul(&self, a: &Poly, b: &Poly) -> Poly;
}

/// Schoolbook multiplication. No precomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchoolbookBackend;

impl RingMulBackend for SchoolbookBackend {
    fn ring_mul(&self, a: &Poly, b: &Poly) -> Poly {
        a.mul_schoolbook(b)
    }
}

/// Transform-based multiplication.
#[derive(Clone, Debug)]
pub struct NttBackend {
    pub tables: NttTables,
}

impl NttBackend {
    pub fn new(params: &RingParams) -> Result<Self> {
        Ok(Self {
            tables: NttTables::new(params)?,
        })
    }
}

impl RingMulBackend for NttBackend {
    fn ring_mul(&self, a: &Poly, b: &Poly) -> Poly {
        self.tables.ring_mul(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::params::TOY_KYBER;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ntt_vs_schoolbook_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ntt = NttBackend::new(&TOY_KYBER).unwrap();

        for _ in 0..4 {
            let a = Poly::random(&mut rng, TOY_KYBER.q);
            let b = Poly::random(&mut rng, TOY_KYBER.q);
            assert_eq!(ntt.ring_mul(&a, &b), SchoolbookBackend.ring_mul(&a, &b));
        }
    }

    #[test]
    fn multiplication_commutes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ntt = NttBackend::new(&TOY_KYBER).unwrap();
        let a = Poly::random(&mut rng, TOY_KYBER.q);
        let b = Poly::random(&mut rng, TOY_KYBER.q);
        assert_eq!(ntt.ring_mul(&a, &b), ntt.ring_mul(&b, &a));
    }
}
