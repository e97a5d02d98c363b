//! Verifier side of the commit/verify exchange
//!
//! The verifier recomputes both sides of r·A ≈ Z − c·B, compresses each to
//! `compress_bits` bits per coefficient and counts the positions where they
//! differ. The transcript is accepted when that count stays within the
//! configured tolerance.

use log::debug;

use super::config::ProtocolConfig;
use super::transcript::Transcript;
use crate::encode::compress;
use crate::error::Result;
use crate::lattice::ring::{Poly, Ring};
use crate::lattice::ring_mul::{NttBackend, RingMulBackend};

/// Outcome of one verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Compress(r·A)
    pub lhs: Vec<u16>,
    /// Compress(Z − c·B)
    pub rhs: Vec<u16>,
    /// Number of coefficient positions where `lhs` and `rhs` differ
    pub mismatches: usize,
    /// `mismatches <= max_mismatches`
    pub accepted: bool,
}

pub struct Verifier<B = NttBackend> {
    config: ProtocolConfig,
    backend: B,
}

impl Verifier<NttBackend> {
    pub fn new(config: ProtocolConfig) -> Result<Self> {
        config.validate()?;
        let backend = NttBackend::new(config.ring())?;
        Ok(Self { config, backend })
    }
}

impl<B: RingMulBackend> Verifier<B> {
    pub fn with_backend(config: ProtocolConfig, backend: B) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    pub fn verify(&self, transcript: &Transcript) -> Result<Verdict> {
        let (d, q) = (self.config.compress_bits(), self.config.q());

        let r_a = self.backend.ring_mul(&transcript.r, &transcript.a);
        let c_b = self.backend.ring_mul(&transcript.c, &transcript.b);
        let z_minus_cb: Poly = transcript.z.sub(&c_b);

        let lhs = compress(r_a.coeffs(), d, q)?;
        let rhs = compress(z_minus_cb.coeffs(), d, q)?;
        let mismatches = lhs.iter().zip(&rhs).filter(|(l, r)| l != r).count();
        let accepted = mismatches <= self.config.max_mismatches();

        debug!(
            "verifier: {mismatches} mismatches (tolerance {}), accepted = {accepted}",
            self.config.max_mismatches()
        );

        Ok(Verdict {
            lhs,
            rhs,
            mismatches,
            accepted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::params::N;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const Q: u32 = 3329;

    #[test]
    fn exact_relation_has_no_mismatches() {
        // r·A = Z − c·B holds exactly when Z = r·A + c·B
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let verifier = Verifier::new(ProtocolConfig::default()).unwrap();
        let (r, a, c, b) = (
            Poly::random(&mut rng, Q),
            Poly::random(&mut rng, Q),
            Poly::random(&mut rng, Q),
            Poly::random(&mut rng, Q),
        );
        let z = r.mul_schoolbook(&a).add(&c.mul_schoolbook(&b));

        let verdict = verifier.verify(&Transcript { b, r, z, c, a }).unwrap();
        assert_eq!(verdict.mismatches, 0);
        assert!(verdict.accepted);
        assert_eq!(verdict.lhs.len(), N);
        assert_eq!(verdict.lhs, verdict.rhs);
    }

    #[test]
    fn zero_tolerance_rejects_any_mismatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let config = ProtocolConfig::default().with_max_mismatches(0);
        let verifier = Verifier::new(config).unwrap();
        let transcript = Transcript {
            b: Poly::random(&mut rng, Q),
            r: Poly::random(&mut rng, Q),
            z: Poly::random(&mut rng, Q),
            c: Poly::random(&mut rng, Q),
            a: Poly::random(&mut rng, Q),
        };

        let verdict = verifier.verify(&transcript).unwrap();
        assert!(verdict.mismatches > 0);
        assert!(!verdict.accepted);
    }
}
