//! Number-theoretic transform over R_q = Z_q[X]/(X^256 + 1)
//!
//! With q = 3329 the ring only contains primitive 256th roots of unity, so
//! X^256 + 1 does not split into linear factors. The transform stops one level
//! early and maps a polynomial to its residues modulo 128 quadratics
//! X^2 - ζ^{2·bitrev7(i)+1}. Multiplication in the transform domain is then a
//! degree-1 product per block ([`base_case_multiply`]).
//!
//! # Layout
//!
//! - Forward: Cooley-Tukey butterflies, block length 128 → 2, twiddle index
//!   counter 1 → 127 shared across each round.
//! - Inverse: Gentleman-Sande butterflies, block length 2 → 128, counter
//!   127 → 1, followed by a single scaling by 128^{-1} mod q.
//!
//! Both run in natural order; the bit reversal lives entirely in the twiddle
//! table.
//!
//! # References
//!
//! - NIST FIPS 203, Algorithms 9-12

use log::trace;

use super::modular::{add_mod, mul_mod, pow_mod, sub_mod};
use super::params::{RingParams, NTT_BLOCKS, N};
use super::ring::{NttPoly, Poly, Ring};
use crate::error::{Error, Result};

/// Reverse the bits of a 7-bit index.
///
/// Fails for indices outside [0, 127] instead of truncating them.
pub fn bit_reverse_7(i: usize) -> Result<usize> {
    if i >= NTT_BLOCKS {
        return Err(Error::BitReversalOutOfRange(i));
    }
    Ok((0..7).fold(0, |acc, bit| (acc << 1) | ((i >> bit) & 1)))
}

/// Product of (a0 + a1·X)(b0 + b1·X) modulo X^2 - γ
#[inline]
pub fn base_case_multiply(a: (u32, u32), b: (u32, u32), gamma: u32, q: u32) -> (u32, u32) {
    let (a0, a1) = a;
    let (b0, b1) = b;
    let c0 = add_mod(mul_mod(a0, b0, q), mul_mod(mul_mod(a1, b1, q), gamma, q), q);
    let c1 = add_mod(mul_mod(a0, b1, q), mul_mod(a1, b0, q), q);
    (c0, c1)
}

// ============================================================================
// Precomputed tables
// ============================================================================

/// Twiddle tables for one modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NttTables {
    pub q: u32,
    /// zetas[i] = ζ^{bitrev7(i)} mod q
    zetas: [u32; NTT_BLOCKS],
    /// gammas[i] = ζ^{2·bitrev7(i)+1} mod q
    gammas: [u32; NTT_BLOCKS],
    /// 128^{-1} mod q
    scale: u32,
}

impl NttTables {
    pub fn new(params: &RingParams) -> Result<Self> {
        params.validate()?;
        let (q, zeta) = (params.q, params.zeta);

        let mut zetas = [0u32; NTT_BLOCKS];
        let mut gammas = [0u32; NTT_BLOCKS];
        for i in 0..NTT_BLOCKS {
            let rev = bit_reverse_7(i)? as u64;
            zetas[i] = pow_mod(zeta, rev, q);
            gammas[i] = pow_mod(zeta, 2 * rev + 1, q);
        }
        trace!("built NTT tables for {} (q = {q}, zeta = {zeta})", params.name);

        Ok(Self {
            q,
            zetas,
            gammas,
            scale: params.ntt_scale()?,
        })
    }

    /// Forward transform: standard domain → transform domain
    pub fn forward(&self, f: &Poly) -> NttPoly {
        debug_assert_eq!(f.modulus(), self.q);
        let q = self.q;
        let mut a = f.coeffs().map(u32::from);

        let mut k = 1;
        let mut len = N / 2;
        while len >= 2 {
            for chunk in a.chunks_mut(2 * len) {
                let zeta = self.zetas[k];
                k += 1;
                let (lo, hi) = chunk.split_at_mut(len);
                for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                    let t = mul_mod(zeta, *v, q);
                    (*u, *v) = (add_mod(*u, t, q), sub_mod(*u, t, q));
                }
            }
            len /= 2;
        }

        NttPoly::from_reduced(a.map(|c| c as u16), q)
    }

    /// Inverse transform: transform domain → standard domain
    pub fn inverse(&self, f_hat: &NttPoly) -> Poly {
        debug_assert_eq!(f_hat.modulus(), self.q);
        let q = self.q;
        let mut a = f_hat.coeffs().map(u32::from);

        let mut k = NTT_BLOCKS - 1;
        let mut len = 2;
        while len <= N / 2 {
            for chunk in a.chunks_mut(2 * len) {
                let zeta = self.zetas[k];
                k -= 1;
                let (lo, hi) = chunk.split_at_mut(len);
                for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                    let t = *u;
                    (*u, *v) = (add_mod(t, *v, q), mul_mod(zeta, sub_mod(*v, t, q), q));
                }
            }
            len *= 2;
        }

        Poly::from_reduced(a.map(|c| mul_mod(c, self.scale, q) as u16), q)
    }

    /// Pointwise product in the transform domain (MultiplyNTTs)
    pub fn multiply(&self, f_hat: &NttPoly, g_hat: &NttPoly) -> NttPoly {
        debug_assert_eq!(f_hat.modulus(), self.q);
        debug_assert_eq!(g_hat.modulus(), self.q);
        let (f, g) = (f_hat.coeffs(), g_hat.coeffs());
        let mut h = [0u16; N];

        for (i, (&gamma, out)) in self.gammas.iter().zip(h.chunks_exact_mut(2)).enumerate() {
            let a = (f[2 * i] as u32, f[2 * i + 1] as u32);
            let b = (g[2 * i] as u32, g[2 * i + 1] as u32);
            let (c0, c1) = base_case_multiply(a, b, gamma, self.q);
            out[0] = c0 as u16;
            out[1] = c1 as u16;
        }

        NttPoly::from_reduced(h, self.q)
    }

    /// Ring multiplication through the transform
    pub fn ring_mul(&self, a: &Poly, b: &Poly) -> Poly {
        self.inverse(&self.multiply(&self.forward(a), &self.forward(b)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::params::TOY_KYBER;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const Q: u32 = 3329;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn tables() -> NttTables {
        NttTables::new(&TOY_KYBER).unwrap()
    }

    #[test]
    fn test_bit_reverse_7() {
        assert_eq!(bit_reverse_7(0), Ok(0));
        assert_eq!(bit_reverse_7(1), Ok(64));
        assert_eq!(bit_reverse_7(2), Ok(32));
        assert_eq!(bit_reverse_7(127), Ok(127));
        assert_eq!(bit_reverse_7(0b0000110), Ok(0b0110000));
        for i in 0..NTT_BLOCKS {
            assert_eq!(bit_reverse_7(bit_reverse_7(i).unwrap()), Ok(i));
        }
    }

    #[test]
    fn test_bit_reverse_7_out_of_range() {
        assert_eq!(bit_reverse_7(128), Err(Error::BitReversalOutOfRange(128)));
        assert_eq!(bit_reverse_7(1000), Err(Error::BitReversalOutOfRange(1000)));
    }

    #[test]
    fn test_twiddle_tables() {
        let t = tables();
        // FIPS 203 Appendix A
        assert_eq!(&t.zetas[..8], &[1, 1729, 2580, 3289, 2642, 630, 1897, 848]);
        assert_eq!(&t.gammas[..4], &[17, 3312, 2761, 568]);
        assert_eq!(t.scale, 3303);
    }

    #[test]
    fn test_ntt_roundtrip() {
        let t = tables();
        let mut rng = test_rng();
        for _ in 0..8 {
            let f = Poly::random(&mut rng, Q);
            assert_eq!(t.inverse(&t.forward(&f)), f);
        }
    }

    #[test]
    fn test_inverse_then_forward() {
        let t = tables();
        let mut rng = test_rng();
        let f_hat = NttPoly::random(&mut rng, Q);
        assert_eq!(t.forward(&t.inverse(&f_hat)), f_hat);
    }

    #[test]
    fn test_forward_of_constant() {
        // A constant c reduces to c modulo every quadratic factor
        let t = tables();
        let f_hat = t.forward(&Poly::constant(5, Q));
        for pair in f_hat.coeffs().chunks(2) {
            assert_eq!(pair, &[5, 0]);
        }
    }

    #[test]
    fn test_ntt_mul_vs_schoolbook() {
        let t = tables();
        let mut rng = test_rng();
        for _ in 0..4 {
            let a = Poly::random(&mut rng, Q);
            let b = Poly::random(&mut rng, Q);
            assert_eq!(t.ring_mul(&a, &b), a.mul_schoolbook(&b));
        }
    }

    #[test]
    fn test_ntt_is_linear() {
        let t = tables();
        let mut rng = test_rng();
        let a = Poly::random(&mut rng, Q);
        let b = Poly::random(&mut rng, Q);
        assert_eq!(t.forward(&a.add(&b)), t.forward(&a).add(&t.forward(&b)));
        assert_eq!(t.forward(&a.sub(&b)), t.forward(&a).sub(&t.forward(&b)));
    }

    #[test]
    fn test_base_case_multiply() {
        // (1 + 2X)(3 + 4X) = 3 + 10X + 8X^2 ≡ (3 + 8γ) + 10X
        assert_eq!(base_case_multiply((1, 2), (3, 4), 17, Q), (139, 10));
        assert_eq!(base_case_multiply((Q - 1, 0), (Q - 1, 0), 17, Q), (1, 0));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = RingParams {
            zeta: 3,
            ..TOY_KYBER
        };
        assert!(matches!(
            NttTables::new(&params),
            Err(Error::InvalidRoot { zeta: 3, .. })
        ));
    }
}
