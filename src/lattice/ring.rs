//! Ring elements of R_q = Z_q[X]/(X^256 + 1)
//!
//! A ring element lives either in the standard (coefficient) domain or in the
//! transform domain produced by the NTT. The two are distinct types, [`Poly`]
//! and [`NttPoly`], so the domain of every named value is tracked by the
//! compiler. The only conversions are [`NttTables::forward`] and
//! [`NttTables::inverse`].
//!
//! Coefficients are stored as `[u16; N]` in [0, q). Every operation returns a
//! fresh element; nothing is mutated after construction.
//!
//! [`NttTables::forward`]: super::ntt::NttTables::forward
//! [`NttTables::inverse`]: super::ntt::NttTables::inverse

use std::fmt;

use itertools::iproduct;

use super::modular::{add_mod, neg_mod, reduce_signed, sub_mod};
use super::params::N;

// ============================================================================
// Ring Trait
// ============================================================================

/// Coefficient-wise arithmetic shared by both domains.
///
/// Addition and subtraction are linear, so they act identically on standard
/// and transform representations.
pub trait Ring: Sized {
    /// Wrap coefficients that are already reduced into [0, q).
    fn from_reduced(coeffs: [u16; N], q: u32) -> Self;

    fn coeffs(&self) -> &[u16; N];

    fn modulus(&self) -> u32;

    fn zero(q: u32) -> Self {
        Self::from_reduced([0; N], q)
    }

    /// Coefficient-wise (a + b) mod q
    fn add(&self, other: &Self) -> Self {
        self.zip_with(other, add_mod)
    }

    /// Coefficient-wise (a - b) mod q, floor-style
    fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, sub_mod)
    }

    fn neg(&self) -> Self {
        let q = self.modulus();
        Self::from_reduced(self.coeffs().map(|c| neg_mod(c as u32, q) as u16), q)
    }

    #[doc(hidden)]
    fn zip_with(&self, other: &Self, op: impl Fn(u32, u32, u32) -> u32) -> Self {
        let q = self.modulus();
        debug_assert_eq!(q, other.modulus());
        let (a, b) = (self.coeffs(), other.coeffs());
        Self::from_reduced(
            std::array::from_fn(|i| op(a[i] as u32, b[i] as u32, q) as u16),
            q,
        )
    }
}

macro_rules! ring_element {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            coeffs: [u16; N],
            q: u32,
        }

        impl $name {
            /// Build from arbitrary values, reducing each into [0, q).
            pub fn from_coeffs(values: &[u32; N], q: u32) -> Self {
                Self {
                    coeffs: values.map(|v| (v % q) as u16),
                    q,
                }
            }

            /// Build from signed values with floor-style reduction.
            pub fn from_signed(values: &[i64; N], q: u32) -> Self {
                Self {
                    coeffs: values.map(|v| reduce_signed(v, q) as u16),
                    q,
                }
            }

            /// Uniformly random element
            pub fn random<R: rand::Rng>(rng: &mut R, q: u32) -> Self {
                Self {
                    coeffs: std::array::from_fn(|_| rng.gen_range(0..q) as u16),
                    q,
                }
            }
        }

        impl Ring for $name {
            fn from_reduced(coeffs: [u16; N], q: u32) -> Self {
                debug_assert!(coeffs.iter().all(|&c| (c as u32) < q));
                Self { coeffs, q }
            }

            fn coeffs(&self) -> &[u16; N] {
                &self.coeffs
            }

            fn modulus(&self) -> u32 {
                self.q
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{} {{ q: {}, coeffs: {:?}.. }}",
                    stringify!($name),
                    self.q,
                    &self.coeffs[..4]
                )
            }
        }
    };
}

ring_element! {
    /// Ring element in the standard (coefficient) domain:
    /// c_0 + c_1·X + ... + c_255·X^255
    Poly
}

ring_element! {
    /// Ring element in the transform domain: 128 pairs (f̂_{2i}, f̂_{2i+1}),
    /// each a residue modulo X^2 - ζ^{2·bitrev7(i)+1}.
    NttPoly
}

// ============================================================================
// Standard-domain extras
// ============================================================================

impl Poly {
    /// Constant polynomial c
    pub fn constant(c: u32, q: u32) -> Self {
        let mut coeffs = [0u16; N];
        coeffs[0] = (c % q) as u16;
        Self { coeffs, q }
    }

    /// Centered representation (coefficients in [-q/2, q/2])
    pub fn centered(&self) -> [i64; N] {
        let half_q = self.q as i64 / 2;
        self.coeffs.map(|c| {
            let c = c as i64;
            if c > half_q {
                c - self.q as i64
            } else {
                c
            }
        })
    }

    /// ℓ∞ norm of the centered representation
    pub fn linf_norm(&self) -> u64 {
        self.centered()
            .iter()
            .map(|c| c.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Schoolbook product in Z_q[X]/(X^256 + 1)
    pub fn mul_schoolbook(&self, other: &Self) -> Self {
        debug_assert_eq!(self.q, other.q);
        let q = self.q as i64;
        let mut acc = [0i64; N];

        // X^256 ≡ -1, so X^k for k ≥ 256 folds back as -X^{k-256}
        let self_nz = self.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);
        let other_nz = || other.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);

        for ((i, &a), (j, &b)) in iproduct!(self_nz, other_nz()) {
            let prod = a as i64 * b as i64 % q;
            if i + j < N {
                acc[i + j] += prod;
            } else {
                acc[i + j - N] -= prod;
            }
        }

        Self::from_signed(&acc, self.q)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const Q: u32 = 3329;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_add_sub_inverse() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let a = Poly::random(&mut rng, Q);
            let b = Poly::random(&mut rng, Q);
            assert_eq!(a.add(&b).sub(&b), a);
            assert_eq!(a.add(&a.neg()), Poly::zero(Q));
        }
    }

    #[test]
    fn test_sub_wraps_to_non_negative() {
        let a = Poly::constant(3, Q);
        let b = Poly::constant(5, Q);
        assert_eq!(a.sub(&b).coeffs()[0], 3327);
        assert!(a.sub(&b).coeffs().iter().all(|&c| (c as u32) < Q));
    }

    #[test]
    fn test_add_sub_transform_domain() {
        let mut rng = test_rng();
        let a = NttPoly::random(&mut rng, Q);
        let b = NttPoly::random(&mut rng, Q);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn test_from_signed_floor_reduction() {
        let mut values = [0i64; N];
        values[..4].copy_from_slice(&[-1, -3329, -3330, 6658]);
        let p = Poly::from_signed(&values, Q);
        assert_eq!(&p.coeffs()[..4], &[3328, 0, 3328, 0]);
    }

    #[test]
    fn test_schoolbook_mul_x() {
        // X · X^255 = X^256 ≡ -1
        let mut x = [0u32; N];
        x[1] = 1;
        let mut top = [0u32; N];
        top[N - 1] = 1;
        let prod = Poly::from_coeffs(&x, Q).mul_schoolbook(&Poly::from_coeffs(&top, Q));
        assert_eq!(prod, Poly::constant(Q - 1, Q));
    }

    #[test]
    fn test_schoolbook_mul_identity() {
        let mut rng = test_rng();
        let a = Poly::random(&mut rng, Q);
        assert_eq!(a.mul_schoolbook(&Poly::constant(1, Q)), a);
    }

    #[test]
    fn test_centered_and_norm() {
        let mut values = [0u32; N];
        values[..4].copy_from_slice(&[1, 3328, 1664, 1665]);
        let p = Poly::from_coeffs(&values, Q);
        assert_eq!(&p.centered()[..4], &[1, -1, 1664, -1664]);
        assert_eq!(p.linf_norm(), 1664);
        assert_eq!(Poly::zero(Q).linf_norm(), 0);
    }
}
