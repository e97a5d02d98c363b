//! Modular arithmetic over Z_q
//!
//! Every helper returns a representative in [0, q). Subtraction and signed
//! reduction are floor-style: a negative intermediate such as 3 - 5 lands on
//! q - 2, never on -2.

/// Add two values modulo q
///
/// Assumes a, b < q. Returns (a + b) mod q.
#[inline(always)]
pub fn add_mod(a: u32, b: u32, q: u32) -> u32 {
    let sum = a + b;
    if sum >= q {
        sum - q
    } else {
        sum
    }
}

/// Subtract two values modulo q
///
/// Assumes a, b < q. Returns (a - b) mod q.
#[inline(always)]
pub fn sub_mod(a: u32, b: u32, q: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        q - b + a
    }
}

/// Multiply two values modulo q
///
/// Uses a 64-bit intermediate so any pair of 32-bit residues is safe.
#[inline(always)]
pub fn mul_mod(a: u32, b: u32, q: u32) -> u32 {
    ((a as u64 * b as u64) % q as u64) as u32
}

/// Negate a value modulo q
#[inline(always)]
pub fn neg_mod(a: u32, q: u32) -> u32 {
    if a == 0 {
        0
    } else {
        q - a
    }
}

/// Reduce a signed value to [0, q)
#[inline(always)]
pub fn reduce_signed(a: i64, q: u32) -> u32 {
    a.rem_euclid(q as i64) as u32
}

/// Compute base^exp mod modulus using binary exponentiation
pub fn pow_mod(mut base: u32, mut exp: u64, modulus: u32) -> u32 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp % 2 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp /= 2;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Compute modular inverse using the extended Euclidean algorithm
///
/// Returns a^{-1} mod q, or `None` when gcd(a, q) ≠ 1.
pub fn mod_inv(a: u32, q: u32) -> Option<u32> {
    let (mut old_r, mut r) = (a as i64, q as i64);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    (old_r == 1).then(|| reduce_signed(old_s, q))
}

// ============================================================================
// Arithmetic context
// ============================================================================

/// Modular arithmetic context for Z_q
///
/// # Example
/// ```
/// use ringproof::lattice::modular::Zq;
///
/// let zq = Zq::new(3329);
/// assert_eq!(zq.add(3000, 400), 71);
/// assert_eq!(zq.sub(3, 5), 3327);
/// assert_eq!(zq.mul(17, 1175), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zq {
    pub q: u32,
}

impl Zq {
    #[inline]
    pub const fn new(q: u32) -> Self {
        Self { q }
    }

    #[inline(always)]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        add_mod(a, b, self.q)
    }

    #[inline(always)]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        sub_mod(a, b, self.q)
    }

    #[inline(always)]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        mul_mod(a, b, self.q)
    }

    #[inline(always)]
    pub fn neg(&self, a: u32) -> u32 {
        neg_mod(a, self.q)
    }

    #[inline]
    pub fn pow(&self, base: u32, exp: u64) -> u32 {
        pow_mod(base, exp, self.q)
    }

    #[inline]
    pub fn inv(&self, a: u32) -> Option<u32> {
        mod_inv(a, self.q)
    }

    #[inline(always)]
    pub fn from_signed(&self, a: i64) -> u32 {
        reduce_signed(a, self.q)
    }

    /// Center a value to [-q/2, q/2]
    #[inline]
    pub fn center(&self, a: u32) -> i64 {
        let half_q = self.q as i64 / 2;
        let a = a as i64;
        if a > half_q {
            a - self.q as i64
        } else {
            a
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const Q: u32 = 3329;

    #[test]
    fn test_add_mod() {
        assert_eq!(add_mod(3000, 400, Q), 71);
        assert_eq!(add_mod(0, 0, Q), 0);
        assert_eq!(add_mod(3328, 1, Q), 0);
    }

    #[test]
    fn test_sub_mod_is_floor_style() {
        assert_eq!(sub_mod(10, 5, Q), 5);
        assert_eq!(sub_mod(3, 5, Q), 3327); // -2 mod 3329
        assert_eq!(sub_mod(0, 3328, Q), 1);
        assert_eq!(sub_mod(0, 0, Q), 0);
    }

    #[test]
    fn test_mul_mod() {
        assert_eq!(mul_mod(17, 196, Q), 3); // 3332 mod 3329
        assert_eq!(mul_mod(17, 1175, Q), 1);
        assert_eq!(mul_mod(3328, 3328, Q), 1); // (-1)^2
        assert_eq!(mul_mod(0, 1234, Q), 0);
    }

    #[test]
    fn test_reduce_signed() {
        assert_eq!(reduce_signed(-1, Q), 3328);
        assert_eq!(reduce_signed(-3329, Q), 0);
        assert_eq!(reduce_signed(-3330, Q), 3328);
        assert_eq!(reduce_signed(6, Q), 6);
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(17, 0, Q), 1);
        assert_eq!(pow_mod(17, 1, Q), 17);
        assert_eq!(pow_mod(17, 128, Q), Q - 1); // primitive 256th root
        assert_eq!(pow_mod(17, 256, Q), 1);
    }

    #[test]
    fn test_mod_inv() {
        assert_eq!(mod_inv(128, Q), Some(3303));
        for a in 1..200 {
            let inv = mod_inv(a, Q).unwrap();
            assert_eq!(mul_mod(a, inv, Q), 1, "failed for a={a}");
        }
        assert_eq!(mod_inv(4, 8), None);
    }

    #[test]
    fn test_zq_context() {
        let zq = Zq::new(Q);
        assert_eq!(zq.neg(1), 3328);
        assert_eq!(zq.from_signed(-5), 3324);
        assert_eq!(zq.center(3324), -5);
        assert_eq!(zq.center(1664), 1664);
        assert_eq!(zq.center(1665), -1664);
        assert_eq!(zq.inv(17).map(|inv| zq.mul(inv, 17)), Some(1));
    }
}
