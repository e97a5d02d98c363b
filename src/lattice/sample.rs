//! Deterministic samplers for ring elements
//!
//! - [`sample_ntt`]: uniform rejection sampling of a transform-domain element
//!   from a SHAKE-128 stream.
//! - [`sample_poly_cbd`]: centered binomial coefficients from PRF output.
//!
//! # References
//!
//! - NIST FIPS 203, Algorithms 7 and 8

use log::trace;

use super::modular::reduce_signed;
use super::params::N;
use super::ring::{NttPoly, Poly, Ring};
use crate::encode::bytes_to_bits;
use crate::error::{Error, Result};
use crate::hash::Xof;

/// Sample a uniform element of T_q from a seed (SampleNTT).
///
/// Each 3-byte draw yields two 12-bit candidates; those below q are kept in
/// order. After a draw, while coefficients are still missing, the three drawn
/// bytes are absorbed back into the context before the next squeeze. This
/// feedback differs from FIPS 203, which squeezes one uninterrupted stream.
pub fn sample_ntt(seed: &[u8], q: u32) -> NttPoly {
    let mut xof = Xof::new();
    xof.absorb(seed);

    let mut coeffs = [0u16; N];
    let mut j = 0;
    let mut draws = 0usize;
    while j < N {
        let mut c = [0u8; 3];
        xof.squeeze_into(&mut c);
        draws += 1;

        let d1 = c[0] as u32 + 256 * (c[1] as u32 % 16);
        let d2 = c[1] as u32 / 16 + 16 * c[2] as u32;

        if d1 < q {
            coeffs[j] = d1 as u16;
            j += 1;
        }
        if d2 < q && j < N {
            coeffs[j] = d2 as u16;
            j += 1;
        }
        if j < N {
            xof.absorb(&c);
        }
    }
    trace!("sample_ntt: {draws} draws for {N} coefficients");

    NttPoly::from_reduced(coeffs, q)
}

/// Sample a polynomial with centered binomial coefficients (SamplePolyCBD_η).
///
/// `bytes` must hold exactly `64·η` bytes, the length produced by
/// [`crate::hash::prf`]. Each coefficient is (x − y) mod q where x and y count
/// set bits in two consecutive η-bit windows.
pub fn sample_poly_cbd(bytes: &[u8], eta: usize, q: u32) -> Result<Poly> {
    let expected = 64 * eta;
    if eta == 0 || bytes.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let bits = bytes_to_bits(bytes);
    let mut coeffs = [0i64; N];
    for (coeff, window) in coeffs.iter_mut().zip(bits.chunks_exact(2 * eta)) {
        let (xs, ys) = window.split_at(eta);
        let x: i64 = xs.iter().map(|&b| b as i64).sum();
        let y: i64 = ys.iter().map(|&b| b as i64).sum();
        *coeff = x - y;
    }

    Ok(Poly::from_reduced(coeffs.map(|c| reduce_signed(c, q) as u16), q))
}

// ============================================================================
// Tests
// ============================================================================
