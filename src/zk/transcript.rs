//! Proof transcript (B, r, Z, c, A) and its wire format

use crate::encode::{byte_decode, byte_encode, MAX_WIDTH};
use crate::error::{Error, Result};
use crate::lattice::ring::{Poly, Ring};

/// Bytes per 12-bit encoded ring element.
pub const POLY_BYTES: usize = 32 * MAX_WIDTH as usize;

/// Serialized transcript length: five encoded ring elements.
pub const TRANSCRIPT_BYTES: usize = 5 * POLY_BYTES;

/// Everything the prover sends to the verifier. All standard domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    /// Public value B = A·x + e1
    pub b: Poly,
    /// Response r = v − x·c
    pub r: Poly,
    /// Commitment opening Z = A·v + e2
    pub z: Poly,
    /// Challenge polynomial
    pub c: Poly,
    /// Public matrix element
    pub a: Poly,
}

impl Transcript {
    /// Concatenate ByteEncode_12 of B, r, Z, c, A.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(TRANSCRIPT_BYTES);
        for poly in [&self.b, &self.r, &self.z, &self.c, &self.a] {
            out.extend(byte_encode(poly.coeffs(), MAX_WIDTH)?);
        }
        Ok(out)
    }

    /// Inverse of [`Transcript::to_bytes`]. Decoded values are reduced mod q.
    pub fn from_bytes(bytes: &[u8], q: u32) -> Result<Self> {
        if bytes.len() != TRANSCRIPT_BYTES {
            return Err(Error::InvalidLength {
                expected: TRANSCRIPT_BYTES,
                actual: bytes.len(),
            });
        }
        let decode = |i: usize| -> Result<Poly> {
            let chunk = &bytes[i * POLY_BYTES..(i + 1) * POLY_BYTES];
            Ok(Poly::from_reduced(byte_decode(chunk, MAX_WIDTH, q)?, q))
        };

        Ok(Self {
            b: decode(0)?,
            r: decode(1)?,
            z: decode(2)?,
            c: decode(3)?,
            a: decode(4)?,
        })
    }
}
