//! Bit packing, fixed-width byte encoding and lossy compression
//!
//! Bits are little-endian within a byte: bit `i` of byte `k` is position
//! `8k + i` of the bit string. `byte_encode`/`byte_decode` pack 256 values of
//! `d` bits each, low bit first, into `32·d` bytes.
//!
//! Compression maps Z_q onto Z_{2^d} by rounding `(2^d / q)·x`; decompression
//! maps back by rounding `(q / 2^d)·y`. Exact halves round up.
//!
//! # References
//!
//! - NIST FIPS 203, Algorithms 3-6 and Section 4.2.1

use crate::error::{Error, Result};
use crate::lattice::params::N;

/// Widest encoding: a full 12-bit field element.
pub const MAX_WIDTH: u32 = 12;

fn check_width(d: u32) -> Result<()> {
    if (1..=MAX_WIDTH).contains(&d) {
        Ok(())
    } else {
        Err(Error::InvalidWidth(d))
    }
}

// ============================================================================
// Bits <-> bytes
// ============================================================================

/// Pack a bit string (one 0/1 value per entry) into bytes.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(Error::UnalignedBits(bits.len()));
    }
    Ok(bits
        .chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << i))
        })
        .collect())
}

/// Unpack bytes into a bit string of length `8·bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).map(move |i| (byte >> i) & 1))
        .collect()
}

// ============================================================================
// Fixed-width encoding
// ============================================================================

/// Encode 256 values as `d`-bit fields (ByteEncode_d).
///
/// Only the low `d` bits of each value are kept.
pub fn byte_encode(values: &[u16; N], d: u32) -> Result<Vec<u8>> {
    check_width(d)?;
    let bits: Vec<u8> = values
        .iter()
        .flat_map(|&v| (0..d).map(move |j| ((v >> j) & 1) as u8))
        .collect();
    bits_to_bytes(&bits)
}

/// Decode `32·d` bytes into 256 values (ByteDecode_d).
///
/// Values are reduced mod 2^d for d < 12 and mod q for d = 12, where the
/// 12-bit fields carry full field elements.
pub fn byte_decode(bytes: &[u8], d: u32, q: u32) -> Result<[u16; N]> {
    check_width(d)?;
    let expected = 32 * d as usize;
    if bytes.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let modulus = if d < MAX_WIDTH { 1u32 << d } else { q };
    let bits = bytes_to_bits(bytes);
    let mut values = [0u16; N];
    for (value, field) in values.iter_mut().zip(bits.chunks_exact(d as usize)) {
        let raw = field
            .iter()
            .enumerate()
            .fold(0u32, |acc, (j, &bit)| acc | ((bit as u32) << j));
        *value = (raw % modulus) as u16;
    }
    Ok(values)
}

// ============================================================================
// Rounding and compression
// ============================================================================

/// Round to the nearest integer, sending exact halves toward +∞.
///
/// `round_nearest(2.5) == 3`, `round_nearest(-2.5) == -2`.
pub fn round_nearest(x: f64) -> i64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// round_nearest(num / den) for non-negative integers, computed exactly.
#[inline]
pub fn round_ratio(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}

/// Compress_d: x ↦ round((2^d / q)·x) mod 2^d
pub fn compress(values: &[u16], d: u32, q: u32) -> Result<Vec<u16>> {
    check_width(d)?;
    let mask = (1u64 << d) - 1;
    Ok(values
        .iter()
        .map(|&x| (round_ratio((x as u64) << d, q as u64) & mask) as u16)
        .collect())
}

/// Decompress_d: y ↦ round((q / 2^d)·y)
pub fn decompress(values: &[u16], d: u32, q: u32) -> Result<Vec<u16>> {
    check_width(d)?;
    Ok(values
        .iter()
        .map(|&y| round_ratio(q as u64 * y as u64, 1 << d) as u16)
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
