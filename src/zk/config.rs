//! Immutable configuration for the commit/verify exchange

use crate::encode::MAX_WIDTH;
use crate::error::{Error, Result};
use crate::lattice::params::{RingParams, N, TOY_KYBER};

/// Default acceptance tolerance: n/8 differing bits.
///
/// An honest transcript differs only by e2 − c·e1, whose coefficients have a
/// standard deviation near 24 for η₁ = 3, so a handful of 1-bit comparisons
/// flip. A wrong challenge disagrees on about n/2 positions.
pub const DEFAULT_MAX_MISMATCHES: usize = N / 8;

/// Protocol configuration, fixed at construction.
///
/// # Example
/// ```
/// use ringproof::zk::ProtocolConfig;
///
/// let config = ProtocolConfig::default().with_max_mismatches(0);
/// assert_eq!(config.secret(), "password");
/// assert_eq!(config.max_mismatches(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolConfig {
    ring: RingParams,
    secret: String,
    salt: String,
    compress_bits: u32,
    max_mismatches: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            ring: TOY_KYBER,
            secret: "password".to_owned(),
            salt: "salt".to_owned(),
            compress_bits: 1,
            max_mismatches: DEFAULT_MAX_MISMATCHES,
        }
    }
}

impl ProtocolConfig {
    pub fn new(ring: RingParams, secret: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            ring,
            secret: secret.into(),
            salt: salt.into(),
            ..Self::default()
        }
    }

    pub fn with_compress_bits(self, compress_bits: u32) -> Self {
        Self {
            compress_bits,
            ..self
        }
    }

    pub fn with_max_mismatches(self, max_mismatches: usize) -> Self {
        Self {
            max_mismatches,
            ..self
        }
    }

    /// Check ring parameters and the comparison width.
    pub fn validate(&self) -> Result<()> {
        self.ring.validate()?;
        if !(1..=MAX_WIDTH).contains(&self.compress_bits) {
            return Err(Error::InvalidWidth(self.compress_bits));
        }
        Ok(())
    }

    pub fn ring(&self) -> &RingParams {
        &self.ring
    }

    pub fn q(&self) -> u32 {
        self.ring.q
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Width of the verifier's per-coefficient comparison
    pub fn compress_bits(&self) -> u32 {
        self.compress_bits
    }

    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }
}
