//! Ring arithmetic over R_q = Z_q[X]/(X^256 + 1)
//!
//! Scalar modular arithmetic, the parameter set, domain-typed ring elements,
//! the number-theoretic transform, deterministic samplers and the
//! multiplication backends built on them.

pub mod modular;
pub mod ntt;
pub mod params;
pub mod ring;
pub mod ring_mul;
pub mod sample;

pub use modular::{add_mod, mod_inv, mul_mod, neg_mod, pow_mod, reduce_signed, sub_mod, Zq};
pub use ntt::{base_case_multiply, bit_reverse_7, NttTables};
pub use params::{RingParams, N, NTT_BLOCKS, TOY_KYBER};
pub use ring::{NttPoly, Poly, Ring};
pub use ring_mul::{NttBackend, RingMulBackend, SchoolbookBackend};
pub use sample::{sample_ntt, sample_poly_cbd};
