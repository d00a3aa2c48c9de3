//! ARM (A32) instruction set: the instruction type vocabulary and the
//! 32-bit decode patterns.

mod patterns;
mod types;

pub use patterns::patterns;
pub(crate) use patterns::{coprocessor, simd_data, simd_load_store, vfp};
pub use types::ArmType;
pub(crate) use types::{Dp, BYTE, WORD_LOAD, WORD_STORE};
