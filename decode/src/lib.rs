//! Table driven decoder for the ARM and Thumb instruction sets.
//!
//! ```
//! use armdecode::{ArmType, DecodeState, DecoderContext};
//!
//! let ctx = DecoderContext::shared();
//! let info = ctx.decode_arm(0, 0xE12F_FF41, &DecodeState::default());
//! assert_eq!(info.ty, ArmType::Baa);
//! ```

#[macro_use]
mod opcodes;

pub mod arch;
pub mod arm;
pub mod attrs;

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
pub mod bitwise;

pub mod condition;
pub mod context;

#[allow(clippy::missing_panics_doc)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_lossless)]
pub mod extract;

pub mod info;
pub mod modimm;
pub mod pattern;
pub mod table;
pub mod thumb;

#[cfg(feature = "disassembler")]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
mod disasm;

pub use arch::{ArchConfig, ArchVersion, IsaFeature};
pub use arm::ArmType;
pub use condition::Condition;
pub use context::{thumb_instruction_size, DecodeState, DecoderContext, InstructionFetch, Mode};
pub use info::{InstructionInfo, RegClass, Register, ShiftOp};
pub use thumb::ThumbType;
