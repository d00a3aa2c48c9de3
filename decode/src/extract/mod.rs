//! # Field Extraction
//!
//! The attribute record of a decoded type is the only thing telling the
//! decoder which fields exist and where they are. [`populate`] walks the
//! record one field class at a time and hands each tag to the extractor for
//! that class:
//!
//! ```text
//!                 ┌─► register()  ─► regs[0..4]
//!                 ├─► constant()  ─► constant, rotate
//!   OpAttrs ──────┼─► target()    ─► target
//!                 ├─► control::*  ─► cond, flags, shift, list, P/W, ...
//!                 └─► simd::*     ─► esize, dt, index, align, nregs
//! ```
//!
//! A tag read from a word of the wrong layout (a 16-bit Thumb slice in an
//! ARM record, say) means the attribute tables and the extractors disagree.
//! That is a bug in the tables, so the extractors panic naming the function
//! and the tag instead of returning garbage.

use std::fmt::Debug;

use crate::attrs::{Encoding, OpAttrs};
use crate::context::DecodeState;
use crate::info::InstructionInfo;

pub mod constant;
pub mod control;
pub mod register;
pub mod simd;
pub mod target;

/// Word layouts a tag can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    Any,
    /// ARM only.
    Arm,
    /// ARM and 32-bit Thumb, which share the common register positions.
    Wide,
    Thumb16,
    Thumb32,
}

impl Layout {
    const fn allows(self, enc: Encoding) -> bool {
        match self {
            Self::Any => true,
            Self::Arm => matches!(enc, Encoding::Arm),
            Self::Wide => matches!(enc, Encoding::Arm | Encoding::Thumb32),
            Self::Thumb16 => matches!(enc, Encoding::Thumb16),
            Self::Thumb32 => matches!(enc, Encoding::Thumb32),
        }
    }

    /// # Panics
    ///
    /// Panics when `tag` cannot be read from an `enc` word.
    #[track_caller]
    pub(crate) fn check(self, extractor: &str, tag: impl Debug, enc: Encoding) {
        assert!(
            self.allows(enc),
            "{extractor}: tag {tag:?} is not valid for {enc:?} encodings"
        );
    }
}

/// Negates `value` when the `U` bit is clear, two's complement in 64 bits.
pub(crate) const fn up_down(value: u32, up: bool) -> u64 {
    if up {
        value as u64
    } else {
        (-(value as i64)) as u64
    }
}

/// Fills every field of `info` that `attrs` declares.
pub fn populate(
    info: &mut InstructionInfo,
    attrs: &OpAttrs,
    word: u32,
    enc: Encoding,
    state: &DecodeState,
) {
    info.mnemonic = attrs.mnemonic;
    info.format = attrs.format;
    info.arch = attrs.arch;
    info.isa = attrs.isa;

    info.condition = control::condition(word, attrs.cond, enc, state);
    info.set_flags = control::set_flags(word, attrs.set_flags, enc, state);

    let esize = simd::element_size(word, attrs.simd.esize, enc);
    info.simd.esize = esize;

    for (slot, tag) in attrs.regs.iter().enumerate() {
        info.regs[slot] = register::register(word, *tag, enc, esize);
    }

    info.shift = control::shift(word, attrs.shift, enc);
    info.simd.dt = [
        simd::data_type(word, attrs.simd.dt[0], enc, esize),
        simd::data_type(word, attrs.simd.dt[1], enc, esize),
    ];

    if let Some((value, rotate)) =
        constant::constant(word, attrs.constant, enc, info.shift, esize, info.simd.dt[0])
    {
        info.constant = Some(value);
        info.rotate = rotate;
    }
    info.width = control::width(word, attrs.width, enc, info.constant);
    info.field_mask = control::field_mask(word, attrs.field_mask, enc);
    info.target = target::target(word, info.address, attrs.target, enc);

    info.coproc = control::coproc(word, &attrs.coproc, enc);
    info.reg_list = control::reg_list(word, attrs.reg_list, enc);
    info.inc_dec = control::inc_dec(word, attrs.inc_dec, enc);
    info.access_size = attrs.size;
    info.sign_extend = attrs.sign_extend;
    info.post_index = control::post_index(word, attrs.post_index, enc);
    info.writeback = control::writeback(word, attrs.writeback, enc);
    info.it = control::it(word, attrs.it, enc);
    info.handler = control::handler(word, attrs.handler, enc);

    info.simd.index = simd::index(word, attrs.simd.index, enc, esize);
    info.simd.nregs = simd::register_count(word, attrs.simd.nregs, enc);
    info.simd.incr = simd::increment(word, attrs.simd.incr, enc);
    info.simd.align = simd::alignment(word, attrs.simd.align, enc, esize);
    info.simd.modimm = attrs.simd.modimm;

    info.unaligned = control::unaligned(attrs, state, info.simd.align.is_some());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{ConstTag, RegTag, ShiftTag, TargetTag};
    use pretty_assertions::assert_eq;

    #[test]
    #[should_panic(expected = "extract_register: tag T0_2 is not valid for Arm encodings")]
    fn thumb_register_in_arm_word() {
        let _ = register::register(0, RegTag::T0_2, Encoding::Arm, None);
    }

    #[test]
    #[should_panic(expected = "extract_constant: tag ArmRotImm is not valid for Thumb32 encodings")]
    fn arm_constant_in_thumb_word() {
        let _ = constant::constant(0, ConstTag::ArmRotImm, Encoding::Thumb32, None, None, crate::attrs::DataType::None);
    }

    #[test]
    #[should_panic(expected = "extract_target")]
    fn thumb_target_in_arm_word() {
        let _ = target::target(0, 0, TargetTag::T32Imm24, Encoding::Arm);
    }

    #[test]
    #[should_panic(expected = "extract_shift")]
    fn thumb_shift_in_arm_word() {
        let _ = control::shift(0, ShiftTag::T16_12_11, Encoding::Arm);
    }

    #[test]
    fn shared_positions_read_from_both_layouts() {
        let word = 0x000A_0000;
        assert_eq!(
            register::register(word, RegTag::R16_19, Encoding::Arm, None),
            register::register(word, RegTag::R16_19, Encoding::Thumb32, None)
        );
    }

    #[test]
    fn up_down_negates() {
        assert_eq!(up_down(4, true), 4);
        assert_eq!(up_down(4, false) as i64, -4);
        assert_eq!(up_down(0, false), 0);
    }
}
