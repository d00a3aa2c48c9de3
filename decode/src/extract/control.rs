//! Condition, flag, shift and addressing mode fields.

use super::Layout;
use crate::attrs::{
    CondTag, CoprocTags, CpLongTag, CpNumTag, CpOpTag, Encoding, FieldMaskTag, HandlerTag, IncDecTag, ItTag, OpAttrs,
    PostIndexTag, RegListTag, SetFlagsTag, ShiftTag, UnalignedAction, WidthTag, WritebackTag,
};
use crate::bitwise::Bits;
use crate::condition::Condition;
use crate::context::DecodeState;
use crate::info::{CoprocInfo, IncDec, ShiftOp};

const fn shift_op(bits: u32) -> ShiftOp {
    match bits & 0b11 {
        0b00 => ShiftOp::Lsl,
        0b01 => ShiftOp::Lsr,
        0b10 => ShiftOp::Asr,
        _ => ShiftOp::Ror,
    }
}

/// Condition the instruction executes under.
///
/// Encodings without a condition field are `AL` in ARM state and follow the
/// IT block in Thumb state.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn condition(word: u32, tag: CondTag, enc: Encoding, state: &DecodeState) -> Condition {
    let layout = match tag {
        CondTag::None => Layout::Any,
        CondTag::Arm28 => Layout::Arm,
        CondTag::T16_8 => Layout::Thumb16,
        CondTag::T32_22 => Layout::Thumb32,
    };
    layout.check("extract_condition", tag, enc);

    match tag {
        CondTag::None => match enc {
            Encoding::Arm => Condition::AL,
            Encoding::Thumb16 | Encoding::Thumb32 => Condition::from_it_state(state.it_state),
        },
        CondTag::Arm28 => Condition::from(word.get_bits(28..=31) as u8),
        CondTag::T16_8 => Condition::from(word.get_bits(8..=11) as u8),
        CondTag::T32_22 => Condition::from(word.get_bits(22..=25) as u8),
    }
}

/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn set_flags(word: u32, tag: SetFlagsTag, enc: Encoding, state: &DecodeState) -> bool {
    let layout = match tag {
        SetFlagsTag::None | SetFlagsTag::Always => Layout::Any,
        SetFlagsTag::Bit20 => Layout::Wide,
        SetFlagsTag::NotInIt => Layout::Thumb16,
    };
    layout.check("extract_set_flags", tag, enc);

    match tag {
        SetFlagsTag::None => false,
        SetFlagsTag::Bit20 => word.get_bit(20),
        SetFlagsTag::Always => true,
        SetFlagsTag::NotInIt => !Condition::in_it_block(state.it_state),
    }
}

/// Shift applied to the last register operand.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn shift(word: u32, tag: ShiftTag, enc: Encoding) -> Option<ShiftOp> {
    let layout = match tag {
        ShiftTag::None | ShiftTag::Lsl | ShiftTag::Lsr | ShiftTag::Asr | ShiftTag::Ror | ShiftTag::Rrx => {
            Layout::Any
        }
        ShiftTag::Arm6_5 | ShiftTag::ArmReg6_5 | ShiftTag::Bit6 => Layout::Arm,
        ShiftTag::T32_5_4 | ShiftTag::T32_22_21 | ShiftTag::T32Bit21 | ShiftTag::T32Bit5 => Layout::Thumb32,
        ShiftTag::T16_12_11 => Layout::Thumb16,
    };
    layout.check("extract_shift", tag, enc);

    let op = match tag {
        ShiftTag::None => return None,
        ShiftTag::Lsl => ShiftOp::Lsl,
        ShiftTag::Lsr => ShiftOp::Lsr,
        ShiftTag::Asr => ShiftOp::Asr,
        ShiftTag::Ror => ShiftOp::Ror,
        ShiftTag::Rrx => ShiftOp::Rrx,
        ShiftTag::Arm6_5 => match shift_op(word.get_bits(5..=6)) {
            ShiftOp::Ror if word.get_bits(7..=11) == 0 => ShiftOp::Rrx,
            op => op,
        },
        ShiftTag::ArmReg6_5 => shift_op(word.get_bits(5..=6)),
        ShiftTag::Bit6 => {
            if word.get_bit(6) {
                ShiftOp::Asr
            } else {
                ShiftOp::Lsl
            }
        }
        ShiftTag::T32_5_4 => match shift_op(word.get_bits(4..=5)) {
            ShiftOp::Ror if word.join(12..=14, 6..=7) == 0 => ShiftOp::Rrx,
            op => op,
        },
        ShiftTag::T32_22_21 => shift_op(word.get_bits(21..=22)),
        ShiftTag::T32Bit21 => {
            if word.get_bit(21) {
                ShiftOp::Asr
            } else {
                ShiftOp::Lsl
            }
        }
        ShiftTag::T32Bit5 => {
            if word.get_bit(5) {
                ShiftOp::Asr
            } else {
                ShiftOp::Lsl
            }
        }
        ShiftTag::T16_12_11 => shift_op(word.get_bits(11..=12)),
    };

    Some(op)
}

/// Bitfield or saturation width, `lsb` is the already extracted constant.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn width(word: u32, tag: WidthTag, enc: Encoding, lsb: Option<u64>) -> Option<u8> {
    let layout = match tag {
        WidthTag::None => Layout::Any,
        WidthTag::ArmMsb
        | WidthTag::ArmWidthM1
        | WidthTag::Sat20Plus1
        | WidthTag::Sat20
        | WidthTag::Sat19Plus1
        | WidthTag::Sat19 => Layout::Arm,
        WidthTag::TMsb
        | WidthTag::TWidthM1
        | WidthTag::TSat4Plus1
        | WidthTag::TSat4
        | WidthTag::TSat3Plus1
        | WidthTag::TSat3 => Layout::Thumb32,
    };
    layout.check("extract_width", tag, enc);

    let lsb = lsb.unwrap_or(0) as u32;
    let width = match tag {
        WidthTag::None => return None,
        WidthTag::ArmMsb => (word.get_bits(16..=20) + 1).saturating_sub(lsb),
        WidthTag::ArmWidthM1 => word.get_bits(16..=20) + 1,
        WidthTag::TMsb => (word.get_bits(0..=4) + 1).saturating_sub(lsb),
        WidthTag::TWidthM1 => word.get_bits(0..=4) + 1,
        WidthTag::Sat20Plus1 => word.get_bits(16..=20) + 1,
        WidthTag::Sat20 => word.get_bits(16..=20),
        WidthTag::Sat19Plus1 => word.get_bits(16..=19) + 1,
        WidthTag::Sat19 => word.get_bits(16..=19),
        WidthTag::TSat4Plus1 => word.get_bits(0..=4) + 1,
        WidthTag::TSat4 => word.get_bits(0..=4),
        WidthTag::TSat3Plus1 => word.get_bits(0..=3) + 1,
        WidthTag::TSat3 => word.get_bits(0..=3),
    };

    Some(width as u8)
}

/// MSR field mask, `c` in bit 0 up to `f` in bit 3.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn field_mask(word: u32, tag: FieldMaskTag, enc: Encoding) -> Option<u8> {
    let layout = match tag {
        FieldMaskTag::None => Layout::Any,
        FieldMaskTag::Bits16_19 => Layout::Arm,
        FieldMaskTag::T8_11 => Layout::Thumb32,
    };
    layout.check("extract_field_mask", tag, enc);

    match tag {
        FieldMaskTag::None => None,
        FieldMaskTag::Bits16_19 => Some(word.get_bits(16..=19) as u8),
        FieldMaskTag::T8_11 => Some(word.get_bits(8..=11) as u8),
    }
}

/// # Panics
///
/// Panics when a tag does not belong to the `enc` layout.
#[must_use]
pub fn coproc(word: u32, tags: &CoprocTags, enc: Encoding) -> CoprocInfo {
    for (name, wide) in [
        ("num", tags.num != CpNumTag::None),
        ("op1", tags.op1 != CpOpTag::None),
        ("op2", tags.op2 != CpOpTag::None),
        ("long", tags.long != CpLongTag::None),
    ] {
        if wide {
            Layout::Wide.check("extract_coproc", name, enc);
        }
    }

    let op = |tag: CpOpTag| match tag {
        CpOpTag::None => None,
        CpOpTag::Bits21_23 => Some(word.get_bits(21..=23) as u8),
        CpOpTag::Bits20_23 => Some(word.get_bits(20..=23) as u8),
        CpOpTag::Bits4_7 => Some(word.get_bits(4..=7) as u8),
        CpOpTag::Bits5_7 => Some(word.get_bits(5..=7) as u8),
    };

    CoprocInfo {
        num: match tags.num {
            CpNumTag::None => None,
            CpNumTag::Bits8_11 => Some(word.get_bits(8..=11) as u8),
        },
        op1: op(tags.op1),
        op2: op(tags.op2),
        long: match tags.long {
            CpLongTag::None => false,
            CpLongTag::Bit22 => word.get_bit(22),
        },
    }
}

/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn reg_list(word: u32, tag: RegListTag, enc: Encoding) -> Option<u16> {
    let layout = match tag {
        RegListTag::None => Layout::Any,
        RegListTag::Bits16 => Layout::Wide,
        RegListTag::T8 | RegListTag::T8Lr | RegListTag::T8Pc => Layout::Thumb16,
    };
    layout.check("extract_reg_list", tag, enc);

    let list = match tag {
        RegListTag::None => return None,
        RegListTag::Bits16 => word.get_bits(0..=15),
        RegListTag::T8 => word.get_bits(0..=7),
        RegListTag::T8Lr => word.get_bits(0..=7) | (u32::from(word.get_bit(8)) << 14),
        RegListTag::T8Pc => word.get_bits(0..=7) | (u32::from(word.get_bit(8)) << 15),
    };

    Some(list as u16)
}

/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn inc_dec(word: u32, tag: IncDecTag, enc: Encoding) -> Option<IncDec> {
    let layout = match tag {
        IncDecTag::None | IncDecTag::Ia | IncDecTag::Db => Layout::Any,
        IncDecTag::Arm23_24 => Layout::Arm,
    };
    layout.check("extract_inc_dec", tag, enc);

    match tag {
        IncDecTag::None => None,
        IncDecTag::Ia => Some(IncDec::Ia),
        IncDecTag::Db => Some(IncDec::Db),
        IncDecTag::Arm23_24 => Some(match (word.get_bit(24), word.get_bit(23)) {
            (false, false) => IncDec::Da,
            (false, true) => IncDec::Ia,
            (true, false) => IncDec::Db,
            (true, true) => IncDec::Ib,
        }),
    }
}

/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn post_index(word: u32, tag: PostIndexTag, enc: Encoding) -> bool {
    let layout = match tag {
        PostIndexTag::None | PostIndexTag::Always => Layout::Any,
        PostIndexTag::ArmP24Clear => Layout::Wide,
        PostIndexTag::T32P10Clear => Layout::Thumb32,
    };
    layout.check("extract_post_index", tag, enc);

    match tag {
        PostIndexTag::None => false,
        PostIndexTag::ArmP24Clear => !word.get_bit(24),
        PostIndexTag::T32P10Clear => !word.get_bit(10),
        PostIndexTag::Always => true,
    }
}

/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn writeback(word: u32, tag: WritebackTag, enc: Encoding) -> bool {
    let layout = match tag {
        WritebackTag::None | WritebackTag::Always => Layout::Any,
        WritebackTag::ArmW21 | WritebackTag::ArmPostOrW21 => Layout::Wide,
        WritebackTag::T32W8 => Layout::Thumb32,
        WritebackTag::T16NotInList => Layout::Thumb16,
        WritebackTag::SimdRm => Layout::Arm,
    };
    layout.check("extract_writeback", tag, enc);

    match tag {
        WritebackTag::None => false,
        WritebackTag::ArmW21 => word.get_bit(21),
        WritebackTag::ArmPostOrW21 => !word.get_bit(24) || word.get_bit(21),
        WritebackTag::T32W8 => word.get_bit(8),
        WritebackTag::T16NotInList => !word.get_bit(word.get_bits(8..=10) as u8),
        WritebackTag::SimdRm => word.get_bits(0..=3) != 0xF,
        WritebackTag::Always => true,
    }
}

/// `firstcond:mask` of an IT instruction.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn it(word: u32, tag: ItTag, enc: Encoding) -> Option<u8> {
    match tag {
        ItTag::None => None,
        ItTag::Bits0_7 => {
            Layout::Thumb16.check("extract_it", tag, enc);
            Some(word.get_bits(0..=7) as u8)
        }
    }
}

/// ThumbEE handler index.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn handler(word: u32, tag: HandlerTag, enc: Encoding) -> Option<u8> {
    match tag {
        HandlerTag::None => None,
        HandlerTag::Bits0_7 => {
            Layout::Thumb16.check("extract_handler", tag, enc);
            Some(word.get_bits(0..=7) as u8)
        }
        HandlerTag::Bits0_4 => {
            Layout::Thumb16.check("extract_handler", tag, enc);
            Some(word.get_bits(0..=4) as u8)
        }
    }
}

/// What an unaligned access does under the configured SCTLR.U bit.
///
/// An explicit alignment qualifier on a SIMD transfer always faults.
#[must_use]
pub fn unaligned(attrs: &OpAttrs, state: &DecodeState, alignment_set: bool) -> UnalignedAction {
    let action = attrs.unaligned[usize::from(state.unaligned)];

    if alignment_set && action != UnalignedAction::None {
        UnalignedAction::Fault
    } else {
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn thumb_condition_follows_it_block() {
        let outside = DecodeState::default();
        let inside = DecodeState {
            it_state: 0x18, // NE, one instruction left
            ..DecodeState::default()
        };

        assert_eq!(condition(0, CondTag::None, Encoding::Thumb16, &outside), Condition::AL);
        assert_eq!(condition(0, CondTag::None, Encoding::Thumb16, &inside), Condition::NE);
        assert_eq!(condition(0, CondTag::None, Encoding::Arm, &inside), Condition::AL);
    }

    #[test]
    fn flags_are_not_set_inside_it() {
        let inside = DecodeState {
            it_state: 0x08,
            ..DecodeState::default()
        };
        assert!(set_flags(0, SetFlagsTag::NotInIt, Encoding::Thumb16, &DecodeState::default()));
        assert!(!set_flags(0, SetFlagsTag::NotInIt, Encoding::Thumb16, &inside));
    }

    #[test]
    fn ror_zero_is_rrx() {
        // MOV R0, R1, RRX
        assert_eq!(shift(0xE1A0_0061, ShiftTag::Arm6_5, Encoding::Arm), Some(ShiftOp::Rrx));
        // MOV R0, R1, ROR #4
        assert_eq!(shift(0xE1A0_0261, ShiftTag::Arm6_5, Encoding::Arm), Some(ShiftOp::Ror));
        // Register controlled ROR stays ROR
        assert_eq!(shift(0xE1A0_0071, ShiftTag::ArmReg6_5, Encoding::Arm), Some(ShiftOp::Ror));
        // MOV.W R0, R1, RRX
        assert_eq!(shift(0xEA4F_0031, ShiftTag::T32_5_4, Encoding::Thumb32), Some(ShiftOp::Rrx));
    }

    #[test]
    fn bitfield_width() {
        // BFI R0, R1, #4, #8: msb = 11, lsb = 4
        let word = 0xE7CB_0211;
        assert_eq!(width(word, WidthTag::ArmMsb, Encoding::Arm, Some(4)), Some(8));
        // msb below lsb is unpredictable, never negative
        assert_eq!(width(word, WidthTag::ArmMsb, Encoding::Arm, Some(20)), Some(0));
    }

    #[test]
    fn msr_field_mask() {
        // MSR CPSR_fc, R0
        assert_eq!(field_mask(0xE129_F000, FieldMaskTag::Bits16_19, Encoding::Arm), Some(0b1001));
        // MSR APSR_nzcvq, R0
        assert_eq!(field_mask(0xF380_8800, FieldMaskTag::T8_11, Encoding::Thumb32), Some(0b1000));
    }

    #[test]
    fn saturation_width() {
        // SSAT R0, #8, R1 and USAT R0, #7, R1
        assert_eq!(width(0xE6A7_0011, WidthTag::Sat20Plus1, Encoding::Arm, None), Some(8));
        assert_eq!(width(0xE6E7_0011, WidthTag::Sat20, Encoding::Arm, None), Some(7));
        // SSAT16 R0, #16, R1
        assert_eq!(width(0xE6AF_0F31, WidthTag::Sat19Plus1, Encoding::Arm, None), Some(16));
        // SSAT.W R0, #8, R1
        assert_eq!(width(0xF301_0007, WidthTag::TSat4Plus1, Encoding::Thumb32, None), Some(8));
    }

    #[test]
    fn block_transfer_modes() {
        // STMDB SP!, {R0}
        assert_eq!(inc_dec(0xE92D_0001, IncDecTag::Arm23_24, Encoding::Arm), Some(IncDec::Db));
        // LDMIA R0, {R1}
        assert_eq!(inc_dec(0xE890_0002, IncDecTag::Arm23_24, Encoding::Arm), Some(IncDec::Ia));
        // STMDA R0, {R1}
        assert_eq!(inc_dec(0xE800_0002, IncDecTag::Arm23_24, Encoding::Arm), Some(IncDec::Da));
        // LDMIB R0, {R1}
        assert_eq!(inc_dec(0xE990_0002, IncDecTag::Arm23_24, Encoding::Arm), Some(IncDec::Ib));
    }

    #[test]
    fn thumb_register_lists() {
        // PUSH {R0, R4, LR}
        assert_eq!(reg_list(0xB511, RegListTag::T8Lr, Encoding::Thumb16), Some(0x4011));
        // POP {R1, PC}
        assert_eq!(reg_list(0xBD02, RegListTag::T8Pc, Encoding::Thumb16), Some(0x8002));
    }

    #[test]
    fn thumb_ldm_writeback() {
        // LDM R1!, {R0, R2}
        assert!(writeback(0xC905, WritebackTag::T16NotInList, Encoding::Thumb16));
        // LDM R1, {R0, R1}
        assert!(!writeback(0xC903, WritebackTag::T16NotInList, Encoding::Thumb16));
    }

    #[test]
    fn coprocessor_fields() {
        // MRC p15, 0, R0, c1, c0, 0
        let tags = CoprocTags {
            num: CpNumTag::Bits8_11,
            op1: CpOpTag::Bits21_23,
            op2: CpOpTag::Bits5_7,
            long: CpLongTag::None,
        };
        assert_eq!(
            coproc(0xEE11_0F10, &tags, Encoding::Arm),
            CoprocInfo {
                num: Some(15),
                op1: Some(0),
                op2: Some(0),
                long: false,
            }
        );
    }

    #[test]
    fn alignment_qualifier_faults() {
        let attrs = OpAttrs::new("VLD1", "").unaligned(UnalignedAction::Unaligned, UnalignedAction::Unaligned);
        let state = DecodeState {
            unaligned: true,
            ..DecodeState::default()
        };
        assert_eq!(unaligned(&attrs, &state, false), UnalignedAction::Unaligned);
        assert_eq!(unaligned(&attrs, &state, true), UnalignedAction::Fault);

        let ldr = OpAttrs::new("LDR", "").unaligned(UnalignedAction::Rotate, UnalignedAction::Unaligned);
        assert_eq!(unaligned(&ldr, &DecodeState::default(), false), UnalignedAction::Rotate);
        assert_eq!(unaligned(&ldr, &state, false), UnalignedAction::Unaligned);
    }

    #[test]
    #[should_panic(expected = "extract_coproc: tag \"num\" is not valid for Thumb16 encodings")]
    fn coprocessor_in_short_thumb() {
        let tags = CoprocTags {
            num: CpNumTag::Bits8_11,
            ..CoprocTags::NONE
        };
        let _ = coproc(0, &tags, Encoding::Thumb16);
    }
}
