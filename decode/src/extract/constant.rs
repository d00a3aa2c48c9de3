use super::{up_down, Layout};
use crate::attrs::{ConstTag, DataType, Encoding};
use crate::bitwise::Bits;
use crate::info::ShiftOp;
use crate::modimm::{arm_expand_imm, simd_expand_imm, thumb_expand_imm, vfp_expand_imm32, vfp_expand_imm64};

const fn layout(tag: ConstTag) -> Layout {
    match tag {
        ConstTag::None | ConstTag::Implied(_) => Layout::Any,
        ConstTag::Imm12
        | ConstTag::Imm12U
        | ConstTag::Imm8x4U
        | ConstTag::Imm4
        | ConstTag::Bits16_19
        | ConstTag::CpsMode => {
            Layout::Wide
        }
        ConstTag::T6_10
        | ConstTag::T6_10x2
        | ConstTag::T6_10x4
        | ConstTag::T6_10Shift
        | ConstTag::T0_7
        | ConstTag::T0_7x4
        | ConstTag::T6_8
        | ConstTag::T0_6x4
        | ConstTag::EeImm3Neg
        | ConstTag::EeImm5x4
        | ConstTag::EeImm6x4
        | ConstTag::EeImm3
        | ConstTag::EeImm5 => Layout::Thumb16,
        ConstTag::TModImm
        | ConstTag::TImm12
        | ConstTag::TImm16
        | ConstTag::TImm8
        | ConstTag::TImm8U9
        | ConstTag::TShiftImm
        | ConstTag::TLsb
        | ConstTag::TImm2
        | ConstTag::TRotation
        | ConstTag::TImm8x4 => Layout::Thumb32,
        _ => Layout::Arm,
    }
}

/// Immediate shift amounts encode 32 as 0 for the right shifts.
fn shift_amount(amount: u32, shift: Option<ShiftOp>) -> u32 {
    match shift {
        Some(ShiftOp::Lsr | ShiftOp::Asr) if amount == 0 => 32,
        _ => amount,
    }
}

/// `i:imm3:imm8` of a 32-bit Thumb data processing immediate.
fn thumb_imm12(word: u32) -> u32 {
    (u32::from(word.get_bit(26)) << 11) | (word.get_bits(12..=14) << 8) | word.get_bits(0..=7)
}

/// Reads the constant named by `tag` and returns it with the rotation of a
/// modified immediate (0 for every other kind).
///
/// `shift` is the already extracted shift op, `esize` the element size and
/// `dt` the first data type of the record, which a SIMD modified immediate
/// has to agree with.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout, or when a SIMD
/// modified immediate disagrees with the data type of the record.
#[must_use]
pub fn constant(
    word: u32,
    tag: ConstTag,
    enc: Encoding,
    shift: Option<ShiftOp>,
    esize: Option<u8>,
    dt: DataType,
) -> Option<(u64, u8)> {
    layout(tag).check("extract_constant", tag, enc);

    let up = word.get_bit(23);
    let value = match tag {
        ConstTag::None => return None,
        ConstTag::Implied(value) => u64::from(value),
        ConstTag::ArmRotImm => {
            let (value, rotate) = arm_expand_imm(word.get_bits(0..=11));
            return Some((u64::from(value), rotate));
        }
        ConstTag::Imm12 => u64::from(word.get_bits(0..=11)),
        ConstTag::Imm12U => up_down(word.get_bits(0..=11), up),
        ConstTag::Imm8HLU => up_down(word.join(8..=11, 0..=3), up),
        ConstTag::Imm8x4U => up_down(word.get_bits(0..=7) * 4, up),
        ConstTag::Imm24 => u64::from(word.get_bits(0..=23)),
        ConstTag::ImmBkpt => u64::from(word.join(8..=19, 0..=3)),
        ConstTag::Imm16Split => u64::from(word.join(16..=19, 0..=11)),
        ConstTag::Imm4 => u64::from(word.get_bits(0..=3)),
        ConstTag::Bits16_19 => u64::from(word.get_bits(16..=19)),
        ConstTag::ShiftImm => u64::from(shift_amount(word.get_bits(7..=11), shift)),
        ConstTag::Rotation => u64::from(word.get_bits(10..=11) * 8),
        ConstTag::Lsb => u64::from(word.get_bits(7..=11)),
        ConstTag::CpsMode => u64::from(word.get_bits(0..=4)),
        ConstTag::VfpImm32 => u64::from(vfp_expand_imm32(word.join(16..=19, 0..=3))),
        ConstTag::VfpImm64 => vfp_expand_imm64(word.join(16..=19, 0..=3)),
        ConstTag::VcvtFbits => {
            let size: u32 = if word.get_bit(7) { 32 } else { 16 };
            u64::from(size.saturating_sub(word.join(0..=3, 5..=5)))
        }
        ConstTag::SimdShrImm => {
            let imm6 = word.get_bits(16..=21);
            match esize? {
                64 => u64::from(64 - imm6),
                esize => u64::from((2 * u32::from(esize)).saturating_sub(imm6)),
            }
        }
        ConstTag::SimdShlImm => {
            let imm6 = word.get_bits(16..=21);
            match esize? {
                64 => u64::from(imm6),
                esize => u64::from(imm6.saturating_sub(u32::from(esize))),
            }
        }
        ConstTag::SimdCvtFbits => u64::from(64 - word.get_bits(16..=21)),
        ConstTag::SimdModImm => {
            let imm8 = (u32::from(word.get_bit(24)) << 7) | (word.get_bits(16..=18) << 4) | word.get_bits(0..=3);
            let cmode = word.get_bits(8..=11);
            let Some((value, implied)) = simd_expand_imm(word.get_bit(5), cmode, imm8) else {
                panic!("extract_constant: undefined modified immediate, cmode {cmode:#06b} with op set");
            };
            assert_eq!(
                implied, dt,
                "extract_constant: cmode {cmode:#06b} implies {implied:?}, the record says {dt:?}"
            );
            value
        }
        ConstTag::VextImm => u64::from(word.get_bits(8..=11)),

        ConstTag::T6_10 => u64::from(word.get_bits(6..=10)),
        ConstTag::T6_10x2 => u64::from(word.get_bits(6..=10) * 2),
        ConstTag::T6_10x4 => u64::from(word.get_bits(6..=10) * 4),
        ConstTag::T6_10Shift => u64::from(shift_amount(word.get_bits(6..=10), shift)),
        ConstTag::T0_7 => u64::from(word.get_bits(0..=7)),
        ConstTag::T0_7x4 => u64::from(word.get_bits(0..=7) * 4),
        ConstTag::T6_8 => u64::from(word.get_bits(6..=8)),
        ConstTag::T0_6x4 => u64::from(word.get_bits(0..=6) * 4),
        ConstTag::EeImm3Neg => up_down(word.get_bits(6..=8) * 4, false),
        ConstTag::EeImm5x4 => u64::from(word.get_bits(3..=7) * 4),
        ConstTag::EeImm6x4 => u64::from(word.get_bits(3..=8) * 4),
        ConstTag::EeImm3 => u64::from(word.get_bits(5..=7)),
        ConstTag::EeImm5 => u64::from(word.get_bits(5..=9)),

        ConstTag::TModImm => {
            let imm12 = thumb_imm12(word);
            let rotate = if imm12 >> 10 == 0 { 0 } else { (imm12 >> 7) as u8 };
            return Some((u64::from(thumb_expand_imm(imm12)), rotate));
        }
        ConstTag::TImm12 => u64::from(thumb_imm12(word)),
        ConstTag::TImm16 => u64::from((word.get_bits(16..=19) << 12) | thumb_imm12(word)),
        ConstTag::TImm8 => u64::from(word.get_bits(0..=7)),
        ConstTag::TImm8U9 => up_down(word.get_bits(0..=7), word.get_bit(9)),
        ConstTag::TShiftImm => u64::from(shift_amount(word.join(12..=14, 6..=7), shift)),
        ConstTag::TLsb => u64::from(word.join(12..=14, 6..=7)),
        ConstTag::TImm2 => u64::from(word.get_bits(4..=5)),
        ConstTag::TRotation => u64::from(word.get_bits(4..=5) * 8),
        ConstTag::TImm8x4 => u64::from(word.get_bits(0..=7) * 4),
    };

    Some((value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn arm(word: u32, tag: ConstTag) -> Option<(u64, u8)> {
        constant(word, tag, Encoding::Arm, None, None, DataType::None)
    }

    #[test]
    fn rotated_immediate_records_rotation() {
        // MOV R0, #0xFF000000: rotate field 4, imm8 = 0xFF
        assert_eq!(arm(0xE3A0_04FF, ConstTag::ArmRotImm), Some((0xFF00_0000, 8)));
        assert_eq!(arm(0xE3A0_0001, ConstTag::ArmRotImm), Some((1, 0)));
        // MOV R0, #0xF000000F: rotate field 2 splits imm8 across both ends
        assert_eq!(arm(0xE3A0_02FF, ConstTag::ArmRotImm), Some((0xF000_000F, 4)));
    }

    #[test]
    fn zero_shift_means_32_for_right_shifts() {
        let word = 0xE1A0_0020; // MOV R0, R0, LSR #0
        assert_eq!(
            constant(word, ConstTag::ShiftImm, Encoding::Arm, Some(ShiftOp::Lsr), None, DataType::None),
            Some((32, 0))
        );
        assert_eq!(
            constant(word, ConstTag::ShiftImm, Encoding::Arm, Some(ShiftOp::Asr), None, DataType::None),
            Some((32, 0))
        );
        assert_eq!(
            constant(word, ConstTag::ShiftImm, Encoding::Arm, Some(ShiftOp::Lsl), None, DataType::None),
            Some((0, 0))
        );

        // LSRS R0, R1, #0 in Thumb
        let thumb = 0b0000_1000_0000_1000;
        assert_eq!(
            constant(thumb, ConstTag::T6_10Shift, Encoding::Thumb16, Some(ShiftOp::Lsr), None, DataType::None),
            Some((32, 0))
        );
    }

    #[test]
    fn u_bit_negates() {
        // LDR R0, [R1, #-4]
        let (value, _) = arm(0xE511_0004, ConstTag::Imm12U).unwrap();
        assert_eq!(value as i64, -4);
        let (value, _) = arm(0xE591_0004, ConstTag::Imm12U).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn split_immediates() {
        // MOVW R0, #0x1234
        assert_eq!(arm(0xE301_0234, ConstTag::Imm16Split), Some((0x1234, 0)));
        // BKPT #0xABCD
        assert_eq!(arm(0xE12A_BC7D, ConstTag::ImmBkpt), Some((0xABCD, 0)));
        // LDRH R0, [R1, #-0x12]
        let (value, _) = arm(0xE151_01B2, ConstTag::Imm8HLU).unwrap();
        assert_eq!(value as i64, -0x12);
    }

    #[test]
    fn thumb_modified_immediate() {
        // MOV.W R0, #0x00AB00AB: i = 0, imm3 = 001, imm8 = 0xAB
        let word = 0xF04F_10AB;
        assert_eq!(
            constant(word, ConstTag::TModImm, Encoding::Thumb32, None, None, DataType::None),
            Some((0x00AB_00AB, 0))
        );
    }

    #[test]
    fn simd_shift_amounts() {
        // VSHR.S8 with imm6 = 0b001101: shift = 16 - 13 = 3
        let word = 0xF28D_0010;
        assert_eq!(
            constant(word, ConstTag::SimdShrImm, Encoding::Arm, None, Some(8), DataType::None),
            Some((3, 0))
        );
        // VSHL.I16 with imm6 = 0b010101: shift = 21 - 16 = 5
        let word = 0xF295_0510;
        assert_eq!(
            constant(word, ConstTag::SimdShlImm, Encoding::Arm, None, Some(16), DataType::None),
            Some((5, 0))
        );
        assert_eq!(constant(word, ConstTag::SimdShlImm, Encoding::Arm, None, None, DataType::None), None);
    }

    #[test]
    fn vcvt_fraction_bits() {
        // sx = 1, imm4:i = 0b0001_1: 32 - 3
        let word = (1 << 7) | (1 << 5) | 0b0001;
        assert_eq!(arm(word, ConstTag::VcvtFbits), Some((29, 0)));
    }

    #[test]
    fn simd_modified_immediate() {
        // VMOV.I32 D0, #0x00AB0000: cmode = 0100, imm8 = 0xAB
        let word = 0xF282_0410 | (1 << 24) | 0xB;
        assert_eq!(
            constant(word, ConstTag::SimdModImm, Encoding::Arm, None, None, DataType::I32),
            Some((0x00AB_0000_00AB_0000, 0))
        );
    }

    #[test]
    #[should_panic(expected = "implies I32")]
    fn simd_modified_immediate_type_mismatch() {
        let word = 0xF282_0410;
        let _ = constant(word, ConstTag::SimdModImm, Encoding::Arm, None, None, DataType::I8);
    }

    #[test]
    fn vfp_immediate() {
        // VMOV.F32 S0, #1.0: imm4H = 0111, imm4L = 0000
        let (value, _) = arm(0xEEB7_0A00, ConstTag::VfpImm32).unwrap();
        assert_eq!(f32::from_bits(value as u32), 1.0);
    }

    #[test]
    fn thumbee_negative_offset() {
        // LDR R0, [R1, #-8]
        let word = 0b1100_1000_1000_1000;
        let (value, _) = constant(word, ConstTag::EeImm3Neg, Encoding::Thumb16, None, None, DataType::None).unwrap();
        assert_eq!(value as i64, -8);
    }
}
