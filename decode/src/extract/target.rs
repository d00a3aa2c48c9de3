//! # Branch Targets
//!
//! The PC an offset is added to reads ahead of the instruction:
//!
//! | State | PC          | Literal base     |
//! |-------|-------------|------------------|
//! | ARM   | address + 8 | `Align(PC, 4)`   |
//! | Thumb | address + 4 | `Align(PC, 4)`   |
//!
//! The 32-bit Thumb branches scatter their offset over both halfwords and
//! store the two bits below the sign as `J1`/`J2`, flipped against `S`:
//!
//! ```text
//!   hw1: 11110 S imm10              hw2: 1 J1 . J2 imm11
//!   offset = S : NOT(J1 XOR S) : NOT(J2 XOR S) : imm10 : imm11 : 0
//! ```

use super::Layout;
use crate::attrs::{Encoding, TargetTag};
use crate::bitwise::Bits;

const fn align4(address: u32) -> u32 {
    address & !0b11
}

const fn offset(base: u32, offset: i32) -> u32 {
    base.wrapping_add(offset as u32)
}

/// `I1:I2` of a 32-bit Thumb branch.
fn thumb_i1_i2(word: u32) -> u32 {
    let s = word.get_bit(26);
    let i1 = !(word.get_bit(13) ^ s);
    let i2 = !(word.get_bit(11) ^ s);
    (u32::from(i1) << 1) | u32::from(i2)
}

/// Absolute target address of a branch or literal load at `address`.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn target(word: u32, address: u32, tag: TargetTag, enc: Encoding) -> Option<u32> {
    let layout = match tag {
        TargetTag::None => Layout::Any,
        TargetTag::Arm24 | TargetTag::ArmBlx | TargetTag::ArmLit12 => Layout::Arm,
        TargetTag::T16Cond8 | TargetTag::T16Imm11 | TargetTag::T16Cbz | TargetTag::T16Lit8 => Layout::Thumb16,
        TargetTag::T32Cond20 | TargetTag::T32Imm24 | TargetTag::T32Blx24 | TargetTag::T32Lit12 => Layout::Thumb32,
    };
    layout.check("extract_target", tag, enc);

    let arm_pc = address.wrapping_add(8);
    let thumb_pc = address.wrapping_add(4);

    let target = match tag {
        TargetTag::None => return None,
        TargetTag::Arm24 => offset(arm_pc, word.get_bits(0..=23).sign_extended(24) << 2),
        TargetTag::ArmBlx => {
            let imm = (word.get_bits(0..=23) << 2) | (u32::from(word.get_bit(24)) << 1);
            offset(arm_pc, imm.sign_extended(26))
        }
        TargetTag::ArmLit12 | TargetTag::T32Lit12 => {
            let pc = if tag == TargetTag::ArmLit12 { arm_pc } else { thumb_pc };
            let imm12 = word.get_bits(0..=11);
            if word.get_bit(23) {
                align4(pc).wrapping_add(imm12)
            } else {
                align4(pc).wrapping_sub(imm12)
            }
        }
        TargetTag::T16Cond8 => offset(thumb_pc, word.get_bits(0..=7).sign_extended(8) << 1),
        TargetTag::T16Imm11 => offset(thumb_pc, word.get_bits(0..=10).sign_extended(11) << 1),
        TargetTag::T16Cbz => thumb_pc.wrapping_add(word.join(9..=9, 3..=7) << 1),
        TargetTag::T16Lit8 => align4(thumb_pc).wrapping_add(word.get_bits(0..=7) * 4),
        TargetTag::T32Cond20 => {
            let imm = (u32::from(word.get_bit(26)) << 20)
                | (u32::from(word.get_bit(11)) << 19)
                | (u32::from(word.get_bit(13)) << 18)
                | (word.get_bits(16..=21) << 12)
                | (word.get_bits(0..=10) << 1);
            offset(thumb_pc, imm.sign_extended(21))
        }
        TargetTag::T32Imm24 => {
            let imm = (u32::from(word.get_bit(26)) << 24)
                | (thumb_i1_i2(word) << 22)
                | (word.get_bits(16..=25) << 12)
                | (word.get_bits(0..=10) << 1);
            offset(thumb_pc, imm.sign_extended(25))
        }
        TargetTag::T32Blx24 => {
            let imm = (u32::from(word.get_bit(26)) << 24)
                | (thumb_i1_i2(word) << 22)
                | (word.get_bits(16..=25) << 12)
                | (word.get_bits(1..=10) << 2);
            offset(align4(thumb_pc), imm.sign_extended(25))
        }
    };

    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arm_branch() {
        // B with imm24 = 2: address + 8 + 8
        assert_eq!(target(0xEA00_0002, 0x1000, TargetTag::Arm24, Encoding::Arm), Some(0x1010));
        // B . (imm24 = -2)
        assert_eq!(target(0xEAFF_FFFE, 0x1000, TargetTag::Arm24, Encoding::Arm), Some(0x1000));
        // Wraps around the address space
        assert_eq!(target(0xEAFF_FFFB, 0x0, TargetTag::Arm24, Encoding::Arm), Some(0xFFFF_FFF4));
    }

    #[test]
    fn arm_blx_halfword_bit() {
        // BLX with H = 1, imm24 = 0: address + 8 + 2
        assert_eq!(target(0xFB00_0000, 0x1000, TargetTag::ArmBlx, Encoding::Arm), Some(0x100A));
    }

    #[test]
    fn literal_base_is_aligned() {
        // LDR R0, [PC, #-4] at 0x1004: Align(0x100C, 4) - 4
        assert_eq!(target(0xE51F_0004, 0x1004, TargetTag::ArmLit12, Encoding::Arm), Some(0x1008));
        // LDR R0, [PC, #4] at 0x1002: Align(0x1006, 4) + 4
        assert_eq!(target(0x4801, 0x1002, TargetTag::T16Lit8, Encoding::Thumb16), Some(0x1008));
    }

    #[test]
    fn thumb_short_branches() {
        // B . (imm11 = -2)
        assert_eq!(target(0xE7FE, 0x2000, TargetTag::T16Imm11, Encoding::Thumb16), Some(0x2000));
        // BEQ with imm8 = 4
        assert_eq!(target(0xD004, 0x2000, TargetTag::T16Cond8, Encoding::Thumb16), Some(0x200C));
        // CBZ R0 with i = 1, imm5 = 0: forward 64
        assert_eq!(target(0xB300, 0x2000, TargetTag::T16Cbz, Encoding::Thumb16), Some(0x2044));
    }

    #[test]
    fn thumb_bl_uses_j1_j2() {
        // BL with S = 0, J1 = J2 = 1: I1 = I2 = 0, offset 0
        assert_eq!(target(0xF000_F800, 0x3000, TargetTag::T32Imm24, Encoding::Thumb32), Some(0x3004));
        // BL with S = 1, J1 = J2 = 1: I1 = I2 = 1, offset -2
        assert_eq!(target(0xF7FF_FFFF, 0x3000, TargetTag::T32Imm24, Encoding::Thumb32), Some(0x3002));
        // BL with S = 0, J1 = J2 = 0: I1 = I2 = 1, offset 0xC00000
        assert_eq!(target(0xF000_D000, 0x3000, TargetTag::T32Imm24, Encoding::Thumb32), Some(0x00C0_3004));
    }

    #[test]
    fn thumb_blx_aligns_pc() {
        // BLX at 0x3002 with offset 0: Align(0x3006, 4)
        assert_eq!(target(0xF000_E800, 0x3002, TargetTag::T32Blx24, Encoding::Thumb32), Some(0x3004));
    }

    #[test]
    fn thumb_conditional_wide_branch() {
        // BEQ.W with S = 1, J1 = J2 = 1, all ones: offset -2
        assert_eq!(target(0xF43F_AFFF, 0x4000, TargetTag::T32Cond20, Encoding::Thumb32), Some(0x4002));
        // S = 0, J1 = 1, J2 = 0: offset 1 << 18
        assert_eq!(target(0xF000_A000, 0x4000, TargetTag::T32Cond20, Encoding::Thumb32), Some(0x0004_4004));
    }
}
