//! # Modified Immediates
//!
//! Several encodings squeeze a 32 or 64 bit constant into 8 to 13 bits.
//!
//! | Encoding          | Source bits             | Expansion                          |
//! |-------------------|-------------------------|------------------------------------|
//! | ARM data processing | `rotate:imm8`         | `imm8 ROR (2 * rotate)`            |
//! | Thumb-2 data processing | `i:imm3:imm8`     | byte patterns or rotated `1bcdefgh`|
//! | Advanced SIMD     | `op`, `cmode`, `abcdefgh` | per `cmode` table, 64 bit        |
//! | VFP               | `abcdefgh`              | small float, sign/exponent/fraction|

use crate::attrs::DataType;

/// ARM modified immediate, returns the value and the rotation in bits.
#[must_use]
pub const fn arm_expand_imm(imm12: u32) -> (u32, u8) {
    let rotation = ((imm12 >> 8) & 0xF) * 2;
    ((imm12 & 0xFF).rotate_right(rotation), rotation as u8)
}

/// Thumb-2 modified immediate (`ThumbExpandImm`).
///
/// ```text
/// i:imm3:a   value
/// 0000x      00000000 00000000 00000000 abcdefgh
/// 0001x      00000000 abcdefgh 00000000 abcdefgh
/// 0010x      abcdefgh 00000000 abcdefgh 00000000
/// 0011x      abcdefgh abcdefgh abcdefgh abcdefgh
/// other      1bcdefgh rotated right by i:imm3:a
/// ```
#[must_use]
pub const fn thumb_expand_imm(imm12: u32) -> u32 {
    let imm8 = imm12 & 0xFF;

    if (imm12 >> 10) & 0b11 == 0 {
        match (imm12 >> 8) & 0b11 {
            0 => imm8,
            1 => (imm8 << 16) | imm8,
            2 => (imm8 << 24) | (imm8 << 8),
            _ => imm8 * 0x0101_0101,
        }
    } else {
        let unrotated = 0x80 | (imm12 & 0x7F);
        unrotated.rotate_right((imm12 >> 7) & 0x1F)
    }
}

/// `AdvSIMDExpandImm`, returns the 64-bit value and the data type the
/// `cmode`/`op` pair implies. `None` for the undefined `op = 1, cmode = 1111`.
#[must_use]
pub const fn simd_expand_imm(op: bool, cmode: u32, imm8: u32) -> Option<(u64, DataType)> {
    let imm8 = (imm8 & 0xFF) as u64;

    let (imm32, dt) = match (cmode >> 1) & 0b111 {
        0b000 => (imm8, DataType::I32),
        0b001 => (imm8 << 8, DataType::I32),
        0b010 => (imm8 << 16, DataType::I32),
        0b011 => (imm8 << 24, DataType::I32),
        0b100 => (imm8 | (imm8 << 16), DataType::I16),
        0b101 => ((imm8 << 8) | (imm8 << 24), DataType::I16),
        0b110 => {
            if cmode & 1 == 0 {
                ((imm8 << 8) | 0xFF, DataType::I32)
            } else {
                ((imm8 << 16) | 0xFFFF, DataType::I32)
            }
        }
        _ => {
            if cmode & 1 == 0 {
                if op {
                    let mut value = 0_u64;
                    let mut byte = 0;
                    while byte < 8 {
                        if (imm8 >> byte) & 1 == 1 {
                            value |= 0xFF_u64 << (byte * 8);
                        }
                        byte += 1;
                    }
                    return Some((value, DataType::I64));
                }
                return Some((imm8 * 0x0101_0101_0101_0101, DataType::I8));
            }
            if op {
                return None;
            }
            (vfp_expand_imm32(imm8 as u32) as u64, DataType::F32)
        }
    };

    Some(((imm32 << 32) | imm32, dt))
}

/// `VFPExpandImm` for single precision.
///
/// ```text
/// abcdefgh -> a : NOT(b) : bbbbb : cd : efgh : 0 * 19
/// ```
#[must_use]
pub const fn vfp_expand_imm32(imm8: u32) -> u32 {
    let sign = (imm8 >> 7) & 1;
    let b = (imm8 >> 6) & 1;
    let replicated = if b == 1 { 0b1_1111 } else { 0 };
    let exponent = ((b ^ 1) << 7) | (replicated << 2) | ((imm8 >> 4) & 0b11);
    let fraction = (imm8 & 0xF) << 19;

    (sign << 31) | (exponent << 23) | fraction
}

/// `VFPExpandImm` for double precision.
#[must_use]
pub const fn vfp_expand_imm64(imm8: u32) -> u64 {
    let imm8 = imm8 as u64;
    let sign = (imm8 >> 7) & 1;
    let b = (imm8 >> 6) & 1;
    let replicated = if b == 1 { 0xFF } else { 0 };
    let exponent = ((b ^ 1) << 10) | (replicated << 2) | ((imm8 >> 4) & 0b11);
    let fraction = (imm8 & 0xF) << 48;

    (sign << 63) | (exponent << 52) | fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arm_rotated_immediate() {
        assert_eq!(arm_expand_imm(0x0FF), (0xFF, 0));
        // 0xFF rotated right by 4
        assert_eq!(arm_expand_imm(0x2FF), (0xF000_000F, 4));
        // 0xFF rotated right by 8
        assert_eq!(arm_expand_imm(0x4FF), (0xFF00_0000, 8));
        assert_eq!(arm_expand_imm(0xF01), (0x4, 30));
    }

    #[test]
    fn thumb_expanded_immediate() {
        assert_eq!(thumb_expand_imm(0x0AB), 0x0000_00AB);
        assert_eq!(thumb_expand_imm(0x1AB), 0x00AB_00AB);
        assert_eq!(thumb_expand_imm(0x2AB), 0xAB00_AB00);
        assert_eq!(thumb_expand_imm(0x3AB), 0xABAB_ABAB);
        // i:imm3:a = 01000 -> 0x80 | bcdefgh rotated by 8
        assert_eq!(thumb_expand_imm(0x400), 0x8000_0000);
        assert_eq!(thumb_expand_imm(0x47F), 0xFF00_0000);
    }

    #[test]
    fn simd_expanded_immediate() {
        assert_eq!(
            simd_expand_imm(false, 0b0010, 0xAB),
            Some((0x0000_AB00_0000_AB00, DataType::I32))
        );
        assert_eq!(
            simd_expand_imm(false, 0b1000, 0x12),
            Some((0x0012_0012_0012_0012, DataType::I16))
        );
        assert_eq!(
            simd_expand_imm(false, 0b1101, 0x12),
            Some((0x0012_FFFF_0012_FFFF, DataType::I32))
        );
        assert_eq!(
            simd_expand_imm(false, 0b1110, 0x5A),
            Some((0x5A5A_5A5A_5A5A_5A5A, DataType::I8))
        );
        assert_eq!(
            simd_expand_imm(true, 0b1110, 0b1000_0001),
            Some((0xFF00_0000_0000_00FF, DataType::I64))
        );
        assert_eq!(
            simd_expand_imm(false, 0b1111, 0x70),
            Some((0x3F80_0000_3F80_0000, DataType::F32))
        );
        assert_eq!(simd_expand_imm(true, 0b1111, 0x70), None);
    }

    #[test]
    fn vfp_expanded_immediate() {
        assert_eq!(f32::from_bits(vfp_expand_imm32(0x70)), 1.0);
        assert_eq!(f32::from_bits(vfp_expand_imm32(0x00)), 2.0);
        assert_eq!(f32::from_bits(vfp_expand_imm32(0xF0)), -1.0);
        assert_eq!(f32::from_bits(vfp_expand_imm32(0x60)), 0.5);
        assert_eq!(f64::from_bits(vfp_expand_imm64(0x70)), 1.0);
        assert_eq!(f64::from_bits(vfp_expand_imm64(0x08)), 3.0);
    }
}
