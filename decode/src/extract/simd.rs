//! # SIMD and VFP Qualifiers
//!
//! Element sizes, data types, scalar indices and the structure load/store
//! fields. These only exist in the ARM layout: Thumb encodings of the same
//! instructions are rewritten into ARM layout before they get here.
//!
//! Several fields are found by bit position lookups rather than plain slices:
//!
//! ```text
//!   shift by immediate  L:imm6<5:3>   1xxx -> 64, 01xx -> 32, 001x -> 16, 0001 -> 8
//!   VDUP (scalar)       imm4          xxx1 -> 8,  xx10 -> 16, x100 -> 32
//!   VMOV (scalar)       opc1:opc2     1xxx -> 8,  0xx1 -> 16, 0x00 -> 32
//! ```

use super::Layout;
use crate::attrs::{AlignTag, DataType, DtTag, Encoding, EsizeTag, IncrTag, IndexTag, NregsTag};
use crate::bitwise::{highest_set_bit, lowest_set_bit, Bits};

/// `8 << size`.
const fn sized(size: u32) -> u8 {
    8 << (size & 0b11)
}

/// Element size in bits.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn element_size(word: u32, tag: EsizeTag, enc: Encoding) -> Option<u8> {
    let layout = match tag {
        EsizeTag::None | EsizeTag::E8 | EsizeTag::E16 | EsizeTag::E32 | EsizeTag::E64 => Layout::Any,
        _ => Layout::Arm,
    };
    layout.check("extract_esize", tag, enc);

    match tag {
        EsizeTag::None => None,
        EsizeTag::E8 => Some(8),
        EsizeTag::E16 => Some(16),
        EsizeTag::E32 => Some(32),
        EsizeTag::E64 => Some(64),
        EsizeTag::Size20 => Some(sized(word.get_bits(20..=21))),
        EsizeTag::Size18 => Some(sized(word.get_bits(18..=19))),
        EsizeTag::Size18Wide => match word.get_bits(18..=19) {
            0b11 => None,
            size => Some(sized(size + 1)),
        },
        EsizeTag::Size6 => Some(sized(word.get_bits(6..=7))),
        EsizeTag::Size10 => Some(sized(word.get_bits(10..=11))),
        EsizeTag::ImmL6 => highest_set_bit(word.join(7..=7, 19..=21)).map(|bit| sized(u32::from(bit))),
        EsizeTag::Dup19_16 => match lowest_set_bit(word.get_bits(16..=19)) {
            Some(bit) if bit < 3 => Some(8 << bit),
            _ => None,
        },
        EsizeTag::MovScalar => {
            let opc = word.join(21..=22, 5..=6);
            if opc & 0b1000 != 0 {
                Some(8)
            } else if opc & 0b0001 != 0 {
                Some(16)
            } else if opc & 0b0010 == 0 {
                Some(32)
            } else {
                None
            }
        }
        EsizeTag::DupCore => match (word.get_bit(22), word.get_bit(5)) {
            (false, false) => Some(32),
            (false, true) => Some(16),
            (true, false) => Some(8),
            (true, true) => None,
        },
        EsizeTag::VfpSz8 => Some(if word.get_bit(8) { 64 } else { 32 }),
        EsizeTag::SimdSz20 => Some(if word.get_bit(20) { 16 } else { 32 }),
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Signed,
    Unsigned,
    Int,
    Untyped,
    Float,
}

fn typed(kind: Kind, esize: Option<u8>) -> DataType {
    match (kind, esize) {
        (Kind::Signed, Some(8)) => DataType::S8,
        (Kind::Signed, Some(16)) => DataType::S16,
        (Kind::Signed, Some(32)) => DataType::S32,
        (Kind::Signed, Some(64)) => DataType::S64,
        (Kind::Unsigned, Some(8)) => DataType::U8,
        (Kind::Unsigned, Some(16)) => DataType::U16,
        (Kind::Unsigned, Some(32)) => DataType::U32,
        (Kind::Unsigned, Some(64)) => DataType::U64,
        (Kind::Int, Some(8)) => DataType::I8,
        (Kind::Int, Some(16)) => DataType::I16,
        (Kind::Int, Some(32)) => DataType::I32,
        (Kind::Int, Some(64)) => DataType::I64,
        (Kind::Untyped, Some(8)) => DataType::B8,
        (Kind::Untyped, Some(16)) => DataType::B16,
        (Kind::Untyped, Some(32)) => DataType::B32,
        (Kind::Untyped, Some(64)) => DataType::B64,
        (Kind::Float, Some(16)) => DataType::F16,
        (Kind::Float, Some(32)) => DataType::F32,
        (Kind::Float, Some(64)) => DataType::F64,
        _ => DataType::None,
    }
}

/// Data type qualifier. Size dependent tags use `esize`.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn data_type(word: u32, tag: DtTag, enc: Encoding, esize: Option<u8>) -> DataType {
    let layout = match tag {
        DtTag::None | DtTag::Fixed(_) | DtTag::Int | DtTag::Untyped | DtTag::Signed | DtTag::Float => {
            Layout::Any
        }
        _ => Layout::Arm,
    };
    layout.check("extract_data_type", tag, enc);

    let signed_if = |bit: bool| if bit { Kind::Signed } else { Kind::Unsigned };
    let unsigned_if = |bit: bool| if bit { Kind::Unsigned } else { Kind::Signed };

    match tag {
        DtTag::None => DataType::None,
        DtTag::Fixed(dt) => dt,
        DtTag::SignedU24 => typed(unsigned_if(word.get_bit(24)), esize),
        DtTag::Int => typed(Kind::Int, esize),
        DtTag::Untyped => typed(Kind::Untyped, esize),
        DtTag::Signed => typed(Kind::Signed, esize),
        DtTag::Float => typed(Kind::Float, esize),
        DtTag::VfpSz8 => {
            if word.get_bit(8) {
                DataType::F64
            } else {
                DataType::F32
            }
        }
        DtTag::IntBit16 => typed(signed_if(word.get_bit(16)), Some(32)),
        DtTag::IntBit7 => typed(signed_if(word.get_bit(7)), Some(32)),
        DtTag::UnsignedBit6 => typed(unsigned_if(word.get_bit(6)), esize),
        DtTag::UnsignedBit7 => typed(unsigned_if(word.get_bit(7)), esize),
        DtTag::SignedU23 => typed(unsigned_if(word.get_bit(23)), esize),
        DtTag::IntOrFloat10 => {
            if word.get_bit(10) {
                DataType::F32
            } else {
                typed(Kind::Signed, esize)
            }
        }
        DtTag::U32OrFloat8 => {
            if word.get_bit(8) {
                DataType::F32
            } else {
                DataType::U32
            }
        }
        DtTag::VfpFixed => {
            let size = if word.get_bit(7) { 32 } else { 16 };
            typed(unsigned_if(word.get_bit(16)), Some(size))
        }
        DtTag::SimdFixed24 => typed(unsigned_if(word.get_bit(24)), Some(32)),
        // op: 00 F32.S32, 01 F32.U32, 10 S32.F32, 11 U32.F32
        DtTag::SimdCvtDst => match word.get_bits(7..=8) {
            0b00 | 0b01 => DataType::F32,
            0b10 => DataType::S32,
            _ => DataType::U32,
        },
        DtTag::SimdCvtSrc => match word.get_bits(7..=8) {
            0b00 => DataType::S32,
            0b01 => DataType::U32,
            _ => DataType::F32,
        },
    }
}

/// Scalar or lane index.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn index(word: u32, tag: IndexTag, enc: Encoding, esize: Option<u8>) -> Option<u8> {
    if tag != IndexTag::None {
        Layout::Arm.check("extract_index", tag, enc);
    }

    let index = match tag {
        IndexTag::None => return None,
        IndexTag::Scalar => match esize? {
            16 => word.join(5..=5, 3..=3),
            _ => u32::from(word.get_bit(5)),
        },
        IndexTag::Dup19_16 => {
            let imm4 = word.get_bits(16..=19);
            let low = lowest_set_bit(imm4)?;
            imm4 >> (low + 1)
        }
        IndexTag::MovScalar => match element_size(word, EsizeTag::MovScalar, enc)? {
            8 => word.join(21..=21, 5..=6),
            16 => word.join(21..=21, 6..=6),
            _ => u32::from(word.get_bit(21)),
        },
        IndexTag::Lane => match word.get_bits(10..=11) {
            0b00 => word.get_bits(5..=7),
            0b01 => word.get_bits(6..=7),
            _ => u32::from(word.get_bit(7)),
        },
    };

    Some(index as u8)
}

/// Number of registers in a SIMD/VFP register list.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn register_count(word: u32, tag: NregsTag, enc: Encoding) -> Option<u8> {
    let layout = match tag {
        NregsTag::None | NregsTag::Fixed(_) => Layout::Any,
        _ => Layout::Arm,
    };
    layout.check("extract_nregs", tag, enc);

    match tag {
        NregsTag::None => None,
        NregsTag::Fixed(count) => Some(count),
        NregsTag::VldType => match word.get_bits(8..=11) {
            0b0111 => Some(1),
            0b1010 | 0b1000 | 0b1001 => Some(2),
            0b0110 | 0b0100 | 0b0101 => Some(3),
            0b0010 | 0b0011 | 0b0000 | 0b0001 => Some(4),
            _ => None,
        },
        NregsTag::Len8_9 => Some(word.get_bits(8..=9) as u8 + 1),
        NregsTag::VfpImm8 => Some(word.get_bits(0..=7) as u8),
        NregsTag::VfpImm8Half => Some((word.get_bits(0..=7) / 2) as u8),
        NregsTag::AllLanesT5 => Some(if word.get_bit(5) { 2 } else { 1 }),
    }
}

/// Register spacing of a structure load or store.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn increment(word: u32, tag: IncrTag, enc: Encoding) -> Option<u8> {
    if tag != IncrTag::None {
        Layout::Arm.check("extract_incr", tag, enc);
    }

    match tag {
        IncrTag::None => None,
        IncrTag::VldType => match word.get_bits(8..=11) {
            0b1001 | 0b0101 | 0b0001 => Some(2),
            _ => Some(1),
        },
        IncrTag::Lane => {
            let spaced = match word.get_bits(10..=11) {
                0b00 => false,
                0b01 => word.get_bit(5),
                _ => word.get_bit(6),
            };
            Some(if spaced { 2 } else { 1 })
        }
        IncrTag::AllLanesT5 => Some(if word.get_bit(5) { 2 } else { 1 }),
    }
}

/// Alignment in bytes requested by the address qualifier, `None` when the
/// instruction leaves the address unchecked.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn alignment(word: u32, tag: AlignTag, enc: Encoding, esize: Option<u8>) -> Option<u16> {
    if tag != AlignTag::None {
        Layout::Arm.check("extract_align", tag, enc);
    }

    let bytes = u16::from(esize.unwrap_or(8) / 8);
    match tag {
        AlignTag::None => None,
        AlignTag::Multi5_4 => match word.get_bits(4..=5) {
            0b00 => None,
            align => Some(4 << align),
        },
        AlignTag::Lane(count) => {
            let index_align = word.get_bits(4..=7);
            match (count, word.get_bits(10..=11)) {
                (1, 0b01) if index_align & 0b1 != 0 => Some(2),
                (1, 0b10) if index_align & 0b11 == 0b11 => Some(4),
                (2, _) if index_align & 0b1 != 0 => Some(2 * bytes),
                (4, 0b10) => match index_align & 0b11 {
                    0b01 => Some(8),
                    0b10 => Some(16),
                    _ => None,
                },
                (4, _) if index_align & 0b1 != 0 => Some(4 * bytes),
                _ => None,
            }
        }
        AlignTag::AllLanes(count) => {
            if !word.get_bit(4) {
                return None;
            }
            match (count, word.get_bits(6..=7)) {
                (1, _) => Some(bytes),
                (2, _) => Some(2 * bytes),
                (4, 0b00) => Some(4),
                (4, 0b01 | 0b10) => Some(8),
                (4, _) => Some(16),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn esize(word: u32, tag: EsizeTag) -> Option<u8> {
        element_size(word, tag, Encoding::Arm)
    }

    #[test]
    fn size_fields() {
        assert_eq!(esize(0b01 << 20, EsizeTag::Size20), Some(16));
        assert_eq!(esize(0b10 << 18, EsizeTag::Size18), Some(32));
        assert_eq!(esize(0b11 << 6, EsizeTag::Size6), Some(64));
        assert_eq!(esize(0, EsizeTag::Size10), Some(8));
    }

    #[test]
    fn shift_element_size_from_highest_bit() {
        assert_eq!(esize(1 << 7, EsizeTag::ImmL6), Some(64));
        assert_eq!(esize(0b100 << 19, EsizeTag::ImmL6), Some(32));
        assert_eq!(esize(0b011 << 19, EsizeTag::ImmL6), Some(16));
        assert_eq!(esize(0b001 << 19, EsizeTag::ImmL6), Some(8));
        assert_eq!(esize(0, EsizeTag::ImmL6), None);
    }

    #[test]
    fn vdup_scalar() {
        // imm4 = 0b0110: 16-bit elements, index 1
        let word = 0b0110 << 16;
        assert_eq!(esize(word, EsizeTag::Dup19_16), Some(16));
        assert_eq!(index(word, IndexTag::Dup19_16, Encoding::Arm, Some(16)), Some(1));
        // imm4 = 0b1011: 8-bit elements, index 5
        let word = 0b1011 << 16;
        assert_eq!(esize(word, EsizeTag::Dup19_16), Some(8));
        assert_eq!(index(word, IndexTag::Dup19_16, Encoding::Arm, Some(8)), Some(5));
        assert_eq!(esize(0b1000 << 16, EsizeTag::Dup19_16), None);
    }

    #[test]
    fn vmov_scalar() {
        // opc1 = 1x: 8-bit, index = opc1<0>:opc2
        let word = (0b11 << 21) | (0b10 << 5);
        assert_eq!(esize(word, EsizeTag::MovScalar), Some(8));
        assert_eq!(index(word, IndexTag::MovScalar, Encoding::Arm, Some(8)), Some(0b110));
        // opc1 = 01, opc2 = 00: 32-bit, index 1
        let word = 0b01 << 21;
        assert_eq!(esize(word, EsizeTag::MovScalar), Some(32));
        assert_eq!(index(word, IndexTag::MovScalar, Encoding::Arm, Some(32)), Some(1));
        // opc2 = 10 with opc1<1> clear is undefined
        assert_eq!(esize(0b10 << 5, EsizeTag::MovScalar), None);
    }

    #[test]
    fn data_types_follow_u_bit() {
        assert_eq!(data_type(1 << 24, DtTag::SignedU24, Encoding::Arm, Some(16)), DataType::U16);
        assert_eq!(data_type(0, DtTag::SignedU24, Encoding::Arm, Some(8)), DataType::S8);
        assert_eq!(data_type(0, DtTag::Int, Encoding::Arm, None), DataType::None);
        assert_eq!(data_type(0, DtTag::Float, Encoding::Arm, Some(32)), DataType::F32);
    }

    #[test]
    fn vcvt_types() {
        let to_float = 0b01 << 7;
        assert_eq!(data_type(to_float, DtTag::SimdCvtDst, Encoding::Arm, None), DataType::F32);
        assert_eq!(data_type(to_float, DtTag::SimdCvtSrc, Encoding::Arm, None), DataType::U32);
        let to_int = 0b10 << 7;
        assert_eq!(data_type(to_int, DtTag::SimdCvtDst, Encoding::Arm, None), DataType::S32);
        assert_eq!(data_type(to_int, DtTag::SimdCvtSrc, Encoding::Arm, None), DataType::F32);
        // U = 1, sx = 0
        assert_eq!(data_type(1 << 16, DtTag::VfpFixed, Encoding::Arm, None), DataType::U16);
    }

    #[test]
    fn multiple_structure_fields() {
        // VLD2 with type = 1001: two registers spaced by two, align = 64 bits
        let word = (0b1001 << 8) | (0b01 << 4);
        assert_eq!(register_count(word, NregsTag::VldType, Encoding::Arm), Some(2));
        assert_eq!(increment(word, IncrTag::VldType, Encoding::Arm), Some(2));
        assert_eq!(alignment(word, AlignTag::Multi5_4, Encoding::Arm, Some(8)), Some(8));
        assert_eq!(alignment(0b0111 << 8, AlignTag::Multi5_4, Encoding::Arm, Some(8)), None);
    }

    #[test]
    fn single_lane_fields() {
        // VLD1.32 {D0[1]}, [R0:32]: size = 10, index_align = 1011
        let word = (0b10 << 10) | (0b1011 << 4);
        assert_eq!(index(word, IndexTag::Lane, Encoding::Arm, Some(32)), Some(1));
        assert_eq!(alignment(word, AlignTag::Lane(1), Encoding::Arm, Some(32)), Some(4));
        // VLD4.32 with index_align<1:0> = 10 aligns to 128 bits
        let word = (0b10 << 10) | (0b0010 << 4);
        assert_eq!(alignment(word, AlignTag::Lane(4), Encoding::Arm, Some(32)), Some(16));
        // VLD2.16 with index_align<1> set spaces the registers
        let word = (0b01 << 10) | (0b0010 << 4);
        assert_eq!(increment(word, IncrTag::Lane, Encoding::Arm), Some(2));
        assert_eq!(alignment(word, AlignTag::Lane(2), Encoding::Arm, Some(16)), None);
    }

    #[test]
    fn all_lanes_fields() {
        // VLD1.16 {D0[], D1[]}, [R0:16]
        let word = (0b01 << 6) | (1 << 5) | (1 << 4);
        assert_eq!(register_count(word, NregsTag::AllLanesT5, Encoding::Arm), Some(2));
        assert_eq!(alignment(word, AlignTag::AllLanes(1), Encoding::Arm, Some(16)), Some(2));
        assert_eq!(alignment(word & !(1 << 4), AlignTag::AllLanes(1), Encoding::Arm, Some(16)), None);
    }

    #[test]
    #[should_panic(expected = "extract_esize")]
    fn simd_fields_need_arm_layout() {
        let _ = element_size(0, EsizeTag::Size20, Encoding::Thumb32);
    }
}
