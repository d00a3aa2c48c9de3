use super::Layout;
use crate::attrs::{Encoding, RegTag};
use crate::bitwise::Bits;
use crate::info::{RegClass, Register};

const fn reg(class: RegClass, index: u32) -> Register {
    Register {
        class,
        index: index as u8,
    }
}

/// Reads the register named by `tag`. `esize` selects the scalar layout.
///
/// # Panics
///
/// Panics when `tag` does not belong to the `enc` layout.
#[must_use]
pub fn register(word: u32, tag: RegTag, enc: Encoding, esize: Option<u8>) -> Option<Register> {
    let layout = match tag {
        RegTag::None | RegTag::Implied(_) => Layout::Any,
        RegTag::T0_2
        | RegTag::T3_5
        | RegTag::T6_8
        | RegTag::T8_10
        | RegTag::THi0_2
        | RegTag::T3_6 => Layout::Thumb16,
        RegTag::R0_3
        | RegTag::R8_11
        | RegTag::R12_15
        | RegTag::R16_19
        | RegTag::Cr0_3
        | RegTag::Cr12_15
        | RegTag::Cr16_19 => Layout::Wide,
        RegTag::S12_22
        | RegTag::S16_7
        | RegTag::S0_5
        | RegTag::S0_5Next
        | RegTag::D22_12
        | RegTag::D7_16
        | RegTag::D5_0
        | RegTag::Q22_12
        | RegTag::Q7_16
        | RegTag::Q5_0
        | RegTag::DScalar => Layout::Arm,
    };
    layout.check("extract_register", tag, enc);

    let register = match tag {
        RegTag::None => return None,
        RegTag::R0_3 => reg(RegClass::Core, word.get_bits(0..=3)),
        RegTag::R8_11 => reg(RegClass::Core, word.get_bits(8..=11)),
        RegTag::R12_15 => reg(RegClass::Core, word.get_bits(12..=15)),
        RegTag::R16_19 => reg(RegClass::Core, word.get_bits(16..=19)),
        RegTag::T0_2 => reg(RegClass::Core, word.get_bits(0..=2)),
        RegTag::T3_5 => reg(RegClass::Core, word.get_bits(3..=5)),
        RegTag::T6_8 => reg(RegClass::Core, word.get_bits(6..=8)),
        RegTag::T8_10 => reg(RegClass::Core, word.get_bits(8..=10)),
        RegTag::THi0_2 => reg(RegClass::Core, word.join(7..=7, 0..=2)),
        RegTag::T3_6 => reg(RegClass::Core, word.get_bits(3..=6)),
        RegTag::Implied(index) => reg(RegClass::Core, u32::from(index)),
        RegTag::Cr0_3 => reg(RegClass::Coproc, word.get_bits(0..=3)),
        RegTag::Cr12_15 => reg(RegClass::Coproc, word.get_bits(12..=15)),
        RegTag::Cr16_19 => reg(RegClass::Coproc, word.get_bits(16..=19)),
        // Singles put the extra bit at the bottom, doubles at the top.
        RegTag::S12_22 => reg(RegClass::Single, word.join(12..=15, 22..=22)),
        RegTag::S16_7 => reg(RegClass::Single, word.join(16..=19, 7..=7)),
        RegTag::S0_5 => reg(RegClass::Single, word.join(0..=3, 5..=5)),
        RegTag::S0_5Next => reg(RegClass::Single, (word.join(0..=3, 5..=5) + 1) & 0x1F),
        RegTag::D22_12 => reg(RegClass::Double, word.join(22..=22, 12..=15)),
        RegTag::D7_16 => reg(RegClass::Double, word.join(7..=7, 16..=19)),
        RegTag::D5_0 => reg(RegClass::Double, word.join(5..=5, 0..=3)),
        RegTag::Q22_12 => reg(RegClass::Quad, word.join(22..=22, 12..=15) >> 1),
        RegTag::Q7_16 => reg(RegClass::Quad, word.join(7..=7, 16..=19) >> 1),
        RegTag::Q5_0 => reg(RegClass::Quad, word.join(5..=5, 0..=3) >> 1),
        RegTag::DScalar => {
            if esize == Some(16) {
                reg(RegClass::Double, word.get_bits(0..=2))
            } else {
                reg(RegClass::Double, word.get_bits(0..=3))
            }
        }
    };

    Some(register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vfp_register_halves_are_ordered() {
        // Vd = 0b0101, D = 1
        let word = (1 << 22) | (0b0101 << 12);
        assert_eq!(
            register(word, RegTag::S12_22, Encoding::Arm, None),
            Some(reg(RegClass::Single, 0b0101_1))
        );
        assert_eq!(
            register(word, RegTag::D22_12, Encoding::Arm, None),
            Some(reg(RegClass::Double, 0b1_0101))
        );
        assert_eq!(
            register(word, RegTag::Q22_12, Encoding::Arm, None),
            Some(reg(RegClass::Quad, 0b1010))
        );
    }

    #[test]
    fn thumb_high_register() {
        // MOV with DN = 1, Rdn = 0b101: R13
        let word = 0b0100_0110_1000_0101;
        assert_eq!(register(word, RegTag::THi0_2, Encoding::Thumb16, None), Some(Register::core(13)));
        assert_eq!(register(word, RegTag::T3_6, Encoding::Thumb16, None), Some(Register::core(0)));
    }

    #[test]
    fn scalar_register_depends_on_element_size() {
        let word = 0b1111;
        assert_eq!(register(word, RegTag::DScalar, Encoding::Arm, Some(16)), Some(reg(RegClass::Double, 0b111)));
        assert_eq!(register(word, RegTag::DScalar, Encoding::Arm, Some(32)), Some(reg(RegClass::Double, 0b1111)));
    }

    #[test]
    fn absent_register() {
        assert_eq!(register(u32::MAX, RegTag::None, Encoding::Thumb16, None), None);
    }
}
