use std::ops::RangeInclusive;

/// Helper methods to pick bit fields out of instruction words,
/// the index (`bit_idx`) is supposed to be from lsb to msb (right to left).
///
/// Every extractor in the decoder reads the word through this trait so a
/// field is always written the way the architecture manual writes it,
/// `word.get_bits(16..=19)` for `Rn`, `word.get_bit(20)` for `S`.
pub trait Bits: Copy {
    /// Number of bits in the word.
    const WIDTH: u8;

    fn get_bit(self, bit_idx: u8) -> bool;

    fn get_bits(self, bits_range: RangeInclusive<u8>) -> u32;

    /// Returns the value of the low `number_of_bits` bits interpreted
    /// as a two's complement number.
    fn sign_extended(self, number_of_bits: u8) -> i32;

    /// Concatenates two fields, `high` ends up above `low`.
    ///
    /// `word.join(22..=22, 12..=15)` is the manual's `D:Vd`.
    fn join(self, high: RangeInclusive<u8>, low: RangeInclusive<u8>) -> u32 {
        let low_len = low.end() - low.start() + 1;
        (self.get_bits(high) << low_len) | self.get_bits(low)
    }
}

macro_rules! impl_bits {
    ($ty:ty, $width:literal) => {
        impl Bits for $ty {
            const WIDTH: u8 = $width;

            fn get_bit(self, bit_idx: u8) -> bool {
                debug_assert!(bit_idx < Self::WIDTH);
                (self >> bit_idx) & 1 == 1
            }

            fn get_bits(self, bits_range: RangeInclusive<u8>) -> u32 {
                let start = *bits_range.start();
                let end = *bits_range.end();
                debug_assert!(start <= end && end < Self::WIDTH);

                // Gets a value with `length` number of ones.
                let length = u32::from(end - start + 1);
                let mask = if length >= 32 {
                    u32::MAX
                } else {
                    (1_u32 << length) - 1
                };

                (u32::from(self) >> start) & mask
            }

            fn sign_extended(self, number_of_bits: u8) -> i32 {
                debug_assert!(number_of_bits > 0 && number_of_bits <= 32);

                // Moving the sign bit up to bit 31 and back lets the arithmetic
                // shift copy it over every upper bit.
                let shift = 32 - u32::from(number_of_bits);
                ((u32::from(self) << shift) as i32) >> shift
            }
        }
    };
}

impl_bits!(u32, 32);
impl_bits!(u16, 16);

/// Position of the highest set bit, `None` for zero.
pub const fn highest_set_bit(value: u32) -> Option<u8> {
    if value == 0 {
        None
    } else {
        Some((31 - value.leading_zeros()) as u8)
    }
}

/// Position of the lowest set bit, `None` for zero.
pub const fn lowest_set_bit(value: u32) -> Option<u8> {
    if value == 0 {
        None
    } else {
        Some(value.trailing_zeros() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn get_bit() {
        let b = 0b1011001110_u32;
        assert!(b.get_bit(1));
        assert!(!b.get_bit(0));
        assert!(b.get_bit(2));
        assert!(!b.get_bit(31));
    }

    #[test]
    #[should_panic]
    fn invalid_index() {
        let b = 0u16;
        b.get_bit(16);
    }

    #[test]
    fn get_bits() {
        let b = 0b1011001110_u32;
        assert_eq!(b.get_bits(0..=3), 0b1110);
        assert_eq!(b.get_bits(1..=1), 0b1);
        assert_eq!(b.get_bits(4..=7), 0b1100);
        assert_eq!(b.get_bits(8..=9), 0b10);
        assert_eq!(b.get_bits(0..=31), 0b10_1100_1110);
        assert_eq!(b.get_bits(28..=31), 0b0);
        assert_eq!(0xF00Du16.get_bits(12..=15), 0xF);
    }

    #[test]
    fn join_fields() {
        // D = 1, Vd = 0b0011
        let word = (1_u32 << 22) | (0b0011 << 12);
        assert_eq!(word.join(22..=22, 12..=15), 0b1_0011);
        assert_eq!(word.join(12..=15, 22..=22), 0b0011_1);
    }

    #[test]
    fn check_sign_extended() {
        let a: u32 = 0b1001; // -7 in i4

        assert_eq!(a.sign_extended(4), -7);
        assert_eq!(0x00FF_FFFF_u32.sign_extended(24), -1);
        assert_eq!(0x007F_FFFF_u32.sign_extended(24), 0x7F_FFFF);
        assert_eq!(0x8000_0000_u32.sign_extended(32), i32::MIN);
    }

    #[test]
    fn sign_extension_keeps_positive_values() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let value: u32 = rng.gen_range(0..0x80);
            assert_eq!(value.sign_extended(8), value as i32);
        }
    }

    #[test]
    fn set_bit_positions() {
        assert_eq!(highest_set_bit(0), None);
        assert_eq!(highest_set_bit(0b100_0000), Some(6));
        assert_eq!(lowest_set_bit(0b1010_0000), Some(5));
        assert_eq!(lowest_set_bit(1 << 31), Some(31));
    }
}
