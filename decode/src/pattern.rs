//! # Bit Patterns
//!
//! Every decode table entry is written the way encoding diagrams are printed:
//! one character per bit, most significant bit first.
//!
//! | Char | Meaning                  |
//! |------|--------------------------|
//! | `0`  | bit must be clear        |
//! | `1`  | bit must be set          |
//! | `.`  | don't care (field bit)   |
//! | `\|` `_` ` ` | visual separator, skipped |
//!
//! Patterns are parsed by a `const fn`, so a malformed string in one of the
//! static tables is a compile error instead of a runtime surprise.

use crate::bitwise::Bits;

/// A compiled pattern: the word matches when `word & mask == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub mask: u32,
    pub value: u32,
    pub width: u8,
}

impl Pattern {
    /// Parses a pattern string. Only 16 and 32 bit wide patterns exist.
    ///
    /// # Panics
    ///
    /// Panics on any character outside the alphabet or on a bit count that
    /// is not 16 or 32. In a `const` context this aborts compilation.
    #[must_use]
    pub const fn parse(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        let mut mask = 0_u32;
        let mut value = 0_u32;
        let mut width = 0_u8;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'|' | b'_' | b' ' => {}
                b'0' => {
                    mask = (mask << 1) | 1;
                    value <<= 1;
                    width += 1;
                }
                b'1' => {
                    mask = (mask << 1) | 1;
                    value = (value << 1) | 1;
                    width += 1;
                }
                b'.' => {
                    mask <<= 1;
                    value <<= 1;
                    width += 1;
                }
                _ => panic!("invalid character in decode pattern"),
            }
            assert!(width <= 32, "decode pattern longer than 32 bits");
            i += 1;
        }

        assert!(
            width == 16 || width == 32,
            "decode pattern must be 16 or 32 bits wide"
        );

        Self { mask, value, width }
    }

    #[must_use]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    /// Number of fixed bits, higher is more specific.
    #[must_use]
    pub const fn specificity(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Is the bit at `bit_idx` fixed by the pattern.
    #[must_use]
    pub fn fixes(&self, bit_idx: u8) -> bool {
        self.mask.get_bit(bit_idx)
    }

    /// Rewrites the bits in `bits_range` to the fixed value `field`.
    #[must_use]
    pub fn with_field(self, bits_range: std::ops::RangeInclusive<u8>, field: u32) -> Self {
        let start = *bits_range.start();
        let length = bits_range.end() - start + 1;
        let field_mask = (((1_u64 << length) - 1) as u32) << start;

        Self {
            mask: self.mask | field_mask,
            value: (self.value & !field_mask) | ((field << start) & field_mask),
            width: self.width,
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit_idx in (0..self.width).rev() {
            let c = if !self.mask.get_bit(bit_idx) {
                '.'
            } else if self.value.get_bit(bit_idx) {
                '1'
            } else {
                '0'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A `(pattern, type, priority)` triple as registered in a decode table.
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry<T> {
    pub pattern: Pattern,
    pub ty: T,
    pub priority: u8,
}

/// Builds an entry from a pattern string, usable in `const` tables.
pub const fn entry<T: Copy>(pattern: &str, ty: T, priority: u8) -> PatternEntry<T> {
    PatternEntry {
        pattern: Pattern::parse(pattern),
        ty,
        priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pattern_parse() {
        let p = Pattern::parse("1111_0000.1.0.1.0");
        assert_eq!(p.width, 16);
        assert_eq!(p.mask, 0b1111_1111_0101_0101);
        assert_eq!(p.value, 0b1111_0000_0100_0100);
        assert_eq!(p.specificity(), 12);
    }

    #[test]
    fn test_pattern_match() {
        const BX: Pattern = Pattern::parse("....|0001|0010|1111|1111|1111|0001|....");
        assert!(BX.matches(0xE12F_FF11));
        assert!(BX.matches(0x012F_FF1E));
        assert!(!BX.matches(0xE12F_FF21));
        assert!(BX.fixes(27));
        assert!(!BX.fixes(31));
    }

    #[test]
    fn test_pattern_with_field() {
        let p = Pattern::parse("....|110.|....|....|....|....|....|....");
        let thumb = p.with_field(28..=31, 0b1110);
        assert_eq!(thumb.to_string(), "1110110.........................");
    }

    #[test]
    #[should_panic(expected = "16 or 32")]
    fn test_pattern_wrong_width() {
        let _ = Pattern::parse("0101");
    }

    #[test]
    #[should_panic(expected = "invalid character")]
    fn test_pattern_wrong_char() {
        let _ = Pattern::parse("010101010101010x");
    }
}
