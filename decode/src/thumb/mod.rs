//! Thumb (T32) instruction set, including the ThumbEE variant.
//!
//! Most 32-bit Thumb encodings have their own layout and their own
//! [`ThumbType`]. The coprocessor, VFP and Advanced SIMD spaces are the
//! exception: their Thumb encodings are the ARM ones with a different top
//! byte, so the 32-bit table registers the ARM patterns moved into Thumb
//! position and remembers the [`Space`] to move a matched word back.
//!
//! ```text
//!             ARM                          Thumb
//! Coproc      cccc 110x / cccc 1110   ->  1110 110x / 1110 1110
//! NeonData    1111 001U               ->  111U 1111
//! NeonLS      1111 0100               ->  1111 1001
//! ```

mod patterns;
mod types;

use serde::{Deserialize, Serialize};

use crate::arm::{self, ArmType};
use crate::pattern::{Pattern, PatternEntry};

pub use types::{ThumbAttrs, ThumbType};

/// ARM encoding space a shared 32-bit Thumb encoding comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// Coprocessor and VFP, the condition field becomes `1110`.
    Coproc,
    /// Advanced SIMD data processing, `U` moves from bit 24 to bit 28.
    NeonData,
    /// Advanced SIMD element and structure loads and stores.
    NeonLoadStore,
}

impl Space {
    /// Moves an ARM pattern of this space into Thumb position.
    #[must_use]
    pub const fn thumb_pattern(self, arm: Pattern) -> Pattern {
        let (mask, value) = match self {
            // Patterns pinning `cond == 1111` are the "2" forms, identical
            // in Thumb.
            Self::Coproc if arm.mask >> 28 == 0 => (arm.mask | 0xF000_0000, arm.value | 0xE000_0000),
            Self::Coproc => (arm.mask, arm.value),
            Self::NeonData => (
                (arm.mask & 0x00FF_FFFF) | 0xEF00_0000 | (((arm.mask >> 24) & 1) << 28),
                (arm.value & 0x00FF_FFFF) | 0xEF00_0000 | (((arm.value >> 24) & 1) << 28),
            ),
            Self::NeonLoadStore => ((arm.mask & 0x00FF_FFFF) | 0xFF00_0000, (arm.value & 0x00FF_FFFF) | 0xF900_0000),
        };
        Pattern {
            mask,
            value,
            width: 32,
        }
    }

    /// Rewrites a matched Thumb word into ARM layout.
    #[must_use]
    pub const fn to_arm(self, word: u32) -> u32 {
        match self {
            Self::Coproc => word,
            Self::NeonData => (word & 0x00FF_FFFF) | 0xF200_0000 | (((word >> 28) & 1) << 24),
            Self::NeonLoadStore => (word & 0x00FF_FFFF) | 0xF400_0000,
        }
    }
}

/// What the 32-bit Thumb table resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbKey {
    Native(ThumbType),
    /// An ARM encoding, decoded from the word rewritten by the space.
    Shared(ArmType, Space),
}

/// `hw1 << 16 | hw2` of a shared encoding in ARM layout.
#[must_use]
pub const fn to_arm_layout(word: u32, space: Space) -> u32 {
    space.to_arm(word)
}

/// Patterns of the 16-bit table.
#[must_use]
pub fn patterns16() -> Vec<PatternEntry<ThumbType>> {
    patterns::narrow()
}

/// Patterns of the ThumbEE table, consulted before the 16-bit one.
#[must_use]
pub fn thumbee_patterns() -> Vec<PatternEntry<ThumbType>> {
    patterns::thumbee()
}

/// Patterns of the 32-bit table, native encodings first.
#[must_use]
pub fn patterns32() -> Vec<PatternEntry<ThumbKey>> {
    let native = patterns::wide().into_iter().map(|e| PatternEntry {
        pattern: e.pattern,
        ty: ThumbKey::Native(e.ty),
        priority: e.priority,
    });

    let shared = [
        (Space::Coproc, arm::coprocessor()),
        (Space::Coproc, arm::vfp()),
        (Space::NeonData, arm::simd_data()),
        (Space::NeonLoadStore, arm::simd_load_store()),
    ]
    .into_iter()
    .flat_map(|(space, entries)| {
        entries.into_iter().map(move |e| PatternEntry {
            pattern: space.thumb_pattern(e.pattern),
            ty: ThumbKey::Shared(e.ty, space),
            priority: e.priority,
        })
    });

    native.chain(shared).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DecodeState, DecoderContext};
    use crate::info::{RegClass, Register};
    use pretty_assertions::assert_eq;

    #[test]
    fn neon_data_pattern_moves_u() {
        let arm = Pattern::parse("1111 001. 0... .... .... 1000 ...0 ....");
        let thumb = Space::NeonData.thumb_pattern(arm);
        assert_eq!(thumb.to_string(), concat!("111.1111", "0...........", "1000...0...."));

        let unsigned = Space::NeonData.thumb_pattern(arm.with_field(24..=24, 1));
        assert_eq!(unsigned.value >> 24, 0xFF);
    }

    #[test]
    fn coproc_pattern_takes_always_condition() {
        let mrc = Pattern::parse("....  1110 ...1 .... .... .... ...1 ....");
        assert_eq!(Space::Coproc.thumb_pattern(mrc).to_string(), "11101110...1...............1....");

        let mrc2 = Pattern::parse("1111  1110 ...1 .... .... .... ...1 ....");
        assert_eq!(Space::Coproc.thumb_pattern(mrc2), mrc2);
    }

    #[test]
    fn shared_words_back_to_arm() {
        assert_eq!(to_arm_layout(0xEF02_0844, Space::NeonData), 0xF202_0844);
        assert_eq!(to_arm_layout(0xFF02_0844, Space::NeonData), 0xF302_0844);
        assert_eq!(to_arm_layout(0xF920_070F, Space::NeonLoadStore), 0xF420_070F);
        assert_eq!(to_arm_layout(0xEE10_0F10, Space::Coproc), 0xEE10_0F10);
    }

    #[test]
    fn every_pattern_is_well_formed() {
        assert!(patterns16().iter().all(|e| e.pattern.width == 16));
        assert!(thumbee_patterns().iter().all(|e| e.pattern.width == 16));
        // Every 32-bit pattern lives in the 32-bit prefix space
        assert!(patterns32().iter().all(|e| e.pattern.width == 32 && e.pattern.value >> 29 == 0b111));
    }

    #[test]
    fn simd_decodes_through_arm_records() {
        let ctx = DecoderContext::shared();
        // VADD.I8 Q0, Q1, Q2
        let info = ctx.decode_thumb(0, 0xEF02, 0x0844, &DecodeState::default());
        assert_eq!(info.ty, ArmType::VaddQ);
        assert_eq!(info.thumb, None);
        assert_eq!(info.size, 4);

        let quad = |index| Some(Register { class: RegClass::Quad, index });
        assert_eq!(info.regs[..3], [quad(0), quad(1), quad(2)]);

        // VLD1.8 {D0}, [R0]
        let info = ctx.decode_thumb(0, 0xF920, 0x070F, &DecodeState::default());
        assert_eq!(info.ty, ArmType::Vld1Multi);
    }
}
