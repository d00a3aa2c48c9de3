//! # Decoder Context
//!
//! Owns the compiled decode tables and drives a decode:
//!
//! ```text
//!            ┌──────────────┐   type    ┌─────────┐  tags   ┌────────────┐
//!   word ───►│ DecodeTable  ├──────────►│ OpAttrs ├────────►│ extractors ├──► InstructionInfo
//!            └──────────────┘           └─────────┘         └────────────┘
//! ```
//!
//! ARM uses one 32-bit table. Thumb picks the width from the first halfword,
//! and in ThumbEE state tries the ThumbEE table before the 16-bit one.
//! Coprocessor, VFP and Advanced SIMD encodings in Thumb are matched by the
//! 32-bit table as [`ThumbKey::Shared`] and decoded through the ARM record
//! after the word is rewritten into ARM layout.
//!
//! Tables are immutable once built. A context can be owned by a simulator
//! instance, or [`DecoderContext::shared`] hands out one process wide
//! instance built on first use.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::arm::{self, ArmType};
use crate::attrs::Encoding;
use crate::condition::Condition;
use crate::extract;
use crate::info::InstructionInfo;
use crate::table::DecodeTable;
use crate::thumb::{self, ThumbKey, ThumbType};

/// Machine state the decoder reads besides the word itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodeState {
    /// SCTLR.U, unaligned accesses permitted.
    pub unaligned: bool,
    /// ITSTATE of the instruction being decoded.
    pub it_state: u8,
    /// ThumbEE state (Thumb execution environment).
    pub thumb_ee: bool,
}

/// Instruction set state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Arm,
    Thumb,
}

/// Source of instruction words for [`DecoderContext::fetch_and_decode`].
pub trait InstructionFetch {
    type Error;

    fn fetch_word(&mut self, address: u32) -> Result<u32, Self::Error>;

    fn fetch_halfword(&mut self, address: u32) -> Result<u16, Self::Error>;
}

/// Length in bytes of the Thumb instruction starting with `hw1`.
///
/// ```text
/// hw1[15:11]  11101, 11110, 11111 -> 32-bit
///             anything else       -> 16-bit
/// ```
#[must_use]
pub const fn thumb_instruction_size(hw1: u16) -> u8 {
    match hw1 >> 11 {
        0b11101 | 0b11110 | 0b11111 => 4,
        _ => 2,
    }
}

/// Compiled decode tables for ARM, Thumb and ThumbEE.
#[derive(Debug, Clone)]
pub struct DecoderContext {
    arm: DecodeTable<ArmType>,
    thumb16: DecodeTable<ThumbType>,
    thumb32: DecodeTable<ThumbKey>,
    thumbee: DecodeTable<ThumbType>,
}

impl Default for DecoderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderContext {
    /// Builds every table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arm: DecodeTable::new("arm", 32, arm::patterns()),
            thumb16: DecodeTable::new("thumb16", 16, thumb::patterns16()),
            thumb32: DecodeTable::new("thumb32", 32, thumb::patterns32()),
            thumbee: DecodeTable::new("thumbee", 16, thumb::thumbee_patterns()),
        }
    }

    /// Process wide context, built by whichever thread asks first.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<DecoderContext> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    #[must_use]
    pub const fn arm_table(&self) -> &DecodeTable<ArmType> {
        &self.arm
    }

    #[must_use]
    pub const fn thumb16_table(&self) -> &DecodeTable<ThumbType> {
        &self.thumb16
    }

    #[must_use]
    pub const fn thumb32_table(&self) -> &DecodeTable<ThumbKey> {
        &self.thumb32
    }

    #[must_use]
    pub const fn thumbee_table(&self) -> &DecodeTable<ThumbType> {
        &self.thumbee
    }

    /// Decodes the ARM instruction `word` fetched from `address`.
    #[must_use]
    pub fn decode_arm(&self, address: u32, word: u32, state: &DecodeState) -> InstructionInfo {
        let ty = self.arm.lookup(word).unwrap_or(ArmType::Undefined);
        if ty == ArmType::Undefined {
            tracing::trace!("undefined ARM instruction {word:#010X} at {address:#010X}");
        }

        let mut info = InstructionInfo::empty(address, word, Encoding::Arm);
        info.ty = ty;
        extract::populate(&mut info, ty.attrs(), word, Encoding::Arm, state);
        info
    }

    /// Decodes the Thumb instruction starting with `hw1`. `hw2` is only
    /// read for 32-bit encodings.
    #[must_use]
    pub fn decode_thumb(&self, address: u32, hw1: u16, hw2: u16, state: &DecodeState) -> InstructionInfo {
        if thumb_instruction_size(hw1) == 2 {
            let word = u32::from(hw1);
            let ty = state
                .thumb_ee
                .then(|| self.thumbee.lookup(word))
                .flatten()
                .or_else(|| self.thumb16.lookup(word))
                .unwrap_or(ThumbType::Undefined);

            return Self::decode_native(address, word, ty, Encoding::Thumb16, state);
        }

        let word = (u32::from(hw1) << 16) | u32::from(hw2);
        match self.thumb32.lookup(word) {
            Some(ThumbKey::Native(ty)) => Self::decode_native(address, word, ty, Encoding::Thumb32, state),
            Some(ThumbKey::Shared(ty, space)) => {
                let mut info = InstructionInfo::empty(address, word, Encoding::Thumb32);
                info.ty = ty;
                extract::populate(&mut info, ty.attrs(), thumb::to_arm_layout(word, space), Encoding::Arm, state);
                info.condition = Condition::from_it_state(state.it_state);
                info
            }
            None => Self::decode_native(address, word, ThumbType::Undefined, Encoding::Thumb32, state),
        }
    }

    fn decode_native(address: u32, word: u32, ty: ThumbType, enc: Encoding, state: &DecodeState) -> InstructionInfo {
        if ty == ThumbType::Undefined {
            tracing::trace!("undefined Thumb instruction {word:#X} at {address:#010X}");
        }

        let attrs = ty.attrs();
        let mut info = InstructionInfo::empty(address, word, enc);
        info.ty = attrs.arm;
        info.thumb = Some(ty);
        extract::populate(&mut info, &attrs.op, word, enc, state);
        info
    }

    /// Fetches and decodes one instruction through `fetch`, reading the
    /// second Thumb halfword only when the first one asks for it.
    ///
    /// # Errors
    ///
    /// Returns the fetch error of the first failing read.
    pub fn fetch_and_decode<F: InstructionFetch>(
        &self,
        fetch: &mut F,
        address: u32,
        mode: Mode,
        state: &DecodeState,
    ) -> Result<InstructionInfo, F::Error> {
        match mode {
            Mode::Arm => {
                let word = fetch.fetch_word(address)?;
                Ok(self.decode_arm(address, word, state))
            }
            Mode::Thumb => {
                let hw1 = fetch.fetch_halfword(address)?;
                let hw2 = if thumb_instruction_size(hw1) == 4 {
                    fetch.fetch_halfword(address.wrapping_add(2))?
                } else {
                    0
                };
                Ok(self.decode_thumb(address, hw1, hw2, state))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::Register;
    use pretty_assertions::assert_eq;

    struct Rom(Vec<u8>);

    impl InstructionFetch for Rom {
        type Error = u32;

        fn fetch_word(&mut self, address: u32) -> Result<u32, u32> {
            let start = address as usize;
            let bytes = self.0.get(start..start + 4).ok_or(address)?;
            Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        }

        fn fetch_halfword(&mut self, address: u32) -> Result<u16, u32> {
            let start = address as usize;
            let bytes = self.0.get(start..start + 2).ok_or(address)?;
            Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
        }
    }

    #[test]
    fn thumb_width_from_first_halfword() {
        assert_eq!(thumb_instruction_size(0x4770), 2); // BX LR
        assert_eq!(thumb_instruction_size(0xE7FE), 2); // B .
        assert_eq!(thumb_instruction_size(0xE800), 4);
        assert_eq!(thumb_instruction_size(0xF000), 4);
        assert_eq!(thumb_instruction_size(0xF800), 4);
    }

    #[test]
    fn unmatched_word_is_undefined() {
        let ctx = DecoderContext::shared();
        // Permanently undefined space
        let info = ctx.decode_arm(0, 0xE7F0_00F0, &DecodeState::default());
        assert_eq!(info.ty, ArmType::Undefined);
        assert_eq!(info.registers().count(), 0);
        assert_eq!(info.constant, None);
    }

    #[test]
    fn fetch_reads_second_halfword_only_for_wide_thumb() {
        let ctx = DecoderContext::shared();
        // MOVS R0, #1 ; BL +0
        let mut rom = Rom(vec![0x01, 0x20, 0x00, 0xF0, 0x00, 0xF8]);

        let first = ctx
            .fetch_and_decode(&mut rom, 0, Mode::Thumb, &DecodeState::default())
            .unwrap();
        assert_eq!(first.size, 2);
        assert_eq!(first.thumb, Some(ThumbType::MovImm));
        assert_eq!(first.regs[0], Some(Register::core(0)));

        let second = ctx
            .fetch_and_decode(&mut rom, 2, Mode::Thumb, &DecodeState::default())
            .unwrap();
        assert_eq!(second.size, 4);
        assert_eq!(second.ty, ArmType::Bl);
        assert_eq!(second.target, Some(6));

        // A wide instruction cut short by the end of memory
        let mut short = Rom(vec![0x00, 0xF0]);
        assert_eq!(
            ctx.fetch_and_decode(&mut short, 0, Mode::Thumb, &DecodeState::default()),
            Err(2)
        );
    }

    #[test]
    fn shared_thumb_encoding_uses_it_condition() {
        let ctx = DecoderContext::shared();
        let state = DecodeState {
            it_state: 0x08 | (0x1 << 4), // NE
            ..DecodeState::default()
        };
        // VADD.F32 S0, S0, S1
        let info = ctx.decode_thumb(0, 0xEE30, 0x0A20, &state);
        assert_eq!(info.ty, ArmType::VaddF32);
        assert_eq!(info.thumb, None);
        assert_eq!(info.condition, Condition::NE);
        assert_eq!(info.word, 0xEE30_0A20);
    }
}
