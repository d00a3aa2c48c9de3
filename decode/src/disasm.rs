//! Text rendering of a decoded instruction.
//!
//! Every record carries a format string where `%` introduces an operand:
//!
//! ```text
//! %m mnemonic      %c condition     %s S suffix      %0..%3 registers
//! %C constant      %T target        %S shift op      %H immediate shift
//! %R rotation      %L register list %i IA/IB/DA/DB   %! writeback
//! %w width         %F PSR fields    %D data types    %X scalar index
//! %A SIMD address  %Vn vector list  %E element size  %Mn memory operand
//! %P coprocessor   %o opc1          %q opc2          %l L suffix
//! %I IT mask       %h handler
//! ```

use std::fmt::{self, Formatter, Write};

use crate::attrs::{DataType, Encoding, ModImmKind};
use crate::bitwise::Bits;
use crate::condition::Condition;
use crate::info::{InstructionInfo, Register, ShiftOp};

fn data_type(dt: DataType) -> &'static str {
    match dt {
        DataType::None => "",
        DataType::S8 => ".S8",
        DataType::S16 => ".S16",
        DataType::S32 => ".S32",
        DataType::S64 => ".S64",
        DataType::U8 => ".U8",
        DataType::U16 => ".U16",
        DataType::U32 => ".U32",
        DataType::U64 => ".U64",
        DataType::I8 => ".I8",
        DataType::I16 => ".I16",
        DataType::I32 => ".I32",
        DataType::I64 => ".I64",
        DataType::F16 => ".F16",
        DataType::F32 => ".F32",
        DataType::F64 => ".F64",
        DataType::P8 => ".P8",
        DataType::B8 => ".8",
        DataType::B16 => ".16",
        DataType::B32 => ".32",
        DataType::B64 => ".64",
    }
}

/// `#imm`, small values in decimal and the rest in hex.
fn immediate(f: &mut Formatter<'_>, value: u64) -> fmt::Result {
    let signed = value as i64;
    if signed.unsigned_abs() < 0x1000 {
        write!(f, "#{signed}")
    } else {
        write!(f, "#0x{value:X}")
    }
}

fn register(f: &mut Formatter<'_>, reg: Option<Register>) -> fmt::Result {
    match reg {
        Some(reg) => write!(f, "{reg}"),
        None => f.write_char('?'),
    }
}

impl InstructionInfo {
    fn write_constant(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(value) = self.constant else {
            return f.write_char('?');
        };
        match self.simd.modimm {
            ModImmKind::Vfp32 => write!(f, "#{:?}", f32::from_bits(value as u32)),
            ModImmKind::Vfp64 => write!(f, "#{:?}", f64::from_bits(value)),
            ModImmKind::Simd => write!(f, "#0x{value:X}"),
            ModImmKind::None => immediate(f, value),
        }
    }

    /// `, LSL #n` style suffix of an immediate shift, nothing for `LSL #0`.
    fn write_shift(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let amount = self.constant.unwrap_or(0);
        match self.shift {
            None => Ok(()),
            Some(ShiftOp::Lsl) if amount == 0 => Ok(()),
            Some(ShiftOp::Rrx) => f.write_str(", RRX"),
            Some(ShiftOp::Ror) if amount == 0 => f.write_str(", RRX"),
            Some(op) => write!(f, ", {op} #{amount}"),
        }
    }

    /// `[Rn, <offset>]{!}` or `[Rn], <offset>` with the base in slot `base`.
    fn write_memory(&self, f: &mut Formatter<'_>, base: usize) -> fmt::Result {
        let offset_reg = if base + 1 < 3 { self.regs[base + 1] } else { None };

        f.write_char('[')?;
        register(f, self.regs[base])?;
        if self.post_index {
            f.write_char(']')?;
        }

        match offset_reg {
            Some(reg) => {
                let subtract = self.encoding == Encoding::Arm && !self.word.get_bit(23);
                write!(f, ", {}{reg}", if subtract { "-" } else { "" })?;
                self.write_shift(f)?;
            }
            None => match self.signed_constant() {
                Some(0) | None => {}
                Some(offset) => write!(f, ", #{offset}")?,
            },
        }

        if !self.post_index {
            f.write_char(']')?;
            if self.writeback {
                f.write_char('!')?;
            }
        }
        Ok(())
    }

    fn write_reg_list(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, reg) in self.list_registers().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "R{reg}")?;
        }
        f.write_char('}')
    }

    /// `{D0, D1}` starting at slot `first`, with the scalar index on each
    /// element of a lane transfer.
    fn write_vector_list(&self, f: &mut Formatter<'_>, first: usize) -> fmt::Result {
        let Some(start) = self.regs[first] else {
            return f.write_char('?');
        };
        let count = self.simd.nregs.unwrap_or(1);
        let incr = self.simd.incr.unwrap_or(1);

        f.write_char('{')?;
        for i in 0..count {
            if i > 0 {
                f.write_str(", ")?;
            }
            let index = (u32::from(start.index) + u32::from(i) * u32::from(incr)) % 32;
            let reg = Register {
                index: index as u8,
                ..start
            };
            write!(f, "{reg}")?;
            if let Some(index) = self.simd.index {
                write!(f, "[{index}]")?;
            }
        }
        f.write_char('}')
    }

    /// `[Rn{:align}]` followed by `!` or `, Rm` for post indexed forms.
    fn write_simd_address(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        register(f, self.regs[1])?;
        if let Some(align) = self.simd.align.filter(|a| *a > 1) {
            write!(f, ":{}", u32::from(align) * 8)?;
        }
        f.write_char(']')?;

        if self.writeback {
            match self.regs[2] {
                Some(Register { index: 13, .. }) => f.write_char('!')?,
                Some(reg) => write!(f, ", {reg}")?,
                None => {}
            }
        }
        Ok(())
    }

    /// PSR field letters in `fsxc` order.
    fn write_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mask = self.field_mask.unwrap_or(0);
        for (bit, letter) in [(3, 'f'), (2, 's'), (1, 'x'), (0, 'c')] {
            if mask & (1 << bit) != 0 {
                f.write_char(letter)?;
            }
        }
        Ok(())
    }

    /// `TTE EQ` style suffix of an IT instruction.
    fn write_it(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(it) = self.it else {
            return Ok(());
        };
        let firstcond = it >> 4;
        let mask = it & 0xF;
        let last = mask.trailing_zeros();

        for bit in (last + 1..4).rev() {
            let then = (mask >> bit) & 1 == firstcond & 1;
            f.write_char(if then { 'T' } else { 'E' })?;
        }

        match Condition::from(firstcond) {
            Condition::AL => f.write_str(" AL"),
            cond => write!(f, " {cond}"),
        }
    }

    /// Two digit operand codes: `%M1`, `%V0`.
    fn slot(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> usize {
        chars
            .next_if(char::is_ascii_digit)
            .and_then(|c| c.to_digit(10))
            .map_or(0, |d| d as usize)
            .min(3)
    }
}

impl fmt::Display for InstructionInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut chars = self.format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                f.write_char(c)?;
                continue;
            }

            let Some(code) = chars.next() else {
                return f.write_char('%');
            };
            match code {
                'm' => f.write_str(self.mnemonic)?,
                'c' => write!(f, "{}", self.condition)?,
                's' if self.set_flags => f.write_char('S')?,
                's' => {}
                '0'..='3' => register(f, self.regs[code as usize - '0' as usize])?,
                'C' => self.write_constant(f)?,
                'T' => match self.target {
                    Some(target) => write!(f, "0x{target:08X}")?,
                    None => f.write_char('?')?,
                },
                'S' => match self.shift {
                    Some(op) => write!(f, "{op}")?,
                    None => f.write_char('?')?,
                },
                'H' => self.write_shift(f)?,
                'R' => match self.constant {
                    Some(rotation) if rotation != 0 => write!(f, ", ROR #{rotation}")?,
                    _ => {}
                },
                'L' => self.write_reg_list(f)?,
                'i' => {
                    if let Some(inc_dec) = self.inc_dec {
                        write!(f, "{inc_dec}")?;
                    }
                }
                '!' if self.writeback => f.write_char('!')?,
                '!' => {}
                'w' => write!(f, "#{}", self.width.unwrap_or(0))?,
                'F' => self.write_fields(f)?,
                'D' => {
                    f.write_str(data_type(self.simd.dt[0]))?;
                    f.write_str(data_type(self.simd.dt[1]))?;
                }
                'X' => {
                    if let Some(index) = self.simd.index {
                        write!(f, "[{index}]")?;
                    }
                }
                'A' => self.write_simd_address(f)?,
                'V' => {
                    let first = Self::slot(&mut chars);
                    self.write_vector_list(f, first)?;
                }
                'E' => write!(f, "{}", self.simd.esize.unwrap_or(0))?,
                'M' => {
                    let base = Self::slot(&mut chars);
                    self.write_memory(f, base)?;
                }
                'P' => write!(f, "p{}", self.coproc.num.unwrap_or(0))?,
                'o' => write!(f, "{}", self.coproc.op1.unwrap_or(0))?,
                'q' => write!(f, "{}", self.coproc.op2.unwrap_or(0))?,
                'l' if self.coproc.long => f.write_char('L')?,
                'l' => {}
                'I' => self.write_it(f)?,
                'h' => write!(f, "#{}", self.handler.unwrap_or(0))?,
                other => {
                    f.write_char('%')?;
                    f.write_char(other)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::{DecodeState, DecoderContext};
    use pretty_assertions::assert_eq;

    fn arm(address: u32, word: u32) -> String {
        DecoderContext::shared()
            .decode_arm(address, word, &DecodeState::default())
            .to_string()
    }

    fn thumb(hw1: u16, hw2: u16) -> String {
        DecoderContext::shared()
            .decode_thumb(0, hw1, hw2, &DecodeState::default())
            .to_string()
    }

    #[test]
    fn data_processing() {
        assert_eq!(arm(0, 0xE281_0001), "ADD R0, R1, #1");
        assert_eq!(arm(0, 0x1291_0001), "ADDNES R0, R1, #1");
        assert_eq!(arm(0, 0xE080_0102), "ADD R0, R0, R2, LSL #2");
        assert_eq!(arm(0, 0xE1A0_0000), "MOV R0, R0");
        assert_eq!(arm(0, 0xE3A0_04FF), "MOV R0, #0xFF000000");
    }

    #[test]
    fn loads_and_stores() {
        assert_eq!(arm(0, 0xE591_0004), "LDR R0, [R1, #4]");
        assert_eq!(arm(0, 0xE511_0004), "LDR R0, [R1, #-4]");
        assert_eq!(arm(0, 0xE5A1_0004), "STR R0, [R1, #4]!");
        assert_eq!(arm(0, 0xE491_0004), "LDR R0, [R1], #4");
        assert_eq!(arm(0, 0xE791_0102), "LDR R0, [R1, R2, LSL #2]");
        assert_eq!(arm(0, 0xE711_0002), "LDR R0, [R1, -R2]");
    }

    #[test]
    fn branches_and_lists() {
        assert_eq!(arm(0, 0xEB00_0000), "BL 0x00000008");
        assert_eq!(arm(0x100, 0x0AFF_FFFE), "BEQ 0x00000100");
        assert_eq!(arm(0, 0xE92D_4010), "PUSH {R4, R14}");
        assert_eq!(arm(0, 0xE12F_FF41), "BAA R1");
    }

    #[test]
    fn coprocessor_transfer() {
        assert_eq!(arm(0, 0xEE11_0F10), "MRC p15, 0, R0, c1, c0, 0");
    }

    #[test]
    fn thumb_it_blocks() {
        assert_eq!(thumb(0xBF08, 0), "IT EQ");
        assert_eq!(thumb(0xBF0C, 0), "ITE EQ");
        assert_eq!(thumb(0xBF04, 0), "ITT EQ");
    }

    #[test]
    fn unknown_codes_are_copied() {
        let mut info = DecoderContext::shared().decode_arm(0, 0xE1A0_0000, &DecodeState::default());
        info.format = "%m %z";
        assert_eq!(info.to_string(), "MOV %z");
    }
}
