//! # Condition Codes
//!
//! Almost every ARM instruction carries a 4-bit condition in bits 31-28.
//! Thumb has no such field except on the conditional branches; the rest of
//! the instruction set is predicated through the **IT block** state instead.
//!
//! ```text
//! ┌───────┬────────┬─────────────────────┐
//! │ Code  │ Suffix │     Flags Tested    │
//! ├───────┼────────┼─────────────────────┤
//! │ 0000  │   EQ   │ Z=1                 │
//! │ 0001  │   NE   │ Z=0                 │
//! │ 0010  │   CS   │ C=1                 │
//! │ 0011  │   CC   │ C=0                 │
//! │ 0100  │   MI   │ N=1                 │
//! │ 0101  │   PL   │ N=0                 │
//! │ 0110  │   VS   │ V=1                 │
//! │ 0111  │   VC   │ V=0                 │
//! │ 1000  │   HI   │ C=1 AND Z=0         │
//! │ 1001  │   LS   │ C=0 OR Z=1          │
//! │ 1010  │   GE   │ N=V                 │
//! │ 1011  │   LT   │ N≠V                 │
//! │ 1100  │   GT   │ Z=0 AND N=V         │
//! │ 1101  │   LE   │ Z=1 OR N≠V          │
//! │ 1110  │   AL   │ (unconditional)     │
//! │ 1111  │   NV   │ unconditional space │
//! └───────┴────────┴─────────────────────┘
//! ```
//!
//! ## IT state
//!
//! The ITSTATE byte is threaded into the Thumb decoder by the caller:
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! ┌───────────────┬───────────────┐
//! │   IT[7:5]     │    IT[4:0]    │
//! │ base cond     │ cond lsb+mask │
//! └───────────────┴───────────────┘
//! ```
//!
//! When `IT[3:0]` is zero no block is active. Otherwise the instruction
//! being decoded executes under condition `IT[7:4]`.

use serde::{Deserialize, Serialize};

/// Condition codes for conditional execution.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Equal (Z=1)
    EQ = 0x0,

    /// Not equal (Z=0)
    NE = 0x1,

    /// Carry set / unsigned higher or same (C=1)
    CS = 0x2,

    /// Carry clear / unsigned lower (C=0)
    CC = 0x3,

    /// Minus / negative (N=1)
    MI = 0x4,

    /// Plus / positive or zero (N=0)
    PL = 0x5,

    /// Overflow set (V=1)
    VS = 0x6,

    /// Overflow clear (V=0)
    VC = 0x7,

    /// Unsigned higher (C=1 AND Z=0)
    HI = 0x8,

    /// Unsigned lower or same (C=0 OR Z=1)
    LS = 0x9,

    /// Signed greater or equal (N=V)
    GE = 0xA,

    /// Signed less than (N≠V)
    LT = 0xB,

    /// Signed greater than (Z=0 AND N=V)
    GT = 0xC,

    /// Signed less than or equal (Z=1 OR N≠V)
    LE = 0xD,

    /// Always (unconditional)
    #[default]
    AL = 0xE,

    /// Unconditional instruction space in ARM state.
    NV = 0xF,
}

impl From<u8> for Condition {
    fn from(item: u8) -> Self {
        match item & 0xF {
            0x0 => Self::EQ,
            0x1 => Self::NE,
            0x2 => Self::CS,
            0x3 => Self::CC,
            0x4 => Self::MI,
            0x5 => Self::PL,
            0x6 => Self::VS,
            0x7 => Self::VC,
            0x8 => Self::HI,
            0x9 => Self::LS,
            0xA => Self::GE,
            0xB => Self::LT,
            0xC => Self::GT,
            0xD => Self::LE,
            0xE => Self::AL,
            _ => Self::NV,
        }
    }
}

impl Condition {
    /// Returns `true` when `it_state` describes an active IT block.
    #[must_use]
    pub const fn in_it_block(it_state: u8) -> bool {
        it_state & 0x0F != 0
    }

    /// Condition applied by an IT block, `AL` outside of one.
    #[must_use]
    pub fn from_it_state(it_state: u8) -> Self {
        if Self::in_it_block(it_state) {
            Self::from(it_state >> 4)
        } else {
            Self::AL
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EQ => f.write_str("EQ"),
            Self::NE => f.write_str("NE"),
            Self::CS => f.write_str("CS"),
            Self::CC => f.write_str("CC"),
            Self::MI => f.write_str("MI"),
            Self::PL => f.write_str("PL"),
            Self::VS => f.write_str("VS"),
            Self::VC => f.write_str("VC"),
            Self::HI => f.write_str("HI"),
            Self::LS => f.write_str("LS"),
            Self::GE => f.write_str("GE"),
            Self::LT => f.write_str("LT"),
            Self::GT => f.write_str("GT"),
            Self::LE => f.write_str("LE"),
            Self::AL | Self::NV => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_state_outside_block() {
        assert!(!Condition::in_it_block(0x00));
        assert!(!Condition::in_it_block(0x10));
        assert_eq!(Condition::from_it_state(0x10), Condition::AL);
    }

    #[test]
    fn it_state_inside_block() {
        // ITE EQ: firstcond = 0000, mask = 1100
        assert_eq!(Condition::from_it_state(0x0C), Condition::EQ);
        // second slot after the shift flips the low condition bit
        assert_eq!(Condition::from_it_state(0x18), Condition::NE);
        assert_eq!(Condition::from_it_state(0xA8), Condition::GE);
    }

    #[test]
    fn display_hides_always() {
        assert_eq!(Condition::AL.to_string(), "");
        assert_eq!(Condition::NV.to_string(), "");
        assert_eq!(Condition::from(0xB).to_string(), "LT");
    }
}
