use serde::Serialize;

use crate::arch::{ArchVersion, IsaFeature};
use crate::arm::ArmType;
use crate::attrs::{DataType, Encoding, ModImmKind, UnalignedAction};
use crate::condition::Condition;
use crate::thumb::ThumbType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegClass {
    Core,
    Coproc,
    Single,
    Double,
    Quad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Register {
    pub class: RegClass,
    pub index: u8,
}

impl Register {
    #[must_use]
    pub const fn core(index: u8) -> Self {
        Self {
            class: RegClass::Core,
            index,
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.class {
            RegClass::Core => write!(f, "R{}", self.index),
            RegClass::Coproc => write!(f, "c{}", self.index),
            RegClass::Single => write!(f, "S{}", self.index),
            RegClass::Double => write!(f, "D{}", self.index),
            RegClass::Quad => write!(f, "Q{}", self.index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShiftOp {
    Lsl,
    Lsr,
    Asr,
    Ror,
    Rrx,
}

impl std::fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lsl => f.write_str("LSL"),
            Self::Lsr => f.write_str("LSR"),
            Self::Asr => f.write_str("ASR"),
            Self::Ror => f.write_str("ROR"),
            Self::Rrx => f.write_str("RRX"),
        }
    }
}

/// Addressing mode of a block transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncDec {
    /// Increment after.
    Ia,
    /// Increment before.
    Ib,
    /// Decrement after.
    Da,
    /// Decrement before.
    Db,
}

impl std::fmt::Display for IncDec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ia => f.write_str("IA"),
            Self::Ib => f.write_str("IB"),
            Self::Da => f.write_str("DA"),
            Self::Db => f.write_str("DB"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CoprocInfo {
    pub num: Option<u8>,
    pub op1: Option<u8>,
    pub op2: Option<u8>,
    pub long: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SimdInfo {
    /// Element size in bits.
    pub esize: Option<u8>,
    pub dt: [DataType; 2],
    pub index: Option<u8>,
    /// Required alignment in bytes.
    pub align: Option<u16>,
    pub nregs: Option<u8>,
    /// Register spacing of structure loads.
    pub incr: Option<u8>,
    pub modimm: ModImmKind,
}

/// Everything the decoder knows about one instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionInfo {
    pub address: u32,
    /// Raw word, `hw1 << 16 | hw2` for 32-bit Thumb.
    pub word: u32,
    pub encoding: Encoding,
    /// Length in bytes.
    pub size: u8,
    /// Architecture neutral type.
    pub ty: ArmType,
    /// Thumb specific type, when decoded from Thumb state.
    pub thumb: Option<ThumbType>,
    pub mnemonic: &'static str,
    pub format: &'static str,
    pub arch: ArchVersion,
    pub isa: IsaFeature,
    pub condition: Condition,
    pub set_flags: bool,
    pub regs: [Option<Register>; 4],
    pub shift: Option<ShiftOp>,
    /// Immediate, two's complement when negative.
    pub constant: Option<u64>,
    /// Rotation applied to an ARM modified immediate.
    pub rotate: u8,
    /// Bitfield or saturation width.
    pub width: Option<u8>,
    /// MSR field mask.
    pub field_mask: Option<u8>,
    pub target: Option<u32>,
    pub coproc: CoprocInfo,
    pub reg_list: Option<u16>,
    pub inc_dec: Option<IncDec>,
    /// Bytes per memory access.
    pub access_size: u8,
    pub sign_extend: bool,
    pub post_index: bool,
    pub writeback: bool,
    pub unaligned: UnalignedAction,
    /// `firstcond:mask` of an IT instruction.
    pub it: Option<u8>,
    /// ThumbEE handler index.
    pub handler: Option<u8>,
    pub simd: SimdInfo,
}

impl InstructionInfo {
    /// A record with no field populated.
    #[must_use]
    pub const fn empty(address: u32, word: u32, encoding: Encoding) -> Self {
        Self {
            address,
            word,
            encoding,
            size: encoding.size(),
            ty: ArmType::Undefined,
            thumb: None,
            mnemonic: "",
            format: "",
            arch: ArchVersion::V4,
            isa: IsaFeature::Base,
            condition: Condition::AL,
            set_flags: false,
            regs: [None; 4],
            shift: None,
            constant: None,
            rotate: 0,
            width: None,
            field_mask: None,
            target: None,
            coproc: CoprocInfo {
                num: None,
                op1: None,
                op2: None,
                long: false,
            },
            reg_list: None,
            inc_dec: None,
            access_size: 0,
            sign_extend: false,
            post_index: false,
            writeback: false,
            unaligned: UnalignedAction::None,
            it: None,
            handler: None,
            simd: SimdInfo {
                esize: None,
                dt: [DataType::None; 2],
                index: None,
                align: None,
                nregs: None,
                incr: None,
                modimm: ModImmKind::None,
            },
        }
    }

    /// The constant reinterpreted as a signed value.
    #[must_use]
    pub const fn signed_constant(&self) -> Option<i64> {
        match self.constant {
            Some(value) => Some(value as i64),
            None => None,
        }
    }

    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.ty == ArmType::Undefined
    }

    /// Registers in use, in slot order.
    pub fn registers(&self) -> impl Iterator<Item = Register> + '_ {
        self.regs.iter().flatten().copied()
    }

    /// Indices of the registers set in the register list.
    pub fn list_registers(&self) -> impl Iterator<Item = u8> + '_ {
        let list = self.reg_list.unwrap_or(0);
        (0..16_u8).filter(move |r| list & (1_u16 << *r) != 0)
    }
}
