//! # Opcode Attributes
//!
//! Every symbolic instruction type owns one [`OpAttrs`] record. The record
//! never stores a decoded value: each field names *where* a value lives in
//! the instruction word (a tag), and the extractors in [`crate::extract`]
//! turn tags into values.
//!
//! Tags are grouped per field class. Most tags only make sense for one word
//! layout, the extractors check this against the [`Encoding`] being decoded.
//!
//! ```text
//!   ARM          cond | op ... | Rn 19-16 | Rd 15-12 | ...        | Rm 3-0
//!   Thumb-2      hw1 (31-16)              | hw2 (15-0)
//!   Thumb 16     .... | Rm 8-6 | Rn 5-3 | Rd 2-0
//! ```
//!
//! Thumb-2 words are stored as `hw1 << 16 | hw2`, which puts the common
//! Thumb-2 register fields (`Rn` in hw1, `Rt`/`Rd`/`Rm` in hw2) on the same
//! bit positions as their ARM counterparts, so those tags are shared.

use serde::{Deserialize, Serialize};

use crate::arch::{ArchVersion, IsaFeature};

/// Layout of the word an extractor is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    Arm,
    Thumb16,
    Thumb32,
}

impl Encoding {
    /// Instruction length in bytes.
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Arm | Self::Thumb32 => 4,
            Self::Thumb16 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegTag {
    None,
    /// Bits 3..0, `Rm` in ARM and Thumb-2.
    R0_3,
    /// Bits 11..8, `Rs` in ARM, `Rd` in Thumb-2.
    R8_11,
    /// Bits 15..12, `Rd`/`Rt`.
    R12_15,
    /// Bits 19..16, `Rn`.
    R16_19,
    /// Thumb bits 2..0.
    T0_2,
    /// Thumb bits 5..3.
    T3_5,
    /// Thumb bits 8..6.
    T6_8,
    /// Thumb bits 10..8.
    T8_10,
    /// Thumb high register `DN:Rdn`, bit 7 on top of bits 2..0.
    THi0_2,
    /// Thumb high register `Rm`, bits 6..3.
    T3_6,
    /// A register the encoding implies (SP, LR, PC, R9, R10, ...).
    Implied(u8),
    /// Coprocessor register in bits 3..0.
    Cr0_3,
    /// Coprocessor register in bits 15..12.
    Cr12_15,
    /// Coprocessor register in bits 19..16.
    Cr16_19,
    /// Single precision `Vd:D`.
    S12_22,
    /// Single precision `Vn:N`.
    S16_7,
    /// Single precision `Vm:M`.
    S0_5,
    /// The single following `Vm:M`, second half of a VMOV pair.
    S0_5Next,
    /// Double word `D:Vd`.
    D22_12,
    /// Double word `N:Vn`.
    D7_16,
    /// Double word `M:Vm`.
    D5_0,
    /// Quad word `D:Vd`, halved.
    Q22_12,
    /// Quad word `N:Vn`, halved.
    Q7_16,
    /// Quad word `M:Vm`, halved.
    Q5_0,
    /// By-scalar operand: `Vm<2:0>` for 16-bit elements, `Vm<3:0>` for 32-bit.
    DScalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstTag {
    None,
    /// A value the encoding implies, such as the scale of a ThumbEE
    /// register offset.
    Implied(u8),
    /// ARM modified immediate: bits 7..0 rotated right by `2 * bits 11..8`.
    ArmRotImm,
    /// Bits 11..0.
    Imm12,
    /// Bits 11..0, negated when `U` (bit 23) is clear.
    Imm12U,
    /// `imm4H:imm4L` (bits 11..8, 3..0), negated when `U` is clear.
    Imm8HLU,
    /// Bits 7..0 times 4, negated when `U` is clear.
    Imm8x4U,
    /// Bits 23..0.
    Imm24,
    /// BKPT immediate, bits 19..8 and 3..0.
    ImmBkpt,
    /// MOVW/MOVT immediate, bits 19..16 and 11..0.
    Imm16Split,
    /// Bits 3..0.
    Imm4,
    /// Bits 19..16.
    Bits16_19,
    /// Shift amount in bits 11..7, 0 means 32 for LSR and ASR.
    ShiftImm,
    /// Extend rotation bits 11..10, times 8.
    Rotation,
    /// Bitfield lsb, bits 11..7.
    Lsb,
    /// CPS mode, bits 4..0.
    CpsMode,
    /// `VFPExpandImm` of `imm4H:imm4L` as single precision.
    VfpImm32,
    /// `VFPExpandImm` of `imm4H:imm4L` as double precision.
    VfpImm64,
    /// VCVT fixed point fraction bits, `(sx ? 32 : 16) - imm4:i`.
    VcvtFbits,
    /// Right shift amount, `2 * esize - imm6`.
    SimdShrImm,
    /// Left shift amount, `imm6 - esize`.
    SimdShlImm,
    /// VCVT fixed point fraction bits, `64 - imm6`.
    SimdCvtFbits,
    /// `AdvSIMDExpandImm(op, cmode, i:imm3:imm4)`.
    SimdModImm,
    /// VEXT byte index, bits 11..8.
    VextImm,
    /// Thumb bits 10..6.
    T6_10,
    /// Thumb bits 10..6 times 2.
    T6_10x2,
    /// Thumb bits 10..6 times 4.
    T6_10x4,
    /// Thumb shift amount in bits 10..6, 0 means 32 for LSR and ASR.
    T6_10Shift,
    /// Thumb bits 7..0.
    T0_7,
    /// Thumb bits 7..0 times 4.
    T0_7x4,
    /// Thumb bits 8..6.
    T6_8,
    /// Thumb bits 6..0 times 4.
    T0_6x4,
    /// `ThumbExpandImm(i:imm3:imm8)`.
    TModImm,
    /// Plain `i:imm3:imm8`.
    TImm12,
    /// `imm4:i:imm3:imm8`.
    TImm16,
    /// Bits 7..0.
    TImm8,
    /// Bits 7..0, negated when `U` (bit 9) is clear.
    TImm8U9,
    /// Shift amount `imm3:imm2`, 0 means 32 for LSR and ASR.
    TShiftImm,
    /// Bitfield lsb `imm3:imm2`.
    TLsb,
    /// Bits 5..4, LSL amount of a register offset.
    TImm2,
    /// Extend rotation bits 5..4, times 8.
    TRotation,
    /// Bits 7..0 times 4.
    TImm8x4,
    /// ThumbEE negative offset, `-(bits 8..6 * 4)`.
    EeImm3Neg,
    /// ThumbEE bits 7..3 times 4.
    EeImm5x4,
    /// ThumbEE bits 8..3 times 4.
    EeImm6x4,
    /// ThumbEE HBP parameter, bits 7..5.
    EeImm3,
    /// ThumbEE HBLP parameter, bits 9..5.
    EeImm5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetTag {
    None,
    /// `PC + sext(imm24 << 2)`, `PC = address + 8`.
    Arm24,
    /// BLX: `PC + sext(imm24:H:0)`.
    ArmBlx,
    /// Literal: `Align(PC, 4) ± imm12`.
    ArmLit12,
    /// `PC + sext(imm8 << 1)`, `PC = address + 4`.
    T16Cond8,
    /// `PC + sext(imm11 << 1)`.
    T16Imm11,
    /// CBZ/CBNZ: `PC + i:imm5:0`.
    T16Cbz,
    /// `Align(PC, 4) + imm8 * 4`.
    T16Lit8,
    /// Conditional B T3: `PC + sext(S:J2:J1:imm6:imm11:0)`.
    T32Cond20,
    /// B/BL T4: `PC + sext(S:I1:I2:imm10:imm11:0)`, `I = NOT(J XOR S)`.
    T32Imm24,
    /// BLX T2: `Align(PC, 4) + sext(S:I1:I2:imm10H:imm10L:00)`.
    T32Blx24,
    /// Literal: `Align(PC, 4) ± imm12`.
    T32Lit12,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftTag {
    None,
    Lsl,
    Lsr,
    Asr,
    Ror,
    Rrx,
    /// Bits 6..5, immediate amount; `ROR #0` is RRX.
    Arm6_5,
    /// Bits 6..5, amount in a register.
    ArmReg6_5,
    /// Bit 6 selects LSL or ASR (SSAT, USAT, PKH).
    Bit6,
    /// Thumb-2 bits 5..4, immediate amount; `ROR #0` is RRX.
    T32_5_4,
    /// Thumb-2 register controlled shift type, bits 22..21.
    T32_22_21,
    /// Thumb-2 bit 21 selects LSL or ASR (SSAT, USAT).
    T32Bit21,
    /// Thumb-2 bit 5 selects LSL or ASR (PKH).
    T32Bit5,
    /// Thumb shift-by-immediate opcode, bits 12..11.
    T16_12_11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondTag {
    /// Unconditional, or predicated by the IT block in Thumb.
    None,
    /// ARM bits 31..28.
    Arm28,
    /// Thumb conditional branch, bits 11..8.
    T16_8,
    /// Thumb-2 conditional branch, bits 25..22.
    T32_22,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetFlagsTag {
    None,
    /// `S` in bit 20.
    Bit20,
    Always,
    /// 16-bit Thumb arithmetic sets flags only outside of an IT block.
    NotInIt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostIndexTag {
    None,
    /// `P` (bit 24) clear.
    ArmP24Clear,
    /// Thumb-2 `P` (bit 10) clear.
    T32P10Clear,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WritebackTag {
    None,
    /// `W` in bit 21.
    ArmW21,
    /// Post indexed (`P` clear) or `W` set.
    ArmPostOrW21,
    /// Thumb-2 `W` in bit 8.
    T32W8,
    /// Thumb LDM writes back unless the base is in the list.
    T16NotInList,
    /// VLD/VST with `Rm` other than PC.
    SimdRm,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncDecTag {
    None,
    Ia,
    Db,
    /// `P` (bit 24) and `U` (bit 23).
    Arm23_24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegListTag {
    None,
    /// Bits 15..0.
    Bits16,
    /// Thumb bits 7..0.
    T8,
    /// Thumb PUSH: bits 7..0, bit 8 adds LR.
    T8Lr,
    /// Thumb POP: bits 7..0, bit 8 adds PC.
    T8Pc,
}

/// MSR `mask`, which PSR byte fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldMaskTag {
    None,
    /// Bits 19..16.
    Bits16_19,
    /// Thumb-2 bits 11..8.
    T8_11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpNumTag {
    None,
    /// Bits 11..8.
    Bits8_11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpOpTag {
    None,
    /// MCR/MRC opc1, bits 23..21.
    Bits21_23,
    /// CDP opc1, bits 23..20.
    Bits20_23,
    /// MCRR/MRRC opc1, bits 7..4.
    Bits4_7,
    /// opc2, bits 7..5.
    Bits5_7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpLongTag {
    None,
    /// LDC/STC `D` (long transfer), bit 22.
    Bit22,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoprocTags {
    pub num: CpNumTag,
    pub op1: CpOpTag,
    pub op2: CpOpTag,
    pub long: CpLongTag,
}

impl CoprocTags {
    pub const NONE: Self = Self {
        num: CpNumTag::None,
        op1: CpOpTag::None,
        op2: CpOpTag::None,
        long: CpLongTag::None,
    };
}

/// What the memory system does with an unaligned address.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnalignedAction {
    /// No memory access, or byte sized.
    #[default]
    None,
    /// Legacy LDR: load from the aligned address and rotate.
    Rotate,
    /// Legacy: ignore the low address bits.
    Align,
    /// Alignment fault.
    Fault,
    /// Unaligned access performed.
    Unaligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItTag {
    None,
    /// `firstcond:mask`, bits 7..0.
    Bits0_7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerTag {
    None,
    /// ThumbEE HB/HBL handler, bits 7..0.
    Bits0_7,
    /// ThumbEE HBP/HBLP handler, bits 4..0.
    Bits0_4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthTag {
    None,
    /// `msb` in bits 20..16, width is `msb - lsb + 1`.
    ArmMsb,
    /// `widthminus1` in bits 20..16.
    ArmWidthM1,
    /// Thumb-2 `msb` in bits 4..0.
    TMsb,
    /// Thumb-2 `widthminus1` in bits 4..0.
    TWidthM1,
    /// SSAT `sat_imm` in bits 20..16, plus one.
    Sat20Plus1,
    /// USAT `sat_imm` in bits 20..16.
    Sat20,
    /// SSAT16 `sat_imm` in bits 19..16, plus one.
    Sat19Plus1,
    /// USAT16 `sat_imm` in bits 19..16.
    Sat19,
    /// Thumb-2 SSAT `sat_imm` in bits 4..0, plus one.
    TSat4Plus1,
    /// Thumb-2 USAT `sat_imm` in bits 4..0.
    TSat4,
    /// Thumb-2 SSAT16 `sat_imm` in bits 3..0, plus one.
    TSat3Plus1,
    /// Thumb-2 USAT16 `sat_imm` in bits 3..0.
    TSat3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EsizeTag {
    None,
    E8,
    E16,
    E32,
    E64,
    /// `8 << size`, size in bits 21..20.
    Size20,
    /// `8 << size`, size in bits 19..18.
    Size18,
    /// `16 << size`, size in bits 19..18. Source elements of a narrowing move.
    Size18Wide,
    /// `8 << size`, size in bits 7..6.
    Size6,
    /// `8 << size`, size in bits 11..10.
    Size10,
    /// Highest set bit of `L:imm6<5:3>`.
    ImmL6,
    /// Lowest set bit of VDUP (scalar) `imm4`, bits 19..16.
    Dup19_16,
    /// VMOV scalar `opc1:opc2`, bits 22..21 and 6..5.
    MovScalar,
    /// VDUP (core) `B:E`, bits 22 and 5.
    DupCore,
    /// VFP `sz` in bit 8.
    VfpSz8,
    /// Advanced SIMD float `sz` in bit 20.
    SimdSz20,
}

/// Element data type, the `.S32` style suffixes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    None,
    S8,
    S16,
    S32,
    S64,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F16,
    F32,
    F64,
    P8,
    B8,
    B16,
    B32,
    B64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtTag {
    None,
    Fixed(DataType),
    /// Signed or unsigned by `U` (bit 24), element size from the record.
    SignedU24,
    /// Integer of element size.
    Int,
    /// Untyped of element size.
    Untyped,
    /// Signed of element size.
    Signed,
    /// Float of element size.
    Float,
    /// F32 or F64 by VFP `sz` (bit 8).
    VfpSz8,
    /// S32 when bit 16 is set, U32 otherwise.
    IntBit16,
    /// S32 when bit 7 is set, U32 otherwise.
    IntBit7,
    /// Unsigned of element size when bit 7 is set, signed otherwise.
    UnsignedBit7,
    /// Unsigned of element size when bit 6 is set, signed otherwise.
    UnsignedBit6,
    /// Signed or unsigned by `U` (bit 23), element size from the record.
    SignedU23,
    /// F32 when bit 10 is set, signed of element size otherwise.
    IntOrFloat10,
    /// F32 when bit 8 is set, U32 otherwise.
    U32OrFloat8,
    /// VFP fixed point type by `U` (bit 16) and `sx` (bit 7).
    VfpFixed,
    /// S32 or U32 by `U` (bit 24).
    SimdFixed24,
    /// Advanced SIMD VCVT destination, `op` in bits 8..7.
    SimdCvtDst,
    /// Advanced SIMD VCVT source, `op` in bits 8..7.
    SimdCvtSrc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexTag {
    None,
    /// By-scalar index: `M:Vm<3>` for 16-bit elements, `M` for 32-bit.
    Scalar,
    /// VDUP (scalar) index above the lowest set bit of `imm4`.
    Dup19_16,
    /// VMOV scalar index from `opc1:opc2`.
    MovScalar,
    /// VLD/VST single lane index from `index_align`.
    Lane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignTag {
    None,
    /// VLD/VST multiple `align` in bits 5..4.
    Multi5_4,
    /// VLDn/VSTn single lane, low bits of `index_align`. Carries `n`.
    Lane(u8),
    /// VLDn all lanes, `a` in bit 4. Carries `n`.
    AllLanes(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NregsTag {
    None,
    Fixed(u8),
    /// VLD/VST multiple `type`, bits 11..8.
    VldType,
    /// VTBL/VTBX `len`, bits 9..8.
    Len8_9,
    /// VLDM/VSTM single precision `imm8`.
    VfpImm8,
    /// VLDM/VSTM double precision `imm8 / 2`.
    VfpImm8Half,
    /// VLD1 all lanes, `T` in bit 5.
    AllLanesT5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncrTag {
    None,
    VldType,
    /// Lane spacing from `index_align`.
    Lane,
    /// All lanes spacing from `T`, bit 5.
    AllLanesT5,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModImmKind {
    #[default]
    None,
    Simd,
    Vfp32,
    Vfp64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimdTags {
    pub esize: EsizeTag,
    pub dt: [DtTag; 2],
    pub index: IndexTag,
    pub align: AlignTag,
    pub nregs: NregsTag,
    pub incr: IncrTag,
    pub modimm: ModImmKind,
}

impl SimdTags {
    pub const NONE: Self = Self {
        esize: EsizeTag::None,
        dt: [DtTag::None, DtTag::None],
        index: IndexTag::None,
        align: AlignTag::None,
        nregs: NregsTag::None,
        incr: IncrTag::None,
        modimm: ModImmKind::None,
    };
}

/// Static description of one symbolic instruction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpAttrs {
    pub mnemonic: &'static str,
    pub format: &'static str,
    pub arch: ArchVersion,
    pub isa: IsaFeature,
    pub set_flags: SetFlagsTag,
    pub cond: CondTag,
    pub regs: [RegTag; 4],
    pub constant: ConstTag,
    pub target: TargetTag,
    pub shift: ShiftTag,
    pub width: WidthTag,
    pub field_mask: FieldMaskTag,
    /// Bytes per memory access, 0 for none.
    pub size: u8,
    pub sign_extend: bool,
    pub post_index: PostIndexTag,
    pub writeback: WritebackTag,
    pub coproc: CoprocTags,
    pub reg_list: RegListTag,
    pub inc_dec: IncDecTag,
    /// Indexed by SCTLR.U.
    pub unaligned: [UnalignedAction; 2],
    pub it: ItTag,
    pub handler: HandlerTag,
    pub simd: SimdTags,
}

impl OpAttrs {
    /// A record declaring no fields.
    #[must_use]
    pub const fn new(mnemonic: &'static str, format: &'static str) -> Self {
        Self {
            mnemonic,
            format,
            arch: ArchVersion::V4,
            isa: IsaFeature::Base,
            set_flags: SetFlagsTag::None,
            cond: CondTag::None,
            regs: [RegTag::None; 4],
            constant: ConstTag::None,
            target: TargetTag::None,
            shift: ShiftTag::None,
            width: WidthTag::None,
            field_mask: FieldMaskTag::None,
            size: 0,
            sign_extend: false,
            post_index: PostIndexTag::None,
            writeback: WritebackTag::None,
            coproc: CoprocTags::NONE,
            reg_list: RegListTag::None,
            inc_dec: IncDecTag::None,
            unaligned: [UnalignedAction::None; 2],
            it: ItTag::None,
            handler: HandlerTag::None,
            simd: SimdTags::NONE,
        }
    }

    /// Replaces the format string.
    #[must_use]
    pub const fn fmt(mut self, format: &'static str) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn arch(mut self, arch: ArchVersion) -> Self {
        self.arch = arch;
        self
    }

    #[must_use]
    pub const fn isa(mut self, isa: IsaFeature) -> Self {
        self.isa = isa;
        self
    }

    #[must_use]
    pub const fn cond(mut self, cond: CondTag) -> Self {
        self.cond = cond;
        self
    }

    #[must_use]
    pub const fn flags(mut self, set_flags: SetFlagsTag) -> Self {
        self.set_flags = set_flags;
        self
    }

    #[must_use]
    pub const fn r0(mut self, tag: RegTag) -> Self {
        self.regs = [tag, self.regs[1], self.regs[2], self.regs[3]];
        self
    }

    #[must_use]
    pub const fn r1(mut self, tag: RegTag) -> Self {
        self.regs = [self.regs[0], tag, self.regs[2], self.regs[3]];
        self
    }

    #[must_use]
    pub const fn r2(mut self, tag: RegTag) -> Self {
        self.regs = [self.regs[0], self.regs[1], tag, self.regs[3]];
        self
    }

    #[must_use]
    pub const fn r3(mut self, tag: RegTag) -> Self {
        self.regs = [self.regs[0], self.regs[1], self.regs[2], tag];
        self
    }

    #[must_use]
    pub const fn imm(mut self, tag: ConstTag) -> Self {
        self.constant = tag;
        self
    }

    #[must_use]
    pub const fn target(mut self, tag: TargetTag) -> Self {
        self.target = tag;
        self
    }

    #[must_use]
    pub const fn shift(mut self, tag: ShiftTag) -> Self {
        self.shift = tag;
        self
    }

    #[must_use]
    pub const fn width(mut self, tag: WidthTag) -> Self {
        self.width = tag;
        self
    }

    #[must_use]
    pub const fn mask(mut self, tag: FieldMaskTag) -> Self {
        self.field_mask = tag;
        self
    }

    /// Memory access of `size` bytes.
    #[must_use]
    pub const fn mem(mut self, size: u8, sign_extend: bool) -> Self {
        self.size = size;
        self.sign_extend = sign_extend;
        self
    }

    #[must_use]
    pub const fn pi(mut self, tag: PostIndexTag) -> Self {
        self.post_index = tag;
        self
    }

    #[must_use]
    pub const fn wb(mut self, tag: WritebackTag) -> Self {
        self.writeback = tag;
        self
    }

    #[must_use]
    pub const fn coproc(mut self, num: CpNumTag, op1: CpOpTag, op2: CpOpTag, long: CpLongTag) -> Self {
        self.coproc = CoprocTags { num, op1, op2, long };
        self
    }

    #[must_use]
    pub const fn list(mut self, tag: RegListTag) -> Self {
        self.reg_list = tag;
        self
    }

    #[must_use]
    pub const fn incdec(mut self, tag: IncDecTag) -> Self {
        self.inc_dec = tag;
        self
    }

    /// Unaligned behaviour with SCTLR.U clear and set.
    #[must_use]
    pub const fn unaligned(mut self, legacy: UnalignedAction, armv7: UnalignedAction) -> Self {
        self.unaligned = [legacy, armv7];
        self
    }

    #[must_use]
    pub const fn it(mut self, tag: ItTag) -> Self {
        self.it = tag;
        self
    }

    #[must_use]
    pub const fn handler(mut self, tag: HandlerTag) -> Self {
        self.handler = tag;
        self
    }

    #[must_use]
    pub const fn esize(mut self, tag: EsizeTag) -> Self {
        self.simd.esize = tag;
        self
    }

    #[must_use]
    pub const fn dt(mut self, first: DtTag, second: DtTag) -> Self {
        self.simd.dt = [first, second];
        self
    }

    #[must_use]
    pub const fn index(mut self, tag: IndexTag) -> Self {
        self.simd.index = tag;
        self
    }

    #[must_use]
    pub const fn align(mut self, tag: AlignTag) -> Self {
        self.simd.align = tag;
        self
    }

    #[must_use]
    pub const fn nregs(mut self, tag: NregsTag) -> Self {
        self.simd.nregs = tag;
        self
    }

    #[must_use]
    pub const fn incr(mut self, tag: IncrTag) -> Self {
        self.simd.incr = tag;
        self
    }

    #[must_use]
    pub const fn modimm(mut self, kind: ModImmKind) -> Self {
        self.simd.modimm = kind;
        self
    }

    /// Number of register slots in use.
    #[must_use]
    pub fn reg_count(&self) -> usize {
        self.regs.iter().filter(|r| **r != RegTag::None).count()
    }
}
