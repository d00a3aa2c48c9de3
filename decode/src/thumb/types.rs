//! # Thumb Instruction Types
//!
//! [`ThumbType`] names every Thumb encoding the native tables match. Each
//! record pairs the extraction tags for the Thumb layout with the
//! [`ArmType`] the encoding shares its semantics with, so a decoded Thumb
//! instruction looks the same as its ARM counterpart to anything downstream
//! of the decoder.
//!
//! Register slots keep the order of the ARM record. A 16-bit `ANDS Rdn, Rm`
//! fills `[Rdn, Rdn, Rm]`, the `Rd, Rn, Rm` shape of `AND`.
//!
//! 32-bit names carry a `W` suffix where a 16-bit encoding already took the
//! plain name, like the `.W` qualifier in assembler syntax.

use crate::arch::ArchVersion::{V4T, V5T, V6, V6K, V6T2, V7};
use crate::arch::IsaFeature;
use crate::arm::{ArmType as Arm, Dp, BYTE, WORD_LOAD, WORD_STORE};
use crate::attrs::{
    CondTag, ConstTag, FieldMaskTag, HandlerTag, IncDecTag, ItTag, OpAttrs, PostIndexTag, RegListTag, RegTag,
    SetFlagsTag, ShiftTag, TargetTag, UnalignedAction, WidthTag, WritebackTag,
};

/// Attribute record of a Thumb type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbAttrs {
    /// Architecture neutral type this encoding decodes to.
    pub arm: Arm,
    pub op: OpAttrs,
}

const fn t(arm: Arm, op: OpAttrs) -> ThumbAttrs {
    ThumbAttrs { arm, op }
}

// 32-bit field positions. `Rn` sits in hw1, the others in hw2.
const RD: RegTag = RegTag::R8_11;
const RN: RegTag = RegTag::R16_19;
const RM: RegTag = RegTag::R0_3;
const RT: RegTag = RegTag::R12_15;

const SP: RegTag = RegTag::Implied(13);
const PC: RegTag = RegTag::Implied(15);
const LR: RegTag = RegTag::Implied(14);

const HALF: [UnalignedAction; 2] = [UnalignedAction::Align, UnalignedAction::Unaligned];
const STRICT: [UnalignedAction; 2] = [UnalignedAction::Fault, UnalignedAction::Fault];

const fn narrow(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, format).arch(V4T)
}

/// `LSLS Rd, Rm, #imm`, the opcode in bits 12..11 selects the shift.
const fn shift_imm(mnemonic: &'static str) -> OpAttrs {
    narrow(mnemonic, "%m%c%s %0, %1, %C")
        .r0(RegTag::T0_2)
        .r1(RegTag::T3_5)
        .shift(ShiftTag::T16_12_11)
        .imm(ConstTag::T6_10Shift)
        .flags(SetFlagsTag::NotInIt)
}

const fn add_sub(mnemonic: &'static str) -> OpAttrs {
    narrow(mnemonic, "%m%c%s %0, %1, %2")
        .r0(RegTag::T0_2)
        .r1(RegTag::T3_5)
        .r2(RegTag::T6_8)
        .flags(SetFlagsTag::NotInIt)
}

const fn add_sub_imm3(mnemonic: &'static str) -> OpAttrs {
    narrow(mnemonic, "%m%c%s %0, %1, %C")
        .r0(RegTag::T0_2)
        .r1(RegTag::T3_5)
        .imm(ConstTag::T6_8)
        .flags(SetFlagsTag::NotInIt)
}

/// `Rdn, #imm8` with the register in bits 10..8.
const fn imm8(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    let attrs = narrow(mnemonic, "%m%c%s %0, %C").r0(RegTag::T8_10).imm(ConstTag::T0_7);
    match kind {
        Dp::Binary => attrs.r1(RegTag::T8_10).flags(SetFlagsTag::NotInIt),
        Dp::Move => attrs.flags(SetFlagsTag::NotInIt),
        Dp::Compare => attrs.flags(SetFlagsTag::Always).fmt("%m%c %0, %C"),
    }
}

/// Two register data processing, `Rdn, Rm`.
const fn alu(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    let attrs = narrow(mnemonic, "%m%c%s %0, %1").r0(RegTag::T0_2);
    match kind {
        Dp::Binary => attrs.r1(RegTag::T0_2).r2(RegTag::T3_5).flags(SetFlagsTag::NotInIt).fmt("%m%c%s %0, %2"),
        Dp::Move => attrs.r1(RegTag::T3_5).flags(SetFlagsTag::NotInIt),
        Dp::Compare => attrs.r1(RegTag::T3_5).flags(SetFlagsTag::Always).fmt("%m%c %0, %1"),
    }
}

/// `LSLS Rdn, Rm`, a move shifted by a register.
const fn alu_shift(mnemonic: &'static str, shift: ShiftTag) -> OpAttrs {
    narrow(mnemonic, "%m%c%s %0, %2")
        .r0(RegTag::T0_2)
        .r1(RegTag::T0_2)
        .r2(RegTag::T3_5)
        .shift(shift)
        .flags(SetFlagsTag::NotInIt)
}

const fn hi_reg(mnemonic: &'static str) -> OpAttrs {
    narrow(mnemonic, "%m%c %0, %1").r0(RegTag::THi0_2).r1(RegTag::T3_6)
}

/// Load/store with `Rt` in bits 2..0 and `Rn` in bits 5..3.
const fn ls16(mnemonic: &'static str, size: u8, sign_extend: bool, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    narrow(mnemonic, "%m%c %0, %M1")
        .r0(RegTag::T0_2)
        .r1(RegTag::T3_5)
        .mem(size, sign_extend)
        .unaligned(unaligned[0], unaligned[1])
}

const fn ls16_reg(mnemonic: &'static str, size: u8, sign_extend: bool, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    ls16(mnemonic, size, sign_extend, unaligned).r2(RegTag::T6_8)
}

const fn ls_sp(mnemonic: &'static str, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    narrow(mnemonic, "%m%c %0, %M1")
        .r0(RegTag::T8_10)
        .r1(SP)
        .imm(ConstTag::T0_7x4)
        .mem(4, false)
        .unaligned(unaligned[0], unaligned[1])
}

const fn extend16(mnemonic: &'static str) -> OpAttrs {
    narrow(mnemonic, "%m%c %0, %1").r0(RegTag::T0_2).r1(RegTag::T3_5).arch(V6)
}

const fn hint16(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m%c").arch(V6T2)
}

/// ThumbEE register offset, scaled by the access size.
const fn ls_scaled(mnemonic: &'static str, size: u8, sign_extend: bool, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    let scale = match size {
        4 => 2,
        2 => 1,
        _ => 0,
    };
    ls16_reg(mnemonic, size, sign_extend, unaligned)
        .shift(ShiftTag::Lsl)
        .imm(ConstTag::Implied(scale))
        .isa(IsaFeature::ThumbEe)
        .arch(V7)
}

const fn ee(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, format).arch(V7).isa(IsaFeature::ThumbEe)
}

const fn ee_load(mnemonic: &'static str, base: RegTag, offset: ConstTag, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    ee(mnemonic, "%m%c %0, %M1")
        .r0(RegTag::T0_2)
        .r1(base)
        .imm(offset)
        .mem(4, false)
        .unaligned(unaligned[0], unaligned[1])
}

const fn wide(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, format).arch(V6T2)
}

const fn dp_base(mnemonic: &'static str, kind: Dp, formats: [&'static str; 3]) -> OpAttrs {
    match kind {
        Dp::Binary => wide(mnemonic, formats[0]).r0(RD).r1(RN).flags(SetFlagsTag::Bit20),
        Dp::Move => wide(mnemonic, formats[1]).r0(RD).flags(SetFlagsTag::Bit20),
        Dp::Compare => wide(mnemonic, formats[2]).r0(RN).flags(SetFlagsTag::Always),
    }
}

/// Data processing with a `ThumbExpandImm` constant.
const fn dp_imm(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    dp_base(mnemonic, kind, ["%m%c%s %0, %1, %C", "%m%c%s %0, %C", "%m%c %0, %C"]).imm(ConstTag::TModImm)
}

/// Data processing with a register shifted by an immediate.
const fn dp_reg(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    let attrs = dp_base(mnemonic, kind, ["%m%c%s %0, %1, %2%H", "%m%c%s %0, %1%H", "%m%c %0, %1%H"])
        .shift(ShiftTag::T32_5_4)
        .imm(ConstTag::TShiftImm);
    match kind {
        Dp::Binary => attrs.r2(RM),
        Dp::Move | Dp::Compare => attrs.r1(RM),
    }
}

const fn media3(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %1, %2").r0(RD).r1(RN).r2(RM)
}

const fn media2(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %1").r0(RD).r1(RM)
}

const fn extend_add(mnemonic: &'static str) -> OpAttrs {
    media3(mnemonic).imm(ConstTag::TRotation).fmt("%m%c %0, %1, %2%R")
}

/// Extends read their source from the `Rm` slot of hw2.
const fn extend(mnemonic: &'static str) -> OpAttrs {
    media2(mnemonic).imm(ConstTag::TRotation).fmt("%m%c %0, %1%R")
}

/// QADD and friends take `Rd, Rm, Rn`.
const fn saturating(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %1, %2").r0(RD).r1(RM).r2(RN)
}

const fn mla(mnemonic: &'static str) -> OpAttrs {
    media3(mnemonic).r3(RT).fmt("%m%c %0, %1, %2, %3")
}

/// `RdLo, RdHi, Rn, Rm`
const fn mul_long(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %1, %2, %3").r0(RT).r1(RD).r2(RN).r3(RM)
}

/// Operand size and unaligned behaviour of a single register transfer.
#[derive(Clone, Copy)]
struct Transfer {
    mnemonic: &'static str,
    size: u8,
    sign_extend: bool,
    unaligned: [UnalignedAction; 2],
}

const STR: Transfer = Transfer { mnemonic: "STR", size: 4, sign_extend: false, unaligned: WORD_STORE };
const STRB: Transfer = Transfer { mnemonic: "STRB", size: 1, sign_extend: false, unaligned: BYTE };
const STRH: Transfer = Transfer { mnemonic: "STRH", size: 2, sign_extend: false, unaligned: HALF };
const LDR: Transfer = Transfer { mnemonic: "LDR", size: 4, sign_extend: false, unaligned: WORD_LOAD };
const LDRB: Transfer = Transfer { mnemonic: "LDRB", size: 1, sign_extend: false, unaligned: BYTE };
const LDRH: Transfer = Transfer { mnemonic: "LDRH", size: 2, sign_extend: false, unaligned: HALF };
const LDRSB: Transfer = Transfer { mnemonic: "LDRSB", size: 1, sign_extend: true, unaligned: BYTE };
const LDRSH: Transfer = Transfer { mnemonic: "LDRSH", size: 2, sign_extend: true, unaligned: HALF };

const fn transfer(op: Transfer, format: &'static str) -> OpAttrs {
    wide(op.mnemonic, format)
        .r0(RT)
        .mem(op.size, op.sign_extend)
        .unaligned(op.unaligned[0], op.unaligned[1])
}

/// `[Rn, #imm12]`
const fn ls_imm12(op: Transfer) -> OpAttrs {
    transfer(op, "%m%c %0, %M1").r1(RN).imm(ConstTag::Imm12)
}

/// `[Rn, #-imm8]`, `[Rn, #±imm8]!` and `[Rn], #±imm8`.
const fn ls_imm8(op: Transfer) -> OpAttrs {
    transfer(op, "%m%c %0, %M1")
        .r1(RN)
        .imm(ConstTag::TImm8U9)
        .pi(PostIndexTag::T32P10Clear)
        .wb(WritebackTag::T32W8)
}

/// `[Rn, Rm, LSL #imm2]`
const fn ls_reg(op: Transfer) -> OpAttrs {
    transfer(op, "%m%c %0, %M1").r1(RN).r2(RM).shift(ShiftTag::Lsl).imm(ConstTag::TImm2)
}

/// Unprivileged, `[Rn, #imm8]`.
const fn ls_user(op: Transfer, mnemonic: &'static str) -> OpAttrs {
    let op = Transfer { mnemonic, ..op };
    transfer(op, "%m%c %0, %M1").r1(RN).imm(ConstTag::TImm8)
}

const fn ls_lit(op: Transfer) -> OpAttrs {
    transfer(op, "%m%c %0, %T").target(TargetTag::T32Lit12)
}

const fn preload(mnemonic: &'static str, offset: ConstTag) -> OpAttrs {
    wide(mnemonic, "%m %M0").r0(RN).imm(offset)
}

const fn preload_reg(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m %M0").r0(RN).r1(RM).shift(ShiftTag::Lsl).imm(ConstTag::TImm2)
}

const fn block(mnemonic: &'static str, inc_dec: IncDecTag) -> OpAttrs {
    wide(mnemonic, "%m%i%c %0%!, %L")
        .r0(RN)
        .list(RegListTag::Bits16)
        .incdec(inc_dec)
        .wb(WritebackTag::ArmW21)
        .mem(4, false)
        .unaligned(UnalignedAction::Fault, UnalignedAction::Fault)
}

const fn stack(mnemonic: &'static str, inc_dec: IncDecTag) -> OpAttrs {
    wide(mnemonic, "%m%c %L")
        .r0(SP)
        .list(RegListTag::Bits16)
        .incdec(inc_dec)
        .wb(WritebackTag::Always)
        .mem(4, false)
        .unaligned(UnalignedAction::Fault, UnalignedAction::Fault)
}

const fn exclusive(mnemonic: &'static str, size: u8) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %M1")
        .r0(RT)
        .r1(RN)
        .mem(size, false)
        .unaligned(STRICT[0], STRICT[1])
        .arch(V7)
}

/// `STREX{B,H,D} Rd, Rt, [Rn]` with the status register in bits 3..0.
const fn store_exclusive(mnemonic: &'static str, size: u8) -> OpAttrs {
    exclusive(mnemonic, size).r0(RM).r1(RT).r2(RN).fmt("%m%c %0, %1, %M2")
}

const fn dual(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c %0, %3, %M1")
        .r0(RT)
        .r1(RN)
        .r3(RD)
        .imm(ConstTag::Imm8x4U)
        .mem(8, false)
        .pi(PostIndexTag::ArmP24Clear)
        .wb(WritebackTag::ArmPostOrW21)
        .unaligned(STRICT[0], STRICT[1])
}

const fn hint(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m%c.W")
}

const fn barrier(mnemonic: &'static str) -> OpAttrs {
    wide(mnemonic, "%m %C").imm(ConstTag::Imm4).arch(V7)
}

opcodes! {
    /// Thumb encoding type.
    pub enum ThumbType: ThumbAttrs in THUMB_ATTRS {
        Undefined = t(Arm::Undefined, OpAttrs::new("UNDEFINED", "%m")),

        // 16-bit shift, add, subtract, move and compare
        LslImm = t(Arm::MovRmShftImm, shift_imm("LSL")),
        LsrImm = t(Arm::MovRmShftImm, shift_imm("LSR")),
        AsrImm = t(Arm::MovRmShftImm, shift_imm("ASR")),
        AddReg = t(Arm::AddRm, add_sub("ADD")),
        SubReg = t(Arm::SubRm, add_sub("SUB")),
        AddImm3 = t(Arm::AddImm, add_sub_imm3("ADD")),
        SubImm3 = t(Arm::SubImm, add_sub_imm3("SUB")),
        MovImm = t(Arm::MovImm, imm8("MOV", Dp::Move)),
        CmpImm = t(Arm::CmpImm, imm8("CMP", Dp::Compare)),
        AddImm8 = t(Arm::AddImm, imm8("ADD", Dp::Binary)),
        SubImm8 = t(Arm::SubImm, imm8("SUB", Dp::Binary)),

        // 16-bit data processing
        And = t(Arm::AndRm, alu("AND", Dp::Binary)),
        Eor = t(Arm::EorRm, alu("EOR", Dp::Binary)),
        LslReg = t(Arm::MovRmShftRs, alu_shift("LSL", ShiftTag::Lsl)),
        LsrReg = t(Arm::MovRmShftRs, alu_shift("LSR", ShiftTag::Lsr)),
        AsrReg = t(Arm::MovRmShftRs, alu_shift("ASR", ShiftTag::Asr)),
        Adc = t(Arm::AdcRm, alu("ADC", Dp::Binary)),
        Sbc = t(Arm::SbcRm, alu("SBC", Dp::Binary)),
        RorReg = t(Arm::MovRmShftRs, alu_shift("ROR", ShiftTag::Ror)),
        Tst = t(Arm::TstRm, alu("TST", Dp::Compare)),
        Rsb = t(Arm::RsbImm, alu("RSB", Dp::Move).imm(ConstTag::Implied(0)).fmt("%m%c%s %0, %1, %C")),
        Cmp = t(Arm::CmpRm, alu("CMP", Dp::Compare)),
        Cmn = t(Arm::CmnRm, alu("CMN", Dp::Compare)),
        Orr = t(Arm::OrrRm, alu("ORR", Dp::Binary)),
        Mul = t(Arm::Mul, alu("MUL", Dp::Move).r2(RegTag::T0_2).fmt("%m%c%s %0, %1, %2")),
        Bic = t(Arm::BicRm, alu("BIC", Dp::Binary)),
        Mvn = t(Arm::MvnRm, alu("MVN", Dp::Move)),

        // Special data processing and branch and exchange
        AddHi = t(Arm::AddRm, hi_reg("ADD").r1(RegTag::THi0_2).r2(RegTag::T3_6).fmt("%m%c %0, %2")),
        CmpHi = t(Arm::CmpRm, hi_reg("CMP").flags(SetFlagsTag::Always)),
        MovHi = t(Arm::MovRm, hi_reg("MOV")),
        Bx = t(Arm::Bx, narrow("BX", "%m%c %0").r0(RegTag::T3_6)),
        BlxReg = t(Arm::BlxReg, narrow("BLX", "%m%c %0").r0(RegTag::T3_6).arch(V5T)),

        LdrLit = t(Arm::LdrLit, narrow("LDR", "%m%c %0, %T").r0(RegTag::T8_10).target(TargetTag::T16Lit8).mem(4, false)),

        // 16-bit loads and stores
        StrReg = t(Arm::StrReg, ls16_reg("STR", 4, false, WORD_STORE)),
        StrhReg = t(Arm::StrhReg, ls16_reg("STRH", 2, false, HALF)),
        StrbReg = t(Arm::StrbReg, ls16_reg("STRB", 1, false, BYTE)),
        LdrsbReg = t(Arm::LdrsbReg, ls16_reg("LDRSB", 1, true, BYTE)),
        LdrReg = t(Arm::LdrReg, ls16_reg("LDR", 4, false, WORD_LOAD)),
        LdrhReg = t(Arm::LdrhReg, ls16_reg("LDRH", 2, false, HALF)),
        LdrbReg = t(Arm::LdrbReg, ls16_reg("LDRB", 1, false, BYTE)),
        LdrshReg = t(Arm::LdrshReg, ls16_reg("LDRSH", 2, true, HALF)),
        StrImm = t(Arm::StrImm, ls16("STR", 4, false, WORD_STORE).imm(ConstTag::T6_10x4)),
        LdrImm = t(Arm::LdrImm, ls16("LDR", 4, false, WORD_LOAD).imm(ConstTag::T6_10x4)),
        StrbImm = t(Arm::StrbImm, ls16("STRB", 1, false, BYTE).imm(ConstTag::T6_10)),
        LdrbImm = t(Arm::LdrbImm, ls16("LDRB", 1, false, BYTE).imm(ConstTag::T6_10)),
        StrhImm = t(Arm::StrhImm, ls16("STRH", 2, false, HALF).imm(ConstTag::T6_10x2)),
        LdrhImm = t(Arm::LdrhImm, ls16("LDRH", 2, false, HALF).imm(ConstTag::T6_10x2)),
        StrSp = t(Arm::StrImm, ls_sp("STR", WORD_STORE)),
        LdrSp = t(Arm::LdrImm, ls_sp("LDR", WORD_LOAD)),

        Adr = t(Arm::AddImm, narrow("ADR", "%m%c %0, %T").r0(RegTag::T8_10).r1(PC).target(TargetTag::T16Lit8)),
        AddSpImm = t(Arm::AddImm, narrow("ADD", "%m%c %0, %1, %C").r0(RegTag::T8_10).r1(SP).imm(ConstTag::T0_7x4)),

        // Miscellaneous 16-bit
        AddSpSp = t(Arm::AddImm, narrow("ADD", "%m%c %0, %1, %C").r0(SP).r1(SP).imm(ConstTag::T0_6x4)),
        SubSpSp = t(Arm::SubImm, narrow("SUB", "%m%c %0, %1, %C").r0(SP).r1(SP).imm(ConstTag::T0_6x4)),
        Cbz = t(Arm::Cbz, narrow("CBZ", "%m %0, %T").r0(RegTag::T0_2).target(TargetTag::T16Cbz).arch(V6T2)),
        Cbnz = t(Arm::Cbnz, narrow("CBNZ", "%m %0, %T").r0(RegTag::T0_2).target(TargetTag::T16Cbz).arch(V6T2)),
        Sxth = t(Arm::Sxth, extend16("SXTH")),
        Sxtb = t(Arm::Sxtb, extend16("SXTB")),
        Uxth = t(Arm::Uxth, extend16("UXTH")),
        Uxtb = t(Arm::Uxtb, extend16("UXTB")),
        Push = t(Arm::Push, narrow("PUSH", "%m%c %L")
            .r0(SP)
            .list(RegListTag::T8Lr)
            .incdec(IncDecTag::Db)
            .wb(WritebackTag::Always)
            .mem(4, false)
            .unaligned(UnalignedAction::Align, UnalignedAction::Fault)),
        Pop = t(Arm::Pop, narrow("POP", "%m%c %L")
            .r0(SP)
            .list(RegListTag::T8Pc)
            .incdec(IncDecTag::Ia)
            .wb(WritebackTag::Always)
            .mem(4, false)
            .unaligned(UnalignedAction::Align, UnalignedAction::Fault)),
        SetendLe = t(Arm::SetendLe, OpAttrs::new("SETEND", "%m LE").arch(V6)),
        SetendBe = t(Arm::SetendBe, OpAttrs::new("SETEND", "%m BE").arch(V6)),
        CpsIe = t(Arm::CpsIe, OpAttrs::new("CPSIE", "%m").arch(V6)),
        CpsId = t(Arm::CpsId, OpAttrs::new("CPSID", "%m").arch(V6)),
        Rev = t(Arm::Rev, extend16("REV")),
        Rev16 = t(Arm::Rev16, extend16("REV16")),
        Revsh = t(Arm::Revsh, extend16("REVSH")),
        Bkpt = t(Arm::Bkpt, OpAttrs::new("BKPT", "%m %C").imm(ConstTag::T0_7).arch(V5T)),
        It = t(Arm::It, OpAttrs::new("IT", "%m%I").it(ItTag::Bits0_7).arch(V6T2)),
        Nop = t(Arm::Nop, hint16("NOP")),
        Yield = t(Arm::Yield, hint16("YIELD")),
        Wfe = t(Arm::Wfe, hint16("WFE")),
        Wfi = t(Arm::Wfi, hint16("WFI")),
        Sev = t(Arm::Sev, hint16("SEV")),

        Stm = t(Arm::Stm, narrow("STM", "%m%c %0!, %L")
            .r0(RegTag::T8_10)
            .list(RegListTag::T8)
            .incdec(IncDecTag::Ia)
            .wb(WritebackTag::Always)
            .mem(4, false)
            .unaligned(UnalignedAction::Align, UnalignedAction::Fault)),
        Ldm = t(Arm::Ldm, narrow("LDM", "%m%c %0%!, %L")
            .r0(RegTag::T8_10)
            .list(RegListTag::T8)
            .incdec(IncDecTag::Ia)
            .wb(WritebackTag::T16NotInList)
            .mem(4, false)
            .unaligned(UnalignedAction::Align, UnalignedAction::Fault)),
        BCond = t(Arm::B, narrow("B", "%m%c %T").cond(CondTag::T16_8).target(TargetTag::T16Cond8)),
        Svc = t(Arm::Svc, narrow("SVC", "%m%c %C").imm(ConstTag::T0_7)),
        B = t(Arm::B, narrow("B", "%m%c %T").target(TargetTag::T16Imm11)),

        // ThumbEE
        Hbp = t(Arm::Hbp, ee("HBP", "%m%c %C, %h").imm(ConstTag::EeImm3).handler(HandlerTag::Bits0_4)),
        Hb = t(Arm::Hb, ee("HB", "%m%c %h").handler(HandlerTag::Bits0_7)),
        Hbl = t(Arm::Hbl, ee("HBL", "%m%c %h").handler(HandlerTag::Bits0_7)),
        Hblp = t(Arm::Hblp, ee("HBLP", "%m%c %C, %h").imm(ConstTag::EeImm5).handler(HandlerTag::Bits0_4)),
        Chka = t(Arm::Chka, ee("CHKA", "%m%c %0, %1").r0(RegTag::THi0_2).r1(RegTag::T3_6)),
        LdrNegEe = t(Arm::LdrImm, ee("LDR", "%m%c %0, %M1")
            .r0(RegTag::T0_2)
            .r1(RegTag::T3_5)
            .imm(ConstTag::EeImm3Neg)
            .mem(4, false)
            .unaligned(WORD_LOAD[0], WORD_LOAD[1])),
        LdrR9 = t(Arm::LdrImm, ee_load("LDR", RegTag::Implied(9), ConstTag::EeImm6x4, WORD_LOAD)),
        LdrR10 = t(Arm::LdrImm, ee_load("LDR", RegTag::Implied(10), ConstTag::EeImm5x4, WORD_LOAD)),
        StrR9 = t(Arm::StrImm, ee_load("STR", RegTag::Implied(9), ConstTag::EeImm6x4, WORD_STORE)),
        StrRegEe = t(Arm::StrReg, ls_scaled("STR", 4, false, WORD_STORE)),
        StrhRegEe = t(Arm::StrhReg, ls_scaled("STRH", 2, false, HALF)),
        LdrRegEe = t(Arm::LdrReg, ls_scaled("LDR", 4, false, WORD_LOAD)),
        LdrhRegEe = t(Arm::LdrhReg, ls_scaled("LDRH", 2, false, HALF)),
        LdrshRegEe = t(Arm::LdrshReg, ls_scaled("LDRSH", 2, true, HALF)),
        Enterx = t(Arm::Enterx, ee("ENTERX", "%m")),
        Leavex = t(Arm::Leavex, ee("LEAVEX", "%m")),

        // Data processing, modified immediate
        AndImmW = t(Arm::AndImm, dp_imm("AND", Dp::Binary)),
        TstImmW = t(Arm::TstImm, dp_imm("TST", Dp::Compare)),
        BicImmW = t(Arm::BicImm, dp_imm("BIC", Dp::Binary)),
        OrrImmW = t(Arm::OrrImm, dp_imm("ORR", Dp::Binary)),
        MovImmW = t(Arm::MovImm, dp_imm("MOV", Dp::Move)),
        OrnImmW = t(Arm::OrnImm, dp_imm("ORN", Dp::Binary)),
        MvnImmW = t(Arm::MvnImm, dp_imm("MVN", Dp::Move)),
        EorImmW = t(Arm::EorImm, dp_imm("EOR", Dp::Binary)),
        TeqImmW = t(Arm::TeqImm, dp_imm("TEQ", Dp::Compare)),
        AddImmW = t(Arm::AddImm, dp_imm("ADD", Dp::Binary)),
        CmnImmW = t(Arm::CmnImm, dp_imm("CMN", Dp::Compare)),
        AdcImmW = t(Arm::AdcImm, dp_imm("ADC", Dp::Binary)),
        SbcImmW = t(Arm::SbcImm, dp_imm("SBC", Dp::Binary)),
        SubImmW = t(Arm::SubImm, dp_imm("SUB", Dp::Binary)),
        CmpImmW = t(Arm::CmpImm, dp_imm("CMP", Dp::Compare)),
        RsbImmW = t(Arm::RsbImm, dp_imm("RSB", Dp::Binary)),

        // Data processing, shifted register
        AndRegW = t(Arm::AndRmShftImm, dp_reg("AND", Dp::Binary)),
        TstRegW = t(Arm::TstRmShftImm, dp_reg("TST", Dp::Compare)),
        BicRegW = t(Arm::BicRmShftImm, dp_reg("BIC", Dp::Binary)),
        OrrRegW = t(Arm::OrrRmShftImm, dp_reg("ORR", Dp::Binary)),
        MovRegW = t(Arm::MovRmShftImm, dp_reg("MOV", Dp::Move)),
        OrnRegW = t(Arm::OrnReg, dp_reg("ORN", Dp::Binary)),
        MvnRegW = t(Arm::MvnRmShftImm, dp_reg("MVN", Dp::Move)),
        EorRegW = t(Arm::EorRmShftImm, dp_reg("EOR", Dp::Binary)),
        TeqRegW = t(Arm::TeqRmShftImm, dp_reg("TEQ", Dp::Compare)),
        PkhBt = t(Arm::PkhBt, media3("PKHBT").shift(ShiftTag::T32Bit5).imm(ConstTag::TShiftImm).fmt("%m%c %0, %1, %2%H")),
        PkhTb = t(Arm::PkhTb, media3("PKHTB").shift(ShiftTag::T32Bit5).imm(ConstTag::TShiftImm).fmt("%m%c %0, %1, %2%H")),
        AddRegW = t(Arm::AddRmShftImm, dp_reg("ADD", Dp::Binary)),
        CmnRegW = t(Arm::CmnRmShftImm, dp_reg("CMN", Dp::Compare)),
        AdcRegW = t(Arm::AdcRmShftImm, dp_reg("ADC", Dp::Binary)),
        SbcRegW = t(Arm::SbcRmShftImm, dp_reg("SBC", Dp::Binary)),
        SubRegW = t(Arm::SubRmShftImm, dp_reg("SUB", Dp::Binary)),
        CmpRegW = t(Arm::CmpRmShftImm, dp_reg("CMP", Dp::Compare)),
        RsbRegW = t(Arm::RsbRmShftImm, dp_reg("RSB", Dp::Binary)),

        // Shift by register, `Rd, Rn, Rm` with the shift type in hw1
        ShiftRegW = t(Arm::MovRmShftRs, wide("MOV", "%m%c%s %0, %1, %S %2")
            .r0(RD)
            .r1(RN)
            .r2(RM)
            .shift(ShiftTag::T32_22_21)
            .flags(SetFlagsTag::Bit20)),

        // Data processing, plain binary immediate
        Addw = t(Arm::AddImm, wide("ADDW", "%m%c %0, %1, %C").r0(RD).r1(RN).imm(ConstTag::TImm12)),
        Subw = t(Arm::SubImm, wide("SUBW", "%m%c %0, %1, %C").r0(RD).r1(RN).imm(ConstTag::TImm12)),
        MovW = t(Arm::MovW, wide("MOVW", "%m%c %0, %C").r0(RD).imm(ConstTag::TImm16)),
        MovT = t(Arm::MovT, wide("MOVT", "%m%c %0, %C").r0(RD).imm(ConstTag::TImm16)),
        Ssat = t(Arm::Ssat, media2("SSAT")
            .r1(RN)
            .width(WidthTag::TSat4Plus1)
            .shift(ShiftTag::T32Bit21)
            .imm(ConstTag::TShiftImm)
            .fmt("%m%c %0, %w, %1%H")),
        Ssat16 = t(Arm::Ssat16, media2("SSAT16").r1(RN).width(WidthTag::TSat3Plus1).fmt("%m%c %0, %w, %1")),
        Usat = t(Arm::Usat, media2("USAT")
            .r1(RN)
            .width(WidthTag::TSat4)
            .shift(ShiftTag::T32Bit21)
            .imm(ConstTag::TShiftImm)
            .fmt("%m%c %0, %w, %1%H")),
        Usat16 = t(Arm::Usat16, media2("USAT16").r1(RN).width(WidthTag::TSat3).fmt("%m%c %0, %w, %1")),
        Sbfx = t(Arm::Sbfx, media2("SBFX").r1(RN).imm(ConstTag::TLsb).width(WidthTag::TWidthM1).fmt("%m%c %0, %1, %C, %w")),
        Ubfx = t(Arm::Ubfx, media2("UBFX").r1(RN).imm(ConstTag::TLsb).width(WidthTag::TWidthM1).fmt("%m%c %0, %1, %C, %w")),
        Bfi = t(Arm::Bfi, media2("BFI").r1(RN).imm(ConstTag::TLsb).width(WidthTag::TMsb).fmt("%m%c %0, %1, %C, %w")),
        Bfc = t(Arm::Bfc, wide("BFC", "%m%c %0, %C, %w").r0(RD).imm(ConstTag::TLsb).width(WidthTag::TMsb)),

        // Extends
        Sxtah = t(Arm::Sxtah, extend_add("SXTAH")),
        SxthW = t(Arm::Sxth, extend("SXTH")),
        Uxtah = t(Arm::Uxtah, extend_add("UXTAH")),
        UxthW = t(Arm::Uxth, extend("UXTH")),
        Sxtab16 = t(Arm::Sxtab16, extend_add("SXTAB16")),
        Sxtb16 = t(Arm::Sxtb16, extend("SXTB16")),
        Uxtab16 = t(Arm::Uxtab16, extend_add("UXTAB16")),
        Uxtb16 = t(Arm::Uxtb16, extend("UXTB16")),
        Sxtab = t(Arm::Sxtab, extend_add("SXTAB")),
        SxtbW = t(Arm::Sxtb, extend("SXTB")),
        Uxtab = t(Arm::Uxtab, extend_add("UXTAB")),
        UxtbW = t(Arm::Uxtb, extend("UXTB")),

        // Parallel add and subtract
        Sadd16 = t(Arm::Sadd16, media3("SADD16")),
        Sasx = t(Arm::Sasx, media3("SASX")),
        Ssax = t(Arm::Ssax, media3("SSAX")),
        Ssub16 = t(Arm::Ssub16, media3("SSUB16")),
        Sadd8 = t(Arm::Sadd8, media3("SADD8")),
        Ssub8 = t(Arm::Ssub8, media3("SSUB8")),
        Qadd16 = t(Arm::Qadd16, media3("QADD16")),
        Qasx = t(Arm::Qasx, media3("QASX")),
        Qsax = t(Arm::Qsax, media3("QSAX")),
        Qsub16 = t(Arm::Qsub16, media3("QSUB16")),
        Qadd8 = t(Arm::Qadd8, media3("QADD8")),
        Qsub8 = t(Arm::Qsub8, media3("QSUB8")),
        Shadd16 = t(Arm::Shadd16, media3("SHADD16")),
        Shasx = t(Arm::Shasx, media3("SHASX")),
        Shsax = t(Arm::Shsax, media3("SHSAX")),
        Shsub16 = t(Arm::Shsub16, media3("SHSUB16")),
        Shadd8 = t(Arm::Shadd8, media3("SHADD8")),
        Shsub8 = t(Arm::Shsub8, media3("SHSUB8")),
        Uadd16 = t(Arm::Uadd16, media3("UADD16")),
        Uasx = t(Arm::Uasx, media3("UASX")),
        Usax = t(Arm::Usax, media3("USAX")),
        Usub16 = t(Arm::Usub16, media3("USUB16")),
        Uadd8 = t(Arm::Uadd8, media3("UADD8")),
        Usub8 = t(Arm::Usub8, media3("USUB8")),
        Uqadd16 = t(Arm::Uqadd16, media3("UQADD16")),
        Uqasx = t(Arm::Uqasx, media3("UQASX")),
        Uqsax = t(Arm::Uqsax, media3("UQSAX")),
        Uqsub16 = t(Arm::Uqsub16, media3("UQSUB16")),
        Uqadd8 = t(Arm::Uqadd8, media3("UQADD8")),
        Uqsub8 = t(Arm::Uqsub8, media3("UQSUB8")),
        Uhadd16 = t(Arm::Uhadd16, media3("UHADD16")),
        Uhasx = t(Arm::Uhasx, media3("UHASX")),
        Uhsax = t(Arm::Uhsax, media3("UHSAX")),
        Uhsub16 = t(Arm::Uhsub16, media3("UHSUB16")),
        Uhadd8 = t(Arm::Uhadd8, media3("UHADD8")),
        Uhsub8 = t(Arm::Uhsub8, media3("UHSUB8")),

        // Miscellaneous operations
        Qadd = t(Arm::Qadd, saturating("QADD")),
        Qdadd = t(Arm::Qdadd, saturating("QDADD")),
        Qsub = t(Arm::Qsub, saturating("QSUB")),
        Qdsub = t(Arm::Qdsub, saturating("QDSUB")),
        RevW = t(Arm::Rev, media2("REV")),
        Rev16W = t(Arm::Rev16, media2("REV16")),
        Rbit = t(Arm::Rbit, media2("RBIT")),
        RevshW = t(Arm::Revsh, media2("REVSH")),
        Sel = t(Arm::Sel, media3("SEL")),
        Clz = t(Arm::Clz, media2("CLZ")),

        // Multiply, multiply accumulate and absolute difference
        MulW = t(Arm::Mul, media3("MUL")),
        Mla = t(Arm::Mla, mla("MLA")),
        Mls = t(Arm::Mls, mla("MLS")),
        SmlaBb = t(Arm::SmlaBb, mla("SMLABB")),
        SmlaBt = t(Arm::SmlaBt, mla("SMLABT")),
        SmlaTb = t(Arm::SmlaTb, mla("SMLATB")),
        SmlaTt = t(Arm::SmlaTt, mla("SMLATT")),
        SmulBb = t(Arm::SmulBb, media3("SMULBB")),
        SmulBt = t(Arm::SmulBt, media3("SMULBT")),
        SmulTb = t(Arm::SmulTb, media3("SMULTB")),
        SmulTt = t(Arm::SmulTt, media3("SMULTT")),
        Smlad = t(Arm::Smlad, mla("SMLAD")),
        Smladx = t(Arm::Smladx, mla("SMLADX")),
        Smuad = t(Arm::Smuad, media3("SMUAD")),
        Smuadx = t(Arm::Smuadx, media3("SMUADX")),
        SmlawB = t(Arm::SmlawB, mla("SMLAWB")),
        SmlawT = t(Arm::SmlawT, mla("SMLAWT")),
        SmulwB = t(Arm::SmulwB, media3("SMULWB")),
        SmulwT = t(Arm::SmulwT, media3("SMULWT")),
        Smlsd = t(Arm::Smlsd, mla("SMLSD")),
        Smlsdx = t(Arm::Smlsdx, mla("SMLSDX")),
        Smusd = t(Arm::Smusd, media3("SMUSD")),
        Smusdx = t(Arm::Smusdx, media3("SMUSDX")),
        Smmla = t(Arm::Smmla, mla("SMMLA")),
        Smmlar = t(Arm::Smmlar, mla("SMMLAR")),
        Smmul = t(Arm::Smmul, media3("SMMUL")),
        Smmulr = t(Arm::Smmulr, media3("SMMULR")),
        Smmls = t(Arm::Smmls, mla("SMMLS")),
        Smmlsr = t(Arm::Smmlsr, mla("SMMLSR")),
        Usada8 = t(Arm::Usada8, mla("USADA8")),
        Usad8 = t(Arm::Usad8, media3("USAD8")),

        // Long multiply, long multiply accumulate and divide
        Smull = t(Arm::Smull, mul_long("SMULL")),
        Sdiv = t(Arm::Sdiv, media3("SDIV").arch(V7).isa(IsaFeature::Divide)),
        Umull = t(Arm::Umull, mul_long("UMULL")),
        Udiv = t(Arm::Udiv, media3("UDIV").arch(V7).isa(IsaFeature::Divide)),
        Smlal = t(Arm::Smlal, mul_long("SMLAL")),
        SmlalBb = t(Arm::SmlalBb, mul_long("SMLALBB")),
        SmlalBt = t(Arm::SmlalBt, mul_long("SMLALBT")),
        SmlalTb = t(Arm::SmlalTb, mul_long("SMLALTB")),
        SmlalTt = t(Arm::SmlalTt, mul_long("SMLALTT")),
        Smlald = t(Arm::Smlald, mul_long("SMLALD")),
        Smlaldx = t(Arm::Smlaldx, mul_long("SMLALDX")),
        Smlsld = t(Arm::Smlsld, mul_long("SMLSLD")),
        Smlsldx = t(Arm::Smlsldx, mul_long("SMLSLDX")),
        Umlal = t(Arm::Umlal, mul_long("UMLAL")),
        Umaal = t(Arm::Umaal, mul_long("UMAAL")),

        // Branches and miscellaneous control
        BCondW = t(Arm::B, wide("B", "%m%c.W %T").cond(CondTag::T32_22).target(TargetTag::T32Cond20)),
        BW = t(Arm::B, wide("B", "%m%c.W %T").target(TargetTag::T32Imm24)),
        Bl = t(Arm::Bl, OpAttrs::new("BL", "%m%c %T").target(TargetTag::T32Imm24).arch(V4T)),
        BlxImm = t(Arm::BlxImm, OpAttrs::new("BLX", "%m%c %T").target(TargetTag::T32Blx24).arch(V5T)),
        MsrReg = t(Arm::MsrReg, wide("MSR", "%m%c CPSR_%F, %0").r0(RN).mask(FieldMaskTag::T8_11)),
        MsrRegSpsr = t(Arm::MsrRegSpsr, wide("MSR", "%m%c SPSR_%F, %0").r0(RN).mask(FieldMaskTag::T8_11)),
        NopW = t(Arm::Nop, hint("NOP")),
        YieldW = t(Arm::Yield, hint("YIELD")),
        WfeW = t(Arm::Wfe, hint("WFE")),
        WfiW = t(Arm::Wfi, hint("WFI")),
        SevW = t(Arm::Sev, hint("SEV")),
        Dbg = t(Arm::Dbg, wide("DBG", "%m%c %C").imm(ConstTag::Imm4).arch(V7)),
        Cps = t(Arm::Cps, wide("CPS", "%m %C").imm(ConstTag::CpsMode)),
        CpsIeW = t(Arm::CpsIe, wide("CPSIE", "%m.W %C").imm(ConstTag::CpsMode)),
        CpsIdW = t(Arm::CpsId, wide("CPSID", "%m.W %C").imm(ConstTag::CpsMode)),
        Clrex = t(Arm::Clrex, wide("CLREX", "%m%c").arch(V7)),
        Dsb = t(Arm::Dsb, barrier("DSB")),
        Dmb = t(Arm::Dmb, barrier("DMB")),
        Isb = t(Arm::Isb, barrier("ISB")),
        Bxj = t(Arm::Bxj, wide("BXJ", "%m%c %0").r0(RN).isa(IsaFeature::Jazelle)),
        SubsPcLr = t(Arm::SubImm, wide("SUBS", "%m%c %0, %1, %C")
            .r0(PC)
            .r1(LR)
            .imm(ConstTag::TImm8)
            .flags(SetFlagsTag::Always)),
        Mrs = t(Arm::Mrs, wide("MRS", "%m%c %0, CPSR").r0(RD)),
        MrsSpsr = t(Arm::MrsSpsr, wide("MRS", "%m%c %0, SPSR").r0(RD)),
        Smc = t(Arm::Smc, wide("SMC", "%m%c %C").imm(ConstTag::Bits16_19).arch(V6K).isa(IsaFeature::Security)),

        // Load/store multiple
        StmW = t(Arm::Stm, block("STM", IncDecTag::Ia)),
        LdmW = t(Arm::Ldm, block("LDM", IncDecTag::Ia)),
        StmDb = t(Arm::Stm, block("STM", IncDecTag::Db)),
        LdmDb = t(Arm::Ldm, block("LDM", IncDecTag::Db)),
        PushW = t(Arm::Push, stack("PUSH", IncDecTag::Db)),
        PopW = t(Arm::Pop, stack("POP", IncDecTag::Ia)),
        SrsDb = t(Arm::Srs, wide("SRS", "%m%i %0%!, %C")
            .r0(SP)
            .imm(ConstTag::CpsMode)
            .incdec(IncDecTag::Db)
            .wb(WritebackTag::ArmW21)
            .mem(4, false)),
        SrsIa = t(Arm::Srs, wide("SRS", "%m%i %0%!, %C")
            .r0(SP)
            .imm(ConstTag::CpsMode)
            .incdec(IncDecTag::Ia)
            .wb(WritebackTag::ArmW21)
            .mem(4, false)),
        RfeDb = t(Arm::Rfe, wide("RFE", "%m%i %0%!").r0(RN).incdec(IncDecTag::Db).wb(WritebackTag::ArmW21).mem(4, false)),
        RfeIa = t(Arm::Rfe, wide("RFE", "%m%i %0%!").r0(RN).incdec(IncDecTag::Ia).wb(WritebackTag::ArmW21).mem(4, false)),

        // Load/store dual, exclusive and table branch
        Strex = t(Arm::Strex, store_exclusive("STREX", 4).r0(RD).imm(ConstTag::TImm8x4)),
        Ldrex = t(Arm::Ldrex, exclusive("LDREX", 4).imm(ConstTag::TImm8x4)),
        StrdImm = t(Arm::StrdImm, dual("STRD")),
        LdrdImm = t(Arm::LdrdImm, dual("LDRD")),
        Strexb = t(Arm::Strexb, store_exclusive("STREXB", 1).unaligned(UnalignedAction::None, UnalignedAction::None)),
        Strexh = t(Arm::Strexh, store_exclusive("STREXH", 2)),
        Strexd = t(Arm::Strexd, store_exclusive("STREXD", 8).r3(RD).fmt("%m%c %0, %1, %3, %M2")),
        Ldrexb = t(Arm::Ldrexb, exclusive("LDREXB", 1).unaligned(UnalignedAction::None, UnalignedAction::None)),
        Ldrexh = t(Arm::Ldrexh, exclusive("LDREXH", 2)),
        Ldrexd = t(Arm::Ldrexd, exclusive("LDREXD", 8).r3(RD).fmt("%m%c %0, %3, %M1")),
        Tbb = t(Arm::Tbb, wide("TBB", "%m%c [%0, %1]").r0(RN).r1(RM).mem(1, false)),
        Tbh = t(Arm::Tbh, wide("TBH", "%m%c [%0, %1, LSL #1]").r0(RN).r1(RM).mem(2, false)),

        // Load/store single
        StrbImm12 = t(Arm::StrbImm, ls_imm12(STRB)),
        StrbImm8 = t(Arm::StrbImm, ls_imm8(STRB)),
        StrbRegW = t(Arm::StrbReg, ls_reg(STRB)),
        Strbt = t(Arm::StrbtImm, ls_user(STRB, "STRBT")),
        StrhImm12 = t(Arm::StrhImm, ls_imm12(STRH)),
        StrhImm8 = t(Arm::StrhImm, ls_imm8(STRH)),
        StrhRegW = t(Arm::StrhReg, ls_reg(STRH)),
        Strht = t(Arm::StrhtImm, ls_user(STRH, "STRHT")),
        StrImm12 = t(Arm::StrImm, ls_imm12(STR)),
        StrImm8 = t(Arm::StrImm, ls_imm8(STR)),
        StrRegW = t(Arm::StrReg, ls_reg(STR)),
        Strt = t(Arm::StrtImm, ls_user(STR, "STRT")),
        LdrbImm12 = t(Arm::LdrbImm, ls_imm12(LDRB)),
        LdrbImm8 = t(Arm::LdrbImm, ls_imm8(LDRB)),
        LdrbRegW = t(Arm::LdrbReg, ls_reg(LDRB)),
        Ldrbt = t(Arm::LdrbtImm, ls_user(LDRB, "LDRBT")),
        LdrbLit = t(Arm::LdrbLit, ls_lit(LDRB)),
        LdrhImm12 = t(Arm::LdrhImm, ls_imm12(LDRH)),
        LdrhImm8 = t(Arm::LdrhImm, ls_imm8(LDRH)),
        LdrhRegW = t(Arm::LdrhReg, ls_reg(LDRH)),
        Ldrht = t(Arm::LdrhtImm, ls_user(LDRH, "LDRHT")),
        LdrhLit = t(Arm::LdrhImm, ls_lit(LDRH)),
        LdrImm12 = t(Arm::LdrImm, ls_imm12(LDR)),
        LdrImm8 = t(Arm::LdrImm, ls_imm8(LDR)),
        LdrRegW = t(Arm::LdrReg, ls_reg(LDR)),
        Ldrt = t(Arm::LdrtImm, ls_user(LDR, "LDRT")),
        LdrLitW = t(Arm::LdrLit, ls_lit(LDR)),
        LdrsbImm12 = t(Arm::LdrsbImm, ls_imm12(LDRSB)),
        LdrsbImm8 = t(Arm::LdrsbImm, ls_imm8(LDRSB)),
        LdrsbRegW = t(Arm::LdrsbReg, ls_reg(LDRSB)),
        Ldrsbt = t(Arm::LdrsbtImm, ls_user(LDRSB, "LDRSBT")),
        LdrsbLit = t(Arm::LdrsbImm, ls_lit(LDRSB)),
        LdrshImm12 = t(Arm::LdrshImm, ls_imm12(LDRSH)),
        LdrshImm8 = t(Arm::LdrshImm, ls_imm8(LDRSH)),
        LdrshRegW = t(Arm::LdrshReg, ls_reg(LDRSH)),
        Ldrsht = t(Arm::LdrshtImm, ls_user(LDRSH, "LDRSHT")),
        LdrshLit = t(Arm::LdrshImm, ls_lit(LDRSH)),

        // Preload, carved out of the loads with `Rt == PC`
        PldImm12 = t(Arm::PldImm, preload("PLD", ConstTag::Imm12)),
        PldImm8 = t(Arm::PldImm, preload("PLD", ConstTag::TImm8U9)),
        PldwImm12 = t(Arm::PldwImm, preload("PLDW", ConstTag::Imm12).arch(V7).isa(IsaFeature::Multiprocessing)),
        PldwImm8 = t(Arm::PldwImm, preload("PLDW", ConstTag::TImm8U9).arch(V7).isa(IsaFeature::Multiprocessing)),
        PldLit = t(Arm::PldLit, wide("PLD", "%m %T").target(TargetTag::T32Lit12)),
        PldReg = t(Arm::PldReg, preload_reg("PLD")),
        PldwReg = t(Arm::PldwReg, preload_reg("PLDW").arch(V7).isa(IsaFeature::Multiprocessing)),
        PliImm12 = t(Arm::PliImm, preload("PLI", ConstTag::Imm12).arch(V7)),
        PliImm8 = t(Arm::PliImm, preload("PLI", ConstTag::TImm8U9).arch(V7)),
        PliLit = t(Arm::PliImm, wide("PLI", "%m %T").target(TargetTag::T32Lit12).arch(V7)),
        PliReg = t(Arm::PliReg, preload_reg("PLI").arch(V7)),
    }
}

impl std::fmt::Display for ThumbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attrs().op.mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn attrs_follow_declaration_order() {
        assert_eq!(ThumbType::ALL.len(), THUMB_ATTRS.len());
        assert_eq!(ThumbType::ALL[0], ThumbType::Undefined);
        for ty in ThumbType::ALL {
            assert_eq!(ThumbType::ALL[*ty as usize], *ty);
        }
    }

    #[test]
    fn records_mirror_arm_register_shapes() {
        let and = ThumbType::And.attrs();
        assert_eq!(and.arm, Arm::AndRm);
        assert_eq!(and.op.regs, [RegTag::T0_2, RegTag::T0_2, RegTag::T3_5, RegTag::None]);
        assert_eq!(and.op.reg_count(), Arm::AndRm.attrs().reg_count());

        let add = ThumbType::AddRegW.attrs();
        assert_eq!(add.arm, Arm::AddRmShftImm);
        assert_eq!(add.op.regs, [RD, RN, RM, RegTag::None]);

        let umull = ThumbType::Umull.attrs();
        assert_eq!(umull.op.regs, [RT, RD, RN, RM]);
    }

    #[test]
    fn thumb_records_only_use_thumb_layouts() {
        for ty in ThumbType::ALL {
            let op = &ty.attrs().op;
            assert_ne!(op.cond, CondTag::Arm28, "{ty:?}");
            assert_ne!(op.shift, ShiftTag::Arm6_5, "{ty:?}");
            assert_ne!(op.shift, ShiftTag::ArmReg6_5, "{ty:?}");
            assert_ne!(op.inc_dec, IncDecTag::Arm23_24, "{ty:?}");
        }
    }

    #[test]
    fn thumbee_records_require_thumbee() {
        for ty in [ThumbType::Hbp, ThumbType::Chka, ThumbType::LdrR9, ThumbType::LdrRegEe, ThumbType::Enterx] {
            assert_eq!(ty.attrs().op.isa, IsaFeature::ThumbEe);
        }
        assert_eq!(ThumbType::LdrRegEe.attrs().op.constant, ConstTag::Implied(2));
        assert_eq!(ThumbType::LdrhRegEe.attrs().op.constant, ConstTag::Implied(1));
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(ThumbType::LslImm.to_string(), "LSL");
        assert_eq!(ThumbType::Ldrsbt.to_string(), "LDRSBT");
    }
}
