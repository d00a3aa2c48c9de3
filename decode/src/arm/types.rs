//! # ARM Instruction Types
//!
//! [`ArmType`] is the architecture neutral instruction vocabulary: ARM
//! encodings decode straight into it, Thumb encodings cross reference it.
//! A handful of types only exist in Thumb (`CBZ`, `IT`, `TBB`, the ThumbEE
//! handler branches); they carry an empty record and no ARM pattern.
//!
//! Format strings follow the `%m%c%s` order of the assembler syntax
//! (`ADDEQS`), the codes are listed in [`crate::disasm`].

use crate::arch::{ArchVersion, IsaFeature};
use crate::attrs::{
    AlignTag, CondTag, ConstTag, CpLongTag, CpNumTag, CpOpTag, DataType, DtTag, EsizeTag, FieldMaskTag, IncDecTag,
    IncrTag, IndexTag, ModImmKind, NregsTag, OpAttrs, PostIndexTag, RegListTag, RegTag, SetFlagsTag, ShiftTag,
    TargetTag, UnalignedAction, WidthTag, WritebackTag,
};

// Field positions of the ARM layout.
const RD: RegTag = RegTag::R12_15;
const RN: RegTag = RegTag::R16_19;
const RM: RegTag = RegTag::R0_3;
const RS: RegTag = RegTag::R8_11;
const SP: RegTag = RegTag::Implied(13);

const SD: RegTag = RegTag::S12_22;
const SN: RegTag = RegTag::S16_7;
const SM: RegTag = RegTag::S0_5;
const DD: RegTag = RegTag::D22_12;
const DN: RegTag = RegTag::D7_16;
const DM: RegTag = RegTag::D5_0;
const QD: RegTag = RegTag::Q22_12;
const QN: RegTag = RegTag::Q7_16;
const QM: RegTag = RegTag::Q5_0;

const F32: DtTag = DtTag::Fixed(DataType::F32);
const F64: DtTag = DtTag::Fixed(DataType::F64);

const fn conditional(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, format).cond(CondTag::Arm28)
}

/// Operand shape of a data processing instruction.
#[derive(Clone, Copy)]
pub(crate) enum Dp {
    /// `Rd, Rn, <operand>`
    Binary,
    /// `Rd, <operand>`
    Move,
    /// `Rn, <operand>`, flags always set.
    Compare,
}

const fn dp_base(mnemonic: &'static str, kind: Dp, formats: [&'static str; 3]) -> OpAttrs {
    let attrs = match kind {
        Dp::Binary => OpAttrs::new(mnemonic, formats[0]).r0(RD).r1(RN).flags(SetFlagsTag::Bit20),
        Dp::Move => OpAttrs::new(mnemonic, formats[1]).r0(RD).flags(SetFlagsTag::Bit20),
        Dp::Compare => OpAttrs::new(mnemonic, formats[2]).r0(RN).flags(SetFlagsTag::Always),
    };
    attrs.cond(CondTag::Arm28)
}

/// Puts the second operand register behind the fixed ones.
const fn dp_operand(attrs: OpAttrs, kind: Dp, tag: RegTag) -> OpAttrs {
    match kind {
        Dp::Binary => attrs.r2(tag),
        Dp::Move | Dp::Compare => attrs.r1(tag),
    }
}

const fn dp_shift_reg(attrs: OpAttrs, kind: Dp) -> OpAttrs {
    match kind {
        Dp::Binary => attrs.r3(RS),
        Dp::Move | Dp::Compare => attrs.r2(RS),
    }
}

const fn dp_imm(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    dp_base(mnemonic, kind, ["%m%c%s %0, %1, %C", "%m%c%s %0, %C", "%m%c %0, %C"]).imm(ConstTag::ArmRotImm)
}

const fn dp_rm(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    dp_operand(
        dp_base(mnemonic, kind, ["%m%c%s %0, %1, %2", "%m%c%s %0, %1", "%m%c %0, %1"]),
        kind,
        RM,
    )
}

const fn dp_shift_imm(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    dp_operand(
        dp_base(mnemonic, kind, ["%m%c%s %0, %1, %2%H", "%m%c%s %0, %1%H", "%m%c %0, %1%H"]),
        kind,
        RM,
    )
    .shift(ShiftTag::Arm6_5)
    .imm(ConstTag::ShiftImm)
}

const fn dp_shift_rs(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    let attrs = dp_base(
        mnemonic,
        kind,
        ["%m%c%s %0, %1, %2, %S %3", "%m%c%s %0, %1, %S %2", "%m%c %0, %1, %S %2"],
    );
    dp_shift_reg(dp_operand(attrs, kind, RM), kind).shift(ShiftTag::ArmReg6_5)
}

const fn dp_rrx(mnemonic: &'static str, kind: Dp) -> OpAttrs {
    dp_operand(
        dp_base(mnemonic, kind, ["%m%c%s %0, %1, %2, RRX", "%m%c%s %0, %1, RRX", "%m%c %0, %1, RRX"]),
        kind,
        RM,
    )
    .shift(ShiftTag::Rrx)
}

/// Multiplies keep `Rd` in bits 19..16 and the accumulator in 15..12.
const fn mul(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c%s %0, %1, %2").r0(RN).r1(RM).r2(RS).flags(SetFlagsTag::Bit20)
}

const fn mla(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c%s %0, %1, %2, %3")
        .r0(RN)
        .r1(RM)
        .r2(RS)
        .r3(RD)
        .flags(SetFlagsTag::Bit20)
}

/// `RdLo, RdHi, Rn, Rm`
const fn mul_long(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c%s %0, %1, %2, %3")
        .r0(RD)
        .r1(RN)
        .r2(RM)
        .r3(RS)
        .flags(SetFlagsTag::Bit20)
}

const fn dsp_mul(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2")
        .r0(RN)
        .r1(RM)
        .r2(RS)
        .arch(ArchVersion::V5TE)
        .isa(IsaFeature::Dsp)
}

const fn dsp_mla(mnemonic: &'static str) -> OpAttrs {
    dsp_mul(mnemonic).r3(RD).fmt("%m%c %0, %1, %2, %3")
}

const fn dsp_mla_long(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2, %3")
        .r0(RD)
        .r1(RN)
        .r2(RM)
        .r3(RS)
        .arch(ArchVersion::V5TE)
        .isa(IsaFeature::Dsp)
}

const fn media_mul(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2").r0(RN).r1(RM).r2(RS).arch(ArchVersion::V6)
}

const fn media_mla(mnemonic: &'static str) -> OpAttrs {
    media_mul(mnemonic).r3(RD).fmt("%m%c %0, %1, %2, %3")
}

const fn media_mla_long(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2, %3")
        .r0(RD)
        .r1(RN)
        .r2(RM)
        .r3(RS)
        .arch(ArchVersion::V6)
}

const fn saturating(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2")
        .r0(RD)
        .r1(RM)
        .r2(RN)
        .arch(ArchVersion::V5TE)
        .isa(IsaFeature::Dsp)
}

/// Parallel add/subtract and the other `Rd, Rn, Rm` media instructions.
const fn media3(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1, %2").r0(RD).r1(RN).r2(RM).arch(ArchVersion::V6)
}

const fn media2(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %1").r0(RD).r1(RM).arch(ArchVersion::V6)
}

const fn extend_add(mnemonic: &'static str) -> OpAttrs {
    media3(mnemonic).imm(ConstTag::Rotation).fmt("%m%c %0, %1, %2%R")
}

const fn extend(mnemonic: &'static str) -> OpAttrs {
    media2(mnemonic).imm(ConstTag::Rotation).fmt("%m%c %0, %1%R")
}

/// LDR/STR family with a 12-bit immediate offset.
const fn ls_imm(mnemonic: &'static str, size: u8, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %M1")
        .r0(RD)
        .r1(RN)
        .imm(ConstTag::Imm12U)
        .mem(size, false)
        .pi(PostIndexTag::ArmP24Clear)
        .wb(WritebackTag::ArmPostOrW21)
        .unaligned(unaligned[0], unaligned[1])
}

/// LDR/STR family with a shifted register offset.
const fn ls_reg(mnemonic: &'static str, size: u8, unaligned: [UnalignedAction; 2]) -> OpAttrs {
    ls_imm(mnemonic, size, unaligned)
        .r2(RM)
        .shift(ShiftTag::Arm6_5)
        .imm(ConstTag::ShiftImm)
}

/// The unprivileged `T` forms are always post indexed.
const fn unprivileged(attrs: OpAttrs) -> OpAttrs {
    attrs.pi(PostIndexTag::Always).wb(WritebackTag::Always)
}

/// Halfword, doubleword and signed byte transfers, split 8-bit offset.
const fn xls_imm(mnemonic: &'static str, size: u8, sign_extend: bool) -> OpAttrs {
    let unaligned = match size {
        1 => [UnalignedAction::None, UnalignedAction::None],
        2 => [UnalignedAction::Align, UnalignedAction::Unaligned],
        _ => [UnalignedAction::Fault, UnalignedAction::Fault],
    };
    conditional(mnemonic, "%m%c %0, %M1")
        .r0(RD)
        .r1(RN)
        .imm(ConstTag::Imm8HLU)
        .mem(size, sign_extend)
        .pi(PostIndexTag::ArmP24Clear)
        .wb(WritebackTag::ArmPostOrW21)
        .unaligned(unaligned[0], unaligned[1])
}

const fn xls_reg(mnemonic: &'static str, size: u8, sign_extend: bool) -> OpAttrs {
    xls_imm(mnemonic, size, sign_extend).r2(RM).imm(ConstTag::None)
}

const fn exclusive(mnemonic: &'static str, size: u8) -> OpAttrs {
    conditional(mnemonic, "%m%c %0, %M1")
        .r0(RD)
        .r1(RN)
        .mem(size, false)
        .unaligned(UnalignedAction::Fault, UnalignedAction::Fault)
        .arch(ArchVersion::V6K)
}

const fn store_exclusive(mnemonic: &'static str, size: u8) -> OpAttrs {
    exclusive(mnemonic, size).r1(RM).r2(RN).fmt("%m%c %0, %1, %M2")
}

const fn block(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    conditional(mnemonic, format)
        .r0(RN)
        .list(RegListTag::Bits16)
        .incdec(IncDecTag::Arm23_24)
        .wb(WritebackTag::ArmW21)
        .mem(4, false)
        .unaligned(UnalignedAction::Align, UnalignedAction::Fault)
}

const fn stack(mnemonic: &'static str, inc_dec: IncDecTag) -> OpAttrs {
    conditional(mnemonic, "%m%c %L")
        .r0(SP)
        .list(RegListTag::Bits16)
        .incdec(inc_dec)
        .wb(WritebackTag::Always)
        .mem(4, false)
        .unaligned(UnalignedAction::Align, UnalignedAction::Fault)
}

const fn hint(mnemonic: &'static str) -> OpAttrs {
    conditional(mnemonic, "%m%c").arch(ArchVersion::V6K)
}

/// LDC/STC, `Rn` based with a word scaled offset.
const fn coproc_ls(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m%l%c %P, %0, %M1")
        .r0(RegTag::Cr12_15)
        .r1(RN)
        .imm(ConstTag::Imm8x4U)
        .coproc(CpNumTag::Bits8_11, CpOpTag::None, CpOpTag::None, CpLongTag::Bit22)
        .pi(PostIndexTag::ArmP24Clear)
        .wb(WritebackTag::ArmW21)
}

const fn coproc_dp(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m%c %P, %o, %0, %1, %2, %q")
        .r0(RegTag::Cr12_15)
        .r1(RegTag::Cr16_19)
        .r2(RegTag::Cr0_3)
        .coproc(CpNumTag::Bits8_11, CpOpTag::Bits20_23, CpOpTag::Bits5_7, CpLongTag::None)
}

/// MCR/MRC, `Rt` and two coprocessor registers.
const fn coproc_rt(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m%c %P, %o, %0, %1, %2, %q")
        .r0(RD)
        .r1(RegTag::Cr16_19)
        .r2(RegTag::Cr0_3)
        .coproc(CpNumTag::Bits8_11, CpOpTag::Bits21_23, CpOpTag::Bits5_7, CpLongTag::None)
}

/// MCRR/MRRC, `Rt, Rt2, CRm`.
const fn coproc_rt2(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m%c %P, %o, %0, %1, %2")
        .r0(RD)
        .r1(RN)
        .r2(RegTag::Cr0_3)
        .coproc(CpNumTag::Bits8_11, CpOpTag::Bits4_7, CpOpTag::None, CpLongTag::None)
        .arch(ArchVersion::V5TE)
}

const fn cond_coproc(attrs: OpAttrs) -> OpAttrs {
    attrs.cond(CondTag::Arm28)
}

const fn coproc2(attrs: OpAttrs) -> OpAttrs {
    attrs.arch(ArchVersion::V5T)
}

const fn pld(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m %M0").r0(RN).imm(ConstTag::Imm12U).arch(ArchVersion::V5TE)
}

const fn pld_reg(mnemonic: &'static str) -> OpAttrs {
    pld(mnemonic).r1(RM).shift(ShiftTag::Arm6_5).imm(ConstTag::ShiftImm)
}

const fn barrier(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m %C").imm(ConstTag::Imm4).arch(ArchVersion::V7)
}

const fn vfp(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    conditional(mnemonic, format).arch(ArchVersion::V5TE).isa(IsaFeature::Vfp2)
}

/// `Vd, Vn, Vm` in single or double precision.
const fn vfp3(mnemonic: &'static str, double: bool) -> OpAttrs {
    let attrs = vfp(mnemonic, "%m%c%D %0, %1, %2");
    if double {
        attrs.r0(DD).r1(DN).r2(DM).dt(F64, DtTag::None)
    } else {
        attrs.r0(SD).r1(SN).r2(SM).dt(F32, DtTag::None)
    }
}

/// `Vd, Vm` in single or double precision.
const fn vfp2(mnemonic: &'static str, double: bool) -> OpAttrs {
    let attrs = vfp(mnemonic, "%m%c%D %0, %1");
    if double {
        attrs.r0(DD).r1(DM).dt(F64, DtTag::None)
    } else {
        attrs.r0(SD).r1(SM).dt(F32, DtTag::None)
    }
}

const fn vfp_cmp_zero(mnemonic: &'static str, double: bool) -> OpAttrs {
    let attrs = vfp(mnemonic, "%m%c%D %0, #0.0");
    if double {
        attrs.r0(DD).dt(F64, DtTag::None)
    } else {
        attrs.r0(SD).dt(F32, DtTag::None)
    }
}

const fn vfp_imm(double: bool) -> OpAttrs {
    let attrs = vfp("VMOV", "%m%c%D %0, %C").arch(ArchVersion::V7).isa(IsaFeature::Vfp3);
    if double {
        attrs.r0(DD).imm(ConstTag::VfpImm64).dt(F64, DtTag::None).modimm(ModImmKind::Vfp64)
    } else {
        attrs.r0(SD).imm(ConstTag::VfpImm32).dt(F32, DtTag::None).modimm(ModImmKind::Vfp32)
    }
}

/// VCVT between float and fixed point, converting in place.
const fn vfp_fixed(double: bool, to_fixed: bool) -> OpAttrs {
    let float = if double { F64 } else { F32 };
    let dt = if to_fixed {
        [DtTag::VfpFixed, float]
    } else {
        [float, DtTag::VfpFixed]
    };
    let reg = if double { DD } else { SD };
    vfp("VCVT", "%m%c%D %0, %0, %C")
        .r0(reg)
        .imm(ConstTag::VcvtFbits)
        .dt(dt[0], dt[1])
        .arch(ArchVersion::V7)
        .isa(IsaFeature::Vfp3)
}

const fn vfp_ls(mnemonic: &'static str, double: bool) -> OpAttrs {
    let attrs = vfp(mnemonic, "%m%c %0, %M1")
        .r1(RN)
        .imm(ConstTag::Imm8x4U)
        .unaligned(UnalignedAction::Fault, UnalignedAction::Fault);
    if double {
        attrs.r0(DD).mem(8, false)
    } else {
        attrs.r0(SD).mem(4, false)
    }
}

const fn vfp_multiple(mnemonic: &'static str, double: bool) -> OpAttrs {
    let attrs = vfp(mnemonic, "%m%i%c %1%!, %V0")
        .r1(RN)
        .incdec(IncDecTag::Arm23_24)
        .wb(WritebackTag::ArmW21)
        .unaligned(UnalignedAction::Fault, UnalignedAction::Fault);
    if double {
        attrs.r0(DD).nregs(NregsTag::VfpImm8Half).mem(8, false)
    } else {
        attrs.r0(SD).nregs(NregsTag::VfpImm8).mem(4, false)
    }
}

const fn vfp_stack(mnemonic: &'static str, double: bool, inc_dec: IncDecTag) -> OpAttrs {
    vfp_multiple(mnemonic, double)
        .r1(SP)
        .incdec(inc_dec)
        .wb(WritebackTag::Always)
        .fmt("%m%c %V0")
}

const fn neon(mnemonic: &'static str, format: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, format).arch(ArchVersion::V7).isa(IsaFeature::AdvSimd)
}

/// Three registers of the same length.
const fn neon3(mnemonic: &'static str, quad: bool, dt: DtTag) -> OpAttrs {
    let attrs = neon(mnemonic, "%m%D %0, %1, %2").esize(EsizeTag::Size20).dt(dt, DtTag::None);
    if quad {
        attrs.r0(QD).r1(QN).r2(QM)
    } else {
        attrs.r0(DD).r1(DN).r2(DM)
    }
}

/// Bitwise three register operations, no data type.
const fn neon3_logic(mnemonic: &'static str, quad: bool) -> OpAttrs {
    neon3(mnemonic, quad, DtTag::None).esize(EsizeTag::None).fmt("%m %0, %1, %2")
}

const fn neon3_float(mnemonic: &'static str, quad: bool) -> OpAttrs {
    neon3(mnemonic, quad, F32).esize(EsizeTag::E32)
}

/// Two registers, element size in bits 19..18.
const fn neon2(mnemonic: &'static str, quad: bool, dt: DtTag) -> OpAttrs {
    let attrs = neon(mnemonic, "%m%D %0, %1").esize(EsizeTag::Size18).dt(dt, DtTag::None);
    if quad {
        attrs.r0(QD).r1(QM)
    } else {
        attrs.r0(DD).r1(DM)
    }
}

const fn neon_shift(mnemonic: &'static str, quad: bool, dt: DtTag, amount: ConstTag) -> OpAttrs {
    let attrs = neon(mnemonic, "%m%D %0, %1, %C")
        .esize(EsizeTag::ImmL6)
        .dt(dt, DtTag::None)
        .imm(amount);
    if quad {
        attrs.r0(QD).r1(QM)
    } else {
        attrs.r0(DD).r1(DM)
    }
}

/// Narrowing right shift, `Dd, Qm, #imm`.
const fn neon_shift_narrow(mnemonic: &'static str, dt: DtTag) -> OpAttrs {
    neon(mnemonic, "%m%D %0, %1, %C")
        .r0(DD)
        .r1(QM)
        .esize(EsizeTag::ImmL6)
        .dt(dt, DtTag::None)
        .imm(ConstTag::SimdShrImm)
}

const fn neon_cvt_fixed(quad: bool, to_fixed: bool) -> OpAttrs {
    let dt = if to_fixed {
        [DtTag::SimdFixed24, F32]
    } else {
        [F32, DtTag::SimdFixed24]
    };
    let attrs = neon("VCVT", "%m%D %0, %1, %C")
        .esize(EsizeTag::E32)
        .dt(dt[0], dt[1])
        .imm(ConstTag::SimdCvtFbits);
    if quad {
        attrs.r0(QD).r1(QM)
    } else {
        attrs.r0(DD).r1(DM)
    }
}

/// One register and an expanded modified immediate. `dt` has to be the
/// type the `cmode` values of the pattern imply.
const fn neon_modimm(mnemonic: &'static str, quad: bool, dt: DataType) -> OpAttrs {
    let attrs = neon(mnemonic, "%m%D %0, %C")
        .imm(ConstTag::SimdModImm)
        .dt(DtTag::Fixed(dt), DtTag::None)
        .modimm(ModImmKind::Simd);
    if quad {
        attrs.r0(QD)
    } else {
        attrs.r0(DD)
    }
}

const fn neon_scalar(mnemonic: &'static str, quad: bool, dt: DtTag) -> OpAttrs {
    let attrs = neon(mnemonic, "%m%D %0, %1, %2%X")
        .r2(RegTag::DScalar)
        .esize(EsizeTag::Size20)
        .dt(dt, DtTag::None)
        .index(IndexTag::Scalar);
    if quad {
        attrs.r0(QD).r1(QN)
    } else {
        attrs.r0(DD).r1(DN)
    }
}

const fn neon_scalar_long(mnemonic: &'static str, dt: DtTag) -> OpAttrs {
    neon_scalar(mnemonic, false, dt).r0(QD)
}

/// `Qd, Dn, Dm`
const fn neon_long(mnemonic: &'static str, dt: DtTag) -> OpAttrs {
    neon3(mnemonic, false, dt).r0(QD)
}

/// `Qd, Qn, Dm`
const fn neon_wide(mnemonic: &'static str, dt: DtTag) -> OpAttrs {
    neon3(mnemonic, false, dt).r0(QD).r1(QN)
}

/// `Dd, Qn, Qm`
const fn neon_narrow(mnemonic: &'static str, dt: DtTag) -> OpAttrs {
    neon3(mnemonic, false, dt).r1(QN).r2(QM)
}

const fn vext(quad: bool) -> OpAttrs {
    neon3("VEXT", quad, DtTag::Fixed(DataType::B8))
        .esize(EsizeTag::E8)
        .imm(ConstTag::VextImm)
        .fmt("%m%D %0, %1, %2, %C")
}

const fn vtb(mnemonic: &'static str) -> OpAttrs {
    neon(mnemonic, "%m.8 %0, %V1, %2")
        .r0(DD)
        .r1(DN)
        .r2(DM)
        .nregs(NregsTag::Len8_9)
}

const fn vdup_scalar(quad: bool) -> OpAttrs {
    let attrs = neon("VDUP", "%m%D %0, %1%X")
        .r1(DM)
        .esize(EsizeTag::Dup19_16)
        .dt(DtTag::Untyped, DtTag::None)
        .index(IndexTag::Dup19_16);
    if quad {
        attrs.r0(QD)
    } else {
        attrs.r0(DD)
    }
}

const fn neon_ls(mnemonic: &'static str) -> OpAttrs {
    neon(mnemonic, "%m%D %V0, %A")
        .r0(DD)
        .r1(RN)
        .r2(RM)
        .dt(DtTag::Untyped, DtTag::None)
        .wb(WritebackTag::SimdRm)
        .unaligned(UnalignedAction::Unaligned, UnalignedAction::Unaligned)
}

const fn neon_multi(mnemonic: &'static str) -> OpAttrs {
    neon_ls(mnemonic)
        .esize(EsizeTag::Size6)
        .nregs(NregsTag::VldType)
        .incr(IncrTag::VldType)
        .align(AlignTag::Multi5_4)
}

const fn neon_lane(mnemonic: &'static str, n: u8) -> OpAttrs {
    let attrs = neon_ls(mnemonic)
        .esize(EsizeTag::Size10)
        .index(IndexTag::Lane)
        .nregs(NregsTag::Fixed(n))
        .align(AlignTag::Lane(n));
    if n == 1 {
        attrs
    } else {
        attrs.incr(IncrTag::Lane)
    }
}

const fn neon_all_lanes(mnemonic: &'static str, n: u8) -> OpAttrs {
    let attrs = neon_ls(mnemonic).esize(EsizeTag::Size6).align(AlignTag::AllLanes(n));
    if n == 1 {
        attrs.nregs(NregsTag::AllLanesT5)
    } else {
        attrs.nregs(NregsTag::Fixed(n)).incr(IncrTag::AllLanesT5)
    }
}

/// Record of a type that only exists in Thumb.
const fn thumb_only(mnemonic: &'static str) -> OpAttrs {
    OpAttrs::new(mnemonic, "%m")
}

use ArchVersion::{V5T, V5TE, V6, V6K, V6T2, V7};
use UnalignedAction::{Align, Fault, Rotate, Unaligned};

/// Unaligned behaviour pairs shared with the Thumb records.
pub(crate) const WORD_LOAD: [UnalignedAction; 2] = [Rotate, Unaligned];
pub(crate) const WORD_STORE: [UnalignedAction; 2] = [Align, Unaligned];
pub(crate) const BYTE: [UnalignedAction; 2] = [UnalignedAction::None, UnalignedAction::None];

opcodes! {
    /// Architecture neutral instruction type.
    pub enum ArmType: OpAttrs in ARM_ATTRS {
        Undefined = OpAttrs::new("UNDEFINED", "%m"),

        // Data processing
        AndImm = dp_imm("AND", Dp::Binary),
        AndRm = dp_rm("AND", Dp::Binary),
        AndRmShftImm = dp_shift_imm("AND", Dp::Binary),
        AndRmShftRs = dp_shift_rs("AND", Dp::Binary),
        AndRmRrx = dp_rrx("AND", Dp::Binary),
        EorImm = dp_imm("EOR", Dp::Binary),
        EorRm = dp_rm("EOR", Dp::Binary),
        EorRmShftImm = dp_shift_imm("EOR", Dp::Binary),
        EorRmShftRs = dp_shift_rs("EOR", Dp::Binary),
        EorRmRrx = dp_rrx("EOR", Dp::Binary),
        SubImm = dp_imm("SUB", Dp::Binary),
        SubRm = dp_rm("SUB", Dp::Binary),
        SubRmShftImm = dp_shift_imm("SUB", Dp::Binary),
        SubRmShftRs = dp_shift_rs("SUB", Dp::Binary),
        SubRmRrx = dp_rrx("SUB", Dp::Binary),
        RsbImm = dp_imm("RSB", Dp::Binary),
        RsbRm = dp_rm("RSB", Dp::Binary),
        RsbRmShftImm = dp_shift_imm("RSB", Dp::Binary),
        RsbRmShftRs = dp_shift_rs("RSB", Dp::Binary),
        RsbRmRrx = dp_rrx("RSB", Dp::Binary),
        AddImm = dp_imm("ADD", Dp::Binary),
        AddRm = dp_rm("ADD", Dp::Binary),
        AddRmShftImm = dp_shift_imm("ADD", Dp::Binary),
        AddRmShftRs = dp_shift_rs("ADD", Dp::Binary),
        AddRmRrx = dp_rrx("ADD", Dp::Binary),
        AdcImm = dp_imm("ADC", Dp::Binary),
        AdcRm = dp_rm("ADC", Dp::Binary),
        AdcRmShftImm = dp_shift_imm("ADC", Dp::Binary),
        AdcRmShftRs = dp_shift_rs("ADC", Dp::Binary),
        AdcRmRrx = dp_rrx("ADC", Dp::Binary),
        SbcImm = dp_imm("SBC", Dp::Binary),
        SbcRm = dp_rm("SBC", Dp::Binary),
        SbcRmShftImm = dp_shift_imm("SBC", Dp::Binary),
        SbcRmShftRs = dp_shift_rs("SBC", Dp::Binary),
        SbcRmRrx = dp_rrx("SBC", Dp::Binary),
        RscImm = dp_imm("RSC", Dp::Binary),
        RscRm = dp_rm("RSC", Dp::Binary),
        RscRmShftImm = dp_shift_imm("RSC", Dp::Binary),
        RscRmShftRs = dp_shift_rs("RSC", Dp::Binary),
        RscRmRrx = dp_rrx("RSC", Dp::Binary),
        TstImm = dp_imm("TST", Dp::Compare),
        TstRm = dp_rm("TST", Dp::Compare),
        TstRmShftImm = dp_shift_imm("TST", Dp::Compare),
        TstRmShftRs = dp_shift_rs("TST", Dp::Compare),
        TstRmRrx = dp_rrx("TST", Dp::Compare),
        TeqImm = dp_imm("TEQ", Dp::Compare),
        TeqRm = dp_rm("TEQ", Dp::Compare),
        TeqRmShftImm = dp_shift_imm("TEQ", Dp::Compare),
        TeqRmShftRs = dp_shift_rs("TEQ", Dp::Compare),
        TeqRmRrx = dp_rrx("TEQ", Dp::Compare),
        CmpImm = dp_imm("CMP", Dp::Compare),
        CmpRm = dp_rm("CMP", Dp::Compare),
        CmpRmShftImm = dp_shift_imm("CMP", Dp::Compare),
        CmpRmShftRs = dp_shift_rs("CMP", Dp::Compare),
        CmpRmRrx = dp_rrx("CMP", Dp::Compare),
        CmnImm = dp_imm("CMN", Dp::Compare),
        CmnRm = dp_rm("CMN", Dp::Compare),
        CmnRmShftImm = dp_shift_imm("CMN", Dp::Compare),
        CmnRmShftRs = dp_shift_rs("CMN", Dp::Compare),
        CmnRmRrx = dp_rrx("CMN", Dp::Compare),
        OrrImm = dp_imm("ORR", Dp::Binary),
        OrrRm = dp_rm("ORR", Dp::Binary),
        OrrRmShftImm = dp_shift_imm("ORR", Dp::Binary),
        OrrRmShftRs = dp_shift_rs("ORR", Dp::Binary),
        OrrRmRrx = dp_rrx("ORR", Dp::Binary),
        MovImm = dp_imm("MOV", Dp::Move),
        MovRm = dp_rm("MOV", Dp::Move),
        MovRmShftImm = dp_shift_imm("MOV", Dp::Move),
        MovRmShftRs = dp_shift_rs("MOV", Dp::Move),
        MovRmRrx = dp_rrx("MOV", Dp::Move),
        BicImm = dp_imm("BIC", Dp::Binary),
        BicRm = dp_rm("BIC", Dp::Binary),
        BicRmShftImm = dp_shift_imm("BIC", Dp::Binary),
        BicRmShftRs = dp_shift_rs("BIC", Dp::Binary),
        BicRmRrx = dp_rrx("BIC", Dp::Binary),
        MvnImm = dp_imm("MVN", Dp::Move),
        MvnRm = dp_rm("MVN", Dp::Move),
        MvnRmShftImm = dp_shift_imm("MVN", Dp::Move),
        MvnRmShftRs = dp_shift_rs("MVN", Dp::Move),
        MvnRmRrx = dp_rrx("MVN", Dp::Move),
        MovW = conditional("MOVW", "%m%c %0, %C").r0(RD).imm(ConstTag::Imm16Split).arch(V6T2),
        MovT = conditional("MOVT", "%m%c %0, %C").r0(RD).imm(ConstTag::Imm16Split).arch(V6T2),

        // Status registers, branch and exchange, exceptions
        Mrs = conditional("MRS", "%m%c %0, CPSR").r0(RD),
        MrsSpsr = conditional("MRS", "%m%c %0, SPSR").r0(RD),
        MsrReg = conditional("MSR", "%m%c CPSR_%F, %0").r0(RM).mask(FieldMaskTag::Bits16_19),
        MsrRegSpsr = conditional("MSR", "%m%c SPSR_%F, %0").r0(RM).mask(FieldMaskTag::Bits16_19),
        MsrImm = conditional("MSR", "%m%c CPSR_%F, %C").imm(ConstTag::ArmRotImm).mask(FieldMaskTag::Bits16_19),
        MsrImmSpsr = conditional("MSR", "%m%c SPSR_%F, %C").imm(ConstTag::ArmRotImm).mask(FieldMaskTag::Bits16_19),
        Bx = conditional("BX", "%m%c %0").r0(RM).arch(ArchVersion::V4T),
        Bxj = conditional("BXJ", "%m%c %0").r0(RM).arch(V5TE).isa(IsaFeature::Jazelle),
        BlxReg = conditional("BLX", "%m%c %0").r0(RM).arch(V5T),
        /// Branch into the auxiliary architecture, `Rm` selects the module.
        Baa = conditional("BAA", "%m%c %0").r0(RM).isa(IsaFeature::Auxiliary),
        Clz = media2("CLZ").arch(V5T),
        Qadd = saturating("QADD"),
        Qsub = saturating("QSUB"),
        Qdadd = saturating("QDADD"),
        Qdsub = saturating("QDSUB"),
        Bkpt = OpAttrs::new("BKPT", "%m %C").imm(ConstTag::ImmBkpt).arch(V5T),
        Smc = conditional("SMC", "%m%c %C").imm(ConstTag::Imm4).arch(V6K).isa(IsaFeature::Security),
        Svc = conditional("SVC", "%m%c %C").imm(ConstTag::Imm24),
        B = conditional("B", "%m%c %T").target(TargetTag::Arm24),
        Bl = conditional("BL", "%m%c %T").target(TargetTag::Arm24),
        BlxImm = OpAttrs::new("BLX", "%m %T").target(TargetTag::ArmBlx).arch(V5T),

        // Multiplies
        Mul = mul("MUL"),
        Mla = mla("MLA"),
        Mls = mla("MLS").flags(SetFlagsTag::None).arch(V6T2),
        Umaal = mul_long("UMAAL").flags(SetFlagsTag::None).arch(V6),
        Umull = mul_long("UMULL"),
        Umlal = mul_long("UMLAL"),
        Smull = mul_long("SMULL"),
        Smlal = mul_long("SMLAL"),
        SmlaBb = dsp_mla("SMLABB"),
        SmlaBt = dsp_mla("SMLABT"),
        SmlaTb = dsp_mla("SMLATB"),
        SmlaTt = dsp_mla("SMLATT"),
        SmlawB = dsp_mla("SMLAWB"),
        SmlawT = dsp_mla("SMLAWT"),
        SmulwB = dsp_mul("SMULWB"),
        SmulwT = dsp_mul("SMULWT"),
        SmlalBb = dsp_mla_long("SMLALBB"),
        SmlalBt = dsp_mla_long("SMLALBT"),
        SmlalTb = dsp_mla_long("SMLALTB"),
        SmlalTt = dsp_mla_long("SMLALTT"),
        SmulBb = dsp_mul("SMULBB"),
        SmulBt = dsp_mul("SMULBT"),
        SmulTb = dsp_mul("SMULTB"),
        SmulTt = dsp_mul("SMULTT"),
        Smlad = media_mla("SMLAD"),
        Smladx = media_mla("SMLADX"),
        Smuad = media_mul("SMUAD"),
        Smuadx = media_mul("SMUADX"),
        Smlsd = media_mla("SMLSD"),
        Smlsdx = media_mla("SMLSDX"),
        Smusd = media_mul("SMUSD"),
        Smusdx = media_mul("SMUSDX"),
        Smlald = media_mla_long("SMLALD"),
        Smlaldx = media_mla_long("SMLALDX"),
        Smlsld = media_mla_long("SMLSLD"),
        Smlsldx = media_mla_long("SMLSLDX"),
        Smmla = media_mla("SMMLA"),
        Smmlar = media_mla("SMMLAR"),
        Smmls = media_mla("SMMLS"),
        Smmlsr = media_mla("SMMLSR"),
        Smmul = media_mul("SMMUL"),
        Smmulr = media_mul("SMMULR"),
        Usad8 = media_mul("USAD8"),
        Usada8 = media_mla("USADA8"),
        Sdiv = media_mul("SDIV").arch(V7).isa(IsaFeature::Divide),
        Udiv = media_mul("UDIV").arch(V7).isa(IsaFeature::Divide),

        // Synchronization
        Swp = conditional("SWP", "%m%c %0, %1, %M2").r0(RD).r1(RM).r2(RN).mem(4, false).unaligned(Fault, Fault),
        Swpb = conditional("SWPB", "%m%c %0, %1, %M2").r0(RD).r1(RM).r2(RN).mem(1, false),
        Strex = store_exclusive("STREX", 4).arch(V6),
        Ldrex = exclusive("LDREX", 4).arch(V6),
        Strexd = store_exclusive("STREXD", 8),
        Ldrexd = exclusive("LDREXD", 8),
        Strexb = store_exclusive("STREXB", 1).unaligned(UnalignedAction::None, UnalignedAction::None),
        Ldrexb = exclusive("LDREXB", 1).unaligned(UnalignedAction::None, UnalignedAction::None),
        Strexh = store_exclusive("STREXH", 2),
        Ldrexh = exclusive("LDREXH", 2),

        // Halfword, doubleword and signed loads and stores
        StrhImm = xls_imm("STRH", 2, false),
        StrhReg = xls_reg("STRH", 2, false),
        StrhtImm = unprivileged(xls_imm("STRHT", 2, false)).arch(V6T2),
        StrhtReg = unprivileged(xls_reg("STRHT", 2, false)).arch(V6T2),
        LdrhImm = xls_imm("LDRH", 2, false),
        LdrhReg = xls_reg("LDRH", 2, false),
        LdrhtImm = unprivileged(xls_imm("LDRHT", 2, false)).arch(V6T2),
        LdrhtReg = unprivileged(xls_reg("LDRHT", 2, false)).arch(V6T2),
        LdrdImm = xls_imm("LDRD", 8, false).arch(V5TE),
        LdrdReg = xls_reg("LDRD", 8, false).arch(V5TE),
        StrdImm = xls_imm("STRD", 8, false).arch(V5TE),
        StrdReg = xls_reg("STRD", 8, false).arch(V5TE),
        LdrsbImm = xls_imm("LDRSB", 1, true),
        LdrsbReg = xls_reg("LDRSB", 1, true),
        LdrsbtImm = unprivileged(xls_imm("LDRSBT", 1, true)).arch(V6T2),
        LdrsbtReg = unprivileged(xls_reg("LDRSBT", 1, true)).arch(V6T2),
        LdrshImm = xls_imm("LDRSH", 2, true),
        LdrshReg = xls_reg("LDRSH", 2, true),
        LdrshtImm = unprivileged(xls_imm("LDRSHT", 2, true)).arch(V6T2),
        LdrshtReg = unprivileged(xls_reg("LDRSHT", 2, true)).arch(V6T2),

        // Hints
        Nop = hint("NOP"),
        Yield = hint("YIELD"),
        Wfe = hint("WFE"),
        Wfi = hint("WFI"),
        Sev = hint("SEV"),
        Dbg = hint("DBG").imm(ConstTag::Imm4).fmt("%m%c %C").arch(V7),

        // Word and byte loads and stores
        StrImm = ls_imm("STR", 4, WORD_STORE),
        LdrImm = ls_imm("LDR", 4, WORD_LOAD),
        StrbImm = ls_imm("STRB", 1, BYTE),
        LdrbImm = ls_imm("LDRB", 1, BYTE),
        StrtImm = unprivileged(ls_imm("STRT", 4, WORD_STORE)),
        LdrtImm = unprivileged(ls_imm("LDRT", 4, WORD_LOAD)),
        StrbtImm = unprivileged(ls_imm("STRBT", 1, BYTE)),
        LdrbtImm = unprivileged(ls_imm("LDRBT", 1, BYTE)),
        LdrLit = conditional("LDR", "%m%c %0, %T").r0(RD).target(TargetTag::ArmLit12).mem(4, false)
            .unaligned(Rotate, Unaligned),
        LdrbLit = conditional("LDRB", "%m%c %0, %T").r0(RD).target(TargetTag::ArmLit12).mem(1, false),
        StrReg = ls_reg("STR", 4, WORD_STORE),
        LdrReg = ls_reg("LDR", 4, WORD_LOAD),
        StrbReg = ls_reg("STRB", 1, BYTE),
        LdrbReg = ls_reg("LDRB", 1, BYTE),
        StrtReg = unprivileged(ls_reg("STRT", 4, WORD_STORE)),
        LdrtReg = unprivileged(ls_reg("LDRT", 4, WORD_LOAD)),
        StrbtReg = unprivileged(ls_reg("STRBT", 1, BYTE)),
        LdrbtReg = unprivileged(ls_reg("LDRBT", 1, BYTE)),

        // Parallel add and subtract
        Sadd16 = media3("SADD16"),
        Sasx = media3("SASX"),
        Ssax = media3("SSAX"),
        Ssub16 = media3("SSUB16"),
        Sadd8 = media3("SADD8"),
        Ssub8 = media3("SSUB8"),
        Qadd16 = media3("QADD16"),
        Qasx = media3("QASX"),
        Qsax = media3("QSAX"),
        Qsub16 = media3("QSUB16"),
        Qadd8 = media3("QADD8"),
        Qsub8 = media3("QSUB8"),
        Shadd16 = media3("SHADD16"),
        Shasx = media3("SHASX"),
        Shsax = media3("SHSAX"),
        Shsub16 = media3("SHSUB16"),
        Shadd8 = media3("SHADD8"),
        Shsub8 = media3("SHSUB8"),
        Uadd16 = media3("UADD16"),
        Uasx = media3("UASX"),
        Usax = media3("USAX"),
        Usub16 = media3("USUB16"),
        Uadd8 = media3("UADD8"),
        Usub8 = media3("USUB8"),
        Uqadd16 = media3("UQADD16"),
        Uqasx = media3("UQASX"),
        Uqsax = media3("UQSAX"),
        Uqsub16 = media3("UQSUB16"),
        Uqadd8 = media3("UQADD8"),
        Uqsub8 = media3("UQSUB8"),
        Uhadd16 = media3("UHADD16"),
        Uhasx = media3("UHASX"),
        Uhsax = media3("UHSAX"),
        Uhsub16 = media3("UHSUB16"),
        Uhadd8 = media3("UHADD8"),
        Uhsub8 = media3("UHSUB8"),

        // Packing, saturation, reversal, extension, bitfields
        PkhBt = media3("PKHBT").shift(ShiftTag::Lsl).imm(ConstTag::ShiftImm).fmt("%m%c %0, %1, %2%H"),
        PkhTb = media3("PKHTB").shift(ShiftTag::Asr).imm(ConstTag::ShiftImm).fmt("%m%c %0, %1, %2%H"),
        Ssat = media2("SSAT").width(WidthTag::Sat20Plus1).shift(ShiftTag::Bit6).imm(ConstTag::ShiftImm)
            .fmt("%m%c %0, %w, %1%H"),
        Usat = media2("USAT").width(WidthTag::Sat20).shift(ShiftTag::Bit6).imm(ConstTag::ShiftImm)
            .fmt("%m%c %0, %w, %1%H"),
        Ssat16 = media2("SSAT16").width(WidthTag::Sat19Plus1).fmt("%m%c %0, %w, %1"),
        Usat16 = media2("USAT16").width(WidthTag::Sat19).fmt("%m%c %0, %w, %1"),
        Sel = media3("SEL"),
        Rev = media2("REV"),
        Rev16 = media2("REV16"),
        Revsh = media2("REVSH"),
        Rbit = media2("RBIT").arch(V6T2),
        Sxtab16 = extend_add("SXTAB16"),
        Sxtb16 = extend("SXTB16"),
        Sxtab = extend_add("SXTAB"),
        Sxtb = extend("SXTB"),
        Sxtah = extend_add("SXTAH"),
        Sxth = extend("SXTH"),
        Uxtab16 = extend_add("UXTAB16"),
        Uxtb16 = extend("UXTB16"),
        Uxtab = extend_add("UXTAB"),
        Uxtb = extend("UXTB"),
        Uxtah = extend_add("UXTAH"),
        Uxth = extend("UXTH"),
        Sbfx = media2("SBFX").imm(ConstTag::Lsb).width(WidthTag::ArmWidthM1).fmt("%m%c %0, %1, %C, %w").arch(V6T2),
        Ubfx = media2("UBFX").imm(ConstTag::Lsb).width(WidthTag::ArmWidthM1).fmt("%m%c %0, %1, %C, %w").arch(V6T2),
        Bfc = conditional("BFC", "%m%c %0, %C, %w").r0(RD).imm(ConstTag::Lsb).width(WidthTag::ArmMsb).arch(V6T2),
        Bfi = media2("BFI").imm(ConstTag::Lsb).width(WidthTag::ArmMsb).fmt("%m%c %0, %1, %C, %w").arch(V6T2),

        // Block transfers
        Stm = block("STM", "%m%i%c %0%!, %L"),
        Ldm = block("LDM", "%m%i%c %0%!, %L"),
        Push = stack("PUSH", IncDecTag::Db),
        Pop = stack("POP", IncDecTag::Ia),
        StmUser = block("STM", "%m%i%c %0, %L^").wb(WritebackTag::None),
        LdmUser = block("LDM", "%m%i%c %0, %L^").wb(WritebackTag::None),
        LdmExceptionReturn = block("LDM", "%m%i%c %0%!, %L^"),

        // Thumb only
        Cbz = thumb_only("CBZ"),
        Cbnz = thumb_only("CBNZ"),
        It = thumb_only("IT"),
        Tbb = thumb_only("TBB"),
        Tbh = thumb_only("TBH"),
        OrnImm = thumb_only("ORN"),
        OrnReg = thumb_only("ORN"),
        Hb = thumb_only("HB"),
        Hbl = thumb_only("HBL"),
        Hblp = thumb_only("HBLP"),
        Hbp = thumb_only("HBP"),
        Chka = thumb_only("CHKA"),
        Enterx = thumb_only("ENTERX"),
        Leavex = thumb_only("LEAVEX"),

        // Coprocessor
        Cdp = cond_coproc(coproc_dp("CDP")),
        Mcr = cond_coproc(coproc_rt("MCR")),
        Mrc = cond_coproc(coproc_rt("MRC")),
        Mcrr = cond_coproc(coproc_rt2("MCRR")),
        Mrrc = cond_coproc(coproc_rt2("MRRC")),
        Ldc = cond_coproc(coproc_ls("LDC")),
        Stc = cond_coproc(coproc_ls("STC")),
        Cdp2 = coproc2(coproc_dp("CDP2")),
        Mcr2 = coproc2(coproc_rt("MCR2")),
        Mrc2 = coproc2(coproc_rt("MRC2")),
        Mcrr2 = coproc_rt2("MCRR2").arch(V6),
        Mrrc2 = coproc_rt2("MRRC2").arch(V6),
        Ldc2 = coproc2(coproc_ls("LDC2")),
        Stc2 = coproc2(coproc_ls("STC2")),

        // Unconditional
        Cps = OpAttrs::new("CPS", "%m %C").imm(ConstTag::CpsMode).arch(V6),
        CpsIe = OpAttrs::new("CPSIE", "%m %C").imm(ConstTag::CpsMode).arch(V6),
        CpsId = OpAttrs::new("CPSID", "%m %C").imm(ConstTag::CpsMode).arch(V6),
        SetendLe = OpAttrs::new("SETEND", "%m LE").arch(V6),
        SetendBe = OpAttrs::new("SETEND", "%m BE").arch(V6),
        PldImm = pld("PLD"),
        PldwImm = pld("PLDW").arch(V7).isa(IsaFeature::Multiprocessing),
        PliImm = pld("PLI").arch(V7),
        PldLit = OpAttrs::new("PLD", "%m %T").target(TargetTag::ArmLit12).arch(V5TE),
        PldReg = pld_reg("PLD"),
        PldwReg = pld_reg("PLDW").arch(V7).isa(IsaFeature::Multiprocessing),
        PliReg = pld_reg("PLI").arch(V7),
        Clrex = OpAttrs::new("CLREX", "%m").arch(V6K),
        Dsb = barrier("DSB"),
        Dmb = barrier("DMB"),
        Isb = barrier("ISB"),
        Srs = OpAttrs::new("SRS", "%m%i %0%!, %C")
            .r0(SP)
            .imm(ConstTag::CpsMode)
            .incdec(IncDecTag::Arm23_24)
            .wb(WritebackTag::ArmW21)
            .mem(4, false)
            .arch(V6),
        Rfe = OpAttrs::new("RFE", "%m%i %0%!")
            .r0(RN)
            .incdec(IncDecTag::Arm23_24)
            .wb(WritebackTag::ArmW21)
            .mem(4, false)
            .arch(V6),

        // VFP data processing
        VmlaF32 = vfp3("VMLA", false),
        VmlaF64 = vfp3("VMLA", true),
        VmlsF32 = vfp3("VMLS", false),
        VmlsF64 = vfp3("VMLS", true),
        VnmlaF32 = vfp3("VNMLA", false),
        VnmlaF64 = vfp3("VNMLA", true),
        VnmlsF32 = vfp3("VNMLS", false),
        VnmlsF64 = vfp3("VNMLS", true),
        VmulF32 = vfp3("VMUL", false),
        VmulF64 = vfp3("VMUL", true),
        VnmulF32 = vfp3("VNMUL", false),
        VnmulF64 = vfp3("VNMUL", true),
        VaddF32 = vfp3("VADD", false),
        VaddF64 = vfp3("VADD", true),
        VsubF32 = vfp3("VSUB", false),
        VsubF64 = vfp3("VSUB", true),
        VdivF32 = vfp3("VDIV", false),
        VdivF64 = vfp3("VDIV", true),
        VmovImmF32 = vfp_imm(false),
        VmovImmF64 = vfp_imm(true),
        VmovF32 = vfp2("VMOV", false),
        VmovF64 = vfp2("VMOV", true),
        VabsF32 = vfp2("VABS", false),
        VabsF64 = vfp2("VABS", true),
        VnegF32 = vfp2("VNEG", false),
        VnegF64 = vfp2("VNEG", true),
        VsqrtF32 = vfp2("VSQRT", false),
        VsqrtF64 = vfp2("VSQRT", true),
        VcvtbF32F16 = vfp2("VCVTB", false).dt(F32, DtTag::Fixed(DataType::F16)).isa(IsaFeature::Vfp3),
        VcvttF32F16 = vfp2("VCVTT", false).dt(F32, DtTag::Fixed(DataType::F16)).isa(IsaFeature::Vfp3),
        VcvtbF16F32 = vfp2("VCVTB", false).dt(DtTag::Fixed(DataType::F16), F32).isa(IsaFeature::Vfp3),
        VcvttF16F32 = vfp2("VCVTT", false).dt(DtTag::Fixed(DataType::F16), F32).isa(IsaFeature::Vfp3),
        VcmpF32 = vfp2("VCMP", false),
        VcmpF64 = vfp2("VCMP", true),
        VcmpeF32 = vfp2("VCMPE", false),
        VcmpeF64 = vfp2("VCMPE", true),
        VcmpZeroF32 = vfp_cmp_zero("VCMP", false),
        VcmpZeroF64 = vfp_cmp_zero("VCMP", true),
        VcmpeZeroF32 = vfp_cmp_zero("VCMPE", false),
        VcmpeZeroF64 = vfp_cmp_zero("VCMPE", true),
        VcvtF64F32 = vfp2("VCVT", false).r0(DD).dt(F64, F32),
        VcvtF32F64 = vfp2("VCVT", true).r0(SD).dt(F32, F64),
        VcvtF32Int = vfp2("VCVT", false).dt(F32, DtTag::IntBit7),
        VcvtF64Int = vfp2("VCVT", false).r0(DD).dt(F64, DtTag::IntBit7),
        VcvtIntF32 = vfp2("VCVT", false).dt(DtTag::IntBit16, F32),
        VcvtIntF64 = vfp2("VCVT", true).r0(SD).dt(DtTag::IntBit16, F64),
        VcvtrIntF32 = vfp2("VCVTR", false).dt(DtTag::IntBit16, F32),
        VcvtrIntF64 = vfp2("VCVTR", true).r0(SD).dt(DtTag::IntBit16, F64),
        VcvtF32Fixed = vfp_fixed(false, false),
        VcvtF64Fixed = vfp_fixed(true, false),
        VcvtFixedF32 = vfp_fixed(false, true),
        VcvtFixedF64 = vfp_fixed(true, true),

        // Transfers between core and extension registers
        VmovCoreToS = vfp("VMOV", "%m%c %0, %1").r0(SN).r1(RD),
        VmovSToCore = vfp("VMOV", "%m%c %0, %1").r0(RD).r1(SN),
        Vmsr = vfp("VMSR", "%m%c FPSCR, %0").r0(RD),
        Vmrs = vfp("VMRS", "%m%c %0, FPSCR").r0(RD),
        VmovCoreToScalar = vfp("VMOV", "%m%c%D %0%X, %1")
            .r0(DN)
            .r1(RD)
            .esize(EsizeTag::MovScalar)
            .dt(DtTag::Untyped, DtTag::None)
            .index(IndexTag::MovScalar),
        VmovScalarToCore = vfp("VMOV", "%m%c%D %0, %1%X")
            .r0(RD)
            .r1(DN)
            .esize(EsizeTag::MovScalar)
            .dt(DtTag::SignedU23, DtTag::None)
            .index(IndexTag::MovScalar),
        VdupCoreD = vfp("VDUP", "%m%c%D %0, %1")
            .r0(DN)
            .r1(RD)
            .esize(EsizeTag::DupCore)
            .dt(DtTag::Untyped, DtTag::None)
            .isa(IsaFeature::AdvSimd),
        VdupCoreQ = vfp("VDUP", "%m%c%D %0, %1")
            .r0(QN)
            .r1(RD)
            .esize(EsizeTag::DupCore)
            .dt(DtTag::Untyped, DtTag::None)
            .isa(IsaFeature::AdvSimd),
        VmovCoreToSS = vfp("VMOV", "%m%c %0, %1, %2, %3").r0(SM).r1(RegTag::S0_5Next).r2(RD).r3(RN),
        VmovSSToCore = vfp("VMOV", "%m%c %0, %1, %2, %3").r0(RD).r1(RN).r2(SM).r3(RegTag::S0_5Next),
        VmovCoreToD = vfp("VMOV", "%m%c %0, %1, %2").r0(DM).r1(RD).r2(RN),
        VmovDToCore = vfp("VMOV", "%m%c %0, %1, %2").r0(RD).r1(RN).r2(DM),

        // Extension register loads and stores
        VldrS = vfp_ls("VLDR", false),
        VldrD = vfp_ls("VLDR", true),
        VstrS = vfp_ls("VSTR", false),
        VstrD = vfp_ls("VSTR", true),
        VldmS = vfp_multiple("VLDM", false),
        VldmD = vfp_multiple("VLDM", true),
        VstmS = vfp_multiple("VSTM", false),
        VstmD = vfp_multiple("VSTM", true),
        VpushS = vfp_stack("VPUSH", false, IncDecTag::Db),
        VpushD = vfp_stack("VPUSH", true, IncDecTag::Db),
        VpopS = vfp_stack("VPOP", false, IncDecTag::Ia),
        VpopD = vfp_stack("VPOP", true, IncDecTag::Ia),

        // Advanced SIMD, three registers of the same length
        VhaddD = neon3("VHADD", false, DtTag::SignedU24),
        VhaddQ = neon3("VHADD", true, DtTag::SignedU24),
        VqaddD = neon3("VQADD", false, DtTag::SignedU24),
        VqaddQ = neon3("VQADD", true, DtTag::SignedU24),
        VrhaddD = neon3("VRHADD", false, DtTag::SignedU24),
        VrhaddQ = neon3("VRHADD", true, DtTag::SignedU24),
        VandD = neon3_logic("VAND", false),
        VandQ = neon3_logic("VAND", true),
        VbicD = neon3_logic("VBIC", false),
        VbicQ = neon3_logic("VBIC", true),
        VorrD = neon3_logic("VORR", false),
        VorrQ = neon3_logic("VORR", true),
        VornD = neon3_logic("VORN", false),
        VornQ = neon3_logic("VORN", true),
        VeorD = neon3_logic("VEOR", false),
        VeorQ = neon3_logic("VEOR", true),
        VbslD = neon3_logic("VBSL", false),
        VbslQ = neon3_logic("VBSL", true),
        VbitD = neon3_logic("VBIT", false),
        VbitQ = neon3_logic("VBIT", true),
        VbifD = neon3_logic("VBIF", false),
        VbifQ = neon3_logic("VBIF", true),
        VhsubD = neon3("VHSUB", false, DtTag::SignedU24),
        VhsubQ = neon3("VHSUB", true, DtTag::SignedU24),
        VqsubD = neon3("VQSUB", false, DtTag::SignedU24),
        VqsubQ = neon3("VQSUB", true, DtTag::SignedU24),
        VcgtD = neon3("VCGT", false, DtTag::SignedU24),
        VcgtQ = neon3("VCGT", true, DtTag::SignedU24),
        VcgeD = neon3("VCGE", false, DtTag::SignedU24),
        VcgeQ = neon3("VCGE", true, DtTag::SignedU24),
        VshlRegD = neon3("VSHL", false, DtTag::SignedU24),
        VshlRegQ = neon3("VSHL", true, DtTag::SignedU24),
        VqshlRegD = neon3("VQSHL", false, DtTag::SignedU24),
        VqshlRegQ = neon3("VQSHL", true, DtTag::SignedU24),
        VrshlRegD = neon3("VRSHL", false, DtTag::SignedU24),
        VrshlRegQ = neon3("VRSHL", true, DtTag::SignedU24),
        VqrshlRegD = neon3("VQRSHL", false, DtTag::SignedU24),
        VqrshlRegQ = neon3("VQRSHL", true, DtTag::SignedU24),
        VmaxD = neon3("VMAX", false, DtTag::SignedU24),
        VmaxQ = neon3("VMAX", true, DtTag::SignedU24),
        VminD = neon3("VMIN", false, DtTag::SignedU24),
        VminQ = neon3("VMIN", true, DtTag::SignedU24),
        VabdD = neon3("VABD", false, DtTag::SignedU24),
        VabdQ = neon3("VABD", true, DtTag::SignedU24),
        VabaD = neon3("VABA", false, DtTag::SignedU24),
        VabaQ = neon3("VABA", true, DtTag::SignedU24),
        VaddD = neon3("VADD", false, DtTag::Int),
        VaddQ = neon3("VADD", true, DtTag::Int),
        VsubD = neon3("VSUB", false, DtTag::Int),
        VsubQ = neon3("VSUB", true, DtTag::Int),
        VtstD = neon3("VTST", false, DtTag::Untyped),
        VtstQ = neon3("VTST", true, DtTag::Untyped),
        VceqD = neon3("VCEQ", false, DtTag::Int),
        VceqQ = neon3("VCEQ", true, DtTag::Int),
        VmlaD = neon3("VMLA", false, DtTag::Int),
        VmlaQ = neon3("VMLA", true, DtTag::Int),
        VmlsD = neon3("VMLS", false, DtTag::Int),
        VmlsQ = neon3("VMLS", true, DtTag::Int),
        VmulD = neon3("VMUL", false, DtTag::Int),
        VmulQ = neon3("VMUL", true, DtTag::Int),
        VmulPD = neon3("VMUL", false, DtTag::Fixed(DataType::P8)),
        VmulPQ = neon3("VMUL", true, DtTag::Fixed(DataType::P8)),
        VpmaxD = neon3("VPMAX", false, DtTag::SignedU24),
        VpminD = neon3("VPMIN", false, DtTag::SignedU24),
        VqdmulhD = neon3("VQDMULH", false, DtTag::SignedU24),
        VqdmulhQ = neon3("VQDMULH", true, DtTag::SignedU24),
        VqrdmulhD = neon3("VQRDMULH", false, DtTag::SignedU24),
        VqrdmulhQ = neon3("VQRDMULH", true, DtTag::SignedU24),
        VpaddD = neon3("VPADD", false, DtTag::Int),
        VaddFD = neon3_float("VADD", false),
        VaddFQ = neon3_float("VADD", true),
        VsubFD = neon3_float("VSUB", false),
        VsubFQ = neon3_float("VSUB", true),
        VpaddFD = neon3_float("VPADD", false),
        VabdFD = neon3_float("VABD", false),
        VabdFQ = neon3_float("VABD", true),
        VmlaFD = neon3_float("VMLA", false),
        VmlaFQ = neon3_float("VMLA", true),
        VmlsFD = neon3_float("VMLS", false),
        VmlsFQ = neon3_float("VMLS", true),
        VmulFD = neon3_float("VMUL", false),
        VmulFQ = neon3_float("VMUL", true),
        VceqFD = neon3_float("VCEQ", false),
        VceqFQ = neon3_float("VCEQ", true),
        VcgeFD = neon3_float("VCGE", false),
        VcgeFQ = neon3_float("VCGE", true),
        VcgtFD = neon3_float("VCGT", false),
        VcgtFQ = neon3_float("VCGT", true),
        VacgeFD = neon3_float("VACGE", false),
        VacgeFQ = neon3_float("VACGE", true),
        VacgtFD = neon3_float("VACGT", false),
        VacgtFQ = neon3_float("VACGT", true),
        VmaxFD = neon3_float("VMAX", false),
        VmaxFQ = neon3_float("VMAX", true),
        VminFD = neon3_float("VMIN", false),
        VminFQ = neon3_float("VMIN", true),
        VpmaxFD = neon3_float("VPMAX", false),
        VpminFD = neon3_float("VPMIN", false),
        VrecpsD = neon3_float("VRECPS", false),
        VrecpsQ = neon3_float("VRECPS", true),
        VrsqrtsD = neon3_float("VRSQRTS", false),
        VrsqrtsQ = neon3_float("VRSQRTS", true),

        // Advanced SIMD, two registers
        Vrev64D = neon2("VREV64", false, DtTag::Untyped),
        Vrev64Q = neon2("VREV64", true, DtTag::Untyped),
        Vrev32D = neon2("VREV32", false, DtTag::Untyped),
        Vrev32Q = neon2("VREV32", true, DtTag::Untyped),
        Vrev16D = neon2("VREV16", false, DtTag::Untyped),
        Vrev16Q = neon2("VREV16", true, DtTag::Untyped),
        VpaddlD = neon2("VPADDL", false, DtTag::UnsignedBit7),
        VpaddlQ = neon2("VPADDL", true, DtTag::UnsignedBit7),
        VclsD = neon2("VCLS", false, DtTag::Int),
        VclsQ = neon2("VCLS", true, DtTag::Int),
        VclzD = neon2("VCLZ", false, DtTag::Int),
        VclzQ = neon2("VCLZ", true, DtTag::Int),
        VcntD = neon2("VCNT", false, DtTag::Fixed(DataType::B8)).esize(EsizeTag::E8),
        VcntQ = neon2("VCNT", true, DtTag::Fixed(DataType::B8)).esize(EsizeTag::E8),
        VmvnRegD = neon2("VMVN", false, DtTag::None).esize(EsizeTag::None).fmt("%m %0, %1"),
        VmvnRegQ = neon2("VMVN", true, DtTag::None).esize(EsizeTag::None).fmt("%m %0, %1"),
        VpadalD = neon2("VPADAL", false, DtTag::UnsignedBit7),
        VpadalQ = neon2("VPADAL", true, DtTag::UnsignedBit7),
        VqabsD = neon2("VQABS", false, DtTag::Int),
        VqabsQ = neon2("VQABS", true, DtTag::Int),
        VqnegD = neon2("VQNEG", false, DtTag::Int),
        VqnegQ = neon2("VQNEG", true, DtTag::Int),
        VcgtZeroD = neon2("VCGT", false, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcgtZeroQ = neon2("VCGT", true, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcgeZeroD = neon2("VCGE", false, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcgeZeroQ = neon2("VCGE", true, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VceqZeroD = neon2("VCEQ", false, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VceqZeroQ = neon2("VCEQ", true, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcleZeroD = neon2("VCLE", false, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcleZeroQ = neon2("VCLE", true, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcltZeroD = neon2("VCLT", false, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VcltZeroQ = neon2("VCLT", true, DtTag::IntOrFloat10).fmt("%m%D %0, %1, #0"),
        VabsD = neon2("VABS", false, DtTag::IntOrFloat10),
        VabsQ = neon2("VABS", true, DtTag::IntOrFloat10),
        VnegD = neon2("VNEG", false, DtTag::IntOrFloat10),
        VnegQ = neon2("VNEG", true, DtTag::IntOrFloat10),
        VswpD = neon2("VSWP", false, DtTag::None).esize(EsizeTag::None).fmt("%m %0, %1"),
        VswpQ = neon2("VSWP", true, DtTag::None).esize(EsizeTag::None).fmt("%m %0, %1"),
        VtrnD = neon2("VTRN", false, DtTag::Untyped),
        VtrnQ = neon2("VTRN", true, DtTag::Untyped),
        VuzpD = neon2("VUZP", false, DtTag::Untyped),
        VuzpQ = neon2("VUZP", true, DtTag::Untyped),
        VzipD = neon2("VZIP", false, DtTag::Untyped),
        VzipQ = neon2("VZIP", true, DtTag::Untyped),
        VrecpeD = neon2("VRECPE", false, DtTag::U32OrFloat8).esize(EsizeTag::E32),
        VrecpeQ = neon2("VRECPE", true, DtTag::U32OrFloat8).esize(EsizeTag::E32),
        VrsqrteD = neon2("VRSQRTE", false, DtTag::U32OrFloat8).esize(EsizeTag::E32),
        VrsqrteQ = neon2("VRSQRTE", true, DtTag::U32OrFloat8).esize(EsizeTag::E32),
        VcvtSimdD = neon2("VCVT", false, DtTag::SimdCvtDst).esize(EsizeTag::E32).dt(DtTag::SimdCvtDst, DtTag::SimdCvtSrc),
        VcvtSimdQ = neon2("VCVT", true, DtTag::SimdCvtDst).esize(EsizeTag::E32).dt(DtTag::SimdCvtDst, DtTag::SimdCvtSrc),
        Vmovn = neon2("VMOVN", false, DtTag::Int).r1(QM).esize(EsizeTag::Size18Wide),
        Vqmovn = neon2("VQMOVN", false, DtTag::UnsignedBit6).r1(QM).esize(EsizeTag::Size18Wide),
        Vqmovun = neon2("VQMOVUN", false, DtTag::Signed).r1(QM).esize(EsizeTag::Size18Wide),
        VshllMax = neon2("VSHLL", false, DtTag::Int).r0(QD).fmt("%m%D %0, %1, #%E"),
        VcvtF16F32 = neon2("VCVT", false, DtTag::Fixed(DataType::F16)).r1(QM).esize(EsizeTag::E16)
            .dt(DtTag::Fixed(DataType::F16), F32),
        VcvtF32F16 = neon2("VCVT", false, F32).r0(QD).esize(EsizeTag::E16).dt(F32, DtTag::Fixed(DataType::F16)),

        // Advanced SIMD, shift by immediate
        VshrD = neon_shift("VSHR", false, DtTag::SignedU24, ConstTag::SimdShrImm),
        VshrQ = neon_shift("VSHR", true, DtTag::SignedU24, ConstTag::SimdShrImm),
        VsraD = neon_shift("VSRA", false, DtTag::SignedU24, ConstTag::SimdShrImm),
        VsraQ = neon_shift("VSRA", true, DtTag::SignedU24, ConstTag::SimdShrImm),
        VrshrD = neon_shift("VRSHR", false, DtTag::SignedU24, ConstTag::SimdShrImm),
        VrshrQ = neon_shift("VRSHR", true, DtTag::SignedU24, ConstTag::SimdShrImm),
        VrsraD = neon_shift("VRSRA", false, DtTag::SignedU24, ConstTag::SimdShrImm),
        VrsraQ = neon_shift("VRSRA", true, DtTag::SignedU24, ConstTag::SimdShrImm),
        VsriD = neon_shift("VSRI", false, DtTag::Untyped, ConstTag::SimdShrImm),
        VsriQ = neon_shift("VSRI", true, DtTag::Untyped, ConstTag::SimdShrImm),
        VshlImmD = neon_shift("VSHL", false, DtTag::Int, ConstTag::SimdShlImm),
        VshlImmQ = neon_shift("VSHL", true, DtTag::Int, ConstTag::SimdShlImm),
        VsliD = neon_shift("VSLI", false, DtTag::Untyped, ConstTag::SimdShlImm),
        VsliQ = neon_shift("VSLI", true, DtTag::Untyped, ConstTag::SimdShlImm),
        VqshluD = neon_shift("VQSHLU", false, DtTag::SignedU24, ConstTag::SimdShlImm),
        VqshluQ = neon_shift("VQSHLU", true, DtTag::SignedU24, ConstTag::SimdShlImm),
        VqshlImmD = neon_shift("VQSHL", false, DtTag::SignedU24, ConstTag::SimdShlImm),
        VqshlImmQ = neon_shift("VQSHL", true, DtTag::SignedU24, ConstTag::SimdShlImm),
        Vshrn = neon_shift_narrow("VSHRN", DtTag::Int),
        Vrshrn = neon_shift_narrow("VRSHRN", DtTag::Int),
        Vqshrn = neon_shift_narrow("VQSHRN", DtTag::SignedU24),
        Vqrshrn = neon_shift_narrow("VQRSHRN", DtTag::SignedU24),
        Vqshrun = neon_shift_narrow("VQSHRUN", DtTag::SignedU24),
        Vqrshrun = neon_shift_narrow("VQRSHRUN", DtTag::SignedU24),
        Vshll = neon_shift("VSHLL", false, DtTag::SignedU24, ConstTag::SimdShlImm).r0(QD),
        VcvtF32FixedD = neon_cvt_fixed(false, false),
        VcvtF32FixedQ = neon_cvt_fixed(true, false),
        VcvtFixedF32D = neon_cvt_fixed(false, true),
        VcvtFixedF32Q = neon_cvt_fixed(true, true),

        // Advanced SIMD, one register and a modified immediate
        VmovImmI32D = neon_modimm("VMOV", false, DataType::I32),
        VmovImmI32Q = neon_modimm("VMOV", true, DataType::I32),
        VorrImmI32D = neon_modimm("VORR", false, DataType::I32),
        VorrImmI32Q = neon_modimm("VORR", true, DataType::I32),
        VmvnImmI32D = neon_modimm("VMVN", false, DataType::I32),
        VmvnImmI32Q = neon_modimm("VMVN", true, DataType::I32),
        VbicImmI32D = neon_modimm("VBIC", false, DataType::I32),
        VbicImmI32Q = neon_modimm("VBIC", true, DataType::I32),
        VmovImmI16D = neon_modimm("VMOV", false, DataType::I16),
        VmovImmI16Q = neon_modimm("VMOV", true, DataType::I16),
        VorrImmI16D = neon_modimm("VORR", false, DataType::I16),
        VorrImmI16Q = neon_modimm("VORR", true, DataType::I16),
        VmvnImmI16D = neon_modimm("VMVN", false, DataType::I16),
        VmvnImmI16Q = neon_modimm("VMVN", true, DataType::I16),
        VbicImmI16D = neon_modimm("VBIC", false, DataType::I16),
        VbicImmI16Q = neon_modimm("VBIC", true, DataType::I16),
        VmovImmOnesD = neon_modimm("VMOV", false, DataType::I32),
        VmovImmOnesQ = neon_modimm("VMOV", true, DataType::I32),
        VmvnImmOnesD = neon_modimm("VMVN", false, DataType::I32),
        VmvnImmOnesQ = neon_modimm("VMVN", true, DataType::I32),
        VmovImmI8D = neon_modimm("VMOV", false, DataType::I8),
        VmovImmI8Q = neon_modimm("VMOV", true, DataType::I8),
        VmovImmI64D = neon_modimm("VMOV", false, DataType::I64),
        VmovImmI64Q = neon_modimm("VMOV", true, DataType::I64),
        VmovImmF32D = neon_modimm("VMOV", false, DataType::F32),
        VmovImmF32Q = neon_modimm("VMOV", true, DataType::F32),

        // Advanced SIMD, two registers and a scalar
        VmlaScalarD = neon_scalar("VMLA", false, DtTag::Int),
        VmlaScalarQ = neon_scalar("VMLA", true, DtTag::Int),
        VmlaScalarFD = neon_scalar("VMLA", false, F32),
        VmlaScalarFQ = neon_scalar("VMLA", true, F32),
        VmlsScalarD = neon_scalar("VMLS", false, DtTag::Int),
        VmlsScalarQ = neon_scalar("VMLS", true, DtTag::Int),
        VmlsScalarFD = neon_scalar("VMLS", false, F32),
        VmlsScalarFQ = neon_scalar("VMLS", true, F32),
        VmulScalarD = neon_scalar("VMUL", false, DtTag::Int),
        VmulScalarQ = neon_scalar("VMUL", true, DtTag::Int),
        VmulScalarFD = neon_scalar("VMUL", false, F32),
        VmulScalarFQ = neon_scalar("VMUL", true, F32),
        VqdmulhScalarD = neon_scalar("VQDMULH", false, DtTag::SignedU24),
        VqdmulhScalarQ = neon_scalar("VQDMULH", true, DtTag::SignedU24),
        VqrdmulhScalarD = neon_scalar("VQRDMULH", false, DtTag::SignedU24),
        VqrdmulhScalarQ = neon_scalar("VQRDMULH", true, DtTag::SignedU24),
        VmlalScalar = neon_scalar_long("VMLAL", DtTag::SignedU24),
        VmlslScalar = neon_scalar_long("VMLSL", DtTag::SignedU24),
        VmullScalar = neon_scalar_long("VMULL", DtTag::SignedU24),
        VqdmlalScalar = neon_scalar_long("VQDMLAL", DtTag::SignedU24),
        VqdmlslScalar = neon_scalar_long("VQDMLSL", DtTag::SignedU24),
        VqdmullScalar = neon_scalar_long("VQDMULL", DtTag::SignedU24),

        // Advanced SIMD, three registers of different lengths
        Vaddl = neon_long("VADDL", DtTag::SignedU24),
        Vaddw = neon_wide("VADDW", DtTag::SignedU24),
        Vsubl = neon_long("VSUBL", DtTag::SignedU24),
        Vsubw = neon_wide("VSUBW", DtTag::SignedU24),
        Vaddhn = neon_narrow("VADDHN", DtTag::Int),
        Vraddhn = neon_narrow("VRADDHN", DtTag::Int),
        Vabal = neon_long("VABAL", DtTag::SignedU24),
        Vsubhn = neon_narrow("VSUBHN", DtTag::Int),
        Vrsubhn = neon_narrow("VRSUBHN", DtTag::Int),
        Vabdl = neon_long("VABDL", DtTag::SignedU24),
        Vmlal = neon_long("VMLAL", DtTag::SignedU24),
        Vmlsl = neon_long("VMLSL", DtTag::SignedU24),
        Vqdmlal = neon_long("VQDMLAL", DtTag::SignedU24),
        Vqdmlsl = neon_long("VQDMLSL", DtTag::SignedU24),
        Vmull = neon_long("VMULL", DtTag::SignedU24),
        Vqdmull = neon_long("VQDMULL", DtTag::SignedU24),
        VmullP = neon_long("VMULL", DtTag::Fixed(DataType::P8)),

        // Advanced SIMD, other
        VextD = vext(false),
        VextQ = vext(true),
        Vtbl = vtb("VTBL"),
        Vtbx = vtb("VTBX"),
        VdupScalarD = vdup_scalar(false),
        VdupScalarQ = vdup_scalar(true),

        // Advanced SIMD element and structure loads and stores
        Vst1Multi = neon_multi("VST1"),
        Vst2Multi = neon_multi("VST2"),
        Vst3Multi = neon_multi("VST3"),
        Vst4Multi = neon_multi("VST4"),
        Vld1Multi = neon_multi("VLD1"),
        Vld2Multi = neon_multi("VLD2"),
        Vld3Multi = neon_multi("VLD3"),
        Vld4Multi = neon_multi("VLD4"),
        Vst1Lane = neon_lane("VST1", 1),
        Vst2Lane = neon_lane("VST2", 2),
        Vst3Lane = neon_lane("VST3", 3),
        Vst4Lane = neon_lane("VST4", 4),
        Vld1Lane = neon_lane("VLD1", 1),
        Vld2Lane = neon_lane("VLD2", 2),
        Vld3Lane = neon_lane("VLD3", 3),
        Vld4Lane = neon_lane("VLD4", 4),
        Vld1All = neon_all_lanes("VLD1", 1),
        Vld2All = neon_all_lanes("VLD2", 2),
        Vld3All = neon_all_lanes("VLD3", 3),
        Vld4All = neon_all_lanes("VLD4", 4),
    }
}

impl std::fmt::Display for ArmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attrs().mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attrs_follow_declaration_order() {
        assert_eq!(ArmType::ALL.len(), ARM_ATTRS.len());
        assert_eq!(ArmType::ALL[0], ArmType::Undefined);
        for ty in ArmType::ALL {
            assert_eq!(ArmType::ALL[*ty as usize], *ty);
        }
    }

    #[test]
    fn data_processing_shapes() {
        let add = ArmType::AddRmShftRs.attrs();
        assert_eq!(add.regs, [RD, RN, RM, RS]);
        assert_eq!(add.set_flags, SetFlagsTag::Bit20);

        let cmp = ArmType::CmpImm.attrs();
        assert_eq!(cmp.regs[0], RN);
        assert_eq!(cmp.set_flags, SetFlagsTag::Always);
        assert_eq!(cmp.format, "%m%c %0, %C");

        let mov = ArmType::MovRmShftImm.attrs();
        assert_eq!(mov.regs, [RD, RM, RegTag::None, RegTag::None]);
        assert_eq!(mov.constant, ConstTag::ShiftImm);
    }

    #[test]
    fn thumb_only_types_declare_nothing() {
        for ty in [ArmType::Cbz, ArmType::It, ArmType::Hbp, ArmType::Enterx] {
            assert_eq!(ty.attrs().reg_count(), 0);
            assert_eq!(ty.attrs().cond, CondTag::None);
        }
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(ArmType::Baa.to_string(), "BAA");
        assert_eq!(ArmType::VaddF32.to_string(), "VADD");
    }
}
