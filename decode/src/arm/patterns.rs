//! ARM decode patterns.
//!
//! Priorities:
//!
//! | Priority | Entries                                                   |
//! |----------|-----------------------------------------------------------|
//! | 0        | conditional encodings (`cond` left open)                  |
//! | 1        | catch-all for the `cond == 1111` space                    |
//! | 2        | unconditional encodings, Advanced SIMD                    |
//! | 3        | Advanced SIMD corners carved out of wider encodings       |
//!
//! The coprocessor, VFP and Advanced SIMD groups are also registered by the
//! Thumb tables, see [`crate::thumb`].

use super::types::ArmType;
use crate::pattern::{entry, Pattern, PatternEntry};

type Entries = Vec<PatternEntry<ArmType>>;

const COND: u8 = 0;
const UNCOND_SPACE: u8 = 1;
const UNCOND: u8 = 2;
const SIMD_CORNER: u8 = 3;

fn stamped(pattern: &str, fields: &[(std::ops::RangeInclusive<u8>, u32)], ty: ArmType, priority: u8) -> PatternEntry<ArmType> {
    let pattern = fields
        .iter()
        .fold(Pattern::parse(pattern), |p, (bits, value)| p.with_field(bits.clone(), *value));
    PatternEntry { pattern, ty, priority }
}

/// Adds the doubleword (`Q = 0`) and quadword (`Q = 1`) forms of an
/// Advanced SIMD encoding. The quadword form requires even register numbers,
/// the low bit of every `Vx` field named in `even` is fixed to zero.
fn d_q(out: &mut Entries, pattern: &str, q_bit: u8, even: &[u8], d: ArmType, q: ArmType, priority: u8) {
    let base = Pattern::parse(pattern);
    out.push(PatternEntry {
        pattern: base.with_field(q_bit..=q_bit, 0),
        ty: d,
        priority,
    });
    let quad = even
        .iter()
        .fold(base.with_field(q_bit..=q_bit, 1), |p, bit| p.with_field(*bit..=*bit, 0));
    out.push(PatternEntry {
        pattern: quad,
        ty: q,
        priority,
    });
}

const DNM: [u8; 3] = [12, 16, 0];
const DM: [u8; 2] = [12, 0];
const DN: [u8; 2] = [12, 16];

/// Every ARM pattern, in registration order.
#[must_use]
pub fn patterns() -> Entries {
    let mut out = Vec::with_capacity(900);
    data_processing(&mut out);
    miscellaneous(&mut out);
    multiplies(&mut out);
    load_store(&mut out);
    media(&mut out);
    block_branch(&mut out);
    unconditional(&mut out);
    out.extend(coprocessor());
    out.extend(vfp());
    out.extend(simd_data());
    out.extend(simd_load_store());
    out
}

fn data_processing(out: &mut Entries) {
    use ArmType::*;

    #[rustfmt::skip]
    let ops: [(u32, [ArmType; 5]); 16] = [
        (0b0000, [AndImm, AndRm, AndRmShftImm, AndRmShftRs, AndRmRrx]),
        (0b0001, [EorImm, EorRm, EorRmShftImm, EorRmShftRs, EorRmRrx]),
        (0b0010, [SubImm, SubRm, SubRmShftImm, SubRmShftRs, SubRmRrx]),
        (0b0011, [RsbImm, RsbRm, RsbRmShftImm, RsbRmShftRs, RsbRmRrx]),
        (0b0100, [AddImm, AddRm, AddRmShftImm, AddRmShftRs, AddRmRrx]),
        (0b0101, [AdcImm, AdcRm, AdcRmShftImm, AdcRmShftRs, AdcRmRrx]),
        (0b0110, [SbcImm, SbcRm, SbcRmShftImm, SbcRmShftRs, SbcRmRrx]),
        (0b0111, [RscImm, RscRm, RscRmShftImm, RscRmShftRs, RscRmRrx]),
        (0b1000, [TstImm, TstRm, TstRmShftImm, TstRmShftRs, TstRmRrx]),
        (0b1001, [TeqImm, TeqRm, TeqRmShftImm, TeqRmShftRs, TeqRmRrx]),
        (0b1010, [CmpImm, CmpRm, CmpRmShftImm, CmpRmShftRs, CmpRmRrx]),
        (0b1011, [CmnImm, CmnRm, CmnRmShftImm, CmnRmShftRs, CmnRmRrx]),
        (0b1100, [OrrImm, OrrRm, OrrRmShftImm, OrrRmShftRs, OrrRmRrx]),
        (0b1101, [MovImm, MovRm, MovRmShftImm, MovRmShftRs, MovRmRrx]),
        (0b1110, [BicImm, BicRm, BicRmShftImm, BicRmShftRs, BicRmRrx]),
        (0b1111, [MvnImm, MvnRm, MvnRmShftImm, MvnRmShftRs, MvnRmRrx]),
    ];

    let forms = [
        "....  001. .... .... .... .... .... ....",
        "....  000. .... .... .... 0000 0000 ....",
        "....  000. .... .... .... .... ...0 ....",
        "....  000. .... .... .... .... 0..1 ....",
        "....  000. .... .... .... 0000 0110 ....",
    ];

    for (op, types) in ops {
        // TST, TEQ, CMP and CMN without S are the miscellaneous space.
        let compare = op & 0b1100 == 0b1000;
        for (form, ty) in forms.iter().zip(types) {
            let fields = if compare {
                vec![(21..=24, op), (20..=20, 1)]
            } else {
                vec![(21..=24, op)]
            };
            out.push(stamped(form, &fields, ty, COND));
        }
    }

    out.extend([
        entry("....  0011 0000 .... .... .... .... ....", MovW, COND),
        entry("....  0011 0100 .... .... .... .... ....", MovT, COND),
    ]);
}

fn miscellaneous(out: &mut Entries) {
    use ArmType::*;

    out.extend([
        entry("....  0001 0000 1111 .... 0000 0000 0000", Mrs, COND),
        entry("....  0001 0100 1111 .... 0000 0000 0000", MrsSpsr, COND),
        entry("....  0001 0010 .... 1111 0000 0000 ....", MsrReg, COND),
        entry("....  0001 0110 .... 1111 0000 0000 ....", MsrRegSpsr, COND),
        entry("....  0011 0010 .... 1111 .... .... ....", MsrImm, COND),
        entry("....  0011 0110 .... 1111 .... .... ....", MsrImmSpsr, COND),
        // Unallocated hints execute as NOP
        entry("....  0011 0010 0000 1111 0000 .... ....", Nop, COND),
        entry("....  0011 0010 0000 1111 0000 0000 0000", Nop, COND),
        entry("....  0011 0010 0000 1111 0000 0000 0001", Yield, COND),
        entry("....  0011 0010 0000 1111 0000 0000 0010", Wfe, COND),
        entry("....  0011 0010 0000 1111 0000 0000 0011", Wfi, COND),
        entry("....  0011 0010 0000 1111 0000 0000 0100", Sev, COND),
        entry("....  0011 0010 0000 1111 0000 1111 ....", Dbg, COND),
        entry("....  0001 0010 1111 1111 1111 0001 ....", Bx, COND),
        entry("....  0001 0010 1111 1111 1111 0010 ....", Bxj, COND),
        entry("....  0001 0010 1111 1111 1111 0011 ....", BlxReg, COND),
        entry("....  0001 0010 1111 1111 1111 0100 ....", Baa, COND),
        entry("....  0001 0110 1111 .... 1111 0001 ....", Clz, COND),
        entry("....  0001 0000 .... .... 0000 0101 ....", Qadd, COND),
        entry("....  0001 0010 .... .... 0000 0101 ....", Qsub, COND),
        entry("....  0001 0100 .... .... 0000 0101 ....", Qdadd, COND),
        entry("....  0001 0110 .... .... 0000 0101 ....", Qdsub, COND),
        entry("1110  0001 0010 .... .... .... 0111 ....", Bkpt, COND),
        entry("....  0001 0110 0000 0000 0000 0111 ....", Smc, COND),
        // Halfword multiplies, x in bit 5 and y in bit 6
        entry("....  0001 0000 .... .... .... 1000 ....", SmlaBb, COND),
        entry("....  0001 0000 .... .... .... 1100 ....", SmlaBt, COND),
        entry("....  0001 0000 .... .... .... 1010 ....", SmlaTb, COND),
        entry("....  0001 0000 .... .... .... 1110 ....", SmlaTt, COND),
        entry("....  0001 0010 .... .... .... 1000 ....", SmlawB, COND),
        entry("....  0001 0010 .... .... .... 1100 ....", SmlawT, COND),
        entry("....  0001 0010 .... 0000 .... 1010 ....", SmulwB, COND),
        entry("....  0001 0010 .... 0000 .... 1110 ....", SmulwT, COND),
        entry("....  0001 0100 .... .... .... 1000 ....", SmlalBb, COND),
        entry("....  0001 0100 .... .... .... 1100 ....", SmlalBt, COND),
        entry("....  0001 0100 .... .... .... 1010 ....", SmlalTb, COND),
        entry("....  0001 0100 .... .... .... 1110 ....", SmlalTt, COND),
        entry("....  0001 0110 .... 0000 .... 1000 ....", SmulBb, COND),
        entry("....  0001 0110 .... 0000 .... 1100 ....", SmulBt, COND),
        entry("....  0001 0110 .... 0000 .... 1010 ....", SmulTb, COND),
        entry("....  0001 0110 .... 0000 .... 1110 ....", SmulTt, COND),
    ]);
}

fn multiplies(out: &mut Entries) {
    use ArmType::*;

    out.extend([
        entry("....  0000 000. .... 0000 .... 1001 ....", Mul, COND),
        entry("....  0000 001. .... .... .... 1001 ....", Mla, COND),
        entry("....  0000 0100 .... .... .... 1001 ....", Umaal, COND),
        entry("....  0000 0110 .... .... .... 1001 ....", Mls, COND),
        entry("....  0000 100. .... .... .... 1001 ....", Umull, COND),
        entry("....  0000 101. .... .... .... 1001 ....", Umlal, COND),
        entry("....  0000 110. .... .... .... 1001 ....", Smull, COND),
        entry("....  0000 111. .... .... .... 1001 ....", Smlal, COND),
        entry("....  0001 0000 .... .... 0000 1001 ....", Swp, COND),
        entry("....  0001 0100 .... .... 0000 1001 ....", Swpb, COND),
        entry("....  0001 1000 .... .... 1111 1001 ....", Strex, COND),
        entry("....  0001 1001 .... .... 1111 1001 1111", Ldrex, COND),
        entry("....  0001 1010 .... .... 1111 1001 ....", Strexd, COND),
        entry("....  0001 1011 .... .... 1111 1001 1111", Ldrexd, COND),
        entry("....  0001 1100 .... .... 1111 1001 ....", Strexb, COND),
        entry("....  0001 1101 .... .... 1111 1001 1111", Ldrexb, COND),
        entry("....  0001 1110 .... .... 1111 1001 ....", Strexh, COND),
        entry("....  0001 1111 .... .... 1111 1001 1111", Ldrexh, COND),
    ]);
}

fn load_store(out: &mut Entries) {
    use ArmType::*;

    // Extra loads and stores: bit 22 picks immediate, the T forms have
    // P = 0 and W = 1.
    out.extend([
        entry("....  000. .1.0 .... .... .... 1011 ....", StrhImm, COND),
        entry("....  000. .0.0 .... .... 0000 1011 ....", StrhReg, COND),
        entry("....  0000 .110 .... .... .... 1011 ....", StrhtImm, COND),
        entry("....  0000 .010 .... .... 0000 1011 ....", StrhtReg, COND),
        entry("....  000. .1.1 .... .... .... 1011 ....", LdrhImm, COND),
        entry("....  000. .0.1 .... .... 0000 1011 ....", LdrhReg, COND),
        entry("....  0000 .111 .... .... .... 1011 ....", LdrhtImm, COND),
        entry("....  0000 .011 .... .... 0000 1011 ....", LdrhtReg, COND),
        entry("....  000. .1.0 .... .... .... 1101 ....", LdrdImm, COND),
        entry("....  000. .0.0 .... .... 0000 1101 ....", LdrdReg, COND),
        entry("....  000. .1.0 .... .... .... 1111 ....", StrdImm, COND),
        entry("....  000. .0.0 .... .... 0000 1111 ....", StrdReg, COND),
        entry("....  000. .1.1 .... .... .... 1101 ....", LdrsbImm, COND),
        entry("....  000. .0.1 .... .... 0000 1101 ....", LdrsbReg, COND),
        entry("....  0000 .111 .... .... .... 1101 ....", LdrsbtImm, COND),
        entry("....  0000 .011 .... .... 0000 1101 ....", LdrsbtReg, COND),
        entry("....  000. .1.1 .... .... .... 1111 ....", LdrshImm, COND),
        entry("....  000. .0.1 .... .... 0000 1111 ....", LdrshReg, COND),
        entry("....  0000 .111 .... .... .... 1111 ....", LdrshtImm, COND),
        entry("....  0000 .011 .... .... 0000 1111 ....", LdrshtReg, COND),
    ]);

    // Word and unsigned byte: B in bit 22, L in bit 20. Register offsets
    // keep bit 4 clear, bit 4 set is the media space.
    out.extend([
        entry("....  010. .0.0 .... .... .... .... ....", StrImm, COND),
        entry("....  010. .0.1 .... .... .... .... ....", LdrImm, COND),
        entry("....  010. .1.0 .... .... .... .... ....", StrbImm, COND),
        entry("....  010. .1.1 .... .... .... .... ....", LdrbImm, COND),
        entry("....  0100 .010 .... .... .... .... ....", StrtImm, COND),
        entry("....  0100 .011 .... .... .... .... ....", LdrtImm, COND),
        entry("....  0100 .110 .... .... .... .... ....", StrbtImm, COND),
        entry("....  0100 .111 .... .... .... .... ....", LdrbtImm, COND),
        entry("....  0101 .001 1111 .... .... .... ....", LdrLit, COND),
        entry("....  0101 .101 1111 .... .... .... ....", LdrbLit, COND),
        entry("....  011. .0.0 .... .... .... ...0 ....", StrReg, COND),
        entry("....  011. .0.1 .... .... .... ...0 ....", LdrReg, COND),
        entry("....  011. .1.0 .... .... .... ...0 ....", StrbReg, COND),
        entry("....  011. .1.1 .... .... .... ...0 ....", LdrbReg, COND),
        entry("....  0110 .010 .... .... .... ...0 ....", StrtReg, COND),
        entry("....  0110 .011 .... .... .... ...0 ....", LdrtReg, COND),
        entry("....  0110 .110 .... .... .... ...0 ....", StrbtReg, COND),
        entry("....  0110 .111 .... .... .... ...0 ....", LdrbtReg, COND),
    ]);
}

fn media(out: &mut Entries) {
    use ArmType::*;

    // Parallel add and subtract, prefix in bits 22..20, operation in 7..5.
    #[rustfmt::skip]
    let parallel: [(u32, [ArmType; 6]); 6] = [
        (0b001, [Sadd16, Sasx, Ssax, Ssub16, Sadd8, Ssub8]),
        (0b010, [Qadd16, Qasx, Qsax, Qsub16, Qadd8, Qsub8]),
        (0b011, [Shadd16, Shasx, Shsax, Shsub16, Shadd8, Shsub8]),
        (0b101, [Uadd16, Uasx, Usax, Usub16, Uadd8, Usub8]),
        (0b110, [Uqadd16, Uqasx, Uqsax, Uqsub16, Uqadd8, Uqsub8]),
        (0b111, [Uhadd16, Uhasx, Uhsax, Uhsub16, Uhadd8, Uhsub8]),
    ];
    let operations = [0b000, 0b001, 0b010, 0b011, 0b100, 0b111];
    for (prefix, types) in parallel {
        for (op, ty) in operations.into_iter().zip(types) {
            out.push(stamped(
                "....  0110 0... .... .... 1111 ...1 ....",
                &[(20..=22, prefix), (5..=7, op)],
                ty,
                COND,
            ));
        }
    }

    out.extend([
        entry("....  0110 1000 .... .... .... .001 ....", PkhBt, COND),
        entry("....  0110 1000 .... .... .... .101 ....", PkhTb, COND),
        entry("....  0110 101. .... .... .... ..01 ....", Ssat, COND),
        entry("....  0110 111. .... .... .... ..01 ....", Usat, COND),
        entry("....  0110 1010 .... .... 1111 0011 ....", Ssat16, COND),
        entry("....  0110 1110 .... .... 1111 0011 ....", Usat16, COND),
        entry("....  0110 1000 .... .... 1111 1011 ....", Sel, COND),
        entry("....  0110 1011 1111 .... 1111 0011 ....", Rev, COND),
        entry("....  0110 1011 1111 .... 1111 1011 ....", Rev16, COND),
        entry("....  0110 1111 1111 .... 1111 1011 ....", Revsh, COND),
        entry("....  0110 1111 1111 .... 1111 0011 ....", Rbit, COND),
        entry("....  0110 1000 .... .... ..00 0111 ....", Sxtab16, COND),
        entry("....  0110 1000 1111 .... ..00 0111 ....", Sxtb16, COND),
        entry("....  0110 1010 .... .... ..00 0111 ....", Sxtab, COND),
        entry("....  0110 1010 1111 .... ..00 0111 ....", Sxtb, COND),
        entry("....  0110 1011 .... .... ..00 0111 ....", Sxtah, COND),
        entry("....  0110 1011 1111 .... ..00 0111 ....", Sxth, COND),
        entry("....  0110 1100 .... .... ..00 0111 ....", Uxtab16, COND),
        entry("....  0110 1100 1111 .... ..00 0111 ....", Uxtb16, COND),
        entry("....  0110 1110 .... .... ..00 0111 ....", Uxtab, COND),
        entry("....  0110 1110 1111 .... ..00 0111 ....", Uxtb, COND),
        entry("....  0110 1111 .... .... ..00 0111 ....", Uxtah, COND),
        entry("....  0110 1111 1111 .... ..00 0111 ....", Uxth, COND),
        // Signed multiplies, Ra == 1111 selects the non accumulating form
        entry("....  0111 0000 .... .... .... 0001 ....", Smlad, COND),
        entry("....  0111 0000 .... .... .... 0011 ....", Smladx, COND),
        entry("....  0111 0000 .... 1111 .... 0001 ....", Smuad, COND),
        entry("....  0111 0000 .... 1111 .... 0011 ....", Smuadx, COND),
        entry("....  0111 0000 .... .... .... 0101 ....", Smlsd, COND),
        entry("....  0111 0000 .... .... .... 0111 ....", Smlsdx, COND),
        entry("....  0111 0000 .... 1111 .... 0101 ....", Smusd, COND),
        entry("....  0111 0000 .... 1111 .... 0111 ....", Smusdx, COND),
        entry("....  0111 0001 .... 1111 .... 0001 ....", Sdiv, COND),
        entry("....  0111 0011 .... 1111 .... 0001 ....", Udiv, COND),
        entry("....  0111 0100 .... .... .... 0001 ....", Smlald, COND),
        entry("....  0111 0100 .... .... .... 0011 ....", Smlaldx, COND),
        entry("....  0111 0100 .... .... .... 0101 ....", Smlsld, COND),
        entry("....  0111 0100 .... .... .... 0111 ....", Smlsldx, COND),
        entry("....  0111 0101 .... .... .... 0001 ....", Smmla, COND),
        entry("....  0111 0101 .... .... .... 0011 ....", Smmlar, COND),
        entry("....  0111 0101 .... 1111 .... 0001 ....", Smmul, COND),
        entry("....  0111 0101 .... 1111 .... 0011 ....", Smmulr, COND),
        entry("....  0111 0101 .... .... .... 1101 ....", Smmls, COND),
        entry("....  0111 0101 .... .... .... 1111 ....", Smmlsr, COND),
        entry("....  0111 1000 .... .... .... 0001 ....", Usada8, COND),
        entry("....  0111 1000 .... 1111 .... 0001 ....", Usad8, COND),
        entry("....  0111 101. .... .... .... .101 ....", Sbfx, COND),
        entry("....  0111 111. .... .... .... .101 ....", Ubfx, COND),
        entry("....  0111 110. .... .... .... .001 ....", Bfi, COND),
        entry("....  0111 110. .... .... .... .001 1111", Bfc, COND),
    ]);
}

fn block_branch(out: &mut Entries) {
    use ArmType::*;

    out.extend([
        entry("....  100. .0.0 .... .... .... .... ....", Stm, COND),
        entry("....  100. .0.1 .... .... .... .... ....", Ldm, COND),
        entry("....  1001 0010 1101 .... .... .... ....", Push, COND),
        entry("....  1000 1011 1101 .... .... .... ....", Pop, COND),
        entry("....  100. .100 .... .... .... .... ....", StmUser, COND),
        entry("....  100. .101 .... 0... .... .... ....", LdmUser, COND),
        entry("....  100. .1.1 .... 1... .... .... ....", LdmExceptionReturn, COND),
        entry("....  1010 .... .... .... .... .... ....", B, COND),
        entry("....  1011 .... .... .... .... .... ....", Bl, COND),
        entry("....  1111 .... .... .... .... .... ....", Svc, COND),
    ]);
}

fn unconditional(out: &mut Entries) {
    use ArmType::*;

    out.extend([
        entry("1111  .... .... .... .... .... .... ....", Undefined, UNCOND_SPACE),
        entry("1111  0001 0000 0010 0000 0000 000. ....", Cps, UNCOND),
        entry("1111  0001 0000 10.. 0000 000. ..0. ....", CpsIe, UNCOND),
        entry("1111  0001 0000 11.. 0000 000. ..0. ....", CpsId, UNCOND),
        entry("1111  0001 0000 0001 0000 0000 0000 0000", SetendLe, UNCOND),
        entry("1111  0001 0000 0001 0000 0010 0000 0000", SetendBe, UNCOND),
        entry("1111  0100 .101 .... 1111 .... .... ....", PliImm, UNCOND),
        entry("1111  0101 .101 .... 1111 .... .... ....", PldImm, UNCOND),
        entry("1111  0101 .001 .... 1111 .... .... ....", PldwImm, UNCOND),
        entry("1111  0101 .101 1111 1111 .... .... ....", PldLit, UNCOND),
        entry("1111  0110 .101 .... 1111 .... ...0 ....", PliReg, UNCOND),
        entry("1111  0111 .101 .... 1111 .... ...0 ....", PldReg, UNCOND),
        entry("1111  0111 .001 .... 1111 .... ...0 ....", PldwReg, UNCOND),
        entry("1111  0101 0111 1111 1111 0000 0001 1111", Clrex, UNCOND),
        entry("1111  0101 0111 1111 1111 0000 0100 ....", Dsb, UNCOND),
        entry("1111  0101 0111 1111 1111 0000 0101 ....", Dmb, UNCOND),
        entry("1111  0101 0111 1111 1111 0000 0110 ....", Isb, UNCOND),
        entry("1111  100. .1.0 1101 0000 0101 000. ....", Srs, UNCOND),
        entry("1111  100. .0.1 .... 0000 1010 0000 0000", Rfe, UNCOND),
        entry("1111  101. .... .... .... .... .... ....", BlxImm, UNCOND),
    ]);
}

/// Generic coprocessor instructions, both the conditional forms and the
/// `cond == 1111` "2" forms.
pub(crate) fn coprocessor() -> Entries {
    use ArmType::*;

    vec![
        entry("....  1100 000. .... .... .... .... ....", Undefined, COND),
        entry("....  110. ...0 .... .... .... .... ....", Stc, COND),
        entry("....  110. ...1 .... .... .... .... ....", Ldc, COND),
        entry("....  1100 0100 .... .... .... .... ....", Mcrr, COND),
        entry("....  1100 0101 .... .... .... .... ....", Mrrc, COND),
        entry("....  1110 .... .... .... .... ...0 ....", Cdp, COND),
        entry("....  1110 ...0 .... .... .... ...1 ....", Mcr, COND),
        entry("....  1110 ...1 .... .... .... ...1 ....", Mrc, COND),
        // cp10 and cp11 belong to VFP and Advanced SIMD
        entry("1111  110. .... .... .... 101. .... ....", Undefined, SIMD_CORNER),
        entry("1111  1110 .... .... .... 101. .... ....", Undefined, SIMD_CORNER),
        entry("1111  1100 000. .... .... .... .... ....", Undefined, UNCOND),
        entry("1111  110. ...0 .... .... .... .... ....", Stc2, UNCOND),
        entry("1111  110. ...1 .... .... .... .... ....", Ldc2, UNCOND),
        entry("1111  1100 0100 .... .... .... .... ....", Mcrr2, UNCOND),
        entry("1111  1100 0101 .... .... .... .... ....", Mrrc2, UNCOND),
        entry("1111  1110 .... .... .... .... ...0 ....", Cdp2, UNCOND),
        entry("1111  1110 ...0 .... .... .... ...1 ....", Mcr2, UNCOND),
        entry("1111  1110 ...1 .... .... .... ...1 ....", Mrc2, UNCOND),
    ]
}

/// VFP data processing, transfers and extension register loads/stores.
pub(crate) fn vfp() -> Entries {
    use ArmType::*;

    let mut out = vec![
        // Whatever VFP does not claim in cp10 and cp11 is undefined
        entry("....  110. .... .... .... 101. .... ....", Undefined, COND),
        entry("....  1110 .... .... .... 101. .... ....", Undefined, COND),
    ];

    // Data processing, sz in bit 8
    #[rustfmt::skip]
    let data: [(&str, ArmType, ArmType); 26] = [
        ("....  1110 0.00 .... .... 101. .0.0 ....", VmlaF32, VmlaF64),
        ("....  1110 0.00 .... .... 101. .1.0 ....", VmlsF32, VmlsF64),
        ("....  1110 0.01 .... .... 101. .0.0 ....", VnmlsF32, VnmlsF64),
        ("....  1110 0.01 .... .... 101. .1.0 ....", VnmlaF32, VnmlaF64),
        ("....  1110 0.10 .... .... 101. .0.0 ....", VmulF32, VmulF64),
        ("....  1110 0.10 .... .... 101. .1.0 ....", VnmulF32, VnmulF64),
        ("....  1110 0.11 .... .... 101. .0.0 ....", VaddF32, VaddF64),
        ("....  1110 0.11 .... .... 101. .1.0 ....", VsubF32, VsubF64),
        ("....  1110 1.00 .... .... 101. .0.0 ....", VdivF32, VdivF64),
        ("....  1110 1.11 .... .... 101. 0000 ....", VmovImmF32, VmovImmF64),
        ("....  1110 1.11 0000 .... 101. 01.0 ....", VmovF32, VmovF64),
        ("....  1110 1.11 0000 .... 101. 11.0 ....", VabsF32, VabsF64),
        ("....  1110 1.11 0001 .... 101. 01.0 ....", VnegF32, VnegF64),
        ("....  1110 1.11 0001 .... 101. 11.0 ....", VsqrtF32, VsqrtF64),
        ("....  1110 1.11 0100 .... 101. 01.0 ....", VcmpF32, VcmpF64),
        ("....  1110 1.11 0100 .... 101. 11.0 ....", VcmpeF32, VcmpeF64),
        ("....  1110 1.11 0101 .... 101. 01.0 0000", VcmpZeroF32, VcmpZeroF64),
        ("....  1110 1.11 0101 .... 101. 11.0 0000", VcmpeZeroF32, VcmpeZeroF64),
        ("....  1110 1.11 0111 .... 101. 11.0 ....", VcvtF64F32, VcvtF32F64),
        ("....  1110 1.11 1000 .... 101. .1.0 ....", VcvtF32Int, VcvtF64Int),
        ("....  1110 1.11 110. .... 101. 11.0 ....", VcvtIntF32, VcvtIntF64),
        ("....  1110 1.11 110. .... 101. 01.0 ....", VcvtrIntF32, VcvtrIntF64),
        ("....  1110 1.11 101. .... 101. .1.0 ....", VcvtF32Fixed, VcvtF64Fixed),
        ("....  1110 1.11 111. .... 101. .1.0 ....", VcvtFixedF32, VcvtFixedF64),
        ("....  1101 ..01 .... .... 101. .... ....", VldrS, VldrD),
        ("....  1101 ..00 .... .... 101. .... ....", VstrS, VstrD),
    ];
    for (pattern, single, double) in data {
        out.push(stamped(pattern, &[(8..=8, 0)], single, COND));
        out.push(stamped(pattern, &[(8..=8, 1)], double, COND));
    }

    #[rustfmt::skip]
    let multiple: [(&str, ArmType, ArmType); 6] = [
        ("....  1100 1..1 .... .... 101. .... ....", VldmS, VldmD),
        ("....  1101 0.11 .... .... 101. .... ....", VldmS, VldmD),
        ("....  1100 1..0 .... .... 101. .... ....", VstmS, VstmD),
        ("....  1101 0.10 .... .... 101. .... ....", VstmS, VstmD),
        ("....  1101 0.10 1101 .... 101. .... ....", VpushS, VpushD),
        ("....  1100 1.11 1101 .... 101. .... ....", VpopS, VpopD),
    ];
    for (pattern, single, double) in multiple {
        out.push(stamped(pattern, &[(8..=8, 0)], single, COND));
        out.push(stamped(pattern, &[(8..=8, 1)], double, COND));
    }

    out.extend([
        entry("....  1110 1.11 0010 .... 1010 01.0 ....", VcvtbF32F16, COND),
        entry("....  1110 1.11 0010 .... 1010 11.0 ....", VcvttF32F16, COND),
        entry("....  1110 1.11 0011 .... 1010 01.0 ....", VcvtbF16F32, COND),
        entry("....  1110 1.11 0011 .... 1010 11.0 ....", VcvttF16F32, COND),
        entry("....  1110 0000 .... .... 1010 .001 0000", VmovCoreToS, COND),
        entry("....  1110 0001 .... .... 1010 .001 0000", VmovSToCore, COND),
        entry("....  1110 1110 0001 .... 1010 0001 0000", Vmsr, COND),
        entry("....  1110 1111 0001 .... 1010 0001 0000", Vmrs, COND),
        entry("....  1110 0..0 .... .... 1011 ..01 0000", VmovCoreToScalar, COND),
        entry("....  1110 ...1 .... .... 1011 ..01 0000", VmovScalarToCore, COND),
        entry("....  1110 1.00 .... .... 1011 .0.1 0000", VdupCoreD, COND),
        entry("....  1110 1.10 .... .... 1011 .0.1 0000", VdupCoreQ, COND),
        entry("....  1100 0100 .... .... 1010 00.1 ....", VmovCoreToSS, COND),
        entry("....  1100 0101 .... .... 1010 00.1 ....", VmovSSToCore, COND),
        entry("....  1100 0100 .... .... 1011 00.1 ....", VmovCoreToD, COND),
        entry("....  1100 0101 .... .... 1011 00.1 ....", VmovDToCore, COND),
    ]);

    out
}

/// Advanced SIMD data processing, `1111 001U`.
pub(crate) fn simd_data() -> Entries {
    let mut out = Vec::new();
    simd_three_same(&mut out);
    simd_one_register(&mut out);
    simd_shifts(&mut out);
    simd_different_lengths(&mut out);
    simd_scalar(&mut out);
    simd_two_register(&mut out);
    out
}

fn simd_three_same(out: &mut Entries) {
    use ArmType::*;

    // U, A (bits 11..8), B (bit 4), and for the size dependent groups the
    // fixed size bits 21..20.
    let same = |u: u32, a: u32, b: u32| format!("1111 001{u} 0... .... .... {a:04b} ...{b} ....");

    #[rustfmt::skip]
    let integer: [(u32, u32, u32, ArmType, ArmType); 29] = [
        (0, 0b0000, 0, VhaddD, VhaddQ), (1, 0b0000, 0, VhaddD, VhaddQ),
        (0, 0b0000, 1, VqaddD, VqaddQ), (1, 0b0000, 1, VqaddD, VqaddQ),
        (0, 0b0001, 0, VrhaddD, VrhaddQ), (1, 0b0001, 0, VrhaddD, VrhaddQ),
        (0, 0b0010, 0, VhsubD, VhsubQ), (1, 0b0010, 0, VhsubD, VhsubQ),
        (0, 0b0010, 1, VqsubD, VqsubQ), (1, 0b0010, 1, VqsubD, VqsubQ),
        (0, 0b0011, 0, VcgtD, VcgtQ), (1, 0b0011, 0, VcgtD, VcgtQ),
        (0, 0b0011, 1, VcgeD, VcgeQ), (1, 0b0011, 1, VcgeD, VcgeQ),
        (0, 0b0100, 0, VshlRegD, VshlRegQ), (1, 0b0100, 0, VshlRegD, VshlRegQ),
        (0, 0b0100, 1, VqshlRegD, VqshlRegQ), (1, 0b0100, 1, VqshlRegD, VqshlRegQ),
        (0, 0b0101, 0, VrshlRegD, VrshlRegQ), (1, 0b0101, 0, VrshlRegD, VrshlRegQ),
        (0, 0b0101, 1, VqrshlRegD, VqrshlRegQ), (1, 0b0101, 1, VqrshlRegD, VqrshlRegQ),
        (0, 0b0110, 0, VmaxD, VmaxQ), (1, 0b0110, 0, VmaxD, VmaxQ),
        (0, 0b0110, 1, VminD, VminQ), (1, 0b0110, 1, VminD, VminQ),
        (0, 0b0111, 0, VabdD, VabdQ), (1, 0b0111, 0, VabdD, VabdQ),
        (0, 0b0111, 1, VabaD, VabaQ),
    ];
    #[rustfmt::skip]
    let integer_more: [(u32, u32, u32, ArmType, ArmType); 12] = [
        (1, 0b0111, 1, VabaD, VabaQ),
        (0, 0b1000, 0, VaddD, VaddQ), (1, 0b1000, 0, VsubD, VsubQ),
        (0, 0b1000, 1, VtstD, VtstQ), (1, 0b1000, 1, VceqD, VceqQ),
        (0, 0b1001, 0, VmlaD, VmlaQ), (1, 0b1001, 0, VmlsD, VmlsQ),
        (0, 0b1001, 1, VmulD, VmulQ), (1, 0b1001, 1, VmulPD, VmulPQ),
        (0, 0b1011, 0, VqdmulhD, VqdmulhQ), (1, 0b1011, 0, VqrdmulhD, VqrdmulhQ),
        (0, 0b1011, 1, VpaddD, VpaddD),
    ];
    for (u, a, b, d, q) in integer.into_iter().chain(integer_more) {
        if d == q {
            // Pairwise operations only exist on doublewords
            out.push(stamped(&same(u, a, b), &[(6..=6, 0)], d, UNCOND));
        } else {
            d_q(out, &same(u, a, b), 6, &DNM, d, q, UNCOND);
        }
    }
    for (u, b, ty) in [(0, 0, VpmaxD), (1, 0, VpmaxD), (0, 1, VpminD), (1, 1, VpminD)] {
        out.push(stamped(&same(u, 0b1010, b), &[(6..=6, 0)], ty, UNCOND));
    }

    // Bitwise, the size field picks the operation
    #[rustfmt::skip]
    let logic: [(u32, u32, ArmType, ArmType); 8] = [
        (0, 0b00, VandD, VandQ), (0, 0b01, VbicD, VbicQ),
        (0, 0b10, VorrD, VorrQ), (0, 0b11, VornD, VornQ),
        (1, 0b00, VeorD, VeorQ), (1, 0b01, VbslD, VbslQ),
        (1, 0b10, VbitD, VbitQ), (1, 0b11, VbifD, VbifQ),
    ];
    for (u, size, d, q) in logic {
        let pattern = Pattern::parse(&same(u, 0b0001, 1)).with_field(20..=21, size).to_string();
        d_q(out, &pattern, 6, &DNM, d, q, UNCOND);
    }

    // Floating point, sz (bit 20) must be zero and bit 21 splits pairs
    #[rustfmt::skip]
    let float: [(u32, u32, u32, u32, ArmType, ArmType); 18] = [
        (0, 0b1101, 0, 0, VaddFD, VaddFQ), (0, 0b1101, 0, 1, VsubFD, VsubFQ),
        (1, 0b1101, 0, 0, VpaddFD, VpaddFD), (1, 0b1101, 0, 1, VabdFD, VabdFQ),
        (0, 0b1101, 1, 0, VmlaFD, VmlaFQ), (0, 0b1101, 1, 1, VmlsFD, VmlsFQ),
        (1, 0b1101, 1, 0, VmulFD, VmulFQ),
        (0, 0b1110, 0, 0, VceqFD, VceqFQ),
        (1, 0b1110, 0, 0, VcgeFD, VcgeFQ), (1, 0b1110, 0, 1, VcgtFD, VcgtFQ),
        (1, 0b1110, 1, 0, VacgeFD, VacgeFQ), (1, 0b1110, 1, 1, VacgtFD, VacgtFQ),
        (0, 0b1111, 0, 0, VmaxFD, VmaxFQ), (0, 0b1111, 0, 1, VminFD, VminFQ),
        (1, 0b1111, 0, 0, VpmaxFD, VpmaxFD), (1, 0b1111, 0, 1, VpminFD, VpminFD),
        (0, 0b1111, 1, 0, VrecpsD, VrecpsQ), (0, 0b1111, 1, 1, VrsqrtsD, VrsqrtsQ),
    ];
    for (u, a, b, op, d, q) in float {
        let pattern = Pattern::parse(&same(u, a, b)).with_field(20..=21, op << 1).to_string();
        if d == q {
            out.push(stamped(&pattern, &[(6..=6, 0)], d, UNCOND));
        } else {
            d_q(out, &pattern, 6, &DNM, d, q, UNCOND);
        }
    }
}

fn simd_one_register(out: &mut Entries) {
    use ArmType::*;

    // cmode in bits 11..8, op in bit 5. These sit inside the shift by
    // immediate space (imm6<5:3> == 000) and take precedence over it.
    #[rustfmt::skip]
    let modimm: [(&str, u32, ArmType, ArmType); 13] = [
        ("0..0", 0, VmovImmI32D, VmovImmI32Q),
        ("0..1", 0, VorrImmI32D, VorrImmI32Q),
        ("0..0", 1, VmvnImmI32D, VmvnImmI32Q),
        ("0..1", 1, VbicImmI32D, VbicImmI32Q),
        ("10.0", 0, VmovImmI16D, VmovImmI16Q),
        ("10.1", 0, VorrImmI16D, VorrImmI16Q),
        ("10.0", 1, VmvnImmI16D, VmvnImmI16Q),
        ("10.1", 1, VbicImmI16D, VbicImmI16Q),
        ("110.", 0, VmovImmOnesD, VmovImmOnesQ),
        ("110.", 1, VmvnImmOnesD, VmvnImmOnesQ),
        ("1110", 0, VmovImmI8D, VmovImmI8Q),
        ("1110", 1, VmovImmI64D, VmovImmI64Q),
        ("1111", 0, VmovImmF32D, VmovImmF32Q),
    ];
    for (cmode, op, d, q) in modimm {
        let pattern = format!("1111 001. 1.00 0... .... {cmode} 0.{op}1 ....");
        d_q(out, &pattern, 6, &[12], d, q, SIMD_CORNER);
    }
    out.push(entry("1111 001. 1.00 0... .... 1111 0.11 ....", Undefined, SIMD_CORNER));
}

fn simd_shifts(out: &mut Entries) {
    use ArmType::*;

    let shift = |u: u32, a: u32| format!("1111 001{u} 1... .... .... {a:04b} ...1 ....");

    #[rustfmt::skip]
    let regular: [(u32, u32, ArmType, ArmType); 14] = [
        (0, 0b0000, VshrD, VshrQ), (1, 0b0000, VshrD, VshrQ),
        (0, 0b0001, VsraD, VsraQ), (1, 0b0001, VsraD, VsraQ),
        (0, 0b0010, VrshrD, VrshrQ), (1, 0b0010, VrshrD, VrshrQ),
        (0, 0b0011, VrsraD, VrsraQ), (1, 0b0011, VrsraD, VrsraQ),
        (1, 0b0100, VsriD, VsriQ),
        (0, 0b0101, VshlImmD, VshlImmQ), (1, 0b0101, VsliD, VsliQ),
        (1, 0b0110, VqshluD, VqshluQ),
        (0, 0b0111, VqshlImmD, VqshlImmQ), (1, 0b0111, VqshlImmD, VqshlImmQ),
    ];
    for (u, a, d, q) in regular {
        d_q(out, &shift(u, a), 6, &DM, d, q, UNCOND);
    }
    // op in bit 8: 0 converts to float, 1 to fixed point
    #[rustfmt::skip]
    let fixed: [(u32, ArmType, ArmType); 2] = [
        (0b1110, VcvtF32FixedD, VcvtF32FixedQ),
        (0b1111, VcvtFixedF32D, VcvtFixedF32Q),
    ];
    for (a, d, q) in fixed {
        for u in [0, 1] {
            let pattern = Pattern::parse(&shift(u, a)).with_field(7..=7, 0).to_string();
            d_q(out, &pattern, 6, &DM, d, q, UNCOND);
        }
    }
    // Fixed point conversions need L == 0
    out.push(entry("1111 001. 1... .... .... 111. 1..1 ....", Undefined, UNCOND));

    // Narrowing and lengthening, L == 0 and the Q bit picks the rounding form
    #[rustfmt::skip]
    let narrow: [(u32, &str, ArmType); 9] = [
        (0, "1000 00.1", Vshrn), (0, "1000 01.1", Vrshrn),
        (1, "1000 00.1", Vqshrun), (1, "1000 01.1", Vqrshrun),
        (0, "1001 00.1", Vqshrn), (1, "1001 00.1", Vqshrn),
        (0, "1001 01.1", Vqrshrn), (1, "1001 01.1", Vqrshrn),
        (0, "1010 00.1", Vshll),
    ];
    for (u, low, ty) in narrow {
        out.push(entry(&format!("1111 001{u} 1... .... .... {low} ...."), ty, UNCOND));
    }
    out.push(entry("1111 0011 1... .... ...0 1010 00.1 ....", Vshll, UNCOND));
}

fn simd_different_lengths(out: &mut Entries) {
    use ArmType::*;

    #[rustfmt::skip]
    let types: [(&str, u32, ArmType); 17] = [
        (".", 0b0000, Vaddl), (".", 0b0001, Vaddw),
        (".", 0b0010, Vsubl), (".", 0b0011, Vsubw),
        ("0", 0b0100, Vaddhn), ("1", 0b0100, Vraddhn),
        (".", 0b0101, Vabal),
        ("0", 0b0110, Vsubhn), ("1", 0b0110, Vrsubhn),
        (".", 0b0111, Vabdl),
        (".", 0b1000, Vmlal), (".", 0b1010, Vmlsl),
        ("0", 0b1001, Vqdmlal), ("0", 0b1011, Vqdmlsl),
        (".", 0b1100, Vmull), ("0", 0b1101, Vqdmull),
        ("0", 0b1110, VmullP),
    ];
    for (u, a, ty) in types {
        out.push(entry(&format!("1111 001{u} 1... .... .... {a:04b} .0.0 ...."), ty, UNCOND));
    }
}

fn simd_scalar(out: &mut Entries) {
    use ArmType::*;

    let scalar = |a: u32| format!("1111 001. 1... .... .... {a:04b} .1.0 ....");

    #[rustfmt::skip]
    let same: [(u32, ArmType, ArmType); 8] = [
        (0b0000, VmlaScalarD, VmlaScalarQ), (0b0001, VmlaScalarFD, VmlaScalarFQ),
        (0b0100, VmlsScalarD, VmlsScalarQ), (0b0101, VmlsScalarFD, VmlsScalarFQ),
        (0b1000, VmulScalarD, VmulScalarQ), (0b1001, VmulScalarFD, VmulScalarFQ),
        (0b1100, VqdmulhScalarD, VqdmulhScalarQ), (0b1101, VqrdmulhScalarD, VqrdmulhScalarQ),
    ];
    for (a, d, q) in same {
        d_q(out, &scalar(a), 24, &DN, d, q, UNCOND);
    }

    #[rustfmt::skip]
    let long: [(u32, ArmType); 6] = [
        (0b0010, VmlalScalar), (0b0110, VmlslScalar), (0b1010, VmullScalar),
        (0b0011, VqdmlalScalar), (0b0111, VqdmlslScalar), (0b1011, VqdmullScalar),
    ];
    for (a, ty) in long {
        out.push(entry(&scalar(a), ty, UNCOND));
    }
}

/// The `size == 11` corner of the three register space: VEXT, the two
/// register miscellaneous group, VTBL/VTBX and VDUP (scalar).
fn simd_two_register(out: &mut Entries) {
    use ArmType::*;

    out.push(entry("1111 001. 1.11 .... .... .... ...0 ....", Undefined, SIMD_CORNER));
    d_q(out, "1111 0010 1.11 .... .... .... ...0 ....", 6, &DNM, VextD, VextQ, SIMD_CORNER);
    out.extend([
        entry("1111 0011 1.11 .... .... 10.. .0.0 ....", Vtbl, SIMD_CORNER),
        entry("1111 0011 1.11 .... .... 10.. .1.0 ....", Vtbx, SIMD_CORNER),
    ]);
    d_q(out, "1111 0011 1.11 .... .... 1100 0..0 ....", 6, &[12], VdupScalarD, VdupScalarQ, SIMD_CORNER);

    // A in bits 17..16, B in bits 10..7, Q in bit 6
    let misc = |a: u32, b: &str| format!("1111 0011 1.11 ..{a:02b} .... 0{b} ..0 ....");

    #[rustfmt::skip]
    let both: [(u32, &str, ArmType, ArmType); 25] = [
        (0b00, "0000", Vrev64D, Vrev64Q),
        (0b00, "0001", Vrev32D, Vrev32Q),
        (0b00, "0010", Vrev16D, Vrev16Q),
        (0b00, "010.", VpaddlD, VpaddlQ),
        (0b00, "1000", VclsD, VclsQ),
        (0b00, "1001", VclzD, VclzQ),
        (0b00, "1010", VcntD, VcntQ),
        (0b00, "1011", VmvnRegD, VmvnRegQ),
        (0b00, "110.", VpadalD, VpadalQ),
        (0b00, "1110", VqabsD, VqabsQ),
        (0b00, "1111", VqnegD, VqnegQ),
        (0b01, ".000", VcgtZeroD, VcgtZeroQ),
        (0b01, ".001", VcgeZeroD, VcgeZeroQ),
        (0b01, ".010", VceqZeroD, VceqZeroQ),
        (0b01, ".011", VcleZeroD, VcleZeroQ),
        (0b01, ".100", VcltZeroD, VcltZeroQ),
        (0b01, ".110", VabsD, VabsQ),
        (0b01, ".111", VnegD, VnegQ),
        (0b10, "0000", VswpD, VswpQ),
        (0b10, "0001", VtrnD, VtrnQ),
        (0b10, "0010", VuzpD, VuzpQ),
        (0b10, "0011", VzipD, VzipQ),
        (0b11, "10.0", VrecpeD, VrecpeQ),
        (0b11, "10.1", VrsqrteD, VrsqrteQ),
        (0b11, "11..", VcvtSimdD, VcvtSimdQ),
    ];
    for (a, b, d, q) in both {
        d_q(out, &misc(a, b), 6, &DM, d, q, SIMD_CORNER);
    }

    // Doubleword only, bit 6 is part of the opcode
    #[rustfmt::skip]
    let narrow: [(&str, ArmType); 6] = [
        ("0100 0", Vmovn), ("0100 1", Vqmovun), ("0101 .", Vqmovn),
        ("0110 0", VshllMax), ("1100 0", VcvtF16F32), ("1110 0", VcvtF32F16),
    ];
    for (b, ty) in narrow {
        let b_high = &b[..4];
        let q = &b[5..];
        out.push(entry(&format!("1111 0011 1.11 ..10 .... 0{b_high} {q}.0 ...."), ty, SIMD_CORNER));
    }
}

/// Advanced SIMD element and structure loads and stores, `1111 0100`.
pub(crate) fn simd_load_store() -> Entries {
    use ArmType::*;

    let mut out = Vec::new();

    #[rustfmt::skip]
    let multiple: [(&[u32], ArmType, ArmType); 4] = [
        (&[0b0111, 0b1010, 0b0110, 0b0010], Vst1Multi, Vld1Multi),
        (&[0b1000, 0b1001, 0b0011], Vst2Multi, Vld2Multi),
        (&[0b0100, 0b0101], Vst3Multi, Vld3Multi),
        (&[0b0000, 0b0001], Vst4Multi, Vld4Multi),
    ];
    for (kinds, store, load) in multiple {
        for kind in kinds {
            out.push(stamped("1111 0100 0.00 .... .... .... .... ....", &[(8..=11, *kind)], store, UNCOND));
            out.push(stamped("1111 0100 0.10 .... .... .... .... ....", &[(8..=11, *kind)], load, UNCOND));
        }
    }

    #[rustfmt::skip]
    let lanes: [(u32, ArmType, ArmType, ArmType); 4] = [
        (0, Vst1Lane, Vld1Lane, Vld1All),
        (1, Vst2Lane, Vld2Lane, Vld2All),
        (2, Vst3Lane, Vld3Lane, Vld3All),
        (3, Vst4Lane, Vld4Lane, Vld4All),
    ];
    for (n, store, load, all) in lanes {
        out.push(stamped("1111 0100 1.00 .... .... .... .... ....", &[(8..=9, n)], store, UNCOND));
        out.push(stamped("1111 0100 1.10 .... .... .... .... ....", &[(8..=9, n)], load, UNCOND));
        out.push(stamped("1111 0100 1.10 .... .... 11.. .... ....", &[(8..=9, n)], all, UNCOND));
    }
    // There is no store to all lanes
    out.push(entry("1111 0100 1.00 .... .... 11.. .... ....", Undefined, SIMD_CORNER));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DecodeTable;
    use pretty_assertions::assert_eq;

    fn decode(word: u32) -> Option<ArmType> {
        DecodeTable::new("arm", 32, patterns()).lookup(word)
    }

    #[test]
    fn data_processing_forms() {
        let table = DecodeTable::new("arm", 32, patterns());
        assert_eq!(table.lookup(0xE280_0001), Some(ArmType::AddImm)); // ADD R0, R0, #1
        assert_eq!(table.lookup(0xE081_0002), Some(ArmType::AddRm)); // ADD R0, R1, R2
        assert_eq!(table.lookup(0xE081_0102), Some(ArmType::AddRmShftImm)); // ADD R0, R1, R2, LSL #2
        assert_eq!(table.lookup(0xE081_0312), Some(ArmType::AddRmShftRs)); // ADD R0, R1, R2, LSL R3
        assert_eq!(table.lookup(0xE1A0_0061), Some(ArmType::MovRmRrx)); // MOV R0, R1, RRX
        assert_eq!(table.lookup(0xE350_0000), Some(ArmType::CmpImm)); // CMP R0, #0
        assert_eq!(table.lookup(0xE3E0_0000), Some(ArmType::MvnImm)); // MVN R0, #0
    }

    #[test]
    fn compares_without_s_are_miscellaneous() {
        assert_eq!(decode(0xE12F_FF41), Some(ArmType::Baa));
        assert_eq!(decode(0xE12F_FF1E), Some(ArmType::Bx)); // BX LR
        assert_eq!(decode(0xE10F_0000), Some(ArmType::Mrs));
        assert_eq!(decode(0xE129_F000), Some(ArmType::MsrReg));
        assert_eq!(decode(0xE16F_0F11), Some(ArmType::Clz));
        assert_eq!(decode(0xE320_F000), Some(ArmType::Nop));
        assert_eq!(decode(0xE320_F003), Some(ArmType::Wfi));
    }

    #[test]
    fn multiplies_and_extra_loads() {
        assert_eq!(decode(0xE000_0291), Some(ArmType::Mul)); // MUL R0, R1, R2
        assert_eq!(decode(0xE082_3291), Some(ArmType::Umull));
        assert_eq!(decode(0xE1D1_00B2), Some(ArmType::LdrhImm)); // LDRH R0, [R1, #2]
        assert_eq!(decode(0xE191_00B2), Some(ArmType::LdrhReg)); // LDRH R0, [R1, R2]
        assert_eq!(decode(0xE0F1_00B2), Some(ArmType::LdrhtImm));
        assert_eq!(decode(0xE1C1_00D8), Some(ArmType::LdrdImm));
        assert_eq!(decode(0xE191_0F9F), Some(ArmType::Ldrex));
    }

    #[test]
    fn loads_stores_and_branches() {
        assert_eq!(decode(0xE591_0004), Some(ArmType::LdrImm)); // LDR R0, [R1, #4]
        assert_eq!(decode(0xE59F_0004), Some(ArmType::LdrLit)); // LDR R0, [PC, #4]
        assert_eq!(decode(0xE791_0002), Some(ArmType::LdrReg));
        assert_eq!(decode(0xE4B1_0004), Some(ArmType::LdrtImm));
        assert_eq!(decode(0xE92D_4010), Some(ArmType::Push)); // PUSH {R4, LR}
        assert_eq!(decode(0xE8BD_8010), Some(ArmType::Pop)); // POP {R4, PC}
        assert_eq!(decode(0xE890_000F), Some(ArmType::Ldm));
        assert_eq!(decode(0x0A00_007D), Some(ArmType::B)); // BEQ
        assert_eq!(decode(0xEB00_0000), Some(ArmType::Bl));
        assert_eq!(decode(0xEF00_0011), Some(ArmType::Svc));
    }

    #[test]
    fn media_instructions() {
        assert_eq!(decode(0xE611_0F12), Some(ArmType::Sadd16)); // SADD16 R0, R1, R2
        assert_eq!(decode(0xE671_0F92), Some(ArmType::Uhadd8)); // UHADD8 R0, R1, R2
        assert_eq!(decode(0xE6BF_0F31), Some(ArmType::Rev)); // REV R0, R1
        assert_eq!(decode(0xE6EF_0071), Some(ArmType::Uxtb)); // UXTB R0, R1
        assert_eq!(decode(0xE6E1_0072), Some(ArmType::Uxtab)); // UXTAB R0, R1, R2
        assert_eq!(decode(0xE6A7_0011), Some(ArmType::Ssat));
        assert_eq!(decode(0xE7C7_0011), Some(ArmType::Bfi));
        assert_eq!(decode(0xE7C7_001F), Some(ArmType::Bfc));
        assert_eq!(decode(0xE710_F211), Some(ArmType::Sdiv));
    }

    #[test]
    fn unconditional_space() {
        assert_eq!(decode(0xFA00_0000), Some(ArmType::BlxImm));
        assert_eq!(decode(0xF57F_F04F), Some(ArmType::Dsb)); // DSB SY
        assert_eq!(decode(0xF5D1_F000), Some(ArmType::PldImm));
        assert_eq!(decode(0xF101_0200), Some(ArmType::SetendBe));
        // Unallocated unconditional encodings are explicitly undefined
        assert_eq!(decode(0xF800_0000), Some(ArmType::Undefined));
        // Permanently undefined stays unmatched
        assert_eq!(decode(0xE7F0_00F0), None);
    }

    #[test]
    fn coprocessor_and_vfp() {
        assert_eq!(decode(0xEE10_0F10), Some(ArmType::Mrc)); // MRC p15, 0, R0, c0, c0, 0
        assert_eq!(decode(0xEE30_0A20), Some(ArmType::VaddF32)); // VADD.F32 S0, S0, S1
        assert_eq!(decode(0xEE30_0B01), Some(ArmType::VaddF64)); // VADD.F64 D0, D0, D1
        assert_eq!(decode(0xED90_0A01), Some(ArmType::VldrS)); // VLDR S0, [R0, #4]
        assert_eq!(decode(0xED2D_8B02), Some(ArmType::VpushD)); // VPUSH {D8}
        assert_eq!(decode(0xEEF1_0A10), Some(ArmType::Vmrs)); // VMRS R0, FPSCR
        assert_eq!(decode(0xEEB7_0A00), Some(ArmType::VmovImmF32)); // VMOV.F32 S0, #1.0
        assert_eq!(decode(0xEE00_0A40), Some(ArmType::VmlsF32));
        // cp10 encodings VFP does not define
        assert_eq!(decode(0xEE00_0A1F), Some(ArmType::Undefined));
    }

    #[test]
    fn simd_data_processing() {
        assert_eq!(decode(0xF202_0844), Some(ArmType::VaddQ)); // VADD.I8 Q0, Q1, Q2
        assert_eq!(decode(0xF212_0804), Some(ArmType::VaddD)); // VADD.I16 D0, D2, D4
        assert_eq!(decode(0xF202_0D04), Some(ArmType::VaddFD)); // VADD.F32 D0, D2, D4
        assert_eq!(decode(0xF202_0114), Some(ArmType::VandD)); // VAND D0, D2, D4
        assert_eq!(decode(0xF380_0050), Some(ArmType::VmovImmI32Q)); // VMOV.I32 Q0, #0x80
        assert_eq!(decode(0xF289_0010), Some(ArmType::VshrD)); // VSHR.S8 D0, D0, #7
        assert_eq!(decode(0xF3B0_0040), Some(ArmType::Vrev64Q)); // VREV64.8 Q0, Q0
        assert_eq!(decode(0xF3B2_0040), Some(ArmType::VswpQ)); // VSWP Q0, Q0
        assert_eq!(decode(0xF2B0_0100), Some(ArmType::VextD)); // VEXT.8 D0, D0, D0, #1
        // Quadword forms need even registers
        assert_eq!(decode(0xF202_1844), Some(ArmType::Undefined));
    }

    #[test]
    fn simd_load_store_groups() {
        assert_eq!(decode(0xF420_070F), Some(ArmType::Vld1Multi)); // VLD1.8 {D0}, [R0]
        assert_eq!(decode(0xF400_070F), Some(ArmType::Vst1Multi));
        assert_eq!(decode(0xF4A0_000F), Some(ArmType::Vld1Lane)); // VLD1.8 {D0[0]}, [R0]
        assert_eq!(decode(0xF4A0_0C0F), Some(ArmType::Vld1All)); // VLD1.8 {D0[]}, [R0]
        assert_eq!(decode(0xF480_0C0F), Some(ArmType::Undefined));
    }
}
