//! Thumb decode patterns.
//!
//! 32-bit patterns are written `hw1  hw2`, first halfword on the left.
//!
//! Priorities in the 32-bit table:
//!
//! | Priority | Entries                                                  |
//! |----------|----------------------------------------------------------|
//! | 0        | encoding groups, conditional branch                      |
//! | 1        | `Rn == PC` literal forms, `Rt == PC` preloads, `cond == 111x` |
//! | 2        | exact miscellaneous control, literal preloads            |
//!
//! The 16-bit tables only need specificity.

use super::types::ThumbType;
use crate::pattern::{entry, PatternEntry};

type Entries = Vec<PatternEntry<ThumbType>>;

const GROUP: u8 = 0;
const CARVED: u8 = 1;
const EXACT: u8 = 2;

/// 16-bit Thumb encodings.
#[must_use]
pub fn narrow() -> Entries {
    use ThumbType::*;

    let mut out = vec![
        entry("000 00 ..... ... ...", LslImm, GROUP),
        entry("000 01 ..... ... ...", LsrImm, GROUP),
        entry("000 10 ..... ... ...", AsrImm, GROUP),
        entry("0001 100 ... ... ...", AddReg, GROUP),
        entry("0001 101 ... ... ...", SubReg, GROUP),
        entry("0001 110 ... ... ...", AddImm3, GROUP),
        entry("0001 111 ... ... ...", SubImm3, GROUP),
        entry("001 00 ... ........", MovImm, GROUP),
        entry("001 01 ... ........", CmpImm, GROUP),
        entry("001 10 ... ........", AddImm8, GROUP),
        entry("001 11 ... ........", SubImm8, GROUP),
    ];

    #[rustfmt::skip]
    let alu = [
        And, Eor, LslReg, LsrReg, AsrReg, Adc, Sbc, RorReg,
        Tst, Rsb, Cmp, Cmn, Orr, Mul, Bic, Mvn,
    ];
    for (op, ty) in alu.into_iter().enumerate() {
        out.push(entry(&format!("010000 {op:04b} ... ..."), ty, GROUP));
    }

    out.extend([
        entry("010001 00 . .... ...", AddHi, GROUP),
        entry("010001 01 . .... ...", CmpHi, GROUP),
        entry("010001 10 . .... ...", MovHi, GROUP),
        entry("010001 11 0 .... 000", Bx, GROUP),
        entry("010001 11 1 .... 000", BlxReg, GROUP),
        entry("01001 ... ........", LdrLit, GROUP),
    ]);

    let register = [StrReg, StrhReg, StrbReg, LdrsbReg, LdrReg, LdrhReg, LdrbReg, LdrshReg];
    for (op, ty) in register.into_iter().enumerate() {
        out.push(entry(&format!("0101 {op:03b} ... ... ..."), ty, GROUP));
    }

    out.extend([
        entry("0110 0 ..... ... ...", StrImm, GROUP),
        entry("0110 1 ..... ... ...", LdrImm, GROUP),
        entry("0111 0 ..... ... ...", StrbImm, GROUP),
        entry("0111 1 ..... ... ...", LdrbImm, GROUP),
        entry("1000 0 ..... ... ...", StrhImm, GROUP),
        entry("1000 1 ..... ... ...", LdrhImm, GROUP),
        entry("1001 0 ... ........", StrSp, GROUP),
        entry("1001 1 ... ........", LdrSp, GROUP),
        entry("1010 0 ... ........", Adr, GROUP),
        entry("1010 1 ... ........", AddSpImm, GROUP),
    ]);
    miscellaneous(&mut out);
    out.extend([
        entry("1100 0 ... ........", Stm, GROUP),
        entry("1100 1 ... ........", Ldm, GROUP),
        entry("1101 .... ........", BCond, GROUP),
        // Condition AL is permanently undefined, NV is SVC
        entry("1101 1110 ........", Undefined, GROUP),
        entry("1101 1111 ........", Svc, GROUP),
        entry("11100 ...........", B, GROUP),
    ]);
    out
}

fn miscellaneous(out: &mut Entries) {
    use ThumbType::*;

    out.extend([
        entry("1011 0000 0 .......", AddSpSp, GROUP),
        entry("1011 0000 1 .......", SubSpSp, GROUP),
        entry("1011 00.1 ........", Cbz, GROUP),
        entry("1011 10.1 ........", Cbnz, GROUP),
        entry("1011 0010 00 ... ...", Sxth, GROUP),
        entry("1011 0010 01 ... ...", Sxtb, GROUP),
        entry("1011 0010 10 ... ...", Uxth, GROUP),
        entry("1011 0010 11 ... ...", Uxtb, GROUP),
        entry("1011 010. ........", Push, GROUP),
        entry("1011 110. ........", Pop, GROUP),
        entry("1011 0110 0101 0000", SetendLe, GROUP),
        entry("1011 0110 0101 1000", SetendBe, GROUP),
        entry("1011 0110 0110 0...", CpsIe, GROUP),
        entry("1011 0110 0111 0...", CpsId, GROUP),
        entry("1011 1010 00 ... ...", Rev, GROUP),
        entry("1011 1010 01 ... ...", Rev16, GROUP),
        entry("1011 1010 11 ... ...", Revsh, GROUP),
        entry("1011 1110 ........", Bkpt, GROUP),
        entry("1011 1111 ........", It, GROUP),
        // A zero mask makes it a hint, unallocated ones execute as NOP
        entry("1011 1111 .... 0000", Nop, GROUP),
        entry("1011 1111 0000 0000", Nop, GROUP),
        entry("1011 1111 0001 0000", Yield, GROUP),
        entry("1011 1111 0010 0000", Wfe, GROUP),
        entry("1011 1111 0011 0000", Wfi, GROUP),
        entry("1011 1111 0100 0000", Sev, GROUP),
    ]);
}

/// ThumbEE encodings, tried before [`narrow`] in ThumbEE state.
#[must_use]
pub fn thumbee() -> Entries {
    use ThumbType::*;

    vec![
        entry("1100 0000 ... .....", Hbp, GROUP),
        entry("1100 0010 ........", Hb, GROUP),
        entry("1100 0011 ........", Hbl, GROUP),
        entry("1100 01 ..... .....", Hblp, GROUP),
        entry("1100 100 ... ... ...", LdrNegEe, GROUP),
        entry("1100 1010 . .... ...", Chka, GROUP),
        entry("1100 1011 ..... ...", LdrR10, GROUP),
        entry("1100 110 ...... ...", LdrR9, GROUP),
        entry("1100 111 ...... ...", StrR9, GROUP),
        // Register offsets are scaled by the access size
        entry("0101 000 ... ... ...", StrRegEe, GROUP),
        entry("0101 001 ... ... ...", StrhRegEe, GROUP),
        entry("0101 100 ... ... ...", LdrRegEe, GROUP),
        entry("0101 101 ... ... ...", LdrhRegEe, GROUP),
        entry("0101 111 ... ... ...", LdrshRegEe, GROUP),
    ]
}

/// 32-bit Thumb encodings native to Thumb. Coprocessor, VFP and Advanced
/// SIMD encodings are shared with ARM and registered by the caller.
#[must_use]
pub fn wide() -> Entries {
    let mut out = Vec::with_capacity(400);
    data_processing(&mut out);
    media(&mut out);
    multiplies(&mut out);
    branch_control(&mut out);
    block_transfer(&mut out);
    load_store(&mut out);
    out
}

fn data_processing(out: &mut Entries) {
    use ThumbType::*;

    // (op, immediate form, shifted register form)
    #[rustfmt::skip]
    let binary: [(u32, ThumbType, ThumbType); 10] = [
        (0b0000, AndImmW, AndRegW),
        (0b0001, BicImmW, BicRegW),
        (0b0010, OrrImmW, OrrRegW),
        (0b0011, OrnImmW, OrnRegW),
        (0b0100, EorImmW, EorRegW),
        (0b1000, AddImmW, AddRegW),
        (0b1010, AdcImmW, AdcRegW),
        (0b1011, SbcImmW, SbcRegW),
        (0b1101, SubImmW, SubRegW),
        (0b1110, RsbImmW, RsbRegW),
    ];
    // `Rd == PC` with S set
    let compare = [
        (0b0000, TstImmW, TstRegW),
        (0b0100, TeqImmW, TeqRegW),
        (0b1000, CmnImmW, CmnRegW),
        (0b1101, CmpImmW, CmpRegW),
    ];
    // `Rn == PC`
    let moves = [(0b0010, MovImmW, MovRegW), (0b0011, MvnImmW, MvnRegW)];

    for (op, imm, reg) in binary {
        out.push(entry(&format!("11110.0{op:04b}.....  0..............."), imm, GROUP));
        out.push(entry(&format!("1110101{op:04b}.....  0..............."), reg, GROUP));
    }
    for (op, imm, reg) in compare {
        out.push(entry(&format!("11110.0{op:04b}1....  0...1111........"), imm, GROUP));
        out.push(entry(&format!("1110101{op:04b}1....  0...1111........"), reg, GROUP));
    }
    for (op, imm, reg) in moves {
        out.push(entry(&format!("11110.0{op:04b}.1111  0..............."), imm, GROUP));
        out.push(entry(&format!("1110101{op:04b}.1111  0..............."), reg, GROUP));
    }

    out.extend([
        entry("111010101100....  0.........00....", PkhBt, GROUP),
        entry("111010101100....  0.........10....", PkhTb, GROUP),
        // Plain binary immediates
        entry("11110.100000....  0...............", Addw, GROUP),
        entry("11110.100100....  0...............", MovW, GROUP),
        entry("11110.101010....  0...............", Subw, GROUP),
        entry("11110.101100....  0...............", MovT, GROUP),
        entry("1111001100.0....  0...............", Ssat, GROUP),
        entry("111100110010....  0000....00......", Ssat16, GROUP),
        entry("111100110100....  0...............", Sbfx, GROUP),
        entry("111100110110....  0...............", Bfi, GROUP),
        entry("1111001101101111  0...............", Bfc, GROUP),
        entry("1111001110.0....  0...............", Usat, GROUP),
        entry("111100111010....  0000....00......", Usat16, GROUP),
        entry("111100111100....  0...............", Ubfx, GROUP),
        // Shift by register
        entry("111110100.......  1111....0000....", ShiftRegW, GROUP),
    ]);
}

fn media(out: &mut Entries) {
    use ThumbType::*;

    // (op, accumulating form, plain form with `Rn == PC`)
    let extends = [
        (0b000, Sxtah, SxthW),
        (0b001, Uxtah, UxthW),
        (0b010, Sxtab16, Sxtb16),
        (0b011, Uxtab16, Uxtb16),
        (0b100, Sxtab, SxtbW),
        (0b101, Uxtab, UxtbW),
    ];
    for (op, add, plain) in extends {
        out.push(entry(&format!("111110100{op:03b}....  1111....10......"), add, GROUP));
        out.push(entry(&format!("111110100{op:03b}1111  1111....10......"), plain, GROUP));
    }

    // Prefix rows in (U, op2) order: S, Q, SH, U, UQ, UH
    #[rustfmt::skip]
    let parallel: [(u32, [ThumbType; 6]); 6] = [
        (0b001, [Sadd16, Qadd16, Shadd16, Uadd16, Uqadd16, Uhadd16]),
        (0b010, [Sasx, Qasx, Shasx, Uasx, Uqasx, Uhasx]),
        (0b110, [Ssax, Qsax, Shsax, Usax, Uqsax, Uhsax]),
        (0b101, [Ssub16, Qsub16, Shsub16, Usub16, Uqsub16, Uhsub16]),
        (0b000, [Sadd8, Qadd8, Shadd8, Uadd8, Uqadd8, Uhadd8]),
        (0b100, [Ssub8, Qsub8, Shsub8, Usub8, Uqsub8, Uhsub8]),
    ];
    let prefixes = [(0, 0b00), (0, 0b01), (0, 0b10), (1, 0b00), (1, 0b01), (1, 0b10)];
    for (op1, types) in parallel {
        for ((u, op2), ty) in prefixes.into_iter().zip(types) {
            out.push(entry(&format!("111110101{op1:03b}....  1111....0{u}{op2:02b}...."), ty, GROUP));
        }
    }

    #[rustfmt::skip]
    let misc: [(u32, u32, ThumbType); 10] = [
        (0b00, 0b00, Qadd), (0b00, 0b01, Qdadd), (0b00, 0b10, Qsub), (0b00, 0b11, Qdsub),
        (0b01, 0b00, RevW), (0b01, 0b01, Rev16W), (0b01, 0b10, Rbit), (0b01, 0b11, RevshW),
        (0b10, 0b00, Sel),
        (0b11, 0b00, Clz),
    ];
    for (op1, op2, ty) in misc {
        out.push(entry(&format!("1111101010{op1:02b}....  1111....10{op2:02b}...."), ty, GROUP));
    }
}

fn multiplies(out: &mut Entries) {
    use ThumbType::*;

    // (op1, op2, accumulating form, plain form with `Ra == PC`)
    #[rustfmt::skip]
    let short: [(u32, u32, ThumbType, Option<ThumbType>); 16] = [
        (0b000, 0b00, Mla, Some(MulW)),
        (0b000, 0b01, Mls, None),
        (0b001, 0b00, SmlaBb, Some(SmulBb)),
        (0b001, 0b01, SmlaBt, Some(SmulBt)),
        (0b001, 0b10, SmlaTb, Some(SmulTb)),
        (0b001, 0b11, SmlaTt, Some(SmulTt)),
        (0b010, 0b00, Smlad, Some(Smuad)),
        (0b010, 0b01, Smladx, Some(Smuadx)),
        (0b011, 0b00, SmlawB, Some(SmulwB)),
        (0b011, 0b01, SmlawT, Some(SmulwT)),
        (0b100, 0b00, Smlsd, Some(Smusd)),
        (0b100, 0b01, Smlsdx, Some(Smusdx)),
        (0b101, 0b00, Smmla, Some(Smmul)),
        (0b101, 0b01, Smmlar, Some(Smmulr)),
        (0b110, 0b00, Smmls, None),
        (0b110, 0b01, Smmlsr, None),
    ];
    for (op1, op2, acc, plain) in short {
        out.push(entry(&format!("111110110{op1:03b}....  ........00{op2:02b}...."), acc, GROUP));
        if let Some(plain) = plain {
            out.push(entry(&format!("111110110{op1:03b}....  1111....00{op2:02b}...."), plain, GROUP));
        }
    }
    out.extend([
        entry("111110110111....  ........0000....", Usada8, GROUP),
        entry("111110110111....  1111....0000....", Usad8, GROUP),
    ]);

    #[rustfmt::skip]
    let long: [(u32, u32, ThumbType); 15] = [
        (0b000, 0b0000, Smull),
        (0b001, 0b1111, Sdiv),
        (0b010, 0b0000, Umull),
        (0b011, 0b1111, Udiv),
        (0b100, 0b0000, Smlal),
        (0b100, 0b1000, SmlalBb),
        (0b100, 0b1001, SmlalBt),
        (0b100, 0b1010, SmlalTb),
        (0b100, 0b1011, SmlalTt),
        (0b100, 0b1100, Smlald),
        (0b100, 0b1101, Smlaldx),
        (0b101, 0b1100, Smlsld),
        (0b101, 0b1101, Smlsldx),
        (0b110, 0b0000, Umlal),
        (0b110, 0b0110, Umaal),
    ];
    for (op1, op2, ty) in long {
        let pattern = if matches!(ty, Sdiv | Udiv) {
            format!("111110111{op1:03b}....  1111....{op2:04b}....")
        } else {
            format!("111110111{op1:03b}....  ........{op2:04b}....")
        };
        out.push(entry(&pattern, ty, GROUP));
    }
}

fn branch_control(out: &mut Entries) {
    use ThumbType::*;

    out.extend([
        entry("11110...........  10.0............", BCondW, GROUP),
        entry("11110...........  10.1............", BW, GROUP),
        entry("11110...........  11.1............", Bl, GROUP),
        entry("11110...........  11.0...........0", BlxImm, GROUP),
        // A condition of 111x is the miscellaneous control space
        entry("11110.111.......  10.0............", Undefined, CARVED),
        entry("111100111000....  10.0....00000000", MsrReg, EXACT),
        entry("111100111001....  10.0....00000000", MsrRegSpsr, EXACT),
        entry("1111001110101111  10.0.000........", NopW, EXACT),
        entry("1111001110101111  10.0.00000000000", NopW, EXACT),
        entry("1111001110101111  10.0.00000000001", YieldW, EXACT),
        entry("1111001110101111  10.0.00000000010", WfeW, EXACT),
        entry("1111001110101111  10.0.00000000011", WfiW, EXACT),
        entry("1111001110101111  10.0.00000000100", SevW, EXACT),
        entry("1111001110101111  10.0.0001111....", Dbg, EXACT),
        entry("1111001110101111  10.0.001000.....", Cps, EXACT),
        entry("1111001110101111  10.0.10.........", CpsIeW, EXACT),
        entry("1111001110101111  10.0.11.........", CpsIdW, EXACT),
        entry("1111001110111111  1000111100001111", Leavex, EXACT),
        entry("1111001110111111  1000111100011111", Enterx, EXACT),
        entry("1111001110111111  10.0....0010....", Clrex, EXACT),
        entry("1111001110111111  10.0....0100....", Dsb, EXACT),
        entry("1111001110111111  10.0....0101....", Dmb, EXACT),
        entry("1111001110111111  10.0....0110....", Isb, EXACT),
        entry("111100111100....  10.0111100000000", Bxj, EXACT),
        entry("1111001111011110  10.01111........", SubsPcLr, EXACT),
        entry("1111001111101111  10.0....00000000", Mrs, EXACT),
        entry("1111001111111111  10.0....00000000", MrsSpsr, EXACT),
        entry("111101111111....  1000............", Smc, EXACT),
    ]);
}

fn block_transfer(out: &mut Entries) {
    use ThumbType::*;

    out.extend([
        entry("1110100010.0....  ................", StmW, GROUP),
        entry("1110100010.1....  ................", LdmW, GROUP),
        entry("1110100010111101  ................", PopW, GROUP),
        entry("1110100100.0....  ................", StmDb, GROUP),
        entry("1110100100101101  ................", PushW, GROUP),
        entry("1110100100.1....  ................", LdmDb, GROUP),
        entry("1110100000.01101  11000000000.....", SrsDb, GROUP),
        entry("1110100000.1....  1100000000000000", RfeDb, GROUP),
        entry("1110100110.01101  11000000000.....", SrsIa, GROUP),
        entry("1110100110.1....  1100000000000000", RfeIa, GROUP),
        // Exclusives, dual and table branch
        entry("111010000100....  ................", Strex, GROUP),
        entry("111010000101....  ....1111........", Ldrex, GROUP),
        entry("11101000.110....  ................", StrdImm, GROUP),
        entry("11101001.1.0....  ................", StrdImm, GROUP),
        entry("11101000.111....  ................", LdrdImm, GROUP),
        entry("11101001.1.1....  ................", LdrdImm, GROUP),
        entry("111010001100....  ........0100....", Strexb, GROUP),
        entry("111010001100....  ........0101....", Strexh, GROUP),
        entry("111010001100....  ........0111....", Strexd, GROUP),
        entry("111010001101....  111100000000....", Tbb, GROUP),
        entry("111010001101....  111100000001....", Tbh, GROUP),
        entry("111010001101....  ....111101001111", Ldrexb, GROUP),
        entry("111010001101....  ....111101011111", Ldrexh, GROUP),
        entry("111010001101....  ........01111111", Ldrexd, GROUP),
    ]);
}

/// Single register loads and stores, `1111 100S`.
fn load_store(out: &mut Entries) {
    use ThumbType::*;

    // (S, size, L, imm12, imm8, register, unprivileged, literal)
    #[rustfmt::skip]
    let ops: [(u32, u32, u32, [ThumbType; 4], Option<ThumbType>); 8] = [
        (0, 0b00, 0, [StrbImm12, StrbImm8, StrbRegW, Strbt], None),
        (0, 0b01, 0, [StrhImm12, StrhImm8, StrhRegW, Strht], None),
        (0, 0b10, 0, [StrImm12, StrImm8, StrRegW, Strt], None),
        (0, 0b00, 1, [LdrbImm12, LdrbImm8, LdrbRegW, Ldrbt], Some(LdrbLit)),
        (0, 0b01, 1, [LdrhImm12, LdrhImm8, LdrhRegW, Ldrht], Some(LdrhLit)),
        (0, 0b10, 1, [LdrImm12, LdrImm8, LdrRegW, Ldrt], Some(LdrLitW)),
        (1, 0b00, 1, [LdrsbImm12, LdrsbImm8, LdrsbRegW, Ldrsbt], Some(LdrsbLit)),
        (1, 0b01, 1, [LdrshImm12, LdrshImm8, LdrshRegW, Ldrsht], Some(LdrshLit)),
    ];

    for (s, size, l, [imm12, imm8, reg, user], literal) in ops {
        out.extend([
            entry(&format!("1111100{s}1{size:02b}{l}....  ................"), imm12, GROUP),
            // Negative offset, then indexed with writeback
            entry(&format!("1111100{s}0{size:02b}{l}....  ....1100........"), imm8, GROUP),
            entry(&format!("1111100{s}0{size:02b}{l}....  ....1..1........"), imm8, GROUP),
            entry(&format!("1111100{s}0{size:02b}{l}....  ....000000......"), reg, GROUP),
            entry(&format!("1111100{s}0{size:02b}{l}....  ....1110........"), user, GROUP),
        ]);
        if let Some(literal) = literal {
            out.push(entry(&format!("1111100{s}.{size:02b}{l}1111  ................"), literal, CARVED));
        }
    }

    // Byte loads with `Rt == PC` are preloads, PLDW sits in the halfword slot
    out.extend([
        entry("111110001001....  1111............", PldImm12, CARVED),
        entry("111110000001....  11111100........", PldImm8, CARVED),
        entry("111110000001....  1111000000......", PldReg, CARVED),
        entry("111110001011....  1111............", PldwImm12, CARVED),
        entry("111110000011....  11111100........", PldwImm8, CARVED),
        entry("111110000011....  1111000000......", PldwReg, CARVED),
        entry("111110011001....  1111............", PliImm12, CARVED),
        entry("111110010001....  11111100........", PliImm8, CARVED),
        entry("111110010001....  1111000000......", PliReg, CARVED),
        entry("11111000.0011111  1111............", PldLit, EXACT),
        entry("11111001.0011111  1111............", PliLit, EXACT),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DecodeTable;
    use pretty_assertions::assert_eq;

    fn narrow16(hw: u16) -> Option<ThumbType> {
        DecodeTable::new("thumb16", 16, narrow()).lookup(u32::from(hw))
    }

    fn wide32(hw1: u16, hw2: u16) -> Option<ThumbType> {
        DecodeTable::new("thumb32", 32, wide()).lookup((u32::from(hw1) << 16) | u32::from(hw2))
    }

    #[test]
    fn shifts_adds_and_moves() {
        assert_eq!(narrow16(0x0088), Some(ThumbType::LslImm)); // LSLS R0, R1, #2
        assert_eq!(narrow16(0x1888), Some(ThumbType::AddReg)); // ADDS R0, R1, R2
        assert_eq!(narrow16(0x1C48), Some(ThumbType::AddImm3)); // ADDS R0, R1, #1
        assert_eq!(narrow16(0x2001), Some(ThumbType::MovImm)); // MOVS R0, #1
        assert_eq!(narrow16(0x2800), Some(ThumbType::CmpImm)); // CMP R0, #0
        assert_eq!(narrow16(0x4008), Some(ThumbType::And)); // ANDS R0, R1
        assert_eq!(narrow16(0x4348), Some(ThumbType::Mul)); // MULS R0, R1, R0
        assert_eq!(narrow16(0x4240), Some(ThumbType::Rsb)); // RSBS R0, R0, #0
    }

    #[test]
    fn special_data_and_branch_exchange() {
        assert_eq!(narrow16(0x4770), Some(ThumbType::Bx)); // BX LR
        assert_eq!(narrow16(0x4788), Some(ThumbType::BlxReg)); // BLX R1
        assert_eq!(narrow16(0x4685), Some(ThumbType::MovHi)); // MOV SP, R0
        assert_eq!(narrow16(0x4485), Some(ThumbType::AddHi)); // ADD SP, R0
        // Nonzero low bits in BX
        assert_eq!(narrow16(0x4771), None);
    }

    #[test]
    fn loads_stores_and_stack() {
        assert_eq!(narrow16(0x4801), Some(ThumbType::LdrLit)); // LDR R0, [PC, #4]
        assert_eq!(narrow16(0x5888), Some(ThumbType::LdrReg)); // LDR R0, [R1, R2]
        assert_eq!(narrow16(0x6848), Some(ThumbType::LdrImm)); // LDR R0, [R1, #4]
        assert_eq!(narrow16(0x8848), Some(ThumbType::LdrhImm)); // LDRH R0, [R1, #2]
        assert_eq!(narrow16(0x9801), Some(ThumbType::LdrSp)); // LDR R0, [SP, #4]
        assert_eq!(narrow16(0xB510), Some(ThumbType::Push)); // PUSH {R4, LR}
        assert_eq!(narrow16(0xBD10), Some(ThumbType::Pop)); // POP {R4, PC}
        assert_eq!(narrow16(0xB082), Some(ThumbType::SubSpSp)); // SUB SP, #8
        assert_eq!(narrow16(0xC803), Some(ThumbType::Ldm)); // LDM R0!, {R0, R1}
    }

    #[test]
    fn miscellaneous_space() {
        assert_eq!(narrow16(0xB108), Some(ThumbType::Cbz)); // CBZ R0, +2
        assert_eq!(narrow16(0xB908), Some(ThumbType::Cbnz));
        assert_eq!(narrow16(0xB2C8), Some(ThumbType::Uxtb)); // UXTB R0, R1
        assert_eq!(narrow16(0xBA08), Some(ThumbType::Rev));
        assert_eq!(narrow16(0xB662), Some(ThumbType::CpsIe)); // CPSIE I
        assert_eq!(narrow16(0xB658), Some(ThumbType::SetendBe));
        assert_eq!(narrow16(0xBE00), Some(ThumbType::Bkpt));
        assert_eq!(narrow16(0xBF18), Some(ThumbType::It)); // IT NE
        assert_eq!(narrow16(0xBF00), Some(ThumbType::Nop));
        assert_eq!(narrow16(0xBF30), Some(ThumbType::Wfi));
        assert_eq!(narrow16(0xBF70), Some(ThumbType::Nop)); // unallocated hint
    }

    #[test]
    fn conditional_branch_space() {
        assert_eq!(narrow16(0xD0FE), Some(ThumbType::BCond)); // BEQ .
        assert_eq!(narrow16(0xDE00), Some(ThumbType::Undefined)); // UDF #0
        assert_eq!(narrow16(0xDF01), Some(ThumbType::Svc)); // SVC #1
        assert_eq!(narrow16(0xE7FE), Some(ThumbType::B)); // B .
        // 32-bit prefixes are not in the 16-bit table
        assert_eq!(narrow16(0xF000), None);
    }

    #[test]
    fn thumbee_overrides() {
        let ee = DecodeTable::new("thumbee", 16, thumbee());
        assert_eq!(ee.lookup(0xC301), Some(ThumbType::Hbl)); // HBL #1
        assert_eq!(ee.lookup(0xCA08), Some(ThumbType::Chka)); // CHKA R0, R1
        assert_eq!(ee.lookup(0x5888), Some(ThumbType::LdrRegEe)); // LDR R0, [R1, R2, LSL #2]
        // STRB keeps its ordinary encoding
        assert_eq!(ee.lookup(0x5488), None);
        assert_eq!(ee.lookup(0x2001), None);
    }

    #[test]
    fn wide_data_processing() {
        assert_eq!(wide32(0xF101, 0x0001), Some(ThumbType::AddImmW)); // ADD.W R0, R1, #1
        assert_eq!(wide32(0xF1B0, 0x0F00), Some(ThumbType::CmpImmW)); // CMP.W R0, #0
        assert_eq!(wide32(0xF04F, 0x0001), Some(ThumbType::MovImmW)); // MOV.W R0, #1
        assert_eq!(wide32(0xEB01, 0x0002), Some(ThumbType::AddRegW)); // ADD.W R0, R1, R2
        assert_eq!(wide32(0xEA4F, 0x0001), Some(ThumbType::MovRegW)); // MOV.W R0, R1
        assert_eq!(wide32(0xEAC1, 0x0002), Some(ThumbType::PkhBt));
        assert_eq!(wide32(0xF240, 0x0001), Some(ThumbType::MovW)); // MOVW R0, #1
        assert_eq!(wide32(0xF2C0, 0x0001), Some(ThumbType::MovT));
        assert_eq!(wide32(0xF36F, 0x0007), Some(ThumbType::Bfc));
        assert_eq!(wide32(0xFA01, 0xF002), Some(ThumbType::ShiftRegW)); // LSL.W R0, R1, R2
    }

    #[test]
    fn wide_media_and_multiplies() {
        assert_eq!(wide32(0xFA5F, 0xF081), Some(ThumbType::UxtbW)); // UXTB.W R0, R1
        assert_eq!(wide32(0xFA91, 0xF002), Some(ThumbType::Sadd16));
        assert_eq!(wide32(0xFA91, 0xF062), Some(ThumbType::Uhadd16));
        assert_eq!(wide32(0xFAB1, 0xF081), Some(ThumbType::Clz)); // CLZ R0, R1
        assert_eq!(wide32(0xFB01, 0xF002), Some(ThumbType::MulW)); // MUL R0, R1, R2
        assert_eq!(wide32(0xFB01, 0x3002), Some(ThumbType::Mla));
        assert_eq!(wide32(0xFB81, 0x0102), Some(ThumbType::Smull));
        assert_eq!(wide32(0xFB91, 0xF0F2), Some(ThumbType::Sdiv)); // SDIV R0, R1, R2
    }

    #[test]
    fn wide_branches_and_control() {
        assert_eq!(wide32(0xF000, 0xF800), Some(ThumbType::Bl));
        assert_eq!(wide32(0xF000, 0xE800), Some(ThumbType::BlxImm));
        assert_eq!(wide32(0xF000, 0xB800), Some(ThumbType::BW));
        assert_eq!(wide32(0xF000, 0x8000), Some(ThumbType::BCondW)); // BEQ.W
        assert_eq!(wide32(0xF3BF, 0x8F4F), Some(ThumbType::Dsb)); // DSB SY
        assert_eq!(wide32(0xF3AF, 0x8000), Some(ThumbType::NopW));
        assert_eq!(wide32(0xF3EF, 0x8000), Some(ThumbType::Mrs)); // MRS R0, CPSR
        assert_eq!(wide32(0xF380, 0x8900), Some(ThumbType::MsrReg)); // MSR CPSR_f, R0
        assert_eq!(wide32(0xF3BF, 0x8F1F), Some(ThumbType::Enterx));
        // Unallocated miscellaneous control
        assert_eq!(wide32(0xF3F0, 0x8000), Some(ThumbType::Undefined));
    }

    #[test]
    fn wide_loads_and_stores() {
        assert_eq!(wide32(0xF8D1, 0x0004), Some(ThumbType::LdrImm12)); // LDR.W R0, [R1, #4]
        assert_eq!(wide32(0xF851, 0x0C04), Some(ThumbType::LdrImm8)); // LDR R0, [R1, #-4]
        assert_eq!(wide32(0xF851, 0x0B04), Some(ThumbType::LdrImm8)); // LDR R0, [R1], #4
        assert_eq!(wide32(0xF851, 0x0022), Some(ThumbType::LdrRegW)); // LDR.W R0, [R1, R2, LSL #2]
        assert_eq!(wide32(0xF851, 0x0E04), Some(ThumbType::Ldrt));
        assert_eq!(wide32(0xF8DF, 0x0004), Some(ThumbType::LdrLitW)); // LDR.W R0, [PC, #4]
        assert_eq!(wide32(0xF891, 0xF004), Some(ThumbType::PldImm12)); // PLD [R1, #4]
        assert_eq!(wide32(0xF89F, 0xF004), Some(ThumbType::PldLit));
        assert_eq!(wide32(0xE92D, 0x4010), Some(ThumbType::PushW)); // PUSH.W {R4, LR}
        assert_eq!(wide32(0xE8BD, 0x8010), Some(ThumbType::PopW)); // POP.W {R4, PC}
        assert_eq!(wide32(0xE9D1, 0x2302), Some(ThumbType::LdrdImm)); // LDRD R2, R3, [R1, #8]
        assert_eq!(wide32(0xE851, 0x0F00), Some(ThumbType::Ldrex)); // LDREX R0, [R1]
        assert_eq!(wide32(0xE8D0, 0xF001), Some(ThumbType::Tbb)); // TBB [R0, R1]
    }
}
