use armdecode::attrs::{Encoding, RegTag};
use armdecode::pattern::{entry, Pattern};
use armdecode::table::DecodeTable;
use armdecode::{arm, thumb};
use armdecode::{
    thumb_instruction_size, ArmType, DecodeState, DecoderContext, Register, ShiftOp, ThumbType,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 20_000;

fn random_state(rng: &mut StdRng) -> DecodeState {
    DecodeState {
        unaligned: rng.r#gen(),
        it_state: if rng.gen_bool(0.25) { rng.r#gen() } else { 0 },
        thumb_ee: rng.gen_bool(0.25),
    }
}

#[test]
fn arm_decode_is_total_and_deterministic() {
    let ctx = DecoderContext::shared();
    let mut rng = StdRng::seed_from_u64(0xA5A5);

    for _ in 0..SAMPLES {
        let word: u32 = rng.r#gen();
        let state = random_state(&mut rng);
        let first = ctx.decode_arm(0x8000, word, &state);
        let second = ctx.decode_arm(0x8000, word, &state);

        assert_eq!(first, second, "word {word:#010X}");
        assert_eq!(first.size, 4);
        assert_eq!(first.encoding, Encoding::Arm);
        assert_eq!(first.thumb, None);
    }
}

#[test]
fn thumb_decode_is_total_and_deterministic() {
    let ctx = DecoderContext::shared();
    let mut rng = StdRng::seed_from_u64(0x5A5A);

    for _ in 0..SAMPLES {
        let hw1: u16 = rng.r#gen();
        let hw2: u16 = rng.r#gen();
        let state = random_state(&mut rng);
        let first = ctx.decode_thumb(0x8000, hw1, hw2, &state);
        let second = ctx.decode_thumb(0x8000, hw1, hw2, &state);

        assert_eq!(first, second, "halfwords {hw1:#06X} {hw2:#06X}");
        assert_eq!(first.size, thumb_instruction_size(hw1));
    }
}

#[test]
fn shared_context_matches_a_fresh_one() {
    let shared = DecoderContext::shared();
    let fresh = DecoderContext::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SAMPLES / 4 {
        let word: u32 = rng.r#gen();
        let state = random_state(&mut rng);
        assert_eq!(shared.decode_arm(0, word, &state), fresh.decode_arm(0, word, &state));

        let (hw1, hw2) = ((word >> 16) as u16, word as u16);
        assert_eq!(
            shared.decode_thumb(0, hw1, hw2, &state),
            fresh.decode_thumb(0, hw1, hw2, &state)
        );
    }
}

#[test]
fn baa_carries_its_register() {
    let ctx = DecoderContext::shared();

    for rm in 0..16_u8 {
        let info = ctx.decode_arm(0, 0xE12F_FF40 | u32::from(rm), &DecodeState::default());
        assert_eq!(info.ty, ArmType::Baa);
        assert_eq!(info.mnemonic, "BAA");
        assert_eq!(info.regs[0], Some(Register::core(rm)));
    }
}

#[test]
fn rotated_immediate() {
    // MOV R0, #0xFF000000
    let info = DecoderContext::shared().decode_arm(0, 0xE3A0_04FF, &DecodeState::default());
    assert_eq!(info.ty, ArmType::MovImm);
    assert_eq!(info.constant, Some(0xFF00_0000));
    assert_eq!(info.rotate, 8);
}

#[test]
fn zero_right_shift_means_32() {
    let ctx = DecoderContext::shared();

    // MOV R0, R1, LSR #32
    let info = ctx.decode_arm(0, 0xE1A0_0021, &DecodeState::default());
    assert_eq!(info.shift, Some(ShiftOp::Lsr));
    assert_eq!(info.constant, Some(32));

    // LSRS R0, R1, #32
    let info = ctx.decode_thumb(0, 0x0808, 0, &DecodeState::default());
    assert_eq!(info.thumb, Some(ThumbType::LsrImm));
    assert_eq!(info.shift, Some(ShiftOp::Lsr));
    assert_eq!(info.constant, Some(32));

    // MOV R0, R1, ASR #32
    let info = ctx.decode_arm(0, 0xE1A0_0041, &DecodeState::default());
    assert_eq!(info.shift, Some(ShiftOp::Asr));
    assert_eq!(info.constant, Some(32));

    // MOV R0, R1, LSL #1 is not rewritten
    let info = ctx.decode_arm(0, 0xE1A0_0081, &DecodeState::default());
    assert_eq!(info.constant, Some(1));
}

#[test]
fn branch_targets() {
    let ctx = DecoderContext::shared();
    let state = DecodeState::default();

    // B +0x40 from 0x8000
    assert_eq!(ctx.decode_arm(0x8000, 0xEA00_0010, &state).target, Some(0x8048));
    // BL to itself
    assert_eq!(ctx.decode_arm(0x8000, 0xEBFF_FFFE, &state).target, Some(0x8000));

    // BL with J1 = J2 = 1 and S = 0
    let info = ctx.decode_thumb(0x3000, 0xF000, 0xF800, &state);
    assert_eq!(info.thumb, Some(ThumbType::Bl));
    assert_eq!(info.target, Some(0x3004));
    // J1 = J2 = 0 sets both I bits
    assert_eq!(ctx.decode_thumb(0x3000, 0xF000, 0xD000, &state).target, Some(0x00C0_3004));
    // Backwards by 4
    assert_eq!(ctx.decode_thumb(0x3000, 0xF7FF, 0xFFFE, &state).target, Some(0x3000));
}

#[test]
fn thumbee_table_falls_back_to_thumb() {
    let ctx = DecoderContext::shared();
    let plain = DecodeState::default();
    let ee = DecodeState {
        thumb_ee: true,
        ..plain
    };

    assert_eq!(ctx.decode_thumb(0, 0xC301, 0, &ee).thumb, Some(ThumbType::Hbl));
    assert_eq!(ctx.decode_thumb(0, 0xC301, 0, &plain).thumb, Some(ThumbType::Stm));
    assert_eq!(ctx.decode_thumb(0, 0x5888, 0, &ee).thumb, Some(ThumbType::LdrRegEe));
    assert_eq!(ctx.decode_thumb(0, 0x5888, 0, &plain).thumb, Some(ThumbType::LdrReg));

    // Encodings ThumbEE leaves alone decode the same in both states
    for hw1 in [0x5488_u16, 0x2001, 0x4770, 0xB510] {
        assert_eq!(ctx.decode_thumb(0, hw1, 0, &ee), ctx.decode_thumb(0, hw1, 0, &plain));
    }
}

#[test]
fn it_block_conditions_thumb_instructions() {
    let ctx = DecoderContext::shared();
    // Inside ITT NE, first slot
    let state = DecodeState {
        it_state: 0x14,
        ..DecodeState::default()
    };

    let info = ctx.decode_thumb(0, 0x2001, 0, &state); // MOV R0, #1
    assert_eq!(info.condition, armdecode::Condition::NE);
    assert!(!info.set_flags);

    let info = ctx.decode_thumb(0, 0x2001, 0, &DecodeState::default()); // MOVS R0, #1
    assert_eq!(info.condition, armdecode::Condition::AL);
    assert!(info.set_flags);
}

#[test]
fn unaligned_action_follows_sctlr_u() {
    let ctx = DecoderContext::shared();
    let strict = DecodeState::default();
    let relaxed = DecodeState {
        unaligned: true,
        ..strict
    };

    // LDR R0, [R1, #4]
    let word = 0xE591_0004;
    assert_ne!(ctx.decode_arm(0, word, &strict).unaligned, ctx.decode_arm(0, word, &relaxed).unaligned);
}

#[test]
fn priority_then_specificity_then_order() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ty {
        Wide,
        Narrow,
        Carved,
        Late,
    }

    let table = DecodeTable::new(
        "synthetic",
        16,
        [
            entry("1111 .... .... ....", Ty::Wide, 0),
            entry("1111 0000 .... ....", Ty::Narrow, 0),
            entry("1111 .... .... 0000", Ty::Carved, 1),
            entry("1111 0000 .... ....", Ty::Late, 0),
        ],
    );

    assert_eq!(table.lookup(0xF101), Some(Ty::Wide));
    assert_eq!(table.lookup(0xF011), Some(Ty::Narrow));
    assert_eq!(table.lookup(0xF010), Some(Ty::Carved));
    assert_eq!(table.lookup(0x0000), None);
}

/// Lowest bit and width of a plain register field.
const fn register_field(tag: RegTag) -> Option<(u8, u8)> {
    match tag {
        RegTag::R0_3 => Some((0, 4)),
        RegTag::R8_11 => Some((8, 4)),
        RegTag::R12_15 => Some((12, 4)),
        RegTag::R16_19 => Some((16, 4)),
        RegTag::T0_2 => Some((0, 3)),
        RegTag::T3_5 => Some((3, 3)),
        RegTag::T6_8 => Some((6, 3)),
        RegTag::T8_10 => Some((8, 3)),
        RegTag::T3_6 => Some((3, 4)),
        _ => None,
    }
}

fn field_is_open(pattern: &Pattern, lo: u8, width: u8) -> bool {
    (lo..lo + width).all(|bit| !pattern.fixes(bit))
}

#[test]
fn arm_register_fields_round_trip() {
    let ctx = DecoderContext::shared();
    let state = DecodeState::default();
    let mut checked = 0;

    for e in arm::patterns() {
        for (slot, tag) in e.ty.attrs().regs.into_iter().enumerate() {
            let Some((lo, width)) = register_field(tag) else {
                continue;
            };
            if !field_is_open(&e.pattern, lo, width) {
                continue;
            }

            for v in 0..1u32 << width {
                let word = e.pattern.value | (v << lo);
                let info = ctx.decode_arm(0, word, &state);
                // Some register values select a more specific encoding
                if info.ty != e.ty {
                    continue;
                }
                let reg = info.regs[slot].map(|r| u32::from(r.index));
                assert_eq!(reg, Some(v), "{:?} slot {slot} in {word:#010X}", e.ty);
                checked += 1;
            }
        }
    }
    assert!(checked > 1000, "only {checked} register fields checked");
}

#[test]
fn thumb_register_fields_round_trip() {
    let ctx = DecoderContext::shared();
    let state = DecodeState::default();
    let mut checked = 0;

    for e in thumb::patterns16() {
        for (slot, tag) in e.ty.attrs().op.regs.into_iter().enumerate() {
            let Some((lo, width)) = register_field(tag) else {
                continue;
            };
            if !field_is_open(&e.pattern, lo, width) {
                continue;
            }

            for v in 0..1u32 << width {
                let hw1 = (e.pattern.value | (v << lo)) as u16;
                let info = ctx.decode_thumb(0, hw1, 0, &state);
                if info.thumb != Some(e.ty) {
                    continue;
                }
                let reg = info.regs[slot].map(|r| u32::from(r.index));
                assert_eq!(reg, Some(v), "{:?} slot {slot} in {hw1:#06X}", e.ty);
                checked += 1;
            }
        }
    }
    assert!(checked > 100, "only {checked} register fields checked");
}
