use std::sync::Arc;

use armdecode::DecoderContext;
use morac::{AuxDispatcher, BusInterface, Checksum, MemoryBus, VectorAdd, fletcher32, STATUS_OK};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_ADD: u32 = 1;
const CHECKSUM: u32 = 2;

const CODE: u32 = 0x8000;
const STACK: u32 = 0x9000;
const DATA: u32 = 0xA000;

fn machine() -> (MemoryBus, AuxDispatcher) {
    let bus = MemoryBus::new(CODE, 0x4000);
    let mut dispatcher = AuxDispatcher::new(Arc::new(bus.clone()));
    dispatcher.register(VECTOR_ADD, Box::new(VectorAdd::default())).unwrap();
    dispatcher.register(CHECKSUM, Box::new(Checksum::default())).unwrap();
    (bus, dispatcher)
}

fn push_args(bus: &MemoryBus, args: &[u32]) {
    for (i, arg) in args.iter().enumerate() {
        bus.write_word(STACK + 4 * i as u32, *arg).unwrap();
    }
}

#[test]
fn baa_runs_vector_add() {
    let (bus, mut dispatcher) = machine();
    let mut rng = StdRng::seed_from_u64(42);

    let count = 64;
    let (a, b, dst) = (DATA, DATA + 0x400, DATA + 0x800);
    let lhs: Vec<u32> = (0..count).map(|_| rng.r#gen()).collect();
    let rhs: Vec<u32> = (0..count).map(|_| rng.r#gen()).collect();
    for i in 0..count {
        bus.write_word(a + 4 * i as u32, lhs[i]).unwrap();
        bus.write_word(b + 4 * i as u32, rhs[i]).unwrap();
    }
    push_args(&bus, &[dst, a, b, count as u32]);

    // BAA R1
    bus.write_word(CODE, 0xE12F_FF41).unwrap();
    let mut regs = [0; 16];
    regs[1] = VECTOR_ADD;
    regs[13] = STACK;

    assert_eq!(dispatcher.step(DecoderContext::shared(), CODE, &regs), Ok(STATUS_OK));
    for i in 0..count {
        assert_eq!(bus.read_word(dst + 4 * i as u32).unwrap(), lhs[i].wrapping_add(rhs[i]));
    }
}

#[test]
fn baa_runs_checksum() {
    let (bus, mut dispatcher) = machine();
    let payload = b"auxiliary architecture";
    bus.write(DATA, payload).unwrap();
    push_args(&bus, &[DATA, payload.len() as u32, DATA + 0x100]);

    // BAA R5
    bus.write_word(CODE + 4, 0xE12F_FF45).unwrap();
    let mut regs = [0; 16];
    regs[5] = CHECKSUM;
    regs[13] = STACK;

    assert_eq!(dispatcher.step(DecoderContext::shared(), CODE + 4, &regs), Ok(STATUS_OK));
    assert_eq!(bus.read_word(DATA + 0x100).unwrap(), fletcher32(payload));
}

#[test]
fn bad_arguments_report_address_error() {
    let (bus, mut dispatcher) = machine();
    // Result pointer below the mapped range
    push_args(&bus, &[DATA, 4, 0x10]);

    bus.write_word(CODE, 0xE12F_FF40).unwrap(); // BAA R0
    let mut regs = [0; 16];
    regs[0] = CHECKSUM;
    regs[13] = STACK;

    assert_eq!(dispatcher.step(DecoderContext::shared(), CODE, &regs), Ok(-2));
}
