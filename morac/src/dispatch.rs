//! Routes `BAA Rm` to auxiliary modules.
//!
//! `BAA` borrows the `BX` encoding space (`cond 0001 0010 1111 1111 1111
//! 0100 Rm`). The value held in `Rm` picks the module, `SP` points at its
//! arguments. Whether the instruction passes its condition is the
//! simulator's business, the dispatcher runs whatever it is handed.

use std::collections::BTreeMap;

use armdecode::{ArmType, DecodeState, DecoderContext, InstructionInfo, Mode};
use thiserror::Error;

use crate::bus::{BusError, BusFetch, SharedBus};
use crate::module::AuxModule;

const SP: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{0:?} does not branch to the auxiliary architecture")]
    NotBaa(ArmType),
    #[error("no module registered for selector {0:#X}")]
    UnknownModule(u32),
    #[error(transparent)]
    Bus(#[from] BusError),
}

pub struct AuxDispatcher {
    bus: SharedBus,
    modules: BTreeMap<u32, Box<dyn AuxModule>>,
}

impl AuxDispatcher {
    #[must_use]
    pub fn new(bus: SharedBus) -> Self {
        Self {
            bus,
            modules: BTreeMap::new(),
        }
    }

    /// Initialises `module` on the dispatcher's bus and files it under
    /// `selector`, replacing any module already there.
    ///
    /// # Errors
    ///
    /// Returns the error of the module's `init`, the module is dropped.
    pub fn register(&mut self, selector: u32, mut module: Box<dyn AuxModule>) -> Result<(), BusError> {
        module.init(SharedBus::clone(&self.bus))?;
        tracing::debug!("module {} registered as {selector:#X}", module.name());

        if let Some(old) = self.modules.insert(selector, module) {
            tracing::warn!("module {} replaced at {selector:#X}", old.name());
        }
        Ok(())
    }

    /// Name of the module behind `selector`.
    #[must_use]
    pub fn module(&self, selector: u32) -> Option<&'static str> {
        self.modules.get(&selector).map(|m| m.name())
    }

    /// Runs the module picked by a decoded `BAA` and returns its status.
    ///
    /// # Errors
    ///
    /// Fails when `info` is not `BAA` or when nothing is registered for the
    /// value of its register.
    pub fn dispatch(&mut self, info: &InstructionInfo, regs: &[u32; 16]) -> Result<i32, DispatchError> {
        let rm = match (info.ty, info.regs[0]) {
            (ArmType::Baa, Some(rm)) => usize::from(rm.index),
            _ => return Err(DispatchError::NotBaa(info.ty)),
        };

        let selector = regs[rm];
        let module = self
            .modules
            .get_mut(&selector)
            .ok_or(DispatchError::UnknownModule(selector))?;

        tracing::debug!(
            "BAA R{rm} at {:#010X}: {} with SP {:#010X}",
            info.address,
            module.name(),
            regs[SP]
        );
        Ok(module.execute(regs[SP]))
    }

    /// Fetches the ARM instruction at `address` over the bus, decodes it
    /// and dispatches it.
    ///
    /// # Errors
    ///
    /// See [`AuxDispatcher::dispatch`], plus fetch faults.
    pub fn step(&mut self, ctx: &DecoderContext, address: u32, regs: &[u32; 16]) -> Result<i32, DispatchError> {
        let info = ctx.fetch_and_decode(&mut BusFetch(&*self.bus), address, Mode::Arm, &DecodeState::default())?;
        self.dispatch(&info, regs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::bus::{BusInterface, MemoryBus, STATUS_OK};
    use pretty_assertions::assert_eq;

    /// Succeeds when handed the stack pointer 0x80.
    struct Probe;

    impl AuxModule for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn init(&mut self, _bus: SharedBus) -> Result<(), BusError> {
            Ok(())
        }

        fn execute(&mut self, stack_pointer: u32) -> i32 {
            if stack_pointer == 0x80 { STATUS_OK } else { -1 }
        }
    }

    struct Broken;

    impl AuxModule for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn init(&mut self, bus: SharedBus) -> Result<(), BusError> {
            bus.read_word(0xFFFF_0000).map(drop)
        }

        fn execute(&mut self, _stack_pointer: u32) -> i32 {
            STATUS_OK
        }
    }

    fn decode(word: u32) -> InstructionInfo {
        DecoderContext::shared().decode_arm(0, word, &DecodeState::default())
    }

    #[test]
    fn selects_module_by_register_value() {
        let mut dispatcher = AuxDispatcher::new(Arc::new(MemoryBus::new(0, 0x100)));
        dispatcher.register(7, Box::new(Probe)).unwrap();

        let mut regs = [0; 16];
        regs[1] = 7;
        regs[SP] = 0x80;

        // BAA R1
        assert_eq!(dispatcher.dispatch(&decode(0xE12F_FF41), &regs), Ok(STATUS_OK));
        assert_eq!(dispatcher.module(7), Some("probe"));

        regs[1] = 8;
        assert_eq!(
            dispatcher.dispatch(&decode(0xE12F_FF41), &regs),
            Err(DispatchError::UnknownModule(8))
        );
    }

    #[test]
    fn rejects_other_instructions() {
        let mut dispatcher = AuxDispatcher::new(Arc::new(MemoryBus::new(0, 0x100)));
        // BX R1
        assert_eq!(
            dispatcher.dispatch(&decode(0xE12F_FF11), &[0; 16]),
            Err(DispatchError::NotBaa(ArmType::Bx))
        );
    }

    #[test]
    fn failed_init_is_not_registered() {
        let mut dispatcher = AuxDispatcher::new(Arc::new(MemoryBus::new(0, 0x100)));
        assert!(dispatcher.register(1, Box::new(Broken)).is_err());
        assert_eq!(dispatcher.module(1), None);
    }

    #[test]
    fn step_fetches_over_the_bus() {
        let bus = MemoryBus::new(0, 0x100);
        bus.write_word(0x40, 0xE12F_FF42).unwrap(); // BAA R2

        let mut dispatcher = AuxDispatcher::new(Arc::new(bus));
        dispatcher.register(3, Box::new(Probe)).unwrap();

        let mut regs = [0; 16];
        regs[2] = 3;
        regs[SP] = 0x80;
        let ctx = DecoderContext::shared();
        assert_eq!(dispatcher.step(ctx, 0x40, &regs), Ok(STATUS_OK));
        assert!(matches!(
            dispatcher.step(ctx, 0x1000, &regs),
            Err(DispatchError::Bus(BusError::Unmapped { .. }))
        ));
    }
}
