//! Auxiliary architecture modules and the two shipped with the bridge.
//!
//! A module is initialised once with the bus it will talk through and is
//! then executed any number of times. Arguments live in memory at the stack
//! pointer handed to `execute`, one little-endian word each:
//!
//! ```text
//! VectorAdd   sp+0 dst   sp+4 a     sp+8 b     sp+12 count
//! Checksum    sp+0 data  sp+4 len   sp+8 result
//! ```

use crate::bus::{BusError, SharedBus, STATUS_OK};

pub trait AuxModule: Send {
    fn name(&self) -> &'static str;

    /// Keeps the bus for later executions.
    ///
    /// # Errors
    ///
    /// Fails when the module cannot reach what it needs over `bus`.
    fn init(&mut self, bus: SharedBus) -> Result<(), BusError>;

    /// Runs the module on the arguments at `stack_pointer`. Returns
    /// [`STATUS_OK`] or the negative status of the failed transfer.
    fn execute(&mut self, stack_pointer: u32) -> i32;
}

/// Folds the outcome of a run into the status returned by `execute`.
pub fn completion(module: &str, result: Result<(), BusError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => {
            tracing::warn!("{module}: {err}");
            err.status()
        }
    }
}

/// The first `N` argument words at `sp`.
fn arguments<const N: usize>(bus: &SharedBus, sp: u32) -> Result<[u32; N], BusError> {
    let mut args = [0; N];
    for (i, arg) in args.iter_mut().enumerate() {
        *arg = bus.read_word(sp.wrapping_add(4 * i as u32))?;
    }
    Ok(args)
}

/// Element-wise wrapping `u32` addition, `dst[i] = a[i] + b[i]`.
#[derive(Default)]
pub struct VectorAdd {
    bus: Option<SharedBus>,
}

impl VectorAdd {
    fn run(&self, sp: u32) -> Result<(), BusError> {
        let bus = self.bus.as_ref().ok_or(BusError::NotInitialised)?;
        let [dst, a, b, count] = arguments(bus, sp)?;

        for i in 0..count {
            let offset = i.wrapping_mul(4);
            let sum = bus
                .read_word(a.wrapping_add(offset))?
                .wrapping_add(bus.read_word(b.wrapping_add(offset))?);
            bus.write_word(dst.wrapping_add(offset), sum)?;
        }

        tracing::debug!("vector add of {count} elements into {dst:#010X}");
        Ok(())
    }
}

impl AuxModule for VectorAdd {
    fn name(&self) -> &'static str {
        "vector-add"
    }

    fn init(&mut self, bus: SharedBus) -> Result<(), BusError> {
        self.bus = Some(bus);
        Ok(())
    }

    fn execute(&mut self, stack_pointer: u32) -> i32 {
        completion(self.name(), self.run(stack_pointer))
    }
}

/// Running Fletcher-32 over little-endian halfwords.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fletcher32 {
    sum1: u32,
    sum2: u32,
}

impl Fletcher32 {
    /// Feeds `data`. Only the last slice may have an odd length, its final
    /// byte is padded with zero.
    pub fn update(&mut self, data: &[u8]) {
        for chunk in data.chunks(2) {
            let word = u32::from(chunk[0]) | (u32::from(chunk.get(1).copied().unwrap_or(0)) << 8);
            self.sum1 = (self.sum1 + word) % 0xFFFF;
            self.sum2 = (self.sum2 + self.sum1) % 0xFFFF;
        }
    }

    #[must_use]
    pub const fn finish(self) -> u32 {
        (self.sum2 << 16) | self.sum1
    }
}

#[must_use]
pub fn fletcher32(data: &[u8]) -> u32 {
    let mut sum = Fletcher32::default();
    sum.update(data);
    sum.finish()
}

/// Fletcher-32 of a buffer, stored as one word at `result`.
#[derive(Default)]
pub struct Checksum {
    bus: Option<SharedBus>,
}

impl Checksum {
    fn run(&self, sp: u32) -> Result<(), BusError> {
        let bus = self.bus.as_ref().ok_or(BusError::NotInitialised)?;
        let [data, len, result] = arguments(bus, sp)?;

        let mut sum = Fletcher32::default();
        let mut buffer = [0; 256];
        let mut done = 0;
        while done < len {
            let chunk = &mut buffer[..(len - done).min(256) as usize];
            bus.read(data.wrapping_add(done), chunk)?;
            sum.update(chunk);
            done += chunk.len() as u32;
        }

        let sum = sum.finish();
        bus.write_word(result, sum)?;

        tracing::debug!("checksum of {len} bytes at {data:#010X}: {sum:#010X}");
        Ok(())
    }
}

impl AuxModule for Checksum {
    fn name(&self) -> &'static str {
        "checksum"
    }

    fn init(&mut self, bus: SharedBus) -> Result<(), BusError> {
        self.bus = Some(bus);
        Ok(())
    }

    fn execute(&mut self, stack_pointer: u32) -> i32 {
        completion(self.name(), self.run(stack_pointer))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::bus::{BusInterface, MemoryBus};
    use pretty_assertions::assert_eq;

    const SP: u32 = 0x100;

    fn setup(args: &[u32]) -> MemoryBus {
        let bus = MemoryBus::new(0, 0x1000);
        for (i, arg) in args.iter().enumerate() {
            bus.write_word(SP + 4 * i as u32, *arg).unwrap();
        }
        bus
    }

    #[test]
    fn fletcher32_reference_values() {
        assert_eq!(fletcher32(b"abcde"), 0xF04F_C729);
        assert_eq!(fletcher32(b"abcdef"), 0x5650_2D2A);
        assert_eq!(fletcher32(b"abcdefgh"), 0xEBE1_9591);
        assert_eq!(fletcher32(&[]), 0);

        let mut split = Fletcher32::default();
        split.update(b"abcd");
        split.update(b"efgh");
        assert_eq!(split.finish(), fletcher32(b"abcdefgh"));
    }

    #[test]
    fn vector_add_wraps() {
        let bus = setup(&[0x200, 0x300, 0x340, 3]);
        for (i, (a, b)) in [(1, 2), (u32::MAX, 2), (10, 20)].into_iter().enumerate() {
            bus.write_word(0x300 + 4 * i as u32, a).unwrap();
            bus.write_word(0x340 + 4 * i as u32, b).unwrap();
        }

        let mut module = VectorAdd::default();
        module.init(Arc::new(bus.clone())).unwrap();
        assert_eq!(module.execute(SP), STATUS_OK);

        let sums: Vec<u32> = (0..3).map(|i| bus.read_word(0x200 + 4 * i).unwrap()).collect();
        assert_eq!(sums, vec![3, 1, 30]);
    }

    #[test]
    fn checksum_writes_result() {
        let bus = setup(&[0x200, 5, 0x300]);
        bus.write(0x200, b"abcde").unwrap();

        let mut module = Checksum::default();
        module.init(Arc::new(bus.clone())).unwrap();
        assert_eq!(module.execute(SP), STATUS_OK);
        assert_eq!(bus.read_word(0x300).unwrap(), 0xF04F_C729);
    }

    #[test]
    fn checksum_spans_several_reads() {
        let data: Vec<u8> = (0..=255_u8).cycle().take(601).collect();
        let bus = setup(&[0x200, 601, 0x180]);
        bus.write(0x200, &data).unwrap();

        let mut module = Checksum::default();
        module.init(Arc::new(bus.clone())).unwrap();
        assert_eq!(module.execute(SP), STATUS_OK);
        assert_eq!(bus.read_word(0x180).unwrap(), fletcher32(&data));
    }

    #[test]
    fn bus_faults_become_negative_status() {
        // Source array runs off the end of RAM
        let bus = setup(&[0x200, 0xFFC, 0x300, 2]);
        let mut module = VectorAdd::default();
        module.init(Arc::new(bus)).unwrap();
        assert_eq!(module.execute(SP), -2);

        let mut module = Checksum::default();
        assert_eq!(module.execute(SP), -1);
    }
}
