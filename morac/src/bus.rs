//! Memory side of the auxiliary architecture bridge.
//!
//! Modules never see the simulator's memory directly, every argument and
//! result crosses a [`BusInterface`]. Failed transfers carry a status that
//! mirrors the transaction response codes of the simulator's bus:
//!
//! | Status | Meaning          |
//! |--------|------------------|
//! | `1`    | ok               |
//! | `-1`   | generic error    |
//! | `-2`   | address error    |

use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

use armdecode::InstructionFetch;
use thiserror::Error;

/// Status an [`crate::AuxModule`] returns when it completes.
pub const STATUS_OK: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("no device at {address:#010X} for a {len} byte access")]
    Unmapped { address: u32, len: usize },
    #[error("module used before init")]
    NotInitialised,
}

impl BusError {
    /// Negative response status of the failed transfer.
    #[must_use]
    pub const fn status(&self) -> i32 {
        match self {
            Self::NotInitialised => -1,
            Self::Unmapped { .. } => -2,
        }
    }
}

/// Byte addressed, little-endian access to simulated memory.
pub trait BusInterface {
    /// Fills `data` with the bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Fails when any byte of the range is not backed by memory.
    fn read(&self, address: u32, data: &mut [u8]) -> Result<(), BusError>;

    /// Stores `data` starting at `address`.
    ///
    /// # Errors
    ///
    /// Fails when any byte of the range is not backed by memory.
    fn write(&self, address: u32, data: &[u8]) -> Result<(), BusError>;

    /// # Errors
    ///
    /// See [`BusInterface::read`].
    fn read_word(&self, address: u32) -> Result<u32, BusError> {
        let mut bytes = [0; 4];
        self.read(address, &mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// # Errors
    ///
    /// See [`BusInterface::read`].
    fn read_half_word(&self, address: u32) -> Result<u16, BusError> {
        let mut bytes = [0; 2];
        self.read(address, &mut bytes)?;
        Ok(u16::from_le_bytes(bytes))
    }

    /// # Errors
    ///
    /// See [`BusInterface::write`].
    fn write_word(&self, address: u32, value: u32) -> Result<(), BusError> {
        self.write(address, &value.to_le_bytes())
    }
}

/// A bus handle modules can keep after `init`.
pub type SharedBus = Arc<dyn BusInterface + Send + Sync>;

/// Flat RAM mapped at `base`. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MemoryBus {
    base: u32,
    ram: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBus {
    #[must_use]
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            base,
            ram: Arc::new(Mutex::new(vec![0; size])),
        }
    }

    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ram.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn range(&self, address: u32, len: usize, size: usize) -> Result<Range<usize>, BusError> {
        let unmapped = BusError::Unmapped { address, len };
        let start = address.checked_sub(self.base).ok_or(unmapped)? as usize;
        let end = start.checked_add(len).ok_or(unmapped)?;

        if end > size {
            tracing::warn!("bus access outside RAM: {address:#010X} + {len}");
            return Err(unmapped);
        }
        Ok(start..end)
    }
}

impl BusInterface for MemoryBus {
    fn read(&self, address: u32, data: &mut [u8]) -> Result<(), BusError> {
        let ram = self.ram.lock().unwrap_or_else(PoisonError::into_inner);
        let range = self.range(address, data.len(), ram.len())?;
        data.copy_from_slice(&ram[range]);
        Ok(())
    }

    fn write(&self, address: u32, data: &[u8]) -> Result<(), BusError> {
        let mut ram = self.ram.lock().unwrap_or_else(PoisonError::into_inner);
        let range = self.range(address, data.len(), ram.len())?;
        ram[range].copy_from_slice(data);
        Ok(())
    }
}

/// Instruction fetches over any bus.
pub struct BusFetch<'a>(pub &'a dyn BusInterface);

impl InstructionFetch for BusFetch<'_> {
    type Error = BusError;

    fn fetch_word(&mut self, address: u32) -> Result<u32, BusError> {
        self.0.read_word(address)
    }

    fn fetch_halfword(&mut self, address: u32) -> Result<u16, BusError> {
        self.0.read_half_word(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_are_little_endian() {
        let bus = MemoryBus::new(0x1000, 16);
        bus.write_word(0x1004, 0xDEAD_BEEF).unwrap();

        let mut bytes = [0; 4];
        bus.read(0x1004, &mut bytes).unwrap();
        assert_eq!(bytes, [0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(bus.read_word(0x1004).unwrap(), 0xDEAD_BEEF);
        assert_eq!(bus.read_half_word(0x1006).unwrap(), 0xDEAD);
    }

    #[test]
    fn accesses_outside_ram_fail() {
        let bus = MemoryBus::new(0x1000, 16);

        assert_eq!(
            bus.read_word(0x0FFE),
            Err(BusError::Unmapped {
                address: 0x0FFE,
                len: 4
            })
        );
        assert_eq!(
            bus.write_word(0x100E, 0),
            Err(BusError::Unmapped {
                address: 0x100E,
                len: 4
            })
        );
        assert!(bus.write_word(0x100C, 0).is_ok());
        assert!(bus.read_word(u32::MAX).is_err());
    }

    #[test]
    fn clones_share_storage() {
        let bus = MemoryBus::new(0, 8);
        let other = bus.clone();

        other.write(2, &[1, 2, 3]).unwrap();
        assert_eq!(bus.read_word(0).unwrap(), 0x0201_0000);
        assert_eq!(bus.len(), 8);
    }

    #[test]
    fn status_codes() {
        assert_eq!(BusError::NotInitialised.status(), -1);
        assert_eq!(BusError::Unmapped { address: 0, len: 1 }.status(), -2);
    }

    #[test]
    fn fetches_through_the_bus() {
        let bus = MemoryBus::new(0, 8);
        bus.write_word(0, 0xE12F_FF41).unwrap();

        let mut fetch = BusFetch(&bus);
        assert_eq!(fetch.fetch_word(0), Ok(0xE12F_FF41));
        assert_eq!(fetch.fetch_halfword(2), Ok(0xE12F));
        assert!(fetch.fetch_word(6).is_err());
    }
}
