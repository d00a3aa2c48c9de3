//! Bridge between the ARM simulator and auxiliary architecture modules.
//!
//! ```text
//!  BAA Rm ──► AuxDispatcher ──► modules[Rm] ──execute(SP)──► BusInterface
//! ```

pub mod bus;
pub mod dispatch;
pub mod module;

pub use bus::{BusError, BusFetch, BusInterface, MemoryBus, SharedBus, STATUS_OK};
pub use dispatch::{AuxDispatcher, DispatchError};
pub use module::{AuxModule, Checksum, Fletcher32, VectorAdd, completion, fletcher32};
