//! Infrastructure layer: record storage and the kitchen service.
//!
//! Domain crates only define records and pure rules. This crate wires them to
//! a [`RecordStore`] and exposes the operations callers actually use,
//! including sale creation with its stock-deduction side effect.

pub mod clock;
pub mod kitchen;
pub mod store;


pub use clock::{Clock, FixedClock, SystemClock};
pub use kitchen::{InMemoryKitchen, Kitchen, KitchenError};
pub use store::{InMemoryRecordStore, RecordStore, StoreError};
