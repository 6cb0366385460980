//! Core slot pool, admission protocol, and window-timing arithmetic.

pub mod error;
pub mod slot_pool;

pub use error::{AppResult, PoolError};
pub use slot_pool::{Admission, DoneCallback, SlotPool, Spawn};
