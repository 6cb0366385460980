//! Configuration models for pools and pool sets.

pub mod pool;

pub use pool::{PoolSetConfig, SlotPoolConfig};
