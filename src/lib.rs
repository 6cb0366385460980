//! # Slotgate
//!
//! A bounded-concurrency admission gate with enforced minimum per-slot hold
//! windows, built on Tokio.
//!
//! Slotgate controls how fast work enters a system. A [`core::SlotPool`]
//! owns a fixed number of slots; at most `capacity` jobs are in flight at
//! any instant, and each admitted job's slot stays held until a fixed
//! `window` has elapsed since the slot was acquired, even when the job
//! finishes early. The result is rate-limited, evenly paced throughput:
//!
//! - **Short jobs** are throttled to the window cadence.
//! - **Long jobs** are never double-penalized - when execution already
//!   exceeded the window, the slot is released as soon as the job ends.
//! - **Slots never leak** - release is RAII-guaranteed, including when the
//!   job body panics.
//!
//! ## Admission modes
//!
//! Two entry points reflect two intentional modes of the same primitive:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use slotgate::core::SlotPool;
//!
//! let pool = SlotPool::new(2, Duration::from_secs(1));
//!
//! // Fire-and-forget: resolves once the slot is acquired, not when the
//! // job finishes.
//! pool.admit(async { fetch_page("https://example.com/a").await }).await;
//!
//! // Signal-returning: returns immediately; await the signal to learn
//! // when admission happened, and pass a hook to learn when the job and
//! // its window have both completed.
//! let admission = pool.admit_with_signal(
//!     async { fetch_page("https://example.com/b").await },
//!     Some(Box::new(|| println!("slot cycled"))),
//! );
//! admission.await;
//! ```
//!
//! The pool is purely an in-process primitive: it performs no I/O, knows
//! nothing about the jobs it hosts, and exposes no retry, cancellation, or
//! persistence machinery. Callers needing those build them on top by
//! resubmitting jobs.
//!
//! For complete examples, see `tests/slot_pool_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core slot pool, admission protocol, and window-timing arithmetic.
pub mod core;
/// Configuration models for pools and pool sets.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Runtime adapters implementing the spawn seam.
pub mod runtime;
/// Shared utilities.
pub mod util;
