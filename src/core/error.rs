//! Error types for pool construction.
//!
//! The pool itself has no runtime error taxonomy: admission waits, it never
//! fails, and job failures propagate untouched. Errors only exist on the
//! configuration path.

use thiserror::Error;

/// Errors produced when building pools from configuration.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Configuration failed validation or parsing.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
