//! Pool configuration structures.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a single slot pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPoolConfig {
    /// Maximum number of simultaneously held slots.
    pub capacity: usize,
    /// Minimum slot hold duration in milliseconds. Zero releases slots as
    /// soon as the job body finishes.
    pub window_ms: u64,
}

impl SlotPoolConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Hold window as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Load configuration from `SLOTGATE_CAPACITY` and `SLOTGATE_WINDOW_MS`,
    /// honoring a `.env` file when present. The window defaults to zero when
    /// unset.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let capacity = std::env::var("SLOTGATE_CAPACITY")
            .map_err(|_| "SLOTGATE_CAPACITY not set".to_string())?
            .parse::<usize>()
            .map_err(|e| format!("SLOTGATE_CAPACITY invalid: {e}"))?;
        let window_ms = match std::env::var("SLOTGATE_WINDOW_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("SLOTGATE_WINDOW_MS invalid: {e}"))?,
            Err(_) => 0,
        };
        let cfg = Self {
            capacity,
            window_ms,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Named set of pool configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSetConfig {
    /// Map of pool name to configuration.
    pub pools: HashMap<String, SlotPoolConfig>,
}

impl PoolSetConfig {
    /// Validate all pools and ensure at least one pool exists.
    pub fn validate(&self) -> Result<(), String> {
        if self.pools.is_empty() {
            return Err("at least one pool must be defined".into());
        }
        for (name, pool) in &self.pools {
            pool.validate()
                .map_err(|e| format!("pool `{name}` invalid: {e}"))?;
        }
        Ok(())
    }

    /// Parse a pool-set configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
