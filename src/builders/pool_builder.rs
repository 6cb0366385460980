//! Builders to construct slot pools from configuration.

use std::collections::HashMap;

use crate::config::{PoolSetConfig, SlotPoolConfig};
use crate::core::{PoolError, SlotPool, Spawn};

/// Build a single pool from validated configuration.
pub fn build_pool<S>(cfg: &SlotPoolConfig, spawner: S) -> Result<SlotPool<S>, PoolError>
where
    S: Spawn,
{
    cfg.validate().map_err(PoolError::InvalidConfig)?;
    Ok(SlotPool::with_spawner(cfg.capacity, cfg.window(), spawner))
}

/// Build named pools from a pool-set configuration.
pub fn build_pools<S>(
    cfg: &PoolSetConfig,
    spawner: S,
) -> Result<HashMap<String, SlotPool<S>>, PoolError>
where
    S: Spawn + Clone,
{
    cfg.validate().map_err(PoolError::InvalidConfig)?;
    let mut pools = HashMap::new();
    for (name, pool_cfg) in &cfg.pools {
        pools.insert(
            name.clone(),
            SlotPool::with_spawner(pool_cfg.capacity, pool_cfg.window(), spawner.clone()),
        );
    }
    Ok(pools)
}
