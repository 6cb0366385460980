//! Tests for pool builders

use std::time::Duration;

use slotgate::builders::{build_pool, build_pools};
use slotgate::config::{PoolSetConfig, SlotPoolConfig};
use slotgate::runtime::TokioSpawner;

#[tokio::test]
async fn build_pool_from_valid_config() {
    let cfg = SlotPoolConfig {
        capacity: 2,
        window_ms: 100,
    };
    let pool = build_pool(&cfg, TokioSpawner::current()).unwrap();
    assert_eq!(pool.capacity(), 2);
    assert_eq!(pool.window(), Duration::from_millis(100));
}

#[tokio::test]
async fn build_pool_rejects_zero_capacity() {
    let cfg = SlotPoolConfig {
        capacity: 0,
        window_ms: 100,
    };
    let err = build_pool(&cfg, TokioSpawner::current()).unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[tokio::test]
async fn build_pools_by_name() {
    let json = r#"{
        "pools": {
            "crawler": { "capacity": 2, "window_ms": 1000 },
            "api": { "capacity": 10, "window_ms": 100 }
        }
    }"#;
    let cfg = PoolSetConfig::from_json_str(json).unwrap();
    let pools = build_pools(&cfg, TokioSpawner::current()).unwrap();
    assert_eq!(pools.len(), 2);
    assert_eq!(pools["crawler"].capacity(), 2);
    assert_eq!(pools["api"].window(), Duration::from_millis(100));
}
