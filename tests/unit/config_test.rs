//! Tests for configuration validation

use std::time::Duration;

use slotgate::config::{PoolSetConfig, SlotPoolConfig};

#[test]
fn pool_config_valid() {
    let cfg = SlotPoolConfig {
        capacity: 4,
        window_ms: 250,
    };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.window(), Duration::from_millis(250));
}

#[test]
fn pool_config_zero_capacity_rejected() {
    let cfg = SlotPoolConfig {
        capacity: 0,
        window_ms: 250,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn pool_config_zero_window_allowed() {
    let cfg = SlotPoolConfig {
        capacity: 1,
        window_ms: 0,
    };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.window(), Duration::ZERO);
}

#[test]
fn pool_set_requires_at_least_one_pool() {
    let cfg = PoolSetConfig {
        pools: std::collections::HashMap::new(),
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn pool_set_names_invalid_member() {
    let mut pools = std::collections::HashMap::new();
    pools.insert(
        "crawler".to_string(),
        SlotPoolConfig {
            capacity: 0,
            window_ms: 1000,
        },
    );
    let err = PoolSetConfig { pools }.validate().unwrap_err();
    assert!(err.contains("crawler"));
}

#[test]
fn pool_set_from_json() {
    let json = r#"{
        "pools": {
            "crawler": { "capacity": 2, "window_ms": 1000 },
            "api": { "capacity": 10, "window_ms": 100 }
        }
    }"#;
    let cfg = PoolSetConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.pools.len(), 2);
    assert_eq!(cfg.pools["crawler"].capacity, 2);
}

#[test]
fn pool_set_from_json_rejects_invalid() {
    let json = r#"{ "pools": { "bad": { "capacity": 0, "window_ms": 0 } } }"#;
    assert!(PoolSetConfig::from_json_str(json).is_err());
}
