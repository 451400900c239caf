//! Tests for configuration validation

use triage_heap::config::EngineConfig;

#[test]
fn test_default_config_is_valid() {
    let cfg = EngineConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.log_view_limit, 120);
    assert_eq!(cfg.log_capacity, 1000);
    assert_eq!(cfg.demo_window_minutes, 120);
}

#[test]
fn test_zero_log_capacity_invalid() {
    let cfg = EngineConfig {
        log_capacity: 0,
        log_view_limit: 0,
        demo_window_minutes: 120,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_zero_view_limit_invalid() {
    let cfg = EngineConfig {
        log_capacity: 10,
        log_view_limit: 0,
        demo_window_minutes: 120,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_view_limit_above_capacity_invalid() {
    let cfg = EngineConfig {
        log_capacity: 10,
        log_view_limit: 20,
        demo_window_minutes: 120,
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("log_view_limit"));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "log_capacity": 500,
        "log_view_limit": 50,
        "demo_window_minutes": 30
    }"#;

    let cfg = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.log_capacity, 500);
    assert_eq!(cfg.log_view_limit, 50);
    assert_eq!(cfg.demo_window_minutes, 30);
}

#[test]
fn test_config_from_partial_json_uses_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{ "log_view_limit": 10 }"#).unwrap();
    assert_eq!(cfg.log_view_limit, 10);
    assert_eq!(cfg.log_capacity, 1000);
}

#[test]
fn test_config_from_bad_json() {
    let err = EngineConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}
