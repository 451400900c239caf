//! Tests for builder modules

use triage_heap::builders::SchedulerBuilder;
use triage_heap::config::EngineConfig;
use triage_heap::core::{ErrorKind, SeverityMode};

#[test]
fn test_builder_defaults() {
    let builder = SchedulerBuilder::new();
    assert_eq!(builder.config(), &EngineConfig::default());
    let scheduler = builder.build().unwrap();
    assert!(scheduler.is_empty());
    assert!(scheduler.last_steps().is_empty());
}

#[test]
fn test_builder_rejects_invalid_config() {
    let err = SchedulerBuilder::new()
        .with_config(EngineConfig {
            log_capacity: 0,
            ..EngineConfig::default()
        })
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_seeded_builds_generate_identical_demo_data() {
    let mut a = SchedulerBuilder::new().with_seed(42).build().unwrap();
    let mut b = SchedulerBuilder::new().with_seed(42).build().unwrap();
    a.generate_demo(8, SeverityMode::Random);
    b.generate_demo(8, SeverityMode::Random);

    let codes = |s: &triage_heap::core::TriageScheduler| -> Vec<(String, u8)> {
        s.to_heap_array()
            .into_iter()
            .map(|e| (e.patient.code, e.patient.severity))
            .collect()
    };
    assert_eq!(codes(&a), codes(&b));
}

#[test]
fn test_build_shared() {
    let shared = SchedulerBuilder::new().build_shared().unwrap();
    shared
        .lock()
        .add_patient("BN001", "A", "2024-01-01T08:00:00", 5)
        .unwrap();
    assert_eq!(shared.lock().len(), 1);
}
