//! Tests for the API-facing models

use triage_heap::builders::SchedulerBuilder;
use triage_heap::core::SeverityMode;
use triage_heap::runtime::{
    build_state, health, run_demo, submit_patient, AddPatientRequest, DemoRequest,
};

#[test]
fn test_add_request_from_json() {
    let req: AddPatientRequest = serde_json::from_str(
        r#"{"code": "BN001", "name": "A", "admittedAt": "2024-01-01T08:00:00", "severity": 5}"#,
    )
    .unwrap();
    assert_eq!(req.code, "BN001");
    assert_eq!(req.admitted_at, "2024-01-01T08:00:00");
    assert_eq!(req.severity, 5);
}

#[test]
fn test_add_request_missing_fields_fail_validation() {
    let shared = SchedulerBuilder::new().build_shared().unwrap();
    let req: AddPatientRequest = serde_json::from_str(r#"{"code": "BN001"}"#).unwrap();
    let err = submit_patient(&shared, &req).unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(shared.lock().len(), 0);
}

#[test]
fn test_demo_request_severity_modes() {
    let req: DemoRequest = serde_json::from_str(r#"{"count": 3, "severity": "random"}"#).unwrap();
    assert_eq!(req.severity_mode(), SeverityMode::Random);

    let req: DemoRequest = serde_json::from_str(r#"{"severity": 7}"#).unwrap();
    assert_eq!(req.severity_mode(), SeverityMode::Fixed(7));
    assert_eq!(req.count, None);

    let req: DemoRequest = serde_json::from_str(r#"{"severity": "9"}"#).unwrap();
    assert_eq!(req.severity_mode(), SeverityMode::Fixed(9));

    let req: DemoRequest = serde_json::from_str(r#"{"severity": 42}"#).unwrap();
    assert_eq!(req.severity_mode(), SeverityMode::Random);

    let req: DemoRequest = serde_json::from_str(r#"{"severity": [1]}"#).unwrap();
    assert_eq!(req.severity_mode(), SeverityMode::Random);
}

#[test]
fn test_run_demo_with_fixed_severity() {
    let shared = SchedulerBuilder::new().with_seed(3).build_shared().unwrap();
    let req: DemoRequest = serde_json::from_str(r#"{"count": 4, "severity": 6}"#).unwrap();
    let inserted = run_demo(&shared, &req);
    let scheduler = shared.lock();
    assert_eq!(scheduler.len(), inserted);
    assert!(scheduler
        .to_heap_array()
        .iter()
        .all(|entry| entry.patient.severity == 6));
}

#[test]
fn test_state_bundle_serializes_all_views() {
    let shared = SchedulerBuilder::new().build_shared().unwrap();
    let req = AddPatientRequest {
        code: "BN001".to_string(),
        name: "A".to_string(),
        admitted_at: "2024-01-01T08:00:00".to_string(),
        severity: 10,
    };
    submit_patient(&shared, &req).unwrap();

    let state = build_state(&shared.lock());
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["queue"][0]["code"], "BN001");
    assert_eq!(json["heapArray"][0]["index"], 0);
    assert_eq!(json["heapArray"][0]["label"], "Critical");
    assert_eq!(json["stats"]["total"], 1);
    assert_eq!(json["logs"].as_array().unwrap().len(), 1);
    assert_eq!(json["steps"][0]["kind"], "inserted");
    assert_eq!(json["severityMapping"][0]["range"], "10");

    assert!(health(&shared).ok);
    assert_eq!(health(&shared).patients, 1);
}
