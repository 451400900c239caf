//! Tests for error types

use triage_heap::core::{ErrorKind, TriageError};

#[test]
fn test_missing_field_error() {
    let err = TriageError::MissingField("name");
    assert_eq!(format!("{}", err), "missing required field: name");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_severity_error() {
    let err = TriageError::SeverityOutOfRange(11);
    assert_eq!(format!("{}", err), "severity must be between 1 and 10, got 11");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_duplicate_code_error() {
    let err = TriageError::DuplicateCode("BN001".to_string());
    assert_eq!(format!("{}", err), "patient code BN001 already exists");
    assert!(err.is_client_error());
}

#[test]
fn test_invalid_timestamp_error() {
    let err = TriageError::InvalidTimestamp("soon".to_string());
    assert_eq!(
        format!("{}", err),
        "admission time must be an ISO-8601 timestamp: soon"
    );
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.is_client_error());
}

#[test]
fn test_config_error_is_not_client_error() {
    let err = TriageError::Config("log_capacity must be greater than 0".to_string());
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(!err.is_client_error());
}
