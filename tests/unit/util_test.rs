//! Tests for utility functions

use chrono::Utc;
use triage_heap::util::{clock_label, init_tracing, utc_now_naive};

#[test]
fn test_utc_now_naive_tracks_utc_clock() {
    let before = Utc::now().timestamp();
    let naive = utc_now_naive().and_utc().timestamp();
    let after = Utc::now().timestamp();
    assert!(before <= naive && naive <= after);
}

#[test]
fn test_clock_label_format() {
    let label = clock_label();
    let parts: Vec<&str> = label.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
