//! Tests for the event log

use triage_heap::core::{EventLog, LogEntry};

fn entry(message: &str) -> LogEntry {
    LogEntry {
        time: "08:00:00".to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_push_and_recent() {
    let mut log = EventLog::new(10);
    log.push(entry("first"));
    log.push(entry("second"));

    let recent = log.recent(10);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].message, "second");
    assert_eq!(recent[1].message, "first");
    assert_eq!(recent[0].time, "08:00:00");
}

#[test]
fn test_log_overflow() {
    let mut log = EventLog::new(2);
    log.push(entry("evt1"));
    log.push(entry("evt2"));
    log.push(entry("evt3"));

    let recent = log.recent(5);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].message, "evt3");
    assert_eq!(recent[1].message, "evt2"); // evt1 popped
}

#[test]
fn test_clear() {
    let mut log = EventLog::new(4);
    log.record("something");
    assert!(!log.is_empty());
    log.clear();
    assert!(log.is_empty());
    assert!(log.recent(4).is_empty());
}
