//! Core triage engine: comparator, heap, tracer, log and views.

pub mod demo;
pub mod error;
pub mod event_log;
pub mod heap;
pub mod patient;
pub mod priority;
pub mod scheduler;
pub mod severity;
pub mod trace;

pub use demo::SeverityMode;
pub use error::{AppResult, ErrorKind, TriageError};
pub use event_log::{EventLog, LogEntry};
pub use heap::PatientHeap;
pub use patient::{HeapEntry, HeapNode, Patient, PatientRecord};
pub use priority::{higher_priority, priority_cmp};
pub use scheduler::{BucketCount, SharedScheduler, Stats, TriageScheduler};
pub use severity::{severity_label, SeverityBucket, SeverityMapping, SEVERITY_BUCKETS};
pub use trace::{SnapshotEntry, StepKind, StepTrace, TraceStep};
