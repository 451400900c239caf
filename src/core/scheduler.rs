//! Triage scheduler: the priority heap engine with tracing, logging and
//! derived views.
//!
//! Every mutating call replaces the step trace, runs the heap algorithm and
//! appends one log entry. Views are recomputed from current heap state on
//! each call.
//!
//! The engine has no internal locking. Callers sharing one instance across
//! threads serialise access through [`SharedScheduler`].

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::demo::{draw_admission, draw_code, draw_name, SeverityMode};
use crate::core::event_log::{EventLog, LogEntry};
use crate::core::heap::PatientHeap;
use crate::core::patient::{parse_timestamp, HeapEntry, HeapNode, Patient, PatientRecord};
use crate::core::priority::priority_cmp;
use crate::core::severity::{
    severity_label, severity_mapping, SeverityMapping, MAX_SEVERITY, MIN_SEVERITY,
    SEVERITY_BUCKETS,
};
use crate::core::trace::{StepKind, StepTrace, TraceStep};
use crate::core::TriageError;
use crate::util::clock::utc_now_naive;

/// Thread-safe handle; one mutation at a time.
pub type SharedScheduler = Arc<Mutex<TriageScheduler>>;

/// Patient count for one severity bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCount {
    /// Bucket label.
    pub label: String,
    /// Live patients in the bucket.
    pub count: usize,
}

/// Live count plus per-bucket counts, in bucket-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Live patients.
    pub total: usize,
    /// One entry per bucket, zero counts included.
    pub buckets: Vec<BucketCount>,
}

impl Stats {
    /// Count for `label`, or `None` for an unknown label.
    #[must_use]
    pub fn count(&self, label: &str) -> Option<usize> {
        self.buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map(|bucket| bucket.count)
    }
}

/// Emergency-room priority engine.
#[derive(Debug)]
pub struct TriageScheduler {
    config: EngineConfig,
    heap: PatientHeap,
    next_order: u64,
    log: EventLog,
    trace: StepTrace,
    rng: StdRng,
}

impl Default for TriageScheduler {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl TriageScheduler {
    /// Create an engine with an OS-seeded demo generator.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine whose demo generator is seeded with `seed`.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        let log = EventLog::new(config.log_capacity);
        Self {
            config,
            heap: PatientHeap::new(),
            next_order: 1,
            log,
            trace: StepTrace::new(),
            rng,
        }
    }

    /// Wrap into a [`SharedScheduler`].
    #[must_use]
    pub fn into_shared(self) -> SharedScheduler {
        Arc::new(Mutex::new(self))
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Live patient count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no patients are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Underlying heap, for inspection.
    #[must_use]
    pub const fn heap(&self) -> &PatientHeap {
        &self.heap
    }

    /// Validate and insert a patient, then sift it up.
    ///
    /// # Errors
    ///
    /// - [`TriageError::MissingField`] when `code`, `name` or `admitted_at` is blank.
    /// - [`TriageError::SeverityOutOfRange`] when `severity` is outside 1-10.
    /// - [`TriageError::DuplicateCode`] when the trimmed code is already live.
    /// - [`TriageError::InvalidTimestamp`] when `admitted_at` is not ISO-8601.
    ///
    /// State is untouched on error.
    pub fn add_patient(
        &mut self,
        code: &str,
        name: &str,
        admitted_at: &str,
        severity: i64,
    ) -> Result<PatientRecord, TriageError> {
        let code = code.trim();
        let name = name.trim();
        let admitted_at = admitted_at.trim();
        if code.is_empty() {
            return Err(TriageError::MissingField("code"));
        }
        if name.is_empty() {
            return Err(TriageError::MissingField("name"));
        }
        if admitted_at.is_empty() {
            return Err(TriageError::MissingField("admitted_at"));
        }
        let severity = u8::try_from(severity)
            .ok()
            .filter(|value| (MIN_SEVERITY..=MAX_SEVERITY).contains(value))
            .ok_or(TriageError::SeverityOutOfRange(severity))?;
        if self.heap.contains(code) {
            return Err(TriageError::DuplicateCode(code.to_string()));
        }
        let admitted_ts = parse_timestamp(admitted_at)?;

        let node = HeapNode {
            patient: Patient {
                code: code.to_string(),
                name: name.to_string(),
                admitted_at: admitted_at.to_string(),
                severity,
            },
            admitted_ts,
            order: self.next_order,
        };
        self.next_order += 1;
        let record = node.patient.to_record();

        self.trace.clear();
        let index = self.heap.push(node);
        self.trace.record(
            StepKind::Inserted,
            "Step 1: Append to array",
            format!("Append {code} at the end of the heap array."),
            &[index],
            &[],
            self.heap.nodes(),
        );
        if index > 0 {
            self.trace.record(
                StepKind::BeginSiftUp,
                "Step 2: Sift-up",
                "Compare with parent to keep the max-heap property.",
                &[index],
                &[],
                self.heap.nodes(),
            );
            self.heap.sift_up(index, &mut self.trace);
        } else {
            self.trace.record(
                StepKind::SingleNode,
                "Single node",
                "The heap has one node, no sift-up needed.",
                &[0],
                &[],
                self.heap.nodes(),
            );
        }

        self.log
            .record(format!("Added patient {code} (Level {severity})."));
        tracing::info!(code, severity, size = self.heap.len(), "patient added");
        Ok(record)
    }

    /// Remove and return the highest-priority patient, or `None` when empty.
    pub fn extract_next(&mut self) -> Option<PatientRecord> {
        self.trace.clear();
        let Some(root) = self.heap.peek() else {
            tracing::debug!("extract on empty heap");
            return None;
        };
        let root_code = root.patient.code.clone();
        self.trace.record(
            StepKind::TakeRoot,
            "Step 1: Take root",
            format!("Take highest-priority patient {root_code}."),
            &[0],
            &[],
            self.heap.nodes(),
        );

        let last = self.heap.pop_last()?;
        let removed = if self.heap.is_empty() {
            self.trace.record(
                StepKind::HeapEmpty,
                "Heap empty",
                "No nodes remain after taking the root.",
                &[],
                &[],
                self.heap.nodes(),
            );
            last
        } else {
            let removed = self.heap.place(0, last);
            self.trace.record(
                StepKind::MoveLastToRoot,
                "Step 2: Move last node to root",
                "Sift down to restore the heap.",
                &[0],
                &[],
                self.heap.nodes(),
            );
            self.heap.sift_down(0, &mut self.trace);
            removed
        };

        let patient = removed.patient;
        self.log.record(format!(
            "Processed patient {} (Level {}).",
            patient.code, patient.severity
        ));
        tracing::info!(code = %patient.code, size = self.heap.len(), "patient extracted");
        Some(patient.to_record())
    }

    /// Remove the patient with `code`, or return `None` without touching any
    /// state when absent.
    ///
    /// The last node fills the vacated slot and is sifted up if it outranks
    /// its new parent, down otherwise.
    pub fn remove_patient(&mut self, code: &str) -> Option<PatientRecord> {
        let code = code.trim();
        let Some(index) = self.heap.position(code) else {
            tracing::debug!(code, "remove: patient not found");
            return None;
        };

        self.trace.clear();
        self.trace.record(
            StepKind::Located,
            "Locate patient",
            format!("Found {code} at index {index}, replace with last node then heapify."),
            &[index],
            &[],
            self.heap.nodes(),
        );
        let last = self.heap.pop_last()?;
        let removed = if index < self.heap.len() {
            let removed = self.heap.place(index, last);
            if self.heap.outranks_parent(index) {
                self.heap.sift_up(index, &mut self.trace);
            } else {
                self.heap.sift_down(index, &mut self.trace);
            }
            removed
        } else {
            last
        };

        self.log.record(format!("Removed patient {code}."));
        tracing::info!(code, size = self.heap.len(), "patient removed");
        Some(removed.patient.to_record())
    }

    /// Look up a live patient by code.
    #[must_use]
    pub fn get_patient(&self, code: &str) -> Option<PatientRecord> {
        let code = code.trim();
        self.heap
            .nodes()
            .iter()
            .find(|node| node.patient.code == code)
            .map(|node| node.patient.to_record())
    }

    /// Highest-priority patient without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<PatientRecord> {
        self.heap.peek().map(|node| node.patient.to_record())
    }

    /// Insert `count` synthetic patients, skipping any draw that fails
    /// validation. Returns how many were inserted.
    ///
    /// Admission times are drawn from the UTC clock and written without a
    /// zone, so they rank correctly against offset-qualified inputs.
    pub fn generate_demo(&mut self, count: usize, mode: SeverityMode) -> usize {
        let now = utc_now_naive();
        let mut inserted = 0;
        for _ in 0..count {
            let code = draw_code(&mut self.rng, self.heap.len());
            let name = draw_name(&mut self.rng);
            let severity = mode.draw(&mut self.rng);
            let admitted_at =
                draw_admission(&mut self.rng, now, self.config.demo_window_minutes);
            match self.add_patient(&code, &name, &admitted_at, i64::from(severity)) {
                Ok(_) => inserted += 1,
                Err(err) => tracing::debug!(%code, error = %err, "demo patient skipped"),
            }
        }
        tracing::info!(requested = count, inserted, "demo patients generated");
        inserted
    }

    /// Clear patients, log and trace, and restart insertion order at 1.
    pub fn reset(&mut self) {
        self.heap.clear();
        self.log.clear();
        self.trace.clear();
        self.next_order = 1;
        tracing::info!("scheduler reset");
    }

    /// Drop every log entry.
    pub fn clear_logs(&mut self) {
        self.log.clear();
    }

    /// Live patients in service order, computed by sorting a copy.
    #[must_use]
    pub fn to_priority_list(&self) -> Vec<PatientRecord> {
        let mut ordered: Vec<&HeapNode> = self.heap.nodes().iter().collect();
        ordered.sort_by(|a, b| priority_cmp(a, b));
        ordered
            .into_iter()
            .map(|node| node.patient.to_record())
            .collect()
    }

    /// Live patients in heap storage order, tagged with their index.
    #[must_use]
    pub fn to_heap_array(&self) -> Vec<HeapEntry> {
        self.heap
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| HeapEntry {
                index,
                patient: node.patient.to_record(),
            })
            .collect()
    }

    /// Live total and per-bucket counts.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let mut buckets: Vec<BucketCount> = SEVERITY_BUCKETS
            .iter()
            .map(|bucket| BucketCount {
                label: bucket.label.to_string(),
                count: 0,
            })
            .collect();
        for node in self.heap.nodes() {
            let label = severity_label(node.patient.severity);
            if let Some(bucket) = buckets.iter_mut().find(|b| b.label == label) {
                bucket.count += 1;
            }
        }
        Stats {
            total: self.heap.len(),
            buckets,
        }
    }

    /// Static severity-to-label table.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn severity_mapping(&self) -> Vec<SeverityMapping> {
        severity_mapping()
    }

    /// Most recent log entries, newest first.
    #[must_use]
    pub fn logs(&self) -> Vec<LogEntry> {
        self.log.recent(self.config.log_view_limit)
    }

    /// Trace of the most recent mutating call.
    #[must_use]
    pub fn last_steps(&self) -> &[TraceStep] {
        self.trace.steps()
    }

    /// Step tags of the most recent mutating call.
    #[must_use]
    pub fn last_step_kinds(&self) -> Vec<StepKind> {
        self.trace.kinds()
    }
}
