//! Step tracer for replaying heap mutations.
//!
//! A [`StepTrace`] is a side-channel buffer handed by reference to the sift
//! routines. Each recorded step carries a snapshot of heap storage taken at
//! record time, so replaying the steps in order animates the mutation.

use serde::{Deserialize, Serialize};

use crate::core::patient::HeapNode;

/// Machine-readable tag for a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// New node appended at the last position.
    Inserted,
    /// Sift-up is about to start.
    BeginSiftUp,
    /// The heap held a single node after insertion.
    SingleNode,
    /// Node compared with its parent.
    CompareParent,
    /// Node swapped with its parent.
    SwapUp,
    /// Node does not outrank its parent.
    StopSiftUp,
    /// Highest-priority child chosen.
    ChooseChild,
    /// Node swapped with its highest child.
    SwapDown,
    /// No child outranks the node.
    HeapStable,
    /// Root taken as the result of an extraction.
    TakeRoot,
    /// Last node moved into the root slot.
    MoveLastToRoot,
    /// Nothing left after taking the root.
    HeapEmpty,
    /// Node located for removal.
    Located,
}

/// Minimal per-node view captured in each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Storage index.
    pub index: usize,
    /// Patient code.
    pub code: String,
    /// Severity.
    pub severity: u8,
    /// Bucket label.
    pub label: String,
}

/// One recorded comparison or swap event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Step tag.
    pub kind: StepKind,
    /// Short title.
    pub title: String,
    /// Human-readable explanation.
    pub description: String,
    /// Indices to highlight.
    pub focus: Vec<usize>,
    /// Indices swapped in this step, empty when none.
    pub swap: Vec<usize>,
    /// Heap storage after this step.
    pub array: Vec<SnapshotEntry>,
}

/// Trace of the most recent mutating operation.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    steps: Vec<TraceStep>,
}

impl StepTrace {
    /// Create an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Drop all steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Append a step, snapshotting `nodes`.
    pub fn record(
        &mut self,
        kind: StepKind,
        title: impl Into<String>,
        description: impl Into<String>,
        focus: &[usize],
        swap: &[usize],
        nodes: &[HeapNode],
    ) {
        self.steps.push(TraceStep {
            kind,
            title: title.into(),
            description: description.into(),
            focus: focus.to_vec(),
            swap: swap.to_vec(),
            array: snapshot(nodes),
        });
    }

    /// Recorded steps, oldest first.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Step tags in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|step| step.kind).collect()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn snapshot(nodes: &[HeapNode]) -> Vec<SnapshotEntry> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| SnapshotEntry {
            index,
            code: node.patient.code.clone(),
            severity: node.patient.severity,
            label: node.patient.label().to_string(),
        })
        .collect()
}
