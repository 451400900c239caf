//! Binary max-heap of patients with traced sift routines.
//!
//! Storage is an implicit complete binary tree: the node at `i` has children
//! at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. No child ever
//! outranks its parent under [`higher_priority`].

use crate::core::patient::HeapNode;
use crate::core::priority::higher_priority;
use crate::core::trace::{StepKind, StepTrace};

const fn parent_of(index: usize) -> usize {
    (index - 1) / 2
}

/// Heap storage for [`HeapNode`]s.
#[derive(Debug, Clone, Default)]
pub struct PatientHeap {
    nodes: Vec<HeapNode>,
}

impl PatientHeap {
    /// Create an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Nodes in storage order.
    #[must_use]
    pub fn nodes(&self) -> &[HeapNode] {
        &self.nodes
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Root node, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&HeapNode> {
        self.nodes.first()
    }

    /// Storage index of the node with `code`.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.patient.code == code)
    }

    /// Whether a live node uses `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Append at the last position without repairing. Returns the new index.
    pub fn push(&mut self, node: HeapNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Remove and return the last node.
    pub fn pop_last(&mut self) -> Option<HeapNode> {
        self.nodes.pop()
    }

    /// Overwrite the slot at `index`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn place(&mut self, index: usize, node: HeapNode) -> HeapNode {
        std::mem::replace(&mut self.nodes[index], node)
    }

    /// Whether the node at `index` outranks its parent. False at the root.
    #[must_use]
    pub fn outranks_parent(&self, index: usize) -> bool {
        index > 0
            && index < self.nodes.len()
            && higher_priority(&self.nodes[index], &self.nodes[parent_of(index)])
    }

    /// Move the node at `index` up until its parent outranks it.
    pub fn sift_up(&mut self, mut index: usize, trace: &mut StepTrace) {
        while index > 0 {
            let parent = parent_of(index);
            let child_code = self.nodes[index].patient.code.clone();
            let parent_code = self.nodes[parent].patient.code.clone();
            trace.record(
                StepKind::CompareParent,
                "Compare with parent",
                format!("Compare {child_code} with parent {parent_code}."),
                &[index, parent],
                &[],
                &self.nodes,
            );
            if higher_priority(&self.nodes[index], &self.nodes[parent]) {
                self.nodes.swap(index, parent);
                trace.record(
                    StepKind::SwapUp,
                    "Swap (sift-up)",
                    format!("{child_code} has higher priority, swap with {parent_code}."),
                    &[index, parent],
                    &[index, parent],
                    &self.nodes,
                );
                index = parent;
            } else {
                trace.record(
                    StepKind::StopSiftUp,
                    "Stop sift-up",
                    format!("{child_code} does not outrank its parent, stop."),
                    &[index, parent],
                    &[],
                    &self.nodes,
                );
                break;
            }
        }
    }

    /// Move the node at `index` down until no child outranks it.
    pub fn sift_down(&mut self, mut index: usize, trace: &mut StepTrace) {
        let size = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut highest = index;

            if left < size && higher_priority(&self.nodes[left], &self.nodes[highest]) {
                highest = left;
            }
            if right < size && higher_priority(&self.nodes[right], &self.nodes[highest]) {
                highest = right;
            }

            if highest == index {
                trace.record(
                    StepKind::HeapStable,
                    "Heap stable",
                    "No child has higher priority.",
                    &[index],
                    &[],
                    &self.nodes,
                );
                break;
            }

            trace.record(
                StepKind::ChooseChild,
                "Choose highest child",
                format!("Highest-priority child is at index {highest}."),
                &[index, highest],
                &[],
                &self.nodes,
            );
            self.nodes.swap(index, highest);
            trace.record(
                StepKind::SwapDown,
                "Swap (sift-down)",
                "Push the node down to restore the heap property.",
                &[index, highest],
                &[index, highest],
                &self.nodes,
            );
            index = highest;
        }
    }

    /// Check the max-heap property over the whole storage.
    #[must_use]
    pub fn is_valid_heap(&self) -> bool {
        (1..self.nodes.len()).all(|index| !self.outranks_parent(index))
    }
}
