//! Three-key priority rule shared by the heap and the sorted view.
//!
//! Keys, first non-tie decides:
//! 1. higher severity,
//! 2. earlier admission timestamp,
//! 3. smaller insertion order.
//!
//! `order` is unique among live nodes, so no two live nodes ever tie.

use std::cmp::Ordering;

use crate::core::patient::HeapNode;

/// True iff `a` must sit above `b` in the heap.
#[must_use]
pub fn higher_priority(a: &HeapNode, b: &HeapNode) -> bool {
    if a.patient.severity != b.patient.severity {
        return a.patient.severity > b.patient.severity;
    }
    if a.admitted_ts != b.admitted_ts {
        return a.admitted_ts < b.admitted_ts;
    }
    a.order < b.order
}

/// Service order as a total ordering: `Less` means `a` is treated first.
#[must_use]
pub fn priority_cmp(a: &HeapNode, b: &HeapNode) -> Ordering {
    b.patient
        .severity
        .cmp(&a.patient.severity)
        .then_with(|| a.admitted_ts.cmp(&b.admitted_ts))
        .then_with(|| a.order.cmp(&b.order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patient::Patient;

    fn node(severity: u8, admitted_ts: i64, order: u64) -> HeapNode {
        HeapNode {
            patient: Patient {
                code: format!("BN{order:03}"),
                name: "test".into(),
                admitted_at: String::new(),
                severity,
            },
            admitted_ts,
            order,
        }
    }

    #[test]
    fn test_severity_dominates() {
        let urgent = node(9, 500, 2);
        let mild = node(3, 100, 1);
        assert!(higher_priority(&urgent, &mild));
        assert!(!higher_priority(&mild, &urgent));
        assert_eq!(priority_cmp(&urgent, &mild), Ordering::Less);
    }

    #[test]
    fn test_earlier_admission_breaks_severity_tie() {
        let early = node(5, 100, 2);
        let late = node(5, 200, 1);
        assert!(higher_priority(&early, &late));
        assert_eq!(priority_cmp(&late, &early), Ordering::Greater);
    }

    #[test]
    fn test_insertion_order_breaks_timestamp_tie() {
        let first = node(5, 100, 1);
        let second = node(5, 100, 2);
        assert!(higher_priority(&first, &second));
        assert!(!higher_priority(&second, &first));
    }

    #[test]
    fn test_relation_is_irreflexive_and_agrees_with_cmp() {
        let nodes = [node(5, 100, 1), node(5, 100, 2), node(7, 300, 3), node(5, 50, 4)];
        for a in &nodes {
            assert!(!higher_priority(a, a));
            for b in &nodes {
                assert_eq!(higher_priority(a, b), priority_cmp(a, b) == Ordering::Less);
            }
        }
    }
}
