//! Severity buckets.
//!
//! The severity-to-label mapping is kept as data: an ordered table of
//! inclusive ranges scanned top-down, first match wins. The same table backs
//! label lookup, bucket statistics and the static mapping view.

use serde::{Deserialize, Serialize};

/// Lowest accepted severity.
pub const MIN_SEVERITY: u8 = 1;
/// Highest accepted severity.
pub const MAX_SEVERITY: u8 = 10;
/// Label returned when no bucket matches.
pub const UNDEFINED_LABEL: &str = "Undefined";

/// Inclusive severity range with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBucket {
    /// Lower bound (inclusive).
    pub low: u8,
    /// Upper bound (inclusive).
    pub high: u8,
    /// Bucket label.
    pub label: &'static str,
}

/// Buckets in priority order, most urgent first.
pub const SEVERITY_BUCKETS: [SeverityBucket; 5] = [
    SeverityBucket { low: 10, high: 10, label: "Critical" },
    SeverityBucket { low: 7, high: 9, label: "High" },
    SeverityBucket { low: 5, high: 6, label: "Medium" },
    SeverityBucket { low: 3, high: 4, label: "Mild" },
    SeverityBucket { low: 1, high: 2, label: "Very mild" },
];

impl SeverityBucket {
    /// Whether `value` falls inside this bucket.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }

    /// `"10"` for singleton ranges, `"7-9"` otherwise.
    #[must_use]
    pub fn range_string(&self) -> String {
        if self.low == self.high {
            self.low.to_string()
        } else {
            format!("{}-{}", self.low, self.high)
        }
    }
}

/// One row of the static severity mapping view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityMapping {
    /// Range rendered as text.
    pub range: String,
    /// Bucket label.
    pub label: String,
}

/// Label of the first bucket containing `value`.
#[must_use]
pub fn severity_label(value: u8) -> &'static str {
    SEVERITY_BUCKETS
        .iter()
        .find(|bucket| bucket.contains(value))
        .map_or(UNDEFINED_LABEL, |bucket| bucket.label)
}

/// The bucket table rendered as `(range, label)` rows.
#[must_use]
pub fn severity_mapping() -> Vec<SeverityMapping> {
    SEVERITY_BUCKETS
        .iter()
        .map(|bucket| SeverityMapping {
            range: bucket.range_string(),
            label: bucket.label.to_string(),
        })
        .collect()
}
