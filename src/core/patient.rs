//! Patient records, heap nodes and admission-time parsing.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::severity::severity_label;
use crate::core::TriageError;

/// Date-time layouts carrying an explicit offset, tried after RFC 3339.
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Naive layouts; interpreted as UTC.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Rendering used for `admittedAtDisplay`.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A patient waiting for treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Unique code among live patients, stored trimmed.
    pub code: String,
    /// Display name, stored trimmed.
    pub name: String,
    /// Admission time exactly as supplied (ISO-8601).
    pub admitted_at: String,
    /// Urgency, 1-10 inclusive.
    pub severity: u8,
}

impl Patient {
    /// Bucket label derived from severity.
    #[must_use]
    pub fn label(&self) -> &'static str {
        severity_label(self.severity)
    }

    /// Full representation including derived fields.
    #[must_use]
    pub fn to_record(&self) -> PatientRecord {
        PatientRecord::from(self)
    }
}

/// Serialisable patient representation returned by every engine query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Patient code.
    pub code: String,
    /// Patient name.
    pub name: String,
    /// Admission time as supplied.
    pub admitted_at: String,
    /// Severity 1-10.
    pub severity: u8,
    /// Bucket label.
    pub label: String,
    /// Human-readable admission time.
    pub admitted_at_display: String,
}

impl From<&Patient> for PatientRecord {
    fn from(patient: &Patient) -> Self {
        Self {
            code: patient.code.clone(),
            name: patient.name.clone(),
            admitted_at: patient.admitted_at.clone(),
            severity: patient.severity,
            label: patient.label().to_string(),
            admitted_at_display: display_time(&patient.admitted_at),
        }
    }
}

/// A patient as stored in the heap, with tie-break keys fixed at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapNode {
    /// Wrapped patient.
    pub patient: Patient,
    /// Admission time in milliseconds since the Unix epoch. Parsed once.
    pub admitted_ts: i64,
    /// Insertion sequence number, starting at 1.
    pub order: u64,
}

/// A heap node tagged with its storage index, for array/tree rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapEntry {
    /// Position in heap storage.
    pub index: usize,
    /// Patient representation.
    #[serde(flatten)]
    pub patient: PatientRecord,
}

/// Rewrite ISO-8601 basic (`20240101T080000`) and hour-only
/// (`2024-01-01T08`) forms into the extended layouts tried below.
fn to_extended(value: &str) -> String {
    let mut out = expand_basic(value).unwrap_or_else(|| value.to_string());
    let bytes = out.as_bytes();
    if bytes.len() >= 13
        && bytes[10] == b'T'
        && bytes[11..13].iter().all(u8::is_ascii_digit)
        && matches!(bytes.get(13), None | Some(b'+' | b'-'))
    {
        out.insert_str(13, ":00");
    }
    out
}

fn expand_basic(value: &str) -> Option<String> {
    let (date, time) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut out = format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..]);
    if let Some(time) = time {
        let digits = time.bytes().take_while(u8::is_ascii_digit).count();
        if !matches!(digits, 2 | 4 | 6) {
            return None;
        }
        out.push('T');
        for (i, pair) in time[..digits].as_bytes().chunks(2).enumerate() {
            if i > 0 {
                out.push(':');
            }
            out.push_str(std::str::from_utf8(pair).ok()?);
        }
        out.push_str(&time[digits..]);
    }
    Some(out)
}

fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    let normalized = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .map_or_else(|| value.to_string(), |head| format!("{head}+00:00"));
    let normalized = to_extended(&normalized);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt);
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Parse an ISO-8601 admission time into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339 (with `Z` or a numeric offset), naive date-times down to
/// hour precision, ISO-8601 basic forms such as `20240101T080000`, and bare
/// dates. Naive values are read as UTC.
///
/// # Errors
///
/// Returns [`TriageError::InvalidTimestamp`] when no layout matches.
pub fn parse_timestamp(value: &str) -> Result<i64, TriageError> {
    parse_datetime(value)
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| TriageError::InvalidTimestamp(value.to_string()))
}

/// Render an admission time as `dd/mm/YYYY HH:MM`, or return it unchanged
/// when it cannot be parsed.
#[must_use]
pub fn display_time(value: &str) -> String {
    parse_datetime(value).map_or_else(
        || value.to_string(),
        |dt| dt.format(DISPLAY_FORMAT).to_string(),
    )
}
