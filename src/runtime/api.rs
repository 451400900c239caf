//! API-facing request/response models.
//!
//! A presentation layer answers each request with the affected record plus
//! [`DashboardState`], the bundle of all six views. Validation and format
//! errors map to a 4xx response via [`TriageError::is_client_error`].

use serde::{Deserialize, Serialize};

use crate::builders::SchedulerBuilder;
use crate::config::EngineConfig;
use crate::core::{
    AppResult, HeapEntry, LogEntry, PatientRecord, SeverityMapping, SeverityMode, SharedScheduler,
    Stats, TraceStep, TriageError, TriageScheduler,
};
use crate::util::telemetry::init_tracing;

/// Demo batch size when the request omits `count`.
pub const DEFAULT_DEMO_COUNT: usize = 5;

/// Every derived view, bundled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Patients in service order.
    pub queue: Vec<PatientRecord>,
    /// Patients in heap storage order.
    pub heap_array: Vec<HeapEntry>,
    /// Bucket statistics.
    pub stats: Stats,
    /// Recent log entries, newest first.
    pub logs: Vec<LogEntry>,
    /// Trace of the last mutation.
    pub steps: Vec<TraceStep>,
    /// Static severity table.
    pub severity_mapping: Vec<SeverityMapping>,
}

/// Add-patient payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddPatientRequest {
    /// Patient code.
    pub code: String,
    /// Patient name.
    pub name: String,
    /// ISO-8601 admission time.
    pub admitted_at: String,
    /// Severity 1-10.
    pub severity: i64,
}

/// Demo-generation payload. `severity` is `"random"` or a number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoRequest {
    /// Patients to generate.
    pub count: Option<usize>,
    /// Severity selector.
    pub severity: Option<serde_json::Value>,
}

impl DemoRequest {
    /// Severity selector, falling back to random for anything unusable.
    #[must_use]
    pub fn severity_mode(&self) -> SeverityMode {
        match &self.severity {
            Some(serde_json::Value::Number(n)) => {
                n.as_i64().map_or(SeverityMode::Random, SeverityMode::from_level)
            }
            Some(serde_json::Value::String(s)) => s.parse().unwrap_or_default(),
            _ => SeverityMode::Random,
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
    /// Live patients.
    pub patients: usize,
}

/// Bundle every view of `scheduler`.
#[must_use]
pub fn build_state(scheduler: &TriageScheduler) -> DashboardState {
    DashboardState {
        queue: scheduler.to_priority_list(),
        heap_array: scheduler.to_heap_array(),
        stats: scheduler.stats(),
        logs: scheduler.logs(),
        steps: scheduler.last_steps().to_vec(),
        severity_mapping: scheduler.severity_mapping(),
    }
}

/// Apply an add-patient request.
///
/// # Errors
///
/// Propagates the engine's validation and format errors.
pub fn submit_patient(
    scheduler: &SharedScheduler,
    req: &AddPatientRequest,
) -> Result<PatientRecord, TriageError> {
    scheduler
        .lock()
        .add_patient(&req.code, &req.name, &req.admitted_at, req.severity)
}

/// Apply a demo request, returning how many patients were inserted.
pub fn run_demo(scheduler: &SharedScheduler, req: &DemoRequest) -> usize {
    let count = req.count.unwrap_or(DEFAULT_DEMO_COUNT);
    scheduler.lock().generate_demo(count, req.severity_mode())
}

/// Return a health payload.
#[must_use]
pub fn health(scheduler: &SharedScheduler) -> Health {
    Health {
        ok: true,
        patients: scheduler.lock().len(),
    }
}

/// Install tracing, read configuration from the environment and build a
/// shared scheduler.
///
/// # Errors
///
/// Fails when environment configuration is invalid.
pub fn bootstrap() -> AppResult<SharedScheduler> {
    init_tracing();
    let config = EngineConfig::from_env().map_err(anyhow::Error::msg)?;
    let shared = SchedulerBuilder::new().with_config(config).build_shared()?;
    tracing::info!("triage scheduler ready");
    Ok(shared)
}
