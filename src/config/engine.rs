//! Engine configuration structures.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`EngineConfig::log_capacity`].
pub const ENV_LOG_CAPACITY: &str = "TRIAGE_LOG_CAPACITY";
/// Environment variable overriding [`EngineConfig::log_view_limit`].
pub const ENV_LOG_VIEW_LIMIT: &str = "TRIAGE_LOG_VIEW_LIMIT";
/// Environment variable overriding [`EngineConfig::demo_window_minutes`].
pub const ENV_DEMO_WINDOW_MINUTES: &str = "TRIAGE_DEMO_WINDOW_MINUTES";

/// Tunables for a [`TriageScheduler`](crate::core::TriageScheduler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum log entries retained.
    pub log_capacity: usize,
    /// Entries returned by the `logs` view.
    pub log_view_limit: usize,
    /// Demo admissions are drawn from this many minutes before now.
    pub demo_window_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_capacity: 1000,
            log_view_limit: 120,
            demo_window_minutes: 120,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.log_capacity == 0 {
            return Err("log_capacity must be greater than 0".into());
        }
        if self.log_view_limit == 0 {
            return Err("log_view_limit must be greater than 0".into());
        }
        if self.log_view_limit > self.log_capacity {
            return Err(format!(
                "log_view_limit ({}) must not exceed log_capacity ({})",
                self.log_view_limit, self.log_capacity
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the environment, loading a `.env` file first
    /// if one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that failed to parse, or a
    /// validation message.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        let mut cfg = Self::default();
        if let Some(value) = read_env(ENV_LOG_CAPACITY)? {
            cfg.log_capacity = value;
        }
        if let Some(value) = read_env(ENV_LOG_VIEW_LIMIT)? {
            cfg.log_view_limit = value;
        }
        if let Some(value) = read_env(ENV_DEMO_WINDOW_MINUTES)? {
            cfg.demo_window_minutes = value;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn read_env<T>(key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{key}: {e}")),
        Err(_) => Ok(None),
    }
}
