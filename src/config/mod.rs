//! Configuration models for the triage engine.

pub mod engine;

pub use engine::EngineConfig;
