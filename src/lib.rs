//! # Triage Heap
//!
//! An explainable emergency-room scheduler built on a binary max-heap.
//!
//! Patients are ordered by a three-key priority rule and every structural
//! mutation is recorded as a replayable sequence of steps, so a front end can
//! animate how the heap reorganises itself.
//!
//! ## Priority Rule
//!
//! - **Severity**: higher severity (1-10) is treated first
//! - **Admission time**: at equal severity, earlier arrival wins
//! - **Insertion order**: at equal severity and arrival, first registered wins
//!
//! ## Key Features
//!
//! - **Traced heap repair**: sift-up and sift-down record every comparison and swap
//! - **Event log**: bounded ring buffer of human-readable actions
//! - **Derived views**: service order, raw heap array, bucket statistics, severity table
//! - **Demo data**: seedable synthetic patient generation
//!
//! ```rust,ignore
//! use triage_heap::builders::SchedulerBuilder;
//! use triage_heap::core::SeverityMode;
//!
//! let mut scheduler = SchedulerBuilder::new().build()?;
//! scheduler.add_patient("BN001", "A", "2024-01-01T08:00:00", 5)?;
//! scheduler.add_patient("BN002", "B", "2024-01-01T07:00:00", 5)?;
//! scheduler.generate_demo(5, SeverityMode::Random);
//!
//! let next = scheduler.extract_next();
//! for step in scheduler.last_steps() {
//!     println!("{}: {}", step.title, step.description);
//! }
//! ```
//!
//! The engine is single-threaded and unlocked. Share one instance across
//! threads through `core::SharedScheduler`, which serialises every call.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core engine: comparator, heap, tracer, log and views.
pub mod core;
/// Configuration models for the engine.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Request/response models for presentation layers.
pub mod runtime;
/// Shared utilities.
pub mod util;
