//! API surface consumed by presentation layers.

pub mod api;

pub use api::{
    bootstrap, build_state, health, run_demo, submit_patient, AddPatientRequest,
    DashboardState, DemoRequest, Health,
};
