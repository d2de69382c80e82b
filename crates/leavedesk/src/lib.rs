//! In-memory workflow engine tracking hostel leave requests from submission
//! to decision.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
