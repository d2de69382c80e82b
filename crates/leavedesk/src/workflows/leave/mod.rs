//! Hostel leave request workflow: submission, decisions, projections, and
//! bulk import of external exports.

pub mod domain;
mod intake;
pub mod seed;
mod service;
mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use intake::{LeaveImportError, LeaveImporter, ValidationError};
pub use service::{ActorDirectory, LeaveDeskError, LeaveDeskService};
pub use store::LeaveRequestStore;
