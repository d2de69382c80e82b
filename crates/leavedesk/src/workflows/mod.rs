//! Workflow engines hosted by the leave desk.

pub mod leave;
