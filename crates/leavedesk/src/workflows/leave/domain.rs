use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for stored leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveRequestId(pub String);

/// Lifecycle states of a leave request. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Capitalized form used by badge-style displays.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Outcome a staff actor can apply to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl LeaveDecision {
    pub const fn status(self) -> LeaveStatus {
        match self {
            Self::Approved => LeaveStatus::Approved,
            Self::Rejected => LeaveStatus::Rejected,
        }
    }

    pub const fn label(self) -> &'static str {
        self.status().label()
    }
}

/// Roles recognized by the desk. Faculty and warden act as staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Faculty,
    Warden,
}

impl Role {
    pub const fn ordered() -> [Self; 3] {
        [Self::Student, Self::Faculty, Self::Warden]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
            Self::Warden => "Warden",
        }
    }

    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Faculty | Self::Warden)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity snapshot supplied by the session collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Fields a student fills in when requesting leave; identity is attached later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contact_number: String,
}

/// Complete creation input handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSubmission {
    pub student_id: String,
    pub student_name: String,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contact_number: String,
}

impl LeaveSubmission {
    pub fn from_draft(actor: &Actor, draft: LeaveDraft) -> Self {
        Self {
            student_id: actor.id.clone(),
            student_name: actor.name.clone(),
            reason: draft.reason,
            start_date: draft.start_date,
            end_date: draft.end_date,
            contact_number: draft.contact_number,
        }
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        let fields = [
            ("studentId", &self.student_id),
            ("studentName", &self.student_name),
            ("reason", &self.reason),
            ("contactNumber", &self.contact_number),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(SubmissionError::Blank(field));
            }
        }

        if self.start_date > self.end_date {
            return Err(SubmissionError::InvertedDates {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }
}

/// The canonical stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub student_id: String,
    pub student_name: String,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

/// Validation errors raised when the store accepts a new submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("required field {0} must not be blank")]
    Blank(&'static str),
    #[error("start date {start} falls after end date {end}")]
    InvertedDates { start: NaiveDate, end: NaiveDate },
}

/// Errors raised by status transitions.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("leave request {0} not found")]
    UnknownRequest(String),
    #[error("leave request {id} was already {}", .status.label())]
    AlreadyDecided { id: String, status: LeaveStatus },
}
