//! Read-side projections over a leave request snapshot.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::{LeaveRequest, LeaveStatus};

/// Requests submitted by one student, original order preserved.
pub fn by_student(all: &[LeaveRequest], student_id: &str) -> Vec<LeaveRequest> {
    all.iter()
        .filter(|request| request.student_id == student_id)
        .cloned()
        .collect()
}

/// Requests currently in the given status, original order preserved.
pub fn by_status(all: &[LeaveRequest], status: LeaveStatus) -> Vec<LeaveRequest> {
    all.iter()
        .filter(|request| request.status == status)
        .cloned()
        .collect()
}

/// A snapshot split by status. Every record lands in exactly one bucket and
/// each bucket keeps the snapshot's order.
#[derive(Debug, Clone, Default)]
pub struct StatusBuckets {
    pub pending: Vec<LeaveRequest>,
    pub approved: Vec<LeaveRequest>,
    pub rejected: Vec<LeaveRequest>,
}

impl StatusBuckets {
    pub fn bucket(&self, status: LeaveStatus) -> &[LeaveRequest] {
        match status {
            LeaveStatus::Pending => &self.pending,
            LeaveStatus::Approved => &self.approved,
            LeaveStatus::Rejected => &self.rejected,
        }
    }

    pub fn total(&self) -> usize {
        self.pending.len() + self.approved.len() + self.rejected.len()
    }
}

pub fn partition(all: &[LeaveRequest]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for request in all {
        match request.status {
            LeaveStatus::Pending => buckets.pending.push(request.clone()),
            LeaveStatus::Approved => buckets.approved.push(request.clone()),
            LeaveStatus::Rejected => buckets.rejected.push(request.clone()),
        }
    }
    buckets
}

/// Per-status counts for board headers, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct StatusTally {
    pub status: LeaveStatus,
    pub status_label: &'static str,
    pub count: usize,
}

pub fn status_totals(all: &[LeaveRequest]) -> Vec<StatusTally> {
    let mut counts: HashMap<LeaveStatus, usize> = HashMap::new();
    for request in all {
        *counts.entry(request.status).or_default() += 1;
    }

    LeaveStatus::ordered()
        .into_iter()
        .map(|status| StatusTally {
            status,
            status_label: status.label(),
            count: counts.get(&status).copied().unwrap_or(0),
        })
        .collect()
}

/// Serializable rendering of one request for boards and exports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestView {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub status_label: &'static str,
    pub status_badge: &'static str,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn to_view(&self) -> LeaveRequestView {
        LeaveRequestView {
            id: self.id.0.clone(),
            student_id: self.student_id.clone(),
            student_name: self.student_name.clone(),
            reason: self.reason.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            status_label: self.status.label(),
            status_badge: self.status.badge(),
            contact_number: self.contact_number.clone(),
            created_at: self.created_at,
        }
    }
}
