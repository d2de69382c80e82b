use std::collections::HashSet;

use chrono::Utc;
use serde_json::Value;

use super::domain::{
    LeaveDecision, LeaveRequest, LeaveRequestId, LeaveStatus, LeaveSubmission, SubmissionError,
    TransitionError,
};
use super::intake::{self, ValidationError};

fn candidate_id(sequence: u64) -> String {
    format!("leave-{sequence:06}")
}

/// Sole owner of the in-memory leave request collection.
///
/// Records keep their insertion order; every mutation goes through one of the
/// methods below so the id and status rules hold at all times.
#[derive(Debug, Default)]
pub struct LeaveRequestStore {
    requests: Vec<LeaveRequest>,
    sequence: u64,
}

impl LeaveRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out owning the given records.
    pub(crate) fn from_records(requests: Vec<LeaveRequest>) -> Self {
        Self {
            requests,
            sequence: 0,
        }
    }

    /// Accepts a submission, assigning a fresh id, pending status, and the
    /// current creation time.
    pub fn create(&mut self, submission: LeaveSubmission) -> Result<LeaveRequest, SubmissionError> {
        submission.validate()?;

        let LeaveSubmission {
            student_id,
            student_name,
            reason,
            start_date,
            end_date,
            contact_number,
        } = submission;

        let request = LeaveRequest {
            id: self.next_id(),
            student_id,
            student_name,
            reason,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            contact_number,
            created_at: Utc::now(),
        };
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Applies a staff decision to the request with the given id.
    ///
    /// Re-applying the decision a record already carries succeeds without
    /// changing anything; flipping a decided record is refused.
    pub fn transition(
        &mut self,
        id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveRequest, TransitionError> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id.0 == id)
            .ok_or_else(|| TransitionError::UnknownRequest(id.to_owned()))?;

        let target = decision.status();
        if request.status == target {
            return Ok(request.clone());
        }
        if request.status.is_terminal() {
            return Err(TransitionError::AlreadyDecided {
                id: id.to_owned(),
                status: request.status,
            });
        }

        request.status = target;
        Ok(request.clone())
    }

    /// Replaces the whole collection from an untyped payload.
    ///
    /// The payload is vetted up front; on any validation error the current
    /// collection stays untouched. Records arriving without an id or creation
    /// time get them backfilled.
    pub fn replace_all(&mut self, raw: &Value) -> Result<usize, ValidationError> {
        let parsed = intake::vet_records(raw)?;

        let mut taken: HashSet<String> = parsed
            .iter()
            .filter_map(|record| record.id.as_ref().map(|id| id.0.clone()))
            .collect();

        let mut incoming = Vec::with_capacity(parsed.len());
        for record in parsed {
            let id = match record.id {
                Some(id) => id,
                None => self.claim_generated_id(&mut taken),
            };
            incoming.push(LeaveRequest {
                id,
                student_id: record.student_id,
                student_name: record.student_name,
                reason: record.reason,
                start_date: record.start_date,
                end_date: record.end_date,
                status: record.status,
                contact_number: record.contact_number,
                created_at: record.created_at.unwrap_or_else(Utc::now),
            });
        }

        self.requests = incoming;
        Ok(self.requests.len())
    }

    /// Read-only view of the collection in insertion order.
    pub fn list(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn find(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|request| request.id.0 == id)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn next_id(&mut self) -> LeaveRequestId {
        loop {
            self.sequence += 1;
            let candidate = candidate_id(self.sequence);
            if self.find(&candidate).is_none() {
                return LeaveRequestId(candidate);
            }
        }
    }

    fn claim_generated_id(&mut self, taken: &mut HashSet<String>) -> LeaveRequestId {
        loop {
            self.sequence += 1;
            let candidate = candidate_id(self.sequence);
            if taken.insert(candidate.clone()) {
                return LeaveRequestId(candidate);
            }
        }
    }
}
