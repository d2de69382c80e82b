use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::workflows::leave::domain::{Actor, LeaveDraft, LeaveSubmission};
use crate::workflows::leave::seed;
use crate::workflows::leave::service::{ActorDirectory, LeaveDeskService};
use crate::workflows::leave::store::LeaveRequestStore;

pub(super) const STUDENT: &str = "student@example.com";
pub(super) const FACULTY: &str = "madhusudhan@gmail.com";
pub(super) const WARDEN: &str = "geetha@gmail.com";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn submission() -> LeaveSubmission {
    LeaveSubmission {
        student_id: "s1".to_string(),
        student_name: "Alex".to_string(),
        reason: "trip".to_string(),
        start_date: date(2025, 5, 1),
        end_date: date(2025, 5, 3),
        contact_number: "9876543210".to_string(),
    }
}

pub(super) fn draft() -> LeaveDraft {
    LeaveDraft {
        reason: "Family wedding".to_string(),
        start_date: date(2025, 5, 10),
        end_date: date(2025, 5, 15),
        contact_number: "9876543210".to_string(),
    }
}

pub(super) fn seeded_store() -> LeaveRequestStore {
    seed::seeded_store()
}

pub(super) fn record_missing_reason() -> Value {
    json!([
        {
            "studentId": "student9@example.com",
            "studentName": "Priya Nair",
            "startDate": "2025-06-01",
            "endDate": "2025-06-02",
            "status": "pending",
            "contactNumber": "9000000001"
        }
    ])
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    accounts: HashMap<String, Actor>,
}

impl MemoryDirectory {
    pub(super) fn with_roster(roster: Vec<Actor>) -> Self {
        let accounts = roster
            .into_iter()
            .map(|actor| (actor.id.clone(), actor))
            .collect();
        Self { accounts }
    }
}

impl ActorDirectory for MemoryDirectory {
    fn lookup(&self, actor_id: &str) -> Option<Actor> {
        self.accounts.get(actor_id).cloned()
    }
}

pub(super) fn build_desk() -> LeaveDeskService<MemoryDirectory> {
    let directory = Arc::new(MemoryDirectory::with_roster(seed::sample_roster()));
    LeaveDeskService::with_store(directory, seed::seeded_store())
}
