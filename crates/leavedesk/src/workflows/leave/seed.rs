//! Built-in demo data for walkthroughs and tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};

use super::domain::{Actor, LeaveRequest, LeaveRequestId, LeaveStatus, Role};
use super::store::LeaveRequestStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static demo date is valid")
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("static demo timestamp is valid")
}

/// The three records the desk boots with when demo seeding is on.
pub fn initial_leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: LeaveRequestId("1".to_string()),
            student_id: "student@example.com".to_string(),
            student_name: "John Doe".to_string(),
            reason: "Family function".to_string(),
            start_date: date(2025, 4, 15),
            end_date: date(2025, 4, 18),
            status: LeaveStatus::Pending,
            contact_number: "9876543210".to_string(),
            created_at: timestamp(2025, 4, 10, 10, 30),
        },
        LeaveRequest {
            id: LeaveRequestId("2".to_string()),
            student_id: "jane@example.com".to_string(),
            student_name: "Jane Smith".to_string(),
            reason: "Medical appointment".to_string(),
            start_date: date(2025, 4, 12),
            end_date: date(2025, 4, 13),
            status: LeaveStatus::Approved,
            contact_number: "8765432109".to_string(),
            created_at: timestamp(2025, 4, 8, 14, 45),
        },
        LeaveRequest {
            id: LeaveRequestId("3".to_string()),
            student_id: "bob@example.com".to_string(),
            student_name: "Bob Johnson".to_string(),
            reason: "Personal emergency".to_string(),
            start_date: date(2025, 4, 20),
            end_date: date(2025, 4, 22),
            status: LeaveStatus::Rejected,
            contact_number: "7654321098".to_string(),
            created_at: timestamp(2025, 4, 9, 9, 15),
        },
    ]
}

/// Store pre-populated with the demo records.
pub fn seeded_store() -> LeaveRequestStore {
    LeaveRequestStore::from_records(initial_leave_requests())
}

/// Raw import payload used by the walkthrough. Ids and creation times are
/// left out so the store backfills them.
pub fn sample_import() -> Value {
    json!([
        {
            "studentId": "student1@example.com",
            "studentName": "Alex Johnson",
            "reason": "Family wedding",
            "startDate": "2025-05-10",
            "endDate": "2025-05-15",
            "status": "pending",
            "contactNumber": "9876543210"
        },
        {
            "studentId": "student2@example.com",
            "studentName": "Maya Patel",
            "reason": "Medical emergency",
            "startDate": "2025-05-05",
            "endDate": "2025-05-07",
            "status": "approved",
            "contactNumber": "8765432109"
        }
    ])
}

/// Demo accounts covering each role.
pub fn sample_roster() -> Vec<Actor> {
    vec![
        Actor {
            id: "student@example.com".to_string(),
            name: "John Student".to_string(),
            role: Role::Student,
        },
        Actor {
            id: "madhusudhan@gmail.com".to_string(),
            name: "Dr. Madhusudhan".to_string(),
            role: Role::Faculty,
        },
        Actor {
            id: "geetha@gmail.com".to_string(),
            name: "Dr. Geetha".to_string(),
            role: Role::Warden,
        },
    ]
}
