use std::collections::HashSet;

use super::common;
use crate::workflows::leave::domain::{LeaveDecision, LeaveStatus};
use crate::workflows::leave::views;

#[test]
fn by_student_keeps_submission_order() {
    let mut store = common::seeded_store();
    let mut submission = common::submission();
    submission.student_id = "student@example.com".to_string();
    store.create(submission).expect("submission accepted");

    let requests = views::by_student(store.list(), "student@example.com");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id.0, "1");
    assert!(requests[1].id.0.starts_with("leave-"));
}

#[test]
fn by_student_is_empty_for_unknown_students() {
    let store = common::seeded_store();
    assert!(views::by_student(store.list(), "ghost@example.com").is_empty());
}

#[test]
fn by_status_matches_the_record_status() {
    let store = common::seeded_store();
    let approved = views::by_status(store.list(), LeaveStatus::Approved);
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id.0, "2");
}

#[test]
fn partition_covers_every_record_exactly_once() {
    let mut store = common::seeded_store();
    store.create(common::submission()).expect("submission accepted");

    let buckets = views::partition(store.list());
    assert_eq!(buckets.total(), store.len());

    let mut seen = HashSet::new();
    for status in LeaveStatus::ordered() {
        for request in buckets.bucket(status) {
            assert_eq!(request.status, status);
            assert!(
                seen.insert(request.id.0.clone()),
                "{} landed in two buckets",
                request.id.0
            );
        }
    }
    for request in store.list() {
        assert!(seen.contains(&request.id.0));
    }
}

#[test]
fn partition_keeps_snapshot_order_inside_buckets() {
    let mut store = common::seeded_store();
    let request = store.create(common::submission()).expect("submission accepted");

    let buckets = views::partition(store.list());
    let pending: Vec<_> = buckets
        .pending
        .iter()
        .map(|request| request.id.0.as_str())
        .collect();
    assert_eq!(pending, ["1", request.id.0.as_str()]);
}

#[test]
fn decisions_move_records_between_buckets() {
    let mut store = common::seeded_store();
    store
        .transition("1", LeaveDecision::Rejected)
        .expect("decision applies");

    let buckets = views::partition(store.list());
    assert!(buckets.pending.iter().all(|request| request.id.0 != "1"));

    let rejected: Vec<_> = buckets
        .rejected
        .iter()
        .map(|request| request.id.0.as_str())
        .collect();
    assert_eq!(rejected, ["1", "3"]);
}

#[test]
fn status_totals_walk_statuses_in_display_order() {
    let store = common::seeded_store();
    let totals = views::status_totals(store.list());

    let labels: Vec<_> = totals.iter().map(|tally| tally.status_label).collect();
    assert_eq!(labels, ["pending", "approved", "rejected"]);
    assert!(totals.iter().all(|tally| tally.count == 1));
}

#[test]
fn status_totals_keep_zero_count_entries() {
    let mut store = common::seeded_store();
    store
        .transition("1", LeaveDecision::Approved)
        .expect("decision applies");

    let totals = views::status_totals(store.list());
    assert_eq!(totals[0].count, 0);
    assert_eq!(totals[1].count, 2);
    assert_eq!(totals[2].count, 1);
}

#[test]
fn views_carry_labels_and_badges() {
    let store = common::seeded_store();
    let view = store.list()[0].to_view();

    assert_eq!(view.id, "1");
    assert_eq!(view.status_label, "pending");
    assert_eq!(view.status_badge, "Pending");
    assert_eq!(view.student_name, "John Doe");
}
