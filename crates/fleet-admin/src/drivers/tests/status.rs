use super::common::*;
use crate::drivers::domain::{DriverAction, DriverStatus};
use crate::drivers::status::{project, project_status, rating_stars, DriverView};

#[test]
fn fresh_registration_is_pending_with_both_actions() {
    let record = pending_driver(10, "Ioana Vlad", "ioana@example.com", None);
    let projection = project(&record);

    assert_eq!(projection.status, DriverStatus::Pending);
    assert_eq!(
        projection.actions,
        &[DriverAction::Approve, DriverAction::Reject]
    );
    assert!(!projection.suspended);
}

#[test]
fn rejection_reason_makes_driver_rejected_without_actions() {
    let record = rejected_driver(11, "Mihai Pop", "mihai@example.com", "incomplete docs");
    let projection = project(&record);

    assert_eq!(projection.status, DriverStatus::Rejected);
    assert!(projection.actions.is_empty());
}

#[test]
fn approval_takes_precedence_over_stale_rejection_reason() {
    let mut record = approved_driver(12, "Dana Stan", "dana@example.com");
    record.rejection_reason = Some("blurred licence photo".to_string());
    let projection = project(&record);

    assert_eq!(projection.status, DriverStatus::Approved);
    assert!(projection.actions.is_empty());
    assert!(!projection.allows(DriverAction::Approve));
    assert!(!projection.allows(DriverAction::Reject));
}

#[test]
fn projection_is_total_over_flag_combinations() {
    let reasons = [None, Some(""), Some("expired licence")];
    for is_approved in [false, true] {
        for reason in reasons {
            let status = project_status(is_approved, reason);
            let expected = match (is_approved, reason) {
                (true, _) => DriverStatus::Approved,
                (false, Some("expired licence")) => DriverStatus::Rejected,
                (false, _) => DriverStatus::Pending,
            };
            assert_eq!(status, expected, "approved={is_approved} reason={reason:?}");
        }
    }
}

#[test]
fn suspension_does_not_change_status_or_actions() {
    let mut record = pending_driver(13, "Radu Enache", "radu@example.com", None);
    record.is_suspended = true;
    let projection = project(&record);
    assert_eq!(projection.status, DriverStatus::Pending);
    assert!(projection.suspended);
    assert_eq!(projection.actions.len(), 2);

    let mut approved = approved_driver(14, "Sorina Lupu", "sorina@example.com");
    approved.is_suspended = true;
    let projection = project(&approved);
    assert_eq!(projection.status, DriverStatus::Approved);
    assert!(projection.suspended);
    assert!(projection.actions.is_empty());
}

#[test]
fn view_derives_counts_rating_and_initial() {
    let records = fleet();
    let ana = DriverView::from_record(&records[0]);
    assert_eq!(ana.initial, "A");
    assert_eq!(ana.documents_count, 2);
    assert_eq!(ana.vehicles_count, 1);
    assert_eq!(ana.rating_stars, 5);
    assert_eq!(ana.rating_label, "4.6");
    assert_eq!(ana.display_status, DriverStatus::Approved);
    assert!(ana.enabled_actions.is_empty());

    let bogdan = DriverView::from_record(&records[1]);
    assert_eq!(bogdan.documents_count, 3);
    assert_eq!(bogdan.vehicles_count, 0);
    assert_eq!(bogdan.average_rating, 0.0);
    assert_eq!(bogdan.rating_label, "0.0");
    assert_eq!(
        bogdan.enabled_actions,
        vec![DriverAction::Approve, DriverAction::Reject]
    );
}

#[test]
fn view_only_exposes_reason_for_rejected_drivers() {
    let records = fleet();
    let rejected = DriverView::from_record(&records[3]);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("incomplete docs"));

    let stale = DriverView::from_record(&records[4]);
    assert_eq!(stale.display_status, DriverStatus::Approved);
    assert!(stale.rejection_reason.is_none());
}

#[test]
fn ratings_are_clamped_and_rounded() {
    let mut record = pending_driver(15, "élan Test", "elan@example.com", None);
    record.average_rating = Some(7.5);
    assert_eq!(record.rating(), 5.0);
    record.average_rating = Some(-1.0);
    assert_eq!(record.rating(), 0.0);
    record.average_rating = Some(f32::NAN);
    assert_eq!(record.rating(), 0.0);
    assert_eq!(record.initial(), "É");

    assert_eq!(rating_stars(2.5), 3);
    assert_eq!(rating_stars(2.49), 2);
    assert_eq!(rating_stars(0.4), 0);
}

#[test]
fn view_serializes_status_and_actions_as_labels() {
    let records = fleet();
    let value = serde_json::to_value(DriverView::from_record(&records[2])).expect("serializes");
    assert_eq!(value["display_status"], "pending");
    assert_eq!(value["is_suspended"], true);
    assert_eq!(value["enabled_actions"], serde_json::json!(["approve", "reject"]));
    assert_eq!(value["id"], 3);
    assert!(value.get("rejection_reason").is_none());
}
