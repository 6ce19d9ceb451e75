//! Integration tests for AttendanceService.
//!
//! These tests verify recording attendance and the merged attendance view
//! using the in-memory store.

use classroll_core::{AppError, AttendanceMark, AttendanceService, DEFAULT_STATUS};

use crate::integration::common::{MockRosterStore, MockSchedule, date};

fn seeded_store() -> MockRosterStore {
    let store = MockRosterStore::new();
    store.add_schedule(MockSchedule::new(12, 5, "Monday", 9, "B1"));
    store.add_student(1, "Alice", "B1");
    store.add_student(2, "Bob", "B1");
    store.add_student(3, "Zed", "B2");
    store
}

/// Marking one student present leaves the rest of the batch absent.
#[tokio::test]
async fn test_mark_then_view_merges_roster() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());
    let day = date(2024, 3, 4);

    let saved = service
        .mark(12, day, vec![AttendanceMark::new(1, "present")])
        .await
        .unwrap();
    assert_eq!(saved, 1);

    let sheet = service.view(12, day).await.unwrap();
    assert_eq!(sheet.len(), 2, "one entry per student in batch B1");

    assert_eq!(sheet[0].student_name, "Alice");
    assert_eq!(sheet[0].status, "present");
    assert!(sheet[0].timestamp.is_some());

    assert_eq!(sheet[1].student_name, "Bob");
    assert_eq!(sheet[1].status, DEFAULT_STATUS);
    assert!(sheet[1].timestamp.is_none());
}

/// The sheet length tracks the roster, not the number of stored rows.
#[tokio::test]
async fn test_view_length_equals_roster_size() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());
    let day = date(2024, 3, 4);

    assert_eq!(service.view(12, day).await.unwrap().len(), 2);

    service
        .mark(
            12,
            day,
            vec![
                AttendanceMark::new(1, "present"),
                AttendanceMark::new(2, "present"),
                // Not in B1: stored but never shown on this sheet
                AttendanceMark::new(3, "present"),
            ],
        )
        .await
        .unwrap();

    let sheet = service.view(12, day).await.unwrap();
    assert_eq!(sheet.len(), 2);
    assert!(sheet.iter().all(|s| s.status == "present"));
}

/// Marking twice keeps a single row holding the latest status.
#[tokio::test]
async fn test_mark_twice_keeps_latest_status() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());
    let day = date(2024, 3, 4);

    service
        .mark(12, day, vec![AttendanceMark::new(2, "present")])
        .await
        .unwrap();
    service
        .mark(12, day, vec![AttendanceMark::new(2, "absent")])
        .await
        .unwrap();

    assert_eq!(store.attendance_len(), 1);
    assert_eq!(store.stored_status(2, 12, day).as_deref(), Some("absent"));
}

/// Attendance on another date does not leak into the view.
#[tokio::test]
async fn test_view_is_scoped_to_date() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());

    service
        .mark(12, date(2024, 3, 4), vec![AttendanceMark::new(1, "present")])
        .await
        .unwrap();

    let sheet = service.view(12, date(2024, 3, 11)).await.unwrap();
    assert!(sheet.iter().all(|s| s.status == DEFAULT_STATUS));
}

#[tokio::test]
async fn test_view_unknown_schedule_is_not_found() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());

    let err = service.view(999, date(2024, 3, 4)).await.unwrap_err();
    assert!(matches!(err, AppError::ScheduleNotFound(999)));
}

#[tokio::test]
async fn test_mark_rejects_empty_batch() {
    let store = seeded_store();
    let service = AttendanceService::new(store.clone(), store.clone());

    let err = service.mark(12, date(2024, 3, 4), vec![]).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(store.attendance_len(), 0);
}

/// A failing write leaves no partial batch behind.
#[tokio::test]
async fn test_failed_batch_writes_nothing() {
    let store = seeded_store();
    store.fail_writes_after(1);
    let service = AttendanceService::new(store.clone(), store.clone());

    let err = service
        .mark(
            12,
            date(2024, 3, 4),
            vec![
                AttendanceMark::new(1, "present"),
                AttendanceMark::new(2, "present"),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DatabaseError(_)));
    assert_eq!(store.attendance_len(), 0);
}
