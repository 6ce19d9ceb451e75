//! Attendance recording and the merged per-student attendance view.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{AttendanceMark, AttendanceRecord, DEFAULT_STATUS, Student, StudentAttendance};
use crate::traits::{AttendanceStore, ScheduleStore};

/// Format used for the textual `timestamp` of a stored attendance row.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Merges a roster with the attendance rows stored for one date.
///
/// The output has exactly one entry per roster student, in roster order.
/// Students without a row get [`DEFAULT_STATUS`] and no timestamp. Rows for
/// students outside the roster are dropped.
pub fn merge_attendance(
    roster: Vec<Student>,
    records: Vec<AttendanceRecord>,
) -> Vec<StudentAttendance> {
    let mut by_student: HashMap<i32, AttendanceRecord> = records
        .into_iter()
        .map(|record| (record.student_id, record))
        .collect();

    roster
        .into_iter()
        .map(|student| {
            let record = by_student.remove(&student.student_id);
            let (status, timestamp) = match record {
                Some(r) => (
                    r.status,
                    r.marked_at
                        .map(|at| at.format(TIMESTAMP_FORMAT).to_string()),
                ),
                None => (DEFAULT_STATUS.to_string(), None),
            };

            StudentAttendance {
                student_id: student.student_id,
                student_name: student.name,
                student_email: student.email,
                status,
                timestamp,
            }
        })
        .collect()
}

/// Validates a submitted attendance batch.
///
/// Rejects an empty batch and entries whose status is blank; statuses are
/// otherwise stored as sent, trimmed.
pub fn normalize_marks(marks: Vec<AttendanceMark>) -> Result<Vec<AttendanceMark>, AppError> {
    if marks.is_empty() {
        return Err(AppError::InvalidInput("Missing required data.".to_string()));
    }

    marks
        .into_iter()
        .map(|mark| {
            let status = mark.status.trim();
            if status.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Missing status for student {}.",
                    mark.student_id
                )));
            }
            Ok(AttendanceMark::new(mark.student_id, status))
        })
        .collect()
}

/// Attendance service, generic over the schedule and attendance stores.
#[derive(Clone)]
pub struct AttendanceService<S: ScheduleStore, A: AttendanceStore> {
    schedules: S,
    attendance: A,
}

impl<S: ScheduleStore, A: AttendanceStore> AttendanceService<S, A> {
    pub fn new(schedules: S, attendance: A) -> Self {
        Self {
            schedules,
            attendance,
        }
    }

    /// Saves attendance for a schedule on a date. Returns the number of rows
    /// written.
    pub async fn mark(
        &self,
        schedule_id: i32,
        date: NaiveDate,
        marks: Vec<AttendanceMark>,
    ) -> Result<u64, AppError> {
        let marks = normalize_marks(marks)?;
        let saved = self
            .attendance
            .upsert_marks(schedule_id, date, &marks)
            .await?;

        info!(
            "Saved attendance for schedule {} on {}: {} rows",
            schedule_id, date, saved
        );
        Ok(saved)
    }

    /// Full attendance sheet for a schedule on a date: every student in the
    /// schedule's batch with their recorded or default status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ScheduleNotFound`] if the schedule does not exist.
    pub async fn view(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<StudentAttendance>, AppError> {
        let batch = self
            .schedules
            .batch_for_schedule(schedule_id)
            .await?
            .ok_or(AppError::ScheduleNotFound(schedule_id))?;

        let roster = self.schedules.students_in_batch(&batch).await?;
        let records = self.attendance.records_for(schedule_id, date).await?;
        debug!(
            "Merging {} roster students with {} attendance rows (batch {})",
            roster.len(),
            records.len(),
            batch
        );

        Ok(merge_attendance(roster, records))
    }
}
