//! Trait definitions for the persistence layer.
//!
//! Services in this crate are generic over these traits so the business
//! logic can be exercised against in-memory stores in tests, while
//! `classroll-db` provides the PostgreSQL implementations.
//!
//! # Example
//!
//! ```
//! use classroll_core::traits::ScheduleStore;
//!
//! async fn roster_size<S: ScheduleStore>(
//!     store: &S,
//!     schedule_id: i32,
//! ) -> Result<Option<usize>, classroll_core::AppError> {
//!     let Some(batch) = store.batch_for_schedule(schedule_id).await? else {
//!         return Ok(None);
//!     };
//!     Ok(Some(store.students_in_batch(&batch).await?.len()))
//! }
//! ```

use std::future::Future;

use chrono::NaiveDate;

use crate::{
    AppError, AttendanceMark, AttendanceRecord, ClassSummary, DayClass, ScheduleEntry, Student,
    TeacherCredentials,
};

/// Lookup of teacher accounts.
pub trait TeacherStore: Send + Sync + Clone {
    /// Finds a teacher by login email. Returns `None` when no account matches.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<TeacherCredentials>, AppError>> + Send;
}

/// Read access to schedules and the students grouped under them.
pub trait ScheduleStore: Send + Sync + Clone {
    /// All schedule rows for a teacher, joined with class and subject names.
    fn weekly_schedule(
        &self,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<ScheduleEntry>, AppError>> + Send;

    /// Schedule rows for a teacher on one weekday, ordered by start time.
    ///
    /// # Arguments
    ///
    /// * `teacher_id` - The teacher whose classes to list
    /// * `day_of_week` - English weekday name, e.g. `"Monday"`
    fn classes_on_day(
        &self,
        teacher_id: i32,
        day_of_week: &str,
    ) -> impl Future<Output = Result<Vec<DayClass>, AppError>> + Send;

    /// Distinct classes taught by a teacher, ordered by class, subject and batch.
    fn distinct_classes(
        &self,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<ClassSummary>, AppError>> + Send;

    /// Resolves the batch of a schedule. Returns `None` for an unknown id.
    fn batch_for_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<String>, AppError>> + Send;

    /// All students in a batch, ordered by name.
    fn students_in_batch(
        &self,
        batch: &str,
    ) -> impl Future<Output = Result<Vec<Student>, AppError>> + Send;
}

/// Persistence of attendance rows.
pub trait AttendanceStore: Send + Sync + Clone {
    /// Inserts or updates one row per mark, keyed by (student, schedule, date).
    ///
    /// The whole batch is applied atomically: any failure leaves no rows
    /// written.
    ///
    /// # Returns
    ///
    /// The number of rows affected.
    fn upsert_marks(
        &self,
        schedule_id: i32,
        date: NaiveDate,
        marks: &[AttendanceMark],
    ) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Attendance rows already stored for a schedule on a date.
    fn records_for(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<AttendanceRecord>, AppError>> + Send;
}
