//! Timetable queries for the logged-in teacher.

use chrono::{Datelike, Local, Weekday};

use crate::error::AppError;
use crate::models::{ClassSummary, DayClass, ScheduleEntry, Student};
use crate::traits::ScheduleStore;

/// Weekday names in the form stored in `schedules.day_of_week`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the stored name for a weekday (`Weekday::Mon` → `"Monday"`).
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Schedule service over any [`ScheduleStore`].
///
/// Every call goes to the store; nothing is cached.
#[derive(Clone)]
pub struct ScheduleService<S: ScheduleStore> {
    store: S,
}

impl<S: ScheduleStore> ScheduleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn weekly(&self, teacher_id: i32) -> Result<Vec<ScheduleEntry>, AppError> {
        self.store.weekly_schedule(teacher_id).await
    }

    /// Classes for the current weekday in server local time.
    pub async fn today(&self, teacher_id: i32) -> Result<Vec<DayClass>, AppError> {
        self.on_day(teacher_id, Local::now().weekday()).await
    }

    pub async fn on_day(&self, teacher_id: i32, day: Weekday) -> Result<Vec<DayClass>, AppError> {
        self.store
            .classes_on_day(teacher_id, weekday_name(day))
            .await
    }

    pub async fn all_classes(&self, teacher_id: i32) -> Result<Vec<ClassSummary>, AppError> {
        self.store.distinct_classes(teacher_id).await
    }

    /// Students in the batch of `schedule_id`, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ScheduleNotFound`] if the schedule does not exist.
    pub async fn roster(&self, schedule_id: i32) -> Result<Vec<Student>, AppError> {
        let batch = self
            .store
            .batch_for_schedule(schedule_id)
            .await?
            .ok_or(AppError::ScheduleNotFound(schedule_id))?;

        self.store.students_in_batch(&batch).await
    }
}
