//! Schedule and roster queries.
//!
//! Students are grouped by the schedule's `batch` only; `class_id` is never
//! used to select students.

use sqlx::{PgPool, Pool, Postgres};

use classroll_core::error::AppError;
use classroll_core::{ClassSummary, DayClass, ScheduleEntry, Student};

/// Repository for `schedules` joined with `classes`, `subjects` and `students`.
#[derive(Clone)]
pub struct ScheduleRepository {
    pool: Pool<Postgres>,
}

impl ScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Weekly timetable of a teacher, Monday first, then by start time.
    pub async fn weekly_schedule(&self, teacher_id: i32) -> Result<Vec<ScheduleEntry>, AppError> {
        let rows = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT s.day_of_week, s.start_time, s.end_time, s.batch,
                   c.class_name, sub.subject_name
            FROM schedules s
            JOIN classes c ON s.class_id = c.class_id
            JOIN subjects sub ON s.subject_id = sub.subject_id
            WHERE s.teacher_id = $1
            ORDER BY array_position(
                         ARRAY['Monday', 'Tuesday', 'Wednesday', 'Thursday',
                               'Friday', 'Saturday', 'Sunday']::text[],
                         s.day_of_week::text),
                     s.start_time
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(rows)
    }

    pub async fn classes_on_day(
        &self,
        teacher_id: i32,
        day_of_week: &str,
    ) -> Result<Vec<DayClass>, AppError> {
        let rows = sqlx::query_as::<_, DayClass>(
            r#"
            SELECT s.schedule_id, s.start_time, s.end_time, s.batch,
                   c.class_name, sub.subject_name
            FROM schedules s
            JOIN classes c ON s.class_id = c.class_id
            JOIN subjects sub ON s.subject_id = sub.subject_id
            WHERE s.teacher_id = $1 AND s.day_of_week = $2
            ORDER BY s.start_time
            "#,
        )
        .bind(teacher_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(rows)
    }

    pub async fn distinct_classes(&self, teacher_id: i32) -> Result<Vec<ClassSummary>, AppError> {
        let rows = sqlx::query_as::<_, ClassSummary>(
            r#"
            SELECT DISTINCT s.schedule_id, c.class_name, sub.subject_name, s.batch
            FROM schedules s
            JOIN classes c ON s.class_id = c.class_id
            JOIN subjects sub ON s.subject_id = sub.subject_id
            WHERE s.teacher_id = $1
            ORDER BY c.class_name, sub.subject_name, s.batch
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(rows)
    }

    /// Returns the batch of a schedule, or `None` if the id is unknown.
    pub async fn batch_for_schedule(&self, schedule_id: i32) -> Result<Option<String>, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT batch FROM schedules WHERE schedule_id = $1")
                .bind(schedule_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::DatabaseError)?;

        Ok(row.map(|(batch,)| batch))
    }

    pub async fn students_in_batch(&self, batch: &str) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, email, batch
            FROM students
            WHERE batch = $1
            ORDER BY name, student_id
            "#,
        )
        .bind(batch)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(rows)
    }
}

impl classroll_core::traits::ScheduleStore for ScheduleRepository {
    async fn weekly_schedule(&self, teacher_id: i32) -> Result<Vec<ScheduleEntry>, AppError> {
        ScheduleRepository::weekly_schedule(self, teacher_id).await
    }

    async fn classes_on_day(
        &self,
        teacher_id: i32,
        day_of_week: &str,
    ) -> Result<Vec<DayClass>, AppError> {
        ScheduleRepository::classes_on_day(self, teacher_id, day_of_week).await
    }

    async fn distinct_classes(&self, teacher_id: i32) -> Result<Vec<ClassSummary>, AppError> {
        ScheduleRepository::distinct_classes(self, teacher_id).await
    }

    async fn batch_for_schedule(&self, schedule_id: i32) -> Result<Option<String>, AppError> {
        ScheduleRepository::batch_for_schedule(self, schedule_id).await
    }

    async fn students_in_batch(&self, batch: &str) -> Result<Vec<Student>, AppError> {
        ScheduleRepository::students_in_batch(self, batch).await
    }
}
