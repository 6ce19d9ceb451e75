//! Attendance repository with transactional batch upserts.
//!
//! Writes rely on the `(student_id, schedule_id, attendance_date)` unique
//! constraint: concurrent marks for the same student and date resolve inside
//! PostgreSQL via `ON CONFLICT DO UPDATE`.

use chrono::NaiveDate;
use sqlx::{PgPool, Pool, Postgres};

use classroll_core::error::AppError;
use classroll_core::{AttendanceMark, AttendanceRecord};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: Pool<Postgres>,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upserts one row per mark inside a single transaction.
    ///
    /// On conflict the status is replaced and `marked_at` refreshed. Any
    /// failure drops the transaction uncommitted, rolling back the whole
    /// batch. Returns the total number of rows affected.
    pub async fn upsert_marks(
        &self,
        schedule_id: i32,
        date: NaiveDate,
        marks: &[AttendanceMark],
    ) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::DatabaseError)?;
        let mut affected = 0;

        for mark in marks {
            let result = sqlx::query(
                r#"
                INSERT INTO attendance (student_id, schedule_id, attendance_date, status)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (student_id, schedule_id, attendance_date)
                DO UPDATE SET
                    status = EXCLUDED.status,
                    marked_at = NOW()
                "#,
            )
            .bind(mark.student_id)
            .bind(schedule_id)
            .bind(date)
            .bind(&mark.status)
            .execute(&mut *tx)
            .await
            .map_err(AppError::DatabaseError)?;

            affected += result.rows_affected();
        }

        tx.commit().await.map_err(AppError::DatabaseError)?;
        Ok(affected)
    }

    /// Attendance rows for a schedule on a date.
    pub async fn records_for(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT student_id, status, marked_at
            FROM attendance
            WHERE schedule_id = $1 AND attendance_date = $2
            "#,
        )
        .bind(schedule_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(rows)
    }
}

impl classroll_core::traits::AttendanceStore for AttendanceRepository {
    async fn upsert_marks(
        &self,
        schedule_id: i32,
        date: NaiveDate,
        marks: &[AttendanceMark],
    ) -> Result<u64, AppError> {
        AttendanceRepository::upsert_marks(self, schedule_id, date, marks).await
    }

    async fn records_for(
        &self,
        schedule_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        AttendanceRepository::records_for(self, schedule_id, date).await
    }
}
