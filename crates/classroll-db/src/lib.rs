//! Classroll DB - Database repository layer for PostgreSQL
//!
//! This crate provides the repository pattern for the teacher portal's
//! persistence, implementing the store traits of `classroll-core`.
//!
//! # Overview
//!
//! The main components are:
//! - [`TeacherRepository`] - Teacher accounts and password hashes
//! - [`ScheduleRepository`] - Timetables and batch rosters
//! - [`AttendanceRepository`] - Attendance upserts and lookups
//! - [`schema`] - Table definitions for bootstrapping empty databases

mod attendance_repository;
mod schedule_repository;
pub mod schema;
mod teacher_repository;

pub use attendance_repository::AttendanceRepository;
pub use schedule_repository::ScheduleRepository;
pub use schema::apply_schema;
pub use teacher_repository::TeacherRepository;

use classroll_core::AppError;
use sqlx::PgPool;

/// Checks database connectivity by executing a simple query.
pub async fn health_check(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(AppError::DatabaseError)?;
    Ok(())
}
