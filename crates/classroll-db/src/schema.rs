//! Database schema for the classroll tables.
//!
//! The production schema is managed outside this crate; these statements
//! mirror `migrations/0001_init.sql` and are used to bootstrap empty
//! databases (`classroll init-db`) and test containers.

use sqlx::PgPool;
use tracing::info;

use classroll_core::AppError;

/// Schema statements, in dependency order. Each statement must be executed
/// separately.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS teachers (
        teacher_id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS classes (
        class_id SERIAL PRIMARY KEY,
        class_name VARCHAR(100) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS subjects (
        subject_id SERIAL PRIMARY KEY,
        subject_name VARCHAR(100) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS schedules (
        schedule_id SERIAL PRIMARY KEY,
        teacher_id INTEGER NOT NULL REFERENCES teachers(teacher_id) ON DELETE CASCADE,
        class_id INTEGER NOT NULL REFERENCES classes(class_id),
        subject_id INTEGER NOT NULL REFERENCES subjects(subject_id),
        day_of_week VARCHAR(10) NOT NULL CHECK (day_of_week IN
            ('Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday', 'Saturday', 'Sunday')),
        start_time TIME NOT NULL,
        end_time TIME NOT NULL,
        batch VARCHAR(50) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS students (
        student_id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        batch VARCHAR(50) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS attendance (
        attendance_id SERIAL PRIMARY KEY,
        student_id INTEGER NOT NULL REFERENCES students(student_id) ON DELETE CASCADE,
        schedule_id INTEGER NOT NULL REFERENCES schedules(schedule_id) ON DELETE CASCADE,
        attendance_date DATE NOT NULL,
        status VARCHAR(20) NOT NULL,
        marked_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT uk_attendance_student_schedule_date UNIQUE (student_id, schedule_id, attendance_date)
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_schedules_teacher ON schedules(teacher_id)",
    "CREATE INDEX IF NOT EXISTS idx_students_batch ON students(batch)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_schedule_date ON attendance(schedule_id, attendance_date)",
];

/// Creates any missing tables and indexes. Safe to run repeatedly.
pub async fn apply_schema(pool: &PgPool) -> Result<(), AppError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Schema applied ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}
