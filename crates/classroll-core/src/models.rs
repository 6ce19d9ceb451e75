//! Domain models shared by the repositories, services and API layer.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Status reported for a roster student with no attendance row for the date.
pub const DEFAULT_STATUS: &str = "absent";

/// Public identity of a teacher, as carried in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
}

/// Teacher row including the stored password hash. Never leaves the
/// service layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeacherCredentials {
    pub teacher_id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<TeacherCredentials> for Teacher {
    fn from(c: TeacherCredentials) -> Self {
        Self {
            id: c.teacher_id,
            name: c.name,
        }
    }
}

/// One row of a teacher's weekly timetable.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ScheduleEntry {
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub batch: String,
    pub class_name: String,
    pub subject_name: String,
}

/// A class taking place on a given weekday, with its schedule id.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DayClass {
    pub schedule_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub batch: String,
    pub class_name: String,
    pub subject_name: String,
}

/// Distinct class/subject/batch combination taught by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClassSummary {
    pub schedule_id: i32,
    pub class_name: String,
    pub subject_name: String,
    pub batch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub student_id: i32,
    pub name: String,
    pub email: String,
    pub batch: String,
}

/// Stored attendance row for one student, schedule and date.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub student_id: i32,
    pub status: String,
    pub marked_at: Option<DateTime<Utc>>,
}

/// A single `{student_id, status}` pair submitted by the teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub student_id: i32,
    pub status: String,
}

impl AttendanceMark {
    pub fn new(student_id: i32, status: impl Into<String>) -> Self {
        Self {
            student_id,
            status: status.into(),
        }
    }
}

/// Roster student merged with their attendance for one date.
///
/// `timestamp` is `None` when the student has no stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentAttendance {
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub status: String,
    pub timestamp: Option<String>,
}
