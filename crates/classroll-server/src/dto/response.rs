//! Response DTOs for API endpoints.

use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use classroll_core::{
    ClassSummary, DayClass, ScheduleEntry, Student, StudentAttendance, Teacher,
};

use crate::session::TeacherSession;

/// Wire format of schedule times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Database connectivity status
    pub database: ServiceStatus,
}

/// Status of an individual service component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the service is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Account
// =============================================================================

/// Public teacher identity.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherDto {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "Ms. Rivera")]
    pub name: String,
}

impl From<Teacher> for TeacherDto {
    fn from(t: Teacher) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

impl From<TeacherSession> for TeacherDto {
    fn from(s: TeacherSession) -> Self {
        Self {
            id: s.teacher_id,
            name: s.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub teacher: TeacherDto,
}

/// Bare `{success: true}` acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(example = "Attendance for 2 students saved.")]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<TeacherDto>,
}

// =============================================================================
// Schedule
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleEntryDto {
    #[schema(example = "Monday")]
    pub day_of_week: String,
    #[schema(example = "10:00:00")]
    pub start_time: String,
    #[schema(example = "11:00:00")]
    pub end_time: String,
    pub batch: String,
    pub class_name: String,
    pub subject_name: String,
}

impl From<ScheduleEntry> for ScheduleEntryDto {
    fn from(e: ScheduleEntry) -> Self {
        Self {
            day_of_week: e.day_of_week,
            start_time: format_time(e.start_time),
            end_time: format_time(e.end_time),
            batch: e.batch,
            class_name: e.class_name,
            subject_name: e.subject_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayClassDto {
    pub schedule_id: i32,
    #[schema(example = "10:00:00")]
    pub start_time: String,
    #[schema(example = "11:00:00")]
    pub end_time: String,
    pub batch: String,
    pub class_name: String,
    pub subject_name: String,
}

impl From<DayClass> for DayClassDto {
    fn from(c: DayClass) -> Self {
        Self {
            schedule_id: c.schedule_id,
            start_time: format_time(c.start_time),
            end_time: format_time(c.end_time),
            batch: c.batch,
            class_name: c.class_name,
            subject_name: c.subject_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassSummaryDto {
    pub schedule_id: i32,
    pub class_name: String,
    pub subject_name: String,
    pub batch: String,
}

impl From<ClassSummary> for ClassSummaryDto {
    fn from(c: ClassSummary) -> Self {
        Self {
            schedule_id: c.schedule_id,
            class_name: c.class_name,
            subject_name: c.subject_name,
            batch: c.batch,
        }
    }
}

/// Weekly timetable response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub success: bool,
    pub data: Vec<ScheduleEntryDto>,
}

/// Today's classes response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DayClassesResponse {
    pub success: bool,
    pub data: Vec<DayClassDto>,
}

/// Distinct classes response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassesResponse {
    pub success: bool,
    pub data: Vec<ClassSummaryDto>,
}

// =============================================================================
// Students & attendance
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDto {
    pub student_id: i32,
    pub name: String,
    pub email: String,
    pub batch: String,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            student_id: s.student_id,
            name: s.name,
            email: s.email,
            batch: s.batch,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentsResponse {
    pub success: bool,
    pub data: Vec<StudentDto>,
}

/// One roster student with their status for the requested date.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentAttendanceDto {
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    /// Recorded status, or "absent" when nothing was recorded
    #[schema(example = "present")]
    pub status: String,
    /// When the status was recorded; null if never
    #[schema(example = "2024-05-06 10:05:12")]
    pub timestamp: Option<String>,
}

impl From<StudentAttendance> for StudentAttendanceDto {
    fn from(a: StudentAttendance) -> Self {
        Self {
            student_id: a.student_id,
            student_name: a.student_name,
            student_email: a.student_email,
            status: a.status,
            timestamp: a.timestamp,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub success: bool,
    pub data: Vec<StudentAttendanceDto>,
}
