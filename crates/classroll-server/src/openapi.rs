//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    AttendanceEntry, AttendanceQuery, AttendanceResponse, ClassSummaryDto, ClassesResponse,
    DayClassDto, DayClassesResponse, HealthResponse, LoginRequest, LoginResponse,
    MarkAttendanceRequest, MessageResponse, RosterQuery, ScheduleEntryDto, ScheduleResponse,
    ServiceStatus, SessionResponse, StudentAttendanceDto, StudentDto, StudentsResponse,
    SuccessResponse, TeacherDto,
};
use crate::error::ErrorResponse;
use crate::handlers::{account, attendance, health, schedule, students};

/// OpenAPI documentation for the classroll API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classroll API",
        version = "1.0.0",
        description = "Teacher portal backend: timetables, class rosters and attendance.

Authentication uses a signed session cookie set by `POST /teacher/login`.
Every `/api/teacher/*` endpoint except `/api/teacher/session` requires it.

## Quick Start

1. Log in: `POST /teacher/login` with `{\"email\": ..., \"password\": ...}`
2. List today's classes: `GET /api/teacher/today_classes`
3. Load the sheet: `GET /api/teacher/attendance?schedule_id=12&date=2024-05-06`
4. Save it: `POST /api/teacher/mark_attendance`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    paths(
        health::health_check,
        account::login,
        account::logout,
        account::session,
        schedule::weekly_schedule,
        schedule::today_classes,
        schedule::all_classes,
        students::class_students,
        attendance::mark_attendance,
        attendance::view_attendance,
    ),
    components(
        schemas(
            // Request types
            LoginRequest,
            RosterQuery,
            AttendanceQuery,
            MarkAttendanceRequest,
            AttendanceEntry,
            // Response types
            ErrorResponse,
            HealthResponse,
            ServiceStatus,
            TeacherDto,
            LoginResponse,
            SuccessResponse,
            MessageResponse,
            SessionResponse,
            ScheduleEntryDto,
            ScheduleResponse,
            DayClassDto,
            DayClassesResponse,
            ClassSummaryDto,
            ClassesResponse,
            StudentDto,
            StudentsResponse,
            StudentAttendanceDto,
            AttendanceResponse,
        )
    ),
    tags(
        (name = "system", description = "Server health"),
        (name = "account", description = "Login, logout and session status"),
        (name = "schedule", description = "Teacher timetables"),
        (name = "students", description = "Class rosters"),
        (name = "attendance", description = "Attendance recording and viewing"),
    )
)]
pub struct ApiDoc;
