//! Timetable endpoints for the logged-in teacher.

use axum::{Extension, Json, extract::State};

use crate::dto::{ClassesResponse, DayClassesResponse, ScheduleResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::session::TeacherSession;
use crate::state::AppState;

/// Weekly timetable, Monday first.
#[utoipa::path(
    get,
    path = "/api/teacher/schedule",
    responses(
        (status = 200, description = "Weekly schedule", body = ScheduleResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "schedule"
)]
pub async fn weekly_schedule(
    State(state): State<AppState>,
    Extension(teacher): Extension<TeacherSession>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let entries = state.schedule_service.weekly(teacher.teacher_id).await?;

    Ok(Json(ScheduleResponse {
        success: true,
        data: entries.into_iter().map(Into::into).collect(),
    }))
}

/// Classes on the server's current weekday, by start time.
#[utoipa::path(
    get,
    path = "/api/teacher/today_classes",
    responses(
        (status = 200, description = "Today's classes", body = DayClassesResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "schedule"
)]
pub async fn today_classes(
    State(state): State<AppState>,
    Extension(teacher): Extension<TeacherSession>,
) -> Result<Json<DayClassesResponse>, ApiError> {
    let classes = state.schedule_service.today(teacher.teacher_id).await?;

    Ok(Json(DayClassesResponse {
        success: true,
        data: classes.into_iter().map(Into::into).collect(),
    }))
}

/// Every distinct class, subject and batch the teacher is scheduled for.
#[utoipa::path(
    get,
    path = "/api/teacher/all_classes",
    responses(
        (status = 200, description = "Distinct classes", body = ClassesResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "schedule"
)]
pub async fn all_classes(
    State(state): State<AppState>,
    Extension(teacher): Extension<TeacherSession>,
) -> Result<Json<ClassesResponse>, ApiError> {
    let classes = state.schedule_service.all_classes(teacher.teacher_id).await?;

    Ok(Json(ClassesResponse {
        success: true,
        data: classes.into_iter().map(Into::into).collect(),
    }))
}
