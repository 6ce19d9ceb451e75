//! Attendance recording and viewing.

use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::info;

use crate::dto::{AttendanceQuery, AttendanceResponse, MarkAttendanceRequest, MessageResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::session::TeacherSession;
use crate::state::AppState;

/// Save attendance for a schedule on a date.
///
/// All rows are written in one transaction; on failure nothing is saved.
#[utoipa::path(
    post,
    path = "/api/teacher/mark_attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Attendance saved", body = MessageResponse),
        (status = 400, description = "Missing or invalid data", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "attendance"
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    Extension(teacher): Extension<TeacherSession>,
    body: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body?;
    let req = req.validate()?;

    info!(
        "Teacher {} marking {} students for schedule {} on {}",
        teacher.teacher_id,
        req.marks.len(),
        req.schedule_id,
        req.date
    );
    let saved = state
        .attendance_service
        .mark(req.schedule_id, req.date, req.marks)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: format!("Attendance for {} students saved.", saved),
    }))
}

/// Attendance sheet for a schedule on a date.
///
/// Lists every student in the schedule's batch; students without a record
/// are reported as `absent` with a null timestamp.
#[utoipa::path(
    get,
    path = "/api/teacher/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Merged attendance sheet", body = AttendanceResponse),
        (status = 400, description = "Missing or invalid schedule_id or date", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Schedule not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "attendance"
)]
pub async fn view_attendance(
    State(state): State<AppState>,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let Query(params) = query?;
    let (schedule_id, date) = params.validate()?;

    let sheet = state.attendance_service.view(schedule_id, date).await?;

    Ok(Json(AttendanceResponse {
        success: true,
        data: sheet.into_iter().map(Into::into).collect(),
    }))
}
