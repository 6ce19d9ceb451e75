//! Class roster endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::dto::{RosterQuery, StudentsResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Students in the batch of a schedule, ordered by name.
#[utoipa::path(
    get,
    path = "/api/teacher/class_students",
    params(RosterQuery),
    responses(
        (status = 200, description = "Students in the schedule's batch", body = StudentsResponse),
        (status = 400, description = "Missing or invalid schedule_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Schedule not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "students"
)]
pub async fn class_students(
    State(state): State<AppState>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Result<Json<StudentsResponse>, ApiError> {
    let Query(params) = query?;
    let schedule_id = params.schedule_id()?;

    let students = state.schedule_service.roster(schedule_id).await?;

    Ok(Json(StudentsResponse {
        success: true,
        data: students.into_iter().map(Into::into).collect(),
    }))
}
