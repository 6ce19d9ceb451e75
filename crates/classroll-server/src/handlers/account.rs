//! Login, logout and session status.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::SignedCookieJar;
use tracing::info;

use crate::dto::{LoginRequest, LoginResponse, SessionResponse, SuccessResponse, TeacherDto};
use crate::error::{ApiError, ErrorResponse};
use crate::session::{read_session, removal_cookie, session_cookie};
use crate::state::AppState;

/// Log a teacher in and start a session.
#[utoipa::path(
    post,
    path = "/teacher/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "account"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(SignedCookieJar, Json<LoginResponse>), ApiError> {
    let Json(req) = body?;

    let teacher = state.auth_service.login(&req.email, &req.password).await?;
    let cookie = session_cookie(&teacher, state.cookie_secure)?;

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            success: true,
            teacher: teacher.into(),
        }),
    ))
}

/// End the session.
#[utoipa::path(
    post,
    path = "/teacher/logout",
    responses(
        (status = 200, description = "Session cleared", body = SuccessResponse),
    ),
    tag = "account"
)]
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Json<SuccessResponse>) {
    if let Some(session) = read_session(&jar) {
        info!("Teacher {} logged out", session.teacher_id);
    }
    (jar.remove(removal_cookie()), Json(SuccessResponse { success: true }))
}

/// Report whether the caller has a teacher session.
#[utoipa::path(
    get,
    path = "/api/teacher/session",
    responses(
        (status = 200, description = "Session status", body = SessionResponse),
    ),
    tag = "account"
)]
pub async fn session(jar: SignedCookieJar) -> Json<SessionResponse> {
    let teacher = read_session(&jar).map(TeacherDto::from);
    Json(SessionResponse {
        logged_in: teacher.is_some(),
        teacher,
    })
}
