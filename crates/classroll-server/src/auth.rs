//! Authentication middleware for teacher-only routes.

use axum::Json;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::error::ErrorResponse;
use crate::session::read_session;

/// Login page that unauthenticated browser requests are sent to.
pub const LOGIN_PAGE: &str = "/teacher";

/// Middleware that requires a verified teacher session.
///
/// On success the [`TeacherSession`](crate::session::TeacherSession) is
/// inserted into the request extensions. Otherwise paths under `/api/` get
/// 401 with the JSON error body and everything else is redirected to the
/// login page.
pub async fn require_teacher(jar: SignedCookieJar, mut request: Request, next: Next) -> Response {
    match read_session(&jar) {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None if request.uri().path().starts_with("/api/") => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Authentication required")),
        )
            .into_response(),
        None => Redirect::to(LOGIN_PAGE).into_response(),
    }
}
