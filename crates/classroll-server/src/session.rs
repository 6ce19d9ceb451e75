//! Signed-cookie sessions.
//!
//! The session is a JSON payload in the `classroll_session` cookie, signed
//! with the server [`Key`]. A tampered or foreign cookie fails verification
//! and is treated as absent.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use serde::{Deserialize, Serialize};
use tracing::warn;

use classroll_core::{AppError, Teacher};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "classroll_session";

/// `user_type` value identifying a teacher session.
pub const TEACHER_USER_TYPE: &str = "teacher";

/// Minimum length of `SESSION_SECRET` in bytes.
pub const MIN_SECRET_LEN: usize = 64;

/// Payload stored in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_type: String,
    pub user_id: i32,
    pub user_name: String,
}

impl SessionData {
    pub fn for_teacher(teacher: &Teacher) -> Self {
        Self {
            user_type: TEACHER_USER_TYPE.to_string(),
            user_id: teacher.id,
            user_name: teacher.name.clone(),
        }
    }

    /// Returns the teacher identity if this is a teacher session.
    pub fn teacher(&self) -> Option<TeacherSession> {
        (self.user_type == TEACHER_USER_TYPE).then(|| TeacherSession {
            teacher_id: self.user_id,
            name: self.user_name.clone(),
        })
    }
}

/// Authenticated teacher, inserted into request extensions by
/// [`require_teacher`](crate::auth::require_teacher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSession {
    pub teacher_id: i32,
    pub name: String,
}

/// Builds the session cookie for a logged-in teacher.
pub fn session_cookie(teacher: &Teacher, secure: bool) -> Result<Cookie<'static>, AppError> {
    let payload = serde_json::to_string(&SessionData::for_teacher(teacher))
        .map_err(|e| AppError::Generic(format!("Failed to encode session: {}", e)))?;

    Ok(Cookie::build((SESSION_COOKIE, payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build())
}

/// Cookie matching the session cookie's path, for removal.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Reads the teacher session from a verified jar.
pub fn read_session(jar: &SignedCookieJar) -> Option<TeacherSession> {
    let cookie = jar.get(SESSION_COOKIE)?;
    serde_json::from_str::<SessionData>(cookie.value())
        .ok()?
        .teacher()
}

/// Derives the cookie signing key.
///
/// With no secret configured a random key is generated, so sessions do not
/// survive a restart and are not shared between instances.
pub fn session_key(secret: Option<&str>) -> Result<Key, AppError> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes()).map_err(|_| {
            AppError::ConfigError(format!(
                "SESSION_SECRET must be at least {} bytes",
                MIN_SECRET_LEN
            ))
        }),
        None => {
            warn!("SESSION_SECRET not set; generating a random session key");
            Ok(Key::generate())
        }
    }
}
