//! Static pages.

use axum::response::{Html, Redirect};

use crate::auth::LOGIN_PAGE;

const TEACHER_PORTAL_HTML: &str = include_str!("../../assets/teacher_portal.html");

/// `GET /` sends browsers to the login page.
pub async fn index() -> Redirect {
    Redirect::to(LOGIN_PAGE)
}

/// `GET /teacher` serves the portal page.
pub async fn teacher_portal() -> Html<&'static str> {
    Html(TEACHER_PORTAL_HTML)
}
