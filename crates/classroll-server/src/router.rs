//! Router configuration and route composition.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::require_teacher;
use crate::config::ServerConfig;
use crate::handlers::{account, attendance, health, pages, schedule, students};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(pages::index))
        .route("/teacher", get(pages::teacher_portal))
        .route("/teacher/login", post(account::login))
        .route("/teacher/logout", post(account::logout))
        .route("/api/teacher/session", get(account::session))
        .route("/health", get(health::health_check));

    // Teacher routes (require a signed session cookie)
    let protected_routes = Router::new()
        .route("/api/teacher/schedule", get(schedule::weekly_schedule))
        .route("/api/teacher/today_classes", get(schedule::today_classes))
        .route("/api/teacher/all_classes", get(schedule::all_classes))
        .route("/api/teacher/class_students", get(students::class_students))
        .route(
            "/api/teacher/mark_attendance",
            post(attendance::mark_attendance),
        )
        .route("/api/teacher/attendance", get(attendance::view_attendance))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_teacher,
        ));

    let cors_layer = build_cors_layer(&config.cors_origins);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin without credentials (for
/// development). Otherwise, parses comma-separated origins and allows the
/// session cookie to be sent cross-origin.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins.trim() == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed).allow_credentials(true)
    }
}
