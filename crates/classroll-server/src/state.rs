use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

use classroll_core::{AttendanceService, AuthService, ScheduleService};
use classroll_db::{AttendanceRepository, ScheduleRepository, TeacherRepository};

/// Shared application state for all handlers.
///
/// Axum clones this per request, so every field is cheap to clone
/// (repositories hold an `Arc`-backed pool).
#[derive(Clone)]
pub struct AppState {
    /// Timetable and roster queries
    pub schedule_service: ScheduleService<ScheduleRepository>,

    /// Attendance writes and the merged attendance view
    pub attendance_service: AttendanceService<ScheduleRepository, AttendanceRepository>,

    /// Teacher login
    pub auth_service: AuthService<TeacherRepository>,

    /// Pool handle for health checks
    pub pool: PgPool,

    /// Key used to sign session cookies
    pub cookie_key: Key,

    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}

impl AppState {
    /// Creates a new application state with all services initialized.
    pub fn new(pool: PgPool, cookie_key: Key, cookie_secure: bool) -> Self {
        let schedule_repo = ScheduleRepository::new(pool.clone());
        let attendance_repo = AttendanceRepository::new(pool.clone());
        let teacher_repo = TeacherRepository::new(pool.clone());

        Self {
            schedule_service: ScheduleService::new(schedule_repo.clone()),
            attendance_service: AttendanceService::new(schedule_repo, attendance_repo),
            auth_service: AuthService::new(teacher_repo),
            pool,
            cookie_key,
            cookie_secure,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
