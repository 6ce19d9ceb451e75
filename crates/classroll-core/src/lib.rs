//! Classroll Core - Domain types, business logic, and services.
//!
//! This crate provides the core functionality of the classroll teacher portal:
//!
//! - **Domain models**: [`ScheduleEntry`], [`Student`], [`AttendanceRecord`], etc.
//! - **Services**: [`ScheduleService`] for timetables and rosters,
//!   [`AttendanceService`] for recording and viewing attendance,
//!   [`AuthService`] for teacher login
//! - **Traits**: [`TeacherStore`], [`ScheduleStore`], [`AttendanceStore`]
//!   abstract the database so services can be tested in isolation
//!
//! # Example
//!
//! ```ignore
//! use classroll_core::{AttendanceMark, AttendanceService};
//!
//! let service = AttendanceService::new(schedule_repo, attendance_repo);
//! service.mark(12, date, vec![AttendanceMark::new(1, "present")]).await?;
//! let sheet = service.view(12, date).await?;
//! ```

pub mod attendance;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod traits;

// Configuration
pub use config::DbConfig;

// Error handling
pub use error::AppError;

// Domain models
pub use models::{
    AttendanceMark, AttendanceRecord, ClassSummary, DEFAULT_STATUS, DayClass, ScheduleEntry,
    Student, StudentAttendance, Teacher, TeacherCredentials,
};

// Traits for dependency injection
pub use traits::{AttendanceStore, ScheduleStore, TeacherStore};

// Services (generic over trait implementations)
pub use attendance::{AttendanceService, merge_attendance};
pub use auth::{AuthService, hash_password, is_password_hash, verify_password};
pub use schedule::{ScheduleService, weekday_name};
