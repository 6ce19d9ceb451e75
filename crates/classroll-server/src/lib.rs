//! Classroll Server - REST API for the teacher portal
//!
//! This crate provides the HTTP API in front of the classroll services:
//!
//! - **Account**: login and logout with signed session cookies
//! - **Schedule**: weekly timetable, today's classes, distinct classes
//! - **Students**: roster of a schedule's batch
//! - **Attendance**: batch upsert and the merged attendance sheet
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use session::session_key;
pub use state::AppState;
