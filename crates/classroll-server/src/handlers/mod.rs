//! HTTP request handlers for API endpoints.

pub mod account;
pub mod attendance;
pub mod health;
pub mod pages;
pub mod schedule;
pub mod students;
