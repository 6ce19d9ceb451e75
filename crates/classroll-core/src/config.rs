//! Configuration types shared by the classroll binaries.

use std::env;

use crate::error::AppError;

/// Database connection pool configuration.
pub struct DbConfig {
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self { max_connections: 5 }
    }
}

impl DbConfig {
    /// Reads `DB_MAX_CONNECTIONS`, falling back to the default when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_MAX_CONNECTIONS") {
            Ok(value) => Ok(Self {
                max_connections: parse_max_connections(&value)?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

fn parse_max_connections(value: &str) -> Result<u32, AppError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::ConfigError(format!(
            "DB_MAX_CONNECTIONS must be a positive integer, got '{}'",
            value
        ))),
    }
}
