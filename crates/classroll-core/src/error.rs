use thiserror::Error;

/// Application-wide error types.
///
/// This enum represents all possible errors that can occur in the classroll
/// services. It uses the `thiserror` crate for ergonomic error handling and
/// automatic conversion from underlying library errors.
///
/// # Error Conversion
///
/// - `sqlx::Error` → `AppError::DatabaseError`
/// - `bcrypt::BcryptError` → `AppError::PasswordHash`
///
/// # Examples
///
/// ```no_run
/// use classroll_core::error::AppError;
///
/// fn example() -> Result<(), AppError> {
///     Err(AppError::InvalidInput("Schedule ID is required.".to_string()))
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// Wraps every error from SQLx: connection failures, query errors and
    /// constraint violations. Use [`AppError::is_connectivity`] to tell
    /// them apart.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// The requested schedule does not exist.
    #[error("Schedule not found: {0}")]
    ScheduleNotFound(i32),

    /// A required field was missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// Email/password pair did not match a teacher.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Hashing or verifying a password failed.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Configuration value was missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic application error for cases not covered by specific variants.
    #[error("Error: {0}")]
    Generic(String),
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::PasswordHash(err.to_string())
    }
}

impl AppError {
    /// Returns true when the error means the database could not be reached,
    /// as opposed to a query or constraint failure reported by the server.
    ///
    /// # Examples
    ///
    /// ```
    /// use classroll_core::error::AppError;
    ///
    /// assert!(AppError::DatabaseError(sqlx::Error::PoolTimedOut).is_connectivity());
    /// assert!(!AppError::DatabaseError(sqlx::Error::RowNotFound).is_connectivity());
    /// assert!(!AppError::InvalidCredentials.is_connectivity());
    /// ```
    pub fn is_connectivity(&self) -> bool {
        match self {
            AppError::DatabaseError(e) => matches!(
                e,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
                    | sqlx::Error::Configuration(_)
            ),
            _ => false,
        }
    }

    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::DatabaseError(e) => {
                if self.is_connectivity() {
                    "Cannot connect to database. Is PostgreSQL running?\n   Check DATABASE_URL."
                        .to_string()
                } else {
                    format!("Database error: {}", e)
                }
            }
            AppError::ScheduleNotFound(id) => format!("No schedule with id {}", id),
            AppError::InvalidCredentials => {
                "Invalid credentials.\n   Check the email address and password.".to_string()
            }
            AppError::PasswordHash(msg) => format!(
                "Could not process password: {}\n   Stored credentials may need `classroll upgrade-passwords`.",
                msg
            ),
            AppError::ConfigError(msg) => {
                format!("Configuration error: {}\n   Check your environment.", msg)
            }
            _ => self.to_string(),
        }
    }
}
