//! Teacher authentication with bcrypt-hashed passwords.

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::Teacher;
use crate::traits::TeacherStore;

pub use bcrypt::DEFAULT_COST;

/// Hashes a password with bcrypt at the given cost (4..=31).
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Checks a password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Returns true if `stored` looks like a bcrypt hash (`$2a$`, `$2b$`, `$2x$`
/// or `$2y$` prefix, 60 characters). Anything else is a legacy plaintext
/// credential.
pub fn is_password_hash(stored: &str) -> bool {
    stored.len() == 60
        && ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| stored.starts_with(prefix))
}

/// Login service over any [`TeacherStore`].
#[derive(Clone)]
pub struct AuthService<T: TeacherStore> {
    store: T,
}

impl<T: TeacherStore> AuthService<T> {
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Verifies an email/password pair.
    ///
    /// bcrypt verification runs on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if either field is blank
    /// - [`AppError::InvalidCredentials`] if no teacher matches, the password
    ///   is wrong, or the stored credential is not a bcrypt hash
    pub async fn login(&self, email: &str, password: &str) -> Result<Teacher, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Email and password are required.".to_string(),
            ));
        }

        let Some(credentials) = self.store.find_by_email(email).await? else {
            info!("Login rejected for {}: unknown email", email);
            return Err(AppError::InvalidCredentials);
        };

        if !is_password_hash(&credentials.password_hash) {
            warn!(
                "Teacher {} has a non-bcrypt stored credential; run `classroll upgrade-passwords`",
                credentials.teacher_id
            );
            return Err(AppError::InvalidCredentials);
        }

        let password = password.to_string();
        let hash = credentials.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Generic(format!("Password check task failed: {}", e)))??;

        if !matches {
            info!("Login rejected for {}: wrong password", email);
            return Err(AppError::InvalidCredentials);
        }

        info!("Teacher {} logged in", credentials.teacher_id);
        Ok(credentials.into())
    }
}
