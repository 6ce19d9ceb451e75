//! Teacher account repository.

use sqlx::{PgPool, Pool, Postgres};

use classroll_core::TeacherCredentials;
use classroll_core::error::AppError;

/// Repository for the `teachers` table.
///
/// # Examples
///
/// ```no_run
/// use sqlx::postgres::PgPoolOptions;
/// use classroll_db::TeacherRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = PgPoolOptions::new()
///     .max_connections(5)
///     .connect("postgresql://localhost/classroll")
///     .await?;
///
/// let repo = TeacherRepository::new(pool);
/// let teacher = repo.find_by_email("rivera@school.test").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TeacherRepository {
    pool: Pool<Postgres>,
}

impl TeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Looks up a teacher by email, including the stored password hash.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<TeacherCredentials>, AppError> {
        let teacher = sqlx::query_as::<_, TeacherCredentials>(
            r#"
            SELECT teacher_id, name, email, password_hash
            FROM teachers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(teacher)
    }

    /// Returns every teacher row. Used by the credential upgrade command.
    pub async fn list_credentials(&self) -> Result<Vec<TeacherCredentials>, AppError> {
        let teachers = sqlx::query_as::<_, TeacherCredentials>(
            r#"
            SELECT teacher_id, name, email, password_hash
            FROM teachers
            ORDER BY teacher_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(teachers)
    }

    /// Replaces the stored hash for a teacher. Returns true if a row was updated.
    pub async fn update_password_hash(
        &self,
        teacher_id: i32,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE teachers SET password_hash = $2 WHERE teacher_id = $1")
            .bind(teacher_id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }
}

impl classroll_core::traits::TeacherStore for TeacherRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<TeacherCredentials>, AppError> {
        TeacherRepository::find_by_email(self, email).await
    }
}
