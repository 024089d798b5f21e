//! User rows: creation at signup and credential lookup at login.

use crate::error::AppError;
use crate::models::UserCredentials;
use crate::sql::{INSERT_USER, SELECT_USER_CREDENTIALS};
use sqlx::{Connection, PgConnection};

pub const EMAIL_TAKEN: &str = "Email already exists";
pub(crate) const SIGNUP_FAILED: &str = "Signup failed";

pub struct AccountService;

impl AccountService {
    /// Insert a user with an already-hashed password. A taken email is `Duplicate`, not retried.
    pub async fn create_user(
        conn: &mut PgConnection,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT_USER, "query");
        let mut tx = conn.begin().await.map_err(AppError::database(SIGNUP_FAILED))?;
        let inserted = sqlx::query(INSERT_USER)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(&mut *tx)
            .await;
        match inserted {
            Ok(_) => tx.commit().await.map_err(AppError::database(SIGNUP_FAILED)),
            Err(e) if is_unique_violation(&e) => Err(AppError::Duplicate(EMAIL_TAKEN.into())),
            Err(e) => Err(AppError::database(SIGNUP_FAILED)(e)),
        }
    }

    pub async fn credentials(conn: &mut PgConnection, email: &str) -> Result<Option<UserCredentials>, AppError> {
        tracing::debug!(sql = %SELECT_USER_CREDENTIALS, "query");
        sqlx::query_as(SELECT_USER_CREDENTIALS)
            .bind(email)
            .fetch_optional(conn)
            .await
            .map_err(AppError::database("Login failed"))
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
