//! Advisory submissions, advisory text lookup, and contact messages.

use crate::error::AppError;
use crate::models::{AdvisoryLookup, ContactMessage, NewAdvisory};
use crate::sql::{INSERT_ADVISORY, INSERT_CONTACT_MESSAGE, SELECT_ADVISORY_TEXT};
use sqlx::{Connection, PgConnection};

const SAVE_ADVISORY_FAILED: &str = "Failed to save advisory";
const SAVE_MESSAGE_FAILED: &str = "Failed to save message";

pub struct AdvisoryService;

impl AdvisoryService {
    pub async fn submit(conn: &mut PgConnection, advisory: &NewAdvisory) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT_ADVISORY, ?advisory, "query");
        let mut tx = conn.begin().await.map_err(AppError::database(SAVE_ADVISORY_FAILED))?;
        sqlx::query(INSERT_ADVISORY)
            .bind(advisory.crop)
            .bind(advisory.district)
            .bind(advisory.subdistrict)
            .bind(advisory.soil)
            .bind(&advisory.severity)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database(SAVE_ADVISORY_FAILED))?;
        tx.commit().await.map_err(AppError::database(SAVE_ADVISORY_FAILED))
    }

    /// Stored text for a crop and severity, or `None` when the pair has no entry.
    pub async fn text(conn: &mut PgConnection, lookup: &AdvisoryLookup) -> Result<Option<String>, AppError> {
        tracing::debug!(sql = %SELECT_ADVISORY_TEXT, ?lookup, "query");
        sqlx::query_scalar(SELECT_ADVISORY_TEXT)
            .bind(lookup.crop)
            .bind(&lookup.severity)
            .fetch_optional(conn)
            .await
            .map_err(AppError::database("Failed to fetch advisory"))
    }

    pub async fn record_contact(conn: &mut PgConnection, contact: &ContactMessage) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT_CONTACT_MESSAGE, "query");
        let mut tx = conn.begin().await.map_err(AppError::database(SAVE_MESSAGE_FAILED))?;
        sqlx::query(INSERT_CONTACT_MESSAGE)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.message)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database(SAVE_MESSAGE_FAILED))?;
        tx.commit().await.map_err(AppError::database(SAVE_MESSAGE_FAILED))
    }
}
