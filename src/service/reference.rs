//! Reference lookups: crops, districts, subdistricts, soils, and crop suitability.

use crate::error::AppError;
use crate::models::{Crop, District, FieldQuery, Soil, Subdistrict};
use crate::sql::{SELECT_CROPS, SELECT_DISTRICTS, SELECT_SOILS, SELECT_SUBDISTRICTS, SELECT_SUITABLE_CROPS};
use sqlx::PgConnection;

pub struct ReferenceService;

impl ReferenceService {
    pub async fn crops(conn: &mut PgConnection) -> Result<Vec<Crop>, AppError> {
        tracing::debug!(sql = %SELECT_CROPS, "query");
        sqlx::query_as(SELECT_CROPS)
            .fetch_all(conn)
            .await
            .map_err(AppError::database("Failed to fetch crops"))
    }

    pub async fn districts(conn: &mut PgConnection) -> Result<Vec<District>, AppError> {
        tracing::debug!(sql = %SELECT_DISTRICTS, "query");
        sqlx::query_as(SELECT_DISTRICTS)
            .fetch_all(conn)
            .await
            .map_err(AppError::database("Failed to fetch districts"))
    }

    /// Subdistricts of one district; an unknown district yields an empty list.
    pub async fn subdistricts(conn: &mut PgConnection, district_id: i32) -> Result<Vec<Subdistrict>, AppError> {
        tracing::debug!(sql = %SELECT_SUBDISTRICTS, district_id, "query");
        sqlx::query_as(SELECT_SUBDISTRICTS)
            .bind(district_id)
            .fetch_all(conn)
            .await
            .map_err(AppError::database("Failed to fetch subdistricts"))
    }

    pub async fn soils(conn: &mut PgConnection) -> Result<Vec<Soil>, AppError> {
        tracing::debug!(sql = %SELECT_SOILS, "query");
        sqlx::query_as(SELECT_SOILS)
            .fetch_all(conn)
            .await
            .map_err(AppError::database("Failed to fetch soils"))
    }

    /// Names of crops marked suitable for the field, sorted by name.
    pub async fn suitable_crops(conn: &mut PgConnection, field: &FieldQuery) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %SELECT_SUITABLE_CROPS, ?field, "query");
        sqlx::query_scalar(SELECT_SUITABLE_CROPS)
            .bind(field.district)
            .bind(field.subdistrict)
            .bind(field.soil)
            .fetch_all(conn)
            .await
            .map_err(AppError::database("Failed to fetch crop suggestions"))
    }
}
