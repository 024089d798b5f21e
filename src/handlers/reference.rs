//! Reference-data listings. Any failure, including an unreachable store, answers `200 []`.

use crate::error::AppError;
use crate::models::{Crop, District, Soil, Subdistrict};
use crate::service::ReferenceService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

fn or_empty<T>(what: &'static str, result: Result<Vec<T>, AppError>) -> Json<Vec<T>> {
    match result {
        Ok(rows) => Json(rows),
        Err(e) => {
            tracing::error!(error = %e, what, "listing failed, answering with an empty list");
            Json(Vec::new())
        }
    }
}

/// GET /crops
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<Crop>> {
    let result = async {
        let mut conn = state.db.acquire().await?;
        ReferenceService::crops(&mut conn).await
    }
    .await;
    or_empty("crops", result)
}

/// GET /districts
pub async fn list_districts(State(state): State<AppState>) -> Json<Vec<District>> {
    let result = async {
        let mut conn = state.db.acquire().await?;
        ReferenceService::districts(&mut conn).await
    }
    .await;
    or_empty("districts", result)
}

/// GET /subdistricts/:district_id
pub async fn list_subdistricts(
    State(state): State<AppState>,
    Path(district_id): Path<String>,
) -> Result<Json<Vec<Subdistrict>>, AppError> {
    let district_id: i32 = district_id
        .parse()
        .map_err(|_| AppError::Validation("Invalid district id".into()))?;
    let result = async {
        let mut conn = state.db.acquire().await?;
        ReferenceService::subdistricts(&mut conn, district_id).await
    }
    .await;
    Ok(or_empty("subdistricts", result))
}

/// GET /soils
pub async fn list_soils(State(state): State<AppState>) -> Json<Vec<Soil>> {
    let result = async {
        let mut conn = state.db.acquire().await?;
        ReferenceService::soils(&mut conn).await
    }
    .await;
    or_empty("soils", result)
}
