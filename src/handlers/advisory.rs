//! Field suggestions, advisory submission and lookup, contact form.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{AdvisoryLookup, ContactMessage, FieldQuery, NewAdvisory};
use crate::response::{ok_message, AdvisoryTextBody, SuggestedCrops};
use crate::service::{AdvisoryService, ReferenceService};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// POST /field-advisory
pub async fn field_advisory(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<SuggestedCrops>, AppError> {
    let field = FieldQuery::parse(&body)?;
    let mut conn = state.db.acquire().await?;
    let suggested_crops = ReferenceService::suitable_crops(&mut conn, &field).await?;
    Ok(Json(SuggestedCrops { suggested_crops }))
}

/// POST /advisory
pub async fn submit_advisory(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let advisory = NewAdvisory::parse(&body)?;
    let mut conn = state.db.acquire().await?;
    AdvisoryService::submit(&mut conn, &advisory).await?;
    Ok(ok_message("Advisory saved successfully"))
}

/// POST /get-advisory
pub async fn get_advisory(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<AdvisoryTextBody>, AppError> {
    let lookup = AdvisoryLookup::parse(&body)?;
    let mut conn = state.db.acquire().await?;
    let advisory = AdvisoryService::text(&mut conn, &lookup)
        .await?
        .ok_or_else(|| AppError::NotFound("No advisory available for this crop and severity".into()))?;
    Ok(Json(AdvisoryTextBody {
        message: "Advisory found",
        advisory,
    }))
}

/// POST /submit
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactMessage::parse(&body)?;
    let mut conn = state.db.acquire().await?;
    AdvisoryService::record_contact(&mut conn, &contact).await?;
    Ok(ok_message("Message received successfully"))
}
