use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::PriceTrendsRequest;
use crate::prices::PriceTrends;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// POST /crop-price-trends. Served from the in-memory table; never touches the store.
pub async fn crop_price_trends(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<PriceTrends>, AppError> {
    let req = PriceTrendsRequest::parse(&body)?;
    Ok(Json(state.prices.select(req.crops.iter().map(String::as_str))))
}
