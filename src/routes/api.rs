//! Advisory API routes, one per endpoint.

use crate::handlers::{
    crop_price_trends, field_advisory, get_advisory, list_crops, list_districts, list_soils, list_subdistricts,
    login, signup, submit_advisory, submit_contact,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/crops", get(list_crops))
        .route("/districts", get(list_districts))
        .route("/subdistricts/:district_id", get(list_subdistricts))
        .route("/soils", get(list_soils))
        .route("/field-advisory", post(field_advisory))
        .route("/advisory", post(submit_advisory))
        .route("/get-advisory", post(get_advisory))
        .route("/submit", post(submit_contact))
        .route("/crop-price-trends", post(crop_price_trends))
        .with_state(state)
}
