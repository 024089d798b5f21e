//! Response bodies shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct LoginBody {
    pub message: &'static str,
    pub user_id: i32,
}

#[derive(Serialize, Debug)]
pub struct AdvisoryTextBody {
    pub message: &'static str,
    pub advisory: String,
}

#[derive(Serialize, Debug)]
pub struct SuggestedCrops {
    pub suggested_crops: Vec<String>,
}

/// `200 {"message": ...}`.
pub fn ok_message(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.to_string(),
        }),
    )
}
