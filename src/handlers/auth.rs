//! Signup and login.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{LoginRequest, SignupRequest};
use crate::password::{hash_password, verify_password};
use crate::response::{ok_message, LoginBody};
use crate::service::{AccountService, SIGNUP_FAILED};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

const LOGIN_FAILED: &str = "Login failed";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let req = SignupRequest::parse(&body)?;
    let password = req.password.clone();
    let digest = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| internal(SIGNUP_FAILED, e))?
        .map_err(|e| internal(SIGNUP_FAILED, e))?;

    let mut conn = state.db.acquire().await?;
    AccountService::create_user(&mut conn, &req.name, &req.email, &digest).await?;
    tracing::info!(email = %req.email, "user signed up");
    Ok(ok_message("Signup successful"))
}

/// POST /login. Unknown email and wrong password get the same answer.
pub async fn login(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let req = LoginRequest::parse(&body)?;
    let user = {
        let mut conn = state.db.acquire().await?;
        AccountService::credentials(&mut conn, &req.email).await?
    };
    let Some(user) = user else {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    let user_id = user.id;
    let matches = tokio::task::spawn_blocking(move || verify_password(&user.password_hash, &req.password))
        .await
        .map_err(|e| internal(LOGIN_FAILED, e))?;
    if !matches {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }
    Ok(Json(LoginBody {
        message: "Login successful",
        user_id,
    }))
}

fn internal(message: &'static str, e: impl std::fmt::Display) -> AppError {
    AppError::Internal {
        message,
        detail: e.to_string(),
    }
}
