// src/features/auth/handler.rs

use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::auth::dto::{SigninRequest, SignupRequest};
use crate::types::ApiResponse;

/// Register a new user via the external auth backend.
pub async fn signup_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    request.validate()?;

    let payload = app_state.auth_service.signup(&request).await?;

    Ok(Json(ApiResponse::success(
        "Signup forwarded successfully",
        payload,
    )))
}

/// Sign in via the external auth backend.
pub async fn signin_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    request.validate()?;

    let payload = app_state.auth_service.signin(&request).await?;

    Ok(Json(ApiResponse::success(
        "Signin forwarded successfully",
        payload,
    )))
}

/// Auth gateway router
pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .with_state(app_state)
}
