// src/features/settings/handler.rs

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::settings::dto::{OrganizationSettings, UpdateSettingsRequest};
use crate::types::ApiResponse;

/// Current organization settings.
pub async fn get_settings_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrganizationSettings>>> {
    let settings = app_state.settings_service.get().await;

    Ok(Json(ApiResponse::success(
        "Settings retrieved successfully",
        settings,
    )))
}

/// Replace the organization settings.
pub async fn update_settings_handler(
    State(app_state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> AppResult<Json<ApiResponse<OrganizationSettings>>> {
    request.validate()?;

    let settings = app_state.settings_service.update(&request).await;

    Ok(Json(ApiResponse::success(
        "Settings updated successfully",
        settings,
    )))
}

/// Settings panel router
pub fn settings_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .with_state(app_state)
}
