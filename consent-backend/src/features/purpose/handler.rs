// src/features/purpose/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::purpose::dto::{PurposeActiveRequest, PurposeSearchQuery};
use crate::features::purpose::model::PurposeRecord;
use crate::types::{ApiResponse, PaginatedResponse};

/// List processing purposes filtered by search text and state.
pub async fn list_purposes_handler(
    State(app_state): State<AppState>,
    Query(query): Query<PurposeSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<PurposeRecord>>>> {
    let page = app_state.purpose_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Purposes retrieved successfully",
        page,
    )))
}

/// Activate or retire one processing purpose.
pub async fn update_purpose_active_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PurposeActiveRequest>,
) -> AppResult<Json<ApiResponse<PurposeRecord>>> {
    let updated = app_state.purpose_service.set_active(&id, &request).await?;

    Ok(Json(ApiResponse::success(
        "Purpose updated successfully",
        updated,
    )))
}

/// Purposes panel router
pub fn purpose_router(app_state: AppState) -> Router {
    Router::new()
        .route("/purposes", get(list_purposes_handler))
        .route("/purposes/{id}/active", patch(update_purpose_active_handler))
        .with_state(app_state)
}
