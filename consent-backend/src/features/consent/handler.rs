// src/features/consent/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use validator::Validate;

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::consent::dto::{ConsentSearchQuery, ConsentStatusUpdateRequest};
use crate::features::consent::model::ConsentRecord;
use crate::filtering::CategoryOption;
use crate::types::{ApiResponse, PaginatedResponse};

/// List consents filtered by search text, purpose and status.
pub async fn list_consents_handler(
    State(app_state): State<AppState>,
    Query(query): Query<ConsentSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<ConsentRecord>>>> {
    let page = app_state.consent_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Consents retrieved successfully",
        page,
    )))
}

/// Purpose dropdown options derived from the current record set.
pub async fn purpose_options_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryOption>>>> {
    let options = app_state.consent_service.purpose_options().await;

    Ok(Json(ApiResponse::success(
        "Purpose options retrieved successfully",
        options,
    )))
}

/// Grant or revoke a single consent.
pub async fn update_consent_status_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ConsentStatusUpdateRequest>,
) -> AppResult<Json<ApiResponse<ConsentRecord>>> {
    request.validate()?;

    let updated = app_state
        .consent_service
        .update_status(&id, &request)
        .await?;

    Ok(Json(ApiResponse::success(
        "Consent updated successfully",
        updated,
    )))
}

/// Consents panel router
pub fn consent_router(app_state: AppState) -> Router {
    Router::new()
        .route("/consents", get(list_consents_handler))
        .route("/consents/purpose-options", get(purpose_options_handler))
        .route(
            "/consents/{id}/status",
            patch(update_consent_status_handler),
        )
        .with_state(app_state)
}
