// src/features/data_request/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::data_request::dto::{DataRequestSearchQuery, ResolveDataRequestRequest};
use crate::features::data_request::model::DataRequestRecord;
use crate::filtering::CategoryOption;
use crate::types::{ApiResponse, PaginatedResponse};

/// List data-subject requests filtered by search text, status and type.
pub async fn list_data_requests_handler(
    State(app_state): State<AppState>,
    Query(query): Query<DataRequestSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<DataRequestRecord>>>> {
    let page = app_state.data_request_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Data requests retrieved successfully",
        page,
    )))
}

/// Request-type dropdown options derived from the current record set.
pub async fn type_options_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryOption>>>> {
    let options = app_state.data_request_service.type_options().await;

    Ok(Json(ApiResponse::success(
        "Request type options retrieved successfully",
        options,
    )))
}

/// Resolve one data-subject request.
pub async fn resolve_data_request_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ResolveDataRequestRequest>,
) -> AppResult<Json<ApiResponse<DataRequestRecord>>> {
    request.validate()?;

    let resolved = app_state.data_request_service.resolve(&id, &request).await?;

    Ok(Json(ApiResponse::success(
        "Data request resolved successfully",
        resolved,
    )))
}

/// Data requests panel router
pub fn data_request_router(app_state: AppState) -> Router {
    Router::new()
        .route("/data-requests", get(list_data_requests_handler))
        .route("/data-requests/type-options", get(type_options_handler))
        .route(
            "/data-requests/{id}/resolve",
            post(resolve_data_request_handler),
        )
        .with_state(app_state)
}
