// src/features/grievance/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::grievance::dto::{GrievanceSearchQuery, ResolveGrievanceRequest};
use crate::features::grievance::model::GrievanceRecord;
use crate::types::{ApiResponse, PaginatedResponse};

/// List grievances filtered by search text and status.
pub async fn list_grievances_handler(
    State(app_state): State<AppState>,
    Query(query): Query<GrievanceSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<GrievanceRecord>>>> {
    let page = app_state.grievance_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Grievances retrieved successfully",
        page,
    )))
}

/// Resolve one grievance.
pub async fn resolve_grievance_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ResolveGrievanceRequest>,
) -> AppResult<Json<ApiResponse<GrievanceRecord>>> {
    request.validate()?;

    let resolved = app_state.grievance_service.resolve(&id, &request).await?;

    Ok(Json(ApiResponse::success(
        "Grievance resolved successfully",
        resolved,
    )))
}

/// Grievances panel router
pub fn grievance_router(app_state: AppState) -> Router {
    Router::new()
        .route("/grievances", get(list_grievances_handler))
        .route("/grievances/{id}/resolve", post(resolve_grievance_handler))
        .with_state(app_state)
}
