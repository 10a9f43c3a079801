// src/features/analytics/handler.rs

use axum::{extract::State, routing::get, Json, Router};

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::analytics::dto::AnalyticsSummaryResponse;
use crate::types::ApiResponse;

/// Dashboard summary figures.
pub async fn analytics_summary_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<AnalyticsSummaryResponse>>> {
    let summary = app_state.analytics_service.summary();

    Ok(Json(ApiResponse::success(
        "Analytics summary retrieved successfully",
        summary,
    )))
}

/// Analytics panel router
pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/analytics/summary", get(analytics_summary_handler))
        .with_state(app_state)
}
