// src/features/notification/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::notification::dto::NotificationSearchQuery;
use crate::features::notification::model::NotificationRecord;
use crate::types::{ApiResponse, PaginatedResponse};

/// List notifications filtered by search text and the unread-only toggle.
pub async fn list_notifications_handler(
    State(app_state): State<AppState>,
    Query(query): Query<NotificationSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<NotificationRecord>>>> {
    let page = app_state.notification_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Notifications retrieved successfully",
        page,
    )))
}

/// Mark one notification as read.
pub async fn mark_notification_read_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<NotificationRecord>>> {
    let updated = app_state.notification_service.mark_read(&id).await?;

    Ok(Json(ApiResponse::success(
        "Notification marked as read",
        updated,
    )))
}

/// Notifications panel router
pub fn notification_router(app_state: AppState) -> Router {
    Router::new()
        .route("/notifications", get(list_notifications_handler))
        .route(
            "/notifications/{id}/read",
            patch(mark_notification_read_handler),
        )
        .with_state(app_state)
}
