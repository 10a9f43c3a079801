// src/features/user/handler.rs

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::api::AppState;
use crate::error::AppResult;
use crate::features::user::dto::{UserSearchQuery, UserVerificationRequest};
use crate::features::user::model::UserRecord;
use crate::filtering::CategoryOption;
use crate::types::{ApiResponse, PaginatedResponse};

/// List users filtered by search text and identity tab.
pub async fn list_users_handler(
    State(app_state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> AppResult<Json<ApiResponse<PaginatedResponse<UserRecord>>>> {
    let page = app_state.user_service.list(&query).await?;

    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        page,
    )))
}

/// Identity tab options derived from the current record set.
pub async fn tab_options_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryOption>>>> {
    let options = app_state.user_service.tab_options().await;

    Ok(Json(ApiResponse::success(
        "Tab options retrieved successfully",
        options,
    )))
}

/// Mark one user's identity as verified or unverified.
pub async fn update_user_verification_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UserVerificationRequest>,
) -> AppResult<Json<ApiResponse<UserRecord>>> {
    let updated = app_state.user_service.set_verification(&id, &request).await?;

    Ok(Json(ApiResponse::success(
        "User verification updated successfully",
        updated,
    )))
}

/// Users panel router
pub fn user_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/tab-options", get(tab_options_handler))
        .route(
            "/users/{id}/verification",
            patch(update_user_verification_handler),
        )
        .with_state(app_state)
}
