// src/api/mod.rs

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::features::analytics::handler::analytics_router;
use crate::features::analytics::service::AnalyticsService;
use crate::features::auth::handler::auth_router;
use crate::features::auth::service::AuthGatewayService;
use crate::features::consent::handler::consent_router;
use crate::features::consent::service::{ConsentService, MockConsentSource};
use crate::features::data_request::handler::data_request_router;
use crate::features::data_request::service::{DataRequestService, MockDataRequestSource};
use crate::features::grievance::handler::grievance_router;
use crate::features::grievance::service::{GrievanceService, MockGrievanceSource};
use crate::features::notification::handler::notification_router;
use crate::features::notification::service::{MockNotificationSource, NotificationService};
use crate::features::purpose::handler::purpose_router;
use crate::features::purpose::service::{MockPurposeSource, PurposeService};
use crate::features::settings::handler::settings_router;
use crate::features::settings::service::SettingsService;
use crate::features::user::handler::user_router;
use crate::features::user::service::{MockUserSource, UserDirectoryService};
use crate::filtering::LoggingMutationSink;
use crate::logging::{inject_request_context, logging_middleware};
use crate::types::ApiResponse;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthGatewayService>,
    pub consent_service: Arc<ConsentService>,
    pub user_service: Arc<UserDirectoryService>,
    pub data_request_service: Arc<DataRequestService>,
    pub notification_service: Arc<NotificationService>,
    pub purpose_service: Arc<PurposeService>,
    pub grievance_service: Arc<GrievanceService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub settings_service: Arc<SettingsService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds the full state, seeding every panel from its mock source.
    pub async fn build(config: &AppConfig) -> AppResult<Self> {
        let sink = Arc::new(LoggingMutationSink);

        Ok(Self {
            auth_service: Arc::new(AuthGatewayService::new(config)?),
            consent_service: Arc::new(
                ConsentService::load(&MockConsentSource, sink.clone()).await?,
            ),
            user_service: Arc::new(
                UserDirectoryService::load(&MockUserSource, sink.clone()).await?,
            ),
            data_request_service: Arc::new(
                DataRequestService::load(&MockDataRequestSource, sink.clone()).await?,
            ),
            notification_service: Arc::new(
                NotificationService::load(&MockNotificationSource, sink.clone()).await?,
            ),
            purpose_service: Arc::new(PurposeService::load(&MockPurposeSource, sink.clone()).await?),
            grievance_service: Arc::new(
                GrievanceService::load(&MockGrievanceSource, sink).await?,
            ),
            analytics_service: Arc::new(AnalyticsService::new()),
            settings_service: Arc::new(SettingsService::new()),
            config: Arc::new(config.clone()),
        })
    }
}

/// ヘルスチェック
pub async fn health_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        "Service healthy",
        json!({ "status": "ok" }),
    ))
}

/// 全パネルのルーターを組み立てる
pub fn create_app_router(app_state: AppState) -> Router {
    let origins: Vec<HeaderValue> = app_state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let timeout = TimeoutLayer::new(Duration::from_secs(
        app_state.config.server.request_timeout_secs,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(auth_router(app_state.clone()))
        .merge(consent_router(app_state.clone()))
        .merge(user_router(app_state.clone()))
        .merge(data_request_router(app_state.clone()))
        .merge(notification_router(app_state.clone()))
        .merge(purpose_router(app_state.clone()))
        .merge(grievance_router(app_state.clone()))
        .merge(analytics_router(app_state.clone()))
        .merge(settings_router(app_state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(timeout)
}
