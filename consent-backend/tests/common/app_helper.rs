// tests/common/app_helper.rs

use axum::Router;
use consent_backend::{
    api::{create_app_router, AppState},
    config::AppConfig,
};

/// 全パネルをモックデータで初期化したアプリのセットアップ
pub async fn setup_app() -> Router {
    let app_config = AppConfig::for_testing();
    let app_state = AppState::build(&app_config)
        .await
        .expect("Failed to build test application state");
    create_app_router(app_state)
}
