// src/main.rs
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use consent_backend::api::{create_app_router, AppState};
use consent_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consent_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Consent Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env().expect("Failed to load configuration");
    tracing::info!("Configuration loaded: {:?}", app_config);

    // 各パネルのモックデータを読み込んで状態を構築
    let app_state = AppState::build(&app_config)
        .await
        .expect("Failed to build application state");
    tracing::info!("Panel stores seeded successfully.");

    // ルーターの設定
    let app_router = create_app_router(app_state);

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr()
    );

    let listener = TcpListener::bind(app_config.server_addr()).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
