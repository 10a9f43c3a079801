// src/config/mod.rs

use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// 外部認証バックエンドのベースURL
    pub auth_backend_url: String,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3001".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            auth_backend_url: env::var("AUTH_BACKEND_URL")
                .map_err(|_| "AUTH_BACKEND_URL must be set")?,
            server: ServerConfig {
                request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| "Invalid REQUEST_TIMEOUT_SECS value")?,
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    #[allow(dead_code)]
    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3001".to_string()],
            auth_backend_url: env::var("AUTH_BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9099".to_string()),
            server: ServerConfig {
                request_timeout_secs: 30,
            },
        }
    }
}
