// tests/common/mod.rs

pub mod app_helper;
pub mod request;

pub use app_helper::setup_app;
pub use request::{create_json_request, create_request, response_json};
