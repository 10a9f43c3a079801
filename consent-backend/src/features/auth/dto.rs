// src/features/auth/dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::user::model::UserClass;
use crate::utils::validation;

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 3, max = 30, message = "Username must be between 3 and 30 characters"),
        custom(function = validation::validate_username)
    )]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// 登録するユーザー区分
    pub class: UserClass,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String, // email or username

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
