// src/features/user/dto.rs

use serde::{Deserialize, Serialize};

use crate::types::PaginationQuery;

/// 統一ユーザー検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    /// "principal" / "admin" / "all"
    pub tab: Option<String>,
}

/// Verification flip request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVerificationRequest {
    pub verified: bool,
}
