// src/features/purpose/dto.rs

use serde::{Deserialize, Serialize};

use crate::types::PaginationQuery;

/// 統一目的検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PurposeSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    /// "active" / "inactive" / "all"
    pub state: Option<String>,
}

/// Active flag flip request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurposeActiveRequest {
    pub active: bool,
}
