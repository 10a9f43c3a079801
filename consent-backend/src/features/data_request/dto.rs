// src/features/data_request/dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::PaginationQuery;

/// 統一データ主体リクエスト検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataRequestSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    /// "pending" / "in_progress" / "completed" / "rejected" / "all"
    pub status: Option<String>,
    /// "access" / "correction" / "deletion" / "portability" / "all"
    pub request_type: Option<String>,
}

/// Resolution request for a data-subject request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveDataRequestRequest {
    #[validate(length(max = 1000, message = "Resolution note cannot exceed 1000 characters"))]
    pub note: Option<String>,
}
