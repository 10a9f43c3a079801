// src/features/grievance/dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::PaginationQuery;

/// 統一苦情検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GrievanceSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    /// "open" / "investigating" / "resolved" / "dismissed" / "all"
    pub status: Option<String>,
}

/// Resolution request for a grievance
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveGrievanceRequest {
    #[validate(length(max = 1000, message = "Resolution note cannot exceed 1000 characters"))]
    pub note: Option<String>,
}
