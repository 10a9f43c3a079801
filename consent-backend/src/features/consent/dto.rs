// src/features/consent/dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::PaginationQuery;

/// 統一同意検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsentSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub purpose_id: Option<String>,
    /// "granted" / "revoked" / "all"
    pub status: Option<String>,
}

/// Consent status update request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsentStatusUpdateRequest {
    pub is_granted: bool,
    #[validate(length(max = 500, message = "Reason cannot exceed 500 characters"))]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = ConsentSearchQuery::default();
        assert!(query.search.is_none());
        assert!(query.purpose_id.is_none());
        assert!(query.status.is_none());
        assert_eq!(query.pagination.get_pagination().0, 1);
    }

    #[test]
    fn test_status_update_reason_too_long_fails_validation() {
        let request = ConsentStatusUpdateRequest {
            is_granted: false,
            reason: Some("x".repeat(501)),
        };
        assert!(request.validate().is_err());
    }
}
