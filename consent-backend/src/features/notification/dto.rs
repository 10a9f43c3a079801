// src/features/notification/dto.rs

use serde::{Deserialize, Serialize};

use crate::types::query::deserialize_option_bool_from_string;
use crate::types::PaginationQuery;

/// 統一通知検索クエリ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationSearchQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub unread_only: Option<bool>,
}
