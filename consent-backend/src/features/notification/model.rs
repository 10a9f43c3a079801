// src/features/notification/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// One dashboard notification, rendered as a card of the notifications
/// panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub unread: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PanelRecord for NotificationRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.title), Cow::from(&self.body)]
    }

    fn category_value(&self, _key: &str) -> Option<Cow<'_, str>> {
        // 通知にはカテゴリフィルタがない
        None
    }

    fn toggle_flag(&self) -> bool {
        self.unread
    }
}
