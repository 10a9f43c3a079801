// src/features/consent/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// One consent a data principal has given (or withheld) for a processing
/// purpose. Rendered as a row of the consents panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub purpose_id: String,
    pub purpose_name: String,
    pub is_granted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConsentRecord {
    /// Wire/string form of the granted flag, as the status dropdown uses it.
    pub fn status_str(&self) -> &'static str {
        if self.is_granted {
            "granted"
        } else {
            "revoked"
        }
    }
}

impl PanelRecord for ConsentRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(&self.user_name),
            Cow::from(&self.user_email),
            Cow::from(&self.purpose_name),
        ]
    }

    fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "purpose" => Some(Cow::from(&self.purpose_id)),
            "status" => Some(Cow::from(self.status_str())),
            _ => None,
        }
    }

    fn category_label(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            // ドロップダウンには目的の表示名を出す
            "purpose" => Some(Cow::from(&self.purpose_name)),
            _ => self.category_value(key),
        }
    }
}
