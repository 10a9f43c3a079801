// src/features/purpose/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// One processing purpose consents are collected against, rendered as a row
/// of the purposes panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurposeRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Essential purposes cannot be opted out of.
    pub essential: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PanelRecord for PurposeRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name), Cow::from(&self.description)]
    }

    fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "state" => Some(Cow::from(if self.active { "active" } else { "inactive" })),
            _ => None,
        }
    }
}
