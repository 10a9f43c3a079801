// src/features/user/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// User classes served by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserClass {
    /// A data principal whose consents are managed.
    Principal,
    /// A dashboard administrator.
    Admin,
}

impl UserClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserClass::Principal => "principal",
            UserClass::Admin => "admin",
        }
    }

    /// Human-readable tab label.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserClass::Principal => "Data Principals",
            UserClass::Admin => "Administrators",
        }
    }
}

impl TryFrom<&str> for UserClass {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "principal" => Ok(UserClass::Principal),
            "admin" => Ok(UserClass::Admin),
            _ => Err(format!("Invalid user class: {}", value)),
        }
    }
}

/// One registered user, rendered as a row of the users panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub class: UserClass,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PanelRecord for UserRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::from(&self.full_name), Cow::from(&self.email)];
        if let Some(phone) = &self.phone {
            fields.push(Cow::from(phone));
        }
        fields
    }

    fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            // アイデンティティタブはユーザー区分で切り替える
            "tab" => Some(Cow::from(self.class.as_str())),
            _ => None,
        }
    }

    fn category_label(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "tab" => Some(Cow::from(self.class.display_name())),
            _ => self.category_value(key),
        }
    }
}
