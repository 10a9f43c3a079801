// src/features/grievance/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// Handling state of a grievance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievanceStatus {
    Open,
    Investigating,
    Resolved,
    Dismissed,
}

impl GrievanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrievanceStatus::Open => "open",
            GrievanceStatus::Investigating => "investigating",
            GrievanceStatus::Resolved => "resolved",
            GrievanceStatus::Dismissed => "dismissed",
        }
    }
}

impl TryFrom<&str> for GrievanceStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "open" => Ok(GrievanceStatus::Open),
            "investigating" => Ok(GrievanceStatus::Investigating),
            "resolved" => Ok(GrievanceStatus::Resolved),
            "dismissed" => Ok(GrievanceStatus::Dismissed),
            _ => Err(format!("Invalid grievance status: {}", value)),
        }
    }
}

/// One grievance filed by a data principal, rendered as a row of the
/// grievances panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrievanceRecord {
    pub id: String,
    pub complainant_name: String,
    pub complainant_email: String,
    pub subject: String,
    pub description: String,
    pub status: GrievanceStatus,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PanelRecord for GrievanceRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(&self.complainant_name),
            Cow::from(&self.complainant_email),
            Cow::from(&self.subject),
            Cow::from(&self.description),
        ]
    }

    fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "status" => Some(Cow::from(self.status.as_str())),
            _ => None,
        }
    }
}
