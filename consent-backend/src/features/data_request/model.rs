// src/features/data_request/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::filtering::PanelRecord;

/// Kinds of data-subject requests the dashboard handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRequestType {
    Access,
    Correction,
    Deletion,
    Portability,
}

impl DataRequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataRequestType::Access => "access",
            DataRequestType::Correction => "correction",
            DataRequestType::Deletion => "deletion",
            DataRequestType::Portability => "portability",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DataRequestType::Access => "Data Access",
            DataRequestType::Correction => "Data Correction",
            DataRequestType::Deletion => "Data Deletion",
            DataRequestType::Portability => "Data Portability",
        }
    }
}

impl TryFrom<&str> for DataRequestType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "access" => Ok(DataRequestType::Access),
            "correction" => Ok(DataRequestType::Correction),
            "deletion" => Ok(DataRequestType::Deletion),
            "portability" => Ok(DataRequestType::Portability),
            _ => Err(format!("Invalid data request type: {}", value)),
        }
    }
}

/// Processing state of a data-subject request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRequestStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl DataRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataRequestStatus::Pending => "pending",
            DataRequestStatus::InProgress => "in_progress",
            DataRequestStatus::Completed => "completed",
            DataRequestStatus::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for DataRequestStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(DataRequestStatus::Pending),
            "in_progress" => Ok(DataRequestStatus::InProgress),
            "completed" => Ok(DataRequestStatus::Completed),
            "rejected" => Ok(DataRequestStatus::Rejected),
            _ => Err(format!("Invalid data request status: {}", value)),
        }
    }
}

/// One data-subject request, rendered as a row of the requests panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRequestRecord {
    pub id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub request_type: DataRequestType,
    pub status: DataRequestStatus,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PanelRecord for DataRequestRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(&self.requester_name),
            Cow::from(&self.requester_email),
            Cow::from(&self.id),
        ]
    }

    fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "request_type" => Some(Cow::from(self.request_type.as_str())),
            "status" => Some(Cow::from(self.status.as_str())),
            _ => None,
        }
    }

    fn category_label(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "request_type" => Some(Cow::from(self.request_type.display_name())),
            _ => self.category_value(key),
        }
    }
}
