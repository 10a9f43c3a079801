// src/features/settings/dto.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Organization-wide dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSettings {
    pub organization_name: String,
    pub privacy_contact_email: String,
    pub data_retention_days: u32,
    pub notification_emails_enabled: bool,
    pub weekly_digest_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

/// Settings update request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 200, message = "Organization name is required"))]
    pub organization_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub privacy_contact_email: String,
    #[validate(range(min = 30, max = 3650, message = "Retention must be between 30 and 3650 days"))]
    pub data_retention_days: u32,
    pub notification_emails_enabled: bool,
    pub weekly_digest_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_validation() {
        let request = UpdateSettingsRequest {
            organization_name: "Acme Corp".to_string(),
            privacy_contact_email: "not-an-email".to_string(),
            data_retention_days: 365,
            notification_emails_enabled: true,
            weekly_digest_enabled: false,
        };
        assert!(request.validate().is_err());

        let request = UpdateSettingsRequest {
            privacy_contact_email: "privacy@acme.example".to_string(),
            ..request
        };
        assert!(request.validate().is_ok());
    }
}
