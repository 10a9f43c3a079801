// src/features/settings/service.rs

use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::features::settings::dto::{OrganizationSettings, UpdateSettingsRequest};

fn default_settings() -> OrganizationSettings {
    OrganizationSettings {
        organization_name: "Acme Corp".to_string(),
        privacy_contact_email: "privacy@acme.example".to_string(),
        data_retention_days: 365,
        notification_emails_enabled: true,
        weekly_digest_enabled: true,
        updated_at: Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap(),
    }
}

/// Holds the mocked organization settings document.
pub struct SettingsService {
    settings: RwLock<OrganizationSettings>,
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsService {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(default_settings()),
        }
    }

    pub async fn get(&self) -> OrganizationSettings {
        self.settings.read().await.clone()
    }

    pub async fn update(&self, request: &UpdateSettingsRequest) -> OrganizationSettings {
        let mut settings = self.settings.write().await;
        *settings = OrganizationSettings {
            organization_name: request.organization_name.clone(),
            privacy_contact_email: request.privacy_contact_email.clone(),
            data_retention_days: request.data_retention_days,
            notification_emails_enabled: request.notification_emails_enabled,
            weekly_digest_enabled: request.weekly_digest_enabled,
            updated_at: Utc::now(),
        };
        settings.clone()
    }
}
