// src/features/analytics/dto.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dashboard summary figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummaryResponse {
    pub total_consents: u64,
    pub granted_consents: u64,
    pub revoked_consents: u64,
    pub pending_data_requests: u64,
    pub open_grievances: u64,
    pub unread_notifications: u64,
    pub consent_trend: Vec<ConsentTrendPoint>,
}

/// One day of the consent trend chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentTrendPoint {
    pub date: NaiveDate,
    pub granted: u64,
    pub revoked: u64,
}
