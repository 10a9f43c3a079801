// src/features/analytics/service.rs

use chrono::NaiveDate;

use crate::features::analytics::dto::{AnalyticsSummaryResponse, ConsentTrendPoint};

/// Serves the dashboard summary. The figures are a hardcoded sample set; a
/// real implementation would aggregate them from the backing stores.
#[derive(Debug, Default, Clone)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self) -> AnalyticsSummaryResponse {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        AnalyticsSummaryResponse {
            total_consents: 1248,
            granted_consents: 1014,
            revoked_consents: 234,
            pending_data_requests: 17,
            open_grievances: 6,
            unread_notifications: 9,
            consent_trend: vec![
                ConsentTrendPoint {
                    date: day(2026, 7, 28),
                    granted: 41,
                    revoked: 6,
                },
                ConsentTrendPoint {
                    date: day(2026, 7, 29),
                    granted: 37,
                    revoked: 9,
                },
                ConsentTrendPoint {
                    date: day(2026, 7, 30),
                    granted: 52,
                    revoked: 4,
                },
                ConsentTrendPoint {
                    date: day(2026, 7, 31),
                    granted: 46,
                    revoked: 11,
                },
                ConsentTrendPoint {
                    date: day(2026, 8, 1),
                    granted: 33,
                    revoked: 7,
                },
                ConsentTrendPoint {
                    date: day(2026, 8, 2),
                    granted: 29,
                    revoked: 5,
                },
                ConsentTrendPoint {
                    date: day(2026, 8, 3),
                    granted: 44,
                    revoked: 8,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_consistent() {
        let summary = AnalyticsService::new().summary();
        assert_eq!(
            summary.granted_consents + summary.revoked_consents,
            summary.total_consents
        );
        assert_eq!(summary.consent_trend.len(), 7);
    }
}
