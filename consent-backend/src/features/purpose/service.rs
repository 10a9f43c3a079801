// src/features/purpose/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::purpose::dto::{PurposeActiveRequest, PurposeSearchQuery};
use crate::features::purpose::model::PurposeRecord;
use crate::filtering::{MutationSink, PanelController, RecordSource, ALL};
use crate::types::PaginatedResponse;

/// Mock data source for the purposes panel.
#[derive(Debug, Default, Clone)]
pub struct MockPurposeSource;

#[async_trait]
impl RecordSource<PurposeRecord> for MockPurposeSource {
    async fn fetch(&self) -> AppResult<Vec<PurposeRecord>> {
        Ok(sample_purposes())
    }
}

fn sample_purposes() -> Vec<PurposeRecord> {
    let seeded = |y, mo, d| Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap();
    vec![
        PurposeRecord {
            id: "p-essential".to_string(),
            name: "Essential Services".to_string(),
            description: "Account management, billing and service delivery".to_string(),
            essential: true,
            active: true,
            created_at: seeded(2026, 1, 10),
            updated_at: seeded(2026, 1, 10),
        },
        PurposeRecord {
            id: "p-marketing".to_string(),
            name: "Marketing".to_string(),
            description: "Campaign emails and personalized offers".to_string(),
            essential: false,
            active: true,
            created_at: seeded(2026, 1, 10),
            updated_at: seeded(2026, 3, 2),
        },
        PurposeRecord {
            id: "p-analytics".to_string(),
            name: "Product Analytics".to_string(),
            description: "Usage metrics that guide product decisions".to_string(),
            essential: false,
            active: true,
            created_at: seeded(2026, 2, 1),
            updated_at: seeded(2026, 2, 1),
        },
        PurposeRecord {
            id: "p-research".to_string(),
            name: "Market Research".to_string(),
            description: "Aggregated survey and panel studies".to_string(),
            essential: false,
            active: false,
            created_at: seeded(2026, 2, 15),
            updated_at: seeded(2026, 6, 20),
        },
    ]
}

/// Service owning the purposes panel view state.
pub struct PurposeService {
    controller: RwLock<PanelController<PurposeRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl PurposeService {
    pub async fn load(
        source: &dyn RecordSource<PurposeRecord>,
        sink: Arc<dyn MutationSink>,
    ) -> AppResult<Self> {
        let mut controller = PanelController::new();
        controller.refresh(source).await?;
        Ok(Self {
            controller: RwLock::new(controller),
            sink,
        })
    }

    pub async fn list(
        &self,
        query: &PurposeSearchQuery,
    ) -> AppResult<PaginatedResponse<PurposeRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller.set_category_filter(
            "state",
            query.state.clone().unwrap_or_else(|| ALL.to_string()),
        );

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Activates or retires one purpose. Essential purposes stay active.
    pub async fn set_active(
        &self,
        id: &str,
        request: &PurposeActiveRequest,
    ) -> AppResult<PurposeRecord> {
        let mut controller = self.controller.write().await;
        let existing = controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Purpose {} not found", id)))?;

        if existing.essential && !request.active {
            return Err(AppError::BadRequest(
                "Essential purposes cannot be deactivated".to_string(),
            ));
        }

        let patch = json!({ "active": request.active });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        let active = request.active;
        controller.apply_patch(id, |record| {
            record.active = active;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Purpose {} vanished during update", id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::LoggingMutationSink;

    async fn service() -> PurposeService {
        PurposeService::load(&MockPurposeSource, Arc::new(LoggingMutationSink))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_state_filter() {
        let service = service().await;
        let query = PurposeSearchQuery {
            state: Some("inactive".to_string()),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "p-research");
    }

    #[tokio::test]
    async fn test_essential_purpose_cannot_be_deactivated() {
        let service = service().await;
        let err = service
            .set_active("p-essential", &PurposeActiveRequest { active: false })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let retired = service
            .set_active("p-marketing", &PurposeActiveRequest { active: false })
            .await
            .unwrap();
        assert!(!retired.active);
    }
}
