// src/features/consent/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::consent::dto::{ConsentSearchQuery, ConsentStatusUpdateRequest};
use crate::features::consent::model::ConsentRecord;
use crate::filtering::{CategoryOption, MutationSink, PanelController, RecordSource, ALL};
use crate::types::PaginatedResponse;

/// Mock data source for the consents panel. A real implementation would GET
/// the records from the consent store service.
#[derive(Debug, Default, Clone)]
pub struct MockConsentSource;

#[async_trait]
impl RecordSource<ConsentRecord> for MockConsentSource {
    async fn fetch(&self) -> AppResult<Vec<ConsentRecord>> {
        Ok(sample_consents())
    }
}

fn sample_consents() -> Vec<ConsentRecord> {
    let seeded = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    vec![
        ConsentRecord {
            id: "c-1001".to_string(),
            user_name: "John Doe".to_string(),
            user_email: "john.doe@example.com".to_string(),
            purpose_id: "p-marketing".to_string(),
            purpose_name: "Marketing".to_string(),
            is_granted: false,
            created_at: seeded(2026, 5, 12, 9, 30),
            updated_at: seeded(2026, 6, 2, 14, 5),
        },
        ConsentRecord {
            id: "c-1002".to_string(),
            user_name: "Jane Smith".to_string(),
            user_email: "jane.smith@example.com".to_string(),
            purpose_id: "p-essential".to_string(),
            purpose_name: "Essential Services".to_string(),
            is_granted: true,
            created_at: seeded(2026, 5, 12, 10, 0),
            updated_at: seeded(2026, 5, 12, 10, 0),
        },
        ConsentRecord {
            id: "c-1003".to_string(),
            user_name: "Ravi Patel".to_string(),
            user_email: "ravi.patel@example.com".to_string(),
            purpose_id: "p-analytics".to_string(),
            purpose_name: "Product Analytics".to_string(),
            is_granted: true,
            created_at: seeded(2026, 5, 20, 8, 45),
            updated_at: seeded(2026, 7, 1, 17, 20),
        },
        ConsentRecord {
            id: "c-1004".to_string(),
            user_name: "Maria Garcia".to_string(),
            user_email: "maria.garcia@example.com".to_string(),
            purpose_id: "p-marketing".to_string(),
            purpose_name: "Marketing".to_string(),
            is_granted: true,
            created_at: seeded(2026, 6, 3, 11, 10),
            updated_at: seeded(2026, 6, 3, 11, 10),
        },
        ConsentRecord {
            id: "c-1005".to_string(),
            user_name: "Chen Wei".to_string(),
            user_email: "chen.wei@example.com".to_string(),
            purpose_id: "p-essential".to_string(),
            purpose_name: "Essential Services".to_string(),
            is_granted: false,
            created_at: seeded(2026, 6, 15, 16, 40),
            updated_at: seeded(2026, 7, 22, 9, 15),
        },
    ]
}

/// Service owning the consents panel view state.
pub struct ConsentService {
    controller: RwLock<PanelController<ConsentRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl ConsentService {
    pub async fn load(
        source: &dyn RecordSource<ConsentRecord>,
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
        query: &ConsentSearchQuery,
    ) -> AppResult<PaginatedResponse<ConsentRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller.set_category_filter(
            "purpose",
            query.purpose_id.clone().unwrap_or_else(|| ALL.to_string()),
        );
        controller.set_category_filter(
            "status",
            query.status.clone().unwrap_or_else(|| ALL.to_string()),
        );

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Purpose dropdown options, derived from the loaded record set.
    pub async fn purpose_options(&self) -> Vec<CategoryOption> {
        self.controller.read().await.category_options("purpose")
    }

    /// Flips one consent's granted flag, forwarding the patch to the
    /// mutation sink and mirroring it locally.
    pub async fn update_status(
        &self,
        id: &str,
        request: &ConsentStatusUpdateRequest,
    ) -> AppResult<ConsentRecord> {
        let mut controller = self.controller.write().await;
        if !controller.contains(id) {
            return Err(AppError::NotFound(format!("Consent {} not found", id)));
        }

        let patch = json!({
            "is_granted": request.is_granted,
            "reason": request.reason,
        });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        let is_granted = request.is_granted;
        controller.apply_patch(id, |record| {
            record.is_granted = is_granted;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Consent {} vanished during update", id))
            })
    }
}
