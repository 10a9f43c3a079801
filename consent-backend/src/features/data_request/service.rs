// src/features/data_request/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::data_request::dto::{DataRequestSearchQuery, ResolveDataRequestRequest};
use crate::features::data_request::model::{
    DataRequestRecord, DataRequestStatus, DataRequestType,
};
use crate::filtering::{CategoryOption, MutationSink, PanelController, RecordSource, ALL};
use crate::types::PaginatedResponse;

/// Mock data source for the data requests panel.
#[derive(Debug, Default, Clone)]
pub struct MockDataRequestSource;

#[async_trait]
impl RecordSource<DataRequestRecord> for MockDataRequestSource {
    async fn fetch(&self) -> AppResult<Vec<DataRequestRecord>> {
        Ok(sample_data_requests())
    }
}

fn sample_data_requests() -> Vec<DataRequestRecord> {
    let seeded = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    vec![
        DataRequestRecord {
            id: "dsr-3001".to_string(),
            requester_name: "John Doe".to_string(),
            requester_email: "john.doe@example.com".to_string(),
            request_type: DataRequestType::Access,
            status: DataRequestStatus::Pending,
            resolution_note: None,
            created_at: seeded(2026, 7, 1, 10, 20),
            updated_at: seeded(2026, 7, 1, 10, 20),
        },
        DataRequestRecord {
            id: "dsr-3002".to_string(),
            requester_name: "Jane Smith".to_string(),
            requester_email: "jane.smith@example.com".to_string(),
            request_type: DataRequestType::Deletion,
            status: DataRequestStatus::InProgress,
            resolution_note: None,
            created_at: seeded(2026, 7, 3, 15, 0),
            updated_at: seeded(2026, 7, 10, 9, 5),
        },
        DataRequestRecord {
            id: "dsr-3003".to_string(),
            requester_name: "Chen Wei".to_string(),
            requester_email: "chen.wei@example.com".to_string(),
            request_type: DataRequestType::Access,
            status: DataRequestStatus::Completed,
            resolution_note: Some("Export bundle delivered by email".to_string()),
            created_at: seeded(2026, 6, 20, 11, 45),
            updated_at: seeded(2026, 6, 28, 16, 30),
        },
        DataRequestRecord {
            id: "dsr-3004".to_string(),
            requester_name: "Maria Garcia".to_string(),
            requester_email: "maria.garcia@example.com".to_string(),
            request_type: DataRequestType::Portability,
            status: DataRequestStatus::Pending,
            resolution_note: None,
            created_at: seeded(2026, 7, 18, 13, 10),
            updated_at: seeded(2026, 7, 18, 13, 10),
        },
    ]
}

/// Service owning the data requests panel view state.
pub struct DataRequestService {
    controller: RwLock<PanelController<DataRequestRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl DataRequestService {
    pub async fn load(
        source: &dyn RecordSource<DataRequestRecord>,
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
        query: &DataRequestSearchQuery,
    ) -> AppResult<PaginatedResponse<DataRequestRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller.set_category_filter(
            "status",
            query.status.clone().unwrap_or_else(|| ALL.to_string()),
        );
        controller.set_category_filter(
            "request_type",
            query
                .request_type
                .clone()
                .unwrap_or_else(|| ALL.to_string()),
        );

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Request-type dropdown options derived from the loaded record set.
    pub async fn type_options(&self) -> Vec<CategoryOption> {
        self.controller.read().await.category_options("request_type")
    }

    /// Marks one request completed, attaching the optional resolution note.
    pub async fn resolve(
        &self,
        id: &str,
        request: &ResolveDataRequestRequest,
    ) -> AppResult<DataRequestRecord> {
        let mut controller = self.controller.write().await;
        if !controller.contains(id) {
            return Err(AppError::NotFound(format!("Data request {} not found", id)));
        }

        let patch = json!({
            "status": DataRequestStatus::Completed.as_str(),
            "resolution_note": request.note,
        });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        let note = request.note.clone();
        controller.apply_patch(id, |record| {
            record.status = DataRequestStatus::Completed;
            record.resolution_note = note;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Data request {} vanished during update", id))
            })
    }
}
