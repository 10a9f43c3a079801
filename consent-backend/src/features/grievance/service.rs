// src/features/grievance/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::grievance::dto::{GrievanceSearchQuery, ResolveGrievanceRequest};
use crate::features::grievance::model::{GrievanceRecord, GrievanceStatus};
use crate::filtering::{MutationSink, PanelController, RecordSource, ALL};
use crate::types::PaginatedResponse;

/// Mock data source for the grievances panel.
#[derive(Debug, Default, Clone)]
pub struct MockGrievanceSource;

#[async_trait]
impl RecordSource<GrievanceRecord> for MockGrievanceSource {
    async fn fetch(&self) -> AppResult<Vec<GrievanceRecord>> {
        Ok(sample_grievances())
    }
}

fn sample_grievances() -> Vec<GrievanceRecord> {
    let seeded = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    vec![
        GrievanceRecord {
            id: "g-5001".to_string(),
            complainant_name: "John Doe".to_string(),
            complainant_email: "john.doe@example.com".to_string(),
            subject: "Still receiving campaign emails".to_string(),
            description: "Marketing consent was revoked last month but emails keep arriving"
                .to_string(),
            status: GrievanceStatus::Open,
            resolution_note: None,
            created_at: seeded(2026, 7, 5, 12, 30),
            updated_at: seeded(2026, 7, 5, 12, 30),
        },
        GrievanceRecord {
            id: "g-5002".to_string(),
            complainant_name: "Priya Nair".to_string(),
            complainant_email: "priya.nair@example.com".to_string(),
            subject: "Deletion request past due".to_string(),
            description: "Filed a deletion request 40 days ago with no confirmation".to_string(),
            status: GrievanceStatus::Investigating,
            resolution_note: None,
            created_at: seeded(2026, 6, 25, 9, 15),
            updated_at: seeded(2026, 7, 2, 10, 0),
        },
        GrievanceRecord {
            id: "g-5003".to_string(),
            complainant_name: "Tomás Alvarez".to_string(),
            complainant_email: "tomas.alvarez@example.com".to_string(),
            subject: "Wrong email on file".to_string(),
            description: "Correction request was applied to the wrong account".to_string(),
            status: GrievanceStatus::Resolved,
            resolution_note: Some("Accounts reconciled, confirmation sent".to_string()),
            created_at: seeded(2026, 5, 30, 17, 50),
            updated_at: seeded(2026, 6, 6, 8, 25),
        },
    ]
}

/// Service owning the grievances panel view state.
pub struct GrievanceService {
    controller: RwLock<PanelController<GrievanceRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl GrievanceService {
    pub async fn load(
        source: &dyn RecordSource<GrievanceRecord>,
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
        query: &GrievanceSearchQuery,
    ) -> AppResult<PaginatedResponse<GrievanceRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller.set_category_filter(
            "status",
            query.status.clone().unwrap_or_else(|| ALL.to_string()),
        );

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Marks one grievance resolved, attaching the optional note.
    pub async fn resolve(
        &self,
        id: &str,
        request: &ResolveGrievanceRequest,
    ) -> AppResult<GrievanceRecord> {
        let mut controller = self.controller.write().await;
        if !controller.contains(id) {
            return Err(AppError::NotFound(format!("Grievance {} not found", id)));
        }

        let patch = json!({
            "status": GrievanceStatus::Resolved.as_str(),
            "resolution_note": request.note,
        });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        let note = request.note.clone();
        controller.apply_patch(id, |record| {
            record.status = GrievanceStatus::Resolved;
            record.resolution_note = note;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Grievance {} vanished during update", id))
            })
    }
}
