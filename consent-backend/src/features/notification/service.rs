// src/features/notification/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::notification::dto::NotificationSearchQuery;
use crate::features::notification::model::NotificationRecord;
use crate::filtering::{MutationSink, PanelController, RecordSource};
use crate::types::PaginatedResponse;

/// Mock data source for the notifications panel.
#[derive(Debug, Default, Clone)]
pub struct MockNotificationSource;

#[async_trait]
impl RecordSource<NotificationRecord> for MockNotificationSource {
    async fn fetch(&self) -> AppResult<Vec<NotificationRecord>> {
        Ok(sample_notifications())
    }
}

fn sample_notifications() -> Vec<NotificationRecord> {
    let seeded = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    vec![
        NotificationRecord {
            id: "n-4001".to_string(),
            title: "New data deletion request".to_string(),
            body: "Jane Smith filed a deletion request awaiting triage".to_string(),
            unread: true,
            created_at: seeded(2026, 7, 3, 15, 2),
            updated_at: seeded(2026, 7, 3, 15, 2),
        },
        NotificationRecord {
            id: "n-4002".to_string(),
            title: "Consent revoked".to_string(),
            body: "John Doe revoked the Marketing consent".to_string(),
            unread: true,
            created_at: seeded(2026, 6, 2, 14, 6),
            updated_at: seeded(2026, 6, 2, 14, 6),
        },
        NotificationRecord {
            id: "n-4003".to_string(),
            title: "Weekly compliance digest".to_string(),
            body: "3 requests resolved, 2 pending past SLA".to_string(),
            unread: false,
            created_at: seeded(2026, 6, 29, 7, 0),
            updated_at: seeded(2026, 6, 30, 9, 40),
        },
    ]
}

/// Service owning the notifications panel view state.
pub struct NotificationService {
    controller: RwLock<PanelController<NotificationRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl NotificationService {
    pub async fn load(
        source: &dyn RecordSource<NotificationRecord>,
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
        query: &NotificationSearchQuery,
    ) -> AppResult<PaginatedResponse<NotificationRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller.set_boolean_toggle(query.unread_only.unwrap_or(false));

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Marks one notification as read.
    pub async fn mark_read(&self, id: &str) -> AppResult<NotificationRecord> {
        let mut controller = self.controller.write().await;
        if !controller.contains(id) {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }

        let patch = json!({ "unread": false });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        controller.apply_patch(id, |record| {
            record.unread = false;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Notification {} vanished during update", id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::LoggingMutationSink;

    async fn service() -> NotificationService {
        NotificationService::load(&MockNotificationSource, Arc::new(LoggingMutationSink))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_unread_only_toggle() {
        let service = service().await;
        let query = NotificationSearchQuery {
            unread_only: Some(true),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|n| n.unread));
    }

    #[tokio::test]
    async fn test_mark_read_then_unread_view_shrinks() {
        let service = service().await;

        service.mark_read("n-4001").await.unwrap();
        service.mark_read("n-4002").await.unwrap();

        let query = NotificationSearchQuery {
            unread_only: Some(true),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert!(page.items.is_empty());

        // 全件ビューでは3件のまま
        let page = service
            .list(&NotificationSearchQuery::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total_count, 3);
    }

    #[tokio::test]
    async fn test_search_hits_body_text() {
        let service = service().await;
        let query = NotificationSearchQuery {
            search: Some("sla".to_string()),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "n-4003");
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id_is_not_found() {
        let service = service().await;
        let err = service.mark_read("n-9999").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
