// src/features/user/service.rs

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::features::user::dto::{UserSearchQuery, UserVerificationRequest};
use crate::features::user::model::{UserClass, UserRecord};
use crate::filtering::{CategoryOption, MutationSink, PanelController, RecordSource, ALL};
use crate::types::PaginatedResponse;

/// Mock data source for the users panel.
#[derive(Debug, Default, Clone)]
pub struct MockUserSource;

#[async_trait]
impl RecordSource<UserRecord> for MockUserSource {
    async fn fetch(&self) -> AppResult<Vec<UserRecord>> {
        Ok(sample_users())
    }
}

fn sample_users() -> Vec<UserRecord> {
    let seeded = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    vec![
        UserRecord {
            id: "u-2001".to_string(),
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: Some("+1-202-555-0134".to_string()),
            class: UserClass::Principal,
            verified: true,
            created_at: seeded(2026, 4, 2, 9, 0),
            updated_at: seeded(2026, 4, 2, 9, 0),
        },
        UserRecord {
            id: "u-2002".to_string(),
            full_name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: None,
            class: UserClass::Principal,
            verified: false,
            created_at: seeded(2026, 4, 18, 14, 30),
            updated_at: seeded(2026, 4, 18, 14, 30),
        },
        UserRecord {
            id: "u-2003".to_string(),
            full_name: "Priya Nair".to_string(),
            email: "priya.nair@example.com".to_string(),
            phone: Some("+91-98-7654-3210".to_string()),
            class: UserClass::Admin,
            verified: true,
            created_at: seeded(2026, 3, 1, 8, 15),
            updated_at: seeded(2026, 5, 30, 12, 0),
        },
        UserRecord {
            id: "u-2004".to_string(),
            full_name: "Tomás Alvarez".to_string(),
            email: "tomas.alvarez@example.com".to_string(),
            phone: None,
            class: UserClass::Principal,
            verified: false,
            created_at: seeded(2026, 6, 9, 19, 45),
            updated_at: seeded(2026, 6, 9, 19, 45),
        },
    ]
}

/// Service owning the users panel view state.
pub struct UserDirectoryService {
    controller: RwLock<PanelController<UserRecord>>,
    sink: Arc<dyn MutationSink>,
}

impl UserDirectoryService {
    pub async fn load(
        source: &dyn RecordSource<UserRecord>,
        sink: Arc<dyn MutationSink>,
    ) -> AppResult<Self> {
        let mut controller = PanelController::new();
        controller.refresh(source).await?;
        Ok(Self {
            controller: RwLock::new(controller),
            sink,
        })
    }

    pub async fn list(&self, query: &UserSearchQuery) -> AppResult<PaginatedResponse<UserRecord>> {
        let mut controller = self.controller.write().await;
        controller.set_search_query(query.search.clone().unwrap_or_default());
        controller
            .set_category_filter("tab", query.tab.clone().unwrap_or_else(|| ALL.to_string()));

        let visible = controller.visible();
        let (page, per_page) = query.pagination.get_pagination();
        Ok(PaginatedResponse::paginate(visible, page, per_page))
    }

    /// Identity tab options derived from the loaded record set.
    pub async fn tab_options(&self) -> Vec<CategoryOption> {
        self.controller.read().await.category_options("tab")
    }

    pub async fn set_verification(
        &self,
        id: &str,
        request: &UserVerificationRequest,
    ) -> AppResult<UserRecord> {
        let mut controller = self.controller.write().await;
        if !controller.contains(id) {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        let patch = json!({ "verified": request.verified });
        self.sink.apply(id, &patch).await?;

        let now = Utc::now();
        let verified = request.verified;
        controller.apply_patch(id, |record| {
            record.verified = verified;
            record.updated_at = now;
        });

        controller
            .records()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalServerError(format!("User {} vanished during update", id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::LoggingMutationSink;

    async fn service() -> UserDirectoryService {
        UserDirectoryService::load(&MockUserSource, Arc::new(LoggingMutationSink))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_tab_filter_restricts_class() {
        let service = service().await;
        let query = UserSearchQuery {
            tab: Some("admin".to_string()),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "u-2003");
    }

    #[tokio::test]
    async fn test_all_tab_is_noop() {
        let service = service().await;
        let query = UserSearchQuery {
            tab: Some(ALL.to_string()),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.pagination.total_count, 4);
    }

    #[tokio::test]
    async fn test_search_hits_phone_field() {
        let service = service().await;
        let query = UserSearchQuery {
            search: Some("202-555".to_string()),
            ..Default::default()
        };
        let page = service.list(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "u-2001");
    }

    #[tokio::test]
    async fn test_tab_options_have_display_labels() {
        let service = service().await;
        let options = service.tab_options().await;
        assert_eq!(options.len(), 3);
        assert_eq!(options[1].value, "principal");
        assert_eq!(options[1].label, "Data Principals");
        assert_eq!(options[2].label, "Administrators");
    }

    #[tokio::test]
    async fn test_set_verification() {
        let service = service().await;
        let updated = service
            .set_verification("u-2002", &UserVerificationRequest { verified: true })
            .await
            .unwrap();
        assert!(updated.verified);

        let err = service
            .set_verification("u-9999", &UserVerificationRequest { verified: true })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
