use async_trait::async_trait;

use crate::errors::ServiceError;

/// Repository abstraction for bookmark persistence.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn create(&self, account_id: i64, title: &str, description: Option<&str>, link: &str) -> Result<models::bookmark::Model, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<models::bookmark::Model>, ServiceError>;
    async fn list_by_account(&self, account_id: i64) -> Result<Vec<models::bookmark::Model>, ServiceError>;
    async fn update(&self, id: i64, title: Option<&str>, description: Option<&str>, link: Option<&str>) -> Result<models::bookmark::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookmarkRepository {
        // BTreeMap keeps listing order stable by primary key
        rows: Mutex<BTreeMap<i64, models::bookmark::Model>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl BookmarkRepository for MockBookmarkRepository {
        async fn create(&self, account_id: i64, title: &str, description: Option<&str>, link: &str) -> Result<models::bookmark::Model, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let now = chrono::Utc::now().into();
            let row = models::bookmark::Model {
                id,
                account_id,
                title: title.to_string(),
                description: description.map(|d| d.to_string()),
                link: link.to_string(),
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().insert(id, row.clone());
            Ok(row)
        }

        async fn get(&self, id: i64) -> Result<Option<models::bookmark::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn list_by_account(&self, account_id: i64) -> Result<Vec<models::bookmark::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().filter(|b| b.account_id == account_id).cloned().collect())
        }

        async fn update(&self, id: i64, title: Option<&str>, description: Option<&str>, link: Option<&str>) -> Result<models::bookmark::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("bookmark"))?;
            if let Some(t) = title { row.title = t.to_string(); }
            if let Some(d) = description { row.description = Some(d.to_string()); }
            if let Some(l) = link { row.link = l.to_string(); }
            row.updated_at = chrono::Utc::now().into();
            Ok(row.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
