use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::bookmark::repository::BookmarkRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookmarkRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookmarkRepository for SeaOrmBookmarkRepository {
    async fn create(&self, account_id: i64, title: &str, description: Option<&str>, link: &str) -> Result<models::bookmark::Model, ServiceError> {
        let created = models::bookmark::create(&self.db, account_id, title, description, link).await?;
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<models::bookmark::Model>, ServiceError> {
        let found = models::bookmark::find_by_id(&self.db, id).await?;
        Ok(found)
    }

    async fn list_by_account(&self, account_id: i64) -> Result<Vec<models::bookmark::Model>, ServiceError> {
        let rows = models::bookmark::list_by_account(&self.db, account_id).await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, title: Option<&str>, description: Option<&str>, link: Option<&str>) -> Result<models::bookmark::Model, ServiceError> {
        let mut am: models::bookmark::ActiveModel = models::bookmark::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("bookmark"))?
            .into();
        if let Some(t) = title { am.title = Set(t.to_string()); }
        if let Some(d) = description { am.description = Set(Some(d.to_string())); }
        if let Some(l) = link { am.link = Set(l.to_string()); }
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        models::bookmark::delete(&self.db, id).await?;
        Ok(true)
    }
}
