use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateBookmark, EditBookmark};
use super::repository::BookmarkRepository;
use crate::errors::ServiceError;

/// Application service enforcing row-level ownership on bookmarks.
///
/// Get/edit/delete collapse "row absent" and "row owned by someone else" into
/// a single [`ServiceError::Forbidden`] so record ids cannot be enumerated.
pub struct BookmarkService<R: BookmarkRepository> {
    repo: Arc<R>,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(account_id = %account_id))]
    pub async fn create(&self, account_id: i64, input: CreateBookmark) -> Result<models::bookmark::Model, ServiceError> {
        if input.title.trim().is_empty() {
            return Err(ServiceError::Validation("title required".into()));
        }
        if input.link.trim().is_empty() {
            return Err(ServiceError::Validation("link required".into()));
        }
        let created = self.repo
            .create(account_id, &input.title, input.description.as_deref(), &input.link)
            .await?;
        info!(account_id = %account_id, bookmark_id = %created.id, "bookmark_created");
        Ok(created)
    }

    /// All bookmarks owned by the caller, primary-key order.
    pub async fn list(&self, account_id: i64) -> Result<Vec<models::bookmark::Model>, ServiceError> {
        self.repo.list_by_account(account_id).await
    }

    pub async fn get(&self, account_id: i64, bookmark_id: i64) -> Result<models::bookmark::Model, ServiceError> {
        self.owned(account_id, bookmark_id).await
    }

    #[instrument(skip(self, input), fields(account_id = %account_id, bookmark_id = %bookmark_id))]
    pub async fn edit(&self, account_id: i64, bookmark_id: i64, input: EditBookmark) -> Result<models::bookmark::Model, ServiceError> {
        if let Some(title) = &input.title {
            if title.trim().is_empty() {
                return Err(ServiceError::Validation("title required".into()));
            }
        }
        if let Some(link) = &input.link {
            if link.trim().is_empty() {
                return Err(ServiceError::Validation("link required".into()));
            }
        }
        self.owned(account_id, bookmark_id).await?;
        let updated = self.repo
            .update(bookmark_id, input.title.as_deref(), input.description.as_deref(), input.link.as_deref())
            .await?;
        Ok(updated)
    }

    #[instrument(skip(self), fields(account_id = %account_id, bookmark_id = %bookmark_id))]
    pub async fn delete(&self, account_id: i64, bookmark_id: i64) -> Result<(), ServiceError> {
        self.owned(account_id, bookmark_id).await?;
        self.repo.delete(bookmark_id).await?;
        info!(account_id = %account_id, bookmark_id = %bookmark_id, "bookmark_deleted");
        Ok(())
    }

    /// The ownership check: load by id only, then compare owners. Absent and
    /// not-owned both come back as `Forbidden`.
    async fn owned(&self, account_id: i64, bookmark_id: i64) -> Result<models::bookmark::Model, ServiceError> {
        let bookmark = self.repo.get(bookmark_id).await?;
        match bookmark {
            Some(b) if b.account_id == account_id => Ok(b),
            _ => Err(ServiceError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::repository::mock::MockBookmarkRepository;

    fn svc() -> BookmarkService<MockBookmarkRepository> {
        BookmarkService::new(Arc::new(MockBookmarkRepository::default()))
    }

    fn create_input(title: &str, link: &str) -> CreateBookmark {
        CreateBookmark { title: title.into(), description: None, link: link.into() }
    }

    #[tokio::test]
    async fn create_and_get_own_bookmark() {
        let svc = svc();
        let b = svc.create(1, create_input("Some title", "https://www.somelink.com")).await.expect("create");
        let got = svc.get(1, b.id).await.expect("get");
        assert_eq!(got.id, b.id);
        assert_eq!(got.title, "Some title");
    }

    #[tokio::test]
    async fn cross_account_access_is_forbidden() {
        let svc = svc();
        let b = svc.create(1, create_input("A's bookmark", "https://a.example")).await.expect("create");

        assert!(matches!(svc.get(2, b.id).await.unwrap_err(), ServiceError::Forbidden));
        assert!(matches!(
            svc.edit(2, b.id, EditBookmark { title: Some("stolen".into()), ..Default::default() }).await.unwrap_err(),
            ServiceError::Forbidden
        ));
        assert!(matches!(svc.delete(2, b.id).await.unwrap_err(), ServiceError::Forbidden));

        // The owner is unaffected
        let still = svc.get(1, b.id).await.expect("owner get");
        assert_eq!(still.title, "A's bookmark");
    }

    #[tokio::test]
    async fn missing_row_is_indistinguishable_from_not_owned() {
        let svc = svc();
        assert!(matches!(svc.get(1, 9999).await.unwrap_err(), ServiceError::Forbidden));
        assert!(matches!(svc.delete(1, 9999).await.unwrap_err(), ServiceError::Forbidden));
        assert!(matches!(
            svc.edit(1, 9999, EditBookmark::default()).await.unwrap_err(),
            ServiceError::Forbidden
        ));
    }

    #[tokio::test]
    async fn edit_applies_only_supplied_fields() {
        let svc = svc();
        let b = svc
            .create(1, CreateBookmark {
                title: "Some title".into(),
                description: Some("about something".into()),
                link: "https://www.somelink.com".into(),
            })
            .await
            .expect("create");

        let updated = svc
            .edit(1, b.id, EditBookmark { title: Some("Some other title".into()), ..Default::default() })
            .await
            .expect("edit");
        assert_eq!(updated.title, "Some other title");
        assert_eq!(updated.description.as_deref(), Some("about something"));
        assert_eq!(updated.link, "https://www.somelink.com");
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner_with_exact_cardinality() {
        let svc = svc();
        for i in 0..3 {
            svc.create(1, create_input(&format!("mine {i}"), "https://mine.example")).await.expect("create");
        }
        svc.create(2, create_input("theirs", "https://theirs.example")).await.expect("create");

        let mine = svc.list(1).await.expect("list");
        assert_eq!(mine.len(), 3);
        assert!(mine.iter().all(|b| b.account_id == 1));
        // Stable order: primary key ascending
        assert!(mine.windows(2).all(|w| w[0].id < w[1].id));

        let theirs = svc.list(2).await.expect("list");
        assert_eq!(theirs.len(), 1);
    }

    #[tokio::test]
    async fn delete_then_get_is_forbidden() {
        let svc = svc();
        let b = svc.create(1, create_input("ephemeral", "https://gone.example")).await.expect("create");
        svc.delete(1, b.id).await.expect("delete");
        assert!(matches!(svc.get(1, b.id).await.unwrap_err(), ServiceError::Forbidden));
        assert!(svc.list(1).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_title_and_link() {
        let svc = svc();
        assert!(matches!(
            svc.create(1, create_input("", "https://x.example")).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            svc.create(1, create_input("title", "")).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
    }
}
