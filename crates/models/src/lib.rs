pub mod errors;
pub mod db;
pub mod account;
pub mod bookmark;

#[cfg(test)]
mod crud_tests {
    use migration::MigratorTrait;

    use crate::{account, bookmark, db};

    #[tokio::test]
    async fn test_account_bookmark_crud() {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return; }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return;
        }

        let email = format!("model_{}@example.com", uuid::Uuid::new_v4());
        let a = account::create(&db, &email, "$argon2id$fake-hash").await.expect("create account");
        assert_eq!(a.email, email);

        let found = account::find_by_email(&db, &email).await.expect("find").expect("some");
        assert_eq!(found.id, a.id);

        let b = bookmark::create(&db, a.id, "Some title", None, "https://www.somelink.com")
            .await
            .expect("create bookmark");
        let listed = bookmark::list_by_account(&db, a.id).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, b.id);

        bookmark::delete(&db, b.id).await.expect("delete bookmark");
        let listed = bookmark::list_by_account(&db, a.id).await.expect("list");
        assert!(listed.is_empty());

        use sea_orm::EntityTrait;
        account::Entity::delete_by_id(a.id).exec(&db).await.expect("cleanup account");
    }
}
