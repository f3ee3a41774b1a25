use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::errors::ServiceError;
use models::account;

/// Partial profile update; unset fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditProfile {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Fresh profile lookup by id.
pub async fn get_profile(db: &DatabaseConnection, id: i64) -> Result<Option<account::Model>, ServiceError> {
    let found = account::find_by_id(db, id).await?;
    Ok(found)
}

/// Apply a partial profile edit. Changing the email to one already taken
/// surfaces as a conflict via the store's unique constraint.
pub async fn edit_profile(db: &DatabaseConnection, id: i64, edit: EditProfile) -> Result<account::Model, ServiceError> {
    if let Some(email) = &edit.email {
        account::validate_email(email)?;
    }
    let mut am: account::ActiveModel = account::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("account"))?
        .into();
    if let Some(email) = edit.email { am.email = Set(email); }
    if let Some(first) = edit.first_name { am.first_name = Set(Some(first)); }
    if let Some(last) = edit.last_name { am.last_name = Set(Some(last)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::from(models::errors::ModelError::from_db(e)))?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use uuid::Uuid;

    #[tokio::test]
    async fn profile_get_and_partial_edit() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match models::db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return Ok(());
        }

        let email = format!("profile_{}@example.com", Uuid::new_v4());
        let a = account::create(&db, &email, "$argon2id$fake-hash").await?;

        let found = get_profile(&db, a.id).await?.expect("profile exists");
        assert_eq!(found.email, email);
        assert!(found.first_name.is_none());

        let updated = edit_profile(
            &db,
            a.id,
            EditProfile { first_name: Some("Marlon".into()), ..Default::default() },
        )
        .await?;
        assert_eq!(updated.first_name.as_deref(), Some("Marlon"));
        // Unsupplied fields unchanged
        assert_eq!(updated.email, email);

        use sea_orm::EntityTrait;
        account::Entity::delete_by_id(a.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn edit_to_taken_email_is_a_conflict() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match models::db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return Ok(());
        }

        let taken = format!("taken_{}@example.com", Uuid::new_v4());
        let other = account::create(&db, &taken, "$argon2id$fake-hash").await?;
        let email = format!("editor_{}@example.com", Uuid::new_v4());
        let a = account::create(&db, &email, "$argon2id$fake-hash").await?;

        let err = edit_profile(
            &db,
            a.id,
            EditProfile { email: Some(taken), ..Default::default() },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        // The failed edit must not have touched the row
        let unchanged = get_profile(&db, a.id).await?.expect("profile exists");
        assert_eq!(unchanged.email, email);

        use sea_orm::EntityTrait;
        account::Entity::delete_by_id(a.id).exec(&db).await?;
        account::Entity::delete_by_id(other.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn edit_missing_account_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match models::db::connect().await {
            Ok(db) => db,
            Err(_) => return Ok(()),
        };
        if migration::Migrator::up(&db, None).await.is_err() { return Ok(()); }

        let err = edit_profile(&db, i64::MAX, EditProfile::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
