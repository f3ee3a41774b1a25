use sea_orm::DatabaseConnection;

use crate::auth::domain::AccountRecord;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: models::account::Model) -> AccountRecord {
    AccountRecord {
        id: m.id,
        email: m.email,
        first_name: m.first_name,
        last_name: m.last_name,
        password_hash: m.password_hash,
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AuthError> {
        let res = models::account::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(to_record))
    }

    async fn create_account(&self, email: &str, password_hash: &str) -> Result<AccountRecord, AuthError> {
        use models::errors::ModelError;
        let created = models::account::create(&self.db, email, password_hash)
            .await
            .map_err(|e| match e {
                ModelError::Validation(m) => AuthError::Validation(m),
                // unique constraint on email, racing signups included
                ModelError::Duplicate(_) => AuthError::Conflict,
                ModelError::Db(m) => AuthError::Repository(m),
            })?;
        Ok(to_record(created))
    }
}
