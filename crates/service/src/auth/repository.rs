use async_trait::async_trait;

use super::domain::AccountRecord;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AuthError>;

    /// Persists a new account; duplicate email yields [`AuthError::Conflict`].
    async fn create_account(&self, email: &str, password_hash: &str) -> Result<AccountRecord, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        accounts: Mutex<HashMap<String, AccountRecord>>, // key: email
        next_id: AtomicI64,
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AuthError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.get(email).cloned())
        }

        async fn create_account(&self, email: &str, password_hash: &str) -> Result<AccountRecord, AuthError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let record = AccountRecord {
                id,
                email: email.to_string(),
                first_name: None,
                last_name: None,
                password_hash: password_hash.to_string(),
            };
            accounts.insert(email.to_string(), record.clone());
            Ok(record)
        }
    }
}
