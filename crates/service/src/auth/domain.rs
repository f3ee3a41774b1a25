use serde::{Deserialize, Serialize};

/// Signup input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Signin input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Persisted account as the repository sees it, hash included.
/// Never serialized outward; the service maps it to [`AuthAccount`].
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

/// Domain account (business view, no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAccount {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<AccountRecord> for AuthAccount {
    fn from(r: AccountRecord) -> Self {
        Self { id: r.id, email: r.email, first_name: r.first_name, last_name: r.last_name }
    }
}

/// Result of a successful signup or signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub account: AuthAccount,
    pub token: String,
}
