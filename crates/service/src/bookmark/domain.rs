use serde::{Deserialize, Serialize};

/// Fields for creating a bookmark; the owner comes from the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Partial-update field set: only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditBookmark {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}
