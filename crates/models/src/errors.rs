use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate value: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify a SeaORM error, surfacing unique-constraint violations as
    /// `Duplicate` so callers can map them to a client-facing conflict.
    pub fn from_db(e: sea_orm::DbErr) -> Self {
        let msg = e.to_string();
        if msg.contains("duplicate key value violates unique constraint") {
            ModelError::Duplicate(msg)
        } else {
            ModelError::Db(msg)
        }
    }
}
