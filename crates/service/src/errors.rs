use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(key: &str) -> Self { Self::NotFound(format!("key '{}' not found", key)) }
    pub fn already_exists(key: &str) -> Self { Self::AlreadyExists(format!("key '{}' already exists", key)) }
}
