use models::errors::ModelError;
use models::key_value;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Create a record. The check-then-insert is a single database insert; the
/// unique key on `key` rejects duplicates atomically, so two concurrent
/// creates for the same key cannot both succeed.
pub async fn create_key_value(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<key_value::Model, ServiceError> {
    key_value::insert(db, key, value).await.map_err(|e| match e {
        ModelError::Conflict(msg) => ServiceError::AlreadyExists(msg),
        other => ServiceError::Model(other),
    })
}

/// Get a record by key.
pub async fn get_key_value(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<key_value::Model>, ServiceError> {
    Ok(key_value::find_by_key(db, key).await?)
}

/// Replace the value of an existing record. Never creates one.
pub async fn update_key_value(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<key_value::Model, ServiceError> {
    key_value::update_value(db, key, value)
        .await?
        .ok_or_else(|| ServiceError::not_found(key))
}
