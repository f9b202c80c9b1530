use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Backing-store capability for key-value records. The store owns the
/// mapping exclusively; nothing outside this seam touches the records.
///
/// Implementations must make `create` an atomic check-and-insert per key:
/// under concurrent creates for one key, at most one call may succeed.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<models::key_value::Model>, ServiceError>;
    async fn create(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError>;
    async fn update(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError>;
}

/// SeaORM-backed repository implementation. Uniqueness is delegated to the
/// database's unique-key insert; its duplicate rejection is the source of
/// truth for `AlreadyExists`.
pub struct SeaOrmKeyValueRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl KeyValueRepository for SeaOrmKeyValueRepository {
    async fn get(&self, key: &str) -> Result<Option<models::key_value::Model>, ServiceError> {
        crate::db::key_value_service::get_key_value(&self.db, key).await
    }

    async fn create(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        crate::db::key_value_service::create_key_value(&self.db, key, value).await
    }

    async fn update(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        crate::db::key_value_service::update_key_value(&self.db, key, value).await
    }
}
