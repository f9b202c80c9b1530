use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::key_value::repository::KeyValueRepository;

/// Contract surface of the store: Get, Create, Update against an injected
/// repository. Per key, state moves ABSENT -> PRESENT on a successful create
/// and stays PRESENT across updates; failed calls leave it unchanged.
pub struct KeyValueService {
    repo: Arc<dyn KeyValueRepository>,
}

impl KeyValueService {
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self { Self { repo } }

    /// Lookup by key; no side effects either way.
    pub async fn get(&self, key: &str) -> Result<models::key_value::Model, ServiceError> {
        self.repo.get(key).await?.ok_or_else(|| ServiceError::not_found(key))
    }

    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn create(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        let created = self.repo.create(key, value).await?;
        info!(key = %created.key, "created key-value record");
        Ok(created)
    }

    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn update(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        let updated = self.repo.update(key, value).await?;
        info!(key = %updated.key, "updated key-value record");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_kv_store::MemoryKeyValueRepository;

    fn svc() -> KeyValueService {
        KeyValueService::new(MemoryKeyValueRepository::new())
    }

    #[tokio::test]
    async fn get_of_never_created_key_is_not_found() {
        let svc = svc();
        let res = svc.get("nope").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_then_get_round_trips() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.create("a", "1").await?;
        let fetched = svc.get("a").await?;
        assert_eq!(fetched.key, created.key);
        assert_eq!(fetched.value, created.value);
        Ok(())
    }

    #[tokio::test]
    async fn full_store_scenario() -> Result<(), anyhow::Error> {
        let svc = svc();

        let a = svc.create("a", "1").await?;
        assert_eq!((a.key.as_str(), a.value.as_str()), ("a", "1"));

        let conflict = svc.create("a", "2").await;
        assert!(matches!(conflict, Err(ServiceError::AlreadyExists(_))));
        assert_eq!(svc.get("a").await?.value, "1");

        let updated = svc.update("a", "2").await?;
        assert_eq!(updated.value, "2");
        assert_eq!(svc.get("a").await?.value, "2");

        let missing = svc.get("b").await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_absent_key_does_not_upsert() {
        let svc = svc();
        let res = svc.update("ghost", "v").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get("ghost").await, Err(ServiceError::NotFound(_))));
    }
}
