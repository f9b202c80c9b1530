use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::key_value::repository::KeyValueRepository;

/// In-memory key-value repository.
///
/// Implements the same contract as the database-backed repository with a
/// `HashMap` behind an async `RwLock`. The write lock is held across the
/// existence check and the insert, so concurrent creates for one key cannot
/// both pass the check. Used as the test substitute and for DB-less runs.
#[derive(Clone, Default)]
pub struct MemoryKeyValueRepository {
    inner: Arc<RwLock<HashMap<String, models::key_value::Model>>>,
}

impl MemoryKeyValueRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl KeyValueRepository for MemoryKeyValueRepository {
    async fn get(&self, key: &str) -> Result<Option<models::key_value::Model>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn create(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        let mut map = self.inner.write().await;
        if map.contains_key(key) {
            return Err(ServiceError::already_exists(key));
        }
        let now = Utc::now().into();
        let record = models::key_value::Model {
            key: key.to_string(),
            value: value.to_string(),
            created_at: now,
            updated_at: now,
        };
        map.insert(key.to_string(), record.clone());
        Ok(record)
    }

    async fn update(&self, key: &str, value: &str) -> Result<models::key_value::Model, ServiceError> {
        let mut map = self.inner.write().await;
        match map.get_mut(key) {
            Some(record) => {
                record.value = value.to_string();
                record.updated_at = Utc::now().into();
                Ok(record.clone())
            }
            None => Err(ServiceError::not_found(key)),
        }
    }
}
