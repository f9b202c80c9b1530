use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, DbErr, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "key_value")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new record. The primary key on `key` makes this an atomic
/// check-and-insert: a concurrent insert of the same key loses with a
/// unique-constraint violation, surfaced as `ModelError::Conflict`.
pub async fn insert(db: &DatabaseConnection, key: &str, value: &str) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Conflict(format!("key '{}' already exists", key)),
        _ => ModelError::Db(e.to_string()),
    })
}

pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(key)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Replace the value of an existing record in place. Returns `Ok(None)` when
/// no record with the key exists; never inserts one.
pub async fn update_value(db: &DatabaseConnection, key: &str, value: &str) -> Result<Option<Model>, ModelError> {
    let found = find_by_key(db, key).await?;
    let Some(found) = found else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.value = Set(value.to_string());
    am.updated_at = Set(Utc::now().into());
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        // Row disappeared between the lookup and the write
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(ModelError::Db(e.to_string())),
    }
}
