//! Create `key_value` table.
//!
//! The primary key on `key` is the uniqueness constraint the store relies on:
//! a duplicate insert is rejected atomically by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeyValue::Table)
                    .if_not_exists()
                    .col(text(KeyValue::Key).primary_key())
                    .col(text(KeyValue::Value).not_null())
                    .col(timestamp_with_time_zone(KeyValue::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(KeyValue::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KeyValue::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KeyValue { Table, Key, Value, CreatedAt, UpdatedAt }
