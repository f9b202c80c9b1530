//! Service layer exposing the key-value store contract on top of models.
//! - `key_value` holds the repository seam and the contract surface.
//! - `db` holds the SeaORM-backed data access functions.
//! - `storage` holds the in-memory repository used by tests and DB-less runs.

pub mod db;
pub mod errors;
pub mod key_value;
pub mod storage;
#[cfg(test)]
pub mod test_support;
