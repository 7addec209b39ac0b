//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

// Auth
pub mod user;

// Floor plan
pub mod dining_table;
pub mod room;

// Reservations
pub mod reservation;
pub mod settings;

// HACCP
pub mod equipment;
pub mod haccp;
pub mod space;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use equipment::EquipmentRepository;
pub use haccp::HaccpRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
pub use settings::SettingsRepository;
pub use space::SpaceRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 每个文档自带字符串 ID 字段 (room_id, table_id, ...)，
// 同一个值也是 SurrealDB 的 record key：
//   - RecordId::from_table_key("room", room_id)
//   - API 只暴露纯 ID，从不暴露 "table:key" 格式

/// Base repository with database reference and keyed document helpers
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    fn record(table: &str, id: &str) -> RecordId {
        RecordId::from_table_key(table, id.to_owned())
    }

    /// Fetch one document by key
    pub async fn get<T>(&self, table: &str, id: &str) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let doc: Option<T> = self.db.select(Self::record(table, id)).await?;
        Ok(doc)
    }

    /// Insert a new document under `id`
    pub async fn insert<T>(&self, table: &str, id: &str, doc: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let created: Option<T> = self.db.create(Self::record(table, id)).content(doc).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {table} {id}")))
    }

    /// Replace an existing document; `NotFound` when the key is unknown
    pub async fn replace<T>(&self, table: &str, id: &str, doc: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        if self.get::<T>(table, id).await?.is_none() {
            return Err(RepoError::NotFound(format!("{table} {id} not found")));
        }
        let updated: Option<T> = self.db.update(Self::record(table, id)).content(doc).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("{table} {id} not found")))
    }

    /// Hard delete; `NotFound` when the key is unknown
    pub async fn remove<T>(&self, table: &str, id: &str) -> RepoResult<T>
    where
        T: DeserializeOwned,
    {
        let deleted: Option<T> = self.db.delete(Self::record(table, id)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("{table} {id} not found")))
    }
}
