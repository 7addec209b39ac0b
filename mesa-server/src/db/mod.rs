//! Database Module
//!
//! Embedded SurrealDB document store (SurrealKV on disk, in-memory for tests)

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, SurrealKv};

use crate::utils::AppError;

const NAMESPACE: &str = "mesa";
const DATABASE: &str = "restaurant";

/// Indexes only; documents stay schemaless
const SCHEMA: &str = r#"
DEFINE INDEX IF NOT EXISTS user_email ON TABLE app_user COLUMNS email UNIQUE;
DEFINE INDEX IF NOT EXISTS reservation_slot ON TABLE reservation COLUMNS date, meal_type;
DEFINE INDEX IF NOT EXISTS haccp_created ON TABLE haccp_record COLUMNS created_at;
"#;

/// Database service: owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<SurrealKv>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path.display(), "Database connection established (SurrealKV)");

        Self::prepare(db).await
    }

    /// Volatile in-memory database (tests, demos)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::debug!("Database schema applied");

        Ok(Self { db })
    }
}
