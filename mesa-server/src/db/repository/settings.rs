//! Settings Repository (Singleton)

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{SETTINGS_ID, Settings};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "settings";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get the singleton settings, `None` if never stored
    pub async fn get(&self) -> RepoResult<Option<Settings>> {
        self.base.get(TABLE, SETTINGS_ID).await
    }

    /// Get or create the singleton settings with defaults
    pub async fn get_or_create(&self) -> RepoResult<Settings> {
        // Try to get existing
        if let Some(settings) = self.get().await? {
            return Ok(settings);
        }

        tracing::info!("No settings stored yet, creating defaults");
        self.base
            .insert(TABLE, SETTINGS_ID, Settings::default())
            .await
    }

    /// Replace (or create) the singleton settings
    pub async fn save(&self, settings: Settings) -> RepoResult<Settings> {
        let singleton_id = RecordId::from_table_key(TABLE, SETTINGS_ID);
        let saved: Option<Settings> = self
            .base
            .db()
            .upsert(singleton_id)
            .content(settings)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save settings".to_string()))
    }
}
