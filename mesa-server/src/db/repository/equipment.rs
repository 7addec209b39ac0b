//! Equipment Repository

use super::{BaseRepository, RepoResult};
use shared::models::{Equipment, EquipmentCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "equipment";

#[derive(Clone)]
pub struct EquipmentRepository {
    base: BaseRepository,
}

impl EquipmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Equipment>> {
        let items: Vec<Equipment> = self
            .base
            .db()
            .query("SELECT * FROM equipment ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn create(&self, data: EquipmentCreate) -> RepoResult<Equipment> {
        let item = Equipment {
            equipment_id: new_id(),
            name: data.name,
            kind: data.kind,
            location: data.location,
            created_at: now_millis(),
        };
        let id = item.equipment_id.clone();
        self.base.insert(TABLE, &id, item).await
    }

    pub async fn update(&self, id: &str, data: EquipmentCreate) -> RepoResult<Equipment> {
        let existing: Option<Equipment> = self.base.get(TABLE, id).await?;
        let created_at = existing.map(|e| e.created_at).unwrap_or_else(now_millis);

        let item = Equipment {
            equipment_id: id.to_string(),
            name: data.name,
            kind: data.kind,
            location: data.location,
            created_at,
        };
        self.base.replace(TABLE, id, item).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Equipment> {
        self.base.remove(TABLE, id).await
    }
}
