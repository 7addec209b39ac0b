//! Space Repository

use super::{BaseRepository, RepoResult};
use shared::models::{Space, SpaceCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "space";

#[derive(Clone)]
pub struct SpaceRepository {
    base: BaseRepository,
}

impl SpaceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Space>> {
        let spaces: Vec<Space> = self
            .base
            .db()
            .query("SELECT * FROM space ORDER BY name")
            .await?
            .take(0)?;
        Ok(spaces)
    }

    pub async fn create(&self, data: SpaceCreate) -> RepoResult<Space> {
        let space = Space {
            space_id: new_id(),
            name: data.name,
            kind: data.kind,
            created_at: now_millis(),
        };
        let id = space.space_id.clone();
        self.base.insert(TABLE, &id, space).await
    }

    pub async fn update(&self, id: &str, data: SpaceCreate) -> RepoResult<Space> {
        let existing: Option<Space> = self.base.get(TABLE, id).await?;
        let created_at = existing.map(|s| s.created_at).unwrap_or_else(now_millis);

        let space = Space {
            space_id: id.to_string(),
            name: data.name,
            kind: data.kind,
            created_at,
        };
        self.base.replace(TABLE, id, space).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Space> {
        self.base.remove(TABLE, id).await
    }
}
