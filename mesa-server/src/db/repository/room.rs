//! Room Repository

use super::{BaseRepository, RepoResult};
use shared::models::{Room, RoomCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "room";

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all rooms
    pub async fn find_all(&self) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query("SELECT * FROM room ORDER BY name")
            .await?
            .take(0)?;
        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        self.base.get(TABLE, id).await
    }

    pub async fn create(&self, data: RoomCreate) -> RepoResult<Room> {
        let room = Room {
            room_id: new_id(),
            name: data.name,
            capacity: data.capacity,
            created_at: now_millis(),
        };
        let id = room.room_id.clone();
        self.base.insert(TABLE, &id, room).await
    }

    /// Replace name and capacity
    pub async fn update(&self, id: &str, data: RoomCreate) -> RepoResult<Room> {
        let existing = self.find_by_id(id).await?;
        let created_at = existing.map(|r| r.created_at).unwrap_or_else(now_millis);

        let room = Room {
            room_id: id.to_string(),
            name: data.name,
            capacity: data.capacity,
            created_at,
        };
        self.base.replace(TABLE, id, room).await
    }

    /// Hard delete; tables keep their (now dangling) room_id
    pub async fn delete(&self, id: &str) -> RepoResult<Room> {
        self.base.remove(TABLE, id).await
    }
}
