//! Dining Table Repository

use super::{BaseRepository, RepoResult};
use shared::models::{DiningTable, DiningTableCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables
    ///
    /// Ordered by display number, then id. Admission scans tables in this
    /// order, so first-fit is stable across requests.
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY number, table_id")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all tables in a room
    pub async fn find_by_room(&self, room_id: &str) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE room_id = $room ORDER BY number, table_id")
            .bind(("room", room_id.to_string()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        self.base.get(TABLE, id).await
    }

    /// Create a new dining table
    ///
    /// The room is not checked: tables hold a weak reference.
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let table = DiningTable {
            table_id: new_id(),
            number: data.number,
            room_id: data.room_id,
            capacity: data.capacity,
            can_join: data.can_join,
            created_at: now_millis(),
        };
        let id = table.table_id.clone();
        self.base.insert(TABLE, &id, table).await
    }

    /// Replace all mutable fields of a dining table
    pub async fn update(&self, id: &str, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let existing = self.find_by_id(id).await?;
        let created_at = existing.map(|t| t.created_at).unwrap_or_else(now_millis);

        let table = DiningTable {
            table_id: id.to_string(),
            number: data.number,
            room_id: data.room_id,
            capacity: data.capacity,
            can_join: data.can_join,
            created_at,
        };
        self.base.replace(TABLE, id, table).await
    }

    /// Hard delete a dining table; reservations keep their table_id
    pub async fn delete(&self, id: &str) -> RepoResult<DiningTable> {
        self.base.remove(TABLE, id).await
    }
}
