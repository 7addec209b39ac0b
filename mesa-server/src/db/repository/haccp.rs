//! HACCP Record Repository

use super::{BaseRepository, RepoResult};
use shared::models::{HaccpRecord, HaccpRecordCreate, HaccpType};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "haccp_record";

#[derive(Debug, serde::Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct HaccpRepository {
    base: BaseRepository,
}

impl HaccpRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Newest first, optionally filtered by type
    pub async fn find(&self, record_type: Option<HaccpType>) -> RepoResult<Vec<HaccpRecord>> {
        let records: Vec<HaccpRecord> = match record_type {
            Some(kind) => self
                .base
                .db()
                .query("SELECT * FROM haccp_record WHERE record_type = $kind ORDER BY created_at DESC")
                .bind(("kind", kind.as_str()))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query("SELECT * FROM haccp_record ORDER BY created_at DESC")
                .await?
                .take(0)?,
        };
        Ok(records)
    }

    pub async fn create(&self, data: HaccpRecordCreate) -> RepoResult<HaccpRecord> {
        self.create_at(data, now_millis()).await
    }

    /// Create with an explicit timestamp (imports, tests)
    pub async fn create_at(&self, data: HaccpRecordCreate, created_at: i64) -> RepoResult<HaccpRecord> {
        let record = HaccpRecord {
            record_id: new_id(),
            record_type: data.record_type,
            equipment_product: data.equipment_product,
            value: data.value,
            photo_url: data.photo_url,
            user_name: data.user_name,
            signature: data.signature,
            notes: data.notes,
            created_at,
        };
        let id = record.record_id.clone();
        self.base.insert(TABLE, &id, record).await
    }

    /// Count records created in `[start, end)` (Unix millis), optionally by type
    pub async fn count_between(
        &self,
        record_type: Option<HaccpType>,
        start: i64,
        end: i64,
    ) -> RepoResult<u32> {
        let mut sql = String::from(
            "SELECT count() AS count FROM haccp_record WHERE created_at >= $start AND created_at < $end",
        );
        if record_type.is_some() {
            sql.push_str(" AND record_type = $kind");
        }
        sql.push_str(" GROUP ALL");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("start", start))
            .bind(("end", end));
        if let Some(kind) = record_type {
            query = query.bind(("kind", kind.as_str()));
        }

        let rows: Vec<CountRow> = query.await?.take(0)?;
        // GROUP ALL over zero rows yields no row at all
        let count = rows.first().map(|r| r.count).unwrap_or(0);
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }
}
