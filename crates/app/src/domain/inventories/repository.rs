//! Postgres inventory store.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{Db, StoreError},
    domain::{
        inventories::{
            data::NewInventory,
            records::{InventoryId, InventoryRecord},
            store::InventoryStore,
        },
        products::records::ProductId,
    },
};

const INSERT_SQL: &str = include_str!("sql/insert.sql");
const FIND_SQL: &str = include_str!("sql/find.sql");
const FIND_BY_PRODUCT_ID_SQL: &str = include_str!("sql/find_by_product_id.sql");
const UPDATE_QUANTITY_SQL: &str = include_str!("sql/update_quantity.sql");
const DECREMENT_QUANTITY_SQL: &str = include_str!("sql/decrement_quantity.sql");
const DELETE_SQL: &str = include_str!("sql/delete.sql");
const LIST_SQL: &str = include_str!("sql/list.sql");
const PAGE_SQL: &str = include_str!("sql/page.sql");
const COUNT_SQL: &str = include_str!("sql/count.sql");

#[derive(Debug, Clone)]
pub struct PgInventoryStore {
    db: Db,
}

impl PgInventoryStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn insert(
        &self,
        new: NewInventory,
        created_at: Timestamp,
    ) -> Result<InventoryRecord, StoreError> {
        let record = query_as::<Postgres, InventoryRecord>(INSERT_SQL)
            .bind(new.product_id.into_i64())
            .bind(new.quantity)
            .bind(SqlxTimestamp::from(created_at))
            .fetch_one(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn find(&self, id: InventoryId) -> Result<Option<InventoryRecord>, StoreError> {
        let record = query_as::<Postgres, InventoryRecord>(FIND_SQL)
            .bind(id.into_i64())
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn find_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<Option<InventoryRecord>, StoreError> {
        let record = query_as::<Postgres, InventoryRecord>(FIND_BY_PRODUCT_ID_SQL)
            .bind(product_id.into_i64())
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn update_quantity(
        &self,
        id: InventoryId,
        quantity: i32,
        updated_at: Timestamp,
    ) -> Result<Option<InventoryRecord>, StoreError> {
        let record = query_as::<Postgres, InventoryRecord>(UPDATE_QUANTITY_SQL)
            .bind(id.into_i64())
            .bind(quantity)
            .bind(SqlxTimestamp::from(updated_at))
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn decrement_quantity(
        &self,
        product_id: ProductId,
        units: i32,
        updated_at: Timestamp,
    ) -> Result<Option<InventoryRecord>, StoreError> {
        // One conditional UPDATE; the quantity can never go negative even
        // under concurrent purchases of the same product.
        let record = query_as::<Postgres, InventoryRecord>(DECREMENT_QUANTITY_SQL)
            .bind(product_id.into_i64())
            .bind(units)
            .bind(SqlxTimestamp::from(updated_at))
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: InventoryId) -> Result<(), StoreError> {
        query(DELETE_SQL)
            .bind(id.into_i64())
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let records = query_as::<Postgres, InventoryRecord>(LIST_SQL)
            .fetch_all(self.db.pool())
            .await?;

        Ok(records)
    }

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<InventoryRecord>, StoreError> {
        let records = query_as::<Postgres, InventoryRecord>(PAGE_SQL)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.db.pool())
            .await?;

        Ok(records)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = query_scalar(COUNT_SQL).fetch_one(self.db.pool()).await?;

        Ok(count)
    }
}

impl<'r> FromRow<'r, PgRow> for InventoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: InventoryId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: row.try_get("quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row
                .try_get::<Option<SqlxTimestamp>, _>("updated_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
