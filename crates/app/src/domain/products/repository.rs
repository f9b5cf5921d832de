//! Postgres product store.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{Db, StoreError},
    domain::products::{
        data::{NewProduct, ProductUpdate},
        records::{ProductId, ProductRecord},
        store::ProductStore,
    },
};

const INSERT_SQL: &str = include_str!("sql/insert.sql");
const FIND_SQL: &str = include_str!("sql/find.sql");
const UPDATE_SQL: &str = include_str!("sql/update.sql");
const DELETE_SQL: &str = include_str!("sql/delete.sql");
const LIST_SQL: &str = include_str!("sql/list.sql");
const PAGE_SQL: &str = include_str!("sql/page.sql");
const COUNT_SQL: &str = include_str!("sql/count.sql");

#[derive(Debug, Clone)]
pub struct PgProductStore {
    db: Db,
}

impl PgProductStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(
        &self,
        new: NewProduct,
        created_at: Timestamp,
    ) -> Result<ProductRecord, StoreError> {
        let record = query_as::<Postgres, ProductRecord>(INSERT_SQL)
            .bind(&new.name)
            .bind(new.price)
            .bind(SqlxTimestamp::from(created_at))
            .fetch_one(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn find(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let record = query_as::<Postgres, ProductRecord>(FIND_SQL)
            .bind(id.into_i64())
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<ProductRecord>, StoreError> {
        let record = query_as::<Postgres, ProductRecord>(UPDATE_SQL)
            .bind(id.into_i64())
            .bind(&update.name)
            .bind(update.price)
            .bind(SqlxTimestamp::from(updated_at))
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        query(DELETE_SQL)
            .bind(id.into_i64())
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let records = query_as::<Postgres, ProductRecord>(LIST_SQL)
            .fetch_all(self.db.pool())
            .await?;

        Ok(records)
    }

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<ProductRecord>, StoreError> {
        let records = query_as::<Postgres, ProductRecord>(PAGE_SQL)
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

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row
                .try_get::<Option<SqlxTimestamp>, _>("updated_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
