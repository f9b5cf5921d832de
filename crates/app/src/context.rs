//! Service wiring.
//!
//! Each binary builds one context at startup: connect, run the service's own
//! migrations, then assemble the store and service behind trait objects.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    clients::products::{ProductsLookup, RestProductsLookup},
    database::{self, Db},
    domain::{
        inventories::{InventoriesService, PgInventoryStore, StoreInventoriesService},
        products::{PgProductStore, ProductsService, StoreProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("error connecting to the database")]
    Database(#[from] sqlx::Error),

    #[error("error running database migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Everything the Inventory HTTP layer needs.
#[derive(Clone)]
pub struct InventoryContext {
    pub inventories: Arc<dyn InventoriesService>,
}

impl InventoryContext {
    /// Connect, migrate the inventories schema and wire the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn from_config(
        database_url: &str,
        lookup: Option<RestProductsLookup>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url).await?;

        sqlx::migrate!("./migrations/inventory").run(&pool).await?;

        let store = Arc::new(PgInventoryStore::new(Db::new(pool)));
        let products = lookup.map(|client| Arc::new(client) as Arc<dyn ProductsLookup>);

        Ok(Self {
            inventories: Arc::new(StoreInventoriesService::new(store, products)),
        })
    }
}

/// Everything the Products HTTP layer needs.
#[derive(Clone)]
pub struct ProductsContext {
    pub products: Arc<dyn ProductsService>,
}

impl ProductsContext {
    /// Connect, migrate the products schema and wire the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn from_config(database_url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url).await?;

        sqlx::migrate!("./migrations/products").run(&pool).await?;

        let store = Arc::new(PgProductStore::new(Db::new(pool)));

        Ok(Self {
            products: Arc::new(StoreProductsService::new(store)),
        })
    }
}
