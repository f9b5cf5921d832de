//! Shared handler state.

use std::sync::Arc;

use stockline_app::{
    context::{InventoryContext, ProductsContext},
    domain::{inventories::InventoriesService, products::ProductsService},
};

/// State injected into every Inventory request.
#[derive(Clone)]
pub struct InventoryState {
    pub inventories: Arc<dyn InventoriesService>,
}

impl InventoryState {
    #[must_use]
    pub fn new(inventories: Arc<dyn InventoriesService>) -> Self {
        Self { inventories }
    }

    #[must_use]
    pub fn from_context(context: InventoryContext) -> Arc<Self> {
        Arc::new(Self::new(context.inventories))
    }
}

/// State injected into every Products request.
#[derive(Clone)]
pub struct ProductsState {
    pub products: Arc<dyn ProductsService>,
}

impl ProductsState {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn from_context(context: ProductsContext) -> Arc<Self> {
        Arc::new(Self::new(context.products))
    }
}
