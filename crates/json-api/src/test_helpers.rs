//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use stockline_app::domain::{
    inventories::{
        MockInventoriesService,
        records::{InventoryId, InventoryRecord},
    },
    products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::state::{InventoryState, ProductsState};

pub(crate) fn make_inventory(id: i64, product_id: i64, quantity: i32) -> InventoryRecord {
    InventoryRecord {
        id: InventoryId::from_i64(id),
        product_id: ProductId::from_i64(product_id),
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
    }
}

pub(crate) fn make_product(id: i64, name: &str, price: Decimal) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: name.to_string(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Mount a route behind a mocked inventory service, without the key check.
pub(crate) fn inventories_service(inventories: MockInventoriesService, route: Router) -> Service {
    let state = Arc::new(InventoryState::new(Arc::new(inventories)));

    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Mount a route behind a mocked products service, without the key check.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = Arc::new(ProductsState::new(Arc::new(products)));

    Service::new(Router::new().hoop(inject(state)).push(route))
}
