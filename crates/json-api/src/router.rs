//! Service routers.
//!
//! Literal segments (`list`, `paginated`, `purchase`, `product/...`) are
//! mounted before the `{id}` capture so they are never shadowed by it.

use std::sync::Arc;

use salvo::{
    affix_state::inject, catch_panic::CatchPanic, prelude::*, trailing_slash::remove_slash,
};

use crate::{
    auth,
    config::ApiKeyConfig,
    healthcheck, inventories, products,
    state::{InventoryState, ProductsState},
};

/// Router for the Inventory service.
#[must_use]
pub fn inventory_router(state: Arc<InventoryState>, api_key: Arc<ApiKeyConfig>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(inject(state))
                .hoop(inject(api_key))
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("inventories")
                        .post(inventories::handlers::create::handler)
                        .push(Router::with_path("list").get(inventories::handlers::list::handler))
                        .push(
                            Router::with_path("paginated")
                                .get(inventories::handlers::paginated::handler),
                        )
                        .push(
                            Router::with_path("purchase")
                                .post(inventories::handlers::purchase::handler),
                        )
                        .push(
                            Router::with_path("product/{product_id}")
                                .get(inventories::handlers::details::handler),
                        )
                        .push(
                            Router::with_path("{id}")
                                .get(inventories::handlers::get::handler)
                                .put(inventories::handlers::update::handler)
                                .delete(inventories::handlers::delete::handler),
                        ),
                ),
        )
}

/// Router for the Products service.
#[must_use]
pub fn products_router(state: Arc<ProductsState>, api_key: Arc<ApiKeyConfig>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(inject(state))
                .hoop(inject(api_key))
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("products")
                        .post(products::handlers::create::handler)
                        .push(Router::with_path("list").get(products::handlers::list::handler))
                        .push(
                            Router::with_path("paginated")
                                .get(products::handlers::paginated::handler),
                        )
                        .push(
                            Router::with_path("{id}")
                                .get(products::handlers::get::handler)
                                .put(products::handlers::update::handler)
                                .delete(products::handlers::delete::handler),
                        ),
                ),
        )
}
