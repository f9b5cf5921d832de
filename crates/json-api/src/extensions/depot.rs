//! Depot helper extensions.

use std::any::Any;

use salvo::Depot;

use crate::{auth::Principal, jsonapi::ApiError};

const PRINCIPAL_KEY: &str = "stockline.principal";

/// Helpers for mapping depot extraction failures to HTTP errors and for
/// carrying the authenticated principal.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal(&self) -> Option<&Principal>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.insert(PRINCIPAL_KEY, principal);
    }

    fn principal(&self) -> Option<&Principal> {
        self.get::<Principal>(PRINCIPAL_KEY).ok()
    }
}
