//! API-key middleware.
//!
//! Checks the shared-secret header on every protected route. An empty
//! configured value disables enforcement, for local development; requests
//! still proceed as the api-key user so downstream code sees one principal
//! either way.

use std::sync::Arc;

use salvo::prelude::*;

use crate::{auth::Principal, config::ApiKeyConfig, extensions::*, jsonapi::ApiError};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let config = match depot.obtain::<Arc<ApiKeyConfig>>() {
        Ok(config) => Arc::clone(config),
        Err(_ignored) => {
            res.render(ApiError::internal());

            return;
        }
    };

    if !config.value.is_empty() {
        let presented = req
            .headers()
            .get(config.header.as_str())
            .and_then(|value| value.to_str().ok());

        if presented != Some(config.value.as_str()) {
            res.render(ApiError::unauthorized("Invalid API Key"));

            return;
        }
    }

    depot.insert_principal(Principal::api_key_user());

    ctrl.call_next(req, depot, res).await;
}
