use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::selector::QuoteSelector;
use super::types::QuoteResponse;
use crate::store::ListStore;

pub const ENDPOINT_RANDOM_QUOTE: &str = "/quote/random";
pub const ENDPOINT_HEALTHZ: &str = "/healthz";

/// Builds the HTTP surface. Paths without a route answer 200 with an empty body.
pub fn router(store: Arc<dyn ListStore>, selector: Arc<QuoteSelector>) -> Router {
    Router::new()
        .route(ENDPOINT_RANDOM_QUOTE, get(handle_random_quote))
        .route(ENDPOINT_HEALTHZ, get(handle_healthz))
        .fallback(handle_fallback)
        .layer(Extension(store))
        .layer(Extension(selector))
}

pub async fn handle_random_quote(Extension(selector): Extension<Arc<QuoteSelector>>) -> Response {
    match selector.pick_random().await {
        Ok(quote) => {
            tracing::info!("Handled a quote request, returned: '{}'", quote);
            (StatusCode::OK, Json(QuoteResponse { quote })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to retrieve a quote: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn handle_healthz(
    Extension(store): Extension<Arc<dyn ListStore>>,
) -> (StatusCode, String) {
    match store.ping().await {
        Ok(pong) => (StatusCode::OK, pong),
        Err(e) => {
            tracing::error!("Health check failing: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn handle_fallback() {}
