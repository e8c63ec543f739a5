pub mod actions;
pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod revalidate;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::auth_redirect::redirect_unauthorized;
use crate::revalidate::ListingCache;
use crate::state::{AppState, SharedState};
use crate::store::Store;

pub fn build_app(store: Arc<dyn Store>, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState {
        store,
        cache: ListingCache::new(),
        config,
    });

    Router::new()
        .merge(routes::action_routes())
        .merge(views::view_routes())
        .layer(axum::middleware::from_fn(redirect_unauthorized))
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
