pub mod auth;
pub mod invoices;
pub mod properties;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn action_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Invoices
        .route("/dashboard/invoices/create", post(invoices::create))
        .route("/dashboard/invoices/{id}/edit", post(invoices::update))
        .route("/dashboard/invoices/{id}/delete", post(invoices::delete))
        // Properties
        .route("/dashboard/properties/create", post(properties::create))
        .route("/dashboard/properties/{id}/edit", post(properties::update))
        .route("/dashboard/properties/{id}/delete", post(properties::delete))
}
