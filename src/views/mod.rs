pub mod auth;
pub mod invoices;
pub mod properties;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(auth::login_page))
        .route("/login", get(auth::login_page))
        .route("/dashboard/invoices", get(invoices::index))
        .route("/dashboard/invoices/create", get(invoices::create_page))
        .route("/dashboard/invoices/{id}/edit", get(invoices::edit_page))
        .route("/dashboard/properties", get(properties::index))
        .route("/dashboard/properties/create", get(properties::create_page))
        .route("/dashboard/properties/{id}/edit", get(properties::edit_page))
}

/// Format integer cents for display.
pub(crate) fn money(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Format integer cents as a plain decimal for form repopulation.
pub(crate) fn cents_to_input(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
