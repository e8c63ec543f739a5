use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use uuid::Uuid;

use crate::actions::invoices::{
    create_invoice, delete_invoice, update_invoice, INVOICES_PATH,
};
use crate::actions::ActionOutcome;
use crate::auth::AuthUser;
use crate::forms::RawInvoiceForm;
use crate::state::SharedState;
use crate::views;

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Form(raw): Form<RawInvoiceForm>,
) -> Response {
    let outcome = create_invoice(state.store.as_ref(), &state.cache, &raw).await;
    respond(
        outcome,
        auth,
        &state,
        "Create Invoice",
        format!("{INVOICES_PATH}/create"),
        raw,
    )
    .await
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Form(raw): Form<RawInvoiceForm>,
) -> Response {
    let outcome = update_invoice(state.store.as_ref(), &state.cache, id, &raw).await;
    respond(
        outcome,
        auth,
        &state,
        "Edit Invoice",
        format!("{INVOICES_PATH}/{id}/edit"),
        raw,
    )
    .await
}

/// Delete answers in place: 200 on success so the listing can refresh
/// itself, no redirect.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Response {
    match delete_invoice(state.store.as_ref(), &state.cache, id).await {
        ActionOutcome::Rejected(form) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            form.message.unwrap_or_default(),
        )
            .into_response(),
        _ => StatusCode::OK.into_response(),
    }
}

async fn respond(
    outcome: ActionOutcome,
    auth: AuthUser,
    state: &SharedState,
    heading: &'static str,
    form_action: String,
    raw: RawInvoiceForm,
) -> Response {
    match outcome {
        ActionOutcome::Redirect(path) => Redirect::to(path).into_response(),
        ActionOutcome::Done => StatusCode::OK.into_response(),
        ActionOutcome::Rejected(form) => {
            let status = if form.is_validation_failure() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            // Repopulate the dropdown so the user can correct and resubmit.
            // If the store is down we still show the form, just without
            // options.
            let customers = state.store.list_customers().await.unwrap_or_default();
            let selected = raw
                .customer_id
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok());
            let options = views::invoices::customer_options(&customers, selected);
            let body =
                views::invoices::render_form(auth.name, heading, form_action, options, &raw, &form);
            (status, body).into_response()
        }
    }
}
