use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::actions::invoices::INVOICES_PATH;
use crate::actions::FormState;
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::forms::RawInvoiceForm;
use crate::models::Customer;
use crate::state::SharedState;

use super::{cents_to_input, money};

#[derive(Template)]
#[template(path = "invoices/index.html")]
struct InvoicesTemplate {
    user_name: String,
    listing: String,
}

#[derive(Template)]
#[template(path = "invoices/table.html")]
struct InvoiceTableTemplate {
    invoices: Vec<InvoiceRow>,
}

struct InvoiceRow {
    id: String,
    customer_name: String,
    amount_display: String,
    status: String,
    date: String,
}

#[derive(Template)]
#[template(path = "invoices/form.html")]
struct InvoiceFormTemplate {
    user_name: String,
    heading: &'static str,
    form_action: String,
    customers: Vec<CustomerOption>,
    amount_value: String,
    status_value: String,
    message: Option<String>,
    customer_errors: Vec<String>,
    amount_errors: Vec<String>,
    status_errors: Vec<String>,
}

pub(crate) struct CustomerOption {
    id: String,
    name: String,
    selected: bool,
}

/// Cached listing page. Only the listing table is cached; the surrounding
/// chrome carries the current user's name and is rendered per request.
pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let listing = match state.cache.get(INVOICES_PATH) {
        Some(table) => table,
        None => {
            let invoices = state.store.list_invoices().await?;
            let rows = invoices
                .into_iter()
                .map(|i| InvoiceRow {
                    id: i.id.to_string(),
                    customer_name: i.customer_name,
                    amount_display: money(i.amount),
                    status: i.status.to_string(),
                    date: i.date.to_string(),
                })
                .collect();
            let table = InvoiceTableTemplate { invoices: rows }
                .render()
                .unwrap_or_default();
            state.cache.put(INVOICES_PATH, table.clone());
            table
        }
    };

    let template = InvoicesTemplate {
        user_name: auth.name,
        listing,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn create_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.store.list_customers().await?;
    Ok(render_form(
        auth.name,
        "Create Invoice",
        format!("{INVOICES_PATH}/create"),
        customer_options(&customers, None),
        &RawInvoiceForm::default(),
        &FormState::default(),
    ))
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .store
        .find_invoice(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    let customers = state.store.list_customers().await?;
    let raw = RawInvoiceForm {
        customer_id: Some(invoice.customer_id.to_string()),
        amount: Some(cents_to_input(invoice.amount)),
        status: Some(invoice.status.to_string()),
    };

    Ok(render_form(
        auth.name,
        "Edit Invoice",
        format!("{INVOICES_PATH}/{id}/edit"),
        customer_options(&customers, Some(invoice.customer_id)),
        &raw,
        &FormState::default(),
    ))
}

pub(crate) fn customer_options(
    customers: &[Customer],
    selected: Option<Uuid>,
) -> Vec<CustomerOption> {
    customers
        .iter()
        .map(|c| CustomerOption {
            id: c.id.to_string(),
            name: c.name.clone(),
            selected: selected == Some(c.id),
        })
        .collect()
}

pub(crate) fn render_form(
    user_name: String,
    heading: &'static str,
    form_action: String,
    customers: Vec<CustomerOption>,
    raw: &RawInvoiceForm,
    form: &FormState,
) -> Html<String> {
    let template = InvoiceFormTemplate {
        user_name,
        heading,
        form_action,
        customers,
        amount_value: raw.amount.clone().unwrap_or_default(),
        status_value: raw.status.clone().unwrap_or_default(),
        message: form.message.clone(),
        customer_errors: form.errors_for("customer_id").to_vec(),
        amount_errors: form.errors_for("amount").to_vec(),
        status_errors: form.errors_for("status").to_vec(),
    };
    Html(template.render().unwrap_or_default())
}
