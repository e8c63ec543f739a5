use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::actions::properties::PROPERTIES_PATH;
use crate::actions::FormState;
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::forms::RawPropertyForm;
use crate::state::SharedState;

use super::{cents_to_input, money};

#[derive(Template)]
#[template(path = "properties/index.html")]
struct PropertiesTemplate {
    user_name: String,
    listing: String,
}

#[derive(Template)]
#[template(path = "properties/table.html")]
struct PropertyTableTemplate {
    properties: Vec<PropertyRow>,
}

struct PropertyRow {
    id: String,
    title: String,
    address: String,
    rent_display: String,
    tenants: i32,
    letting_status: String,
    compliance_status: String,
}

#[derive(Template)]
#[template(path = "properties/form.html")]
struct PropertyFormTemplate {
    user_name: String,
    heading: &'static str,
    form_action: String,
    title_value: String,
    address_value: String,
    image_url_value: String,
    monthly_rent_value: String,
    tenants_value: String,
    letting_status_value: String,
    compliance_status_value: String,
    message: Option<String>,
    title_errors: Vec<String>,
    address_errors: Vec<String>,
    image_url_errors: Vec<String>,
    monthly_rent_errors: Vec<String>,
    tenants_errors: Vec<String>,
    letting_status_errors: Vec<String>,
    compliance_status_errors: Vec<String>,
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let listing = match state.cache.get(PROPERTIES_PATH) {
        Some(table) => table,
        None => {
            let properties = state.store.list_properties().await?;
            let rows = properties
                .into_iter()
                .map(|p| PropertyRow {
                    id: p.id.to_string(),
                    title: p.title,
                    address: p.address,
                    rent_display: money(p.monthly_rent),
                    tenants: p.tenants,
                    letting_status: p.letting_status.to_string(),
                    compliance_status: p.compliance_status.to_string(),
                })
                .collect();
            let table = PropertyTableTemplate { properties: rows }
                .render()
                .unwrap_or_default();
            state.cache.put(PROPERTIES_PATH, table.clone());
            table
        }
    };

    let template = PropertiesTemplate {
        user_name: auth.name,
        listing,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn create_page(auth: AuthUser) -> impl IntoResponse {
    render_form(
        auth.name,
        "Create Property",
        format!("{PROPERTIES_PATH}/create"),
        &RawPropertyForm::default(),
        &FormState::default(),
    )
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let property = state
        .store
        .find_property(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

    let raw = RawPropertyForm {
        title: Some(property.title),
        address: Some(property.address),
        image_url: Some(property.image_url),
        monthly_rent: Some(cents_to_input(property.monthly_rent)),
        tenants: Some(property.tenants.to_string()),
        letting_status: Some(property.letting_status.to_string()),
        compliance_status: Some(property.compliance_status.to_string()),
    };

    Ok(render_form(
        auth.name,
        "Edit Property",
        format!("{PROPERTIES_PATH}/{id}/edit"),
        &raw,
        &FormState::default(),
    ))
}

pub(crate) fn render_form(
    user_name: String,
    heading: &'static str,
    form_action: String,
    raw: &RawPropertyForm,
    form: &FormState,
) -> Html<String> {
    let template = PropertyFormTemplate {
        user_name,
        heading,
        form_action,
        title_value: raw.title.clone().unwrap_or_default(),
        address_value: raw.address.clone().unwrap_or_default(),
        image_url_value: raw.image_url.clone().unwrap_or_default(),
        monthly_rent_value: raw.monthly_rent.clone().unwrap_or_default(),
        tenants_value: raw.tenants.clone().unwrap_or_default(),
        letting_status_value: raw.letting_status.clone().unwrap_or_default(),
        compliance_status_value: raw.compliance_status.clone().unwrap_or_default(),
        message: form.message.clone(),
        title_errors: form.errors_for("title").to_vec(),
        address_errors: form.errors_for("address").to_vec(),
        image_url_errors: form.errors_for("image_url").to_vec(),
        monthly_rent_errors: form.errors_for("monthly_rent").to_vec(),
        tenants_errors: form.errors_for("tenants").to_vec(),
        letting_status_errors: form.errors_for("letting_status").to_vec(),
        compliance_status_errors: form.errors_for("compliance_status").to_vec(),
    };
    Html(template.render().unwrap_or_default())
}
