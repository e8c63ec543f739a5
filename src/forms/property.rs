use serde::Deserialize;

use crate::models::{ComplianceStatus, LettingStatus};

use super::{parse_cents, present, push_error, FieldErrors};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPropertyForm {
    pub title: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub monthly_rent: Option<String>,
    pub tenants: Option<String>,
    pub letting_status: Option<String>,
    pub compliance_status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PropertyInput {
    pub title: String,
    pub address: String,
    pub image_url: String,
    pub monthly_rent_cents: i64,
    pub tenants: i32,
    pub letting_status: LettingStatus,
    pub compliance_status: ComplianceStatus,
}

/// Validate a raw property form, collecting every field error.
pub fn validate_property(raw: &RawPropertyForm) -> Result<PropertyInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = required_text(&mut errors, "title", raw.title.as_deref(), "Please enter a title.");
    let address = required_text(
        &mut errors,
        "address",
        raw.address.as_deref(),
        "Please enter an address.",
    );
    let image_url = required_text(
        &mut errors,
        "image_url",
        raw.image_url.as_deref(),
        "Please enter an image URL.",
    );

    let monthly_rent_cents = match present(raw.monthly_rent.as_deref()).and_then(parse_cents) {
        Some(cents) if cents >= 0 => Some(cents),
        _ => {
            push_error(
                &mut errors,
                "monthly_rent",
                "Please enter a valid monthly rent.",
            );
            None
        }
    };

    let tenants = match present(raw.tenants.as_deref()).and_then(|s| s.parse::<i32>().ok()) {
        Some(n) if n >= 0 => Some(n),
        _ => {
            push_error(
                &mut errors,
                "tenants",
                "Please enter a whole number of tenants.",
            );
            None
        }
    };

    let letting_status = match present(raw.letting_status.as_deref()).and_then(|s| s.parse().ok()) {
        Some(status) => Some(status),
        None => {
            push_error(
                &mut errors,
                "letting_status",
                "Please select a letting status.",
            );
            None
        }
    };

    let compliance_status =
        match present(raw.compliance_status.as_deref()).and_then(|s| s.parse().ok()) {
            Some(status) => Some(status),
            None => {
                push_error(
                    &mut errors,
                    "compliance_status",
                    "Please select a compliance status.",
                );
                None
            }
        };

    match (
        title,
        address,
        image_url,
        monthly_rent_cents,
        tenants,
        letting_status,
        compliance_status,
    ) {
        (
            Some(title),
            Some(address),
            Some(image_url),
            Some(monthly_rent_cents),
            Some(tenants),
            Some(letting_status),
            Some(compliance_status),
        ) => Ok(PropertyInput {
            title,
            address,
            image_url,
            monthly_rent_cents,
            tenants,
            letting_status,
            compliance_status,
        }),
        _ => Err(errors),
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) -> Option<String> {
    match present(value) {
        Some(s) => Some(s.to_string()),
        None => {
            push_error(errors, field, message);
            None
        }
    }
}
