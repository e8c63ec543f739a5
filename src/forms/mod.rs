pub mod invoice;
pub mod property;

pub use invoice::{validate_invoice, InvoiceInput, RawInvoiceForm};
pub use property::{validate_property, PropertyInput, RawPropertyForm};

use std::collections::BTreeMap;

/// Field name → human-readable messages, collected across the whole form.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

fn push_error(errors: &mut FieldErrors, field: &'static str, message: impl Into<String>) {
    errors.entry(field).or_default().push(message.into());
}

/// Empty or whitespace-only submissions (an unselected `<select>` posts "")
/// count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a monetary form value into integer cents.
fn parse_cents(raw: &str) -> Option<i64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (v * 100.0).round() as i64)
}
