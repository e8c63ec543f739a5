use serde::Deserialize;
use uuid::Uuid;

use crate::models::InvoiceStatus;

use super::{parse_cents, present, push_error, FieldErrors};

/// Raw invoice form payload as submitted by the browser. Every field is
/// optional at this layer; the validator decides what "missing" means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// A validated, coerced invoice payload, ready for a single SQL statement.
#[derive(Debug, Clone)]
pub struct InvoiceInput {
    pub customer_id: Uuid,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Validate a raw invoice form, collecting every field error rather than
/// aborting on the first.
pub fn validate_invoice(raw: &RawInvoiceForm) -> Result<InvoiceInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let customer_id = match present(raw.customer_id.as_deref()).map(Uuid::parse_str) {
        Some(Ok(id)) => Some(id),
        _ => {
            push_error(&mut errors, "customer_id", "Please select a customer.");
            None
        }
    };

    let amount_cents = match present(raw.amount.as_deref()).and_then(parse_cents) {
        Some(cents) if cents > 0 => Some(cents),
        _ => {
            push_error(
                &mut errors,
                "amount",
                "Please enter an amount greater than $0.",
            );
            None
        }
    };

    let status = match present(raw.status.as_deref()).and_then(|s| s.parse().ok()) {
        Some(status) => Some(status),
        None => {
            push_error(&mut errors, "status", "Please select an invoice status.");
            None
        }
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(InvoiceInput {
            customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}
