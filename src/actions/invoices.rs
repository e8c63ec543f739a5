use chrono::Utc;
use uuid::Uuid;

use crate::forms::{validate_invoice, RawInvoiceForm};
use crate::revalidate::ListingCache;
use crate::store::Store;

use super::{ActionOutcome, FormState};

pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Validate, insert one row, invalidate the listing, navigate to it.
/// The invoice date is computed here, never accepted from input.
pub async fn create_invoice(
    store: &dyn Store,
    cache: &ListingCache,
    raw: &RawInvoiceForm,
) -> ActionOutcome {
    let input = match validate_invoice(raw) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Rejected(FormState::invalid(
                errors,
                "Missing Fields. Failed to Create Invoice.",
            ));
        }
    };

    let date = Utc::now().date_naive();
    if let Err(err) = store.insert_invoice(&input, date).await {
        tracing::error!("invoice insert failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Create Invoice.",
        ));
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Full-record replace. An unknown id affects zero rows and still counts as
/// success.
pub async fn update_invoice(
    store: &dyn Store,
    cache: &ListingCache,
    id: Uuid,
    raw: &RawInvoiceForm,
) -> ActionOutcome {
    let input = match validate_invoice(raw) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Rejected(FormState::invalid(
                errors,
                "Missing Fields. Failed to Update Invoice.",
            ));
        }
    };

    if let Err(err) = store.update_invoice(id, &input).await {
        tracing::error!("invoice update failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Update Invoice.",
        ));
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Delete invalidates the listing but never navigates away from it.
pub async fn delete_invoice(store: &dyn Store, cache: &ListingCache, id: Uuid) -> ActionOutcome {
    if let Err(err) = store.delete_invoice(id).await {
        tracing::error!("invoice delete failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Delete Invoice.",
        ));
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Done
}
