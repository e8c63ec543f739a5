use uuid::Uuid;

use crate::forms::{validate_property, RawPropertyForm};
use crate::revalidate::ListingCache;
use crate::store::Store;

use super::{ActionOutcome, FormState};

pub const PROPERTIES_PATH: &str = "/dashboard/properties";

pub async fn create_property(
    store: &dyn Store,
    cache: &ListingCache,
    raw: &RawPropertyForm,
) -> ActionOutcome {
    let input = match validate_property(raw) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Rejected(FormState::invalid(
                errors,
                "Missing Fields. Failed to Create Property.",
            ));
        }
    };

    if let Err(err) = store.insert_property(&input).await {
        tracing::error!("property insert failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Create Property.",
        ));
    }

    cache.invalidate(PROPERTIES_PATH);
    ActionOutcome::Redirect(PROPERTIES_PATH)
}

pub async fn update_property(
    store: &dyn Store,
    cache: &ListingCache,
    id: Uuid,
    raw: &RawPropertyForm,
) -> ActionOutcome {
    let input = match validate_property(raw) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Rejected(FormState::invalid(
                errors,
                "Missing Fields. Failed to Update Property.",
            ));
        }
    };

    if let Err(err) = store.update_property(id, &input).await {
        tracing::error!("property update failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Update Property.",
        ));
    }

    cache.invalidate(PROPERTIES_PATH);
    ActionOutcome::Redirect(PROPERTIES_PATH)
}

pub async fn delete_property(store: &dyn Store, cache: &ListingCache, id: Uuid) -> ActionOutcome {
    if let Err(err) = store.delete_property(id).await {
        tracing::error!("property delete failed: {err}");
        return ActionOutcome::Rejected(FormState::failed(
            "Database Error: Failed to Delete Property.",
        ));
    }

    cache.invalidate(PROPERTIES_PATH);
    ActionOutcome::Done
}
