use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use uuid::Uuid;

use crate::actions::properties::{
    create_property, delete_property, update_property, PROPERTIES_PATH,
};
use crate::actions::ActionOutcome;
use crate::auth::AuthUser;
use crate::forms::RawPropertyForm;
use crate::state::SharedState;
use crate::views;

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Form(raw): Form<RawPropertyForm>,
) -> Response {
    let outcome = create_property(state.store.as_ref(), &state.cache, &raw).await;
    respond(
        outcome,
        auth,
        "Create Property",
        format!("{PROPERTIES_PATH}/create"),
        raw,
    )
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Form(raw): Form<RawPropertyForm>,
) -> Response {
    let outcome = update_property(state.store.as_ref(), &state.cache, id, &raw).await;
    respond(
        outcome,
        auth,
        "Edit Property",
        format!("{PROPERTIES_PATH}/{id}/edit"),
        raw,
    )
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Response {
    match delete_property(state.store.as_ref(), &state.cache, id).await {
        ActionOutcome::Rejected(form) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            form.message.unwrap_or_default(),
        )
            .into_response(),
        _ => StatusCode::OK.into_response(),
    }
}

fn respond(
    outcome: ActionOutcome,
    auth: AuthUser,
    heading: &'static str,
    form_action: String,
    raw: RawPropertyForm,
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
            let body = views::properties::render_form(auth.name, heading, form_action, &raw, &form);
            (status, body).into_response()
        }
    }
}
