use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;

use crate::actions::invoices::INVOICES_PATH;
use crate::actions::{authenticate, AuthOutcome, LoginForm};
use crate::auth::jwt::{encode_token, Claims};
use crate::error::AppError;
use crate::state::SharedState;
use crate::views;

pub async fn login(
    State(state): State<SharedState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match authenticate(state.store.as_ref(), &form).await? {
        AuthOutcome::SignedIn(user) => {
            let claims = Claims::new(user.id, user.name);
            let token =
                encode_token(&claims, &state.config.session_secret).map_err(AppError::Internal)?;
            let jar = CookieJar::new().add(session_cookie(&token));
            Ok((jar, Redirect::to(INVOICES_PATH)).into_response())
        }
        AuthOutcome::Denied(message) => Ok(views::auth::render_login(
            Some(message.to_string()),
            form.email.unwrap_or_default(),
        )
        .into_response()),
    }
}

pub async fn logout() -> impl IntoResponse {
    let jar = CookieJar::new().add(
        Cookie::build(("session", ""))
            .path("/")
            .max_age(time::Duration::ZERO)
            .build(),
    );
    (jar, Redirect::to("/login"))
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(("session", token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(12))
        .build()
}
