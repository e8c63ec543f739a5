use serde::Deserialize;

use crate::auth::password;
use crate::error::AppError;
use crate::models::User;
use crate::store::Store;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub enum AuthOutcome {
    SignedIn(User),
    Denied(&'static str),
}

/// Verify a credential form against the user store. A recognized credential
/// failure maps to a fixed user-facing string; store or hashing failures
/// propagate to the caller's error boundary.
pub async fn authenticate(store: &dyn Store, form: &LoginForm) -> Result<AuthOutcome, AppError> {
    let (Some(email), Some(pw)) = (form.email.as_deref(), form.password.as_deref()) else {
        return Ok(AuthOutcome::Denied(INVALID_CREDENTIALS));
    };

    let Some(user) = store.find_user_by_email(email).await? else {
        return Ok(AuthOutcome::Denied(INVALID_CREDENTIALS));
    };

    let valid = password::verify(pw, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Ok(AuthOutcome::Denied(INVALID_CREDENTIALS));
    }

    Ok(AuthOutcome::SignedIn(user))
}
