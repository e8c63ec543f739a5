use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

/// The signed-in user, recovered from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub name: String,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get("session")
            .ok_or_else(|| AppError::Unauthorized("Missing session".to_string()))?;

        let claims = jwt::decode_token(cookie.value(), &state.config.session_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            name: claims.name,
        })
    }
}
