use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Turn 401s on browser-facing dashboard routes into a redirect to the
/// login page.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        Redirect::to("/login").into_response()
    } else {
        response
    }
}
