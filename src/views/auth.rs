use askama::Template;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
    email: String,
}

pub async fn login_page() -> impl IntoResponse {
    render_login(None, String::new())
}

pub(crate) fn render_login(error: Option<String>, email: String) -> Html<String> {
    let template = LoginTemplate { error, email };
    Html(template.render().unwrap_or_default())
}
