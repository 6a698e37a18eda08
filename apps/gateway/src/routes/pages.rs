//! Placeholder page handlers. Rendering belongs to the Page Renderer; these
//! stand in for it so the gate has a full surface to route.

use axum::{extract::Query, response::Html};
use serde::Deserialize;

use crate::gate::callback::sanitize_callback;
use crate::gate::DASHBOARD_PAGE;

pub async fn marketing_page() -> Html<String> {
    Html(page("Vitae", "Build a resume that gets read."))
}

#[derive(Debug, Deserialize)]
pub struct AuthPageQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// GET /auth and /login. Keeps the (sanitized) callback so the login flow lands
/// back on the originally requested resource.
pub async fn auth_page(Query(query): Query<AuthPageQuery>) -> Html<String> {
    let target = query
        .callback_url
        .as_deref()
        .map(sanitize_callback)
        .unwrap_or_else(|| DASHBOARD_PAGE.to_string());
    Html(page(
        "Sign in",
        &format!("After signing in you will continue to {target}."),
    ))
}

pub async fn signup_page() -> Html<String> {
    Html(page("Create your account", "Start building your resume."))
}

pub async fn setup_page() -> Html<String> {
    Html(page(
        "Finish setting up",
        "A few profile details before your dashboard opens.",
    ))
}

pub async fn dashboard_page() -> Html<String> {
    Html(page("Dashboard", "Your resumes live here."))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><title>{title}</title></head>\
         <body><h1>{title}</h1><p>{body}</p></body></html>"
    )
}
