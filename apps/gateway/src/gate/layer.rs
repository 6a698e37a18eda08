//! Tower layer wiring the gate into the router. Runs before every handler:
//! static assets bypass the gate, everything else is classified and decided.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;
use uuid::Uuid;

use crate::gate::{classify, decide, GateDecision};
use crate::state::AppState;

/// Served straight from the asset pipeline; the gate tables never see these.
const STATIC_PREFIX: &str = "/static/";

/// File extensions the hosting matcher excludes from gating. Note `js` but
/// not `json`: API payload paths stay gated.
const STATIC_EXTENSIONS: &[&str] = &[
    "html",
    "htm",
    "css",
    "js",
    "jpg",
    "jpeg",
    "webp",
    "png",
    "gif",
    "svg",
    "ttf",
    "woff",
    "woff2",
    "ico",
    "csv",
    "doc",
    "docx",
    "xls",
    "xlsx",
    "zip",
    "webmanifest",
];

pub fn is_static_asset(path: &str) -> bool {
    if path.starts_with(STATIC_PREFIX) {
        return true;
    }
    match path.rsplit_once('.') {
        Some((_, ext)) => STATIC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// The per-request gate. `Continue` hands the request to the inner handler;
/// `RedirectTo` short-circuits with a 307 so the method and body survive the
/// hop through the login flow.
pub async fn gate_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if is_static_asset(&path) {
        return next.run(request).await;
    }

    let request_id = Uuid::new_v4();
    let query = request.uri().query().map(str::to_string);
    let session = state.identity.resolve(request.headers()).await;

    let class = classify(&path);
    let decision = decide(
        class,
        &path,
        query.as_deref(),
        &session,
        state.status.as_ref(),
    )
    .await;

    debug!(
        "[{request_id}] {path} -> {class:?} (authenticated={}): {decision:?}",
        session.is_authenticated()
    );

    match decision {
        GateDecision::Continue => next.run(request).await,
        GateDecision::RedirectTo(target) => Redirect::temporary(&target).into_response(),
    }
}
