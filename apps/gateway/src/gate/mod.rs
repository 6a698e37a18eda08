//! The request gate: decides, per request, whether a visitor may see a page.
//!
//! `classify` (pure, synchronous) picks the handling branch; `decide` consults
//! the session and, when the branch requires it, one fresh setup-status
//! lookup. Every path through the table yields a decision: lookup failures
//! never escape, they degrade per the failing route class's own rule.

pub mod callback;
pub mod classify;
pub mod layer;

use tracing::{debug, warn};

use crate::models::session::Session;
use crate::status_client::StatusLookup;

pub use classify::{classify, RouteClass};

/// Where the gate sends people.
pub const AUTH_PAGE: &str = "/auth";
pub const SETUP_PAGE: &str = "/setup";
pub const DASHBOARD_PAGE: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    RedirectTo(String),
}

/// Decides one request. `query` is the raw query string (without the leading
/// `?`), used only to build the post-login callback for protected routes.
pub async fn decide(
    class: RouteClass,
    path: &str,
    query: Option<&str>,
    session: &Session,
    status: &dyn StatusLookup,
) -> GateDecision {
    match class {
        // API endpoints self-police; the gate never blocks them.
        RouteClass::Api => GateDecision::Continue,

        RouteClass::Auth => {
            if !session.is_authenticated() {
                // Let the visitor see the login page.
                return GateDecision::Continue;
            }
            match lookup_setup_complete(session, status).await {
                // Fail toward the product, not toward an onboarding loop.
                None => GateDecision::RedirectTo(DASHBOARD_PAGE.to_string()),
                Some(true) => GateDecision::RedirectTo(DASHBOARD_PAGE.to_string()),
                Some(false) => GateDecision::RedirectTo(SETUP_PAGE.to_string()),
            }
        }

        RouteClass::Setup => {
            if !session.is_authenticated() {
                return GateDecision::RedirectTo(AUTH_PAGE.to_string());
            }
            match lookup_setup_complete(session, status).await {
                Some(true) => GateDecision::RedirectTo(DASHBOARD_PAGE.to_string()),
                // On failure we cannot confirm setup is unnecessary, so it
                // proceeds.
                Some(false) | None => GateDecision::Continue,
            }
        }

        RouteClass::Protected => {
            if !session.is_authenticated() {
                return GateDecision::RedirectTo(auth_with_callback(path, query));
            }
            match lookup_setup_complete(session, status).await {
                Some(false) => GateDecision::RedirectTo(SETUP_PAGE.to_string()),
                // Fail open: a transient outage must not lock users out.
                Some(true) | None => GateDecision::Continue,
            }
        }

        RouteClass::Root => {
            if !session.is_authenticated() {
                // Anonymous visitors get the marketing page.
                return GateDecision::Continue;
            }
            match lookup_setup_complete(session, status).await {
                None => GateDecision::RedirectTo(DASHBOARD_PAGE.to_string()),
                Some(true) => GateDecision::RedirectTo(DASHBOARD_PAGE.to_string()),
                Some(false) => GateDecision::RedirectTo(SETUP_PAGE.to_string()),
            }
        }

        RouteClass::Public | RouteClass::Default => GateDecision::Continue,
    }
}

/// One fresh lookup per decision. `None` collapses every lookup failure mode
/// into the single outcome the decision table consumes; the variants stay
/// distinguishable in the logs.
async fn lookup_setup_complete(session: &Session, status: &dyn StatusLookup) -> Option<bool> {
    let (email, username) = session.lookup_identity();
    match status.lookup(&email, &username).await {
        Ok(user) => {
            debug!(
                "Setup status for {email}: complete={}",
                user.is_setup_complete
            );
            Some(user.is_setup_complete)
        }
        Err(e) => {
            warn!("Setup-status lookup failed for {email}: {e}");
            None
        }
    }
}

/// Builds `/auth?callbackUrl=<path+query>` with the target percent-encoded so
/// it round-trips through the login flow and lands back on the originally
/// requested resource.
fn auth_with_callback(path: &str, query: Option<&str>) -> String {
    let mut target = path.to_string();
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(q);
    }
    format!("{AUTH_PAGE}?callbackUrl={}", urlencoding::encode(&target))
}
