//! Identity seam. The gateway never authenticates users itself: a fronting
//! auth proxy owns the login flow and forwards the result per request.
//!
//! Carried in `AppState` as `Arc<dyn IdentityProvider>` so the gate's decision
//! logic can be tested with a fixed-session fake.

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::models::session::Session;

/// Header carrying the stable identifier of the signed-in user.
pub const FORWARDED_EMAIL_HEADER: &str = "x-forwarded-email";
/// Header carrying the display name, when the upstream provider supplied one.
pub const FORWARDED_USER_HEADER: &str = "x-forwarded-user";

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Session;
}

/// Reads the identity headers set by the auth proxy. An absent or empty email
/// header means the request is anonymous.
pub struct ForwardedHeaderIdentity;

#[async_trait]
impl IdentityProvider for ForwardedHeaderIdentity {
    async fn resolve(&self, headers: &HeaderMap) -> Session {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        match header_str(FORWARDED_EMAIL_HEADER) {
            Some(email) => Session::authenticated(email, header_str(FORWARDED_USER_HEADER)),
            None => Session::anonymous(),
        }
    }
}
