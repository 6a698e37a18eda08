use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::identity::IdentityProvider;
use crate::status_client::StatusLookup;

/// Shared application state injected into route handlers and the gate layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable setup-status lookup. Production: `StatusClient` over HTTP.
    /// Tests swap in a fake to exercise the decision table without a network.
    pub status: Arc<dyn StatusLookup>,
    /// Pluggable identity resolution. Production: forwarded-header provider.
    pub identity: Arc<dyn IdentityProvider>,
    /// Process start time, reported as uptime by /api/health.
    pub started_at: Instant,
}
