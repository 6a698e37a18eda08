use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Onboarding state of one user, as recorded by the User-Status Service.
/// Always fetched fresh per request; the gateway never caches it. A stale
/// "incomplete" would loop a finished user back to setup, and a stale
/// "complete" would let an unconfigured user skip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatus {
    pub exists: bool,
    pub is_setup_complete: bool,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub id: String,
}
