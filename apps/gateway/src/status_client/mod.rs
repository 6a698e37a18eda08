/// User-Status Client: the single point of entry for all User-Status Service
/// calls in the gateway.
///
/// ARCHITECTURAL RULE: No other module may call the User-Status Service
/// directly. The gate consumes this module through the `StatusLookup` trait so
/// its decision table can be tested with a fake implementation.
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::status::UserStatus;

const CHECK_PATH: &str = "/api/users/check";
/// One short attempt per request; the routing decision waits on it. No
/// retries: a failed lookup degrades this request and the next request
/// fetches fresh.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("User-Status Service base URL is not configured")]
    ConfigurationMissing,

    #[error("User-Status Service unreachable: {0}")]
    ServiceUnreachable(#[from] reqwest::Error),

    #[error("User-Status Service returned status {status}")]
    ServiceError { status: u16 },

    #[error("Malformed user-status response: {0}")]
    MalformedResponse(String),
}

/// Wire shape of `GET /api/users/check`.
#[derive(Debug, Deserialize)]
pub struct UserCheckResponse {
    pub success: bool,
    pub exists: bool,
    pub message: String,
    /// Absent when the service has nothing to report; the gate treats that as
    /// a lookup failure, never as "setup incomplete".
    pub data: Option<UserCheckData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCheckData {
    pub username: String,
    pub email: String,
    pub is_setup_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub id: String,
}

impl UserCheckResponse {
    /// Lifts the wire shape into the domain model. A body without the `data`
    /// object (and with it, `isSetupComplete`) is malformed.
    pub fn into_status(self) -> Result<UserStatus, LookupError> {
        let data = self
            .data
            .ok_or_else(|| LookupError::MalformedResponse("missing data object".to_string()))?;

        Ok(UserStatus {
            exists: self.exists,
            is_setup_complete: data.is_setup_complete,
            username: data.username,
            email: data.email,
            created_at: data.created_at,
            updated_at: data.updated_at,
            id: data.id,
        })
    }
}

/// The status lookup seam. Carried in `AppState` as `Arc<dyn StatusLookup>`;
/// implement this to swap the backend without touching gate code.
#[async_trait]
pub trait StatusLookup: Send + Sync {
    async fn lookup(&self, email: &str, username: &str) -> Result<UserStatus, LookupError>;
}

/// HTTP client for the User-Status Service.
///
/// Every call is a fresh fetch. Setup-completion state must never be served
/// stale, so nothing is cached and `Cache-Control: no-store` is sent.
#[derive(Clone)]
pub struct StatusClient {
    client: Client,
    base_url: Option<String>,
}

impl StatusClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(LOOKUP_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl StatusLookup for StatusClient {
    async fn lookup(&self, email: &str, username: &str) -> Result<UserStatus, LookupError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(LookupError::ConfigurationMissing)?;

        let url = format!("{}{}", base.trim_end_matches('/'), CHECK_PATH);
        let started = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(&[("email", email), ("username", username)])
            .header("content-type", "application/json")
            .header("cache-control", "no-store")
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    "User-status lookup could not reach {url} after {}ms: {e}",
                    started.elapsed().as_millis()
                );
                return Err(LookupError::ServiceUnreachable(e));
            }
        };

        let status = response.status();
        debug!(
            "User-status lookup {url} -> {status} in {}ms",
            started.elapsed().as_millis()
        );

        if !status.is_success() {
            warn!("User-Status Service returned {status} for {url}");
            return Err(LookupError::ServiceError {
                status: status.as_u16(),
            });
        }

        let body: UserCheckResponse = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        debug!(
            "User check: success={} exists={} message={:?}",
            body.success, body.exists, body.message
        );

        body.into_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body(is_setup_complete: bool) -> String {
        format!(
            r#"{{
                "success": true,
                "exists": true,
                "message": "User found",
                "data": {{
                    "username": "ada",
                    "email": "ada@example.com",
                    "isSetupComplete": {is_setup_complete},
                    "createdAt": "2025-01-01T00:00:00Z",
                    "updatedAt": "2025-01-02T00:00:00Z",
                    "id": "u-1"
                }}
            }}"#
        )
    }

    #[test]
    fn test_full_body_parses_into_status() {
        let response: UserCheckResponse = serde_json::from_str(&full_body(true)).unwrap();
        let status = response.into_status().unwrap();
        assert!(status.is_setup_complete);
        assert_eq!(status.username, "ada");
        assert_eq!(status.email, "ada@example.com");
        assert_eq!(status.id, "u-1");
    }

    #[test]
    fn test_missing_data_object_is_malformed() {
        let body = r#"{"success": false, "exists": false, "message": "no such user"}"#;
        let response: UserCheckResponse = serde_json::from_str(body).unwrap();
        let err = response.into_status().unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_setup_flag_fails_to_parse() {
        // `isSetupComplete` absent inside data must not default to false.
        let body = r#"{
            "success": true,
            "exists": true,
            "message": "User found",
            "data": {
                "username": "ada",
                "email": "ada@example.com",
                "createdAt": "2025-01-01T00:00:00Z",
                "updatedAt": "2025-01-02T00:00:00Z",
                "id": "u-1"
            }
        }"#;
        assert!(serde_json::from_str::<UserCheckResponse>(body).is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_base_url_is_configuration_missing() {
        let client = StatusClient::new(None);
        let err = client.lookup("ada@example.com", "Ada").await.unwrap_err();
        assert!(matches!(err, LookupError::ConfigurationMissing));
    }
}
