use serde::{Deserialize, Serialize};

/// Request-scoped identity, as resolved by the fronting auth proxy.
/// Lives for one request; the gate never persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            email: Some(email.into()),
            display_name,
        }
    }

    /// A session is authenticated iff the proxy forwarded an identity email.
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }

    /// Identity pair sent to the User-Status Service, which keys by email and
    /// takes a username fallback when the provider gave no display name.
    pub fn lookup_identity(&self) -> (String, String) {
        (
            self.email.clone().unwrap_or_default(),
            self.display_name
                .clone()
                .unwrap_or_else(|| "user".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_is_not_authenticated() {
        assert!(!Session::anonymous().is_authenticated());
    }

    #[test]
    fn test_lookup_identity_falls_back_when_name_missing() {
        let session = Session::authenticated("ada@example.com", None);
        let (email, username) = session.lookup_identity();
        assert_eq!(email, "ada@example.com");
        assert_eq!(username, "user");
    }

    #[test]
    fn test_lookup_identity_uses_display_name() {
        let session = Session::authenticated("ada@example.com", Some("Ada".to_string()));
        let (_, username) = session.lookup_identity();
        assert_eq!(username, "Ada");
    }
}
