//! Route classification: a pure, total mapping from request path to handling
//! branch. First match wins, and the match order is part of the gate's
//! contract: an API path must never be subjected to setup-redirect logic.

/// Paths reachable without authentication (exact match).
pub const PUBLIC_ROUTES: &[&str] = &["/api/health", "/api/hello"];

/// Sign-in surface (exact match).
pub const AUTH_ROUTES: &[&str] = &["/auth", "/login", "/signup"];

/// One-time onboarding flow (prefix match).
pub const SETUP_PREFIX: &str = "/setup";

/// Main product surface; needs authentication and completed setup (prefix match).
pub const PROTECTED_PREFIX: &str = "/dashboard";

const API_PREFIX: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Api,
    Auth,
    Setup,
    Protected,
    Root,
    Public,
    Default,
}

/// Classifies a request path. Total: every path lands in exactly one class.
pub fn classify(path: &str) -> RouteClass {
    if path.starts_with(API_PREFIX) {
        RouteClass::Api
    } else if AUTH_ROUTES.contains(&path) {
        RouteClass::Auth
    } else if path.starts_with(SETUP_PREFIX) {
        RouteClass::Setup
    } else if path.starts_with(PROTECTED_PREFIX) {
        RouteClass::Protected
    } else if path == "/" {
        RouteClass::Root
    } else if PUBLIC_ROUTES.contains(&path) {
        RouteClass::Public
    } else {
        RouteClass::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_prefix_wins_over_public_table() {
        // /api/health is also in PUBLIC_ROUTES; the API branch must claim it.
        assert_eq!(classify("/api/health"), RouteClass::Api);
        assert_eq!(classify("/api/hello"), RouteClass::Api);
        assert_eq!(classify("/api/users/check"), RouteClass::Api);
    }

    #[test]
    fn test_auth_routes_match_exactly() {
        assert_eq!(classify("/auth"), RouteClass::Auth);
        assert_eq!(classify("/login"), RouteClass::Auth);
        assert_eq!(classify("/signup"), RouteClass::Auth);
        // Not an exact member, and no other branch claims it
        assert_eq!(classify("/auth/callback"), RouteClass::Default);
    }

    #[test]
    fn test_setup_and_protected_match_by_prefix() {
        assert_eq!(classify("/setup"), RouteClass::Setup);
        assert_eq!(classify("/setup/profile"), RouteClass::Setup);
        assert_eq!(classify("/dashboard"), RouteClass::Protected);
        assert_eq!(classify("/dashboard/resumes/42"), RouteClass::Protected);
    }

    #[test]
    fn test_root_is_exact() {
        assert_eq!(classify("/"), RouteClass::Root);
        assert_eq!(classify("/pricing"), RouteClass::Default);
    }

    #[test]
    fn test_unknown_paths_are_default() {
        assert_eq!(classify("/about"), RouteClass::Default);
        assert_eq!(classify("/blog/launch"), RouteClass::Default);
    }
}
