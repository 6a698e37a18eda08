pub mod api;
pub mod health;
pub mod pages;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::gate::layer::gate_middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages (placeholder renderer surface)
        .route("/", get(pages::marketing_page))
        .route("/auth", get(pages::auth_page))
        .route("/login", get(pages::auth_page))
        .route("/signup", get(pages::signup_page))
        .route("/setup", get(pages::setup_page))
        .route("/dashboard", get(pages::dashboard_page))
        .route("/dashboard/*section", get(pages::dashboard_page))
        // API stubs
        .route("/api/health", get(health::health_handler))
        .route("/api/hello", get(api::hello_get).post(api::hello_post))
        .route("/api/complete-setup", post(api::complete_setup))
        // Every route above passes through the gate first
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate_middleware,
        ))
        .with_state(state)
}
