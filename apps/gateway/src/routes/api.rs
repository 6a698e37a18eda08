//! Canned-JSON API stubs. The real product APIs live on the external user
//! service; these endpoints exist so the edge surface is complete.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/hello
pub async fn hello_get() -> Json<Value> {
    Json(json!({
        "message": "Hello from API!",
        "timestamp": Utc::now().to_rfc3339(),
        "method": "GET",
    }))
}

/// POST /api/hello. Echoes the payload back.
pub async fn hello_post(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Data received successfully",
            "data": body,
            "timestamp": Utc::now().to_rfc3339(),
            "method": "POST",
        })),
    )
}

#[derive(Debug, Deserialize)]
pub struct CompleteSetupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// POST /api/complete-setup
/// Marks onboarding as finished. The write itself belongs to the external
/// user service; this stub validates the payload and returns the canned
/// success shape the setup page expects.
pub async fn complete_setup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CompleteSetupRequest>,
) -> Result<Json<Value>, AppError> {
    let session = state.identity.resolve(&headers).await;
    if !session.is_authenticated() {
        return Err(AppError::Unauthorized);
    }

    let (name, phone, email) = match (&req.name, &req.phone, &req.email) {
        (Some(n), Some(p), Some(e)) if !n.is_empty() && !p.is_empty() && !e.is_empty() => (n, p, e),
        _ => {
            return Err(AppError::Validation(
                "Missing required fields: name, phone, email".to_string(),
            ))
        }
    };

    Ok(Json(json!({
        "success": true,
        "message": "Setup completed successfully",
        "data": {
            "email": email,
            "name": name,
            "phone": phone,
            "isSetupComplete": true,
        },
    })))
}
