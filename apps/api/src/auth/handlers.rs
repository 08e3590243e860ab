//! Axum route handlers for API-key validation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Keys shorter than this are rejected before any upstream call.
const MIN_KEY_LENGTH: usize = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateKeyRequest {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateKeyResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/auth/validate-key
///
/// Format check first, then one probe of the list-models endpoint. Success of
/// that probe is the sole validity signal.
pub async fn handle_validate_key(
    State(state): State<AppState>,
    Json(request): Json<ValidateKeyRequest>,
) -> Result<Json<ValidateKeyResponse>, AppError> {
    let api_key = check_key_format(request.api_key.as_deref())?;

    state
        .llm
        .list_models(api_key)
        .await
        .map_err(|e| AppError::InvalidKey {
            details: e.to_string(),
        })?;

    info!("API key validated against upstream");

    Ok(Json(ValidateKeyResponse {
        success: true,
        message: "Chave API validada com sucesso".to_string(),
    }))
}

/// Rejects missing or short keys with a 400 before any external call.
fn check_key_format(api_key: Option<&str>) -> Result<&str, AppError> {
    match api_key {
        Some(key) if key.len() >= MIN_KEY_LENGTH => Ok(key),
        _ => Err(AppError::Validation("Chave API inválida".to_string())),
    }
}
