#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::report::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every failure serializes as `{success: false, message, details?}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Credential rejected by the upstream API.
    #[error("Chave API inválida ou expirada")]
    InvalidKey { details: String },

    /// An agent call failed; `message` is the endpoint-level summary.
    #[error("{message}")]
    Llm {
        message: String,
        #[source]
        source: LlmError,
    },

    #[error("Erro ao acessar o armazenamento de relatórios")]
    Store(#[from] StoreError),

    #[error("Erro interno do servidor")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::InvalidKey { details } => (
                StatusCode::UNAUTHORIZED,
                "Chave API inválida ou expirada".to_string(),
                Some(details),
            ),
            AppError::Llm { message, source } => {
                tracing::error!("LLM error: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                    Some(source.to_string()),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Report store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao acessar o armazenamento de relatórios".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}
