#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::flows::Capability;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Orchestration Actions never let one of these cross the wire directly —
/// they convert to an [`ActionResult`] envelope at the boundary. The
/// `IntoResponse` impl covers the plain read endpoints (catalog, profile).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{capability} generation failed: {message}")]
    Generation {
        capability: Capability,
        message: String,
    },

    #[error("{capability} generation timed out after {attempts} poll attempts")]
    GenerationTimeout {
        capability: Capability,
        attempts: u32,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a model-boundary failure with the capability that triggered it.
    pub fn generation(capability: Capability, err: impl std::fmt::Display) -> Self {
        AppError::Generation {
            capability,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation {
                capability,
                message,
            } => {
                tracing::error!("Generation error ({capability}): {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::GenerationTimeout {
                capability,
                attempts,
            } => {
                tracing::error!("Generation timed out ({capability}) after {attempts} attempts");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "GENERATION_TIMEOUT",
                    "AI generation timed out".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration Action envelope
// ────────────────────────────────────────────────────────────────────────────

/// The uniform result shape every Orchestration Action returns:
/// `{"success": true, ...payload}` or `{"success": false, "error": "..."}`.
///
/// Nothing else crosses the action boundary — action handlers return
/// `Json<ActionResult<T>>`, never an error response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionResult<T: Serialize> {
    Ok {
        success: bool,
        #[serde(flatten)]
        data: T,
    },
    Err {
        success: bool,
        error: String,
    },
}

impl<T: Serialize> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        ActionResult::Ok {
            success: true,
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ActionResult::Err {
            success: false,
            error: message.into(),
        }
    }

    /// Maps a flow outcome to the envelope. Validation messages are
    /// user-actionable and pass through; every other failure is logged
    /// server-side and replaced by the caller-supplied generic message.
    pub fn from_result(result: Result<T, AppError>, generic_error: &str) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(AppError::Validation(message)) => Self::error(message),
            Err(err) => {
                tracing::error!("Action failed: {err}");
                Self::error(generic_error)
            }
        }
    }
}
