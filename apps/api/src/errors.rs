#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type, one variant per failure kind in the
/// advisory contract. Each variant carries the user-presentable message
/// chosen at the classification site, so rate-limit and generic failures
/// read differently per operation.
///
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Blank or invalid caller input. No model call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential missing at client construction. Non-retryable without
    /// operator action.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider returned no text for a structured call. Retryable.
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Model output was not valid JSON or violated the response schema.
    /// Retryable: a prompt or provider fault, not a user-input fault.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Provider signaled throttling. Retryable after backoff, which is the
    /// caller's decision; nothing here retries.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Catch-all provider/transport failure for the structured calls.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Catch-all provider/transport failure for the coach call.
    #[error("Advice error: {0}")]
    Advice(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::EmptyResponse(msg) => {
                (StatusCode::BAD_GATEWAY, "EMPTY_RESPONSE", msg.clone())
            }
            AppError::Parse(msg) => {
                tracing::warn!("Model output parse failure: {msg}");
                (StatusCode::BAD_GATEWAY, "PARSE_ERROR", msg.clone())
            }
            AppError::RateLimited(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED", msg.clone())
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", msg.clone())
            }
            AppError::Advice(msg) => {
                tracing::error!("Advice error: {msg}");
                (StatusCode::BAD_GATEWAY, "ADVICE_ERROR", msg.clone())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_429() {
        let response = AppError::RateLimited("busy".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("goal cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_failures_map_to_502() {
        for err in [
            AppError::EmptyResponse("e".to_string()),
            AppError::Parse("p".to_string()),
            AppError::Generation("g".to_string()),
            AppError::Advice("a".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        }
    }
}
