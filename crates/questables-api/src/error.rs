//! Questables API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use questables_core::error::DomainError;
use questables_objectives::application::ObjectiveError;
use questables_objectives::domain::error::ObjectiveValidationError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Stable rejection reason, for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// The objective payload was rejected.
    Rejected(ObjectiveValidationError),
    /// A domain failure outside the payload itself.
    Domain(DomainError),
    /// The request exceeded a configured limit.
    TooLarge(String),
}

impl From<ObjectiveValidationError> for ApiError {
    fn from(err: ObjectiveValidationError) -> Self {
        Self::Rejected(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ObjectiveError> for ApiError {
    fn from(err: ObjectiveError) -> Self {
        match err {
            ObjectiveError::Rejected(err) => Self::Rejected(err),
            ObjectiveError::Domain(err) => Self::Domain(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Rejected(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation_error",
                    reason: Some(err.code()),
                    message: err.to_string(),
                },
            ),
            Self::Domain(err) => {
                let (status, error) = match &err {
                    DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                    DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                    DomainError::Infrastructure(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                    }
                };
                (
                    status,
                    ErrorBody {
                        error,
                        reason: None,
                        message: err.to_string(),
                    },
                )
            }
            Self::TooLarge(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "request_too_large",
                    reason: None,
                    message,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    async fn body_of(err: impl Into<ApiError>) -> serde_json::Value {
        let response = err.into().into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_rejection_maps_to_400() {
        assert_eq!(
            status_of(ObjectiveValidationError::MissingTitle),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(DomainError::NotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(ObjectiveError::Domain(DomainError::Infrastructure(
                "db down".into()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_too_large_maps_to_400() {
        assert_eq!(
            status_of(ApiError::TooLarge("too many".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_rejection_body_carries_reason_code() {
        let parent_id = Uuid::new_v4();

        let json = body_of(ObjectiveValidationError::CyclicHierarchy { parent_id }).await;

        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["reason"], "cyclic_hierarchy");
        assert_eq!(
            json["message"],
            format!("attaching to parent objective {parent_id} would create a cycle")
        );
    }

    #[tokio::test]
    async fn test_domain_body_omits_reason() {
        let json = body_of(DomainError::Validation("too deep".into())).await;

        assert_eq!(json["error"], "validation_error");
        assert!(json.get("reason").is_none());
    }
}
