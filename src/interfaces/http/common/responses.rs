//! Common wire types and the domain-error → HTTP mapping.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error payload returned by every failing endpoint: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Acknowledgment returned by delete operations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAck {
    pub success: bool,
    pub message: String,
}

impl DeleteAck {
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Map a domain error onto its stable status code and `{error}` body.
///
/// `Internal` detail stays in the logs; clients only see a generic message.
pub fn error_response(error: &DomainError) -> (StatusCode, Json<ErrorBody>) {
    match error {
        DomainError::InvalidArgument(_) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody::new(error.to_string())))
        }
        DomainError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, Json(ErrorBody::new(error.to_string())))
        }
        DomainError::Conflict(_) => {
            (StatusCode::CONFLICT, Json(ErrorBody::new(error.to_string())))
        }
        DomainError::Internal(detail) => {
            tracing::error!(%detail, "request failed with internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_stable_status_codes() {
        let (status, _) = error_response(&DomainError::InvalidArgument("bad id".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(&DomainError::NotFound {
            entity: "Member",
            field: "id",
            value: "7".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(&DomainError::Conflict("Email already exists".into()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(&DomainError::Internal("Database error: x".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_detail_is_not_echoed_to_clients() {
        let (_, body) = error_response(&DomainError::Internal(
            "Database error: SQLITE_BUSY".into(),
        ));
        assert_eq!(body.error, "Internal server error");
    }
}
