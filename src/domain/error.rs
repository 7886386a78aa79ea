//! Domain errors

use thiserror::Error;

/// Domain-level error taxonomy.
///
/// Every failure a request can surface maps onto one of these four kinds,
/// which in turn map onto stable HTTP status codes (400/404/409/500).
/// Pagination-parameter problems are absorbed by defaulting and never
/// appear here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input that reached a typed boundary (e.g. a non-numeric
    /// path identifier).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{entity} with {field}={value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Uniqueness violation, e.g. an email that is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Any other storage or runtime failure. The message may carry engine
    /// detail and must not be echoed to clients verbatim.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
