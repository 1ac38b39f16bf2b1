//! API error types and status mapping.

use http::StatusCode;
use thiserror::Error;
use vitrine_commerce::CommerceError;

/// Errors surfaced by the catalog API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// The caller lacks administrator rights.
    #[error("administrator rights required")]
    Authorization,

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything the caller should not learn details about.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authorization => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message the caller sees. Internal failures are logged for
    /// operators and collapse to a generic message on the wire.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "internal error on catalog request");
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<CommerceError> for ApiError {
    fn from(e: CommerceError) -> Self {
        match e {
            CommerceError::Validation(msg) => ApiError::Validation(msg),
            CommerceError::Authorization => ApiError::Authorization,
            CommerceError::ProductNotFound(id) => ApiError::NotFound(id),
            CommerceError::Storage(detail) => ApiError::Internal(detail),
            CommerceError::Overflow => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("name is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Authorization.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::NotFound("p1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("lock poisoned".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError::Internal("store unreachable at 10.0.0.7".into());
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_commerce_error_conversion() {
        let err: ApiError = CommerceError::Authorization.into();
        assert!(matches!(err, ApiError::Authorization));

        let err: ApiError = CommerceError::ProductNotFound("p9".into()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = CommerceError::Storage("down".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
