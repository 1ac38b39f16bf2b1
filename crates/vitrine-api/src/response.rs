//! JSON response builders.

use crate::error::ApiError;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Response, StatusCode};
use serde::Serialize;

/// Build a JSON response with the given status.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<Vec<u8>> {
    match serde_json::to_vec(body) {
        Ok(bytes) => raw(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, "response serialization failed");
            raw(
                StatusCode::INTERNAL_SERVER_ERROR,
                b"{\"error\":\"internal server error\"}".to_vec(),
            )
        }
    }
}

/// Build the response for an API error.
pub fn error(err: ApiError) -> Response<Vec<u8>> {
    let status = err.status();
    json(status, &serde_json::json!({ "error": err.public_message() }))
}

fn raw(status: StatusCode, bytes: Vec<u8>) -> Response<Vec<u8>> {
    let mut response = Response::new(bytes);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response() {
        let response = json(StatusCode::OK, &serde_json::json!({ "ok": true }));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.body(), b"{\"ok\":true}");
    }

    #[test]
    fn test_error_response_carries_status_and_message() {
        let response = error(ApiError::NotFound("p1".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], "not found: p1");
    }
}
