//! HTTP error mapping.
//!
//! Every operation failure is converted to the uniform `{ "error": message }`
//! body with a status matching its class. Verification mismatch never passes
//! through here — it is a 200 with `success: false`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use passport_core::error::CoreError;

/// Wrapper turning `CoreError` into an actix response.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Precondition(_) | CoreError::NetworkMismatch { .. } => StatusCode::CONFLICT,
            CoreError::Upstream(_) | CoreError::Transaction(_) => StatusCode::BAD_GATEWAY,
            CoreError::Configuration(_) | CoreError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.is_expected() {
            tracing::warn!(error = %self.0, "request failed");
        } else {
            tracing::error!(error = %self.0, "request failed");
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.0.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_core::error::RiotError;

    #[test]
    fn validation_is_bad_request() {
        let err = ApiError(CoreError::Validation("missing".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_404() {
        let err = ApiError(CoreError::NotFound("row".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_is_bad_gateway() {
        let err = ApiError(CoreError::Upstream(RiotError::ApiError {
            status: 500,
            body: String::new(),
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn precondition_is_conflict() {
        let err = ApiError(CoreError::Precondition("no wallet".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn error_body_is_uniform() {
        let err = ApiError(CoreError::Validation("userId is required".to_string()));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
