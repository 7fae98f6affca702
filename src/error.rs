// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::catalog::CatalogError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 418 I'm a teapot (domain errors raised by handlers)
    ImATeapot(String),

    // 422 Unprocessable Entity (body, path, query or form does not match the model)
    UnprocessableEntity {
        message: String,
        field_errors: HashMap<String, String>,
    },

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::PayloadTooLarge(_) => 413,
            ApiError::ImATeapot(_) => 418,
            ApiError::UnprocessableEntity { .. } => 422,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::PayloadTooLarge(msg) => msg,
            ApiError::ImATeapot(msg) => msg,
            ApiError::UnprocessableEntity { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::UnprocessableEntity { message, field_errors } => {
                json!({
                    "error": true,
                    "message": message,
                    "code": "UNPROCESSABLE_ENTITY",
                    "field_errors": field_errors
                })
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::ImATeapot(_) => "IM_A_TEAPOT",
            ApiError::UnprocessableEntity { .. } => "UNPROCESSABLE_ENTITY",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn unprocessable_entity(
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            field_errors,
        }
    }

    /// 422 for a single offending field
    pub fn invalid_field(field: impl Into<String>, detail: impl Into<String>) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.into(), detail.into());
        ApiError::unprocessable_entity("Request validation failed", field_errors)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

/// Handler return type: bare JSON on success, `ApiError` otherwise
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Business errors raised by handlers, each with a fixed HTTP mapping
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Oops! {name} did something. There goes a rainbow...")]
    Unicorn { name: String },
}

/// Status and client message for a domain error
pub fn map_domain_error(err: &DomainError) -> (StatusCode, String) {
    match err {
        DomainError::Unicorn { .. } => (StatusCode::IM_A_TEAPOT, err.to_string()),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let (status, message) = map_domain_error(&err);
        tracing::info!(status = status.as_u16(), "domain error: {}", message);
        ApiError::ImATeapot(message)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => ApiError::not_found(format!("Product '{}' not found", id)),
            CatalogError::CorruptRecord { id, reason } => {
                // Don't expose catalog internals to clients
                tracing::error!("Catalog record '{}' does not match any product variant: {}", id, reason);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicorn_maps_to_teapot_with_name_in_message() {
        let err = DomainError::Unicorn { name: "yolo".to_string() };
        let (status, message) = map_domain_error(&err);
        assert_eq!(status.as_u16(), 418);
        assert!(message.contains("yolo"));
        assert_eq!(message, "Oops! yolo did something. There goes a rainbow...");
    }

    #[test]
    fn domain_error_converts_to_api_error() {
        let api: ApiError = DomainError::Unicorn { name: "yolo".to_string() }.into();
        assert_eq!(api.status_code(), 418);
        assert_eq!(api.error_code(), "IM_A_TEAPOT");
        assert_eq!(api.to_json()["message"], "Oops! yolo did something. There goes a rainbow...");
    }

    #[test]
    fn catalog_not_found_is_404() {
        let api: ApiError = CatalogError::NotFound("missing".to_string()).into();
        assert_eq!(api.status_code(), 404);
        assert!(api.message().contains("missing"));
    }

    #[test]
    fn corrupt_catalog_record_hides_details() {
        let api: ApiError = CatalogError::CorruptRecord {
            id: "item9".to_string(),
            reason: "missing field `size`".to_string(),
        }
        .into();
        assert_eq!(api.status_code(), 500);
        assert!(!api.message().contains("size"));
    }

    #[test]
    fn unprocessable_entity_includes_field_errors() {
        let api = ApiError::invalid_field("price", "value is not a valid number");
        let body = api.to_json();
        assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["field_errors"]["price"], "value is not a valid number");
    }
}
