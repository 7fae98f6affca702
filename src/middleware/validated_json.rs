use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::ApiError;

/// JSON body extractor that deserializes and validates before the handler runs.
///
/// Failures are reported as 422 with one `field_errors` entry per offending
/// path, e.g. `price`, `items[1].name`, `image.url`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        let value: T = parse_body(&bytes)?;

        if let Err(errors) = value.validate() {
            let mut field_errors = HashMap::new();
            flatten_validation_errors("", &errors, &mut field_errors);
            tracing::debug!(?field_errors, "request body failed validation");
            return Err(ApiError::unprocessable_entity("Request validation failed", field_errors));
        }

        Ok(ValidatedJson(value))
    }
}

fn body_rejection(rejection: BytesRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large(rejection.body_text())
    } else {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Deserialize `bytes` into `T`, keeping the path of the first failing field
pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::invalid_field("body", "field required"));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let message = strip_position(&err.inner().to_string());
        match err.inner().classify() {
            Category::Syntax | Category::Eof | Category::Io => ApiError::invalid_field("body", message),
            Category::Data => {
                let path = err.path().to_string();
                ApiError::invalid_field(field_path(&path, &message), message)
            }
        }
    })?;
    de.end()
        .map_err(|e| ApiError::invalid_field("body", strip_position(&e.to_string())))?;

    Ok(value)
}

/// serde_json appends " at line N column M"; clients only need the reason
fn strip_position(message: &str) -> String {
    match message.rsplit_once(" at line ") {
        Some((reason, _)) => reason.to_string(),
        None => message.to_string(),
    }
}

/// Missing fields are reported against the parent path, so append the name
fn field_path(path: &str, message: &str) -> String {
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next());

    match (path, missing) {
        (".", Some(field)) => field.to_string(),
        (parent, Some(field)) => format!("{}.{}", parent, field),
        (".", None) => "body".to_string(),
        (parent, None) => parent.to_string(),
    }
}

fn flatten_validation_errors(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut HashMap<String, String>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    out.insert(path, describe(first));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_validation_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_validation_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("value failed the '{}' check", error.code),
    }
}
