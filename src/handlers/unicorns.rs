// handlers/unicorns.rs - GET /unicorns/:name

use axum::{
    extract::{rejection::PathRejection, Path},
    response::Json,
};
use serde::Serialize;

use crate::error::{ApiResult, DomainError};

#[derive(Debug, Serialize)]
pub struct Unicorn {
    pub unicorn_name: String,
}

/// GET /unicorns/:name - echo the name; "yolo" raises the unicorn domain error (418)
pub async fn read_unicorn(path: Result<Path<String>, PathRejection>) -> ApiResult<Unicorn> {
    let Path(name) = path?;
    if name == "yolo" {
        return Err(DomainError::Unicorn { name }.into());
    }

    Ok(Json(Unicorn { unicorn_name: name }))
}
