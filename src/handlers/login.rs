// handlers/login.rs - POST /login/

use axum::{
    extract::{rejection::FormRejection, Form},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// POST /login/ - urlencoded username/password form; echoes the username.
///
/// The password is required but never checked.
pub async fn login(form: Result<Form<LoginForm>, FormRejection>) -> ApiResult<LoginResponse> {
    let Form(LoginForm { username, password: _ }) = form?;
    tracing::info!(username = %username, "login form received");

    Ok(Json(LoginResponse { username }))
}
