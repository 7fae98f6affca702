// handlers/users.rs - POST /user/ and GET /user

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::middleware::ValidatedJson;
use crate::models::{UserIn, UserOut};
use crate::state::AppState;
use crate::users;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub name: String,
}

/// POST /user/ - accept a UserIn, return the saved user without any password
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user_in): ValidatedJson<UserIn>,
) -> ApiResult<UserOut> {
    Ok(Json(users::create_user(user_in, state.hasher.as_ref())))
}

/// GET /user?name= - canned user record
pub async fn read_user(query: Result<Query<UserQuery>, QueryRejection>) -> ApiResult<UserOut> {
    let Query(query) = query?;
    Ok(Json(users::get_user(&query.name)))
}
