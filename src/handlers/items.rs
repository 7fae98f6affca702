// handlers/items.rs - GET/PUT /items/:item_id and PUT /items_data/:item_id

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::middleware::ValidatedJson;
use crate::models::Item;

#[derive(Debug, Deserialize)]
pub struct ReadItemQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemLookup {
    pub item_id: i64,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemUpdate {
    pub item_id: i64,
    pub item: Item,
}

/// GET /items/:item_id?q= - echo the numeric id and optional query string
pub async fn read_item(
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<ReadItemQuery>, QueryRejection>,
) -> ApiResult<ItemLookup> {
    let Path(item_id) = path?;
    let Query(query) = query?;

    Ok(Json(ItemLookup { item_id, q: query.q }))
}

/// PUT /items/:item_id - validate an Item body and echo it back with the id
///
/// Also mounted at `/items_data/:item_id`.
pub async fn update_item(
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> ApiResult<ItemUpdate> {
    let Path(item_id) = path?;
    tracing::debug!(item_id, name = %item.name, tags = item.tags.len(), "item updated");

    Ok(Json(ItemUpdate { item_id, item }))
}
