// handlers/products.rs - GET /productos/:item_id

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use crate::catalog::resolve_product_variant;
use crate::error::ApiResult;
use crate::models::Product;
use crate::state::AppState;

/// GET /productos/:item_id - resolve a catalog entry into a car or a plane
///
/// Unknown ids answer 404.
pub async fn read_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Product> {
    let Path(item_id) = path?;
    let product = resolve_product_variant(state.catalog.as_ref(), &item_id)?;
    tracing::debug!(item_id = %item_id, kind = product.kind(), "product resolved");

    Ok(Json(product))
}
