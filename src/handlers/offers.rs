// handlers/offers.rs - POST /offers/

use axum::response::Json;

use crate::error::ApiResult;
use crate::middleware::ValidatedJson;
use crate::models::Offer;

/// POST /offers/ - validate an Offer (and every nested Item) and echo it
pub async fn create_offer(ValidatedJson(offer): ValidatedJson<Offer>) -> ApiResult<Offer> {
    tracing::debug!(name = %offer.name, items = offer.items.len(), "offer received");
    Ok(Json(offer))
}
