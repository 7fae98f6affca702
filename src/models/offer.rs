use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{lax_float, Item};

/// Bundle of items sold together. An empty `items` list is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "lax_float")]
    pub price: f64,
    #[validate(nested)]
    pub items: Vec<Item>,
}
