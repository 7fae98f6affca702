//! Read-only product lookup used by `GET /productos/:item_id`
//!
//! Records are stored as raw JSON and resolved into a [`Product`] on each
//! lookup, so the `type` discriminator decides which variant's fields are
//! required.

use serde_json::{json, Value};
use std::collections::HashMap;

use crate::models::Product;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product record '{id}' is invalid: {reason}")]
    CorruptRecord { id: String, reason: String },
}

/// Source of raw product records, shared read-only across requests
pub trait ProductCatalog: Send + Sync {
    fn lookup(&self, item_id: &str) -> Option<Value>;
}

/// Fixed in-memory catalog, never written after construction
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: HashMap<String, Value>,
}

impl InMemoryCatalog {
    pub fn new(records: HashMap<String, Value>) -> Self {
        Self { records }
    }

    /// Catalog with the two demo products
    pub fn seeded() -> Self {
        let mut records = HashMap::new();
        records.insert(
            "item1".to_string(),
            json!({"description": "All my friends drive a low rider", "type": "car"}),
        );
        records.insert(
            "item2".to_string(),
            json!({
                "description": "Music is my aeroplane, it's my aeroplane",
                "type": "plane",
                "size": 5,
            }),
        );
        Self::new(records)
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn lookup(&self, item_id: &str) -> Option<Value> {
        self.records.get(item_id).cloned()
    }
}

/// Look up `item_id` and resolve the stored record into its product variant
pub fn resolve_product_variant(
    catalog: &dyn ProductCatalog,
    item_id: &str,
) -> Result<Product, CatalogError> {
    let record = catalog
        .lookup(item_id)
        .ok_or_else(|| CatalogError::NotFound(item_id.to_string()))?;

    serde_json::from_value(record).map_err(|e| CatalogError::CorruptRecord {
        id: item_id.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_holds_demo_records() {
        let catalog = InMemoryCatalog::seeded();
        assert_eq!(catalog.lookup("item1").unwrap()["type"], "car");
        assert_eq!(catalog.lookup("item2").unwrap()["size"], 5);
        assert!(catalog.lookup("item3").is_none());
    }

    #[test]
    fn item1_is_a_car() {
        let catalog = InMemoryCatalog::seeded();
        match resolve_product_variant(&catalog, "item1").unwrap() {
            Product::Car(car) => assert_eq!(car.description, "All my friends drive a low rider"),
            other => panic!("expected car, got {:?}", other),
        }
    }

    #[test]
    fn item2_is_a_plane_of_size_five() {
        let catalog = InMemoryCatalog::seeded();
        match resolve_product_variant(&catalog, "item2").unwrap() {
            Product::Plane(plane) => {
                assert_eq!(plane.size, 5);
                assert_eq!(plane.description, "Music is my aeroplane, it's my aeroplane");
            }
            other => panic!("expected plane, got {:?}", other),
        }
    }

    #[test]
    fn missing_id_is_not_found() {
        let catalog = InMemoryCatalog::seeded();
        assert_eq!(
            resolve_product_variant(&catalog, "missing"),
            Err(CatalogError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn plane_without_size_is_corrupt() {
        let mut records = HashMap::new();
        records.insert("bad".to_string(), json!({"description": "no size", "type": "plane"}));
        let catalog = InMemoryCatalog::new(records);

        match resolve_product_variant(&catalog, "bad") {
            Err(CatalogError::CorruptRecord { id, reason }) => {
                assert_eq!(id, "bad");
                assert!(reason.contains("size"));
            }
            other => panic!("expected corrupt record, got {:?}", other),
        }
    }
}
