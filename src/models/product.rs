use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarItem {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneItem {
    pub description: String,
    pub size: i64,
}

/// Product variant returned by `GET /productos/:item_id`, tagged by `type`.
///
/// Planes are written as `"plane"`; `"planet"` is still read for records
/// created under the old misspelled tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Product {
    #[serde(rename = "car")]
    Car(CarItem),
    #[serde(rename = "plane", alias = "planet")]
    Plane(PlaneItem),
}

impl Product {
    pub fn kind(&self) -> &'static str {
        match self {
            Product::Car(_) => "car",
            Product::Plane(_) => "plane",
        }
    }
}
