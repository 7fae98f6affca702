//! Request and response models
//!
//! Every inbound payload is a plain serde record with `validator` rules;
//! outbound payloads are separate types so fields that must never leave the
//! service (passwords, hashes) cannot be serialized by accident.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

pub mod item;
pub mod offer;
pub mod product;
pub mod user;

pub use item::{Image, Images, Item};
pub use offer::Offer;
pub use product::{CarItem, PlaneItem, Product};
pub use user::{UserBase, UserIn, UserInDb, UserOut};

/// Accept a JSON number or a string holding one (`35.4` and `"35.4"`).
/// Non-finite values are rejected since they cannot be written back as JSON.
pub(crate) fn lax_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let parsed = match &raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(de::Error::custom(format!("value is not a valid number: {}", raw))),
    }
}
