use serde::{Deserialize, Serialize};
use url::{Host, Url};
use validator::{Validate, ValidationError};

use super::lax_float;

/// Loose image reference, url is kept as plain text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Images {
    pub url: String,
    pub name: String,
}

/// Image reference whose url must be an absolute http(s) URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Image {
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
    pub name: String,
}

/// Product line item accepted by `PUT /items/:item_id` and nested in offers.
///
/// `is_offer` must be present in the payload but may be `null`. Unknown keys
/// (`description`, `tax`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    pub name: String,
    #[serde(deserialize_with = "lax_float")]
    pub price: f64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub is_offer: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub image: Option<Image>,
    #[serde(default)]
    pub images: Option<Vec<Images>>,
}

pub(crate) fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .ok_or_else(|| url_error("invalid or missing URL scheme"))?;

    // Domains need a top-level part; bare IP addresses are fine
    match url.host() {
        Some(Host::Domain(domain)) if has_tld(domain) => Ok(()),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(_)) => Err(url_error("URL host invalid, top level domain required")),
        None => Err(url_error("URL host required")),
    }
}

fn has_tld(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.');
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn url_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("http_url");
    err.message = Some(message.into());
    err
}
