//! GraphQL endpoint construction from a configured shop domain.

use reqwest::Url;

use crate::error::StorefrontError;

/// Builds `https://<host>/api/<version>/graphql.json` for a shop.
///
/// Accepts a bare host (`"example.myshopify.com"`) or any URL on the shop
/// (`"https://example.myshopify.com/collections/all"`); only the origin is kept.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidShopDomain`] if the domain has no host
/// or the API version is blank.
pub fn graphql_endpoint(shop_domain: &str, api_version: &str) -> Result<Url, StorefrontError> {
    let invalid = |reason: String| StorefrontError::InvalidShopDomain {
        domain: shop_domain.to_owned(),
        reason,
    };

    let trimmed = shop_domain.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("no host".to_owned()));
    }

    let version = api_version.trim();
    if version.is_empty() {
        return Err(invalid("API version is empty".to_owned()));
    }

    let origin = parsed.origin().ascii_serialization();
    Url::parse(&format!("{origin}/api/{version}/graphql.json")).map_err(|e| invalid(e.to_string()))
}
