//! Normalization from Storefront variant nodes to [`upsell_core::CatalogVariant`].

use std::str::FromStr;

use rust_decimal::Decimal;
use upsell_core::CatalogVariant;

use crate::error::StorefrontError;
use crate::types::VariantNode;

/// Converts a [`VariantNode`] into a [`CatalogVariant`].
///
/// An empty image URL is treated as absent.
///
/// # Errors
///
/// Returns [`StorefrontError::Normalization`] if `priceV2.amount` is not a
/// decimal number.
pub fn normalize_variant(node: VariantNode) -> Result<CatalogVariant, StorefrontError> {
    let amount = Decimal::from_str(node.price_v2.amount.trim()).map_err(|e| {
        StorefrontError::Normalization {
            variant_id: node.id.clone(),
            reason: format!("invalid price amount \"{}\": {e}", node.price_v2.amount),
        }
    })?;

    let image_url = node.image.map(|img| img.url).filter(|url| !url.is_empty());

    Ok(CatalogVariant {
        id: node.id,
        title: node.title,
        product_title: node.product.title,
        amount,
        currency_code: node.price_v2.currency_code,
        image_url,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
