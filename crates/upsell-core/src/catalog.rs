//! Catalog model: the grouped products offered by the upsell widget.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Image shown for a variant when the catalog provides none.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn.shopify.com/s/files/1/0533/2089/files/placeholder-images-image_medium.png?format=webp&v=1530129081";

/// A raw variant record as returned by the remote catalog query, before
/// price formatting and grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVariant {
    /// Opaque merchandise identifier, e.g. `"gid://shopify/ProductVariant/1"`.
    pub id: String,
    /// Variant display title, e.g. `"Large"` or `"Default Title"`.
    pub title: String,
    /// Title of the parent product. Variants are grouped by this value.
    pub product_title: String,
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., `"USD"`).
    pub currency_code: String,
    pub image_url: Option<String>,
}

/// A purchasable variant, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: String,
    pub title: String,
    /// Price already rendered by a [`crate::PriceFormatter`], e.g. `"$12.99"`.
    pub price: String,
    /// Variant image, or [`PLACEHOLDER_IMAGE_URL`] when the catalog has none.
    pub image_url: String,
}

/// All variants sharing one parent product title.
///
/// A group always holds at least one variant: it can only be built from a
/// first variant and then extended with [`ProductGroup::push`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductGroup {
    heading: String,
    variants: Vec<VariantRef>,
}

impl ProductGroup {
    #[must_use]
    pub fn new(heading: impl Into<String>, first: VariantRef) -> Self {
        Self {
            heading: heading.into(),
            variants: vec![first],
        }
    }

    pub fn push(&mut self, variant: VariantRef) {
        self.variants.push(variant);
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn variants(&self) -> &[VariantRef] {
        &self.variants
    }

    /// Returns the variant selected by default after a load.
    #[must_use]
    pub fn first_variant(&self) -> &VariantRef {
        // Non-empty by construction.
        &self.variants[0]
    }

    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&VariantRef> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Resolves a selected id to a variant of this group, falling back to
    /// the first variant when the id is absent or belongs to another group.
    #[must_use]
    pub fn resolve(&self, selected_id: Option<&str>) -> &VariantRef {
        selected_id
            .and_then(|id| self.variant(id))
            .unwrap_or_else(|| self.first_variant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: &str, title: &str) -> VariantRef {
        VariantRef {
            id: id.to_owned(),
            title: title.to_owned(),
            price: "$10.00".to_owned(),
            image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
        }
    }

    fn widget_group() -> ProductGroup {
        let mut group = ProductGroup::new("Widget", variant("v1", "Small"));
        group.push(variant("v2", "Large"));
        group
    }

    #[test]
    fn first_variant_is_the_construction_variant() {
        let group = widget_group();
        assert_eq!(group.first_variant().id, "v1");
        assert_eq!(group.variants().len(), 2);
    }

    #[test]
    fn resolve_returns_selected_variant() {
        let group = widget_group();
        assert_eq!(group.resolve(Some("v2")).title, "Large");
    }

    #[test]
    fn resolve_falls_back_to_first_for_foreign_id() {
        let group = widget_group();
        assert_eq!(group.resolve(Some("v99")).id, "v1");
    }

    #[test]
    fn resolve_falls_back_to_first_when_nothing_selected() {
        let group = widget_group();
        assert_eq!(group.resolve(None).id, "v1");
    }

    #[test]
    fn product_group_serializes_heading_and_variants() {
        let json = serde_json::to_value(widget_group()).unwrap();
        assert_eq!(json["heading"], "Widget");
        assert_eq!(json["variants"][1]["id"], "v2");
    }
}
