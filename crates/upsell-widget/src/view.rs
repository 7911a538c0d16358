//! Render-ready output of an [`crate::UpsellSession`].

use upsell_core::{Status, VariantRef};

/// One render's worth of widget state.
#[derive(Debug)]
pub struct WidgetView<'a> {
    pub status: Option<&'a Status>,
    pub loading: bool,
    /// Number of placeholder cards to show while loading (one per requested
    /// variant id); zero once loading finishes.
    pub placeholder_count: usize,
    pub cards: Vec<ProductCard<'a>>,
}

/// A product with its selected variant resolved.
#[derive(Debug)]
pub struct ProductCard<'a> {
    pub heading: &'a str,
    pub selected: &'a VariantRef,
    pub variants: &'a [VariantRef],
    /// Whether `selected` is already a line in the cart.
    pub in_cart: bool,
}

/// An entry of the variant picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption<'a> {
    pub value: &'a str,
    pub label: String,
}

impl<'a> ProductCard<'a> {
    /// A picker is only offered when there is more than one variant.
    #[must_use]
    pub fn has_variant_choice(&self) -> bool {
        self.variants.len() > 1
    }

    /// Picker entries labelled `"<title> - <price>"`.
    #[must_use]
    pub fn options(&self) -> Vec<VariantOption<'a>> {
        self.variants
            .iter()
            .map(|v| VariantOption {
                value: v.id.as_str(),
                label: format!("{} - {}", v.title, v.price),
            })
            .collect()
    }
}
