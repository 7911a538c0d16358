use rust_decimal::Decimal;

use super::*;
use crate::types::{ImageNode, MoneyV2, ProductTitle};

fn make_node(amount: &str, image: Option<&str>) -> VariantNode {
    VariantNode {
        id: "gid://shopify/ProductVariant/1".to_owned(),
        title: "Large".to_owned(),
        price_v2: MoneyV2 {
            amount: amount.to_owned(),
            currency_code: "USD".to_owned(),
        },
        image: image.map(|url| ImageNode {
            url: url.to_owned(),
            alt_text: None,
        }),
        product: ProductTitle {
            title: "Widget".to_owned(),
        },
    }
}

#[test]
fn normalize_variant_copies_identity_and_titles() {
    let variant = normalize_variant(make_node("29.0", None)).unwrap();
    assert_eq!(variant.id, "gid://shopify/ProductVariant/1");
    assert_eq!(variant.title, "Large");
    assert_eq!(variant.product_title, "Widget");
    assert_eq!(variant.currency_code, "USD");
}

#[test]
fn normalize_variant_parses_amount_as_decimal() {
    let variant = normalize_variant(make_node("29.0", None)).unwrap();
    assert_eq!(variant.amount, Decimal::new(290, 1));
}

#[test]
fn normalize_variant_keeps_image_url() {
    let variant =
        normalize_variant(make_node("1.00", Some("https://cdn.shopify.com/a.png"))).unwrap();
    assert_eq!(
        variant.image_url.as_deref(),
        Some("https://cdn.shopify.com/a.png")
    );
}

#[test]
fn normalize_variant_treats_empty_image_url_as_absent() {
    let variant = normalize_variant(make_node("1.00", Some(""))).unwrap();
    assert!(variant.image_url.is_none());
}

#[test]
fn normalize_variant_rejects_non_numeric_amount() {
    let err = normalize_variant(make_node("free", None)).unwrap_err();
    assert!(
        matches!(err, StorefrontError::Normalization { ref variant_id, .. } if variant_id == "gid://shopify/ProductVariant/1"),
        "expected Normalization error, got: {err:?}"
    );
}
