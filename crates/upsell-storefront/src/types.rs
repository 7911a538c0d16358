//! Storefront GraphQL response types.
//!
//! ## Envelope
//! Every response is `{"data": ..., "errors": [...]}`. Either key may be
//! absent. A query-level problem (bad id syntax, missing scope) arrives as
//! HTTP 200 with a non-empty `errors` array, so the status code alone is not
//! enough to detect failure.
//!
//! ## `nodes(ids:)`
//! Returns one entry per requested id. An id that does not resolve yields
//! `null`, and an id of another type (e.g. a `Product` gid) yields `{}`
//! because the `... on ProductVariant` fragment selects nothing. Both are
//! treated as malformed: [`VariantNode`] has required fields, so neither
//! shape deserializes.
//!
//! ## `priceV2.amount`
//! A decimal string such as `"29.0"`. Shopify does not pad to two places.
//!
//! ## `cartLinesAdd.userErrors`
//! Business-level rejections (out of stock, invalid merchandise) are
//! reported here with HTTP 200 and no top-level `errors`.

use serde::Deserialize;

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of the variant `nodes` query.
#[derive(Debug, Deserialize)]
pub struct VariantNodesData {
    pub nodes: Vec<VariantNode>,
}

/// A `ProductVariant` node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    /// Global id, e.g. `"gid://shopify/ProductVariant/44293023465684"`.
    pub id: String,
    pub title: String,
    pub price_v2: MoneyV2,
    #[serde(default)]
    pub image: Option<ImageNode>,
    pub product: ProductTitle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductTitle {
    pub title: String,
}

/// `data` of the cart lines query.
#[derive(Debug, Deserialize)]
pub struct CartData {
    pub cart: Option<CartNode>,
}

#[derive(Debug, Deserialize)]
pub struct CartNode {
    pub id: String,
    pub lines: Connection<CartLineNode>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct CartLineNode {
    pub id: String,
    pub quantity: u32,
    pub merchandise: MerchandiseNode,
}

/// Cart line merchandise. Only `ProductVariant` merchandise carries an id
/// under our fragment.
#[derive(Debug, Deserialize)]
pub struct MerchandiseNode {
    #[serde(default)]
    pub id: Option<String>,
}

/// `data` of the `cartLinesAdd` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinesAddData {
    pub cart_lines_add: Option<CartMutationPayload>,
}

/// `data` of the `cartCreate` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreateData {
    pub cart_create: Option<CartMutationPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationPayload {
    #[serde(default)]
    pub cart: Option<CartId>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub struct CartId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}
