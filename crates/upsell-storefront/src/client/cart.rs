//! Cart reads and mutations for `StorefrontClient`.

use serde_json::json;
use upsell_core::{CartChangeOutcome, CartFeed, CartLine, CartLineChange, CartSnapshot};

use crate::error::StorefrontError;
use crate::queries::{CART_CREATE_MUTATION, CART_LINES_ADD_MUTATION, CART_LINES_QUERY};
use crate::types::{CartCreateData, CartData, CartLinesAddData, UserError};

use super::StorefrontClient;

impl StorefrontClient {
    /// Reads the current lines of `cart_id`.
    ///
    /// Lines whose merchandise is not a product variant are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] when the cart does not exist,
    /// plus every error [`Self::fetch_variant_nodes`] can return.
    pub async fn cart_lines(&self, cart_id: &str) -> Result<Vec<CartLine>, StorefrontError> {
        let data: CartData = self
            .execute("cart lines", CART_LINES_QUERY, json!({ "cartId": cart_id }))
            .await?;

        let cart = data
            .cart
            .ok_or_else(|| StorefrontError::NotFound(format!("cart {cart_id}")))?;

        let lines = cart
            .lines
            .nodes
            .into_iter()
            .filter_map(|line| {
                line.merchandise.id.map(|merchandise_id| CartLine {
                    id: line.id,
                    merchandise_id,
                    quantity: line.quantity,
                })
            })
            .collect();
        Ok(lines)
    }

    /// Adds `quantity` units of `merchandise_id` to `cart_id`.
    ///
    /// Shopify `userErrors` are a structured rejection and come back as
    /// [`CartChangeOutcome::Error`], not as `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError`] when the request itself fails or the
    /// response has no `cartLinesAdd` payload.
    pub async fn cart_lines_add(
        &self,
        cart_id: &str,
        merchandise_id: &str,
        quantity: u32,
    ) -> Result<CartChangeOutcome, StorefrontError> {
        let variables = json!({
            "cartId": cart_id,
            "lines": [{ "merchandiseId": merchandise_id, "quantity": quantity }],
        });
        let data: CartLinesAddData = self
            .execute("cartLinesAdd", CART_LINES_ADD_MUTATION, variables)
            .await?;

        let payload = data
            .cart_lines_add
            .ok_or_else(|| StorefrontError::MissingData {
                context: "cartLinesAdd".to_owned(),
            })?;

        if payload.user_errors.is_empty() {
            Ok(CartChangeOutcome::Success)
        } else {
            Ok(CartChangeOutcome::Error {
                message: join_user_errors(&payload.user_errors),
            })
        }
    }

    /// Creates an empty cart and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::GraphQl`] carrying the `userErrors` when
    /// Shopify refuses to create the cart, [`StorefrontError::MissingData`]
    /// when no cart comes back, or any transport error.
    pub async fn cart_create(&self) -> Result<String, StorefrontError> {
        let data: CartCreateData = self
            .execute("cartCreate", CART_CREATE_MUTATION, json!({}))
            .await?;

        let payload = data.cart_create.ok_or_else(|| StorefrontError::MissingData {
            context: "cartCreate".to_owned(),
        })?;

        if !payload.user_errors.is_empty() {
            return Err(StorefrontError::GraphQl {
                context: "cartCreate".to_owned(),
                messages: payload.user_errors.into_iter().map(|e| e.message).collect(),
            });
        }

        payload
            .cart
            .map(|cart| cart.id)
            .ok_or_else(|| StorefrontError::MissingData {
                context: "cartCreate".to_owned(),
            })
    }
}

fn join_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A Storefront cart acting as the live cart feed for one session.
#[derive(Debug, Clone)]
pub struct StorefrontCart {
    client: StorefrontClient,
    cart_id: String,
}

impl StorefrontCart {
    #[must_use]
    pub fn new(client: StorefrontClient, cart_id: impl Into<String>) -> Self {
        Self {
            client,
            cart_id: cart_id.into(),
        }
    }

    #[must_use]
    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    /// Reads the cart and projects it into a fresh [`CartSnapshot`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`StorefrontClient::cart_lines`].
    pub async fn snapshot(&self) -> Result<CartSnapshot, StorefrontError> {
        let lines = self.client.cart_lines(&self.cart_id).await?;
        Ok(CartSnapshot::from_lines(&lines))
    }
}

impl CartFeed for StorefrontCart {
    type Error = StorefrontError;

    async fn apply_cart_lines_change(
        &self,
        change: CartLineChange,
    ) -> Result<CartChangeOutcome, StorefrontError> {
        match change {
            CartLineChange::AddCartLine {
                merchandise_id,
                quantity,
            } => {
                self.client
                    .cart_lines_add(&self.cart_id, &merchandise_id, quantity)
                    .await
            }
        }
    }
}
