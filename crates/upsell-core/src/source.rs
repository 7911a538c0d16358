//! Remote collaborators the widget depends on.
//!
//! The widget never talks to the network directly. Hosts plug in
//! implementations of these traits (the Storefront client in production,
//! in-memory fakes in tests).

use std::future::Future;

use crate::cart::{CartChangeOutcome, CartLineChange};
use crate::catalog::CatalogVariant;

/// The remote catalog query: resolves a batch of variant ids in one call.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches every requested variant in a single batched request.
    ///
    /// Response order is not guaranteed to match `ids`. A failure of any
    /// part of the call fails the whole call.
    fn fetch_variants(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<CatalogVariant>, Self::Error>> + Send;
}

/// The imperative half of the live cart feed.
pub trait CartFeed {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one cart line change.
    ///
    /// `Ok(CartChangeOutcome::Error { .. })` is a structured rejection from
    /// the cart owner. `Err` means the call itself failed.
    fn apply_cart_lines_change(
        &self,
        change: CartLineChange,
    ) -> impl Future<Output = Result<CartChangeOutcome, Self::Error>> + Send;
}
