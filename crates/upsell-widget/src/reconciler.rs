//! Cart membership checks and guarded add-to-cart.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use upsell_core::{CartChangeOutcome, CartFeed, CartLineChange, CartSnapshot, Status};

use crate::error::AddToCartError;

/// Whether a variant is already a line in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub in_cart: bool,
}

#[must_use]
pub fn membership_status(variant_id: &str, snapshot: &CartSnapshot) -> Membership {
    Membership {
        in_cart: snapshot.contains(variant_id),
    }
}

/// Adds variants to the live cart at most once per user action.
///
/// The remote add is not idempotent, so two guards run before it:
/// the variant must be absent from the caller's snapshot, and no other add
/// of the same variant may be in flight on this reconciler.
pub struct CartReconciler<C> {
    feed: C,
    pending: Mutex<HashSet<String>>,
}

impl<C: CartFeed> CartReconciler<C> {
    #[must_use]
    pub fn new(feed: C) -> Self {
        Self {
            feed,
            pending: Mutex::new(HashSet::new()),
        }
    }

    #[must_use]
    pub fn feed(&self) -> &C {
        &self.feed
    }

    /// `true` while an add of `variant_id` is awaiting the cart feed.
    #[must_use]
    pub fn is_pending(&self, variant_id: &str) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(variant_id)
    }

    /// Adds one unit of `variant_id` and reports the outcome as a [`Status`].
    ///
    /// Never fails: every error is converted into the shopper-facing banner.
    pub async fn add_to_cart(
        &self,
        variant_id: &str,
        heading: &str,
        snapshot: &CartSnapshot,
    ) -> Status {
        match self.try_add_to_cart(variant_id, heading, snapshot).await {
            Ok(()) => Status::success(format!("{heading} added to cart successfully")),
            Err(err) => err.into_status(),
        }
    }

    /// Adds one unit of `variant_id`, issuing at most one cart mutation.
    ///
    /// # Errors
    ///
    /// - [`AddToCartError::AlreadyInCart`] if `snapshot` already holds the variant.
    /// - [`AddToCartError::Pending`] if an add of the same variant is in flight.
    /// - [`AddToCartError::Rejected`] if the cart refused the line.
    /// - [`AddToCartError::Transport`] if the cart feed call failed.
    pub async fn try_add_to_cart(
        &self,
        variant_id: &str,
        heading: &str,
        snapshot: &CartSnapshot,
    ) -> Result<(), AddToCartError> {
        if membership_status(variant_id, snapshot).in_cart {
            tracing::info!(variant_id, heading, "variant already in cart, skipping add");
            return Err(AddToCartError::AlreadyInCart {
                heading: heading.to_owned(),
            });
        }

        let Some(_guard) = PendingGuard::acquire(&self.pending, variant_id) else {
            tracing::warn!(variant_id, heading, "add already in flight for variant");
            return Err(AddToCartError::Pending {
                heading: heading.to_owned(),
            });
        };

        match self
            .feed
            .apply_cart_lines_change(CartLineChange::add_one(variant_id))
            .await
        {
            Ok(CartChangeOutcome::Success) => {
                tracing::info!(variant_id, heading, "added variant to cart");
                Ok(())
            }
            Ok(CartChangeOutcome::Error { message }) => {
                tracing::warn!(variant_id, heading, reason = %message, "cart rejected line");
                Err(AddToCartError::Rejected {
                    heading: heading.to_owned(),
                    reason: message,
                })
            }
            Err(err) => {
                tracing::error!(variant_id, heading, error = %err, "cart line change failed");
                Err(AddToCartError::Transport {
                    heading: heading.to_owned(),
                    source: Box::new(err),
                })
            }
        }
    }
}

/// Marks a variant as in flight until dropped, including when the add
/// future is dropped mid-await.
struct PendingGuard<'a> {
    pending: &'a Mutex<HashSet<String>>,
    variant_id: String,
}

impl<'a> PendingGuard<'a> {
    fn acquire(pending: &'a Mutex<HashSet<String>>, variant_id: &str) -> Option<Self> {
        let inserted = pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(variant_id.to_owned());
        inserted.then(|| Self {
            pending,
            variant_id: variant_id.to_owned(),
        })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.variant_id);
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicU32, Ordering};

    use upsell_core::Severity;

    use super::*;

    /// Accepts every change and counts calls.
    #[derive(Default)]
    struct CountingFeed {
        calls: AtomicU32,
    }

    impl CartFeed for CountingFeed {
        type Error = Infallible;

        async fn apply_cart_lines_change(
            &self,
            _change: CartLineChange,
        ) -> Result<CartChangeOutcome, Infallible> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CartChangeOutcome::Success)
        }
    }

    #[test]
    fn membership_reflects_snapshot() {
        let snapshot = CartSnapshot::from_ids(["v1"]);
        assert!(membership_status("v1", &snapshot).in_cart);
        assert!(!membership_status("v2", &snapshot).in_cart);
    }

    #[tokio::test]
    async fn success_reports_and_releases_pending() {
        let reconciler = CartReconciler::new(CountingFeed::default());
        let status = reconciler
            .add_to_cart("v1", "Widget", &CartSnapshot::default())
            .await;

        assert_eq!(status, Status::success("Widget added to cart successfully"));
        assert_eq!(reconciler.feed().calls.load(Ordering::SeqCst), 1);
        assert!(!reconciler.is_pending("v1"));
    }

    #[tokio::test]
    async fn in_cart_variant_is_never_mutated() {
        let reconciler = CartReconciler::new(CountingFeed::default());
        let snapshot = CartSnapshot::from_ids(["v1"]);

        for _ in 0..3 {
            let status = reconciler.add_to_cart("v1", "Widget", &snapshot).await;
            assert_eq!(status.severity, Severity::Info);
        }
        assert_eq!(reconciler.feed().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pending_guard_rejects_reentry_until_dropped() {
        let pending = Mutex::new(HashSet::new());
        let first = PendingGuard::acquire(&pending, "v1");
        assert!(first.is_some());
        assert!(PendingGuard::acquire(&pending, "v1").is_none());
        assert!(PendingGuard::acquire(&pending, "v2").is_some());
        drop(first);
        assert!(PendingGuard::acquire(&pending, "v1").is_some());
    }
}
