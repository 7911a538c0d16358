//! One shopper's widget session.

use upsell_core::{CartFeed, CartSnapshot, CatalogSource, PriceFormatter, ProductGroup, Status};

use crate::error::AddToCartError;
use crate::loader::CatalogLoader;
use crate::reconciler::{membership_status, CartReconciler};
use crate::selection::SelectionState;
use crate::view::{ProductCard, WidgetView};

/// Banner shown when the catalog cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch product details";

/// Owns the catalog, selections and status banner for one session.
///
/// The cart snapshot is not stored: hosts pass the current one to every
/// call that needs it.
pub struct UpsellSession<S, F, C> {
    loader: CatalogLoader<S, F>,
    reconciler: CartReconciler<C>,
    products: Vec<ProductGroup>,
    selection: SelectionState,
    status: Option<Status>,
    loading: bool,
    mounted: bool,
}

impl<S, F, C> UpsellSession<S, F, C>
where
    S: CatalogSource,
    F: PriceFormatter,
    C: CartFeed,
{
    #[must_use]
    pub fn new(loader: CatalogLoader<S, F>, reconciler: CartReconciler<C>) -> Self {
        Self {
            loader,
            reconciler,
            products: Vec::new(),
            selection: SelectionState::default(),
            status: None,
            loading: true,
            mounted: false,
        }
    }

    /// Loads the catalog. Runs once; later calls return immediately.
    ///
    /// On failure the product list stays empty for the rest of the session
    /// and a critical status is shown.
    pub async fn mount(&mut self) {
        if self.mounted {
            tracing::debug!("session already mounted, skipping catalog load");
            return;
        }
        self.mounted = true;
        self.loading = true;

        match self.loader.load().await {
            Ok(products) => {
                self.selection = SelectionState::initialize(&products);
                self.products = products;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch upsell catalog");
                self.products.clear();
                self.selection = SelectionState::default();
                self.set_status(Status::critical(FETCH_FAILED_MESSAGE));
            }
        }
        self.loading = false;
    }

    /// Chooses `variant_id` for the product titled `heading`.
    ///
    /// Returns `false` if no product has that heading.
    pub fn select_variant(&mut self, heading: &str, variant_id: &str) -> bool {
        let changed = self.selection.select(heading, variant_id);
        if !changed {
            tracing::warn!(heading, variant_id, "ignoring selection for unknown product");
        }
        changed
    }

    /// Adds the currently selected variant of `heading` to the cart.
    pub async fn add_selected_to_cart(&mut self, heading: &str, snapshot: &CartSnapshot) -> &Status {
        let variant_id = self
            .products
            .iter()
            .find(|g| g.heading() == heading)
            .map(|g| self.selection.resolve(g).id.clone());

        let status = match variant_id {
            Some(id) => self.reconciler.add_to_cart(&id, heading, snapshot).await,
            None => {
                tracing::warn!(heading, "add requested for unknown product");
                AddToCartError::UnknownProduct {
                    heading: heading.to_owned(),
                }
                .into_status()
            }
        };
        self.set_status(status)
    }

    /// Adds `variant_id` under `heading` to the cart and shows the outcome.
    pub async fn add_to_cart(
        &mut self,
        variant_id: &str,
        heading: &str,
        snapshot: &CartSnapshot,
    ) -> &Status {
        let status = self.reconciler.add_to_cart(variant_id, heading, snapshot).await;
        self.set_status(status)
    }

    /// Replaces the banner; the previous one is discarded.
    fn set_status(&mut self, status: Status) -> &Status {
        self.status.insert(status)
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn products(&self) -> &[ProductGroup] {
        &self.products
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn reconciler(&self) -> &CartReconciler<C> {
        &self.reconciler
    }

    /// Everything the presentation layer needs for one render.
    #[must_use]
    pub fn view(&self, snapshot: &CartSnapshot) -> WidgetView<'_> {
        let placeholder_count = if self.loading {
            self.loader.variant_ids().len()
        } else {
            0
        };

        let cards = self
            .products
            .iter()
            .map(|group| {
                let selected = self.selection.resolve(group);
                ProductCard {
                    heading: group.heading(),
                    selected,
                    variants: group.variants(),
                    in_cart: membership_status(&selected.id, snapshot).in_cart,
                }
            })
            .collect();

        WidgetView {
            status: self.status.as_ref(),
            loading: self.loading,
            placeholder_count,
            cards,
        }
    }
}
