//! Client-side state for the checkout upsell widget.
//!
//! [`CatalogLoader`] turns a fixed list of variant ids into grouped products,
//! [`SelectionState`] tracks the chosen variant per product, and
//! [`CartReconciler`] checks selections against the live cart and adds them.
//! [`UpsellSession`] ties the three together for one shopper session.

pub mod error;
pub mod loader;
pub mod reconciler;
pub mod selection;
pub mod session;
pub mod view;

pub use error::{AddToCartError, FetchError, LoaderConfigError};
pub use loader::{group_variants, CatalogLoader};
pub use reconciler::{membership_status, CartReconciler, Membership};
pub use selection::SelectionState;
pub use session::{UpsellSession, FETCH_FAILED_MESSAGE};
pub use view::{ProductCard, VariantOption, WidgetView};
