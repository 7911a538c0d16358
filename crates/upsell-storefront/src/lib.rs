pub mod client;
pub mod error;
pub mod normalize;
pub mod queries;
pub mod types;

pub use client::{StorefrontCart, StorefrontClient};
pub use error::StorefrontError;
pub use normalize::normalize_variant;
pub use types::{MoneyV2, VariantNode};
