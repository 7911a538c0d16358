pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod source;
pub mod status;

pub use app_config::{AppConfig, Environment};
pub use cart::{CartChangeOutcome, CartLine, CartLineChange, CartSnapshot};
pub use catalog::{CatalogVariant, ProductGroup, VariantRef, PLACEHOLDER_IMAGE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use format::{CurrencyFormatter, PriceFormatter};
pub use source::{CartFeed, CatalogSource};
pub use status::{Severity, Status};
