//! Catalog loading: one batched fetch, grouped by parent product.

use indexmap::map::Entry;
use indexmap::IndexMap;
use upsell_core::{
    CatalogSource, CatalogVariant, PriceFormatter, ProductGroup, VariantRef, PLACEHOLDER_IMAGE_URL,
};

use crate::error::{FetchError, LoaderConfigError};

/// Fetches the configured variants and groups them by product title.
pub struct CatalogLoader<S, F> {
    source: S,
    formatter: F,
    variant_ids: Vec<String>,
}

impl<S, F> CatalogLoader<S, F>
where
    S: CatalogSource,
    F: PriceFormatter,
{
    /// # Errors
    ///
    /// Returns [`LoaderConfigError::NoVariantIds`] if `variant_ids` is empty.
    pub fn new(
        source: S,
        formatter: F,
        variant_ids: Vec<String>,
    ) -> Result<Self, LoaderConfigError> {
        if variant_ids.is_empty() {
            return Err(LoaderConfigError::NoVariantIds);
        }
        Ok(Self {
            source,
            formatter,
            variant_ids,
        })
    }

    /// The variant ids requested on every load, in configured order.
    #[must_use]
    pub fn variant_ids(&self) -> &[String] {
        &self.variant_ids
    }

    /// Issues one batched catalog query and groups the result.
    ///
    /// No retry and no partial result: any failure of the query is a
    /// [`FetchError`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] wrapping the source's error.
    pub async fn load(&self) -> Result<Vec<ProductGroup>, FetchError> {
        let variants = self
            .source
            .fetch_variants(&self.variant_ids)
            .await
            .map_err(FetchError::new)?;

        let fetched = variants.len();
        let groups = group_variants(variants, &self.formatter);
        tracing::info!(
            requested = self.variant_ids.len(),
            fetched,
            groups = groups.len(),
            "loaded upsell catalog"
        );
        Ok(groups)
    }
}

/// Groups variants by product title.
///
/// Groups appear in the order their first variant appears in `variants`;
/// variants keep their relative order inside a group.
pub fn group_variants<F>(variants: Vec<CatalogVariant>, formatter: &F) -> Vec<ProductGroup>
where
    F: PriceFormatter + ?Sized,
{
    let mut groups: IndexMap<String, ProductGroup> = IndexMap::new();

    for variant in variants {
        let variant_ref = VariantRef {
            price: formatter.format_price(variant.amount, &variant.currency_code),
            image_url: variant
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned()),
            id: variant.id,
            title: variant.title,
        };

        match groups.entry(variant.product_title) {
            Entry::Occupied(mut entry) => entry.get_mut().push(variant_ref),
            Entry::Vacant(entry) => {
                let group = ProductGroup::new(entry.key().clone(), variant_ref);
                entry.insert(group);
            }
        }
    }

    groups.into_values().collect()
}
