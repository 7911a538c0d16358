//! HTTP client for the Shopify Storefront GraphQL API.

mod cart;
mod endpoint;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use upsell_core::{CatalogSource, CatalogVariant};

use crate::error::StorefrontError;
use crate::normalize::normalize_variant;
use crate::queries::VARIANT_NODES_QUERY;
use crate::types::{GraphQlResponse, VariantNode, VariantNodesData};

pub use cart::StorefrontCart;
pub use endpoint::graphql_endpoint;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the Storefront GraphQL API.
///
/// Every call is a single POST with no retry: a failed catalog fetch or cart
/// mutation is reported to the caller, which decides what the shopper sees.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("access_token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl StorefrontClient {
    /// Creates a client for `shop_domain` (a bare host such as
    /// `"example.myshopify.com"` or a full origin) at `api_version`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidShopDomain`] if no endpoint URL can
    /// be built from `shop_domain`, or [`StorefrontError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        shop_domain: &str,
        api_version: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StorefrontError> {
        let endpoint = graphql_endpoint(shop_domain, api_version)?;
        Self::with_endpoint(endpoint.as_str(), access_token, timeout_secs, user_agent)
    }

    /// Creates a client that posts to an explicit GraphQL endpoint (for
    /// testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidShopDomain`] if `endpoint` is not a
    /// valid URL, or [`StorefrontError::Http`] if the `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StorefrontError> {
        let endpoint = Url::parse(endpoint).map_err(|e| StorefrontError::InvalidShopDomain {
            domain: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the requested variants with one batched `nodes` query.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Http`] / [`StorefrontError::UnexpectedStatus`] on
    ///   transport failure or a non-2xx status.
    /// - [`StorefrontError::GraphQl`] if the envelope carries `errors`.
    /// - [`StorefrontError::Deserialize`] if any node is `null` or is not a
    ///   `ProductVariant`.
    pub async fn fetch_variant_nodes(
        &self,
        ids: &[String],
    ) -> Result<Vec<VariantNode>, StorefrontError> {
        let data: VariantNodesData = self
            .execute("variant nodes", VARIANT_NODES_QUERY, json!({ "ids": ids }))
            .await?;

        tracing::debug!(
            requested = ids.len(),
            returned = data.nodes.len(),
            "fetched variant nodes"
        );
        Ok(data.nodes)
    }

    /// Posts one GraphQL document and unwraps the response envelope.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_variant_nodes`]; additionally
    /// [`StorefrontError::MissingData`] when the envelope has neither
    /// `errors` nor `data`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        context: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, StorefrontError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<GraphQlResponse<T>>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: context.to_owned(),
                source: e,
            }
        })?;

        if !envelope.errors.is_empty() {
            return Err(StorefrontError::GraphQl {
                context: context.to_owned(),
                messages: envelope.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        envelope.data.ok_or_else(|| StorefrontError::MissingData {
            context: context.to_owned(),
        })
    }
}

impl CatalogSource for StorefrontClient {
    type Error = StorefrontError;

    async fn fetch_variants(&self, ids: &[String]) -> Result<Vec<CatalogVariant>, StorefrontError> {
        self.fetch_variant_nodes(ids)
            .await?
            .into_iter()
            .map(normalize_variant)
            .collect()
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
