//! Command handlers. Each builds a fresh session, mounts it, and prints
//! the resulting view or status.

use anyhow::Context;
use upsell_core::{AppConfig, CurrencyFormatter};
use upsell_storefront::{StorefrontCart, StorefrontClient};
use upsell_widget::{CartReconciler, CatalogLoader, UpsellSession};

use crate::render::{render_status, render_view};

type CliSession = UpsellSession<StorefrontClient, CurrencyFormatter, StorefrontCart>;

fn build_client(config: &AppConfig) -> anyhow::Result<StorefrontClient> {
    StorefrontClient::new(
        &config.storefront_domain,
        &config.storefront_api_version,
        &config.storefront_access_token,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build Storefront client")
}

/// Picks the `--cart-id` flag over `UPSELL_CART_ID`.
pub(crate) fn resolve_cart_id<'a>(
    config: &'a AppConfig,
    flag: Option<&'a str>,
) -> anyhow::Result<&'a str> {
    flag.or(config.cart_id.as_deref())
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("no cart id: pass --cart-id or set UPSELL_CART_ID"))
}

fn build_session(config: &AppConfig, cart_id: &str) -> anyhow::Result<(CliSession, StorefrontCart)> {
    let client = build_client(config)?;
    let cart = StorefrontCart::new(client.clone(), cart_id);
    let loader = CatalogLoader::new(client, CurrencyFormatter, config.variant_ids.clone())?;
    let session = UpsellSession::new(loader, CartReconciler::new(cart.clone()));
    Ok((session, cart))
}

/// `show`: mount and print every product against the live cart.
pub(crate) async fn show(config: &AppConfig, cart_id: Option<&str>) -> anyhow::Result<()> {
    let cart_id = resolve_cart_id(config, cart_id)?;
    let (mut session, cart) = build_session(config, cart_id)?;

    session.mount().await;
    let snapshot = cart
        .snapshot()
        .await
        .with_context(|| format!("failed to read cart {cart_id}"))?;

    print!("{}", render_view(&session.view(&snapshot)));
    Ok(())
}

/// `add`: mount, optionally pick a variant, then add the product's selection.
pub(crate) async fn add(
    config: &AppConfig,
    product: &str,
    variant: Option<&str>,
    cart_id: Option<&str>,
) -> anyhow::Result<()> {
    let cart_id = resolve_cart_id(config, cart_id)?;
    let (mut session, cart) = build_session(config, cart_id)?;

    session.mount().await;
    if let Some(status) = session.status() {
        // The catalog failed to load; there is nothing to add.
        println!("{}", render_status(status));
        return Ok(());
    }

    if let Some(variant_id) = variant {
        if !session.select_variant(product, variant_id) {
            anyhow::bail!("product '{product}' is not offered");
        }
    }

    let snapshot = cart
        .snapshot()
        .await
        .with_context(|| format!("failed to read cart {cart_id}"))?;

    let status = session.add_selected_to_cart(product, &snapshot).await;
    println!("{}", render_status(status));
    Ok(())
}

/// `create-cart`: create an empty cart for use with `show`/`add`.
pub(crate) async fn create_cart(config: &AppConfig) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let cart_id = client.cart_create().await.context("failed to create cart")?;
    tracing::info!(cart_id = %cart_id, "created cart");
    println!("{cart_id}");
    Ok(())
}
