//! In-memory collaborators shared by the widget integration tests.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::Notify;
use upsell_core::{
    CartChangeOutcome, CartFeed, CartLineChange, CatalogSource, CatalogVariant, CurrencyFormatter,
};
use upsell_widget::{CartReconciler, CatalogLoader, UpsellSession};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct FakeError(pub String);

pub fn catalog_variant(id: &str, title: &str, product: &str) -> CatalogVariant {
    CatalogVariant {
        id: id.to_owned(),
        title: title.to_owned(),
        product_title: product.to_owned(),
        amount: Decimal::from_str("25.00").unwrap(),
        currency_code: "USD".to_owned(),
        image_url: Some(format!("https://cdn.example.com/{id}.png")),
    }
}

/// Returns a canned catalog response and counts fetches.
pub struct FakeCatalog {
    response: Result<Vec<CatalogVariant>, String>,
    pub calls: AtomicU32,
}

impl FakeCatalog {
    pub fn ok(variants: Vec<CatalogVariant>) -> Self {
        Self {
            response: Ok(variants),
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            calls: AtomicU32::new(0),
        }
    }
}

impl CatalogSource for &FakeCatalog {
    type Error = FakeError;

    async fn fetch_variants(&self, _ids: &[String]) -> Result<Vec<CatalogVariant>, FakeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(FakeError)
    }
}

/// How a [`FakeCart`] answers every change.
#[derive(Debug, Clone)]
pub enum CartScript {
    Accept,
    Reject(String),
    Fail(String),
}

/// Records every change it receives and answers per its script.
///
/// With `gated`, each call waits for [`FakeCart::release`] before answering.
pub struct FakeCart {
    script: CartScript,
    gate: Option<Notify>,
    pub changes: Mutex<Vec<CartLineChange>>,
}

impl FakeCart {
    pub fn new(script: CartScript) -> Self {
        Self {
            script,
            gate: None,
            changes: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(script: CartScript) -> Self {
        Self {
            script,
            gate: Some(Notify::new()),
            changes: Mutex::new(Vec::new()),
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn change_count(&self) -> usize {
        self.changes.lock().unwrap().len()
    }
}

impl CartFeed for &FakeCart {
    type Error = FakeError;

    async fn apply_cart_lines_change(
        &self,
        change: CartLineChange,
    ) -> Result<CartChangeOutcome, FakeError> {
        self.changes.lock().unwrap().push(change);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            CartScript::Accept => Ok(CartChangeOutcome::Success),
            CartScript::Reject(message) => Ok(CartChangeOutcome::Error {
                message: message.clone(),
            }),
            CartScript::Fail(message) => Err(FakeError(message.clone())),
        }
    }
}

pub fn requested_ids() -> Vec<String> {
    ["v1", "v2", "v3", "v4"].iter().map(|s| (*s).to_owned()).collect()
}

pub type TestSession<'a> = UpsellSession<&'a FakeCatalog, CurrencyFormatter, &'a FakeCart>;

pub fn session<'a>(catalog: &'a FakeCatalog, cart: &'a FakeCart) -> TestSession<'a> {
    let loader = CatalogLoader::new(catalog, CurrencyFormatter, requested_ids()).unwrap();
    UpsellSession::new(loader, CartReconciler::new(cart))
}
