//! Client State Synchronizer.
//!
//! Keeps a local copy of the server's product list plus a client-only quantity
//! per product. The local copy is replaced wholesale by a fresh `list` after
//! every successful mutation; quantities never leave this module.

use crate::client::api::{ClientError, ProductApi};
use crate::client::view::StockSnapshot;
use crate::domain::{Product, ProductId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SyncError {
    /// Another mutating action is still waiting for the server.
    #[error("another request is still in progress")]
    Busy,
    /// The user declined the delete confirmation.
    #[error("delete cancelled")]
    Cancelled,
    #[error("product {0} is not in the local list")]
    NotTracked(ProductId),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Blocking confirmation step required before a delete is sent.
#[async_trait]
pub trait ConfirmDelete: Send {
    async fn confirm(&mut self, product: &Product) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Debug, Default)]
struct LocalState {
    products: Vec<Product>,
    quantities: HashMap<ProductId, u32>,
    error: Option<String>,
}

impl LocalState {
    fn replace(&mut self, products: Vec<Product>) {
        let quantities = products
            .iter()
            .map(|p| {
                let quantity = self.quantities.get(&p.id).copied().unwrap_or(1);
                (p.id.clone(), quantity)
            })
            .collect();
        self.products = products;
        self.quantities = quantities;
        self.error = None;
    }
}

/// Clears the busy flag when the action that set it finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct Synchronizer<A> {
    api: A,
    state: Mutex<LocalState>,
    busy: AtomicBool,
}

impl<A: ProductApi> Synchronizer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(LocalState::default()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// True while a create/update/delete is waiting for the server.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InFlight<'_>, SyncError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.busy))
            .map_err(|_| SyncError::Busy)
    }

    async fn record_failure(&self, err: &ClientError) {
        warn!(error = %err, "product request failed");
        self.state.lock().await.error = Some(err.to_string());
    }

    /// Fetches the full list and replaces the local copy. On failure the local
    /// copy is kept and the error is recorded until the next success.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        match self.api.list().await {
            Ok(products) => {
                debug!(count = products.len(), "local product list refreshed");
                self.state.lock().await.replace(products);
                Ok(())
            }
            Err(e) => {
                self.record_failure(&e).await;
                Err(e.into())
            }
        }
    }

    /// Creates a product, then re-fetches the list. A failed re-fetch is
    /// recorded in the error state but does not undo the create.
    pub async fn create(&self, name: &str, description: &str) -> Result<Product, SyncError> {
        let _in_flight = self.begin()?;
        let created = match self.api.create(name, description).await {
            Ok(p) => p,
            Err(e) => {
                self.record_failure(&e).await;
                return Err(e.into());
            }
        };
        let _ = self.refresh().await;
        Ok(created)
    }

    pub async fn update(
        &self,
        id: &ProductId,
        name: &str,
        description: &str,
    ) -> Result<Product, SyncError> {
        let _in_flight = self.begin()?;
        let updated = match self.api.update(id, name, description).await {
            Ok(p) => p,
            Err(e) => {
                self.record_failure(&e).await;
                return Err(e.into());
            }
        };
        let _ = self.refresh().await;
        Ok(updated)
    }

    /// Deletes a product after `confirm` approves it. Nothing is sent when the
    /// confirmation is declined.
    pub async fn delete(
        &self,
        id: &ProductId,
        confirm: &mut dyn ConfirmDelete,
    ) -> Result<(), SyncError> {
        let _in_flight = self.begin()?;
        let product = {
            let state = self.state.lock().await;
            state.products.iter().find(|p| &p.id == id).cloned()
        };
        let Some(product) = product else {
            return Err(SyncError::NotTracked(id.clone()));
        };
        if !confirm.confirm(&product).await {
            return Err(SyncError::Cancelled);
        }

        if let Err(e) = self.api.delete(id).await {
            self.record_failure(&e).await;
            return Err(e.into());
        }
        let _ = self.refresh().await;
        Ok(())
    }

    /// Bumps the local quantity. Returns the new value, or `None` for an unknown id.
    pub async fn increment(&self, id: &ProductId) -> Option<u32> {
        let mut state = self.state.lock().await;
        let quantity = state.quantities.get_mut(id)?;
        *quantity = quantity.saturating_add(1);
        Some(*quantity)
    }

    /// Lowers the local quantity, never below 1.
    pub async fn decrement(&self, id: &ProductId) -> Option<u32> {
        let mut state = self.state.lock().await;
        let quantity = state.quantities.get_mut(id)?;
        if *quantity > 1 {
            *quantity -= 1;
        }
        Some(*quantity)
    }

    pub async fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.state.lock().await.quantities.get(id).copied()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    pub async fn snapshot(&self) -> StockSnapshot {
        let state = self.state.lock().await;
        let entries = state
            .products
            .iter()
            .map(|p| StockEntry {
                product: p.clone(),
                quantity: state.quantities.get(&p.id).copied().unwrap_or(1),
            })
            .collect();
        StockSnapshot {
            entries,
            error: state.error.clone(),
        }
    }
}
