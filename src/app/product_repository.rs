//! The Product Repository.
//!
//! Sole owner of the in-memory product collection. Every operation, reads
//! included, goes through the same mutex so no caller ever observes a
//! half-applied write. Callers only ever receive clones of stored products.
//!
//! The collection lives for the lifetime of the process and is never persisted.

use crate::domain::{Product, ProductDraft, ProductError, ProductId};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ProductRepository {
    products: Mutex<Vec<Product>>,
}

impl ProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the fields, assigns a fresh id and appends the product.
    pub async fn create(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Product, ProductError> {
        let draft = ProductDraft::new(name, description).inspect_err(|e| {
            debug!(error = %e, "rejected product creation");
        })?;

        let mut products = self.products.lock().await;
        let mut id = ProductId::generate();
        // v4 collisions are astronomically unlikely, but ids must stay unique.
        while products.iter().any(|p| p.id == id) {
            id = ProductId::generate();
        }
        let product = Product::from_draft(id, draft);
        products.push(product.clone());
        info!(product_id = %product.id, total = products.len(), "product created");
        Ok(product)
    }

    /// Returns a snapshot of the collection in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.lock().await.clone()
    }

    /// Replaces name and description of an existing product in place.
    ///
    /// Fields are validated before the lookup, so an invalid request against a
    /// missing id reports `Validation`.
    pub async fn update(
        &self,
        id: &ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Product, ProductError> {
        let draft = ProductDraft::new(name, description).inspect_err(|e| {
            debug!(product_id = %id, error = %e, "rejected product update");
        })?;

        let mut products = self.products.lock().await;
        let Some(slot) = products.iter_mut().find(|p| &p.id == id) else {
            debug!(product_id = %id, "update of unknown product");
            return Err(ProductError::NotFound(id.clone()));
        };
        *slot = Product::from_draft(id.clone(), draft);
        info!(product_id = %id, "product updated");
        Ok(slot.clone())
    }

    /// Removes the product with `id`, keeping the order of the others.
    pub async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let mut products = self.products.lock().await;
        let Some(index) = products.iter().position(|p| &p.id == id) else {
            debug!(product_id = %id, "delete of unknown product");
            return Err(ProductError::NotFound(id.clone()));
        };
        products.remove(index);
        info!(product_id = %id, total = products.len(), "product deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.products.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
