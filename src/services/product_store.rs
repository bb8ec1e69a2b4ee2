//! src/services/product_store.rs
//!
//! ProductStore — the in-memory product catalog. The store is cloned into
//! router state; every clone shares the same lock-guarded collection, and
//! identifiers come from a monotonic counter held under the same lock as the
//! collection itself.

use crate::models::product::{Product, ProductPayload};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound(i64),
    #[error("Product id {body} in body does not match path id {path}")]
    IdMismatch { path: i64, body: i64 },
}

pub type ProductResult<T> = Result<T, ProductError>;

#[derive(Debug)]
struct Catalog {
    /// Products in insertion order.
    products: Vec<Product>,
    next_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }
}

impl Catalog {
    fn position(&self, id: i64) -> ProductResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))
    }
}

/// ProductStore provides list/get/create/update/delete over the catalog.
#[derive(Clone, Debug, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<Catalog>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    pub async fn get(&self, id: i64) -> ProductResult<Product> {
        let catalog = self.inner.read().await;
        let idx = catalog.position(id)?;
        Ok(catalog.products[idx].clone())
    }

    /// Append a product under the next identifier. Any `id` in the payload
    /// is ignored.
    pub async fn create(&self, payload: ProductPayload) -> Product {
        let mut catalog = self.inner.write().await;
        let id = catalog.next_id;
        catalog.next_id += 1;

        let product = payload.into_product(id);
        catalog.products.push(product.clone());
        debug!(id, "created product");
        product
    }

    /// Replace the product at `id` in place, keeping its position and id.
    ///
    /// Fails without touching the catalog when `id` is unknown or the payload
    /// names a different id.
    pub async fn update(&self, id: i64, payload: ProductPayload) -> ProductResult<Product> {
        if let Some(body) = payload.id.filter(|body| *body != id) {
            return Err(ProductError::IdMismatch { path: id, body });
        }

        let mut catalog = self.inner.write().await;
        let idx = catalog.position(id)?;
        let product = payload.into_product(id);
        catalog.products[idx] = product.clone();
        debug!(id, "updated product");
        Ok(product)
    }

    /// Remove and return the product at `id`.
    pub async fn delete(&self, id: i64) -> ProductResult<Product> {
        let mut catalog = self.inner.write().await;
        let idx = catalog.position(id)?;
        let removed = catalog.products.remove(idx);
        debug!(id, "deleted product");
        Ok(removed)
    }
}
