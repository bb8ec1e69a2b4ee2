//! Shared router state.

use crate::services::product_store::ProductStore;
use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Everything handlers need, cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Shared SQLite connection pool, probed by `/readyz`.
    pub db: Arc<SqlitePool>,

    pub products: ProductStore,
}

impl AppState {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self {
            db,
            products: ProductStore::new(),
        }
    }
}

impl FromRef<AppState> for ProductStore {
    fn from_ref(state: &AppState) -> Self {
        state.products.clone()
    }
}
