//! Defines the HTTP surface.
//!
//! ## Structure
//! - **Probes** (mounted at root)
//!   - `GET    /healthz`
//!   - `GET    /readyz`
//!
//! - **Products** (mounted under `/products`)
//!   - `GET    /`      — list products
//!   - `POST   /`      — create product
//!   - `GET    /{id}`  — fetch product
//!   - `PUT    /{id}`  — replace product
//!   - `DELETE /{id}`  — delete product

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        product_handlers::{
            create_product, delete_product, get_product, list_products, update_product,
        },
    },
    services::product_store::ProductStore,
    state::AppState,
};
use axum::{Router, extract::FromRef, routing::get};
use tower_http::trace::TraceLayer;

/// Build the full application router.
///
/// The router carries shared state (`AppState`) to all handlers and traces
/// every request.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/products", product_routes())
        .layer(TraceLayer::new_for_http())
}

/// Product routes relative to their mount point.
pub fn product_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ProductStore: FromRef<S>,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
