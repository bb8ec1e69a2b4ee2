//! Represents a product held in the in-memory catalog.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    /// Server-assigned identifier, unique for the lifetime of the process.
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Unit price.
    pub price: f64,

    /// Units on hand.
    pub stock: i64,
}

/// Body accepted by `POST /` and `PUT /{id}`.
///
/// `id` is optional: it is ignored on create and must match the path on update.
#[derive(Deserialize, Clone, Debug)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductPayload {
    /// Materialize the payload as a product carrying `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}
