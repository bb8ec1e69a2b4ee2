//! Request and response shapes for the storefront service.
//!
//! Products live only in memory. Users and items map to SQLite rows via
//! `sqlx::FromRow`; their request variants derive `validator::Validate` so
//! field constraints are checked before anything touches the database.

use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod item;
pub mod product;
pub mod user;

/// Deserialize a nullable field of a partial update so that an absent key
/// stays `None` (via `#[serde(default)]`) while an explicit `null` becomes
/// `Some(None)`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
