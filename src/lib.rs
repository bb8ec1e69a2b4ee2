//! Storefront service: an in-memory product catalog over HTTP, plus the
//! SQLite-backed user and item persistence layer.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
