//! Search-backend boundary for the Morsel restaurant search library.
//!
//! This crate owns the narrow query/response contract against the
//! document-search backend: the [`RestaurantDocument`] model stored in the
//! index, the [`SearchBackend`] trait, and an HTTP implementation driving an
//! Elasticsearch-compatible `_search` endpoint. Queries arrive already
//! rendered into the backend's JSON DSL; hits come back in backend order.
//!
//! The backend handle is built once at startup and shared: it is a pooled,
//! read-only client safe for concurrent use from arbitrarily many requests.

mod client;
mod document;
mod error;

pub use client::{BackendConfig, HttpSearchBackend, SearchBackend};
pub use document::{Rating, RestaurantDocument};
pub use error::{BackendError, Result};
