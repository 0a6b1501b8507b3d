//! # External Store Client
//!
//! Pass-through shim over the hosted store's REST endpoint
//! (`{SUPABASE_URL}/rest/v1/{table}`). Every operation is one stateless
//! round trip; the store is the sole source of truth and this module never
//! caches or retries.
//!
//! The one behavioral translation it performs: a single-row fetch that finds
//! zero or more than one row collapses to `None` instead of an error. All
//! other store failures propagate unchanged.

pub mod client;
pub mod error;
pub mod filter;
pub mod query;

pub use client::{StoreClient, TableRef};
pub use error::{StoreError, StoreResult};
pub use filter::{Filter, FilterOperator};
pub use query::TableQuery;
