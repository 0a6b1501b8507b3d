//! # PingCRM HTTP Server Module
//!
//! This module provides the HTTP API for the PingCRM frontend. It combines
//! the resource routers into a unified Axum server backed by the hosted
//! store.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/health` - Health check
//! - `/api/companies/*` - Company CRUD and company-scoped contact listing
//! - `/api/contacts/*` - Contact CRUD

pub mod companies_routes;
pub mod contacts_routes;
pub mod errors;
pub mod health_routes;
pub mod pagination;
pub mod server;
pub mod state;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::ApiState;
