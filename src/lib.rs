//! pingcrm - CRUD backend for the PingCRM contact manager
//!
//! Two resources, Companies and Contacts, exposed over HTTP and backed by a
//! hosted Supabase store. Every request is one stateless round trip: parse
//! the input, issue one call against the store, shape the response.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod schemas;
pub mod store;
