//! # Record Schemas
//!
//! Serde shapes for the two resources and their create/update variants.
//! Rows are owned by the external store; these types only exist for the
//! lifetime of a request.

pub mod company;
pub mod contact;

pub use company::{Company, CompanyCreate, CompanyUpdate};
pub use contact::{Contact, ContactCreate, ContactUpdate};
