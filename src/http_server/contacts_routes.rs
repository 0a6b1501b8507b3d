//! Contact HTTP Routes
//!
//! CRUD endpoints for contacts. The detail endpoint embeds the owning
//! company; list responses carry the bare rows.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::schemas::{Contact, ContactCreate, ContactUpdate};
use crate::store::{StoreClient, StoreError};

use super::companies_routes::find_company;
use super::errors::{ApiError, ApiResult};
use super::pagination::Pagination;
use super::state::ApiState;

/// Select list that pulls the owning company alongside the contact
const CONTACT_WITH_COMPANY: &str = "*, company:companies(*)";

// ==================
// Contact Routes
// ==================

/// Create contact routes
pub fn contacts_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        // Collection, with and without the trailing slash
        .route("/contacts", get(list_contacts_handler))
        .route("/contacts", post(create_contact_handler))
        .route("/contacts/", get(list_contacts_handler))
        .route("/contacts/", post(create_contact_handler))
        // Single record
        .route("/contacts/{id}", get(get_contact_handler))
        .route("/contacts/{id}", put(update_contact_handler))
        .route("/contacts/{id}", delete(delete_contact_handler))
        // Company-scoped listing kept from the original API surface
        .route(
            "/contacts/companies/{id}/contacts",
            get(list_company_contacts_handler),
        )
        .route(
            "/contacts/companies/{id}/contacts/",
            get(list_company_contacts_handler),
        )
        .with_state(state)
}

// ==================
// Lookups
// ==================

/// Fetch a contact by id or fail with the canonical 404
async fn find_contact(store: &StoreClient, id: i64) -> ApiResult<Contact> {
    store
        .table("contacts")
        .select("*")
        .eq("id", id)
        .fetch_optional()
        .await?
        .ok_or_else(ApiError::contact_not_found)
}

/// A mutation that returns no rows means the contact vanished after the
/// existence check; report the same 404 the check would have produced.
fn contact_vanished(err: StoreError) -> ApiError {
    match err {
        StoreError::RowNotReturned => ApiError::contact_not_found(),
        other => ApiError::Store(other),
    }
}

// ==================
// Contact Handlers
// ==================

/// List contacts inside a `skip`/`limit` window
async fn list_contacts_handler(
    State(state): State<Arc<ApiState>>,
    Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<Contact>>> {
    let page = page.validate()?;

    let contacts = state
        .store
        .table("contacts")
        .select("*")
        .range(page.skip, page.limit)
        .fetch_all()
        .await?;

    Ok(Json(contacts))
}

/// Fetch one contact with its company embedded
async fn get_contact_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Contact>> {
    let contact = state
        .store
        .table("contacts")
        .select(CONTACT_WITH_COMPANY)
        .eq("id", id)
        .fetch_optional()
        .await?
        .ok_or_else(ApiError::contact_not_found)?;

    Ok(Json(contact))
}

/// Create a contact and return the stored record. A `company_id` that
/// references no company is rejected by the store's foreign key.
async fn create_contact_handler(
    State(state): State<Arc<ApiState>>,
    Json(contact): Json<ContactCreate>,
) -> ApiResult<Json<Contact>> {
    let created = state
        .store
        .table("contacts")
        .insert(&contact)
        .fetch_one()
        .await?;

    Ok(Json(created))
}

/// Partially update a contact; absent fields keep their stored value
async fn update_contact_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(update): Json<ContactUpdate>,
) -> ApiResult<Json<Contact>> {
    let existing = find_contact(&state.store, id).await?;

    if update.is_empty() {
        return Ok(Json(existing));
    }

    let updated = state
        .store
        .table("contacts")
        .update(&update)
        .eq("id", id)
        .fetch_one()
        .await
        .map_err(contact_vanished)?;

    Ok(Json(updated))
}

/// Delete a contact and return the deleted record
async fn delete_contact_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Contact>> {
    find_contact(&state.store, id).await?;

    let deleted = state
        .store
        .table("contacts")
        .delete()
        .eq("id", id)
        .fetch_one()
        .await
        .map_err(contact_vanished)?;

    Ok(Json(deleted))
}

// ==================
// Company-Scoped Listing
// ==================

/// List every contact belonging to a company. The company existence check
/// matches the companies-side route so both paths 404 the same way.
async fn list_company_contacts_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Contact>>> {
    find_company(&state.store, id).await?;

    let contacts = state
        .store
        .table("contacts")
        .select("*")
        .eq("company_id", id)
        .fetch_all()
        .await?;

    Ok(Json(contacts))
}
