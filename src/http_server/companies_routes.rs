//! Company HTTP Routes
//!
//! CRUD endpoints for companies, plus the company-scoped contact listing.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::schemas::{Company, CompanyCreate, CompanyUpdate, Contact};
use crate::store::{StoreClient, StoreError};

use super::errors::{ApiError, ApiResult};
use super::pagination::Pagination;
use super::state::ApiState;

// ==================
// Company Routes
// ==================

/// Create company routes
pub fn companies_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        // Collection, with and without the trailing slash
        .route("/companies", get(list_companies_handler))
        .route("/companies", post(create_company_handler))
        .route("/companies/", get(list_companies_handler))
        .route("/companies/", post(create_company_handler))
        // Single record
        .route("/companies/{id}", get(get_company_handler))
        .route("/companies/{id}", put(update_company_handler))
        .route("/companies/{id}", delete(delete_company_handler))
        // Contacts belonging to a company
        .route("/companies/{id}/contacts", get(list_company_contacts_handler))
        .route("/companies/{id}/contacts/", get(list_company_contacts_handler))
        .with_state(state)
}

// ==================
// Lookups
// ==================

/// Fetch a company by id or fail with the canonical 404
pub(crate) async fn find_company(store: &StoreClient, id: i64) -> ApiResult<Company> {
    store
        .table("companies")
        .select("*")
        .eq("id", id)
        .fetch_optional()
        .await?
        .ok_or_else(ApiError::company_not_found)
}

/// A mutation that returns no rows means the company vanished after the
/// existence check; report the same 404 the check would have produced.
fn company_vanished(err: StoreError) -> ApiError {
    match err {
        StoreError::RowNotReturned => ApiError::company_not_found(),
        other => ApiError::Store(other),
    }
}

// ==================
// Company Handlers
// ==================

/// List companies inside a `skip`/`limit` window
async fn list_companies_handler(
    State(state): State<Arc<ApiState>>,
    Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<Company>>> {
    let page = page.validate()?;

    let companies = state
        .store
        .table("companies")
        .select("*")
        .range(page.skip, page.limit)
        .fetch_all()
        .await?;

    Ok(Json(companies))
}

/// Fetch one company
async fn get_company_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Company>> {
    let company = find_company(&state.store, id).await?;
    Ok(Json(company))
}

/// Create a company and return the stored record
async fn create_company_handler(
    State(state): State<Arc<ApiState>>,
    Json(company): Json<CompanyCreate>,
) -> ApiResult<Json<Company>> {
    let created = state
        .store
        .table("companies")
        .insert(&company)
        .fetch_one()
        .await?;

    Ok(Json(created))
}

/// Partially update a company; absent fields keep their stored value
async fn update_company_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(update): Json<CompanyUpdate>,
) -> ApiResult<Json<Company>> {
    let existing = find_company(&state.store, id).await?;

    // An all-absent payload changes nothing; skip the store round trip.
    if update.is_empty() {
        return Ok(Json(existing));
    }

    let updated = state
        .store
        .table("companies")
        .update(&update)
        .eq("id", id)
        .fetch_one()
        .await
        .map_err(company_vanished)?;

    Ok(Json(updated))
}

/// Delete a company and return the deleted record
async fn delete_company_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Company>> {
    find_company(&state.store, id).await?;

    let deleted = state
        .store
        .table("companies")
        .delete()
        .eq("id", id)
        .fetch_one()
        .await
        .map_err(company_vanished)?;

    Ok(Json(deleted))
}

// ==================
// Contact Listing
// ==================

/// List every contact belonging to a company, 404 when the company is absent
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
