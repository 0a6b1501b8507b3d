//! # Shared API State

use crate::store::StoreClient;

/// State shared by every API handler
pub struct ApiState {
    /// Client for the hosted store
    pub store: StoreClient,
}

impl ApiState {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}
