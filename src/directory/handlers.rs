//! Customer Directory HTTP handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::customer::{CustomerId, CustomerRecord, CustomerRepository};
use crate::error::ApiError;

/// Directory state shared with handlers.
#[derive(Clone)]
pub struct DirectoryState {
    /// Customer store, read-only after startup.
    pub repo: Arc<dyn CustomerRepository>,
}

impl DirectoryState {
    /// Create state over a repository.
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

/// Root banner response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Fixed service banner.
    pub message: &'static str,
}

/// Root handler - confirms the service is up.
pub async fn home() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Customer Service is running!",
    })
}

/// List all customers keyed by id.
pub async fn list_customers(
    State(state): State<DirectoryState>,
) -> Json<BTreeMap<CustomerId, CustomerRecord>> {
    Json(state.repo.list())
}

/// Look up a single customer, 404 if absent.
pub async fn get_customer(
    State(state): State<DirectoryState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerRecord>, ApiError> {
    state.repo.get(id).map(Json).ok_or(ApiError::NotFound)
}
