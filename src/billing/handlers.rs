//! Billing Service HTTP handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::bill::BillResponse;
use super::client::DirectoryClient;
use crate::customer::CustomerId;
use crate::error::ApiError;

/// Billing state shared with handlers.
#[derive(Debug, Clone)]
pub struct BillingState {
    /// Client for the Customer Directory lookup.
    pub directory: DirectoryClient,
}

impl BillingState {
    /// Create state over a directory client.
    pub fn new(directory: DirectoryClient) -> Self {
        Self { directory }
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
        message: "Billing Service is running!",
    })
}

/// Compose a bill for a customer by querying the directory.
pub async fn get_bill(
    State(state): State<BillingState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<BillResponse>, ApiError> {
    let record = state.directory.get_customer(customer_id).await?;
    Ok(Json(BillResponse::from(record)))
}
