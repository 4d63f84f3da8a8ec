//! Billing Service HTTP API and directory client.
//!
//! This module handles:
//! - The typed client for the Customer Directory lookup
//! - The flat-rate bill rule
//! - Billing HTTP handlers and routes

pub mod bill;
pub mod client;
pub mod handlers;
pub mod routes;

pub use bill::{bill_amount, BillResponse, FLAT_RATE};
pub use client::DirectoryClient;
pub use handlers::BillingState;
pub use routes::create_router;
