//! Customer directory and billing HTTP services.
//!
//! Two independent services built from one crate:
//!
//! - **Customer Directory** (default port 5000): read-only lookup over a
//!   fixed set of customer records seeded at startup.
//! - **Billing Service** (default port 5001): fetches a customer from the
//!   directory over HTTP and applies the flat-rate bill rule:
//!
//! ```text
//! status == active   → bill_amount = 100
//! status == inactive → bill_amount = 0
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Error types and HTTP error mapping
//! - [`customer`]: Customer records and the repository abstraction
//! - [`directory`]: Customer Directory HTTP API
//! - [`billing`]: Billing Service HTTP API and directory client
//! - [`utils`]: Utility functions

pub mod billing;
pub mod config;
pub mod customer;
pub mod directory;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, BillingError};
