//! Customer records and the repository abstraction.
//!
//! This module handles:
//! - Customer domain types
//! - The repository trait and the seeded in-memory store

pub mod repository;
pub mod types;

pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use types::{CustomerId, CustomerRecord, CustomerStatus};
