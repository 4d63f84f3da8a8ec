//! Repository abstraction over the customer store.
//!
//! Handlers depend on the [`CustomerRepository`] trait rather than a
//! concrete store, so the in-memory seed can later be swapped for a real
//! persistence layer without touching the handler contract.

use std::collections::BTreeMap;

use super::types::{CustomerId, CustomerRecord, CustomerStatus};

/// Read-only access to customer records.
pub trait CustomerRepository: Send + Sync {
    /// Look up a single customer by id.
    fn get(&self, id: CustomerId) -> Option<CustomerRecord>;

    /// The full id → record mapping, in ascending id order.
    fn list(&self) -> BTreeMap<CustomerId, CustomerRecord>;
}

/// In-memory store seeded once at construction, immutable afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryCustomerRepository {
    customers: BTreeMap<CustomerId, CustomerRecord>,
}

impl InMemoryCustomerRepository {
    /// Create a store from an explicit set of records.
    pub fn new(customers: BTreeMap<CustomerId, CustomerRecord>) -> Self {
        Self { customers }
    }

    /// The fixed seed data: Alice (active), Bob (inactive), Charlie (active).
    pub fn seeded() -> Self {
        let customers = BTreeMap::from([
            (1, CustomerRecord::new("Alice", CustomerStatus::Active)),
            (2, CustomerRecord::new("Bob", CustomerStatus::Inactive)),
            (3, CustomerRecord::new("Charlie", CustomerStatus::Active)),
        ]);

        Self::new(customers)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn get(&self, id: CustomerId) -> Option<CustomerRecord> {
        self.customers.get(&id).cloned()
    }

    fn list(&self) -> BTreeMap<CustomerId, CustomerRecord> {
        self.customers.clone()
    }
}
