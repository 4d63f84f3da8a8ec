//! The flat-rate bill rule and the composed bill response.

use serde::{Deserialize, Serialize};

use crate::customer::{CustomerRecord, CustomerStatus};

/// Units billed to an active customer per billing request.
pub const FLAT_RATE: u64 = 100;

/// The single business rule: active customers pay the flat rate.
pub fn bill_amount(status: CustomerStatus) -> u64 {
    match status {
        CustomerStatus::Active => FLAT_RATE,
        CustomerStatus::Inactive => 0,
    }
}

/// Bill composed per request from a directory record. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillResponse {
    /// Customer display name.
    pub customer: String,
    /// Account status, echoed from the directory.
    pub status: CustomerStatus,
    /// Billed amount in units.
    pub bill_amount: u64,
}

impl From<CustomerRecord> for BillResponse {
    fn from(record: CustomerRecord) -> Self {
        Self {
            bill_amount: bill_amount(record.status),
            customer: record.name,
            status: record.status,
        }
    }
}
