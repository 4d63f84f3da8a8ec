//! Customer domain types.

use serde::{Deserialize, Serialize};

/// Unique customer identifier, assigned once at seed time.
pub type CustomerId = u64;

/// Account status of a customer. Drives the flat-rate bill rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CustomerStatus {
    /// Customer is billed the flat rate.
    Active,
    /// Customer is not billed.
    Inactive,
}

/// A single customer record as it travels over the wire.
///
/// The id is not part of the record; it is the key under which the record
/// is stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Display name.
    pub name: String,
    /// Account status.
    pub status: CustomerStatus,
}

impl CustomerRecord {
    /// Create a record from a name and status.
    pub fn new(name: impl Into<String>, status: CustomerStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CustomerStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&CustomerStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn status_display_matches_wire_form() {
        assert_eq!(CustomerStatus::Active.to_string(), "active");
        assert_eq!(CustomerStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn record_round_trips_wire_shape() {
        let record = CustomerRecord::new("Alice", CustomerStatus::Active);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Alice", "status": "active"})
        );
    }

    #[test]
    fn record_decode_fails_on_missing_status() {
        let result: Result<CustomerRecord, _> =
            serde_json::from_str(r#"{"name": "Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn record_decode_fails_on_unknown_status() {
        let result: Result<CustomerRecord, _> =
            serde_json::from_str(r#"{"name": "Alice", "status": "suspended"}"#);
        assert!(result.is_err());
    }
}
