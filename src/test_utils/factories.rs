//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::entities::{
    pro_key::{ProKey, ProKeyStatus},
    receipt::Receipt,
};

/// Create an active test Pro Key with sensible defaults.
pub fn create_test_pro_key(overrides: impl FnOnce(&mut ProKey)) -> ProKey {
    let mut key = ProKey {
        key: "WAVY-12345678-9ABC".to_string(),
        status: ProKeyStatus::Active,
        payment_reference: Some("ref_test".to_string()),
        created_at: Some(test_datetime()),
    };
    overrides(&mut key);
    key
}

/// Create a test receipt with sensible defaults.
pub fn create_test_receipt(overrides: impl FnOnce(&mut Receipt)) -> Receipt {
    let mut receipt = Receipt {
        token: "abcd1234".to_string(),
        customer_name: Some("Test Customer".to_string()),
        date: Some("2025-01-15".to_string()),
        items: serde_json::json!([{ "name": "Item", "quantity": 1, "price": 10.0 }]),
        total: Some(10.0),
        timestamp: test_datetime(),
    };
    overrides(&mut receipt);
    receipt
}

/// Fixed reference instant for reproducible tests.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

pub fn test_datetime_offset_minutes(minutes: i64) -> DateTime<Utc> {
    test_datetime() + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_apply_overrides() {
        let key = create_test_pro_key(|k| k.status = ProKeyStatus::from_str("inactive"));
        assert!(!key.status.is_active());
        assert_eq!(key.key, "WAVY-12345678-9ABC");

        let receipt = create_test_receipt(|r| r.total = None);
        assert_eq!(receipt.total, None);
        assert_eq!(receipt.token.len(), 8);
    }
}
