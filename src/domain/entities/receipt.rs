use chrono::{DateTime, Utc};

/// Length of the public token used to look a receipt up without a Pro Key.
pub const RECEIPT_TOKEN_LEN: usize = 8;

/// A stored receipt as returned to callers. The owning Pro Key is never exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub token: String,
    pub customer_name: Option<String>,
    pub date: Option<String>,
    /// Line items, opaque to the service.
    pub items: serde_json::Value,
    pub total: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload. `timestamp` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    pub token: String,
    pub customer_name: Option<String>,
    pub date: Option<String>,
    pub items: serde_json::Value,
    pub total: Option<f64>,
    pub pro_key: String,
}
