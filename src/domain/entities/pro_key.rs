use chrono::{DateTime, Utc};

/// Every issued key starts with this prefix: `WAVY-XXXXXXXX-XXXX`.
pub const PRO_KEY_PREFIX: &str = "WAVY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProKeyStatus {
    Active,
    /// Any stored status other than `active`, kept verbatim.
    Inactive(String),
}

impl ProKeyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProKeyStatus::Active => "active",
            ProKeyStatus::Inactive(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => ProKeyStatus::Active,
            other => ProKeyStatus::Inactive(other.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProKeyStatus::Active)
    }
}

#[derive(Debug, Clone)]
pub struct ProKey {
    pub key: String,
    pub status: ProKeyStatus,
    pub payment_reference: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Checks the `WAVY-` + 8 uppercase hex + `-` + 4 uppercase hex shape.
pub fn is_well_formed_pro_key(key: &str) -> bool {
    let mut parts = key.split('-');
    let (Some(prefix), Some(first), Some(second), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let upper_hex = |s: &str| s.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'));

    prefix == PRO_KEY_PREFIX
        && first.len() == 8
        && second.len() == 4
        && upper_hex(first)
        && upper_hex(second)
}
