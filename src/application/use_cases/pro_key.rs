use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::entities::pro_key::{PRO_KEY_PREFIX, ProKey};

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait ProKeyRepo: Send + Sync {
    /// Returns the key only when exactly one row matches.
    async fn get_by_key(&self, key: &str) -> AppResult<Option<ProKey>>;

    /// Inserts an `active` key linked to a payment reference.
    async fn create_active(
        &self,
        key: &str,
        payment_reference: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<ProKey>;
}

// ============================================================================
// Types
// ============================================================================

pub const VALID_KEY_MESSAGE: &str = "Pro Key is valid";
pub const INVALID_KEY_MESSAGE: &str = "Invalid or inactive Pro Key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValidation {
    pub valid: bool,
    pub message: &'static str,
}

impl KeyValidation {
    fn valid() -> Self {
        Self {
            valid: true,
            message: VALID_KEY_MESSAGE,
        }
    }

    fn invalid() -> Self {
        Self {
            valid: false,
            message: INVALID_KEY_MESSAGE,
        }
    }
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct ProKeyUseCases {
    repo: Arc<dyn ProKeyRepo>,
}

impl ProKeyUseCases {
    pub fn new(repo: Arc<dyn ProKeyRepo>) -> Self {
        Self { repo }
    }

    /// Reports whether `key` names an active Pro Key.
    ///
    /// A missing key is an input error. Unknown or inactive keys, and lookups
    /// the store rejects, are a `valid: false` verdict. Only an unreachable
    /// store propagates.
    #[instrument(skip_all)]
    pub async fn validate_key(&self, key: Option<&str>) -> AppResult<KeyValidation> {
        let key = match key {
            Some(k) if !k.is_empty() => k,
            _ => return Err(AppError::InvalidInput("Pro Key is required".into())),
        };

        match self.repo.get_by_key(key).await {
            Ok(Some(found)) if found.status.is_active() => Ok(KeyValidation::valid()),
            Ok(Some(found)) => {
                tracing::debug!(
                    key_fingerprint = %key_fingerprint(key),
                    status = found.status.as_str(),
                    "Pro Key is not active"
                );
                Ok(KeyValidation::invalid())
            }
            Ok(None) | Err(AppError::NotFound) => Ok(KeyValidation::invalid()),
            Err(AppError::QueryFailed(reason)) => {
                tracing::warn!(%reason, "Pro Key lookup rejected by store");
                Ok(KeyValidation::invalid())
            }
            Err(err) => {
                tracing::error!(error = %err, "Error validating Pro Key");
                Err(err)
            }
        }
    }

    /// Resolves a bearer credential to an active Pro Key.
    ///
    /// Callers distinguish a missing credential (`MissingProKey`) from an
    /// unknown or inactive one (`InvalidProKey`). A rejected lookup counts as
    /// unknown; an unreachable store propagates.
    #[instrument(skip_all)]
    pub async fn authorize(&self, bearer: &str) -> AppResult<ProKey> {
        if bearer.is_empty() {
            return Err(AppError::MissingProKey);
        }

        match self.repo.get_by_key(bearer).await {
            Ok(Some(found)) if found.status.is_active() => Ok(found),
            Ok(_) | Err(AppError::NotFound) | Err(AppError::QueryFailed(_)) => {
                tracing::info!(
                    key_fingerprint = %key_fingerprint(bearer),
                    "Rejected invalid or inactive Pro Key"
                );
                Err(AppError::InvalidProKey)
            }
            Err(err) => Err(err),
        }
    }

    /// Mints a fresh key for a completed payment and stores it as active.
    #[instrument(skip(self))]
    pub async fn issue_for_payment(&self, payment_reference: &str) -> AppResult<ProKey> {
        let key = generate_pro_key();
        let created = self
            .repo
            .create_active(&key, payment_reference, Utc::now())
            .await
            .inspect_err(|err| {
                tracing::error!(error = %err, "Error inserting Pro Key");
            })?;

        tracing::info!(
            key_fingerprint = %key_fingerprint(&created.key),
            payment_reference,
            "Pro Key generated and stored"
        );
        Ok(created)
    }
}

// ============================================================================
// Key Generation
// ============================================================================

/// Generate a new Pro Key with format: WAVY-<8 hex>-<4 hex>, uppercase.
///
/// Draws 48 bits from the OS CSPRNG. Uniqueness against the store is not
/// checked.
pub fn generate_pro_key() -> String {
    let mut head = [0u8; 4];
    let mut tail = [0u8; 2];
    rand::rngs::OsRng.fill_bytes(&mut head);
    rand::rngs::OsRng.fill_bytes(&mut tail);
    format!(
        "{}-{}-{}",
        PRO_KEY_PREFIX,
        hex::encode_upper(head),
        hex::encode_upper(tail)
    )
}

/// Short SHA-256 fingerprint so logs can correlate keys without leaking them.
pub fn key_fingerprint(key: &str) -> String {
    let hash = Sha256::digest(key.as_bytes());
    hex::encode(&hash[..6])
}
