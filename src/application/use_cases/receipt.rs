use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::use_cases::pro_key::ProKeyUseCases;
use crate::application::validators::is_valid_receipt_token;
use crate::entities::receipt::{NewReceipt, Receipt};

#[async_trait]
pub trait ReceiptRepo: Send + Sync {
    async fn create(&self, receipt: &NewReceipt) -> AppResult<()>;

    /// All receipts owned by `pro_key`, newest `timestamp` first.
    async fn list_by_pro_key(&self, pro_key: &str) -> AppResult<Vec<Receipt>>;

    /// Returns the receipt only when exactly one row matches.
    async fn get_by_token(&self, token: &str) -> AppResult<Option<Receipt>>;
}

/// Caller-supplied receipt fields, before the owning key is attached.
#[derive(Debug, Clone, Default)]
pub struct ReceiptInput {
    pub token: Option<String>,
    pub customer_name: Option<String>,
    pub date: Option<String>,
    pub items: serde_json::Value,
    pub total: Option<f64>,
}

#[derive(Clone)]
pub struct ReceiptUseCases {
    receipt_repo: Arc<dyn ReceiptRepo>,
    pro_keys: Arc<ProKeyUseCases>,
}

impl ReceiptUseCases {
    pub fn new(receipt_repo: Arc<dyn ReceiptRepo>, pro_keys: Arc<ProKeyUseCases>) -> Self {
        Self {
            receipt_repo,
            pro_keys,
        }
    }

    /// Saves a receipt under the caller's Pro Key.
    ///
    /// Input is checked before the key is looked up, so malformed requests
    /// never touch the store.
    #[instrument(skip_all)]
    pub async fn save_receipt(&self, bearer: &str, input: ReceiptInput) -> AppResult<()> {
        if bearer.is_empty() {
            return Err(AppError::MissingProKey);
        }

        let token = match input.token {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(AppError::InvalidInput("Receipt token is required".into())),
        };

        let pro_key = self.pro_keys.authorize(bearer).await?;

        let receipt = NewReceipt {
            token,
            customer_name: input.customer_name,
            date: input.date,
            items: input.items,
            total: input.total,
            pro_key: pro_key.key,
        };

        self.receipt_repo
            .create(&receipt)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Error saving receipt"))
    }

    /// Lists the caller's receipts, newest first. An empty list is not an error.
    #[instrument(skip_all)]
    pub async fn list_receipts(&self, bearer: &str) -> AppResult<Vec<Receipt>> {
        let pro_key = self.pro_keys.authorize(bearer).await?;

        self.receipt_repo
            .list_by_pro_key(&pro_key.key)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Error fetching receipts"))
    }

    /// Public lookup by token. Possession of the token is the only access check.
    ///
    /// Any failure of the single-row fetch reads as not found.
    #[instrument(skip(self))]
    pub async fn get_by_token(&self, token: Option<&str>) -> AppResult<Receipt> {
        let token = match token {
            Some(t) if is_valid_receipt_token(t) => t,
            _ => return Err(AppError::InvalidInput("Invalid token".into())),
        };

        match self.receipt_repo.get_by_token(token).await {
            Ok(Some(receipt)) => Ok(receipt),
            Ok(None) => Err(AppError::NotFound),
            Err(err) => {
                tracing::warn!(error = %err, "Error fetching receipt by token");
                Err(AppError::NotFound)
            }
        }
    }
}
