use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::email_templates::{EmailContent, pro_key_email};
use crate::application::use_cases::pro_key::{ProKeyUseCases, key_fingerprint};
use crate::application::validators::is_valid_email;

/// Looks up details of a completed transaction at the payment provider.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Payer email for `reference`, or `None` when the provider has none on file.
    async fn customer_email(&self, reference: &str) -> AppResult<Option<String>>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, email: &EmailContent) -> AppResult<()>;
}

/// Status value the payment provider sends for a settled payment.
pub const PAYMENT_SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Key stored and emailed to the payer.
    KeyDelivered { key: String, email: String },
    /// Key stored, but no payer email could be resolved.
    KeyStoredWithoutEmail { key: String },
}

#[derive(Clone)]
pub struct PaymentWebhookUseCases {
    pro_keys: Arc<ProKeyUseCases>,
    verifier: Arc<dyn PaymentVerifier>,
    email: Arc<dyn EmailSender>,
    app_origin: String,
}

impl PaymentWebhookUseCases {
    pub fn new(
        pro_keys: Arc<ProKeyUseCases>,
        verifier: Arc<dyn PaymentVerifier>,
        email: Arc<dyn EmailSender>,
        app_origin: String,
    ) -> Self {
        Self {
            pro_keys,
            verifier,
            email,
            app_origin,
        }
    }

    /// Turns a successful-payment notification into a delivered Pro Key.
    ///
    /// Failing to resolve the payer email is logged and still acknowledged, so
    /// the provider does not redeliver. Failing to send the email is fatal.
    #[instrument(skip(self))]
    pub async fn handle_notification(
        &self,
        reference: Option<&str>,
        status: Option<&str>,
    ) -> AppResult<WebhookOutcome> {
        let reference = match (reference, status) {
            (Some(r), Some(PAYMENT_SUCCESS_STATUS)) if !r.is_empty() => r,
            _ => {
                tracing::warn!("Invalid callback or payment not successful");
                return Err(AppError::InvalidInput("Bad Request".into()));
            }
        };

        let pro_key = self.pro_keys.issue_for_payment(reference).await?;

        let Some(customer_email) = self.resolve_customer_email(reference).await else {
            tracing::error!(
                payment_reference = reference,
                "Could not retrieve customer email for reference"
            );
            return Ok(WebhookOutcome::KeyStoredWithoutEmail { key: pro_key.key });
        };

        let content = pro_key_email(&self.app_origin, &pro_key.key);
        self.email
            .send(&customer_email, &content)
            .await
            .inspect_err(|err| {
                tracing::error!(
                    error = %err,
                    payment_reference = reference,
                    "Error sending Pro Key email"
                );
            })?;

        tracing::info!(
            key_fingerprint = %key_fingerprint(&pro_key.key),
            to = %customer_email,
            "Pro Key sent"
        );

        Ok(WebhookOutcome::KeyDelivered {
            key: pro_key.key,
            email: customer_email,
        })
    }

    async fn resolve_customer_email(&self, reference: &str) -> Option<String> {
        match self.verifier.customer_email(reference).await {
            Ok(Some(email)) if is_valid_email(&email) => Some(email.trim().to_string()),
            Ok(Some(email)) => {
                tracing::warn!(email = %email, "Payment provider returned an unusable email");
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::error!(error = %err, "Error fetching customer email from payment provider");
                None
            }
        }
    }
}
