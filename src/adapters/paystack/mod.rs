//! Paystack REST client used to resolve the payer behind a transaction.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::payment_webhook::PaymentVerifier,
};

#[derive(Clone)]
pub struct PaystackClient {
    client: Client,
    secret_key: SecretString,
    api_base: Url,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    status: bool,
    data: Option<VerifyData>,
}

#[derive(Deserialize)]
struct VerifyData {
    customer: Option<VerifyCustomer>,
}

#[derive(Deserialize)]
struct VerifyCustomer {
    email: Option<String>,
}

impl PaystackClient {
    pub fn new(client: Client, secret_key: SecretString, api_base: Url) -> Self {
        Self {
            client,
            secret_key,
            api_base,
        }
    }

    /// `{api_base}/transaction/verify/{reference}` with the reference as a single
    /// escaped path segment.
    fn verify_url(&self, reference: &str) -> AppResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Paystack API base cannot be a base URL".into()))?
            .pop_if_empty()
            .extend(["transaction", "verify", reference]);
        Ok(url)
    }
}

#[async_trait]
impl PaymentVerifier for PaystackClient {
    async fn customer_email(&self, reference: &str) -> AppResult<Option<String>> {
        let url = self.verify_url(reference)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(self.secret_key.expose_secret())
            .send()
            .await
            .map_err(|e| AppError::PaymentProvider(format!("Failed to reach Paystack: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::PaymentProvider(format!(
                "Paystack API error: {}",
                status.as_u16()
            )));
        }

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AppError::PaymentProvider(format!("Malformed Paystack response: {e}")))?;

        if !body.status {
            tracing::warn!(reference, "Paystack did not confirm the transaction");
            return Ok(None);
        }

        let email = body
            .data
            .and_then(|d| d.customer)
            .and_then(|c| c.email)
            .filter(|e| !e.trim().is_empty());

        if email.is_none() {
            tracing::warn!(reference, "Paystack response carried no customer email");
        }
        Ok(email)
    }
}
