use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        payment_webhook::PaymentWebhookUseCases, pro_key::ProKeyUseCases,
        receipt::ReceiptUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pro_key_use_cases: Arc<ProKeyUseCases>,
    pub receipt_use_cases: Arc<ReceiptUseCases>,
    pub payment_webhook_use_cases: Arc<PaymentWebhookUseCases>,
}
