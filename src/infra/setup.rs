use crate::{
    adapters::{
        email::resend::ResendEmailSender, http::app_state::AppState, paystack::PaystackClient,
    },
    infra::{config::AppConfig, http_client, postgres_persistence},
    use_cases::{
        payment_webhook::PaymentWebhookUseCases,
        pro_key::{ProKeyRepo, ProKeyUseCases},
        receipt::{ReceiptRepo, ReceiptUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(
        postgres_persistence(&config.database_url, config.database_max_connections).await?,
    );

    let email = Arc::new(ResendEmailSender::new(
        http_client::try_build_client()?,
        config.resend_api_key.clone(),
        config.email_from.clone(),
    ));

    let paystack = Arc::new(PaystackClient::new(
        http_client::try_build_client()?,
        config.paystack_secret_key.clone(),
        config.paystack_api_base.clone(),
    ));

    let pro_key_repo_arc = postgres_arc.clone() as Arc<dyn ProKeyRepo>;
    let receipt_repo_arc = postgres_arc.clone() as Arc<dyn ReceiptRepo>;

    let pro_key_use_cases = Arc::new(ProKeyUseCases::new(pro_key_repo_arc));

    let receipt_use_cases = ReceiptUseCases::new(receipt_repo_arc, pro_key_use_cases.clone());

    let payment_webhook_use_cases = PaymentWebhookUseCases::new(
        pro_key_use_cases.clone(),
        paystack,
        email,
        config.app_origin.to_string(),
    );

    Ok(AppState {
        config: Arc::new(config),
        pro_key_use_cases,
        receipt_use_cases: Arc::new(receipt_use_cases),
        payment_webhook_use_cases: Arc::new(payment_webhook_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wavy_receipts=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let (json_layer, file_error) = match File::create(log_file) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            ),
            None,
        ),
        Err(err) => (None, Some(err)),
    };

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .is_ok();

    if let (true, Some(err)) = (initialized, file_error) {
        tracing::warn!(log_file, error = %err, "JSON log file unavailable, logging to console only");
    }
}
