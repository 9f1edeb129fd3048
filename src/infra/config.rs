use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub cors_origin: HeaderValue,
    /// Public URL of the receipts frontend, linked from outgoing emails.
    pub app_origin: Url,
    pub resend_api_key: SecretString,
    /// Sender address for Pro Key emails.
    pub email_from: String,
    pub paystack_secret_key: SecretString,
    /// Paystack REST base; overridable for sandboxes and tests.
    pub paystack_api_base: Url,
    /// JSON log file. Console logging is always on.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3001)),
        );
        let database_url: String = get_env("DATABASE_URL");
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let app_origin: Url = get_env_default(
            "FRONTEND_URL",
            Url::parse("http://localhost:3000").expect("default frontend URL is valid"),
        );
        let resend_api_key = SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env("EMAIL_FROM");
        let paystack_secret_key =
            SecretString::new(get_env::<String>("PAYSTACK_SECRET_KEY").into());
        let paystack_api_base: Url = get_env_default(
            "PAYSTACK_API_BASE",
            Url::parse("https://api.paystack.co").expect("default Paystack URL is valid"),
        );
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bind_addr,
            database_url,
            database_max_connections,
            cors_origin,
            app_origin,
            resend_api_key,
            email_from,
            paystack_secret_key,
            paystack_api_base,
            log_file,
        }
    }
}
