pub mod payment_webhook;
pub mod pro_key;
pub mod receipt;
