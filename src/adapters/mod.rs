pub mod email;
pub mod http;
pub mod paystack;
pub mod persistence;
