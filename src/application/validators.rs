use validator::ValidateEmail;

use crate::entities::receipt::RECEIPT_TOKEN_LEN;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// A public receipt token is exactly eight characters (not bytes).
pub fn is_valid_receipt_token(token: &str) -> bool {
    token.chars().count() == RECEIPT_TOKEN_LEN
}
