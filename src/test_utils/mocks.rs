//! In-memory mock implementations for repository traits and external ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::email_templates::EmailContent,
    application::use_cases::{
        payment_webhook::{EmailSender, PaymentVerifier},
        pro_key::ProKeyRepo,
        receipt::ReceiptRepo,
    },
    entities::{
        pro_key::{ProKey, ProKeyStatus},
        receipt::{NewReceipt, Receipt},
    },
};

// ============================================================================
// Pro Keys
// ============================================================================

/// In-memory implementation of ProKeyRepo for testing.
#[derive(Default)]
pub struct InMemoryProKeyRepo {
    pub keys: Mutex<Vec<ProKey>>,
    fail_lookups: AtomicBool,
    reject_lookups: AtomicBool,
    fail_inserts: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryProKeyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial keys for testing.
    pub fn with_keys(keys: Vec<ProKey>) -> Self {
        Self {
            keys: Mutex::new(keys),
            ..Self::default()
        }
    }

    /// Make every lookup fail as if the store were unreachable.
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// Make every lookup fail as if the store rejected the query.
    pub fn reject_lookups(&self) {
        self.reject_lookups.store(true, Ordering::SeqCst);
    }

    /// Make every insert fail.
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    /// Number of lookups issued so far (for asserting "never reached the store").
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Get all keys (for test assertions).
    pub fn get_all(&self) -> Vec<ProKey> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProKeyRepo for InMemoryProKeyRepo {
    async fn get_by_key(&self, key: &str) -> AppResult<Option<ProKey>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }
        if self.reject_lookups.load(Ordering::SeqCst) {
            return Err(AppError::QueryFailed("Database query failed".into()));
        }

        let keys = self.keys.lock().unwrap();
        let mut matches = keys.iter().filter(|k| k.key == key);
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found.clone())),
            _ => Ok(None),
        }
    }

    async fn create_active(
        &self,
        key: &str,
        payment_reference: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<ProKey> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let created = ProKey {
            key: key.to_string(),
            status: ProKeyStatus::Active,
            payment_reference: Some(payment_reference.to_string()),
            created_at: Some(created_at),
        };
        self.keys.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// Receipts
// ============================================================================

/// In-memory implementation of ReceiptRepo. Rows are stored as (pro_key, receipt).
#[derive(Default)]
pub struct InMemoryReceiptRepo {
    pub receipts: Mutex<Vec<(String, Receipt)>>,
    fail_lookups: AtomicBool,
    reject_lookups: AtomicBool,
    fail_inserts: AtomicBool,
}

impl InMemoryReceiptRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_receipts(receipts: Vec<(String, Receipt)>) -> Self {
        Self {
            receipts: Mutex::new(receipts),
            ..Self::default()
        }
    }

    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub fn reject_lookups(&self) {
        self.reject_lookups.store(true, Ordering::SeqCst);
    }

    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn get_all(&self) -> Vec<(String, Receipt)> {
        self.receipts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReceiptRepo for InMemoryReceiptRepo {
    async fn create(&self, receipt: &NewReceipt) -> AppResult<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let stored = Receipt {
            token: receipt.token.clone(),
            customer_name: receipt.customer_name.clone(),
            date: receipt.date.clone(),
            items: receipt.items.clone(),
            total: receipt.total,
            timestamp: Utc::now(),
        };
        self.receipts
            .lock()
            .unwrap()
            .push((receipt.pro_key.clone(), stored));
        Ok(())
    }

    async fn list_by_pro_key(&self, pro_key: &str) -> AppResult<Vec<Receipt>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }
        if self.reject_lookups.load(Ordering::SeqCst) {
            return Err(AppError::QueryFailed("Database query failed".into()));
        }

        let mut owned: Vec<Receipt> = self
            .receipts
            .lock()
            .unwrap()
            .iter()
            .filter(|(key, _)| key == pro_key)
            .map(|(_, r)| r.clone())
            .collect();
        owned.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(owned)
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Option<Receipt>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }
        if self.reject_lookups.load(Ordering::SeqCst) {
            return Err(AppError::QueryFailed("Database query failed".into()));
        }

        let receipts = self.receipts.lock().unwrap();
        let mut matches = receipts.iter().filter(|(_, r)| r.token == token);
        match (matches.next(), matches.next()) {
            (Some((_, found)), None) => Ok(Some(found.clone())),
            _ => Ok(None),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Email sender that records messages instead of delivering them.
#[derive(Default)]
pub struct InMemoryEmailSender {
    emails: Mutex<Vec<CapturedEmail>>,
    fail_sends: AtomicBool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail as if the provider rejected it.
    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, email: &EmailContent) -> AppResult<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(AppError::Internal("Email API error: 503".into()));
        }

        self.emails.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: email.subject.clone(),
            text: email.text.clone(),
            html: email.html.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// Payment provider
// ============================================================================

enum VerifierBehavior {
    Email(String),
    NoEmail,
    Fail,
}

/// Payment verifier with a fixed answer for every reference.
pub struct StubPaymentVerifier {
    behavior: VerifierBehavior,
    calls: AtomicUsize,
}

impl StubPaymentVerifier {
    fn new(behavior: VerifierBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_email(email: &str) -> Self {
        Self::new(VerifierBehavior::Email(email.to_string()))
    }

    pub fn without_email() -> Self {
        Self::new(VerifierBehavior::NoEmail)
    }

    pub fn failing() -> Self {
        Self::new(VerifierBehavior::Fail)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentVerifier for StubPaymentVerifier {
    async fn customer_email(&self, _reference: &str) -> AppResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            VerifierBehavior::Email(email) => Ok(Some(email.clone())),
            VerifierBehavior::NoEmail => Ok(None),
            VerifierBehavior::Fail => Err(AppError::PaymentProvider(
                "Paystack API error: 500".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_pro_key, create_test_receipt};

    #[tokio::test]
    async fn duplicate_keys_do_not_resolve_to_a_single_row() {
        let repo = InMemoryProKeyRepo::with_keys(vec![
            create_test_pro_key(|_| {}),
            create_test_pro_key(|_| {}),
        ]);

        let found = repo.get_by_key("WAVY-12345678-9ABC").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_tokens_do_not_resolve_to_a_single_row() {
        let repo = InMemoryReceiptRepo::with_receipts(vec![
            ("k1".to_string(), create_test_receipt(|_| {})),
            ("k2".to_string(), create_test_receipt(|_| {})),
        ]);

        let found = repo.get_by_token("abcd1234").await.unwrap();

        assert!(found.is_none());
    }
}
