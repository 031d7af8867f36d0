//! Payment request validation
//!
//! The payload builder is total and never rejects a request, so anything a
//! caller wants surfaced as a user-facing failure must be checked before
//! building. This module is that check.

use crate::key::classify_key;
use crate::types::{KeyType, PaymentRequest};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during request validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pix key is blank")]
    BlankKey,

    #[error("'{0}' does not match any recognized Pix key shape")]
    UnknownKeyType(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

/// Validate a payment request before building a payload from it.
///
/// # Errors
///
/// Returns `ValidationError` if the key is blank or unrecognized, or if an
/// amount is present but not positive.
///
/// # Example
///
/// ```rust
/// use brcode_core::{validate_request, PaymentRequest};
///
/// let request = PaymentRequest {
///     key: "a@b.com".to_string(),
///     merchant_name: "Loja".to_string(),
///     merchant_city: "Recife".to_string(),
///     amount: None,
///     transaction_id: None,
///     description: None,
/// };
/// assert!(validate_request(&request).is_ok());
/// ```
pub fn validate_request(request: &PaymentRequest) -> Result<(), ValidationError> {
    validate_key(&request.key)?;
    validate_amount(request)?;
    Ok(())
}

/// Validate the key field
fn validate_key(key: &str) -> Result<(), ValidationError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankKey);
    }
    if classify_key(key) == KeyType::Unknown {
        return Err(ValidationError::UnknownKeyType(trimmed.to_string()));
    }
    Ok(())
}

/// Validate the amount field, if present
fn validate_amount(request: &PaymentRequest) -> Result<(), ValidationError> {
    if let Some(amount) = request.amount {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
    }
    Ok(())
}
