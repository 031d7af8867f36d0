//! Pix key classification and formatting
//!
//! A key is an opaque string whose semantic type is recovered by shape
//! alone. Classification is an ordered decision list; the first matching
//! rule wins, and that order is part of the contract. CPF/CNPJ acceptance
//! is a shape-plus-uniformity heuristic, not a check-digit algorithm.

use crate::types::KeyType;
use uuid::Uuid;

/// Classify a raw key string into its semantic type.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. exactly 11 digits, not all identical: CPF
/// 2. exactly 14 digits, not all identical: CNPJ
/// 3. 10 to 13 digits: phone number
/// 4. `local@domain.tld` shape: e-mail
/// 5. canonical hyphenated UUID: random (system-assigned) key
///
/// Anything else is [`KeyType::Unknown`].
///
/// # Example
///
/// ```rust
/// use brcode_core::{classify_key, KeyType};
///
/// assert_eq!(classify_key("111.444.777-35"), KeyType::Cpf);
/// assert_eq!(classify_key("a@b.com"), KeyType::Email);
/// assert_eq!(classify_key("nao-e-chave"), KeyType::Unknown);
/// ```
pub fn classify_key(raw: &str) -> KeyType {
    let trimmed = raw.trim();
    let digits = digits_of(trimmed);

    if digits.len() == 11 && !all_identical(&digits) {
        return KeyType::Cpf;
    }

    if digits.len() == 14 && !all_identical(&digits) {
        return KeyType::Cnpj;
    }

    if (10..=13).contains(&digits.len()) {
        return KeyType::Phone;
    }

    if is_email_shape(trimmed) {
        return KeyType::Email;
    }

    if is_uuid_shape(trimmed) {
        return KeyType::Random;
    }

    KeyType::Unknown
}

/// Reformat a key canonically for its classified type.
///
/// - CPF/CNPJ keep digits only
/// - phone numbers become `+55` followed by the digits (the `55` country
///   prefix is prepended when missing)
/// - e-mail and random keys are trimmed and lower-cased
/// - unknown keys pass through trimmed, unchanged
pub fn format_key(raw: &str, key_type: KeyType) -> String {
    let trimmed = raw.trim();

    match key_type {
        KeyType::Cpf | KeyType::Cnpj => digits_of(trimmed),
        KeyType::Phone => {
            let digits = digits_of(trimmed);
            if digits.starts_with("55") {
                format!("+{digits}")
            } else {
                format!("+55{digits}")
            }
        }
        KeyType::Email | KeyType::Random => trimmed.to_lowercase(),
        KeyType::Unknown => trimmed.to_string(),
    }
}

/// Whether a raw string is usable as a Pix key.
///
/// True iff it classifies as something other than [`KeyType::Unknown`] and
/// is not blank.
pub fn is_valid_key(raw: &str) -> bool {
    !raw.trim().is_empty() && classify_key(raw) != KeyType::Unknown
}

/// Digits of `s`, in order, everything else stripped
fn digits_of(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// True for the placeholder runs like `11111111111` that CPF/CNPJ reject
fn all_identical(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace on either side, and an
/// interior dot in the domain
fn is_email_shape(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Canonical 8-4-4-4-12 hyphenated UUID, case-insensitive.
///
/// The length guard pins the hyphenated form; `Uuid::parse_str` alone also
/// accepts the 32-character simple form, which is not a valid random key.
fn is_uuid_shape(s: &str) -> bool {
    s.len() == 36 && Uuid::parse_str(s).is_ok()
}
