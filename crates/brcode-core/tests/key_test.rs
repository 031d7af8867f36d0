//! Key classification tests over the public API

use brcode_core::{classify_key, format_key, is_valid_key, KeyType};

#[test]
fn test_cpf_shape_without_check_digits() {
    // Shape and uniformity only; no modulo-11 arithmetic is applied
    assert_eq!(classify_key("11144477735"), KeyType::Cpf);
    assert_eq!(classify_key("12345678901"), KeyType::Cpf);
}

#[test]
fn test_repeated_digit_runs_are_rejected() {
    // Eleven identical digits fall through to the phone rule
    assert_eq!(classify_key("11111111111"), KeyType::Phone);
    assert_eq!(classify_key("99999999999999"), KeyType::Unknown);
}

#[test]
fn test_email_key() {
    assert_eq!(classify_key("a@b.com"), KeyType::Email);
}

#[test]
fn test_random_key() {
    assert_eq!(
        classify_key("123e4567-e89b-12d3-a456-426614174000"),
        KeyType::Random
    );
}

#[test]
fn test_phone_key() {
    assert_eq!(classify_key("+5511987654321"), KeyType::Phone);
}

#[test]
fn test_rule_order_resolves_overlaps() {
    // Eleven non-identical digits hit the CPF rule before the phone rule,
    // even for strings that look like bare mobile numbers
    assert_eq!(classify_key("11987654321"), KeyType::Cpf);
}

#[test]
fn test_formatting_follows_classification() {
    let raw = "+55 (11) 98765-4321";
    let key_type = classify_key(raw);
    assert_eq!(key_type, KeyType::Phone);
    assert_eq!(format_key(raw, key_type), "+5511987654321");
}

#[test]
fn test_validity_helper() {
    assert!(is_valid_key("11144477735"));
    assert!(!is_valid_key(""));
    assert!(!is_valid_key("not a key"));
}
