//! BR Code payload assembly
//!
//! Turns a [`PaymentRequest`] into the final single-line payload: classify
//! and format the key, normalize the free-form fields, emit the TLV
//! sequence in its fixed order, and append the tag-63 checksum.

use crate::crc::checksum;
use crate::tlv::push_field;
use brcode_core::{classify_key, format_key, normalize, PaymentRequest};
use rust_decimal::Decimal;

/// Fixed scheme identifier carried inside the merchant account group
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Merchant name substituted when normalization yields nothing
pub const MERCHANT_NAME_FALLBACK: &str = "RECEBEDOR";

/// Merchant city substituted when normalization yields nothing
pub const MERCHANT_CITY_FALLBACK: &str = "SAO PAULO";

/// Transaction id placeholder for static payloads without one
pub const TXID_PLACEHOLDER: &str = "***";

const MAX_DESCRIPTION_LEN: usize = 72;
const MAX_MERCHANT_NAME_LEN: usize = 25;
const MAX_MERCHANT_CITY_LEN: usize = 15;
const MAX_TXID_LEN: usize = 25;

/// Build the BR Code payload for a payment request.
///
/// Deterministic and total: every field has a defined default or omission
/// rule, so this never fails for a structurally valid request. Callers that
/// want to reject unrecognized keys or non-positive amounts up front use
/// [`brcode_core::validate_request`] first.
///
/// # Example
///
/// ```rust
/// use brcode_core::PaymentRequest;
/// use brcode_emv::build_payload;
///
/// let request = PaymentRequest {
///     key: "111.444.777-35".to_string(),
///     merchant_name: "Loja Exemplo".to_string(),
///     merchant_city: "Sao Paulo".to_string(),
///     amount: None,
///     transaction_id: None,
///     description: None,
/// };
///
/// assert_eq!(
///     build_payload(&request),
///     "00020126330014BR.GOV.BCB.PIX0111111444777355204000053039865802BR\
///      5912LOJA EXEMPLO6009SAO PAULO62070503***63048C35"
/// );
/// ```
pub fn build_payload(request: &PaymentRequest) -> String {
    let key_type = classify_key(&request.key);
    let key = format_key(&request.key, key_type);

    // Tag 26 - merchant account information (Pix)
    let mut account = String::new();
    push_field(&mut account, "00", PIX_GUI);
    push_field(&mut account, "01", &key);
    if let Some(description) = &request.description {
        let description = normalize(description, MAX_DESCRIPTION_LEN);
        if !description.is_empty() {
            push_field(&mut account, "02", &description);
        }
    }

    let mut payload = String::new();

    // Tag 00 - payload format indicator
    push_field(&mut payload, "00", "01");
    push_field(&mut payload, "26", &account);

    // Tag 52 - merchant category code, tag 53 - currency (986 = BRL)
    push_field(&mut payload, "52", "0000");
    push_field(&mut payload, "53", "986");

    // Tag 54 - amount, omitted entirely unless positive
    if let Some(amount) = request.amount {
        if amount > Decimal::ZERO {
            push_field(&mut payload, "54", &format!("{amount:.2}"));
        }
    }

    // Tag 58 - country code
    push_field(&mut payload, "58", "BR");

    let name = normalize(&request.merchant_name, MAX_MERCHANT_NAME_LEN);
    push_field(
        &mut payload,
        "59",
        if name.is_empty() {
            MERCHANT_NAME_FALLBACK
        } else {
            name.as_str()
        },
    );

    let city = normalize(&request.merchant_city, MAX_MERCHANT_CITY_LEN);
    push_field(
        &mut payload,
        "60",
        if city.is_empty() {
            MERCHANT_CITY_FALLBACK
        } else {
            city.as_str()
        },
    );

    // Tag 62 - additional data, nested tag 05 transaction id
    let transaction_id = request
        .transaction_id
        .as_deref()
        .map(|id| normalize(id, MAX_TXID_LEN))
        .unwrap_or_default();
    let mut additional = String::new();
    push_field(
        &mut additional,
        "05",
        if transaction_id.is_empty() {
            TXID_PLACEHOLDER
        } else {
            transaction_id.as_str()
        },
    );
    push_field(&mut payload, "62", &additional);

    // Tag 63 - the checksum covers everything up to and including its own
    // tag and length
    payload.push_str("6304");
    let crc = checksum(&payload);
    payload.push_str(&crc);

    payload
}
