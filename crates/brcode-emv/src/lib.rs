//! # BR Code EMV
//!
//! Deterministic TLV payload assembly and CRC-16 checksumming for Pix
//! BR Code.
//!
//! This crate provides:
//! - Tag/length/value field encoding and parsing
//! - The table-driven CRC-16/CCITT-FALSE checksum engine
//! - The payload builder that turns a [`brcode_core::PaymentRequest`] into
//!   the final single-line BR Code string
//!
//! ## Payload grammar
//!
//! A payload is an ordered concatenation of TLV fields, each a 2-digit tag,
//! a 2-digit decimal length, and exactly that many characters of value.
//! The final field (tag `63`) carries the checksum of everything before it,
//! rendered as 4 uppercase hex digits.
//!
//! ## Example
//!
//! ```rust
//! use brcode_core::PaymentRequest;
//! use brcode_emv::{build_payload, verify_payload};
//!
//! let request = PaymentRequest {
//!     key: "11144477735".to_string(),
//!     merchant_name: "Loja Exemplo".to_string(),
//!     merchant_city: "Sao Paulo".to_string(),
//!     amount: None,
//!     transaction_id: None,
//!     description: None,
//! };
//!
//! let payload = build_payload(&request);
//! assert!(payload.starts_with("000201"));
//! assert!(verify_payload(&payload));
//! ```

mod crc;
mod error;
mod payload;
mod tlv;

pub use crc::*;
pub use error::*;
pub use payload::*;
pub use tlv::*;
