//! BR Code Core Types
//!
//! Type definitions shared by the classification, validation, and payload
//! assembly layers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Semantic shape of a Pix key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
    Unknown,
}

impl KeyType {
    /// Display label for the key type, in Portuguese as shown to payers.
    ///
    /// Not semantically load-bearing; the payload never contains it.
    pub fn label(&self) -> &'static str {
        match self {
            KeyType::Cpf => "CPF",
            KeyType::Cnpj => "CNPJ",
            KeyType::Email => "E-mail",
            KeyType::Phone => "Telefone",
            KeyType::Random => "Chave Aleatória",
            KeyType::Unknown => "Desconhecido",
        }
    }
}

/// A merchant payment request, the sole input of the payload builder.
///
/// The builder never mutates a request; every field is read, sanitized into
/// a fresh string, and discarded within the same call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    pub key: String,
    pub merchant_name: String,
    pub merchant_city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
