//! Error types for BR Code EMV

use thiserror::Error;

/// Errors that can occur while encoding or parsing TLV fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("Tag '{0}' is not a 2-digit decimal code")]
    InvalidTag(String),

    #[error("Value for tag '{tag}' is {len} characters, above the 99-character TLV limit")]
    ValueTooLong { tag: String, len: usize },

    #[error("Payload truncated at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("Length of tag '{tag}' at offset {offset} is not 2 decimal digits")]
    InvalidLength { tag: String, offset: usize },
}
