//! # BR Code Core
//!
//! Core types and validation for Pix BR Code payment requests.
//!
//! This crate provides:
//! - Type definitions for payment requests and Pix key classification
//! - Ordered-rule key classification and per-type canonical formatting
//! - Text normalization into the restricted character set BR Code allows
//! - Input validation for callers that want to reject malformed requests
//!
//! ## Example
//!
//! ```rust
//! use brcode_core::{classify_key, format_key, KeyType};
//!
//! let key_type = classify_key("Fulano@Example.com");
//! assert_eq!(key_type, KeyType::Email);
//! assert_eq!(format_key("Fulano@Example.com", key_type), "fulano@example.com");
//! ```

pub mod key;
pub mod text;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use key::*;
pub use text::*;
pub use types::*;
pub use validation::*;
