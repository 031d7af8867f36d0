//! Tag/length/value field encoding and parsing
//!
//! Every field is a 2-digit decimal tag, a 2-digit decimal length, and
//! exactly that many characters of value. A container field holds the
//! concatenation of already encoded sub-fields as its value.

use crate::error::TlvError;
use std::fmt::Write;

/// Largest value a 2-digit length prefix can describe
pub const MAX_VALUE_LEN: usize = 99;

/// A single decoded tag/length/value field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub tag: String,
    pub value: String,
}

/// Encode one TLV field.
///
/// # Errors
///
/// Returns `TlvError` if the tag is not a 2-digit decimal code or the value
/// exceeds [`MAX_VALUE_LEN`] characters.
///
/// # Example
///
/// ```rust
/// use brcode_emv::field;
///
/// assert_eq!(field("00", "01").unwrap(), "000201");
/// assert_eq!(field("59", "LOJA EXEMPLO").unwrap(), "5912LOJA EXEMPLO");
/// ```
pub fn field(tag: &str, value: &str) -> Result<String, TlvError> {
    if !is_tag(tag) {
        return Err(TlvError::InvalidTag(tag.to_string()));
    }

    let len = value.chars().count();
    if len > MAX_VALUE_LEN {
        return Err(TlvError::ValueTooLong {
            tag: tag.to_string(),
            len,
        });
    }

    let mut out = String::with_capacity(4 + value.len());
    push_field(&mut out, tag, value);
    Ok(out)
}

/// Append one encoded field to `out`.
///
/// The caller guarantees the tag is 2 decimal digits and the value fits in
/// a 2-digit length; the payload builder upholds this by normalizing every
/// free-form field before encoding.
pub(crate) fn push_field(out: &mut String, tag: &str, value: &str) {
    write!(out, "{tag}{:02}{value}", value.chars().count()).unwrap();
}

/// Parse a TLV string into its fields.
///
/// Reads 2-digit tag + 2-digit length + that many value characters,
/// repeatedly, until the input is exhausted. Values are not recursed into;
/// parse a container's value separately to walk its sub-fields.
///
/// # Errors
///
/// Returns `TlvError` if the input ends mid-field or a tag or length is not
/// decimal digits.
///
/// # Example
///
/// ```rust
/// use brcode_emv::parse;
///
/// let fields = parse("0002015802BR").unwrap();
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].tag, "00");
/// assert_eq!(fields[0].value, "01");
/// assert_eq!(fields[1].tag, "58");
/// assert_eq!(fields[1].value, "BR");
/// ```
pub fn parse(payload: &str) -> Result<Vec<TlvField>, TlvError> {
    let chars: Vec<char> = payload.chars().collect();
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < chars.len() {
        if offset + 4 > chars.len() {
            return Err(TlvError::UnexpectedEnd { offset });
        }

        let tag: String = chars[offset..offset + 2].iter().collect();
        if !is_tag(&tag) {
            return Err(TlvError::InvalidTag(tag));
        }

        let (Some(tens), Some(units)) = (
            chars[offset + 2].to_digit(10),
            chars[offset + 3].to_digit(10),
        ) else {
            return Err(TlvError::InvalidLength {
                tag,
                offset: offset + 2,
            });
        };
        let length = (tens * 10 + units) as usize;

        if offset + 4 + length > chars.len() {
            return Err(TlvError::UnexpectedEnd { offset: offset + 4 });
        }

        let value: String = chars[offset + 4..offset + 4 + length].iter().collect();
        fields.push(TlvField { tag, value });
        offset += 4 + length;
    }

    Ok(fields)
}

/// 2-digit decimal tag code
fn is_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.chars().all(|c| c.is_ascii_digit())
}
