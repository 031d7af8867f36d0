//! Text normalization for BR Code fields
//!
//! Free-form merchant input is reduced to the restricted subset the payload
//! format allows: upper-case ASCII letters, digits, and spaces.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize free-form text into the BR Code character set.
///
/// Steps, in order: decompose accented characters and drop the combining
/// marks, remove everything that is not an ASCII letter, digit, or space,
/// truncate to `max_length` characters, upper-case.
///
/// Total over arbitrary input; the result may be empty.
///
/// # Example
///
/// ```rust
/// use brcode_core::normalize;
///
/// assert_eq!(normalize("José da Silva", 25), "JOSE DA SILVA");
/// assert_eq!(normalize("Açaí & Cia.", 25), "ACAI  CIA");
/// assert_eq!(normalize("abcdef", 3), "ABC");
/// ```
pub fn normalize(text: &str, max_length: usize) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .take(max_length)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("José", 25), "JOSE");
        assert_eq!(normalize("São Paulo", 25), "SAO PAULO");
        assert_eq!(normalize("açúcar", 25), "ACUCAR");
    }

    #[test]
    fn test_removes_symbols() {
        assert_eq!(normalize("Loja & Cia. Ltda!", 30), "LOJA  CIA LTDA");
        assert_eq!(normalize("a-b_c", 10), "ABC");
    }

    #[test]
    fn test_truncates_by_character_count() {
        let name = normalize("José da Silva Pereira Costa Junior", 25);
        assert_eq!(name, "JOSE DA SILVA PEREIRA COS");
        assert_eq!(name.chars().count(), 25);
    }

    #[test]
    fn test_truncation_happens_after_filtering() {
        // Dropped characters do not count toward the length limit
        assert_eq!(normalize("é!é!é!", 3), "EEE");
    }

    #[test]
    fn test_output_character_set() {
        let out = normalize("Päyér #42 / São João!", 72);
        assert!(out
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' '));
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize("", 25), "");
        assert_eq!(normalize("!!!###", 25), "");
    }

    #[test]
    fn test_non_latin_text_is_dropped() {
        assert_eq!(normalize("日本語", 25), "");
    }
}
