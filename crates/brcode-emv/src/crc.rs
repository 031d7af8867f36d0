//! CRC-16/CCITT-FALSE checksum engine
//!
//! Polynomial 0x1021, initial register 0xFFFF, table-driven, one byte per
//! step. The table is the standard CCITT table, not the reciprocal one.

/// Precomputed lookup table for polynomial 0x1021
static CRC16_TABLE: [u16; 256] = [
    0x0000, 0x1021, 0x2042, 0x3063, 0x4084, 0x50A5, 0x60C6, 0x70E7,
    0x8108, 0x9129, 0xA14A, 0xB16B, 0xC18C, 0xD1AD, 0xE1CE, 0xF1EF,
    0x1231, 0x0210, 0x3273, 0x2252, 0x52B5, 0x4294, 0x72F7, 0x62D6,
    0x9339, 0x8318, 0xB37B, 0xA35A, 0xD3BD, 0xC39C, 0xF3FF, 0xE3DE,
    0x2462, 0x3443, 0x0420, 0x1401, 0x64E6, 0x74C7, 0x44A4, 0x5485,
    0xA56A, 0xB54B, 0x8528, 0x9509, 0xE5EE, 0xF5CF, 0xC5AC, 0xD58D,
    0x3653, 0x2672, 0x1611, 0x0630, 0x76D7, 0x66F6, 0x5695, 0x46B4,
    0xB75B, 0xA77A, 0x9719, 0x8738, 0xF7DF, 0xE7FE, 0xD79D, 0xC7BC,
    0x48C4, 0x58E5, 0x6886, 0x78A7, 0x0840, 0x1861, 0x2802, 0x3823,
    0xC9CC, 0xD9ED, 0xE98E, 0xF9AF, 0x8948, 0x9969, 0xA90A, 0xB92B,
    0x5AF5, 0x4AD4, 0x7AB7, 0x6A96, 0x1A71, 0x0A50, 0x3A33, 0x2A12,
    0xDBFD, 0xCBDC, 0xFBBF, 0xEB9E, 0x9B79, 0x8B58, 0xBB3B, 0xAB1A,
    0x6CA6, 0x7C87, 0x4CE4, 0x5CC5, 0x2C22, 0x3C03, 0x0C60, 0x1C41,
    0xEDAE, 0xFD8F, 0xCDEC, 0xDDCD, 0xAD2A, 0xBD0B, 0x8D68, 0x9D49,
    0x7E97, 0x6EB6, 0x5ED5, 0x4EF4, 0x3E13, 0x2E32, 0x1E51, 0x0E70,
    0xFF9F, 0xEFBE, 0xDFDD, 0xCFFC, 0xBF1B, 0xAF3A, 0x9F59, 0x8F78,
    0x9188, 0x81A9, 0xB1CA, 0xA1EB, 0xD10C, 0xC12D, 0xF14E, 0xE16F,
    0x1080, 0x00A1, 0x30C2, 0x20E3, 0x5004, 0x4025, 0x7046, 0x6067,
    0x83B9, 0x9398, 0xA3FB, 0xB3DA, 0xC33D, 0xD31C, 0xE37F, 0xF35E,
    0x02B1, 0x1290, 0x22F3, 0x32D2, 0x4235, 0x5214, 0x6277, 0x7256,
    0xB5EA, 0xA5CB, 0x95A8, 0x8589, 0xF56E, 0xE54F, 0xD52C, 0xC50D,
    0x34E2, 0x24C3, 0x14A0, 0x0481, 0x7466, 0x6447, 0x5424, 0x4405,
    0xA7DB, 0xB7FA, 0x8799, 0x97B8, 0xE75F, 0xF77E, 0xC71D, 0xD73C,
    0x26D3, 0x36F2, 0x0691, 0x16B0, 0x6657, 0x7676, 0x4615, 0x5634,
    0xD94C, 0xC96D, 0xF90E, 0xE92F, 0x99C8, 0x89E9, 0xB98A, 0xA9AB,
    0x5844, 0x4865, 0x7806, 0x6827, 0x18C0, 0x08E1, 0x3882, 0x28A3,
    0xCB7D, 0xDB5C, 0xEB3F, 0xFB1E, 0x8BF9, 0x9BD8, 0xABBB, 0xBB9A,
    0x4A75, 0x5A54, 0x6A37, 0x7A16, 0x0AF1, 0x1AD0, 0x2AB3, 0x3A92,
    0xFD2E, 0xED0F, 0xDD6C, 0xCD4D, 0xBDAA, 0xAD8B, 0x9DE8, 0x8DC9,
    0x7C26, 0x6C07, 0x5C64, 0x4C45, 0x3CA2, 0x2C83, 0x1CE0, 0x0CC1,
    0xEF1F, 0xFF3E, 0xCF5D, 0xDF7C, 0xAF9B, 0xBFBA, 0x8FD9, 0x9FF8,
    0x6E17, 0x7E36, 0x4E55, 0x5E74, 0x2E93, 0x3EB2, 0x0ED1, 0x1EF0,
];

/// Compute the CRC-16/CCITT-FALSE checksum of a string.
///
/// Returns the final register as 4 uppercase hex digits, zero-padded.
/// Input is processed byte-wise; payloads are ASCII by construction, where
/// bytes and characters coincide.
///
/// # Example
///
/// ```rust
/// use brcode_emv::checksum;
///
/// assert_eq!(checksum(""), "FFFF");
/// assert_eq!(checksum("123456789"), "29B1");
/// ```
pub fn checksum(text: &str) -> String {
    let mut crc: u16 = 0xFFFF;

    for byte in text.bytes() {
        let index = ((crc >> 8) ^ u16::from(byte)) & 0xFF;
        crc = (crc << 8) ^ CRC16_TABLE[index as usize];
    }

    format!("{crc:04X}")
}

/// Verify that a payload's trailing checksum matches its body.
///
/// Recomputes the checksum over everything but the last 4 characters and
/// compares. Returns `false` for anything shorter than 4 characters.
///
/// # Example
///
/// ```rust
/// use brcode_emv::{checksum, verify_payload};
///
/// let body = "00020163046304".to_string();
/// let tail = checksum(&body);
/// assert!(verify_payload(&format!("{body}{tail}")));
/// assert!(!verify_payload("000201FFFF"));
/// ```
pub fn verify_payload(payload: &str) -> bool {
    if payload.len() < 4 || !payload.is_ascii() {
        return false;
    }

    let (body, tail) = payload.split_at(payload.len() - 4);
    checksum(body) == tail
}

/// Validate a checksum string format: exactly 4 uppercase hex characters.
pub fn is_valid_checksum(checksum: &str) -> bool {
    checksum.len() == 4
        && checksum
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_string() {
        assert_eq!(checksum(""), "FFFF");
    }

    #[test]
    fn test_known_check_value() {
        // The standard CRC-16/CCITT-FALSE check input
        assert_eq!(checksum("123456789"), "29B1");
    }

    #[test]
    fn test_scheme_identifier() {
        assert_eq!(checksum("BR.GOV.BCB.PIX"), "DDF1");
    }

    #[test]
    fn test_determinism() {
        let c1 = checksum("00020126330014BR.GOV.BCB.PIX");
        let c2 = checksum("00020126330014BR.GOV.BCB.PIX");
        let c3 = checksum("00020126330014BR.GOV.BCB.PIX");

        assert_eq!(c1, c2);
        assert_eq!(c2, c3);
    }

    #[test]
    fn test_different_input_different_checksum() {
        assert_ne!(checksum("input 1"), checksum("input 2"));
    }

    #[test]
    fn test_output_format() {
        for input in ["", "a", "BR.GOV.BCB.PIX", "123456789"] {
            let c = checksum(input);
            assert_eq!(c.len(), 4);
            assert!(is_valid_checksum(&c), "bad format: {c}");
        }
    }

    #[test]
    fn test_verify_payload_roundtrip() {
        let body = "0002015802BR6304";
        let full = format!("{body}{}", checksum(body));
        assert!(verify_payload(&full));
    }

    #[test]
    fn test_verify_payload_detects_corruption() {
        let body = "0002015802BR6304";
        let full = format!("{body}{}", checksum(body));
        let corrupted = full.replace("BR", "XX");
        assert!(!verify_payload(&corrupted));
    }

    #[test]
    fn test_verify_payload_short_input() {
        assert!(!verify_payload(""));
        assert!(!verify_payload("FFF"));
    }

    #[test]
    fn test_is_valid_checksum() {
        assert!(is_valid_checksum("FFFF"));
        assert!(is_valid_checksum("29B1"));
        assert!(is_valid_checksum("0000"));

        assert!(!is_valid_checksum("29b1")); // lowercase
        assert!(!is_valid_checksum("FFF")); // too short
        assert!(!is_valid_checksum("FFFFF")); // too long
        assert!(!is_valid_checksum("GGGG")); // not hex
    }
}
