//! # Checksum Validator
//!
//! NMEA 0183 sentences carry a two-hex-digit checksum after the `*`
//! delimiter: the XOR of every byte between the `$` prefix and the `*`,
//! excluding both delimiters.
//!
//! This module is independent of the field-splitting logic in
//! [`decoder`](crate::decoder) so it can be exercised on raw strings
//! directly. Verification is lenient by design: a mismatch is reported as
//! [`ChecksumResult::Invalid`], never as a decode error.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    combinator::all_consuming,
    number::complete::hex_u32,
};

/// Outcome of comparing a sentence body against its transmitted checksum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumResult {
    /// The transmitted checksum matches the one calculated from the body.
    Valid,

    /// The transmitted checksum parsed but does not match.
    ///
    /// Contains both the checksum calculated from the body and the one found
    /// in the sentence.
    Invalid {
        /// The checksum calculated from the sentence body.
        expected: u8,
        /// The checksum found in the sentence.
        found: u8,
    },

    /// The transmitted checksum could not be interpreted at all.
    Unavailable(String),
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The body is everything between `$` and `*`, exclusive. Every byte is
/// XORed into an 8-bit accumulator.
///
/// # Examples
///
/// ```rust
/// use nmea_decoder::checksum;
///
/// assert_eq!(checksum("GPGLL,4916.45,N,12311.12,W,225444,A"), 0x31);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Verifies a sentence body against its transmitted checksum.
///
/// `claimed_hex` is the tail after the `*`, expected to be exactly two hex
/// digits (either case). A malformed tail yields
/// [`ChecksumResult::Unavailable`] rather than an error, mirroring the
/// report-but-never-reject policy.
///
/// # Examples
///
/// ```rust
/// use nmea_decoder::{ChecksumResult, verify};
///
/// let body = "GPGLL,4916.45,N,12311.12,W,225444,A";
/// assert_eq!(verify(body, "31"), ChecksumResult::Valid);
/// assert!(matches!(verify(body, "32"), ChecksumResult::Invalid { .. }));
/// assert!(matches!(verify(body, "3Z"), ChecksumResult::Unavailable(_)));
/// ```
pub fn verify(body: &str, claimed_hex: &str) -> ChecksumResult {
    let expected = checksum(body);

    match claimed_checksum(claimed_hex) {
        Some(found) if found == expected => ChecksumResult::Valid,
        Some(found) => ChecksumResult::Invalid { expected, found },
        None => ChecksumResult::Unavailable(format!(
            "checksum {claimed_hex:?} is not a two-digit hex value"
        )),
    }
}

/// Parses the transmitted checksum tail: exactly two hex digits, nothing
/// else.
fn claimed_checksum(i: &str) -> Option<u8> {
    let is_hex = |c: char| c.is_ascii_hexdigit();

    let parsed: nom::IResult<&str, &str> = all_consuming(take_while_m_n(2, 2, is_hex)).parse(i);
    let (_, hex) = parsed.ok()?;

    let parsed: nom::IResult<&str, u32> = hex_u32(hex);
    let (_, value) = parsed.ok()?;

    Some(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_round_trip() {
        let bodies = [
            "GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E",
            "GPGGA,225446,4916.45,N,12311.12,W,1,04,2.0,100.0,M,-33.9,M,,",
            "GPGSA,A,3,20,01,11,14,,,,,,,,,2.0,2.0,2.0",
            "",
            "A",
        ];

        for body in bodies {
            let claimed = format_checksum(checksum(body));
            assert_eq!(
                verify(body, &claimed),
                ChecksumResult::Valid,
                "round trip failed for {body:?}"
            );
        }
    }

    #[test]
    fn test_verify_known_values() {
        assert_eq!(verify("GPGLL,4916.45,N,12311.12,W,225444,A", "31"), ChecksumResult::Valid);
        // lowercase hex digits are accepted
        assert_eq!(
            verify("GPGSV,3,3,11,05,09,199,13,23,09,073,17,18,07,179,,21,05,252,", "7e"),
            ChecksumResult::Valid
        );
    }

    #[test]
    fn test_verify_mismatch_reports_both_sides() {
        let body = "GPGLL,4916.45,N,12311.12,W,225444,A";
        assert_eq!(
            verify(body, "32"),
            ChecksumResult::Invalid { expected: 0x31, found: 0x32 }
        );
    }

    #[test]
    fn test_verify_malformed_claims() {
        let body = "GPGLL,4916.45,N,12311.12,W,225444,A";

        for claimed in ["", "3", "311", "3Z", "zz", "*31"] {
            assert!(
                matches!(verify(body, claimed), ChecksumResult::Unavailable(_)),
                "expected Unavailable for {claimed:?}"
            );
        }
    }
}
