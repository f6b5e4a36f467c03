//! # Error Types
//!
//! This module defines the error taxonomy used throughout the decoder.
//!
//! Every variant is recoverable per sentence: a transport loop is expected to
//! log the error and continue with the next line. A checksum mismatch is
//! deliberately *not* an error: it is reported as a
//! [`ChecksumResult`](crate::ChecksumResult) annotation on an otherwise
//! successful decode.

use thiserror::Error;

/// Represents all possible errors that can occur while decoding a sentence.
///
/// Only structural problems prevent production of a record; see the crate
/// docs for the lenient checksum policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input was empty (or contained only line terminators).
    #[error("empty sentence")]
    Empty,

    /// The sentence exceeds the NMEA 0183 maximum length of 82 characters.
    ///
    /// Contains the offending length in bytes, measured after trailing CR/LF
    /// have been stripped.
    #[error("sentence is {0} characters, NMEA 0183 allows at most 82")]
    TooLong(usize),

    /// The sentence does not start with the `$` header character.
    #[error("sentence does not start with '$'")]
    MissingHeader,

    /// The body does not contain exactly one `*` separating the
    /// comma-delimited fields from the trailing checksum digits.
    #[error("expected exactly one '*' between fields and checksum")]
    MalformedChecksumSeparator,

    /// The 3-character message code is not one the decoder implements.
    ///
    /// Unlike unknown talker codes (which map to
    /// [`TalkerId::Unknown`](crate::TalkerId::Unknown) and keep going), an
    /// unknown message code aborts the sentence, as there is no field table to
    /// decode it against.
    #[error("unrecognized message type {0:?}")]
    UnknownMessageType(String),

    /// A field table index lies beyond the end of the field list.
    ///
    /// Raised instead of reading out of bounds when a sentence carries fewer
    /// fields than its message type requires.
    #[error("field {index} is missing, sentence only has {count} fields")]
    FieldCountMismatch {
        /// The zero-based field index the decoder needed.
        index: usize,
        /// The number of fields the sentence actually carried.
        count: usize,
    },

    /// The GGA fix-quality field is outside the `0`–`9` description table.
    ///
    /// An out-of-range index is a decode error, not a silent default.
    #[error("fix quality {0:?} is not a digit in 0-9")]
    InvalidFixQualityIndex(String),

    /// A non-empty field did not conform to its expected format.
    #[error("field {index} {value:?} is not a valid {expected}")]
    InvalidField {
        /// The zero-based index of the offending field.
        index: usize,
        /// The field content as received.
        value: String,
        /// What the decoder expected to find there.
        expected: &'static str,
    },
}
