//! # NMEA 0183 GPS Sentence Decoder
//!
//! This library decodes NMEA 0183 sentences produced by a GPS receiver into
//! structured, strongly-typed records: `$HHHHH,D1,D2,...,Dn*CC`
//!
//! Supported message types are RMC, GSV, GLL, GGA, GSA, and VTG. Each
//! sentence is decoded independently and statelessly; the serial transport,
//! any logging sink, and simulated feeds live outside this crate and hand
//! the decoder one already-framed line at a time.
//!
//! The checksum policy is lenient on purpose: a mismatched checksum is
//! reported on the decoded record as [`ChecksumResult::Invalid`] rather
//! than rejecting it, while structural problems (missing `$`, malformed
//! checksum separator, unknown message code, too few fields) are typed
//! [`DecodeError`]s.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_decoder::{ChecksumResult, DecodedRecord, decode};
//!
//! let sentence = decode("$GPGGA,225446,4916.45,N,12311.12,W,1,04,2.0,100.0,M,-33.9,M,,*78")
//!     .unwrap();
//!
//! assert_eq!(sentence.checksum, ChecksumResult::Valid);
//! if let DecodedRecord::GGA(gga) = &sentence.record {
//!     assert_eq!(gga.satellite_count, Some(4));
//!     println!("{}", gga.fix_quality.description());
//! }
//! ```
//!
//! Local-time rendering of RMC fix times is configured through
//! [`Decoder::new`] with a signed hour offset; the hour wraps modulo 24 and
//! the record keeps an explicit day-carry flag.

pub mod checksum;
mod decoder;
pub mod error;
mod fields;
pub mod sentences;
mod talker;

pub use checksum::{ChecksumResult, checksum, format_checksum, verify};
pub use decoder::{DecodedSentence, Decoder, MAX_SENTENCE_LEN, decode};
pub use error::DecodeError;
pub use sentences::DecodedRecord;
pub use talker::{MessageType, TalkerId};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod decode;
}
