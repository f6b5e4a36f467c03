//! Sentence framing and the top-level decode entry point.
//!
//! Framing follows the NMEA 0183 shape `$HHHHH,D1,D2,...,Dn*CC`: a `$`
//! header character, the comma-delimited field section, and a two-hex-digit
//! checksum after a single `*`. The validation sequence is ordered and
//! short-circuiting; only structural failures prevent production of a
//! record, while a checksum mismatch merely annotates it.

use nom::{Parser, bytes::complete::take};

use crate::{
    ChecksumResult, DecodeError, DecodedRecord, MessageType, TalkerId,
    checksum::verify,
    fields::Fields,
};

/// NMEA 0183 caps a sentence at 82 characters, `$` and checksum included.
/// Sentences are ASCII, so the limit is enforced in bytes.
pub const MAX_SENTENCE_LEN: usize = 82;

/// One successfully decoded sentence: the typed record plus the framing
/// metadata that applies to every message type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSentence {
    /// The satellite system the sentence came from.
    pub talker: TalkerId,
    /// The decoded, strongly-typed sentence body.
    pub record: DecodedRecord,
    /// Outcome of checksum verification. [`ChecksumResult::Invalid`] does
    /// not discard the record.
    pub checksum: ChecksumResult,
}

/// Sentence decoder configuration.
///
/// The decoder is stateless between calls and holds only the signed
/// local-time offset, supplied by the caller rather than read from the host
/// so the core stays pure and testable. It is safe to share across threads.
///
/// # Examples
///
/// ```rust
/// use nmea_decoder::{DecodedRecord, Decoder};
///
/// let decoder = Decoder::new(2);
/// let sentence = decoder
///     .decode("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68")
///     .unwrap();
///
/// if let DecodedRecord::RMC(rmc) = &sentence.record {
///     let time = rmc.time.as_ref().unwrap();
///     // 22:54:46 UTC plus two hours crosses midnight
///     assert_eq!(time.to_string(), "00:54:46");
///     assert_eq!(time.day_carry, 1);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    utc_offset_hours: i8,
}

impl Decoder {
    /// Creates a decoder that renders RMC times shifted by
    /// `utc_offset_hours`, wrapping modulo 24.
    pub fn new(utc_offset_hours: i8) -> Self {
        Self { utc_offset_hours }
    }

    /// The configured local-time offset in hours.
    pub fn utc_offset_hours(&self) -> i8 {
        self.utc_offset_hours
    }

    /// Decodes one sentence.
    ///
    /// `raw` is a single line; trailing CR/LF is stripped here so callers
    /// may hand over transport lines as read. Validation is ordered and
    /// short-circuiting:
    ///
    /// 1. Empty input → [`DecodeError::Empty`]; more than 82 bytes →
    ///    [`DecodeError::TooLong`].
    /// 2. Missing `$` → [`DecodeError::MissingHeader`].
    /// 3. Anything but exactly one `*` →
    ///    [`DecodeError::MalformedChecksumSeparator`].
    /// 4. Header token classification; an unrecognized message code →
    ///    [`DecodeError::UnknownMessageType`] (unknown talker codes are fine
    ///    and classify as [`TalkerId::Unknown`]).
    /// 5. The per-type field decoder runs.
    /// 6. The checksum validator runs over the body between `$` and `*` and
    ///    its result is attached to the sentence; a mismatch never discards
    ///    the decoded fields.
    pub fn decode(&self, raw: &str) -> Result<DecodedSentence, DecodeError> {
        let line = raw.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            return Err(DecodeError::Empty);
        }
        if line.len() > MAX_SENTENCE_LEN {
            return Err(DecodeError::TooLong(line.len()));
        }

        let tail = line.strip_prefix('$').ok_or(DecodeError::MissingHeader)?;

        let Some((body, claimed)) = tail.split_once('*') else {
            return Err(DecodeError::MalformedChecksumSeparator);
        };
        if claimed.contains('*') {
            return Err(DecodeError::MalformedChecksumSeparator);
        }

        let fields = Fields::split(body);
        let (talker, message) = classify(fields.get(0)?)?;
        let record = DecodedRecord::decode(message, &fields, self.utc_offset_hours)?;

        Ok(DecodedSentence {
            talker,
            record,
            checksum: verify(body, claimed),
        })
    }
}

/// Decodes one sentence with the default configuration (no local-time
/// offset).
///
/// # Examples
///
/// ```rust
/// use nmea_decoder::{ChecksumResult, DecodedRecord, decode};
///
/// let sentence = decode("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
///
/// assert_eq!(sentence.checksum, ChecksumResult::Valid);
/// assert!(matches!(sentence.record, DecodedRecord::GLL(_)));
/// ```
pub fn decode(raw: &str) -> Result<DecodedSentence, DecodeError> {
    Decoder::default().decode(raw)
}

/// Splits the header token into its 2-character talker code and 3-character
/// message code.
fn classify(header: &str) -> Result<(TalkerId, MessageType), DecodeError> {
    let parsed: nom::IResult<&str, (&str, &str)> = (take(2u8), take(3u8)).parse(header);
    let (_, (talker_code, message_code)) =
        parsed.map_err(|_| DecodeError::UnknownMessageType(header.to_string()))?;

    Ok((TalkerId::from_code(talker_code), MessageType::from_code(message_code)))
}
