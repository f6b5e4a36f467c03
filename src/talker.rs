//! Talker and message-type classification.
//!
//! The header token of every sentence (`GPRMC`, `GNGGA`, ...) decomposes
//! into a 2-character talker code naming the satellite system and a
//! 3-character code naming the sentence semantics. Both lookups are total:
//! unknown talkers classify as [`TalkerId::Unknown`] and decoding continues,
//! while unsupported message codes classify as [`MessageType::Unsupported`]
//! and become a hard [`DecodeError::UnknownMessageType`](crate::DecodeError)
//! at dispatch.

use std::fmt;

/// The satellite system a sentence originates from, derived from the
/// 2-character talker code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkerId {
    /// GP - GPS
    Gps,
    /// GL - GLONASS
    Glonass,
    /// GN - combined GNSS
    Gnss,
    /// GA - Galileo
    Galileo,
    /// GB - BeiDou
    BeiDou,
    /// QZ - QZSS
    Qzss,
    /// NA - NavIC
    NavIc,
    /// Any other code
    Unknown,
}

impl TalkerId {
    /// Classifies a 2-character talker code. Total: anything unrecognized is
    /// [`TalkerId::Unknown`], never an error.
    pub fn from_code(code: &str) -> Self {
        match code {
            "GP" => Self::Gps,
            "GL" => Self::Glonass,
            "GN" => Self::Gnss,
            "GA" => Self::Galileo,
            "GB" => Self::BeiDou,
            "QZ" => Self::Qzss,
            "NA" => Self::NavIc,
            _ => Self::Unknown,
        }
    }

    /// Human-readable system name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gps => "GPS",
            Self::Glonass => "GLONASS",
            Self::Gnss => "GNSS",
            Self::Galileo => "Galileo",
            Self::BeiDou => "BeiDou",
            Self::Qzss => "QZSS",
            Self::NavIc => "NavIC",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sentence semantics, derived from the 3-character message code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    /// Recommended Minimum Navigation Information
    RMC,
    /// Satellites in View
    GSV,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// Global Positioning System Fix Data
    GGA,
    /// DOP and active satellites
    GSA,
    /// Track made good and Ground speed
    VTG,
    /// Any other code; decoding a sentence of this type is refused.
    Unsupported(String),
}

impl MessageType {
    /// Classifies a 3-character message code. Total at this level; the
    /// catch-all [`MessageType::Unsupported`] turns into a decode error once
    /// a sentence of that type actually needs decoding.
    pub fn from_code(code: &str) -> Self {
        match code {
            "RMC" => Self::RMC,
            "GSV" => Self::GSV,
            "GLL" => Self::GLL,
            "GGA" => Self::GGA,
            "GSA" => Self::GSA,
            "VTG" => Self::VTG,
            other => Self::Unsupported(other.to_string()),
        }
    }
}
