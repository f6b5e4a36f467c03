//! Per-message-type field decoders and their record types.
//!
//! Each supported sentence type gets a strongly-typed struct with a
//! `decode` constructor that is a pure function over the comma-split field
//! list, with no I/O and no state. [`DecodedRecord`] is the tagged union over all
//! of them and carries the dispatch on [`MessageType`].
//!
//! Decoders use fixed zero-based field index tables where index 0 is the
//! header token. A sentence shorter than the indices a decoder needs fails
//! with [`DecodeError::FieldCountMismatch`](crate::DecodeError) rather than
//! reading out of bounds.

mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use gga::{FixQuality, GGA, Hdop};
pub use gll::{GLL, GllStatus};
pub use gsa::{GSA, GsaFixType, GsaMode};
pub use gsv::{GSV, SatelliteInView};
pub use rmc::{RMC, RmcStatus};
pub use vtg::{VTG, VtgMode};

pub(crate) mod parse;

use std::fmt;

use crate::{DecodeError, MessageType, fields::Fields};

/// Defines a closed enum classified from a raw field value. The last arm
/// must be a `_` catch-all so the lookup stays total.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $pattern:pat => $variant:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Classifies the raw field value. Total: anything unrecognized
            /// maps to the catch-all variant.
            pub fn from_field(field: &str) -> Self {
                match field {
                    $($pattern => Self::$variant,)+
                }
            }
        }
    };
}

pub(crate) use field_enum;

field_enum! {
    /// Hemisphere letter attached to a latitude, longitude, or magnetic
    /// variation field.
    pub enum Hemisphere {
        /// N
        "N" => North,
        /// S
        "S" => South,
        /// E
        "E" => East,
        /// W
        "W" => West,
        /// Anything else, including an empty field
        _ => Unknown,
    }
}

impl Hemisphere {
    /// The single-letter form as transmitted.
    pub fn letter(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
            Self::Unknown => '?',
        }
    }
}

/// An angle field paired with its hemisphere letter, kept in the receiver's
/// `ddmm.mm` form rather than converted to decimal degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// The angle exactly as transmitted, e.g. `4916.45`.
    pub angle: String,
    /// The hemisphere letter from the following field.
    pub hemisphere: Hemisphere,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.angle, self.hemisphere.letter())
    }
}

/// A wall-clock time adjusted from the sentence's UTC `hhmmss` field by the
/// configured local-time offset.
///
/// The hour is normalized modulo 24; [`LocalTime::day_carry`] records
/// whether the adjustment crossed midnight.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime {
    /// Offset-adjusted hour, always in `0..=23`.
    pub hour: u8,
    /// Minute as transmitted.
    pub minute: u8,
    /// Seconds exactly as transmitted, fractional part included.
    pub seconds: String,
    /// `-1`, `0`, or `1`: which day the adjusted time falls on relative to
    /// the UTC day of the sentence.
    pub day_carry: i8,
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{}", self.hour, self.minute, self.seconds)
    }
}

/// A numeric field paired with the indicator letter from the field after it
/// (`100.0 M`, `054.7 T`, ...).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    pub value: f32,
    /// The indicator field as transmitted, usually a single letter.
    pub unit: String,
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A successfully decoded sentence body, one variant per supported message
/// type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedRecord {
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Satellites in View
    GSV(GSV),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// DOP and active satellites
    GSA(GSA),
    /// Track made good and Ground speed
    VTG(VTG),
}

impl DecodedRecord {
    /// Dispatches to the field decoder for `message`.
    ///
    /// `utc_offset_hours` only reaches the RMC decoder, the one place the
    /// rendered time is offset-adjusted.
    pub(crate) fn decode(
        message: MessageType,
        fields: &Fields<'_>,
        utc_offset_hours: i8,
    ) -> Result<Self, DecodeError> {
        match message {
            MessageType::RMC => RMC::decode(fields, utc_offset_hours).map(Self::RMC),
            MessageType::GSV => GSV::decode(fields).map(Self::GSV),
            MessageType::GLL => GLL::decode(fields).map(Self::GLL),
            MessageType::GGA => GGA::decode(fields).map(Self::GGA),
            MessageType::GSA => GSA::decode(fields).map(Self::GSA),
            MessageType::VTG => VTG::decode(fields).map(Self::VTG),
            MessageType::Unsupported(code) => Err(DecodeError::UnknownMessageType(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_classification_is_total() {
        for (field, hemisphere) in [
            ("N", Hemisphere::North),
            ("S", Hemisphere::South),
            ("E", Hemisphere::East),
            ("W", Hemisphere::West),
            ("X", Hemisphere::Unknown),
            ("", Hemisphere::Unknown),
        ] {
            assert_eq!(Hemisphere::from_field(field), hemisphere, "field {field:?}");
            assert_eq!(
                hemisphere.letter(),
                if hemisphere == Hemisphere::Unknown { '?' } else { field.chars().next().unwrap() }
            );
        }
    }
}
