use super::{Coordinate, UnitValue, parse};
use crate::{DecodeError, fields::Fields};

/// Quality of the GPS fix, from the GGA fix-quality code `0`–`9`.
///
/// The code indexes a fixed 10-entry description table; a code outside that
/// range is a decode error
/// ([`InvalidFixQualityIndex`](DecodeError::InvalidFixQualityIndex)), never
/// a silent default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixQuality {
    /// 0 - no position available
    Invalid,
    /// 1 - autonomous GPS fix
    Autonomous,
    /// 2 - differential GPS fix
    Differential,
    /// 3 - PPS fix
    Pps,
    /// 4 - Real Time Kinematic fix
    RtkFixed,
    /// 5 - RTK float
    RtkFloat,
    /// 6 - estimated (dead reckoning)
    Estimated,
    /// 7 - manual input mode
    Manual,
    /// 8 - simulation mode
    Simulation,
    /// 9 - WAAS fix
    Waas,
}

impl FixQuality {
    fn from_field(field: &str) -> Result<Self, DecodeError> {
        match field {
            "0" => Ok(Self::Invalid),
            "1" => Ok(Self::Autonomous),
            "2" => Ok(Self::Differential),
            "3" => Ok(Self::Pps),
            "4" => Ok(Self::RtkFixed),
            "5" => Ok(Self::RtkFloat),
            "6" => Ok(Self::Estimated),
            "7" => Ok(Self::Manual),
            "8" => Ok(Self::Simulation),
            "9" => Ok(Self::Waas),
            _ => Err(DecodeError::InvalidFixQualityIndex(field.to_string())),
        }
    }

    /// The fixed description table entry for this quality code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid, no position available.",
            Self::Autonomous => "Autonomous GPS fix, no correction data used.",
            Self::Differential => {
                "DGPS fix, using a local DGPS base station or correction service \
                 such as WAAS or EGNOS."
            }
            Self::Pps => "PPS fix.",
            Self::RtkFixed => "RTK fix, high accuracy Real Time Kinematic.",
            Self::RtkFloat => "RTK Float, better than DGPS, but not quite RTK.",
            Self::Estimated => "Estimated fix (dead reckoning).",
            Self::Manual => "Manual input mode.",
            Self::Simulation => "Simulation mode.",
            Self::Waas => "WAAS fix.",
        }
    }
}

/// Horizontal dilution of precision, parsed numerically.
///
/// The advisory flags are computed from the numeric value; the receiver's
/// `0` convention means "no figure available" and values of 6 or more mark
/// poor horizontal accuracy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hdop {
    pub value: f32,
}

impl Hdop {
    /// The receiver reports `0` when it has no dilution figure.
    pub fn unavailable(&self) -> bool {
        self.value == 0.0
    }

    /// Dilution of 6 or more indicates poor horizontal accuracy.
    pub fn poor_accuracy(&self) -> bool {
        self.value >= 6.0
    }
}

/// GGA - Global Positioning System Fix Data
///
/// ```text
///        0      1       2 3        4 5 6  7   8   9 10 11 12 13
///        |      |       | |        | | |  |   |   | |  |  |  |
///  $--GGA,hhmmss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC, as transmitted.
    pub time: Option<String>,
    /// Latitude with hemisphere.
    pub latitude: Option<Coordinate>,
    /// Longitude with hemisphere.
    pub longitude: Option<Coordinate>,
    /// Quality of the fix.
    pub fix_quality: FixQuality,
    /// Number of satellites in use.
    pub satellite_count: Option<u8>,
    /// Horizontal dilution of precision with its advisory flags.
    pub hdop: Option<Hdop>,
    /// Altitude above mean sea level, with its unit letter.
    pub altitude: Option<UnitValue>,
    /// Height of the geoid above the WGS-84 ellipsoid, with its unit letter.
    pub geoid_height: Option<UnitValue>,
    /// Seconds since the last DGPS update.
    pub dgps_age: Option<f32>,
    /// DGPS reference station ID.
    pub dgps_station_id: Option<String>,
}

impl GGA {
    pub(crate) fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            time: fields.non_empty(1)?.map(str::to_string),
            latitude: parse::coordinate(fields, 2, 3)?,
            longitude: parse::coordinate(fields, 4, 5)?,
            fix_quality: FixQuality::from_field(fields.get(6)?)?,
            satellite_count: fields.number(7, "satellite count")?,
            hdop: fields
                .number::<f32>(8, "dilution of precision")?
                .map(|value| Hdop { value }),
            altitude: parse::with_unit(fields, 9)?,
            geoid_height: parse::with_unit(fields, 11)?,
            dgps_age: fields.number(13, "DGPS age in seconds")?,
            dgps_station_id: fields.non_empty(14)?.map(str::to_string),
        })
    }
}
