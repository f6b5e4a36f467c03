use super::{Coordinate, field_enum, parse};
use crate::{DecodeError, fields::Fields};

field_enum! {
    /// GLL data status.
    pub enum GllStatus {
        /// A - data active
        "A" => Active,
        /// V - data inactive
        "V" => Inactive,
        /// Anything else
        _ => Invalid,
    }
}

/// GLL - Geographic Position - Latitude/Longitude
///
/// ```text
///        0       1 2        3 4      5 6
///        |       | |        | |      | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GLL {
    /// Latitude with hemisphere.
    pub latitude: Option<Coordinate>,
    /// Longitude with hemisphere.
    pub longitude: Option<Coordinate>,
    /// Fix time in UTC, as transmitted.
    pub time: Option<String>,
    /// Data status.
    pub status: GllStatus,
}

impl GLL {
    pub(crate) fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            latitude: parse::coordinate(fields, 1, 2)?,
            longitude: parse::coordinate(fields, 3, 4)?,
            time: fields.non_empty(5)?.map(str::to_string),
            status: GllStatus::from_field(fields.get(6)?),
        })
    }
}
