use super::{Coordinate, Hemisphere, LocalTime, field_enum, parse};
use crate::{DecodeError, fields::Fields};

field_enum! {
    /// RMC receiver status.
    pub enum RmcStatus {
        /// A - receiver has an active fix
        "A" => Active,
        /// V - receiver warning, no fix available
        "V" => NoFix,
        /// Anything else
        _ => Invalid,
    }
}

/// RMC - Recommended Minimum Navigation Information
///
/// ```text
///        0     1      2 3       4 5        6 7     8     9      10    11
///        |     |      | |       | |        | |     |     |      |     |
///  $--RMC,hhmmss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh<CR><LF>
/// ```
///
/// The time field is the one place the decoder applies the configured
/// local-time offset; everything else is reported as received.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time, adjusted to local time.
    pub time: Option<LocalTime>,
    /// Receiver status.
    pub status: RmcStatus,
    /// Latitude with hemisphere.
    pub latitude: Option<Coordinate>,
    /// Longitude with hemisphere.
    pub longitude: Option<Coordinate>,
    /// Speed over ground in knots.
    pub speed_knots: Option<f32>,
    /// Track angle in degrees.
    pub track_angle: Option<f32>,
    /// Fix date as transmitted, `ddmmyy`.
    pub date: Option<String>,
    /// Magnetic variation in degrees.
    pub magnetic_variation: Option<f32>,
    /// Direction of the magnetic variation, east or west.
    pub variation_direction: Option<Hemisphere>,
}

impl RMC {
    pub(crate) fn decode(fields: &Fields<'_>, utc_offset_hours: i8) -> Result<Self, DecodeError> {
        Ok(Self {
            time: parse::local_time(fields, 1, utc_offset_hours)?,
            status: RmcStatus::from_field(fields.get(2)?),
            latitude: parse::coordinate(fields, 3, 4)?,
            longitude: parse::coordinate(fields, 5, 6)?,
            speed_knots: fields.number(7, "speed in knots")?,
            track_angle: fields.number(8, "track angle")?,
            date: fields.non_empty(9)?.map(str::to_string),
            magnetic_variation: fields.number(10, "magnetic variation")?,
            variation_direction: fields.non_empty(11)?.map(Hemisphere::from_field),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(body: &str) -> Fields<'_> {
        Fields::split(body)
    }

    #[test]
    fn test_rmc_decoding() {
        let f = fields("GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E");
        let rmc = RMC::decode(&f, 0).unwrap();

        assert_eq!(rmc.time.as_ref().unwrap().to_string(), "22:54:46");
        assert_eq!(rmc.status, RmcStatus::Active);
        assert_eq!(rmc.latitude.as_ref().unwrap().to_string(), "4916.45 N");
        assert_eq!(rmc.longitude.as_ref().unwrap().to_string(), "12311.12 W");
        assert_eq!(rmc.speed_knots, Some(0.5));
        assert_eq!(rmc.track_angle, Some(54.7));
        assert_eq!(rmc.date.as_deref(), Some("191194"));
        assert_eq!(rmc.magnetic_variation, Some(20.3));
        assert_eq!(rmc.variation_direction, Some(Hemisphere::East));
    }

    #[test]
    fn test_rmc_offset_wraps_past_midnight() {
        let f = fields("GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E");

        let rmc = RMC::decode(&f, 2).unwrap();
        let time = rmc.time.unwrap();
        assert_eq!((time.hour, time.day_carry), (0, 1));

        let rmc = RMC::decode(&f, -23).unwrap();
        let time = rmc.time.unwrap();
        assert_eq!((time.hour, time.day_carry), (23, -1));
    }

    #[test]
    fn test_rmc_status_catch_all() {
        let f = fields("GPRMC,225446,Q,4916.45,N,12311.12,W,000.5,054.7,191194,,");
        let rmc = RMC::decode(&f, 0).unwrap();

        assert_eq!(rmc.status, RmcStatus::Invalid);
        assert_eq!(rmc.magnetic_variation, None);
        assert_eq!(rmc.variation_direction, None);
    }

    #[test]
    fn test_rmc_short_sentence_is_field_count_mismatch() {
        let f = fields("GPRMC,225446,A,4916.45,N");

        // the longitude hemisphere at index 6 is the first missing field
        assert_eq!(
            RMC::decode(&f, 0),
            Err(DecodeError::FieldCountMismatch { index: 6, count: 5 })
        );
    }
}
