use super::{UnitValue, field_enum, parse};
use crate::{DecodeError, fields::Fields};

field_enum! {
    /// VTG mode indicator.
    pub enum VtgMode {
        /// A - autonomous
        "A" => Autonomous,
        /// D - differential
        "D" => Differential,
        /// E - estimated (dead reckoning)
        "E" => Estimated,
        /// M - manual input
        "M" => Manual,
        /// Anything else
        _ => DataNotValid,
    }
}

/// VTG - Track made good and Ground speed
///
/// ```text
///        0   1 2   3 4   5 6   7 8 9
///        |   | |   | |   | |   | | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Track made good relative to true north, with its `T` indicator.
    pub true_track: Option<UnitValue>,
    /// Track made good relative to magnetic north, with its `M` indicator.
    pub magnetic_track: Option<UnitValue>,
    /// Ground speed in knots.
    pub speed_knots: Option<f32>,
    /// Ground speed in km/h.
    pub speed_kmh: Option<f32>,
    /// Mode indicator.
    pub mode: VtgMode,
}

impl VTG {
    pub(crate) fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            true_track: parse::with_unit(fields, 1)?,
            magnetic_track: parse::with_unit(fields, 3)?,
            speed_knots: fields.number(5, "speed in knots")?,
            speed_kmh: fields.number(7, "speed in km/h")?,
            mode: VtgMode::from_field(fields.get(9)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtg_decoding() {
        let f = Fields::split("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A");
        let vtg = VTG::decode(&f).unwrap();

        assert_eq!(vtg.true_track.as_ref().unwrap().to_string(), "54.7 T");
        assert_eq!(vtg.magnetic_track.as_ref().unwrap().to_string(), "34.4 M");
        assert_eq!(vtg.speed_knots, Some(5.5));
        assert_eq!(vtg.speed_kmh, Some(10.2));
        assert_eq!(vtg.mode, VtgMode::Autonomous);
    }

    #[test]
    fn test_vtg_mode_variants() {
        for (field, mode) in [
            ("A", VtgMode::Autonomous),
            ("D", VtgMode::Differential),
            ("E", VtgMode::Estimated),
            ("M", VtgMode::Manual),
            ("N", VtgMode::DataNotValid),
            ("", VtgMode::DataNotValid),
        ] {
            let body = format!("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,{field}");
            let vtg = VTG::decode(&Fields::split(&body)).unwrap();
            assert_eq!(vtg.mode, mode, "mode field {field:?}");
        }
    }

    #[test]
    fn test_vtg_empty_tracks() {
        let f = Fields::split("GPVTG,,T,,M,000.0,N,000.0,K,N");
        let vtg = VTG::decode(&f).unwrap();

        assert_eq!(vtg.true_track, None);
        assert_eq!(vtg.magnetic_track, None);
        assert_eq!(vtg.speed_knots, Some(0.0));
    }

    #[test]
    fn test_vtg_missing_mode_is_field_count_mismatch() {
        let f = Fields::split("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K");

        assert_eq!(
            VTG::decode(&f),
            Err(DecodeError::FieldCountMismatch { index: 9, count: 9 })
        );
    }
}
