use super::field_enum;
use crate::{DecodeError, fields::Fields};

field_enum! {
    /// GSA selection mode.
    pub enum GsaMode {
        /// A - automatic 2D/3D selection
        "A" => Automatic,
        /// M - manual, forced 2D or 3D
        "M" => Manual,
        /// Anything else
        _ => Invalid,
    }
}

field_enum! {
    /// GSA fix type.
    pub enum GsaFixType {
        /// 1 - no fix
        "1" => NoFix,
        /// 2 - 2D fix
        "2" => Fix2D,
        /// 3 - 3D fix
        "3" => Fix3D,
        /// Anything else
        _ => Invalid,
    }
}

/// GSA - DOP and active satellites
///
/// ```text
///        0 1 2 3 .. 14  15  16  17
///        | | | |     |   |   |   |
///  $--GSA,a,x,x,..,  x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Fields 3 through 14 hold the IDs of up to twelve satellites used in the
/// fix; empty slots are skipped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode.
    pub mode: GsaMode,
    /// Fix type.
    pub fix_type: GsaFixType,
    /// IDs of the satellites used in the fix.
    pub satellites: heapless::Vec<u8, 12>,
    /// Position dilution of precision.
    pub pdop: Option<f32>,
    /// Horizontal dilution of precision.
    pub hdop: Option<f32>,
    /// Vertical dilution of precision.
    pub vdop: Option<f32>,
}

impl GSA {
    pub(crate) fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let mode = GsaMode::from_field(fields.get(1)?);
        let fix_type = GsaFixType::from_field(fields.get(2)?);

        let mut satellites = heapless::Vec::new();
        for index in 3..15 {
            if let Some(id) = fields.number::<u8>(index, "satellite ID")? {
                // capacity matches the twelve ID slots
                let _ = satellites.push(id);
            }
        }

        Ok(Self {
            mode,
            fix_type,
            satellites,
            pdop: fields.number(15, "dilution of precision")?,
            hdop: fields.number(16, "dilution of precision")?,
            vdop: fields.number(17, "dilution of precision")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_decoding() {
        let f = Fields::split("GPGSA,A,3,20,01,11,14,,,,,,,,,2.0,2.0,2.0");
        let gsa = GSA::decode(&f).unwrap();

        assert_eq!(gsa.mode, GsaMode::Automatic);
        assert_eq!(gsa.fix_type, GsaFixType::Fix3D);
        assert_eq!(gsa.satellites.as_slice(), &[20, 1, 11, 14]);
        assert_eq!(gsa.pdop, Some(2.0));
        assert_eq!(gsa.hdop, Some(2.0));
        assert_eq!(gsa.vdop, Some(2.0));
    }

    #[test]
    fn test_gsa_full_constellation() {
        let f = Fields::split("GPGSA,M,2,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.5");
        let gsa = GSA::decode(&f).unwrap();

        assert_eq!(gsa.mode, GsaMode::Manual);
        assert_eq!(gsa.fix_type, GsaFixType::Fix2D);
        assert_eq!(gsa.satellites.len(), 12);
        assert_eq!(gsa.satellites[11], 12);
    }

    #[test]
    fn test_gsa_catch_alls() {
        let f = Fields::split("GPGSA,X,9,,,,,,,,,,,,,,,");
        let gsa = GSA::decode(&f).unwrap();

        assert_eq!(gsa.mode, GsaMode::Invalid);
        assert_eq!(gsa.fix_type, GsaFixType::Invalid);
        assert!(gsa.satellites.is_empty());
        assert_eq!(gsa.pdop, None);
    }

    #[test]
    fn test_gsa_short_sentence_is_field_count_mismatch() {
        let f = Fields::split("GPGSA,A,3,20,01");

        assert_eq!(
            GSA::decode(&f),
            Err(DecodeError::FieldCountMismatch { index: 5, count: 5 })
        );
    }
}
