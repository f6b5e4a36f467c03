use crate::{DecodeError, fields::Fields};

/// One satellite entry from a GSV repeating group.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteInView {
    /// Satellite PRN number.
    pub prn: u8,
    /// Elevation in degrees, up to 90.
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north.
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio in dB.
    pub snr: Option<u8>,
}

/// GSV - Satellites in View
///
/// ```text
///        0 1 2 3  4  5  6  7 ...
///        | | | |  |  |  |  |
///  $--GSV,x,x,x,id,el,az,db,...*hh<CR><LF>
/// ```
///
/// Up to four repeating `(id, elevation, azimuth, snr)` groups follow the
/// three header fields. A group is included only when its ID field is
/// non-empty; trailing groups the sentence simply does not carry are valid
/// and omitted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GSV {
    /// Total number of GSV sentences in this cycle.
    pub total_messages: u8,
    /// Index of this sentence within the cycle, 1-based.
    pub message_number: u8,
    /// Total number of satellites in view.
    pub satellites_in_view: u8,
    /// The satellite groups this sentence carries.
    pub satellites: heapless::Vec<SatelliteInView, 4>,
}

impl GSV {
    pub(crate) fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        let total_messages = fields.required_number(1, "message count")?;
        let message_number = fields.required_number(2, "message number")?;
        let satellites_in_view = fields.required_number(3, "satellite count")?;

        let mut satellites = heapless::Vec::new();
        for base in [4, 8, 12, 16] {
            let Some(id) = fields.try_get(base) else {
                break;
            };
            if id.is_empty() {
                continue;
            }

            let prn = fields.required_number(base, "satellite PRN")?;
            let satellite = SatelliteInView {
                prn,
                elevation: fields.trailing_number(base + 1, "elevation")?,
                azimuth: fields.trailing_number(base + 2, "azimuth")?,
                snr: fields.trailing_number(base + 3, "SNR")?,
            };

            // capacity matches the four groups
            let _ = satellites.push(satellite);
        }

        Ok(Self {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsv_decoding() {
        let f = Fields::split(
            "GPGSV,3,1,11,20,75,131,26,01,40,223,20,11,37,246,22,22,30,067,20",
        );
        let gsv = GSV::decode(&f).unwrap();

        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 11);
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[0],
            SatelliteInView { prn: 20, elevation: Some(75), azimuth: Some(131), snr: Some(26) }
        );
        assert_eq!(gsv.satellites[3].prn, 22);
    }

    #[test]
    fn test_gsv_empty_snr_fields() {
        let f = Fields::split(
            "GPGSV,3,3,11,05,09,199,13,23,09,073,17,18,07,179,,21,05,252,",
        );
        let gsv = GSV::decode(&f).unwrap();

        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(gsv.satellites[2].snr, None);
        assert_eq!(gsv.satellites[3].snr, None);
        assert_eq!(gsv.satellites[3].azimuth, Some(252));
    }

    #[test]
    fn test_gsv_empty_group_is_skipped() {
        let f = Fields::split("GPGSV,1,1,01,05,45,120,38,,,,");
        let gsv = GSV::decode(&f).unwrap();

        assert_eq!(gsv.satellites.len(), 1);
        assert_eq!(gsv.satellites[0].prn, 5);
    }

    #[test]
    fn test_gsv_truncated_trailing_groups_are_valid() {
        let f = Fields::split("GPGSV,1,1,01,05,45,120,38");
        let gsv = GSV::decode(&f).unwrap();
        assert_eq!(gsv.satellites.len(), 1);

        // header fields themselves are still mandatory
        let f = Fields::split("GPGSV,1,1");
        assert_eq!(
            GSV::decode(&f),
            Err(DecodeError::FieldCountMismatch { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_gsv_non_numeric_group_is_rejected() {
        let f = Fields::split("GPGSV,1,1,01,05,45,xx,38");

        assert!(matches!(
            GSV::decode(&f),
            Err(DecodeError::InvalidField { index: 6, .. })
        ));
    }
}
