//! Field-level parsing helpers shared by the per-type decoders.

use nom::{Parser, bytes::complete::take};

use super::{Coordinate, Hemisphere, LocalTime, UnitValue};
use crate::{DecodeError, fields::Fields};

/// Reads an angle field plus the hemisphere field after it.
///
/// An empty angle is a valid "no position" and yields `None`; both indices
/// must exist either way.
pub(crate) fn coordinate(
    fields: &Fields<'_>,
    angle_index: usize,
    hemisphere_index: usize,
) -> Result<Option<Coordinate>, DecodeError> {
    let hemisphere = fields.get(hemisphere_index)?;
    let Some(angle) = fields.non_empty(angle_index)? else {
        return Ok(None);
    };

    Ok(Some(Coordinate {
        angle: angle.to_string(),
        hemisphere: Hemisphere::from_field(hemisphere),
    }))
}

/// Reads an `hhmmss[.ss]` field and adjusts the hour by the configured
/// local-time offset, wrapping modulo 24.
pub(crate) fn local_time(
    fields: &Fields<'_>,
    index: usize,
    utc_offset_hours: i8,
) -> Result<Option<LocalTime>, DecodeError> {
    let Some(raw) = fields.non_empty(index)? else {
        return Ok(None);
    };

    let invalid = || DecodeError::InvalidField {
        index,
        value: raw.to_string(),
        expected: "hhmmss time",
    };

    let parsed: nom::IResult<&str, (&str, &str)> = (take(2u8), take(2u8)).parse(raw);
    let (seconds, (hh, mm)) = parsed.map_err(|_| invalid())?;

    let hour: u8 = hh.parse().map_err(|_| invalid())?;
    let minute: u8 = mm.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    let (hour, day_carry) = wrap_hour(hour, utc_offset_hours);

    Ok(Some(LocalTime {
        hour,
        minute,
        seconds: seconds.to_string(),
        day_carry,
    }))
}

/// Normalizes an offset-shifted hour into `0..=23` plus a day carry.
fn wrap_hour(hour: u8, utc_offset_hours: i8) -> (u8, i8) {
    let shifted = i16::from(hour) + i16::from(utc_offset_hours);
    let wrapped = shifted.rem_euclid(24) as u8;
    let day_carry = if shifted < 0 {
        -1
    } else if shifted > 23 {
        1
    } else {
        0
    };

    (wrapped, day_carry)
}

/// Reads a numeric field plus the indicator field after it (`100.0,M`,
/// `054.7,T`, ...). An empty value yields `None`; both indices must exist.
pub(crate) fn with_unit(
    fields: &Fields<'_>,
    value_index: usize,
) -> Result<Option<UnitValue>, DecodeError> {
    let unit = fields.get(value_index + 1)?;
    let Some(value) = fields.number::<f32>(value_index, "number")? else {
        return Ok(None);
    };

    Ok(Some(UnitValue { value, unit: unit.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_keeps_fractional_seconds() {
        let fields = Fields::split("GPRMC,092725.00");
        let time = local_time(&fields, 1, 0).unwrap().unwrap();

        assert_eq!(time.hour, 9);
        assert_eq!(time.minute, 27);
        assert_eq!(time.seconds, "25.00");
        assert_eq!(time.day_carry, 0);
        assert_eq!(time.to_string(), "09:27:25.00");
    }

    #[test]
    fn test_local_time_rejects_garbage() {
        let fields = Fields::split("GPRMC,2x5446,99,446");

        assert!(matches!(
            local_time(&fields, 1, 0),
            Err(DecodeError::InvalidField { index: 1, .. })
        ));
        // too short to hold hhmm
        assert!(matches!(
            local_time(&fields, 2, 0),
            Err(DecodeError::InvalidField { index: 2, .. })
        ));
        // minute out of range would render nonsense
        let fields = Fields::split("GPRMC,226046");
        assert!(local_time(&fields, 1, 0).is_err());
    }

    #[test]
    fn test_wrap_hour_carries_across_midnight() {
        assert_eq!(wrap_hour(22, 0), (22, 0));
        assert_eq!(wrap_hour(22, 2), (0, 1));
        assert_eq!(wrap_hour(22, 3), (1, 1));
        assert_eq!(wrap_hour(1, -2), (23, -1));
        assert_eq!(wrap_hour(0, -12), (12, -1));
        assert_eq!(wrap_hour(12, 12), (0, 1));
    }
}
