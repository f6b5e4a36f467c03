//! Comma-split field list with bounds-checked access.
//!
//! Every per-type decoder works off fixed field-index tables, so all indexed
//! access goes through [`Fields`] and surfaces
//! [`DecodeError::FieldCountMismatch`] instead of reading out of bounds.
//! Index 0 is always the header token (talker + message code); the checksum
//! tail is kept out of the list entirely, so no decoder ever needs to know
//! where the tail would land for a maximal-field sentence.

use std::str::FromStr;

use crate::DecodeError;

/// The ordered fields of one sentence body, borrowed from the raw line.
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    items: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits a sentence body (between `$` and `*`, exclusive) on `,`.
    pub(crate) fn split(body: &'a str) -> Self {
        Fields { items: body.split(',').collect() }
    }

    pub(crate) fn count(&self) -> usize {
        self.items.len()
    }

    /// The field at `index`, or `FieldCountMismatch` if the sentence is too
    /// short.
    pub(crate) fn get(&self, index: usize) -> Result<&'a str, DecodeError> {
        self.items
            .get(index)
            .copied()
            .ok_or(DecodeError::FieldCountMismatch { index, count: self.count() })
    }

    /// The field at `index`, or `None` past the end of the list.
    ///
    /// Used for the repeating tail groups (GSV) where absent trailing fields
    /// are valid rather than an error.
    pub(crate) fn try_get(&self, index: usize) -> Option<&'a str> {
        self.items.get(index).copied()
    }

    /// A required field that may legitimately be empty: `Ok(None)` when
    /// empty, `FieldCountMismatch` when missing.
    pub(crate) fn non_empty(&self, index: usize) -> Result<Option<&'a str>, DecodeError> {
        let raw = self.get(index)?;
        Ok(if raw.is_empty() { None } else { Some(raw) })
    }

    /// Parses a required numeric field, treating an empty field as `None`.
    pub(crate) fn number<T: FromStr>(
        &self,
        index: usize,
        expected: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        match self.non_empty(index)? {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| DecodeError::InvalidField {
                index,
                value: raw.to_string(),
                expected,
            }),
        }
    }

    /// Parses a numeric field that must be present and non-empty.
    pub(crate) fn required_number<T: FromStr>(
        &self,
        index: usize,
        expected: &'static str,
    ) -> Result<T, DecodeError> {
        let raw = self.get(index)?;
        raw.parse().map_err(|_| DecodeError::InvalidField {
            index,
            value: raw.to_string(),
            expected,
        })
    }

    /// Parses a numeric field that may be missing entirely (past the end of
    /// a short sentence) as well as empty.
    pub(crate) fn trailing_number<T: FromStr>(
        &self,
        index: usize,
        expected: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        match self.try_get(index) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| DecodeError::InvalidField {
                index,
                value: raw.to_string(),
                expected,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_access_is_bounds_checked() {
        let fields = Fields::split("GPGLL,4916.45,N");

        assert_eq!(fields.count(), 3);
        assert_eq!(fields.get(0), Ok("GPGLL"));
        assert_eq!(fields.get(2), Ok("N"));
        assert_eq!(
            fields.get(3),
            Err(DecodeError::FieldCountMismatch { index: 3, count: 3 })
        );
        assert_eq!(fields.try_get(3), None);
    }

    #[test]
    fn test_empty_fields_are_none_not_errors() {
        let fields = Fields::split("GPGSA,A,3,,2.0");

        assert_eq!(fields.non_empty(3), Ok(None));
        assert_eq!(fields.number::<f32>(4, "number"), Ok(Some(2.0)));
        assert_eq!(fields.number::<f32>(3, "number"), Ok(None));
    }

    #[test]
    fn test_malformed_numbers_are_invalid_fields() {
        let fields = Fields::split("GPGGA,abc");

        assert_eq!(
            fields.number::<f32>(1, "number"),
            Err(DecodeError::InvalidField {
                index: 1,
                value: "abc".to_string(),
                expected: "number",
            })
        );
    }
}
