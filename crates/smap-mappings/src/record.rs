//! Mapping record types.
//!
//! A [`MappingRecord`] is built once per segment and never mutated. It carries
//! the raw deltas decoded from the segment alongside the absolute positions
//! they resolve to.

use std::fmt;

use serde::{Serialize, Serializer};
use smap_vlq::VlqError;

/// Number of semantic fields a segment can carry.
pub const SEMANTIC_FIELDS: usize = 5;

/// Supported segment lengths, by number of decoded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentShape {
    /// Generated column only.
    Generated,
    /// Generated column, source index, original line and column.
    Source,
    /// The `Source` fields plus a name index.
    Named,
    /// Any other length.
    Unsupported(usize),
}

impl SegmentShape {
    /// Classify a segment by its decoded length.
    pub fn from_len(len: usize) -> Self {
        match len {
            1 => Self::Generated,
            4 => Self::Source,
            5 => Self::Named,
            other => Self::Unsupported(other),
        }
    }

    /// Returns true for the 1, 4 and 5 value shapes.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for SegmentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => write!(f, "1 value (generated column)"),
            Self::Source => write!(f, "4 values (generated column, source position)"),
            Self::Named => write!(f, "5 values (generated column, source position, name)"),
            Self::Unsupported(len) => write!(f, "{len} values (unsupported)"),
        }
    }
}

/// Relative values decoded from a segment, in field order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Deltas {
    pub generated_column: Option<i32>,
    pub source_index: Option<i32>,
    pub original_line: Option<i32>,
    pub original_column: Option<i32>,
    pub name_index: Option<i32>,
}

impl Deltas {
    /// Split decoded values into the five semantic fields and the overflow
    /// values that follow them.
    pub fn split(values: &[i32]) -> (Self, Vec<i32>) {
        let field = |index: usize| values.get(index).copied();
        let deltas = Self {
            generated_column: field(0),
            source_index: field(1),
            original_line: field(2),
            original_column: field(3),
            name_index: field(4),
        };
        let rest = values.get(SEMANTIC_FIELDS..).unwrap_or_default().to_vec();
        (deltas, rest)
    }
}

/// Absolute values: the running totals after applying a record's deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Positions {
    pub generated_column: Option<i64>,
    pub source_index: Option<i64>,
    pub original_line: Option<i64>,
    pub original_column: Option<i64>,
    pub name_index: Option<i64>,
}

/// One decoded segment of a mappings string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRecord {
    /// Zero-based index of the `;`-delimited group holding the segment.
    pub generated_line: usize,
    /// Segment text as it appeared in the input.
    pub segment: String,
    pub deltas: Deltas,
    pub positions: Positions,
    /// Values beyond the fifth; never accumulated.
    pub rest: Vec<i32>,
    /// Supported length and canonical encoding.
    pub valid: bool,
    /// Why the segment could not be decoded, if it could not.
    #[serde(serialize_with = "serialize_fault")]
    pub fault: Option<VlqError>,
}

impl MappingRecord {
    /// A record for a segment that failed to decode: no values, never valid.
    pub fn undecodable(generated_line: usize, segment: &str, fault: VlqError) -> Self {
        Self {
            generated_line,
            segment: segment.to_owned(),
            deltas: Deltas::default(),
            positions: Positions::default(),
            rest: Vec::new(),
            valid: false,
            fault: Some(fault),
        }
    }

    /// Returns true if the segment decoded to at least one value.
    pub fn is_decoded(&self) -> bool {
        self.fault.is_none()
    }
}

fn serialize_fault<S: Serializer>(
    fault: &Option<VlqError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match fault {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_len() {
        assert_eq!(SegmentShape::from_len(1), SegmentShape::Generated);
        assert_eq!(SegmentShape::from_len(4), SegmentShape::Source);
        assert_eq!(SegmentShape::from_len(5), SegmentShape::Named);
        assert_eq!(SegmentShape::from_len(0), SegmentShape::Unsupported(0));
        assert_eq!(SegmentShape::from_len(3), SegmentShape::Unsupported(3));
        assert!(!SegmentShape::from_len(6).is_supported());
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(
            SegmentShape::Generated.to_string(),
            "1 value (generated column)"
        );
        assert_eq!(
            SegmentShape::Unsupported(2).to_string(),
            "2 values (unsupported)"
        );
    }

    #[test]
    fn test_split_short_segment() {
        let (deltas, rest) = Deltas::split(&[3]);
        assert_eq!(deltas.generated_column, Some(3));
        assert_eq!(deltas.source_index, None);
        assert_eq!(deltas.name_index, None);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_split_keeps_overflow_values() {
        let (deltas, rest) = Deltas::split(&[1, 2, 3, 4, 5, 6, -7]);
        assert_eq!(deltas.name_index, Some(5));
        assert_eq!(rest, vec![6, -7]);
    }

    #[test]
    fn test_undecodable_record() {
        let record = MappingRecord::undecodable(2, "A#", VlqError::invalid_character('#', 1));
        assert!(!record.valid);
        assert!(!record.is_decoded());
        assert_eq!(record.deltas, Deltas::default());
        assert_eq!(record.positions, Positions::default());
    }
}
