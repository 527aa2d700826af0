//! Parse results.

use serde::Serialize;

use crate::record::MappingRecord;

/// Records decoded from a well-formed mappings string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingSet {
    /// Records in input order.
    pub records: Vec<MappingRecord>,
    /// Number of `;`-delimited groups, empty ones included.
    pub line_count: usize,
}

impl MappingSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingRecord> {
        self.records.iter()
    }

    /// Number of records flagged invalid.
    pub fn invalid_count(&self) -> usize {
        self.records.iter().filter(|record| !record.valid).count()
    }

    /// Records grouped by generated line. Lines without records are skipped.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &[MappingRecord])> + '_ {
        self.records
            .chunk_by(|a, b| a.generated_line == b.generated_line)
            .map(|chunk| (chunk[0].generated_line, chunk))
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a MappingRecord;
    type IntoIter = std::slice::Iter<'a, MappingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Why an input was not treated as a mappings string at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Nothing to parse.
    Empty,
    /// A character outside `A-Z a-z 0-9 + / , ;`, at a byte offset of the
    /// unescaped input.
    InvalidCharacter { character: char, offset: usize },
}

/// Result of [`parse_mappings`](crate::parse_mappings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The input was a mappings string; the set may be empty.
    Mappings(MappingSet),
    /// The input was rejected as a whole.
    NoMappings(Rejection),
}

impl ParseOutcome {
    pub fn mappings(&self) -> Option<&MappingSet> {
        match self {
            Self::Mappings(set) => Some(set),
            Self::NoMappings(_) => None,
        }
    }

    pub fn into_mappings(self) -> Option<MappingSet> {
        match self {
            Self::Mappings(set) => Some(set),
            Self::NoMappings(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Mappings(_) => None,
            Self::NoMappings(rejection) => Some(*rejection),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::NoMappings(_))
    }
}
