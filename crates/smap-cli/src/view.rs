//! Display-side view of mapping records.
//!
//! The decoder reports positions starting from zero. Tools that show them to
//! people usually want one-based lines or a different column origin, so the
//! view adds caller-chosen start offsets, and can switch to raw deltas.

use serde::Serialize;
use smap_mappings::MappingRecord;

/// Placeholder for absent values.
pub const ABSENT: &str = "-";

/// Which values a row shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Resolved positions, shifted by the start offsets.
    #[default]
    Absolute,
    /// The deltas as decoded from the segment.
    Delta,
}

/// Origins added to absolute positions.
///
/// Source and name indices have no offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOffsets {
    pub generated_line: i64,
    pub generated_column: i64,
    pub original_line: i64,
    pub original_column: i64,
}

/// One displayable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub generated_line: i64,
    pub generated_column: Option<i64>,
    pub source_index: Option<i64>,
    pub original_line: Option<i64>,
    pub original_column: Option<i64>,
    pub name_index: Option<i64>,
    pub rest: Vec<i32>,
    pub valid: bool,
}

impl RowView {
    pub fn new(record: &MappingRecord, mode: DisplayMode, offsets: &StartOffsets) -> Self {
        let line = i64::try_from(record.generated_line).unwrap_or(i64::MAX);
        let [generated_column, source_index, original_line, original_column, name_index] =
            match mode {
                DisplayMode::Absolute => {
                    let positions = &record.positions;
                    [
                        add_non_null(offsets.generated_column, positions.generated_column),
                        positions.source_index,
                        add_non_null(offsets.original_line, positions.original_line),
                        add_non_null(offsets.original_column, positions.original_column),
                        positions.name_index,
                    ]
                }
                DisplayMode::Delta => {
                    let deltas = &record.deltas;
                    [
                        deltas.generated_column,
                        deltas.source_index,
                        deltas.original_line,
                        deltas.original_column,
                        deltas.name_index,
                    ]
                    .map(|delta| delta.map(i64::from))
                }
            };
        Self {
            generated_line: offsets.generated_line.saturating_add(line),
            generated_column,
            source_index,
            original_line,
            original_column,
            name_index,
            rest: record.rest.clone(),
            valid: record.valid,
        }
    }

    /// The six position cells, in column order.
    pub fn cells(&self) -> [Option<i64>; 6] {
        [
            Some(self.generated_line),
            self.generated_column,
            self.source_index,
            self.original_line,
            self.original_column,
            self.name_index,
        ]
    }

    /// Values beyond the fifth, comma separated, if any.
    pub fn unused(&self) -> Option<String> {
        if self.rest.is_empty() {
            return None;
        }
        let values: Vec<String> = self.rest.iter().map(ToString::to_string).collect();
        Some(values.join(", "))
    }
}

/// Add `base` to `value` when the value is present.
pub fn add_non_null(base: i64, value: Option<i64>) -> Option<i64> {
    value.map(|value| base.saturating_add(value))
}

/// Render a cell value, using [`ABSENT`] for missing values.
pub fn format_value(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => ABSENT.to_string(),
    }
}

/// Column labels for the six position cells.
pub fn column_headers(mode: DisplayMode) -> [String; 6] {
    let relative = |label: &str| match mode {
        DisplayMode::Absolute => label.to_string(),
        DisplayMode::Delta => format!("Δ {label}"),
    };
    [
        "Generated Line".to_string(),
        relative("Generated Column"),
        relative("Source Index"),
        relative("Original Line"),
        relative("Original Column"),
        relative("Name Index"),
    ]
}
