//! Rendering of decoded mappings: terminal table, CSV and JSON.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use smap_mappings::{MappingSet, Rejection};

use crate::view::{DisplayMode, RowView, StartOffsets, column_headers, format_value};

/// Header of the column listing values beyond the fifth.
const UNUSED_HEADER: &str = "Unused";

/// Header of the validity column in machine-readable output.
const VALID_HEADER: &str = "Valid";

/// Message shown when the input is not a mappings string.
pub const NO_MAPPINGS_MESSAGE: &str = "Not VLQ-encoded, or no mappings found";

/// One-line summary printed above the table.
pub fn summary_line(set: &MappingSet) -> String {
    let invalid = set.invalid_count();
    if invalid == 0 {
        format!("{} mapping(s) found", set.len())
    } else {
        format!(
            "{} mapping(s) found, {invalid} invalid segment(s)",
            set.len()
        )
    }
}

/// Build the terminal table. Invalid rows are shown in red.
pub fn build_table(set: &MappingSet, mode: DisplayMode, offsets: &StartOffsets) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = column_headers(mode)
        .iter()
        .map(|label| header_cell(label))
        .collect();
    header.push(header_cell(UNUSED_HEADER));
    table.set_header(header);
    apply_mappings_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for record in set {
        let row = RowView::new(record, mode, offsets);
        let mut cells: Vec<Cell> = row
            .cells()
            .iter()
            .map(|&value| value_cell(value, row.valid))
            .collect();
        cells.push(match row.unused() {
            Some(values) => Cell::new(format!("Unused: {values}")).fg(Color::Yellow),
            None => dim_cell("-"),
        });
        table.add_row(cells);
    }
    table
}

/// Write one CSV row per record, absent values as empty fields.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(
    writer: W,
    set: &MappingSet,
    mode: DisplayMode,
    offsets: &StartOffsets,
) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    let mut header: Vec<String> = column_headers(mode).to_vec();
    header.push(UNUSED_HEADER.to_string());
    header.push(VALID_HEADER.to_string());
    csv.write_record(&header).context("write csv header")?;

    for record in set {
        let row = RowView::new(record, mode, offsets);
        let mut fields: Vec<String> = row
            .cells()
            .iter()
            .map(|value| value.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect();
        let unused: Vec<String> = row.rest.iter().map(ToString::to_string).collect();
        fields.push(unused.join(" "));
        fields.push(row.valid.to_string());
        csv.write_record(&fields).context("write csv row")?;
    }
    csv.flush().context("flush csv output")?;
    Ok(())
}

/// Serialize the decoded set as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(set: &MappingSet) -> Result<String> {
    serde_json::to_string_pretty(set).context("serialize mappings")
}

/// Pretty JSON for an input rejected as a whole.
pub fn rejection_to_json(rejection: &Rejection) -> Result<String> {
    serde_json::to_string_pretty(rejection).context("serialize rejection")
}

fn apply_mappings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<i64>, valid: bool) -> Cell {
    match (value, valid) {
        (None, _) => dim_cell(format_value(None)),
        (Some(value), true) => Cell::new(value),
        (Some(value), false) => Cell::new(value).fg(Color::Red),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
