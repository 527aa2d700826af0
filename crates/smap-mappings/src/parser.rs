//! Mappings string parser.
//!
//! Splits the input into generated lines (`;`) and segments (`,`), decodes
//! each segment and resolves it against the running totals.

use std::borrow::Cow;

use smap_vlq::alphabet::is_digit;
use smap_vlq::{decode, is_canonical};
use tracing::{debug, trace};

use crate::outcome::{MappingSet, ParseOutcome, Rejection};
use crate::record::{Deltas, MappingRecord, SegmentShape};
use crate::totals::RunningTotals;

/// Separator between generated lines.
pub const LINE_SEPARATOR: char = ';';

/// Separator between segments of one generated line.
pub const SEGMENT_SEPARATOR: char = ',';

/// Replace JSON-escaped slashes (`\/`) with `/`.
pub fn unescape(input: &str) -> Cow<'_, str> {
    if input.contains("\\/") {
        Cow::Owned(input.replace("\\/", "/"))
    } else {
        Cow::Borrowed(input)
    }
}

/// Returns true for characters allowed anywhere in a mappings string.
pub fn is_mappings_char(c: char) -> bool {
    c == LINE_SEPARATOR || c == SEGMENT_SEPARATOR || (c.is_ascii() && is_digit(c as u8))
}

/// Parse a mappings string into records.
///
/// The input is rejected as a whole when it is empty or contains a character
/// that cannot appear in a mappings string. Otherwise every non-empty segment
/// yields exactly one record, in input order. Segments that fail to decode or
/// are not canonically encoded still produce a record, flagged invalid.
pub fn parse_mappings(input: &str) -> ParseOutcome {
    let input = unescape(input);
    if input.is_empty() {
        debug!("empty mappings input");
        return ParseOutcome::NoMappings(Rejection::Empty);
    }
    if let Some((offset, character)) = input.char_indices().find(|&(_, c)| !is_mappings_char(c))
    {
        debug!(%character, offset, "input is not a mappings string");
        return ParseOutcome::NoMappings(Rejection::InvalidCharacter { character, offset });
    }

    let mut records = Vec::new();
    let mut totals = RunningTotals::default();
    let mut line_count = 0;
    for (generated_line, group) in input.split(LINE_SEPARATOR).enumerate() {
        totals.start_line();
        for segment in group.split(SEGMENT_SEPARATOR).filter(|s| !s.is_empty()) {
            records.push(build_record(generated_line, segment, &mut totals));
        }
        line_count = generated_line + 1;
    }

    let set = MappingSet {
        records,
        line_count,
    };
    debug!(
        records = set.len(),
        lines = set.line_count,
        invalid = set.invalid_count(),
        "parsed mappings"
    );
    ParseOutcome::Mappings(set)
}

fn build_record(generated_line: usize, segment: &str, totals: &mut RunningTotals) -> MappingRecord {
    let values = match decode(segment) {
        Ok(values) => values,
        Err(fault) => {
            trace!(generated_line, segment, %fault, "segment failed to decode");
            return MappingRecord::undecodable(generated_line, segment, fault);
        }
    };
    let shape = SegmentShape::from_len(values.len());
    let valid = shape.is_supported() && is_canonical(segment, &values);
    if !valid {
        trace!(generated_line, segment, ?shape, "invalid segment");
    }
    let (deltas, rest) = Deltas::split(&values);
    let positions = totals.apply(&deltas);
    MappingRecord {
        generated_line,
        segment: segment.to_owned(),
        deltas,
        positions,
        rest,
        valid,
        fault: None,
    }
}
