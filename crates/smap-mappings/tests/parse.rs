//! Integration tests for mappings parsing.

use proptest::prelude::*;

use smap_mappings::{MappingRecord, ParseOutcome, Rejection, parse_mappings};
use smap_vlq::{check_canonical, encode};

fn segment_values() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        prop::collection::vec(-64..64i32, 1..=1),
        prop::collection::vec(-64..64i32, 4..=4),
        prop::collection::vec(-64..64i32, 5..=5),
    ]
}

fn mappings_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(segment_values(), 0..4), 1..5).prop_map(|lines| {
        lines
            .iter()
            .map(|segments| {
                segments
                    .iter()
                    .map(|values| encode(values))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join(";")
    })
    .prop_filter("empty input is rejected", |text| !text.is_empty())
}

fn present_fields(record: &MappingRecord) -> usize {
    let deltas = &record.deltas;
    [
        deltas.generated_column,
        deltas.source_index,
        deltas.original_line,
        deltas.original_column,
        deltas.name_index,
    ]
    .iter()
    .filter(|delta| delta.is_some())
    .count()
}

proptest! {
    #[test]
    fn parsing_is_idempotent(text in "[A-Za-z0-9+/,;]{0,40}") {
        prop_assert_eq!(parse_mappings(&text), parse_mappings(&text));
    }

    #[test]
    fn valid_iff_canonical_for_supported_shapes(text in mappings_text()) {
        let outcome = parse_mappings(&text);
        let set = outcome.mappings().expect("well-formed");
        prop_assert_eq!(set.line_count, text.split(';').count());
        for record in set {
            prop_assert!(record.valid);
            prop_assert!(check_canonical(&record.segment).unwrap());
        }
    }

    #[test]
    fn absolute_columns_are_prefix_sums(text in mappings_text()) {
        let outcome = parse_mappings(&text);
        let set = outcome.mappings().expect("well-formed");
        for (_, records) in set.lines() {
            let mut column = 0i64;
            for record in records {
                column += i64::from(record.deltas.generated_column.unwrap());
                prop_assert_eq!(record.positions.generated_column, Some(column));
            }
        }
        let mut original_line = 0i64;
        for record in set {
            if let Some(delta) = record.deltas.original_line {
                original_line += i64::from(delta);
                prop_assert_eq!(record.positions.original_line, Some(original_line));
            } else {
                prop_assert_eq!(record.positions.original_line, None);
            }
        }
    }

    #[test]
    fn arbitrary_alphabet_input_never_rejected(text in "[A-Za-z0-9+/,;]{1,40}") {
        let outcome = parse_mappings(&text);
        prop_assert!(!outcome.is_rejected());
        for record in outcome.mappings().unwrap() {
            let canonical = check_canonical(&record.segment).unwrap_or(false);
            let decoded_len = present_fields(record) + record.rest.len();
            prop_assert_eq!(record.valid, canonical && matches!(decoded_len, 1 | 4 | 5));
        }
    }
}

#[test]
fn rejection_is_distinct_from_empty_result() {
    assert!(matches!(
        parse_mappings(";"),
        ParseOutcome::Mappings(set) if set.is_empty() && set.line_count == 2
    ));
    assert_eq!(
        parse_mappings("AAAA;###").rejection(),
        Some(Rejection::InvalidCharacter {
            character: '#',
            offset: 5
        })
    );
    assert_eq!(parse_mappings("").rejection(), Some(Rejection::Empty));
}

#[test]
fn records_serialize_to_json() {
    let outcome = parse_mappings("AAAA,G");
    let set = outcome.mappings().unwrap();
    let json = serde_json::to_value(set).unwrap();
    assert_eq!(json["line_count"], 1);
    assert_eq!(json["records"][1]["positions"]["generated_column"], 3);
    assert!(json["records"][1]["positions"]["source_index"].is_null());
    assert_eq!(json["records"][1]["valid"], true);
    assert!(json["records"][1]["fault"].is_null());
}

#[test]
fn decode_faults_serialize_as_messages() {
    let outcome = parse_mappings("ggggggE");
    let json = serde_json::to_value(outcome.mappings().unwrap()).unwrap();
    assert_eq!(
        json["records"][0]["fault"],
        "value starting at offset 0 overflows a 32-bit integer"
    );
}

#[test]
fn rejection_serializes_with_reason_tag() {
    let json = serde_json::to_value(Rejection::InvalidCharacter {
        character: '#',
        offset: 5,
    })
    .unwrap();
    assert_eq!(json["reason"], "invalid_character");
    assert_eq!(json["offset"], 5);
}
