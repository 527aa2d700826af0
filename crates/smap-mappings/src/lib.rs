//! Decoder for the `mappings` field of source maps.
//!
//! [`parse_mappings`] turns a raw mappings string into one [`MappingRecord`]
//! per segment. Each record keeps the deltas decoded from its segment and the
//! absolute positions obtained by accumulating them in document order.
//!
//! # Example
//!
//! ```
//! use smap_mappings::parse_mappings;
//!
//! let outcome = parse_mappings("AAAA,CAACA;AACA");
//! let set = outcome.mappings().unwrap();
//! assert_eq!(set.len(), 3);
//!
//! let last = &set.records[2];
//! assert_eq!(last.generated_line, 1);
//! assert_eq!(last.positions.generated_column, Some(0));
//! assert_eq!(last.positions.original_line, Some(1));
//! ```
//!
//! Inputs that cannot be a mappings string at all come back as
//! [`ParseOutcome::NoMappings`], which is distinct from a well-formed input
//! that simply holds no segments:
//!
//! ```
//! use smap_mappings::{ParseOutcome, parse_mappings};
//!
//! assert!(parse_mappings("{\"version\":3}").is_rejected());
//! assert!(matches!(parse_mappings(";"), ParseOutcome::Mappings(set) if set.is_empty()));
//! ```

mod outcome;
mod parser;
mod record;
mod totals;

pub use outcome::{MappingSet, ParseOutcome, Rejection};
pub use parser::{LINE_SEPARATOR, SEGMENT_SEPARATOR, is_mappings_char, parse_mappings, unescape};
pub use record::{Deltas, MappingRecord, Positions, SEMANTIC_FIELDS, SegmentShape};
pub use totals::RunningTotals;

pub use smap_vlq::VlqError;
