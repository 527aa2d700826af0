//! Base64 VLQ codec for source map segments.
//!
//! A source map `mappings` field is a list of segments, each a run of signed
//! integers encoded as Base64 variable-length quantities. Every Base64 digit
//! carries five data bits (least significant group first) and a continuation
//! bit; the lowest bit of each assembled value is its sign.
//!
//! # Example
//!
//! ```
//! use smap_vlq::{check_canonical, decode, encode};
//!
//! let values = decode("CAACA").unwrap();
//! assert_eq!(values, vec![1, 0, 0, 1, 0]);
//! assert_eq!(encode(&values), "CAACA");
//!
//! // `gA` decodes to 0 but is not how 0 is encoded.
//! assert_eq!(decode("gA").unwrap(), vec![0]);
//! assert!(!check_canonical("gA").unwrap());
//! ```
//!
//! # Integer width
//!
//! Values are `i32`. Anything outside that range is reported as
//! [`VlqError::Overflow`] instead of being truncated.

pub mod alphabet;
mod decode;
mod encode;
mod error;
mod validate;

pub use error::{Result, VlqError};

pub use decode::{SegmentDecoder, decode};
pub use encode::{encode, encode_value};
pub use validate::{canonicalize, check_canonical, is_canonical};

/// Number of data bits carried by one Base64 digit.
pub(crate) const VLQ_BASE_SHIFT: u32 = 5;

/// Mask selecting the data bits of a digit.
pub(crate) const VLQ_BASE_MASK: u8 = 0x1F;

/// Continuation flag: set on every digit except the last of a value.
pub(crate) const VLQ_CONTINUATION_BIT: u8 = 0x20;
