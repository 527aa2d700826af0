//! VLQ segment decoding.

use std::iter::FusedIterator;

use crate::alphabet::sextet;
use crate::error::{Result, VlqError};
use crate::{VLQ_BASE_MASK, VLQ_BASE_SHIFT, VLQ_CONTINUATION_BIT};

/// Largest shift at which a non-zero 5-bit group still fits the 32-bit range.
const MAX_DATA_SHIFT: u32 = 30;

/// Largest assembled (sign-folded) value: the encoding of `i32::MIN`.
const MAX_ASSEMBLED: u64 = (1 << 32) | 1;

/// Iterator over the values of a single VLQ segment.
///
/// Yields one `Result<i32>` per encoded value and stops after the first error.
/// A trailing value whose last digit still carries the continuation bit is
/// dropped without an error; re-encoding the decoded values then exposes the
/// segment as non-canonical.
#[derive(Debug, Clone)]
pub struct SegmentDecoder<'a> {
    text: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> SegmentDecoder<'a> {
    /// Create a decoder over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread digit.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, error: VlqError) -> Option<Result<i32>> {
        self.failed = true;
        Some(Err(error))
    }

    fn invalid_character_at(&self, offset: usize) -> VlqError {
        // Every byte before `offset` is an ASCII digit, so `offset` is a char boundary.
        let character = self.text[offset..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        VlqError::invalid_character(character, offset)
    }
}

impl Iterator for SegmentDecoder<'_> {
    type Item = Result<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let bytes = self.text.as_bytes();
        let start = self.offset;
        let mut assembled: u64 = 0;
        let mut shift: u32 = 0;

        while let Some(&byte) = bytes.get(self.offset) {
            let Some(bits) = sextet(byte) else {
                let error = self.invalid_character_at(self.offset);
                return self.fail(error);
            };
            self.offset += 1;

            let data = u64::from(bits & VLQ_BASE_MASK);
            if data != 0 {
                if shift > MAX_DATA_SHIFT {
                    return self.fail(VlqError::overflow(start));
                }
                assembled |= data << shift;
                if assembled > MAX_ASSEMBLED {
                    return self.fail(VlqError::overflow(start));
                }
            }

            if bits & VLQ_CONTINUATION_BIT == 0 {
                return match unfold_sign(assembled) {
                    Some(value) => Some(Ok(value)),
                    None => self.fail(VlqError::overflow(start)),
                };
            }
            shift = shift.saturating_add(VLQ_BASE_SHIFT);
        }
        None
    }
}

impl FusedIterator for SegmentDecoder<'_> {}

/// Split the sign bit off an assembled value. `-0` folds to `0`.
fn unfold_sign(assembled: u64) -> Option<i32> {
    let magnitude = (assembled >> 1) as i64;
    let signed = if assembled & 1 == 1 {
        -magnitude
    } else {
        magnitude
    };
    i32::try_from(signed).ok()
}

/// Decode every value of a VLQ segment.
///
/// An empty string decodes to an empty sequence.
///
/// # Errors
///
/// Returns [`VlqError::InvalidCharacter`] for a character outside the Base64
/// alphabet and [`VlqError::Overflow`] for a value outside the `i32` range.
pub fn decode(text: &str) -> Result<Vec<i32>> {
    SegmentDecoder::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_values() {
        assert_eq!(decode("A").unwrap(), vec![0]);
        assert_eq!(decode("C").unwrap(), vec![1]);
        assert_eq!(decode("D").unwrap(), vec![-1]);
        assert_eq!(decode("gB").unwrap(), vec![16]);
        assert_eq!(decode("2H").unwrap(), vec![123]);
        assert_eq!(decode("qxmvrH").unwrap(), vec![123_456_789]);
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode("AAAA").unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(decode("CAACA").unwrap(), vec![1, 0, 0, 1, 0]);
        assert_eq!(decode("AAgBC").unwrap(), vec![0, 0, 16, 1]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_decode_negative_zero_is_zero() {
        assert_eq!(decode("B").unwrap(), vec![0]);
    }

    #[test]
    fn test_decode_extremes() {
        assert_eq!(decode("+/////D").unwrap(), vec![i32::MAX]);
        assert_eq!(decode("hgggggE").unwrap(), vec![i32::MIN]);
    }

    #[test]
    fn test_decode_overflow() {
        // i32::MAX + 1
        assert_eq!(decode("ggggggE"), Err(VlqError::overflow(0)));
        assert_eq!(decode("AhgggggF"), Err(VlqError::overflow(1)));
        assert_eq!(decode("gggggggB"), Err(VlqError::overflow(0)));
    }

    #[test]
    fn test_redundant_zero_groups_do_not_overflow() {
        assert_eq!(decode("gA").unwrap(), vec![0]);
        assert_eq!(decode("ggggggggggggggA").unwrap(), vec![0]);
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("AA#A"),
            Err(VlqError::invalid_character('#', 2))
        );
        assert_eq!(decode("Cé"), Err(VlqError::invalid_character('é', 1)));
        assert_eq!(decode(","), Err(VlqError::invalid_character(',', 0)));
    }

    #[test]
    fn test_trailing_continuation_is_dropped() {
        assert_eq!(decode("Ag").unwrap(), vec![0]);
        assert_eq!(decode("g").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_decoder_stops_after_error() {
        let mut decoder = SegmentDecoder::new("C!C");
        assert_eq!(decoder.next(), Some(Ok(1)));
        assert_eq!(
            decoder.next(),
            Some(Err(VlqError::invalid_character('!', 1)))
        );
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn test_decoder_offset_tracks_progress() {
        let mut decoder = SegmentDecoder::new("gBC");
        assert_eq!(decoder.offset(), 0);
        decoder.next();
        assert_eq!(decoder.offset(), 2);
        decoder.next();
        assert_eq!(decoder.offset(), 3);
    }
}
