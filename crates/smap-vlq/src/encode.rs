//! VLQ segment encoding.

use crate::alphabet::digit;
use crate::{VLQ_BASE_MASK, VLQ_BASE_SHIFT, VLQ_CONTINUATION_BIT};

/// Append the VLQ encoding of a single value to `buf`.
pub fn encode_value(buf: &mut String, value: i32) {
    let mut folded = (u64::from(value.unsigned_abs()) << 1) | u64::from(value < 0);
    loop {
        let mut sextet = (folded & u64::from(VLQ_BASE_MASK)) as u8;
        folded >>= VLQ_BASE_SHIFT;
        if folded > 0 {
            sextet |= VLQ_CONTINUATION_BIT;
        }
        buf.push(digit(sextet));
        if folded == 0 {
            break;
        }
    }
}

/// Encode a sequence of values as one VLQ segment.
///
/// The result is the canonical encoding: no redundant continuation groups and
/// no negative zero. An empty slice encodes to an empty string.
pub fn encode(values: &[i32]) -> String {
    let mut buf = String::with_capacity(values.len() * 2);
    for &value in values {
        encode_value(&mut buf, value);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_values() {
        assert_eq!(encode(&[0]), "A");
        assert_eq!(encode(&[1]), "C");
        assert_eq!(encode(&[-1]), "D");
        assert_eq!(encode(&[15]), "e");
        assert_eq!(encode(&[16]), "gB");
        assert_eq!(encode(&[123]), "2H");
        assert_eq!(encode(&[123_456_789]), "qxmvrH");
    }

    #[test]
    fn test_encode_extremes() {
        assert_eq!(encode(&[i32::MAX]), "+/////D");
        assert_eq!(encode(&[i32::MIN]), "hgggggE");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode(&[0, 0, 0, 0]), "AAAA");
        assert_eq!(encode(&[1, 0, 1, 0]), "CACA");
        assert_eq!(encode(&[2, 0, -1, 4, 3]), "EADIG");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_value_appends() {
        let mut buf = String::from("AAAA,");
        encode_value(&mut buf, -16);
        assert_eq!(buf, "AAAA,hB");
    }
}
