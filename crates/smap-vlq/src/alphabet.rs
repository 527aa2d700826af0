//! Base64 digit table used by source map VLQ segments.

/// The 64 Base64 digits in index order.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Marker for bytes that are not Base64 digits.
const NOT_A_DIGIT: u8 = 0xFF;

const REVERSE: [u8; 128] = build_reverse_table();

const fn build_reverse_table() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut index = 0;
    while index < BASE64_ALPHABET.len() {
        table[BASE64_ALPHABET[index] as usize] = index as u8;
        index += 1;
    }
    table
}

/// Look up the 6-bit value of a Base64 digit.
///
/// Returns `None` for any byte outside the alphabet, including non-ASCII bytes.
#[inline]
pub fn sextet(byte: u8) -> Option<u8> {
    match REVERSE.get(byte as usize) {
        Some(&value) if value != NOT_A_DIGIT => Some(value),
        _ => None,
    }
}

/// Map a 6-bit value to its Base64 digit. Bits above the sixth are ignored.
#[inline]
pub fn digit(sextet: u8) -> char {
    BASE64_ALPHABET[(sextet & 0x3F) as usize] as char
}

/// Returns true if `byte` is a Base64 digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    sextet(byte).is_some()
}
