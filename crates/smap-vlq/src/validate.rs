//! Canonical-encoding checks.
//!
//! A segment is canonical when it equals the re-encoding of its own decoded
//! values. The check is kept apart from [`decode`](crate::decode) so the codec
//! stays a plain two-way primitive.

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;

/// Returns true if `text` is exactly the canonical encoding of `values`.
pub fn is_canonical(text: &str, values: &[i32]) -> bool {
    // Compare digit by digit without allocating the whole re-encoding.
    let mut buf = String::new();
    let mut rest = text;
    for &value in values {
        buf.clear();
        crate::encode::encode_value(&mut buf, value);
        match rest.strip_prefix(buf.as_str()) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    rest.is_empty()
}

/// Decode `text` and report whether it is canonically encoded.
///
/// # Errors
///
/// Propagates any decode error.
pub fn check_canonical(text: &str) -> Result<bool> {
    let values = decode(text)?;
    Ok(is_canonical(text, &values))
}

/// Re-encode `text` into its canonical form.
///
/// # Errors
///
/// Propagates any decode error.
pub fn canonicalize(text: &str) -> Result<String> {
    decode(text).map(|values| encode(&values))
}
