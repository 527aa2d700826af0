//! Property tests for the VLQ codec.

use proptest::prelude::*;

use smap_vlq::alphabet::BASE64_ALPHABET;
use smap_vlq::{VlqError, check_canonical, decode, encode};

fn base64_segment() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(BASE64_ALPHABET.to_vec()), 0..16)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

proptest! {
    #[test]
    fn single_value_roundtrips(value in any::<i32>()) {
        prop_assert_eq!(decode(&encode(&[value])).unwrap(), vec![value]);
    }

    #[test]
    fn sequences_roundtrip(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let text = encode(&values);
        prop_assert_eq!(decode(&text).unwrap(), values);
        prop_assert!(check_canonical(&text).unwrap());
    }

    #[test]
    fn canonical_iff_reencoding_matches(text in base64_segment()) {
        match decode(&text) {
            Ok(values) => {
                let canonical = check_canonical(&text).unwrap();
                prop_assert_eq!(canonical, encode(&values) == text);
            }
            Err(error) => {
                let overflow = matches!(error, VlqError::Overflow { .. });
                prop_assert!(overflow, "unexpected decode error: {}", error);
            }
        }
    }

    #[test]
    fn decode_never_panics(text in ".{0,24}") {
        let _ = decode(&text);
    }
}

#[test]
fn encoded_digits_stay_in_alphabet() {
    let text = encode(&[0, 1, -1, 1024, -1024, i32::MAX, i32::MIN]);
    assert!(text.bytes().all(|b| BASE64_ALPHABET.contains(&b)));
}
