// Test location fragment decoding and encoding through the public API

use sro_syllabics_wasm::fragment::{decode, encode, FragmentError, FragmentState};

#[test]
fn test_decode_shared_sro_link() {
    let state = decode("#!sro:n%C3%AAhiyaw%C3%AAwin").expect("fragment should decode");
    assert_eq!(state.get("sro"), Some("nêhiyawêwin"));
    assert_eq!(state.len(), 1);
}

#[test]
fn test_decode_without_state_marker() {
    let state = decode("#view").expect("fragment should decode");
    assert!(state.is_empty());
}

#[test]
fn test_decode_duplicate_keys() {
    let state = decode("#x!sro:aaa;syl:bbb;sro:ccc").expect("fragment should decode");
    assert_eq!(state.get("sro"), Some("ccc"));
    assert_eq!(state.get("syl"), Some("bbb"));
}

#[test]
fn test_decode_keeps_unknown_keys() {
    let state = decode("#x!theme:dark;sro:a").expect("fragment should decode");
    assert_eq!(state.get("theme"), Some("dark"));
}

#[test]
fn test_malformed_value_rejects_fragment() {
    let err = decode("#x!sro:good;syl:%GG").unwrap_err();
    assert!(
        matches!(err, FragmentError::MalformedFragmentValue { ref key, .. } if key == "syl"),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_share_link_round_trip() {
    let state: FragmentState = [("sro", "nêhiyawêwin"), ("syl", "ᓀᐦᐃᔭᐍᐏᐣ")]
        .into_iter()
        .collect();

    let fragment = encode("", &state).expect("fragment should encode");
    assert!(fragment.starts_with("#!sro:n%C3%AAhiyaw%C3%AAwin;syl:"));

    let decoded = decode(&fragment).expect("fragment should decode");
    assert_eq!(decoded, state);
}
