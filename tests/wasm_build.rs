//! WASM build test
//!
//! Exercises the JavaScript-facing API in a browser.

#![cfg(target_arch = "wasm32")]

use sro_syllabics_wasm::api::*;
use sro_syllabics_wasm::text::Transduction;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_transduce_edit() {
    let value = transduce_edit("nama", "namaa").unwrap();
    let result: Transduction = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(result.handled);
    assert_eq!(result.rewritten, "namâ");
    assert_eq!(result.cursor, Some(4));
}

#[wasm_bindgen_test]
fn test_long_vowel_of() {
    assert_eq!(long_vowel_of_js('o').unwrap(), 'ô');
    assert!(long_vowel_of_js('u').is_err());
}

#[wasm_bindgen_test]
fn test_decode_fragment() {
    let value = decode_fragment("#x!sro:aaa;syl:bbb;sro:ccc").unwrap();
    let sro = js_sys::Reflect::get(&value, &JsValue::from_str("sro")).unwrap();
    assert_eq!(sro.as_string().as_deref(), Some("ccc"));
}

#[wasm_bindgen_test]
fn test_decode_fragment_throws_on_bad_escape() {
    assert!(decode_fragment("#x!sro:%ZZ").is_err());
}

#[wasm_bindgen_test]
fn test_encode_fragment() {
    let pairs = js_sys::Object::new();
    js_sys::Reflect::set(&pairs, &JsValue::from_str("sro"), &JsValue::from_str("nêhiyawêwin")).unwrap();
    assert_eq!(
        encode_fragment("", pairs.into()).unwrap(),
        "#!sro:n%C3%AAhiyaw%C3%AAwin"
    );
}

#[wasm_bindgen_test]
fn test_session_calls_fail_before_mount() {
    assert!(handle_request(r#"{"sro":"a"}"#).is_err());
}
