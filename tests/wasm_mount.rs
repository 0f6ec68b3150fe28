//! Mounting the converter page in a browser
//!
//! Kept apart from `wasm_build.rs` because mounting installs the page
//! session for the rest of the test binary.

#![cfg(target_arch = "wasm32")]

use sro_syllabics_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_textarea(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let textarea = document.create_element("textarea").unwrap();
    textarea.set_id(id);
    document.body().unwrap().append_child(&textarea).unwrap();
}

#[wasm_bindgen_test]
fn test_second_mount_is_refused() {
    add_textarea("sro");
    add_textarea("syl");

    assert!(mount_page(JsValue::UNDEFINED).is_ok());
    assert!(mount_page(JsValue::UNDEFINED).is_err());

    // The first session is still the one answering
    assert!(handle_request(r#"{"sro":"a"}"#).is_ok());
}
