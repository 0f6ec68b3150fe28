//! Text editing API
//!
//! Stateless access to the doubled-vowel rule for pages that manage their
//! own snapshots, plus the SRO input entry point of the mounted session.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, to_js_error, with_session};
use crate::models::vowels::long_vowel_of;
use crate::text::transducer::transduce;
use crate::wasm_log;

/// Run one edit through the doubled-vowel rule.
///
/// Returns `{ rewritten, handled, cursor }`.
#[wasm_bindgen(js_name = transduceEdit)]
pub fn transduce_edit(previous: &str, current: &str) -> Result<JsValue, JsValue> {
    let result = transduce(previous, current);
    if result.handled {
        wasm_log!("transduceEdit: {:?} -> {:?}", current, result.rewritten);
    }
    serialize(&result, "Serialization error")
}

/// Long form of a short vowel; throws for anything else
#[wasm_bindgen(js_name = longVowelOf)]
pub fn long_vowel_of_js(vowel: char) -> Result<char, JsValue> {
    long_vowel_of(vowel).map_err(to_js_error)
}

/// Feed the SRO control's new value to the session.
///
/// Returns `{ text, handled, cursor }`; when `handled` the caller writes
/// `text` back and restores the caret.
#[wasm_bindgen(js_name = applySroEdit)]
pub fn apply_sro_edit(value: &str) -> Result<JsValue, JsValue> {
    let result = with_session(|session| Ok(session.on_sro_input(value)))?;
    serialize(&result, "Serialization error")
}

/// Current contents of the `sro` or `syl` buffer
#[wasm_bindgen(js_name = getBufferValue)]
pub fn get_buffer_value(name: &str) -> Result<String, JsValue> {
    with_session(|session| {
        session
            .value_by_name(name)
            .map(str::to_string)
            .map_err(to_js_error)
    })
}
