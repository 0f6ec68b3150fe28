//! Location fragment API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, to_js_error, with_session};
use crate::fragment::{self, FragmentState};
use crate::models::buffers::BufferId;
use crate::wasm_warn;

pub(crate) fn location_hash() -> Result<String, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .hash()
}

/// Decode `#tag!k:v;...` into a plain object. Throws on malformed escapes.
#[wasm_bindgen(js_name = decodeFragment)]
pub fn decode_fragment(fragment: &str) -> Result<JsValue, JsValue> {
    let state = fragment::decode(fragment).map_err(to_js_error)?;
    serialize(&state, "Serialization error")
}

/// Encode a plain object of strings into `#tag!k:v;...`
#[wasm_bindgen(js_name = encodeFragment)]
pub fn encode_fragment(tag: &str, pairs: JsValue) -> Result<String, JsValue> {
    let state: FragmentState = deserialize(pairs, "Invalid fragment pairs")?;
    fragment::encode(tag, &state).map_err(to_js_error)
}

/// Fragment for bookmarking the mounted page's current buffers
#[wasm_bindgen(js_name = shareFragment)]
pub fn share_fragment(tag: &str) -> Result<String, JsValue> {
    with_session(|session| session.to_fragment(tag).map_err(to_js_error))
}

/// Initial value for the `sro` or `syl` textarea from the current location.
///
/// Returns `undefined` for other names, or when the fragment has no value.
#[wasm_bindgen(js_name = getDefaultTextareaValue)]
pub fn get_default_textarea_value(name: &str) -> Result<Option<String>, JsValue> {
    let Some(id) = BufferId::from_key(name) else {
        return Ok(None);
    };

    match fragment::decode(&location_hash()?) {
        Ok(state) => Ok(state.buffer(id).map(str::to_string)),
        Err(err) => {
            wasm_warn!("ignoring location fragment: {}", err);
            Ok(None)
        }
    }
}
