//! Shared helpers for WASM API operations
//!
//! Console logging, serialization, error conversion and access to the
//! page session.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::converter::JsTransliterator;
use crate::session::EditorSession;

// WASM-owned page session, created by mountPage
lazy_static! {
    static ref SESSION: Mutex<Option<EditorSession<JsTransliterator>>> = Mutex::new(None);
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Convert a Rust error into a logged JS error string
pub fn to_js_error(err: impl Display) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Session Access
// ============================================================================

pub type SessionGuard = MutexGuard<'static, Option<EditorSession<JsTransliterator>>>;

pub fn lock_session() -> Result<SessionGuard, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("Session lock poisoned"))
}

/// Run `f` against the mounted session
pub fn with_session<R>(
    f: impl FnOnce(&mut EditorSession<JsTransliterator>) -> Result<R, JsValue>,
) -> Result<R, JsValue> {
    let mut guard = lock_session()?;
    let session = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("Page not mounted"))?;
    f(session)
}

pub fn is_mounted() -> Result<bool, JsValue> {
    Ok(lock_session()?.is_some())
}

/// Store `session` in an empty slot. An occupied slot is left alone and the
/// session is handed back.
fn fill_empty<S>(slot: &mut Option<S>, session: S) -> Result<(), S> {
    if slot.is_some() {
        return Err(session);
    }
    *slot = Some(session);
    Ok(())
}

/// Install the page session. Only one session is ever installed, since the
/// listeners bound to the first one live as long as the page.
pub fn install_session(session: EditorSession<JsTransliterator>) -> Result<(), JsValue> {
    fill_empty(&mut *lock_session()?, session)
        .map_err(|_| JsValue::from_str("Page already mounted"))
}

// ============================================================================
// Position Helpers
// ============================================================================

/// Convert a char index into the UTF-16 offset the DOM selection API expects
pub fn char_to_utf16_index(text: &str, char_index: usize) -> u32 {
    text.chars()
        .take(char_index)
        .map(char::len_utf16)
        .sum::<usize>() as u32
}
