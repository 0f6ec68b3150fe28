//! Binding to the `cree-sro-syllabics` JavaScript library
//!
//! The page bundles the library and exposes it as a global object. It is
//! looked up on every call, so nothing JS-owned is held across calls.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::settings::LongAccents;
use crate::session::Transliterator;
use crate::wasm_error;

/// Global name the bundle registers the library under
pub const DEFAULT_GLOBAL: &str = "CreeSROSyllabics";

#[derive(Debug, Clone, Copy)]
pub struct JsTransliterator {
    global_name: &'static str,
}

impl JsTransliterator {
    pub fn new(global_name: &'static str) -> Self {
        Self { global_name }
    }

    fn library(&self) -> Result<Object, JsValue> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str(self.global_name))?;
        value.dyn_into::<Object>().map_err(|_| {
            JsValue::from_str(&format!("Conversion library {} not loaded", self.global_name))
        })
    }

    fn call(&self, function: &str, args: &Array) -> Result<String, JsValue> {
        let library = self.library()?;
        let callee: Function = Reflect::get(&library, &JsValue::from_str(function))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("{} is not a function", function)))?;

        callee
            .apply(&library, args)?
            .as_string()
            .ok_or_else(|| JsValue::from_str(&format!("{} did not return a string", function)))
    }

    /// Convert, logging failures. The page keeps working with an empty
    /// output box rather than throwing out of an input handler.
    fn call_or_log(&self, function: &str, args: &Array) -> String {
        self.call(function, args).unwrap_or_else(|err| {
            wasm_error!("{} failed: {:?}", function, err);
            String::new()
        })
    }

    /// The library's version string, if it is loaded
    pub fn version(&self) -> Option<String> {
        let library = self.library().ok()?;
        let version = Reflect::get(&library, &JsValue::from_str("version")).ok()?;
        if version.is_undefined() {
            return None;
        }
        Some(String::from(version.unchecked_into::<Object>().to_string()))
    }
}

impl Default for JsTransliterator {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBAL)
    }
}

impl Transliterator for JsTransliterator {
    fn sro_to_syllabics(&self, sro: &str) -> String {
        self.call_or_log("sro2syllabics", &Array::of1(&JsValue::from_str(sro)))
    }

    fn syllabics_to_sro(&self, syllabics: &str, long_accents: LongAccents) -> String {
        let options = Object::new();
        if let Err(err) = Reflect::set(
            &options,
            &JsValue::from_str("longAccents"),
            &JsValue::from_str(long_accents.as_str()),
        ) {
            wasm_error!("could not build conversion options: {:?}", err);
        }

        self.call_or_log(
            "syllabics2sro",
            &Array::of2(&JsValue::from_str(syllabics), &options),
        )
    }
}
