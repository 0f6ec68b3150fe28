//! SRO/Syllabics Transliteration WASM Module
//!
//! Browser front end for converting between Standard Roman Orthography and
//! syllabics. The character mapping itself lives in the external
//! `cree-sro-syllabics` library; this crate owns live input handling
//! (doubled short vowels become long vowels) and bookmarkable page state in
//! the location fragment.

pub mod api;
pub mod fragment;
pub mod models;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use fragment::{decode, encode, FragmentError, FragmentState};
pub use models::{Authority, BufferId, LongAccents, Settings, ShortVowel};
pub use session::{EditorSession, SessionError, Transliterator};
pub use text::{transduce, Transduction};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", err)));
        }
    }

    log::info!("SRO/syllabics WASM module initialized");
}
