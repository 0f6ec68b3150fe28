//! SRO/syllabics WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, serialization, error conversion, session access
//! - `converter`: binding to the `cree-sro-syllabics` library
//! - `edit`: doubled-vowel rewriting
//! - `fragment`: location fragment decoding/encoding
//! - `page`: DOM wiring for the converter page

pub mod helpers;
pub mod converter;
pub mod edit;
pub mod fragment;
pub mod page;

pub use edit::{apply_sro_edit, get_buffer_value, long_vowel_of_js, transduce_edit};
pub use fragment::{decode_fragment, encode_fragment, get_default_textarea_value, share_fragment};
pub use page::{handle_request, library_version, mount_page};
