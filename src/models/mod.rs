//! Models module for the transliteration front end
//!
//! Plain data shared by the transducer, the fragment codec and the page
//! session.

pub mod buffers;
pub mod settings;
pub mod vowels;

// Re-export commonly used types
pub use buffers::{Authority, BufferId};
pub use settings::{LongAccents, Settings};
pub use vowels::{is_short_vowel, long_vowel_of, ShortVowel, VowelError};
