//! SRO vowel table
//!
//! Short vowels and their long (circumflex) counterparts. Typing a short vowel
//! twice is the usual shorthand for the long form, so the transducer needs a
//! total mapping from every short vowel to exactly one long vowel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the vowel table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VowelError {
    /// Only `a`, `e`, `i` and `o` have a long form
    #[error("Invalid long vowel: {0:?}")]
    InvalidVowelMapping(char),
}

/// A lowercase SRO short vowel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortVowel {
    A,
    E,
    I,
    O,
}

impl ShortVowel {
    pub const ALL: [ShortVowel; 4] = [ShortVowel::A, ShortVowel::E, ShortVowel::I, ShortVowel::O];

    /// Classify a character. Uppercase vowels are not short vowels.
    pub fn from_char(ch: char) -> Option<ShortVowel> {
        match ch {
            'a' => Some(ShortVowel::A),
            'e' => Some(ShortVowel::E),
            'i' => Some(ShortVowel::I),
            'o' => Some(ShortVowel::O),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ShortVowel::A => 'a',
            ShortVowel::E => 'e',
            ShortVowel::I => 'i',
            ShortVowel::O => 'o',
        }
    }

    /// The long vowel written with a circumflex
    pub fn long(self) -> char {
        match self {
            ShortVowel::A => 'â',
            ShortVowel::E => 'ê',
            ShortVowel::I => 'î',
            ShortVowel::O => 'ô',
        }
    }
}

/// Check whether a character is an SRO short vowel
pub fn is_short_vowel(ch: char) -> bool {
    ShortVowel::from_char(ch).is_some()
}

/// Return the long version of a short vowel
pub fn long_vowel_of(ch: char) -> Result<char, VowelError> {
    ShortVowel::from_char(ch)
        .map(ShortVowel::long)
        .ok_or(VowelError::InvalidVowelMapping(ch))
}
