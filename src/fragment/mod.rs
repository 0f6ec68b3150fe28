//! Location fragment state codec
//!
//! Page state is shared by URL. The fragment looks like
//!
//! ```text
//! #<tag>!sro:n%C3%AAhiyaw%C3%AAwin;syl:...
//! ```
//!
//! Everything before the first `!` is an arbitrary anchor name and is ignored.
//! The rest is a `;`-separated list of `key:value` pairs, where each value is
//! percent-encoded the way `encodeURIComponent` does it.
//!
//! Decoding is strict: a malformed escape anywhere makes the whole fragment
//! unusable, so callers never apply half of a shared state.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::models::buffers::BufferId;

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const STATE_MARKER: char = '!';
const PAIR_SEPARATOR: char = ';';
const KEY_SEPARATOR: char = ':';

/// Why a percent-encoded value could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercentError {
    #[error("'%' at byte {0} is not followed by two hex digits")]
    InvalidEscape(usize),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// A value segment is not validly percent-encoded
    #[error("Malformed value for key '{key}': {value:?} ({reason})")]
    MalformedFragmentValue {
        key: String,
        value: String,
        #[source]
        reason: PercentError,
    },

    /// Keys are written verbatim, so they cannot hold separators
    #[error("Invalid fragment key {key:?}")]
    InvalidKey { key: String },

    #[error("Invalid fragment tag {tag:?}")]
    InvalidTag { tag: String },
}

/// Ordered key/value pairs with unique keys.
///
/// Inserting an existing key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentState {
    pairs: Vec<(String, String)>,
}

impl FragmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Value stored for one of the page's buffers
    pub fn buffer(&self, id: BufferId) -> Option<&str> {
        self.get(id.key())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FragmentState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = FragmentState::new();
        for (key, value) in iter {
            state.insert(key, value);
        }
        state
    }
}

impl Serialize for FragmentState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FragmentState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateVisitor;

        impl<'de> Visitor<'de> for StateVisitor {
            type Value = FragmentState;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut state = FragmentState::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    state.insert(key, value);
                }
                Ok(state)
            }
        }

        deserializer.deserialize_map(StateVisitor)
    }
}

/// Decode a percent-encoded URI component.
///
/// Rejects a '%' not followed by two hex digits, and escapes that decode to
/// invalid UTF-8. '+' is not a space.
pub fn decode_component(raw: &str) -> Result<String, PercentError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return Err(PercentError::InvalidEscape(i)),
            }
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| PercentError::InvalidUtf8)
}

/// Percent-encode a value like `encodeURIComponent`
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Parse a location fragment into its key/value pairs.
///
/// A fragment with no `!`, or nothing after it, is an empty state. Values are
/// split on the first `:` only. Segments without a `:` are skipped. Later
/// duplicates overwrite earlier ones.
pub fn decode(fragment: &str) -> Result<FragmentState, FragmentError> {
    let mut state = FragmentState::new();

    let Some((_tag, pairs_text)) = fragment.split_once(STATE_MARKER) else {
        return Ok(state);
    };

    for pair in pairs_text.split(PAIR_SEPARATOR) {
        // Tolerate a trailing or doubled ';'
        if pair.is_empty() {
            continue;
        }

        let Some((key, raw_value)) = pair.split_once(KEY_SEPARATOR) else {
            log::debug!("skipping fragment segment without ':': {:?}", pair);
            continue;
        };

        let value = decode_component(raw_value).map_err(|reason| {
            FragmentError::MalformedFragmentValue {
                key: key.to_string(),
                value: raw_value.to_string(),
                reason,
            }
        })?;

        state.insert(key, value);
    }

    Ok(state)
}

/// Build a `#<tag>!k:v;...` fragment. An empty state yields just `#<tag>`.
pub fn encode(tag: &str, state: &FragmentState) -> Result<String, FragmentError> {
    if tag.contains(STATE_MARKER) || tag.contains('#') {
        return Err(FragmentError::InvalidTag {
            tag: tag.to_string(),
        });
    }

    let mut fragment = format!("#{}", tag);
    if state.is_empty() {
        return Ok(fragment);
    }

    fragment.push(STATE_MARKER);
    for (index, (key, value)) in state.iter().enumerate() {
        if key.is_empty() || key.contains(PAIR_SEPARATOR) || key.contains(KEY_SEPARATOR) {
            return Err(FragmentError::InvalidKey {
                key: key.to_string(),
            });
        }
        if index > 0 {
            fragment.push(PAIR_SEPARATOR);
        }
        fragment.push_str(key);
        fragment.push(KEY_SEPARATOR);
        fragment.push_str(&encode_component(value));
    }

    Ok(fragment)
}
