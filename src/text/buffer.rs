//! Per-buffer edit state
//!
//! The browser owns the textarea; this side only remembers the last value it
//! observed so each input event can be diffed against it. Every input event
//! goes through [`BufferState::apply_edit`], which is the only place the
//! snapshot changes.

use serde::{Deserialize, Serialize};

use super::transducer::transduce;
use crate::models::buffers::BufferId;

/// Result of applying one input event to a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    /// New buffer content; the caller writes this back if `handled`
    pub text: String,
    /// True when the raw insertion was replaced
    pub handled: bool,
    /// Caret position (char index) to restore after writing `text` back
    pub cursor: Option<usize>,
}

/// Text buffer state: which buffer, and what it last contained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferState {
    id: BufferId,
    last_observed: String,
    double_vowels: bool,
}

impl BufferState {
    pub fn new(id: BufferId, initial: &str, double_vowels: bool) -> Self {
        Self {
            id,
            last_observed: initial.to_string(),
            double_vowels,
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.last_observed
    }

    pub fn double_vowels(&self) -> bool {
        self.double_vowels
    }

    pub fn set_double_vowels(&mut self, enabled: bool) {
        self.double_vowels = enabled;
    }

    /// Record a value written from outside (conversion output, fragment
    /// restore). The next keystroke is diffed against it.
    pub fn set_value(&mut self, value: &str) {
        self.last_observed = value.to_string();
    }

    /// Apply the value the control holds after one input event.
    ///
    /// With doubling disabled the transducer is never consulted and the value
    /// is recorded verbatim.
    pub fn apply_edit(&mut self, new_value: &str) -> EditResult {
        if !self.double_vowels {
            self.last_observed = new_value.to_string();
            return EditResult {
                text: new_value.to_string(),
                handled: false,
                cursor: None,
            };
        }

        let result = transduce(&self.last_observed, new_value);
        self.last_observed = result.rewritten.clone();

        EditResult {
            text: result.rewritten,
            handled: result.handled,
            cursor: result.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_chars(buffer: &mut BufferState, text: &str) -> Vec<EditResult> {
        text.chars()
            .map(|ch| {
                let mut next = buffer.value().to_string();
                next.push(ch);
                buffer.apply_edit(&next)
            })
            .collect()
    }

    #[test]
    fn test_typing_word_with_doubled_vowels() {
        let mut buffer = BufferState::new(BufferId::Sro, "", true);
        type_chars(&mut buffer, "neehiyawee");
        assert_eq!(buffer.value(), "nêhiyawê");
    }

    #[test]
    fn test_triple_vowel_gives_long_then_short() {
        let mut buffer = BufferState::new(BufferId::Sro, "", true);
        let results = type_chars(&mut buffer, "aaa");
        assert!(!results[0].handled);
        assert!(results[1].handled);
        assert!(!results[2].handled);
        assert_eq!(buffer.value(), "âa");
    }

    #[test]
    fn test_disabled_records_verbatim() {
        let mut buffer = BufferState::new(BufferId::Sro, "", false);
        let results = type_chars(&mut buffer, "naa");
        assert!(results.iter().all(|r| !r.handled));
        assert_eq!(buffer.value(), "naa");
    }

    #[test]
    fn test_toggle_mid_word() {
        let mut buffer = BufferState::new(BufferId::Sro, "", false);
        type_chars(&mut buffer, "na");
        buffer.set_double_vowels(true);
        type_chars(&mut buffer, "a");
        assert_eq!(buffer.value(), "nâ");
    }

    #[test]
    fn test_external_value_resets_snapshot() {
        let mut buffer = BufferState::new(BufferId::Sro, "", true);
        buffer.set_value("tânisi");
        let result = buffer.apply_edit("tânisii");
        assert!(result.handled);
        assert_eq!(result.text, "tânisî");
        assert_eq!(result.cursor, Some(6));
    }

    #[test]
    fn test_deletion_updates_snapshot() {
        let mut buffer = BufferState::new(BufferId::Sro, "nama", true);
        let result = buffer.apply_edit("nam");
        assert!(!result.handled);
        assert_eq!(buffer.value(), "nam");

        // 'a' after 'm' is just a short vowel again
        let result = buffer.apply_edit("nama");
        assert!(!result.handled);
    }
}
