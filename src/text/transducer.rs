//! Vowel-doubling transducer
//!
//! Looks at one keystroke as a pair of buffer snapshots (before and after).
//! When exactly one character was inserted, and it is a short vowel typed
//! right after the same short vowel, the pair collapses into the long vowel
//! and the raw insertion is dropped.
//!
//! ```text
//! previous: n a m a        current: n a m a a
//!                 ^ preceding            ^ inserted at 4
//! rewritten: n a m â
//! ```
//!
//! All indices are char (scalar value) indices.

use serde::{Deserialize, Serialize};

use crate::models::vowels::ShortVowel;

/// Outcome of running one edit through the transducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transduction {
    /// The buffer content the caller should treat as ground truth
    pub rewritten: String,
    /// True when the doubled vowel was collapsed
    pub handled: bool,
    /// Caret position (char index) just after the long vowel, when handled
    pub cursor: Option<usize>,
}

impl Transduction {
    fn passthrough(current: &str) -> Self {
        Self {
            rewritten: current.to_string(),
            handled: false,
            cursor: None,
        }
    }
}

/// First index at which the two snapshots disagree.
///
/// If `previous` is a prefix of `current` the character was appended, and the
/// index is `previous.len()`.
pub fn divergence_index(previous: &[char], current: &[char]) -> usize {
    previous
        .iter()
        .zip(current)
        .position(|(before, after)| before != after)
        .unwrap_or(previous.len())
}

/// Run a single edit through the doubled-vowel rule.
pub fn transduce(previous: &str, current: &str) -> Transduction {
    let before: Vec<char> = previous.chars().collect();
    let after: Vec<char> = current.chars().collect();

    // Only single-character insertions qualify. Deletions, pastes and
    // composition updates pass straight through.
    if after.len() != before.len() + 1 {
        return Transduction::passthrough(current);
    }

    let at = divergence_index(&before, &after);
    let added = after[at];

    let Some(vowel) = ShortVowel::from_char(added) else {
        return Transduction::passthrough(current);
    };

    // Compare against the pre-edit buffer, so inserting mid-word works too
    if at == 0 || before[at - 1] != added {
        return Transduction::passthrough(current);
    }

    let mut rewritten: String = before[..at - 1].iter().collect();
    rewritten.push(vowel.long());
    rewritten.extend(&before[at..]);

    log::debug!("doubled vowel {:?} at {} -> {:?}", added, at, vowel.long());

    Transduction {
        rewritten,
        handled: true,
        cursor: Some(at),
    }
}
