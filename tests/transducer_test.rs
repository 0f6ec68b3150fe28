// Properties of the doubled-vowel transducer over generated edits

use proptest::prelude::*;
use sro_syllabics_wasm::models::ShortVowel;
use sro_syllabics_wasm::text::{transduce, BufferState};
use sro_syllabics_wasm::BufferId;

fn insert_at(text: &str, index: usize, ch: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let index = index.min(chars.len());
    chars.insert(index, ch);
    chars.into_iter().collect()
}

fn any_vowel() -> impl Strategy<Value = ShortVowel> {
    prop::sample::select(ShortVowel::ALL.to_vec())
}

proptest! {
    #[test]
    fn non_insertions_pass_through(prev in "[aeiomnpst]{0,10}", cur in "[aeiomnpst]{0,10}") {
        prop_assume!(cur.chars().count() != prev.chars().count() + 1);
        let result = transduce(&prev, &cur);
        prop_assert!(!result.handled);
        prop_assert_eq!(result.rewritten, cur);
    }

    #[test]
    fn doubled_vowel_at_end_becomes_long(stem in "[aeiomnpst]{0,10}", vowel in any_vowel()) {
        let prev = format!("{}{}", stem, vowel.as_char());
        let cur = format!("{}{}", prev, vowel.as_char());
        let result = transduce(&prev, &cur);
        prop_assert!(result.handled);
        prop_assert_eq!(result.rewritten, format!("{}{}", stem, vowel.long()));
    }

    #[test]
    fn non_vowel_insertion_never_triggers(
        prev in "[aeiomnpst]{0,10}",
        index in 0usize..12,
        ch in prop::sample::select(vec!['m', 'n', 'p', 's', 't', 'y', 'h', 'â', 'A', ' ']),
    ) {
        let cur = insert_at(&prev, index, ch);
        let result = transduce(&prev, &cur);
        prop_assert!(!result.handled);
        prop_assert_eq!(result.rewritten, cur);
    }

    #[test]
    fn produced_long_vowel_survives_next_keystroke(
        stem in "[aeiomnpst]{0,8}",
        tail in "[mnpst]{0,4}",
        vowel in any_vowel(),
        offset in 0usize..6,
        ch in prop::sample::select(vec!['a', 'e', 'i', 'o', 'm', 'n', 's']),
    ) {
        let v = vowel.as_char();
        let prev = format!("{}{}{}", stem, v, tail);
        let cur = format!("{}{}{}{}", stem, v, v, tail);
        let first = transduce(&prev, &cur);
        prop_assert!(first.handled);
        prop_assert_eq!(&first.rewritten, &format!("{}{}{}", stem, vowel.long(), tail));

        let cursor = first.cursor.unwrap();
        let next = insert_at(&first.rewritten, cursor + offset, ch);
        let second = transduce(&first.rewritten, &next);

        let kept: String = second.rewritten.chars().take(cursor).collect();
        let expected: String = first.rewritten.chars().take(cursor).collect();
        prop_assert_eq!(kept, expected);
    }
}

#[test]
fn test_nam_plus_a_does_not_trigger() {
    let result = transduce("nam", "nama");
    assert!(!result.handled);
    assert_eq!(result.rewritten, "nama");
}

#[test]
fn test_nama_plus_a_triggers() {
    let result = transduce("nama", "namaa");
    assert!(result.handled);
    assert_eq!(result.rewritten, "namâ");
}

#[test]
fn test_typing_a_sentence() {
    // Simulate keystrokes one at a time, each appended at the end
    let mut buffer = BufferState::new(BufferId::Sro, "", true);
    for ch in "taanisi kiiya".chars() {
        let next = format!("{}{}", buffer.value(), ch);
        buffer.apply_edit(&next);
    }
    assert_eq!(buffer.value(), "tânisi kîya");
}

#[test]
fn test_editing_inside_a_word() {
    // "tanisi" -> caret after the first 'a' -> type 'a'
    let mut buffer = BufferState::new(BufferId::Sro, "tanisi", true);
    let result = buffer.apply_edit("taanisi");
    assert!(result.handled);
    assert_eq!(result.text, "tânisi");
    assert_eq!(result.cursor, Some(2));
}
