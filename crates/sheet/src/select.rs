//! Pure selection helpers over parsed collections.
//!
//! These back the two practice modes: *single* (exactly one set) and
//! *cumulative* (everything taught up to and including a set, for spaced
//! review). All functions borrow; nothing is mutated or cloned. Inputs are
//! expected in the ascending order the sheet parsers produce, and the
//! cumulative helpers re-assert that order so their output is stable either
//! way.

use crate::models::{FluencyPassage, PhonicsSet, PracticeWords};

/// Returns the set with the given number, if present.
pub fn set_by_number(sets: &[PhonicsSet], set_number: u32) -> Option<&PhonicsSet> {
    sets.iter().find(|set| set.set_number == set_number)
}

/// Returns every set numbered at or below `set_number`, ascending.
pub fn cumulative_sets(sets: &[PhonicsSet], set_number: u32) -> Vec<&PhonicsSet> {
    let mut selected: Vec<&PhonicsSet> = sets.iter().filter(|set| set.set_number <= set_number).collect();
    selected.sort_by_key(|set| set.set_number);
    selected
}

/// Returns the word list for exactly the given set, if present.
pub fn words_by_set_number(word_sets: &[PracticeWords], set_number: u32) -> Option<&PracticeWords> {
    word_sets.iter().find(|words| words.set_number == set_number)
}

/// Returns all words from every set numbered at or below `set_number`,
/// flattened into one sequence: sets in ascending order, words in sheet
/// order within each set.
pub fn cumulative_words(word_sets: &[PracticeWords], set_number: u32) -> Vec<&str> {
    let mut selected: Vec<&PracticeWords> = word_sets.iter().filter(|words| words.set_number <= set_number).collect();
    selected.sort_by_key(|words| words.set_number);
    selected.iter().flat_map(|words| words.words.iter().map(String::as_str)).collect()
}

/// Returns the passage for exactly the given set, if present.
pub fn passages_by_set_number(passages: &[FluencyPassage], set_number: u32) -> Option<&FluencyPassage> {
    passages.iter().find(|passage| passage.set_number == set_number)
}

/// Returns every passage numbered at or below `set_number`, ascending.
pub fn cumulative_passages(passages: &[FluencyPassage], set_number: u32) -> Vec<&FluencyPassage> {
    let mut selected: Vec<&FluencyPassage> = passages.iter().filter(|passage| passage.set_number <= set_number).collect();
    selected.sort_by_key(|passage| passage.set_number);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{parse_passages, parse_sets, parse_words};

    fn sets() -> Vec<PhonicsSet> {
        let (sets, _) = parse_sets("header\nSet 1,s;t;a,and;for\nSet 3,k;e,I;my\n");
        sets
    }

    #[test]
    fn lookup_by_number() {
        let sets = sets();
        let three = set_by_number(&sets, 3).unwrap();
        assert_eq!(three.gpc_list, vec!["k", "e"]);
        assert!(set_by_number(&sets, 2).is_none());
    }

    #[test]
    fn cumulative_is_the_ascending_below_or_equal_subset() {
        let sets = sets();
        let selected = cumulative_sets(&sets, 3);
        let numbers: Vec<u32> = selected.iter().map(|set| set.set_number).collect();
        assert_eq!(numbers, vec![1, 3]);

        // Idempotent: re-sorting the output changes nothing.
        let mut resorted = selected.clone();
        resorted.sort_by_key(|set| set.set_number);
        assert_eq!(resorted, selected);
    }

    #[test]
    fn cumulative_excludes_higher_sets() {
        let sets = sets();
        let selected = cumulative_sets(&sets, 1);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].set_number, 1);
        assert!(cumulative_sets(&sets, 0).is_empty());
    }

    #[test]
    fn cumulative_words_equals_manual_concatenation() {
        let (word_sets, _) = parse_words("header\nSet 2,in,tin\nSet 1,sat,pat\nSet 4,rain\n");
        let flattened = cumulative_words(&word_sets, 2);
        assert_eq!(flattened, vec!["sat", "pat", "in", "tin"]);

        let manual: Vec<&str> = cumulative_sets_words(&word_sets, 2);
        assert_eq!(flattened, manual);
    }

    // Reference flattening used to cross-check `cumulative_words`.
    fn cumulative_sets_words(word_sets: &[PracticeWords], set_number: u32) -> Vec<&str> {
        let mut out = Vec::new();
        for words in word_sets.iter().filter(|words| words.set_number <= set_number) {
            out.extend(words.words.iter().map(String::as_str));
        }
        out
    }

    #[test]
    fn words_lookup() {
        let (word_sets, _) = parse_words("header\nSet 1,sat,pat\n");
        assert_eq!(words_by_set_number(&word_sets, 1).unwrap().words, vec!["sat", "pat"]);
        assert!(words_by_set_number(&word_sets, 9).is_none());
    }

    #[test]
    fn passage_selection() {
        let (passages, _) = parse_passages("header\nSet 2,\"Two, two.\"\nSet 1,One.\n");
        assert_eq!(passages_by_set_number(&passages, 2).unwrap().passage, "Two, two.");
        let cumulative = cumulative_passages(&passages, 2);
        assert_eq!(cumulative.len(), 2);
        assert_eq!(cumulative[0].set_number, 1);
    }

    #[test]
    fn helpers_do_not_mutate_input() {
        let sets = sets();
        let before = sets.clone();
        let _ = cumulative_sets(&sets, 3);
        let _ = set_by_number(&sets, 1);
        assert_eq!(sets, before);
    }
}
