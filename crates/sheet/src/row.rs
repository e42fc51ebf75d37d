//! Row parsers for the three sheet layouts.
//!
//! Each parser is a pure function from one CSV line to one record, returning
//! `None` when the line doesn't carry a `Set <N>` identity. Skipping is the
//! contract, not a failure mode: the sheets contain section headers, blank
//! separators and stray notes, and those rows are simply not content.

use crate::consts;
use crate::models::{FluencyPassage, PhonicsSet, PracticeWords};
use crate::split::{split_quoted, split_semicolons, strip_outer_quotes};

/// Extracts the set number from an identity column matching `Set <digits>`.
fn set_number(set_id: &str) -> Option<u32> {
    let captures = consts::SET_ID_REGEX.captures(set_id)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Parses one row of the phonics sets sheet.
///
/// Layout: `set id, gpc list, hfw list, phoneme audio, grapheme audio,
/// hfw audio` — the list columns use `;` as the inner separator, so a plain
/// comma split is safe here. Missing trailing columns become empty lists.
pub fn parse_set_row(line: &str) -> Option<PhonicsSet> {
    let columns: Vec<&str> = line.split(',').map(str::trim).collect();
    let set_id = *columns.first()?;
    let set_number = set_number(set_id)?;
    let list = |index: usize| split_semicolons(columns.get(index).copied().unwrap_or_default());
    Some(PhonicsSet {
        set_id: set_id.to_string(),
        set_number,
        gpc_list: list(1),
        hfw_list: list(2),
        phoneme_audio_urls: list(3),
        grapheme_audio_urls: list(4),
        hfw_audio_urls: list(5),
    })
}

/// Parses one row of the practice words sheet.
///
/// Layout: `set id, word, word, "word, with comma", …`. Only the FIRST comma
/// is a column boundary; the rest of the line is one word-list field whose
/// items may be quoted to protect embedded commas, so it goes through the
/// quote-aware splitter.
pub fn parse_words_row(line: &str) -> Option<PracticeWords> {
    let (set_id, rest) = line.split_once(',')?;
    let set_id = set_id.trim();
    let set_number = set_number(set_id)?;
    let words = split_quoted(rest)
        .iter()
        .map(|word| strip_outer_quotes(word).trim().to_string())
        .filter(|word| !word.is_empty())
        .collect();
    Some(PracticeWords {
        set_id: set_id.to_string(),
        set_number,
        words,
    })
}

/// Parses one row of the older fluency passages sheet.
///
/// Layout: `set id, "passage text, commas and all"`. Everything after the
/// first comma is the passage; one surrounding quote pair is stripped.
pub fn parse_passage_row(line: &str) -> Option<FluencyPassage> {
    let (set_id, rest) = line.split_once(',')?;
    let set_id = set_id.trim();
    let set_number = set_number(set_id)?;
    let passage = strip_outer_quotes(rest.trim()).trim();
    if passage.is_empty() {
        return None;
    }
    Some(FluencyPassage {
        set_id: set_id.to_string(),
        set_number,
        passage: passage.to_string(),
    })
}
