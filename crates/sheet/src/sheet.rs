//! Whole-document parsing: header skipping, row dispatch, sorting.

use tracing::instrument;

use crate::models::{FluencyPassage, PhonicsSet, PracticeWords};
use crate::row::{parse_passage_row, parse_set_row, parse_words_row};

/// Skip diagnostics for one parsed sheet.
///
/// Parsing never fails on bad rows, so this is the only signal that the
/// upstream sheet has drifted from the expected shape. Header and blank
/// lines are not counted as skips; only non-blank rows that failed to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetStats {
    /// Non-blank content lines seen (header excluded)
    pub lines: usize,
    /// Rows that produced a record
    pub parsed: usize,
    /// Rows that were dropped
    pub skipped: usize,
}

/// Parses a whole CSV document with the given row parser, sorted ascending
/// by set number.
///
/// Line 0 is always the header and is dropped unconditionally. The sort is
/// stable, so duplicate set numbers keep their input order ("last wins" for
/// anyone scanning in order — a documented source quirk).
fn parse_sheet<T>(csv: &str, parse_row: fn(&str) -> Option<T>, key: fn(&T) -> u32) -> (Vec<T>, SheetStats) {
    let mut records = Vec::new();
    let mut stats = SheetStats::default();
    for (index, line) in csv.lines().enumerate() {
        if index == 0 {
            continue;
        }
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;
        match parse_row(line) {
            Some(record) => {
                records.push(record);
                stats.parsed += 1;
            },
            None => {
                stats.skipped += 1;
                tracing::debug!(line = index + 1, "skipping row without a Set <N> identity");
            },
        }
    }
    records.sort_by_key(key);
    (records, stats)
}

/// Parses the phonics sets sheet.
#[instrument(skip(csv), fields(csv_size = csv.len()))]
pub fn parse_sets(csv: &str) -> (Vec<PhonicsSet>, SheetStats) {
    parse_sheet(csv, parse_set_row, |set| set.set_number)
}

/// Parses the practice words sheet.
#[instrument(skip(csv), fields(csv_size = csv.len()))]
pub fn parse_words(csv: &str) -> (Vec<PracticeWords>, SheetStats) {
    parse_sheet(csv, parse_words_row, |words| words.set_number)
}

/// Parses the older fluency passages sheet.
#[instrument(skip(csv), fields(csv_size = csv.len()))]
pub fn parse_passages(csv: &str) -> (Vec<FluencyPassage>, SheetStats) {
    parse_sheet(csv, parse_passage_row, |passage| passage.set_number)
}
