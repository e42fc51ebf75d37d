//! CSV parsing and set selection for the blend phonics content sheets.
//!
//! The content lives in an externally-edited spreadsheet, exported as CSV.
//! This crate turns that loose export into typed, set-numbered collections:
//!
//! - **Row parsing** of the three sheet shapes ([`PhonicsSet`],
//!   [`PracticeWords`] and the older [`FluencyPassage`] layout)
//! - **Sheet parsing** that skips the header, drops malformed rows and
//!   returns collections sorted by set number ([`parse_sets`],
//!   [`parse_words`], [`parse_passages`])
//! - **Selection helpers** for single-set and cumulative practice modes
//!   ([`select`])
//!
//! Parsing is deliberately tolerant and infallible: a row that doesn't match
//! the expected shape simply does not appear in the output. [`SheetStats`]
//! carries the skip counts for anyone who wants to notice upstream schema
//! drift, but nothing here ever returns an error.

mod consts;
pub mod models;
mod row;
pub mod select;
mod sheet;
mod split;

pub use crate::models::{FluencyPassage, PhonicsData, PhonicsSet, PracticeWords};
pub use crate::row::{parse_passage_row, parse_set_row, parse_words_row};
pub use crate::sheet::{SheetStats, parse_passages, parse_sets, parse_words};
pub use crate::split::split_quoted;
