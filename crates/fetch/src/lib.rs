//! HTTP retrieval, parsing and caching of the blend content sheets.
//!
//! One operation matters here: [`Fetcher::get`], "give me the current
//! phonics data". It serves a fresh cached dataset when one exists,
//! otherwise fetches the two published sheet CSVs in parallel, parses them
//! via [`blend_sheet`], repopulates the cache and returns the composed
//! [`PhonicsData`](blend_sheet::PhonicsData).
//!
//! Failure is all-or-nothing: either sheet failing (connection error,
//! timeout, non-2xx status) fails the whole cycle with an error naming the
//! offending source, and the cache is left exactly as it was. An expired
//! entry is never served as a fallback.

pub mod error;
mod fetch;
mod source;

pub use crate::fetch::{FetchOutcome, Fetcher};
#[cfg(feature = "mock")]
pub use crate::source::MockSource;
pub use crate::source::{CsvSource, HttpSource, SourceHandle};
