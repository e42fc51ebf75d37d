use super::{PhonicsSet, PracticeWords};

/// The composed dataset handed to callers: everything parsed from one
/// fetch cycle over both sheets.
///
/// Rebuilt wholesale on every successful fetch; never patched in place.
/// This is the unit that the fetch layer caches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhonicsData {
    /// All phonics sets, ascending by set number
    pub phonics_sets: Vec<PhonicsSet>,
    /// All per-set word lists, ascending by set number
    pub practice_words: Vec<PracticeWords>,
}
