/// A fluency passage for one teaching set.
///
/// Older layout of the second sheet, superseded by per-set word lists
/// ([`PracticeWords`](super::PracticeWords)) but still parseable: one
/// free-text passage per row, usually quoted because it contains commas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluencyPassage {
    /// Display label as found in the sheet, e.g. `"Set 5"`
    pub set_id: String,
    /// Number extracted from the label
    pub set_number: u32,
    /// The passage text, with the surrounding quote pair stripped
    pub passage: String,
}
