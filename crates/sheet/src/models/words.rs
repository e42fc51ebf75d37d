/// Decodable practice words for one teaching set.
///
/// Parsed from the words sheet, where the word list is a single
/// comma-separated field and individual words may themselves be quoted to
/// protect embedded commas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PracticeWords {
    /// Display label as found in the sheet, e.g. `"Set 3"`
    pub set_id: String,
    /// Number extracted from the label
    pub set_number: u32,
    /// Words in sheet order
    pub words: Vec<String>,
}
