/// One row of the phonics sets sheet: the GPCs and high-frequency words
/// introduced by a numbered teaching set, plus their audio recordings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhonicsSet {
    /// Display label as found in the sheet, e.g. `"Set 7"`
    pub set_id: String,
    /// Number extracted from the label. Unique per sheet in practice; if the
    /// sheet ever carries duplicate "Set N" rows both are kept in input
    /// order (a source quirk, not merged or deduplicated here).
    pub set_number: u32,
    /// Graphemes taught in this set, in teaching order. May contain the
    /// literal sentinel `th*` for the voiced "th" pronunciation.
    pub gpc_list: Vec<String>,
    /// High-frequency words taught alongside the set
    pub hfw_list: Vec<String>,
    /// Phoneme recordings, aligned by index with `gpc_list`. May be shorter
    /// than `gpc_list` when trailing entries lack audio; a missing URL never
    /// shifts the alignment of later ones.
    pub phoneme_audio_urls: Vec<String>,
    /// Grapheme-name recordings, aligned by index with `gpc_list`
    pub grapheme_audio_urls: Vec<String>,
    /// Word recordings, aligned by index with `hfw_list`
    pub hfw_audio_urls: Vec<String>,
}
