//! Source rows and the entries built from them.

use serde::Serialize;

/// Code point used when a row has no Unicode or PUA code point.
pub const DUMMY_CODE_POINT: u32 = 0;

/// One projected source row, before validation.
///
/// All fields are kept exactly as they appear in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub code: String,
    pub pua_code: String,
    pub japanese_name: String,
    pub docomo_name: String,
    pub softbank_name: String,
    pub kddi_name: String,
    pub category_index: String,
}

/// Display names for an emoji, one per naming authority.
///
/// An empty string means the authority has no name for the emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmojiNames {
    /// Unicode Japanese name.
    pub japanese: String,
    pub docomo: String,
    pub softbank: String,
    pub kddi: String,
}

impl EmojiNames {
    /// True when no authority provides a name.
    pub fn is_empty(&self) -> bool {
        self.iter().all(str::is_empty)
    }

    /// Names in table order: Japanese, DOCOMO, Softbank, KDDI.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.japanese.as_str(),
            self.docomo.as_str(),
            self.softbank.as_str(),
            self.kddi.as_str(),
        ]
        .into_iter()
    }
}

/// A validated emoji row, placed in its output category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiEntry {
    /// Ordinal within the raw category plus the category offset.
    pub index: u32,
    /// Unicode code point sequence; `[0]` when the row has none.
    pub code_points: Vec<u32>,
    /// Carrier PUA code point; `0` when the row has none.
    pub pua_code_point: u32,
    pub names: EmojiNames,
}

impl EmojiEntry {
    /// True when the entry has at least one display name.
    pub fn has_name(&self) -> bool {
        !self.names.is_empty()
    }
}
