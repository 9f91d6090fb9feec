//! Raw and output emoji categories.
//!
//! The source table tags every row with one of eight raw categories. The
//! picker only knows five output categories, so pairs of raw categories are
//! merged into one output category. The second member of each pair carries an
//! offset that is added to its ordinal, which keeps the two raw sequences from
//! colliding and orders the first pair member before the second.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Indices at and above this value are reserved for carrier-only emoji.
///
/// Every category offset must stay below it.
pub const CARRIER_INDEX_BASE: u32 = 100_000;

/// Output category used by the emoji picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmojiCategory {
    Face,
    Food,
    City,
    Activity,
    Nature,
}

impl EmojiCategory {
    /// All output categories in emission order.
    pub const ALL: [EmojiCategory; 5] = [
        EmojiCategory::Face,
        EmojiCategory::Food,
        EmojiCategory::City,
        EmojiCategory::Activity,
        EmojiCategory::Nature,
    ];

    /// Upper-case name used in generated identifiers (e.g. `FACE`).
    pub fn as_str(self) -> &'static str {
        match self {
            EmojiCategory::Face => "FACE",
            EmojiCategory::Food => "FOOD",
            EmojiCategory::City => "CITY",
            EmojiCategory::Activity => "ACTIVITY",
            EmojiCategory::Nature => "NATURE",
        }
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a raw source category lands in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMapping {
    /// Raw category label as it appears in the source table.
    pub raw: &'static str,
    /// Output category the rows are merged into.
    pub category: EmojiCategory,
    /// Added to the row ordinal to form the effective index.
    pub offset: u32,
}

impl CategoryMapping {
    const fn new(raw: &'static str, category: EmojiCategory, offset: u32) -> Self {
        Self {
            raw,
            category,
            offset,
        }
    }

    /// Effective index of a row with the given ordinal.
    pub fn effective_index(&self, ordinal: u32) -> Result<u32> {
        ordinal
            .checked_add(self.offset)
            .ok_or(ModelError::IndexOverflow {
                raw: self.raw,
                ordinal,
            })
    }
}

/// Raw category to output category table.
pub const CATEGORY_MAP: [CategoryMapping; 8] = [
    CategoryMapping::new("SMILEY_PEOPLE", EmojiCategory::Face, 0),
    CategoryMapping::new("ANIMALS_NATURE", EmojiCategory::Food, 0),
    CategoryMapping::new("FOOD_DRINK", EmojiCategory::Food, 10_000),
    CategoryMapping::new("TRAVEL_PLACES", EmojiCategory::City, 0),
    CategoryMapping::new("ACTIVITY", EmojiCategory::Activity, 0),
    CategoryMapping::new("OBJECTS", EmojiCategory::Activity, 10_000),
    CategoryMapping::new("SYMBOLS", EmojiCategory::Nature, 0),
    CategoryMapping::new("FLAGS", EmojiCategory::Nature, 10_000),
];

const _: () = {
    let mut i = 0;
    while i < CATEGORY_MAP.len() {
        assert!(CATEGORY_MAP[i].offset < CARRIER_INDEX_BASE);
        i += 1;
    }
};

/// Look up the mapping for a raw category label.
pub fn category_mapping(raw: &str) -> Result<&'static CategoryMapping> {
    CATEGORY_MAP
        .iter()
        .find(|mapping| mapping.raw == raw)
        .ok_or_else(|| ModelError::UnknownRawCategory {
            name: raw.to_string(),
        })
}
