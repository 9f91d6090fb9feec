//! Emoji data model shared by the generator crates.
//!
//! - [`CATEGORY_MAP`]: raw source category to output category and offset
//! - [`RawRecord`]: one projected source row, unvalidated
//! - [`EmojiEntry`]: a validated row with its effective index
//! - [`CategoryBuckets`]: entries grouped by [`EmojiCategory`]

pub mod bucket;
pub mod category;
pub mod entry;
pub mod error;

pub use bucket::CategoryBuckets;
pub use category::{
    CARRIER_INDEX_BASE, CATEGORY_MAP, CategoryMapping, EmojiCategory, category_mapping,
};
pub use entry::{DUMMY_CODE_POINT, EmojiEntry, EmojiNames, RawRecord};
pub use error::{ModelError, Result};
