//! Emoji entry normalization.
//!
//! Takes the bucketed entries produced by ingestion and prepares them for
//! emission:
//!
//! - [`sort_buckets`]: order every bucket by effective index
//! - [`named_entries`]: skip entries without any display name
//! - [`normalize_name`]: fold full-width characters and break before `(`
//! - [`normalize`]: all of the above, per output category
//!
//! Sorting runs on the full bucket; the name filter only applies afterwards.

pub mod fold;
pub mod names;
pub mod normalize;

pub use fold::{FULL_WIDTH_MAP, fold_char, fold_full_width};
pub use names::{ANNOTATION_BREAK, break_before_annotations, normalize_name};
pub use normalize::{
    NormalizedCategory, NormalizedEntry, NormalizedTables, named_entries, normalize, sort_buckets,
};
