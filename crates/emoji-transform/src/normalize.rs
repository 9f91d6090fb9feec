//! Ordering and filtering of bucketed entries.

use emoji_model::{CategoryBuckets, EmojiCategory, EmojiEntry};
use tracing::debug;

use crate::names::normalize_name;

/// An entry ready for emission, names normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub index: u32,
    pub code_points: Vec<u32>,
    pub pua_code_point: u32,
    pub japanese: Option<String>,
    pub docomo: Option<String>,
    pub softbank: Option<String>,
    pub kddi: Option<String>,
}

impl NormalizedEntry {
    pub fn from_entry(entry: &EmojiEntry) -> Self {
        Self {
            index: entry.index,
            code_points: entry.code_points.clone(),
            pua_code_point: entry.pua_code_point,
            japanese: normalize_name(&entry.names.japanese),
            docomo: normalize_name(&entry.names.docomo),
            softbank: normalize_name(&entry.names.softbank),
            kddi: normalize_name(&entry.names.kddi),
        }
    }
}

/// Emission-ready entries of one output category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCategory {
    pub category: EmojiCategory,
    pub entries: Vec<NormalizedEntry>,
    /// Entries dropped because they had no display name.
    pub dropped: usize,
}

impl NormalizedCategory {
    /// Number of entries read into the bucket, kept or not.
    pub fn total(&self) -> usize {
        self.entries.len() + self.dropped
    }
}

/// Every output category, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTables {
    pub categories: Vec<NormalizedCategory>,
}

impl NormalizedTables {
    pub fn get(&self, category: EmojiCategory) -> Option<&NormalizedCategory> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Total number of emitted entries.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

/// Sort every bucket by effective index.
///
/// The sort is stable; effective indices are unique within a bucket by
/// construction of the category offsets.
pub fn sort_buckets(buckets: &mut CategoryBuckets) {
    for (_, entries) in buckets.buckets_mut() {
        entries.sort_by_key(|entry| entry.index);
    }
}

/// Entries that have at least one display name, in bucket order.
pub fn named_entries(entries: &[EmojiEntry]) -> impl Iterator<Item = &EmojiEntry> {
    entries.iter().filter(|entry| entry.has_name())
}

/// Sort the buckets, then drop nameless entries and normalize names.
pub fn normalize(mut buckets: CategoryBuckets) -> NormalizedTables {
    sort_buckets(&mut buckets);
    let categories = EmojiCategory::ALL
        .into_iter()
        .map(|category| {
            let bucket = buckets.take(category);
            let entries: Vec<NormalizedEntry> = named_entries(&bucket)
                .map(NormalizedEntry::from_entry)
                .collect();
            let dropped = bucket.len() - entries.len();
            debug!(%category, kept = entries.len(), dropped, "normalized category");
            NormalizedCategory {
                category,
                entries,
                dropped,
            }
        })
        .collect();
    NormalizedTables { categories }
}
