//! Entries grouped by output category.

use std::collections::BTreeMap;

use crate::category::EmojiCategory;
use crate::entry::EmojiEntry;

/// Output category to entries, in insertion order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: BTreeMap<EmojiCategory, Vec<EmojiEntry>>,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bucket for `category`.
    pub fn push(&mut self, category: EmojiCategory, entry: EmojiEntry) {
        self.buckets.entry(category).or_default().push(entry);
    }

    /// Entries of one category; empty when nothing mapped to it.
    pub fn entries(&self, category: EmojiCategory) -> &[EmojiEntry] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mutable access to every non-empty bucket.
    pub fn buckets_mut(&mut self) -> impl Iterator<Item = (EmojiCategory, &mut Vec<EmojiEntry>)> {
        self.buckets
            .iter_mut()
            .map(|(category, entries)| (*category, entries))
    }

    /// Take the entries of one category, leaving it empty.
    pub fn take(&mut self, category: EmojiCategory) -> Vec<EmojiEntry> {
        self.buckets.remove(&category).unwrap_or_default()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry count per output category, in emission order.
    pub fn counts(&self) -> Vec<(EmojiCategory, usize)> {
        EmojiCategory::ALL
            .into_iter()
            .map(|category| (category, self.entries(category).len()))
            .collect()
    }
}
