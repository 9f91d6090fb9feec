use std::path::PathBuf;

use emoji_model::EmojiCategory;
use emoji_output::JavaOutputOptions;
use emoji_transform::{NormalizedCategory, NormalizedTables};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub emoji_data: PathBuf,
    pub output: PathBuf,
    pub java: JavaOutputOptions,
    /// Skip writing the output file.
    pub dry_run: bool,
}

impl GenerationOptions {
    pub fn new(emoji_data: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            emoji_data: emoji_data.into(),
            output: output.into(),
            java: JavaOutputOptions::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_java(mut self, java: JavaOutputOptions) -> Self {
        self.java = java;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Row counts of one output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: EmojiCategory,
    /// Rows bucketed into the category.
    pub read: usize,
    /// Rows emitted into the tables.
    pub emitted: usize,
    /// Rows dropped for having no display name.
    pub dropped: usize,
}

impl From<&NormalizedCategory> for CategorySummary {
    fn from(category: &NormalizedCategory) -> Self {
        Self {
            category: category.category,
            read: category.total(),
            emitted: category.entries.len(),
            dropped: category.dropped,
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output: PathBuf,
    /// False for a dry run.
    pub written: bool,
    pub categories: Vec<CategorySummary>,
}

impl GenerationResult {
    pub fn from_tables(output: PathBuf, written: bool, tables: &NormalizedTables) -> Self {
        Self {
            output,
            written,
            categories: tables.categories.iter().map(CategorySummary::from).collect(),
        }
    }

    pub fn total_read(&self) -> usize {
        self.categories.iter().map(|c| c.read).sum()
    }

    pub fn total_emitted(&self) -> usize {
        self.categories.iter().map(|c| c.emitted).sum()
    }

    pub fn total_dropped(&self) -> usize {
        self.categories.iter().map(|c| c.dropped).sum()
    }
}
