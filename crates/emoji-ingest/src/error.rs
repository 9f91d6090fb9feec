//! Error types for emoji table ingestion.

use std::path::PathBuf;

use emoji_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading the emoji table.
///
/// Every row-level variant carries the 1-based source line.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Table file not found.
    #[error("emoji table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === TSV Errors ===
    /// The TSV reader rejected the input (I/O failure or invalid UTF-8).
    #[error("line {line}: failed to read TSV row: {message}")]
    Tsv { line: u64, message: String },

    /// A row is too short for the fixed column layout.
    #[error("line {line}: missing column {column} (row has {found} columns)")]
    MissingColumn { line: u64, column: usize, found: usize },

    // === Consistency Errors ===
    /// Unicode code point given without a Japanese name.
    #[error("No Japanese name for {code} found. (line {line})")]
    MissingJapaneseName { line: u64, code: String },

    /// Japanese name given without a Unicode code point.
    #[error("No Unicode code point for {name} found. (line {line})")]
    MissingCodePoint { line: u64, name: String },

    // === Value Errors ===
    /// A code point field is not hexadecimal or not a Unicode scalar value.
    #[error("line {line}: invalid {field} code point '{value}'")]
    InvalidCodePoint {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Category index is not of the form `<CATEGORY>-<N>`.
    #[error("line {line}: invalid category index '{value}'")]
    InvalidCategoryIndex { line: u64, value: String },

    /// Category lookup or index computation failed.
    #[error("line {line}: {source}")]
    Category {
        line: u64,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
