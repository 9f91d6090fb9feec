//! Generation pipeline with explicit stages.
//!
//! 1. **Ingest**: read and validate the emoji table into category buckets
//! 2. **Normalize**: sort, drop nameless entries, fold display names
//! 3. **Output**: render the Java source into a temporary file and rename
//!    it over the output path (a dry run only renders)
//!
//! Any error before the output stage leaves the output path untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emoji_ingest::read_emoji_table;
use emoji_model::CategoryBuckets;
use emoji_output::{JavaOutputOptions, render_emoji_data, write_emoji_data};
use emoji_transform::{NormalizedTables, normalize};
use tempfile::NamedTempFile;
use tracing::{debug, info, info_span};

use crate::types::{GenerationOptions, GenerationResult};

/// Read and validate the emoji table.
pub fn ingest(path: &Path) -> Result<CategoryBuckets> {
    let _span = info_span!("ingest", path = %path.display()).entered();
    let buckets =
        read_emoji_table(path).with_context(|| format!("read emoji table {}", path.display()))?;
    info!(records = buckets.len(), "ingest complete");
    Ok(buckets)
}

/// Order, filter and normalize the bucketed entries.
pub fn transform(buckets: CategoryBuckets) -> NormalizedTables {
    let _span = info_span!("normalize").entered();
    let tables = normalize(buckets);
    info!(entries = tables.entry_count(), "normalize complete");
    tables
}

/// Render the Java source for `tables` without writing it.
pub fn render(tables: &NormalizedTables, options: &JavaOutputOptions) -> String {
    let _span = info_span!("render", class = %options.class_name).entered();
    let source = render_emoji_data(tables, options);
    debug!(bytes = source.len(), "rendered java source");
    source
}

/// Write the Java source for `tables` to `path` atomically.
pub fn write_output(
    path: &Path,
    tables: &NormalizedTables,
    options: &JavaOutputOptions,
) -> Result<()> {
    let _span = info_span!("output", path = %path.display(), class = %options.class_name).entered();
    write_atomic(path, |file| write_emoji_data(file, tables, options))?;
    info!("output written");
    Ok(())
}

/// Replace `path` with whatever `write` produces.
///
/// `write` fills a temporary file in the destination directory, which is then
/// renamed over `path`. Missing parent directories are created. When `write`
/// fails the temporary file is removed and `path` is left as it was.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let parent = output_dir(path);
    fs::create_dir_all(&parent)
        .with_context(|| format!("create output directory {}", parent.display()))?;
    let mut file = NamedTempFile::new_in(&parent)
        .with_context(|| format!("create temporary file in {}", parent.display()))?;
    write(&mut file).context("write temporary output file")?;
    file.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

/// Process exit status for a run: `0` on success, `1` on any fatal error.
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Run every stage for `options`.
pub fn run(options: &GenerationOptions) -> Result<GenerationResult> {
    let buckets = ingest(&options.emoji_data)?;
    let tables = transform(buckets);
    if options.dry_run {
        let source = render(&tables, &options.java);
        info!(
            path = %options.output.display(),
            bytes = source.len(),
            "dry run, output not written"
        );
    } else {
        write_output(&options.output, &tables, &options.java)?;
    }
    Ok(GenerationResult::from_tables(
        options.output.clone(),
        !options.dry_run,
        &tables,
    ))
}

fn output_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
