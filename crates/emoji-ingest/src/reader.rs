//! Emoji table reading: row validation and category bucketing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use emoji_model::{
    CategoryBuckets, DUMMY_CODE_POINT, EmojiCategory, EmojiEntry, EmojiNames, RawRecord,
    category_mapping,
};
use tracing::{debug, info, trace};

use crate::error::{IngestError, Result};
use crate::tsv::RawRecords;

/// Marks a PUA code point that is not the carrier's primary mapping.
pub const SECONDARY_PUA_PREFIX: char = '>';

/// Read an emoji table file into category buckets.
pub fn read_emoji_table(path: &Path) -> Result<CategoryBuckets> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    debug!(path = %path.display(), "reading emoji table");
    read_emoji_table_from_reader(BufReader::new(file))
}

/// Read emoji table rows from any reader into category buckets.
///
/// Stops at the first invalid row.
pub fn read_emoji_table_from_reader<R: Read>(reader: R) -> Result<CategoryBuckets> {
    let mut buckets = CategoryBuckets::new();
    for row in RawRecords::new(reader) {
        let (line, raw) = row?;
        let (category, entry) = parse_record(&raw, line)?;
        trace!(line, %category, index = entry.index, "accepted row");
        buckets.push(category, entry);
    }
    for (category, count) in buckets.counts() {
        debug!(%category, count, "bucketed entries");
    }
    info!(records = buckets.len(), "emoji table read");
    Ok(buckets)
}

/// Validate one projected row and resolve its output category.
pub fn parse_record(raw: &RawRecord, line: u64) -> Result<(EmojiCategory, EmojiEntry)> {
    match (raw.code.is_empty(), raw.japanese_name.is_empty()) {
        (false, true) => {
            return Err(IngestError::MissingJapaneseName {
                line,
                code: raw.code.clone(),
            });
        }
        (true, false) => {
            return Err(IngestError::MissingCodePoint {
                line,
                name: raw.japanese_name.clone(),
            });
        }
        _ => {}
    }

    let code_points = if raw.code.is_empty() {
        vec![DUMMY_CODE_POINT]
    } else {
        parse_code_points(&raw.code, line)?
    };
    let pua_code_point = parse_pua_code_point(&raw.pua_code, line)?;
    let (category, index) = parse_category_index(&raw.category_index, line)?;

    let entry = EmojiEntry {
        index,
        code_points,
        pua_code_point,
        names: EmojiNames {
            japanese: raw.japanese_name.clone(),
            docomo: raw.docomo_name.clone(),
            softbank: raw.softbank_name.clone(),
            kddi: raw.kddi_name.clone(),
        },
    };
    Ok((category, entry))
}

/// Parse a whitespace-separated sequence of hex code points.
pub fn parse_code_points(value: &str, line: u64) -> Result<Vec<u32>> {
    let code_points = value
        .split_whitespace()
        .map(|part| parse_code_point(part, "Unicode", line))
        .collect::<Result<Vec<_>>>()?;
    if code_points.is_empty() {
        return Err(IngestError::InvalidCodePoint {
            line,
            field: "Unicode",
            value: value.to_string(),
        });
    }
    Ok(code_points)
}

/// Parse a PUA code point, dropping the secondary-mapping marker.
///
/// Rows with a secondary PUA mapping still have their own Unicode code
/// point, so they are kept like any other row.
pub fn parse_pua_code_point(value: &str, line: u64) -> Result<u32> {
    if value.is_empty() {
        return Ok(DUMMY_CODE_POINT);
    }
    let value = value.strip_prefix(SECONDARY_PUA_PREFIX).unwrap_or(value);
    parse_code_point(value, "PUA", line)
}

/// Split `<RAW_CATEGORY>-<N>` and compute the effective index.
pub fn parse_category_index(value: &str, line: u64) -> Result<(EmojiCategory, u32)> {
    let invalid = || IngestError::InvalidCategoryIndex {
        line,
        value: value.to_string(),
    };
    let mut parts = value.split('-');
    let (raw_category, ordinal) = match (parts.next(), parts.next(), parts.next()) {
        (Some(raw_category), Some(ordinal), None) => (raw_category, ordinal),
        _ => return Err(invalid()),
    };
    let ordinal: u32 = ordinal.trim().parse().map_err(|_| invalid())?;
    let mapping =
        category_mapping(raw_category).map_err(|source| IngestError::Category { line, source })?;
    let index = mapping
        .effective_index(ordinal)
        .map_err(|source| IngestError::Category { line, source })?;
    Ok((mapping.category, index))
}

fn parse_code_point(value: &str, field: &'static str, line: u64) -> Result<u32> {
    let invalid = || IngestError::InvalidCodePoint {
        line,
        field,
        value: value.to_string(),
    };
    let code_point = u32::from_str_radix(value.trim(), 16).map_err(|_| invalid())?;
    // Surrogates and values past U+10FFFF cannot be emitted as UTF-16.
    char::from_u32(code_point).ok_or_else(invalid)?;
    Ok(code_point)
}
