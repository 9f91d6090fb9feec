//! Emoji table ingestion.
//!
//! Reads the tab-separated emoji table, validates every row and groups the
//! resulting entries by output category.
//!
//! # Table layout
//!
//! Lines starting with `#` are comments. Data rows are tab-separated; the
//! columns used are listed in [`COLUMN_LAYOUT`]:
//!
//! | Column | Field                                   |
//! |--------|-----------------------------------------|
//! | 0      | Unicode code points (hex, space separated) |
//! | 2      | Carrier PUA code point (hex, `>` = secondary) |
//! | 8      | Unicode Japanese name                   |
//! | 9      | DOCOMO name                             |
//! | 10     | Softbank name                           |
//! | 11     | KDDI name                               |
//! | 12     | Category index, `<RAW_CATEGORY>-<N>`    |
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use emoji_ingest::read_emoji_table;
//!
//! let buckets = read_emoji_table(Path::new("data/emoji/emoji_data.tsv"))?;
//! ```

mod error;
mod reader;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use reader::{
    SECONDARY_PUA_PREFIX, parse_category_index, parse_code_points, parse_pua_code_point,
    parse_record, read_emoji_table, read_emoji_table_from_reader,
};

// === TSV Rows ===
pub use tsv::{COLUMN_LAYOUT, COMMENT_PREFIX, RawRecords, is_comment, project, tsv_reader};
