//! Emoji picker table generation.
//!
//! Renders normalized emoji tables as a Java class holding six parallel
//! `String[]` fields per output category:
//!
//! - `<CATEGORY>_VALUES`: Unicode code point sequences
//! - `<CATEGORY>_PUA_VALUES`: carrier PUA code points
//! - `UNICODE_`, `DOCOMO_`, `SOFTBANK_`, `KDDI_<CATEGORY>_NAME`: display names
//!   or `null`

mod java;
mod writer;

pub use java::{NULL_LITERAL, code_point_literal, name_literal, string_literal};
pub use writer::{
    DEFAULT_CLASS_NAME, DEFAULT_PACKAGE, JavaOutputOptions, TableKind, render_emoji_data,
    write_emoji_data,
};
