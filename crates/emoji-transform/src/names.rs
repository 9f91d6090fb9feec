//! Display-name normalization.

use crate::fold::fold_full_width;

/// Inserted before every `(` so annotations render on their own line.
pub const ANNOTATION_BREAK: char = '\n';

/// Normalize a display name for the picker.
///
/// Returns `None` for an empty name, which the emitter writes as the null
/// marker. Otherwise the name is folded to half-width and every `(` is
/// preceded by [`ANNOTATION_BREAK`].
pub fn normalize_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    Some(break_before_annotations(&fold_full_width(name)))
}

/// Insert [`ANNOTATION_BREAK`] before every `(`.
pub fn break_before_annotations(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        if ch == '(' {
            out.push(ANNOTATION_BREAK);
        }
        out.push(ch);
    }
    out
}
