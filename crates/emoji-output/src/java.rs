//! Java literal formatting.

/// Literal written for an absent value.
pub const NULL_LITERAL: &str = "null";

/// Encode code points as a Java string literal of `\uXXXX` escapes.
///
/// Supplementary-plane code points become surrogate pairs. Callers pass
/// Unicode scalar values; ingestion rejects anything else.
pub fn code_point_literal(code_points: &[u32]) -> String {
    let mut out = String::with_capacity(code_points.len() * 12 + 2);
    out.push('"');
    for &code_point in code_points {
        for unit in utf16_units(code_point) {
            out.push_str(&format!("\\u{unit:04X}"));
        }
    }
    out.push('"');
    out
}

/// Quote a display name as a Java string literal, or `null` when absent.
pub fn name_literal(name: Option<&str>) -> String {
    match name {
        Some(name) => string_literal(name),
        None => NULL_LITERAL.to_string(),
    }
}

/// Quote text as a Java string literal.
///
/// Backslash, double quote and line break are escaped; everything else is
/// written as is.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn utf16_units(code_point: u32) -> Vec<u32> {
    if code_point < 0x1_0000 {
        vec![code_point]
    } else {
        let offset = code_point - 0x1_0000;
        vec![0xD800 + (offset >> 10), 0xDC00 + (offset & 0x3FF)]
    }
}
