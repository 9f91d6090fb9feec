//! Java source generation for the emoji picker tables.
//!
//! Each output category becomes six parallel `String[]` fields. Element `i`
//! of every field describes the same emoji; consumers rely on that alignment.

use std::io::{self, Write};

use emoji_model::EmojiCategory;
use emoji_transform::{NormalizedCategory, NormalizedEntry, NormalizedTables};

use crate::java::{code_point_literal, name_literal};

/// Package of the generated class.
pub const DEFAULT_PACKAGE: &str = "sh.eliza.japaneseinput.emoji";

/// Name of the generated class.
pub const DEFAULT_CLASS_NAME: &str = "EmojiData";

/// Options for Java source generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOutputOptions {
    pub package: String,
    pub class_name: String,
}

impl Default for JavaOutputOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl JavaOutputOptions {
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// The six parallel tables emitted per category, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Unicode code point sequences.
    Values,
    /// Carrier PUA code points.
    PuaValues,
    UnicodeName,
    DocomoName,
    SoftbankName,
    KddiName,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Values,
        TableKind::PuaValues,
        TableKind::UnicodeName,
        TableKind::DocomoName,
        TableKind::SoftbankName,
        TableKind::KddiName,
    ];

    /// Java field name for this table in `category`.
    pub fn field_name(self, category: EmojiCategory) -> String {
        match self {
            TableKind::Values => format!("{category}_VALUES"),
            TableKind::PuaValues => format!("{category}_PUA_VALUES"),
            TableKind::UnicodeName => format!("UNICODE_{category}_NAME"),
            TableKind::DocomoName => format!("DOCOMO_{category}_NAME"),
            TableKind::SoftbankName => format!("SOFTBANK_{category}_NAME"),
            TableKind::KddiName => format!("KDDI_{category}_NAME"),
        }
    }

    /// Field declaration up to and including the opening brace.
    fn declaration(self, category: EmojiCategory) -> String {
        let name = self.field_name(category);
        match self {
            TableKind::Values | TableKind::PuaValues => {
                format!("public static final String[] {name} = new String[]{{")
            }
            _ => format!("public static final String[] {name} = {{"),
        }
    }

    /// Java literal of this table's element for `entry`.
    pub fn element(self, entry: &NormalizedEntry) -> String {
        match self {
            TableKind::Values => code_point_literal(&entry.code_points),
            TableKind::PuaValues => code_point_literal(&[entry.pua_code_point]),
            TableKind::UnicodeName => name_literal(entry.japanese.as_deref()),
            TableKind::DocomoName => name_literal(entry.docomo.as_deref()),
            TableKind::SoftbankName => name_literal(entry.softbank.as_deref()),
            TableKind::KddiName => name_literal(entry.kddi.as_deref()),
        }
    }
}

/// Render the complete Java source file.
pub fn render_emoji_data(tables: &NormalizedTables, options: &JavaOutputOptions) -> String {
    let mut source = String::new();
    source.push_str(&format!("package {};\n", options.package));
    source.push_str(&format!("public class {} {{\n", options.class_name));
    for category in &tables.categories {
        render_category(&mut source, category);
    }
    source.push_str("}\n");
    source
}

/// Render the Java source and write it to `writer`.
pub fn write_emoji_data<W: Write>(
    writer: &mut W,
    tables: &NormalizedTables,
    options: &JavaOutputOptions,
) -> io::Result<()> {
    writer.write_all(render_emoji_data(tables, options).as_bytes())?;
    writer.flush()
}

fn render_category(source: &mut String, category: &NormalizedCategory) {
    for kind in TableKind::ALL {
        source.push_str(&format!("  {}\n", kind.declaration(category.category)));
        for entry in &category.entries {
            source.push_str(&format!("    {},\n", kind.element(entry)));
        }
        source.push_str("  };\n");
    }
}
