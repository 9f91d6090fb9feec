//! Tab-separated row reading: comment skipping and column projection.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use emoji_model::RawRecord;

use crate::error::{IngestError, Result};

/// Comment marker recognised at the start of a line.
pub const COMMENT_PREFIX: char = '#';

/// Source columns projected into a [`RawRecord`], in field order:
/// code, PUA code, Japanese, DOCOMO, Softbank, KDDI, category index.
pub const COLUMN_LAYOUT: [usize; 7] = [0, 2, 8, 9, 10, 11, 12];

/// Build a headerless, unquoted, tab-delimited reader.
///
/// Rows may have any number of columns; projection checks the ones it needs.
pub fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

/// True for blank lines and lines starting with [`COMMENT_PREFIX`].
///
/// Leading whitespace, tabs included, is ignored, so the check looks at the
/// first field that is not blank.
pub fn is_comment(record: &StringRecord) -> bool {
    match record.iter().find(|field| !field.trim().is_empty()) {
        Some(first) => first.trim_start().starts_with(COMMENT_PREFIX),
        None => true,
    }
}

/// Pick the [`COLUMN_LAYOUT`] columns out of a row.
pub fn project(record: &StringRecord, line: u64) -> Result<RawRecord> {
    let column = |index: usize| -> Result<String> {
        record
            .get(index)
            .map(str::to_string)
            .ok_or(IngestError::MissingColumn {
                line,
                column: index,
                found: record.len(),
            })
    };
    let [code, pua, japanese, docomo, softbank, kddi, category] = COLUMN_LAYOUT;
    Ok(RawRecord {
        code: column(code)?,
        pua_code: column(pua)?,
        japanese_name: column(japanese)?,
        docomo_name: column(docomo)?,
        softbank_name: column(softbank)?,
        kddi_name: column(kddi)?,
        category_index: column(category)?,
    })
}

/// Iterator over projected, non-comment rows with their line numbers.
pub struct RawRecords<R> {
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> RawRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            records: tsv_reader(reader).into_records(),
        }
    }
}

impl<R: Read> Iterator for RawRecords<R> {
    type Item = Result<(u64, RawRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) => {
                    let line = err.position().map_or(0, csv::Position::line);
                    return Some(Err(IngestError::Tsv {
                        line,
                        message: err.to_string(),
                    }));
                }
            };
            if is_comment(&record) {
                continue;
            }
            let line = record.position().map_or(0, csv::Position::line);
            return Some(project(&record, line).map(|raw| (line, raw)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(input: &str) -> Vec<(u64, RawRecord)> {
        RawRecords::new(input.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    fn wide_row(first: &str, last: &str) -> String {
        let mut fields = vec![""; 13];
        fields[0] = first;
        fields[12] = last;
        fields.join("\t")
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = format!(
            "# header comment\n\n   \n  # indented comment\n{}\n",
            wide_row("1F600", "SMILEY_PEOPLE-1")
        );
        let rows = rows(&input);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 5);
        assert_eq!(rows[0].1.code, "1F600");
        assert_eq!(rows[0].1.category_index, "SMILEY_PEOPLE-1");
    }

    #[test]
    fn test_comment_after_leading_tabs_is_skipped() {
        let input = format!(
            "\t# carrier-only section\n \t\t#\tmore\n{}\n",
            wide_row("1F600", "SMILEY_PEOPLE-1")
        );
        let rows = rows(&input);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 3);
        assert_eq!(rows[0].1.code, "1F600");
    }

    #[test]
    fn test_hash_inside_later_field_is_not_a_comment() {
        let record = StringRecord::from(vec!["1F600", "#", "E63E"]);
        assert!(!is_comment(&record));
        let record = StringRecord::from(vec!["", "  ", "#E63E"]);
        assert!(is_comment(&record));
    }

    #[test]
    fn test_projection_picks_layout_columns() {
        let fields: Vec<String> = (0..14).map(|i| format!("c{i}")).collect();
        let record = StringRecord::from(fields);
        let raw = project(&record, 1).unwrap();
        assert_eq!(raw.code, "c0");
        assert_eq!(raw.pua_code, "c2");
        assert_eq!(raw.japanese_name, "c8");
        assert_eq!(raw.docomo_name, "c9");
        assert_eq!(raw.softbank_name, "c10");
        assert_eq!(raw.kddi_name, "c11");
        assert_eq!(raw.category_index, "c12");
    }

    #[test]
    fn test_short_row_reports_missing_column() {
        let record = StringRecord::from(vec!["1F600", "", "E63E"]);
        let err = project(&record, 4).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                line: 4,
                column: 8,
                found: 3
            }
        ));
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let input = wide_row("\"1F600", "SMILEY_PEOPLE-1\"");
        let rows = rows(&input);
        assert_eq!(rows[0].1.code, "\"1F600");
        assert_eq!(rows[0].1.category_index, "SMILEY_PEOPLE-1\"");
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = format!("{}\r\n", wide_row("1F600", "SMILEY_PEOPLE-1"));
        let rows = rows(&input);
        assert_eq!(rows[0].1.category_index, "SMILEY_PEOPLE-1");
    }
}
