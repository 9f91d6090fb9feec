//! Integration tests for reading emoji tables.

use std::io::Write;

use emoji_ingest::{IngestError, read_emoji_table, read_emoji_table_from_reader};
use emoji_model::EmojiCategory;
use tempfile::NamedTempFile;

/// Build a 13-column row with the projected fields filled in.
fn row(code: &str, pua: &str, names: [&str; 4], category_index: &str) -> String {
    let mut fields = vec![""; 13];
    fields[0] = code;
    fields[1] = "unused";
    fields[2] = pua;
    fields[8] = names[0];
    fields[9] = names[1];
    fields[10] = names[2];
    fields[11] = names[3];
    fields[12] = category_index;
    fields.join("\t")
}

fn table(rows: &[String]) -> String {
    let mut text = String::from("# code\tname\tpua\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

#[test]
fn test_round_trip_row() {
    let input = table(&[row(
        "1F600",
        "",
        ["NIKONIKO", "", "", ""],
        "SMILEY_PEOPLE-3",
    )]);
    let buckets = read_emoji_table_from_reader(input.as_bytes()).unwrap();

    let face = buckets.entries(EmojiCategory::Face);
    assert_eq!(face.len(), 1);
    assert_eq!(face[0].index, 3);
    assert_eq!(face[0].code_points, vec![0x1F600]);
    assert_eq!(face[0].pua_code_point, 0);
    assert_eq!(face[0].names.japanese, "NIKONIKO");
    assert!(face[0].names.docomo.is_empty());
    assert!(face[0].names.softbank.is_empty());
    assert!(face[0].names.kddi.is_empty());
}

#[test]
fn test_paired_raw_categories_share_a_bucket() {
    let input = table(&[
        row("1F34E", "E745", ["RINGO", "APPLE", "", ""], "FOOD_DRINK-5"),
        row("1F436", ">E6A1", ["INU", "DOG", "WAN", ""], "ANIMALS_NATURE-5"),
    ]);
    let buckets = read_emoji_table_from_reader(input.as_bytes()).unwrap();

    assert_eq!(buckets.len(), 2);
    insta::assert_json_snapshot!("food_bucket", buckets.entries(EmojiCategory::Food));
}

#[test]
fn test_consistency_error_stops_reading() {
    let input = table(&[
        row("1F600", "", ["NIKONIKO", "", "", ""], "SMILEY_PEOPLE-1"),
        row("1F601", "", ["", "", "", ""], "SMILEY_PEOPLE-2"),
        row("1F602", "", ["WARAI", "", "", ""], "SMILEY_PEOPLE-3"),
    ]);
    let err = read_emoji_table_from_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingJapaneseName { line: 3, ref code } if code == "1F601"
    ));
}

#[test]
fn test_name_without_code_is_fatal() {
    let input = table(&[row("", "E63E", ["HARE", "", "", ""], "SYMBOLS-1")]);
    let err = read_emoji_table_from_reader(input.as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "No Unicode code point for HARE found. (line 2)");
}

#[test]
fn test_nameless_carrier_row_is_bucketed() {
    // Both code and Japanese name empty passes the consistency check and
    // gets the dummy code point; only the emitter drops it.
    let input = table(&[row("", "E63E", ["", "", "", ""], "SYMBOLS-1")]);
    let buckets = read_emoji_table_from_reader(input.as_bytes()).unwrap();
    let nature = buckets.entries(EmojiCategory::Nature);
    assert_eq!(nature.len(), 1);
    assert_eq!(nature[0].code_points, vec![0]);
    assert!(!nature[0].has_name());
}

#[test]
fn test_indented_comment_line_is_skipped() {
    let input = format!(
        "\t# carrier-only section\n{}\n",
        row("1F600", "", ["NIKONIKO", "", "", ""], "SMILEY_PEOPLE-3")
    );
    let buckets = read_emoji_table_from_reader(input.as_bytes()).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets.entries(EmojiCategory::Face)[0].index, 3);
}

#[test]
fn test_short_row_is_fatal() {
    let input = "1F600\t\tE63E\n";
    let err = read_emoji_table_from_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { line: 1, .. }));
}

#[test]
fn test_read_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    let input = table(&[
        row("1F3E0", "E663", ["IE", "", "", ""], "TRAVEL_PLACES-1"),
        row("26BD", "E656", ["SAKKA", "", "", ""], "ACTIVITY-2"),
        row("1F4F1", "E688", ["KEITAI", "", "", ""], "OBJECTS-1"),
    ]);
    file.write_all(input.as_bytes()).unwrap();
    file.flush().unwrap();

    let buckets = read_emoji_table(file.path()).unwrap();
    assert_eq!(buckets.entries(EmojiCategory::City).len(), 1);
    let activity: Vec<u32> = buckets
        .entries(EmojiCategory::Activity)
        .iter()
        .map(|e| e.index)
        .collect();
    assert_eq!(activity, vec![2, 10_001]);
}

#[test]
fn test_missing_file() {
    let err = read_emoji_table(std::path::Path::new("/nonexistent/emoji_data.tsv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
