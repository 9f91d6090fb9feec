//! Tests for Java source generation.

use emoji_model::{CategoryBuckets, EmojiCategory, EmojiEntry, EmojiNames};
use emoji_output::{JavaOutputOptions, TableKind, render_emoji_data};
use emoji_transform::normalize;

fn entry(index: u32, code_points: &[u32], pua: u32, names: [&str; 4]) -> EmojiEntry {
    EmojiEntry {
        index,
        code_points: code_points.to_vec(),
        pua_code_point: pua,
        names: EmojiNames {
            japanese: names[0].to_string(),
            docomo: names[1].to_string(),
            softbank: names[2].to_string(),
            kddi: names[3].to_string(),
        },
    }
}

fn sample_buckets() -> CategoryBuckets {
    let mut buckets = CategoryBuckets::new();
    buckets.push(
        EmojiCategory::Face,
        entry(3, &[0x1F600], 0, ["NIKONIKO", "", "", ""]),
    );
    buckets.push(
        EmojiCategory::Food,
        entry(10_005, &[0x1F34E], 0xE745, ["りんご", "リンゴ", "", ""]),
    );
    buckets.push(
        EmojiCategory::Food,
        entry(5, &[0x1F436], 0xE6A1, ["いぬ", "犬", "イヌ", "ＤＯＧ（いぬ）"]),
    );
    buckets.push(EmojiCategory::Nature, entry(1, &[0], 0xE63E, ["", "", "", ""]));
    buckets
}

/// Lines of the field named `field`, between its declaration and `};`.
fn field_elements<'a>(source: &'a str, field: &str) -> Vec<&'a str> {
    let mut lines = source.lines().skip_while(|line| !line.contains(&format!(" {field} =")));
    lines.next();
    lines
        .take_while(|line| line.trim() != "};")
        .map(str::trim)
        .collect()
}

#[test]
fn test_emoji_data_snapshot() {
    let tables = normalize(sample_buckets());
    let source = render_emoji_data(&tables, &JavaOutputOptions::default());
    insta::assert_snapshot!("emoji_data_java", source);
}

#[test]
fn test_six_tables_are_aligned() {
    let tables = normalize(sample_buckets());
    let source = render_emoji_data(&tables, &JavaOutputOptions::default());
    for category in EmojiCategory::ALL {
        let lengths: Vec<usize> = TableKind::ALL
            .into_iter()
            .map(|kind| field_elements(&source, &kind.field_name(category)).len())
            .collect();
        assert!(
            lengths.windows(2).all(|pair| pair[0] == pair[1]),
            "{category}: {lengths:?}"
        );
    }
    assert_eq!(field_elements(&source, "FOOD_VALUES").len(), 2);
    assert!(field_elements(&source, "NATURE_PUA_VALUES").is_empty());
}

#[test]
fn test_base_category_precedes_offset_category() {
    let tables = normalize(sample_buckets());
    let source = render_emoji_data(&tables, &JavaOutputOptions::default());
    assert_eq!(
        field_elements(&source, "UNICODE_FOOD_NAME"),
        vec!["\"いぬ\",", "\"りんご\","]
    );
}

#[test]
fn test_annotation_break_is_escaped() {
    let tables = normalize(sample_buckets());
    let source = render_emoji_data(&tables, &JavaOutputOptions::default());
    assert_eq!(
        field_elements(&source, "KDDI_FOOD_NAME"),
        vec![r#""DOG\n(いぬ)","#, "null,"]
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let options = JavaOutputOptions::default();
    let first = render_emoji_data(&normalize(sample_buckets()), &options);
    let second = render_emoji_data(&normalize(sample_buckets()), &options);
    assert_eq!(first, second);
}
