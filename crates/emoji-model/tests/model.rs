//! Tests for the category mapping table.

use emoji_model::{CARRIER_INDEX_BASE, CATEGORY_MAP, EmojiCategory, ModelError, category_mapping};

#[test]
fn test_category_map_matches_picker_layout() {
    let expected = [
        ("SMILEY_PEOPLE", EmojiCategory::Face, 0),
        ("ANIMALS_NATURE", EmojiCategory::Food, 0),
        ("FOOD_DRINK", EmojiCategory::Food, 10_000),
        ("TRAVEL_PLACES", EmojiCategory::City, 0),
        ("ACTIVITY", EmojiCategory::Activity, 0),
        ("OBJECTS", EmojiCategory::Activity, 10_000),
        ("SYMBOLS", EmojiCategory::Nature, 0),
        ("FLAGS", EmojiCategory::Nature, 10_000),
    ];
    for (raw, category, offset) in expected {
        let mapping = category_mapping(raw).unwrap();
        assert_eq!(mapping.category, category, "{raw}");
        assert_eq!(mapping.offset, offset, "{raw}");
    }
    assert_eq!(CATEGORY_MAP.len(), expected.len());
}

#[test]
fn test_offsets_stay_below_carrier_base() {
    assert!(CATEGORY_MAP.iter().all(|m| m.offset < CARRIER_INDEX_BASE));
}

#[test]
fn test_unknown_raw_category() {
    let err = category_mapping("PEOPLE").unwrap_err();
    assert!(matches!(err, ModelError::UnknownRawCategory { ref name } if name == "PEOPLE"));
    assert_eq!(err.to_string(), "unknown raw category 'PEOPLE'");
}

#[test]
fn test_raw_category_lookup_is_case_sensitive() {
    assert!(category_mapping("flags").is_err());
}

#[test]
fn test_emission_order() {
    let names: Vec<&str> = EmojiCategory::ALL.into_iter().map(EmojiCategory::as_str).collect();
    assert_eq!(names, vec!["FACE", "FOOD", "CITY", "ACTIVITY", "NATURE"]);
}
