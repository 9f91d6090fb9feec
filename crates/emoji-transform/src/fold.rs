//! Full-width to half-width folding of display names.

/// Full-width Latin letters, digits and parentheses and their ASCII forms.
#[rustfmt::skip]
pub const FULL_WIDTH_MAP: [(char, char); 64] = [
    ('Ａ', 'A'), ('Ｂ', 'B'), ('Ｃ', 'C'), ('Ｄ', 'D'),
    ('Ｅ', 'E'), ('Ｆ', 'F'), ('Ｇ', 'G'), ('Ｈ', 'H'),
    ('Ｉ', 'I'), ('Ｊ', 'J'), ('Ｋ', 'K'), ('Ｌ', 'L'),
    ('Ｍ', 'M'), ('Ｎ', 'N'), ('Ｏ', 'O'), ('Ｐ', 'P'),
    ('Ｑ', 'Q'), ('Ｒ', 'R'), ('Ｓ', 'S'), ('Ｔ', 'T'),
    ('Ｕ', 'U'), ('Ｖ', 'V'), ('Ｗ', 'W'), ('Ｘ', 'X'),
    ('Ｙ', 'Y'), ('Ｚ', 'Z'),

    ('ａ', 'a'), ('ｂ', 'b'), ('ｃ', 'c'), ('ｄ', 'd'),
    ('ｅ', 'e'), ('ｆ', 'f'), ('ｇ', 'g'), ('ｈ', 'h'),
    ('ｉ', 'i'), ('ｊ', 'j'), ('ｋ', 'k'), ('ｌ', 'l'),
    ('ｍ', 'm'), ('ｎ', 'n'), ('ｏ', 'o'), ('ｐ', 'p'),
    ('ｑ', 'q'), ('ｒ', 'r'), ('ｓ', 's'), ('ｔ', 't'),
    ('ｕ', 'u'), ('ｖ', 'v'), ('ｗ', 'w'), ('ｘ', 'x'),
    ('ｙ', 'y'), ('ｚ', 'z'),

    ('０', '0'), ('１', '1'), ('２', '2'), ('３', '3'),
    ('４', '4'), ('５', '5'), ('６', '6'), ('７', '7'),
    ('８', '8'), ('９', '9'),

    ('（', '('), ('）', ')'),
];

/// Fold one character; characters outside the table are returned as is.
pub fn fold_char(ch: char) -> char {
    FULL_WIDTH_MAP
        .iter()
        .find(|(full, _)| *full == ch)
        .map_or(ch, |(_, half)| *half)
}

/// Fold every full-width letter, digit and parenthesis in `value`.
pub fn fold_full_width(value: &str) -> String {
    value.chars().map(fold_char).collect()
}
