//! Accent-insensitive text folding for search and matching.

use unicode_normalization::UnicodeNormalization;

/// Fold a string to a lowercase base-letter form for matching.
///
/// Stroked glyphs do not decompose into base + combining mark, so they are
/// substituted explicitly before the generic NFD pass drops the marks.
pub fn fold_for_search(input: &str) -> String {
    let substituted: String = input
        .chars()
        .map(|c| match c {
            // Eth is included because sources regularly confuse it with
            // the stroked D in Balkan names
            'Đ' | 'đ' | 'Ð' | 'ð' => 'd',
            'Ø' | 'ø' => 'o',
            'Ł' | 'ł' => 'l',
            other => other,
        })
        .collect();

    substituted
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Accent-insensitive containment check (used by the player-name search)
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold_for_search(needle);
    if needle.is_empty() {
        return true;
    }
    fold_for_search(haystack).contains(&needle)
}

/// Accent-insensitive equality (used for country and pre-draft team
/// membership matching)
pub fn eq_folded(a: &str, b: &str) -> bool {
    fold_for_search(a) == fold_for_search(b)
}
