// crates/yamadb-core/src/text.rs

use deunicode::deunicode;

/// Normalize a string for matching: transliterate to ASCII, then lowercase.
///
/// "Zaō" and "zao" compare equal after folding, and a query like "fuji"
/// matches the romanized subname "Mt. Fuji". Kanji transliterate to their
/// CJK readings, so romanized queries should be matched against the
/// romanized subname rather than the kanji canonical name.
pub fn fold_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Accent-insensitive and case-insensitive equality on folded forms.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
