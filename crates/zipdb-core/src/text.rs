// crates/zipdb-core/src/text.rs

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1. Transliterate Unicode → ASCII (e.g. `Añasco` -> `Anasco`)
/// 2. Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII. City and county names in the
/// dataset (notably Puerto Rico entries) carry diacritics, so all name
/// predicates go through this fold.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```
/// use zipdb_core::equals_folded;
///
/// assert!(equals_folded("Añasco", "anasco"));
/// assert!(equals_folded("CLEVELAND", "cleveland"));
/// assert!(!equals_folded("Cleveland", "Columbus"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
