//! Text normalization for matching.
//!
//! Two strings are "the same" for search iff their normalized forms are
//! equal, and "contains" means substring containment on normalized forms.

use deunicode::deunicode_with_tofu;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose, drop combining marks, lowercase.
fn strip_and_lower(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonicalize free text for matching.
///
/// Lowercases, transliterates to ASCII ("é" becomes "e", "Тормоз" becomes
/// "tormoz"), collapses every run of whitespace to a single space and trims
/// both ends. Characters with no transliteration are dropped. Empty input
/// yields an empty string. Pure and idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Transliteration may emit capitals (e.g. CJK syllables), so lower again.
    let ascii = deunicode_with_tofu(&strip_and_lower(text), "").to_lowercase();

    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a query and split it into search terms.
///
/// A query that is empty after normalization yields no terms.
pub fn terms(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn test_lowercases_and_strips_accents() {
        assert_eq!(normalize("Motör"), normalize("motor"));
        assert_eq!(normalize("Café CRÈME"), "cafe creme");
        assert_eq!(normalize("Citroën"), "citroen");
    }

    #[test]
    fn test_decomposed_input_matches_composed() {
        assert_eq!(normalize("e\u{0301}"), normalize("\u{00e9}"));
    }

    #[test]
    fn test_folds_undecomposable_letters() {
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize("Øresund"), "oresund");
        assert_eq!(normalize("Łódź"), "lodz");
    }

    #[test]
    fn test_transliterates_other_scripts() {
        assert_eq!(normalize("Тормоз"), "tormoz");
        assert_eq!(normalize("Κάρτερ"), "karter");
        assert_eq!(normalize("ТОРМОЗНЫЕ  колодки"), "tormoznye kolodki");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  brake \t\n pad  "), "brake pad");
        assert_eq!(normalize("oil\u{00a0}filter"), "oil filter");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "Motör",
            "  Brake   PAD ",
            "İstanbul",
            "Straße ẞ",
            "\u{3381}",
            "ﬁlter",
            "¨umlaut",
            "Тормоз",
            "北京",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_terms() {
        assert_eq!(terms("  Brake  Pád "), vec!["brake", "pad"]);
        assert!(terms("").is_empty());
        assert!(terms(" \t ").is_empty());
    }
}
