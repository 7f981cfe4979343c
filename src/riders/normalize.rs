//! Rider name normalization
//!
//! Display names, URL slugs and the ordering used for the directory all
//! derive from the functions in this module.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Title-case a rider name
///
/// The whole string is lowercased first, then the first character of every
/// whitespace-separated word is uppercased. Whitespace is preserved as-is.
///
/// # Examples
///
/// ```
/// use veloscope::riders::title_case;
///
/// assert_eq!(title_case("POGAČAR Tadej"), "Pogačar Tadej");
/// assert_eq!(title_case("van der POEL mathieu"), "Van Der Poel Mathieu");
/// ```
#[must_use]
pub fn title_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut at_word_start = true;

    for c in lower.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// URL slug for a normalized name: lowercased, spaces replaced by `_`
///
/// ```
/// use veloscope::riders::slug;
///
/// assert_eq!(slug("Anna Lee"), "anna_lee");
/// ```
#[must_use]
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Case-insensitive substring test against an already lowercased needle
#[must_use]
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Compare two names the way a browser's `localeCompare` orders them
///
/// Primary strength ignores case and diacritics (`Čech` sorts with `Cech`),
/// then ties fall back to the lowercased name and finally to the raw bytes so
/// the order is total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Primary collation key: lowercase with diacritics stripped
///
/// Letters are decomposed (NFD) and their combining marks dropped, so `ș`,
/// `ǎ` and `ơ` all reduce to their base letter. A few Latin letters carry no
/// decomposition and are mapped by hand.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase).nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match fold_undecomposable(c) {
            Some(folded) => key.push_str(folded),
            None => key.push(c),
        }
    }
    key
}

/// Base letters for Latin letters that NFD leaves intact
fn fold_undecomposable(c: char) -> Option<&'static str> {
    let folded = match c {
        'æ' => "ae",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŀ' | 'ł' => "l",
        'ø' => "o",
        'œ' => "oe",
        'ß' => "ss",
        'ŧ' => "t",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("anna lee"), "Anna Lee");
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
        assert_eq!(title_case("jOhN sMiTh"), "John Smith");
    }

    #[test]
    fn test_title_case_keeps_whitespace() {
        assert_eq!(title_case("  anna   lee "), "  Anna   Lee ");
        assert_eq!(title_case("anna\tlee"), "Anna\tLee");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_only_splits_on_whitespace() {
        assert_eq!(title_case("ANNE-MARIE o'BRIEN"), "Anne-marie O'brien");
    }

    #[test]
    fn test_title_case_unicode() {
        assert_eq!(title_case("ŠKARNITZL ÉLODIE"), "Škarnitzl Élodie");
    }

    #[test]
    fn test_title_case_shape_holds_for_many_inputs() {
        let inputs = [
            "tadej pogačar",
            "REMCO EVENEPOEL",
            "wout van AERT",
            " leading space",
            "x",
            "a b c d",
        ];
        for input in inputs {
            let out = title_case(input);
            let mut at_start = true;
            for c in out.chars() {
                if c.is_whitespace() {
                    at_start = true;
                    continue;
                }
                if at_start {
                    assert!(!c.is_lowercase(), "{out:?} starts a word lowercase");
                } else {
                    assert!(!c.is_uppercase(), "{out:?} has an inner uppercase");
                }
                at_start = false;
            }
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Anna Lee"), "anna_lee");
        assert_eq!(slug("Mathieu Van Der Poel"), "mathieu_van_der_poel");
        assert_eq!(slug("Tadej Pogačar"), "tadej_pogačar");
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Anna Lee", "an"));
        assert!(contains_folded("Anna Lee", "lee"));
        assert!(contains_folded("Anna Lee", ""));
        assert!(!contains_folded("John Smith", "an"));
    }

    #[test]
    fn test_compare_names_ignores_case_first() {
        assert_eq!(compare_names("anna lee", "John Smith"), Ordering::Less);
        assert_eq!(compare_names("Zoe", "adam"), Ordering::Greater);
    }

    #[test]
    fn test_compare_names_folds_diacritics() {
        assert_eq!(compare_names("Čech", "Dumoulin"), Ordering::Less);
        assert_eq!(compare_names("Élie", "Fabio"), Ordering::Less);
        assert_eq!(compare_names("Ørsted", "Pedersen"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_folds_letters_outside_latin1() {
        assert_eq!(compare_names("Ștefan", "Szabo"), Ordering::Less);
        assert_eq!(compare_names("Țurcanu", "Udrea"), Ordering::Less);
        assert_eq!(compare_names("Ǎlvaro", "Bruno"), Ordering::Less);
        assert_eq!(compare_names("Hơn", "Hop"), Ordering::Less);
        assert_eq!(compare_names("Łukasz", "Maciej"), Ordering::Less);
    }

    #[test]
    fn test_romanian_names_sort_with_their_base_letters() {
        let mut names = vec!["Udrea Max", "Țurcanu Ion", "Szabo Ana", "Ștefan Ioan"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Ștefan Ioan", "Szabo Ana", "Țurcanu Ion", "Udrea Max"]);
    }

    #[test]
    fn test_compare_names_is_total() {
        assert_eq!(compare_names("Cech", "Cech"), Ordering::Equal);
        assert_ne!(compare_names("Cech", "Čech"), Ordering::Equal);
    }
}
