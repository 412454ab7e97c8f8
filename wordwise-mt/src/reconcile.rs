//! Reconciliation of service output with the requested word order
//!
//! The service may drop words, reorder them, add extra entries, or change
//! capitalization. Reconciliation maps its pairs back onto the input so the
//! result always has one pair per input word, in input order.

use crate::response::TranslationPair;
use std::collections::HashMap;

/// Map translated pairs back onto `words`
///
/// For each input word the target is, in order of preference: the
/// translation of the exact word, the translation of its capitalized form
/// (see [`capitalize`]), or the word itself. When the service lists the same
/// source twice, the later entry wins.
pub fn reconcile(words: &[String], pairs: Vec<TranslationPair>) -> Vec<TranslationPair> {
    let lookup: HashMap<String, String> = pairs
        .into_iter()
        .map(|pair| (pair.source, pair.target))
        .collect();

    words
        .iter()
        .map(|word| {
            let target = lookup
                .get(word)
                .or_else(|| lookup.get(&capitalize(word)))
                .cloned()
                .unwrap_or_else(|| {
                    tracing::debug!(word = %word, "no translation returned, keeping source word");
                    word.clone()
                });
            TranslationPair {
                source: word.clone(),
                target,
            }
        })
        .collect()
}

/// Uppercase the first character and lowercase the rest
///
/// Only this single form is tried as a fallback; all-caps or otherwise
/// case-folded service output is not matched. The first character is
/// uppercased, not titlecased, so `ß` becomes `SS` and `ǆ` becomes `Ǆ`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_matches_in_input_order() {
        let pairs = vec![
            TranslationPair::new("katze", "cat"),
            TranslationPair::new("haus", "house"),
        ];
        assert_eq!(
            reconcile(&words(&["haus", "katze"]), pairs),
            vec![
                TranslationPair::new("haus", "house"),
                TranslationPair::new("katze", "cat"),
            ]
        );
    }

    #[test]
    fn test_missing_word_falls_back_to_identity() {
        let pairs = vec![TranslationPair::new("Hund", "dog")];
        assert_eq!(
            reconcile(&words(&["Haus"]), pairs),
            vec![TranslationPair::new("Haus", "Haus")]
        );
    }

    #[test]
    fn test_capitalized_response_matches() {
        let pairs = vec![TranslationPair::new("Katze", "cat")];
        assert_eq!(
            reconcile(&words(&["katze"]), pairs),
            vec![TranslationPair::new("katze", "cat")]
        );
    }

    #[test]
    fn test_exact_match_preferred_over_capitalized() {
        let pairs = vec![
            TranslationPair::new("Essen", "food"),
            TranslationPair::new("essen", "to eat"),
        ];
        assert_eq!(
            reconcile(&words(&["essen"]), pairs),
            vec![TranslationPair::new("essen", "to eat")]
        );
    }

    #[test]
    fn test_all_caps_response_is_not_matched() {
        let pairs = vec![TranslationPair::new("KATZE", "cat")];
        assert_eq!(
            reconcile(&words(&["katze"]), pairs),
            vec![TranslationPair::new("katze", "katze")]
        );
    }

    #[test]
    fn test_extra_entries_are_ignored() {
        let pairs = vec![
            TranslationPair::new("haus", "house"),
            TranslationPair::new("baum", "tree"),
        ];
        let result = reconcile(&words(&["haus"]), pairs);
        assert_eq!(result, vec![TranslationPair::new("haus", "house")]);
    }

    #[test]
    fn test_duplicate_sources_last_wins() {
        let pairs = vec![
            TranslationPair::new("bank", "bench"),
            TranslationPair::new("bank", "bank"),
        ];
        assert_eq!(reconcile(&words(&["bank"]), pairs)[0].target, "bank");
    }

    #[test]
    fn test_duplicate_input_words_each_get_a_pair() {
        let pairs = vec![TranslationPair::new("ja", "yes")];
        assert_eq!(
            reconcile(&words(&["ja", "nein", "ja"]), pairs),
            vec![
                TranslationPair::new("ja", "yes"),
                TranslationPair::new("nein", "nein"),
                TranslationPair::new("ja", "yes"),
            ]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("katze"), "Katze");
        assert_eq!(capitalize("hAUS"), "Haus");
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize("ёлка"), "Ёлка");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_uses_uppercase_not_titlecase() {
        assert_eq!(capitalize("straße"), "Straße");
        assert_eq!(capitalize("ßtraße"), "SStraße");
        assert_eq!(capitalize("ǆungla"), "Ǆungla");
    }
}
