//! Fuzzy resolution of player words against the current vocabulary.

use strsim::jaro_winkler;
use wf_core::Exits;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Find the candidate most similar to `query`.
///
/// Scores are Jaro-Winkler similarity on lowercased text. Only candidates
/// scoring at least `threshold` qualify; on equal scores the earlier
/// candidate wins. An empty query or an empty candidate set yields `None`.
/// The result always borrows from `candidates`.
pub fn closest_match<'a, I>(query: &str, candidates: I, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return None;
    }

    let query = query.to_lowercase();
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(&query, &candidate.to_lowercase());
        if score >= threshold && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// Resolve a direction word against a room's exits.
///
/// A word that begins at least one exit name is kept as typed so the
/// movement rules can settle prefixes and ambiguity. Any other word is
/// fuzzy-matched to the closest exit name.
pub fn resolve_direction(word: &str, exits: &Exits, threshold: f64) -> Option<String> {
    if word.is_empty() {
        return None;
    }

    let lower = word.to_lowercase();
    if exits
        .directions()
        .any(|d| d.to_lowercase().starts_with(&lower))
    {
        return Some(word.to_string());
    }

    closest_match(word, exits.directions(), threshold).map(str::to_string)
}

/// Resolve the words typed after `get` against the items lying in a room.
///
/// A phrase that names an item exactly wins. Otherwise the first word is
/// fuzzy-matched, and only when that fails the whole phrase.
pub fn resolve_item<'a>(
    word: &str,
    phrase: &str,
    items: &'a [String],
    threshold: f64,
) -> Option<&'a str> {
    let lower = phrase.to_lowercase();
    if let Some(exact) = items.iter().find(|i| !lower.is_empty() && i.to_lowercase() == lower) {
        return Some(exact.as_str());
    }

    let candidates = || items.iter().map(String::as_str);
    closest_match(word, candidates(), threshold).or_else(|| {
        if phrase == word {
            None
        } else {
            closest_match(phrase, candidates(), threshold)
        }
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wf_core::RoomId;

    use super::*;

    const VERBS: &[&str] = &["go", "get", "look", "inventory", "quit", "help"];

    fn exits(dirs: &[&str]) -> Exits {
        Exits::new(
            dirs.iter()
                .enumerate()
                .map(|(i, d)| (*d, RoomId::new(i))),
        )
    }

    #[test]
    fn exact_match() {
        assert_eq!(closest_match("look", VERBS.iter().copied(), FUZZY_THRESHOLD), Some("look"));
    }

    #[test]
    fn case_insensitive_match() {
        assert_eq!(closest_match("HELP", VERBS.iter().copied(), FUZZY_THRESHOLD), Some("help"));
    }

    #[test]
    fn fuzzy_match_typo() {
        assert_eq!(closest_match("hepl", VERBS.iter().copied(), FUZZY_THRESHOLD), Some("help"));
        assert_eq!(closest_match("inv", VERBS.iter().copied(), FUZZY_THRESHOLD), Some("inventory"));
        assert_eq!(closest_match("ge", VERBS.iter().copied(), FUZZY_THRESHOLD), Some("get"));
    }

    #[test]
    fn no_match() {
        assert_eq!(closest_match("dance", VERBS.iter().copied(), FUZZY_THRESHOLD), None);
    }

    #[test]
    fn empty_query_or_candidates() {
        assert_eq!(closest_match("", VERBS.iter().copied(), FUZZY_THRESHOLD), None);
        assert_eq!(closest_match("", VERBS.iter().copied(), 0.0), None);
        assert_eq!(closest_match("look", std::iter::empty(), 0.0), None);
    }

    #[test]
    fn tie_goes_to_first_candidate() {
        assert_eq!(closest_match("key", ["key", "key"], 0.5), Some("key"));

        let candidates = ["cat", "cut"];
        let first = closest_match("cxt", candidates, 0.0);
        assert_eq!(first, Some("cat"));
    }

    #[test]
    fn direction_prefix_kept_verbatim() {
        let exits = exits(&["north", "northeast"]);
        assert_eq!(resolve_direction("nor", &exits, FUZZY_THRESHOLD), Some("nor".to_string()));
        assert_eq!(resolve_direction("north", &exits, FUZZY_THRESHOLD), Some("north".to_string()));
    }

    #[test]
    fn direction_typo_fuzzy_resolved() {
        let exits = exits(&["north", "south"]);
        assert_eq!(resolve_direction("sotuh", &exits, FUZZY_THRESHOLD), Some("south".to_string()));
        assert_eq!(resolve_direction("up", &exits, FUZZY_THRESHOLD), None);
        assert_eq!(resolve_direction("", &exits, FUZZY_THRESHOLD), None);
    }

    #[test]
    fn item_resolution() {
        let items = vec!["rusty sword".to_string(), "key".to_string()];
        assert_eq!(resolve_item("key", "key", &items, FUZZY_THRESHOLD), Some("key"));
        assert_eq!(resolve_item("rusty", "rusty", &items, FUZZY_THRESHOLD), Some("rusty sword"));
        assert_eq!(resolve_item("banana", "banana", &items, FUZZY_THRESHOLD), None);
        assert_eq!(resolve_item("key", "key", &[], FUZZY_THRESHOLD), None);
        assert_eq!(resolve_item("", "", &items, FUZZY_THRESHOLD), None);
    }

    #[test]
    fn item_second_word_ignores_trailing_words() {
        let items = vec!["lantern".to_string(), "key".to_string()];
        assert_eq!(
            resolve_item("key", "key from the old wooden table", &items, FUZZY_THRESHOLD),
            Some("key")
        );
    }

    #[test]
    fn item_full_name_beats_shared_first_word() {
        let items = vec!["rusty sword".to_string(), "rusty shield".to_string()];
        assert_eq!(
            resolve_item("rusty", "rusty shield", &items, FUZZY_THRESHOLD),
            Some("rusty shield")
        );
        assert_eq!(
            resolve_item("rusty", "Rusty Sword", &items, FUZZY_THRESHOLD),
            Some("rusty sword")
        );
    }

    #[test]
    fn item_phrase_tried_when_first_word_fails() {
        let items = vec!["wooden crate".to_string()];
        assert_eq!(resolve_item("old", "old", &items, FUZZY_THRESHOLD), None);
        assert_eq!(
            resolve_item("old", "old wooden crate", &items, FUZZY_THRESHOLD),
            Some("wooden crate")
        );
        assert_eq!(resolve_item("banana", "banana split", &items, FUZZY_THRESHOLD), None);
    }

    proptest! {
        #[test]
        fn match_is_always_a_candidate(
            query in "[a-z]{0,8}",
            candidates in prop::collection::vec("[a-zA-Z ]{0,10}", 0..6),
            threshold in 0.0f64..=1.0,
        ) {
            let found = closest_match(&query, candidates.iter().map(String::as_str), threshold);
            if let Some(found) = found {
                prop_assert!(candidates.iter().any(|c| c == found));
            }
        }

        #[test]
        fn matching_is_deterministic(
            query in "[a-z]{1,8}",
            candidates in prop::collection::vec("[a-z]{1,10}", 1..6),
        ) {
            let first = closest_match(&query, candidates.iter().map(String::as_str), FUZZY_THRESHOLD);
            let second = closest_match(&query, candidates.iter().map(String::as_str), FUZZY_THRESHOLD);
            prop_assert_eq!(first, second);
        }
    }
}
