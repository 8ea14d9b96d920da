// ==============================================================================
// Autocomplete: Staged Suggestions for Partial Input
// ==============================================================================
//
// Suggestions come from the first of three stages that produces anything:
//
//   1. Prefix     -- names whose normalized form starts with the query,
//                    alphabetical.
//   2. Substring  -- names whose normalized form contains the query,
//                    alphabetical.
//   3. Fuzzy      -- admissible names under the ranking policy, by weighted
//                    distance and then by *descending* name.
//
// A literal relationship always wins over any fuzzy score; edit distance is
// only consulted when the query appears nowhere. The limit is applied after
// the stage is chosen.

use crate::model::NameDictionary;
use crate::rank::{Scored, score_within};
use crate::suggest::normalize;

/// Which stage produced a set of suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prefix,
    Substring,
    Fuzzy,
    /// Empty query, or no stage matched anything.
    None,
}

/// Suggest display names for `input`, at most `limit` of them (`0` means
/// unlimited).
pub fn suggest(input: &str, dictionary: &NameDictionary, limit: usize, threshold: usize) -> Vec<String> {
    suggest_staged(input, dictionary, limit, threshold).1
}

/// Like [`suggest`], also reporting which stage fired.
pub fn suggest_staged(
    input: &str,
    dictionary: &NameDictionary,
    limit: usize,
    threshold: usize,
) -> (Stage, Vec<String>) {
    let query = normalize(input);
    if query.is_empty() {
        return (Stage::None, Vec::new());
    }

    let normalized: Vec<(&str, String)> = dictionary
        .keys()
        .map(|name| (name.as_str(), normalize(name)))
        .collect();

    let (stage, mut names) = literal_stage(&query, &normalized)
        .or_else(|| fuzzy_stage(&query, &normalized, threshold))
        .unwrap_or((Stage::None, Vec::new()));

    if limit > 0 {
        names.truncate(limit);
    }
    (stage, names)
}

/// Stages 1 and 2. The dictionary iterates in name order, so both come out
/// sorted without an explicit sort.
fn literal_stage(query: &str, normalized: &[(&str, String)]) -> Option<(Stage, Vec<String>)> {
    let prefix = names_where(normalized, |norm| norm.starts_with(query));
    if !prefix.is_empty() {
        return Some((Stage::Prefix, prefix));
    }

    let substring = names_where(normalized, |norm| norm.contains(query));
    if !substring.is_empty() {
        return Some((Stage::Substring, substring));
    }

    None
}

fn names_where(normalized: &[(&str, String)], pred: impl Fn(&str) -> bool) -> Vec<String> {
    normalized
        .iter()
        .filter(|(_, norm)| pred(norm.as_str()))
        .map(|(name, _)| name.to_string())
        .collect()
}

fn fuzzy_stage(query: &str, normalized: &[(&str, String)], threshold: usize) -> Option<(Stage, Vec<String>)> {
    let mut scored: Vec<Scored<'_>> = normalized
        .iter()
        .filter_map(|(name, norm)| score_within(query, norm, name, threshold))
        .collect();
    if scored.is_empty() {
        return None;
    }

    scored.sort_by(Scored::cmp_descending_name);
    Some((
        Stage::Fuzzy,
        scored.into_iter().map(|s| s.name.to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champions() -> NameDictionary {
        ["Ashe", "Azir", "Anivia", "Ahri", "Braum"]
            .into_iter()
            .map(|name| (name.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn prefix_stage_is_alphabetical() {
        assert_eq!(
            suggest_staged("a", &champions(), 10, 3),
            (
                Stage::Prefix,
                ["Ahri", "Anivia", "Ashe", "Azir"].map(String::from).to_vec()
            )
        );
    }

    #[test]
    fn longer_prefix_narrows() {
        assert_eq!(suggest("az", &champions(), 10, 3), ["Azir"]);
    }

    #[test]
    fn substring_stage_when_no_prefix() {
        assert_eq!(
            suggest_staged("ivi", &champions(), 10, 3),
            (Stage::Substring, vec!["Anivia".to_string()])
        );
    }

    #[test]
    fn fuzzy_fallback_for_typo() {
        assert_eq!(
            suggest_staged("brom", &champions(), 10, 3),
            (Stage::Fuzzy, vec!["Braum".to_string()])
        );
    }

    #[test]
    fn fuzzy_ties_break_by_descending_name() {
        // Ashe and Ahri are both weighted 3; Azir is 4 and rejected.
        assert_eq!(suggest("sah", &champions(), 10, 3), ["Ashe", "Ahri"]);
    }

    #[test]
    fn limit_applies_after_stage_selection() {
        assert_eq!(suggest("a", &champions(), 2, 3), ["Ahri", "Anivia"]);
    }

    #[test]
    fn zero_limit_is_unlimited() {
        assert_eq!(suggest("a", &champions(), 0, 3).len(), 4);
    }

    #[test]
    fn empty_query_suggests_nothing() {
        assert_eq!(suggest_staged("", &champions(), 10, 3), (Stage::None, Vec::new()));
        assert!(suggest(" -'", &champions(), 10, 3).is_empty());
    }

    #[test]
    fn nothing_admissible_suggests_nothing() {
        assert_eq!(
            suggest_staged("qqqqqqq", &champions(), 10, 3),
            (Stage::None, Vec::new())
        );
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        let dictionary: NameDictionary = [("Kai'Sa", "Kaisa"), ("Kayn", "Kayn")]
            .into_iter()
            .map(|(n, id)| (n.to_string(), id.to_string()))
            .collect();
        assert_eq!(suggest("KAIS", &dictionary, 10, 3), ["Kai'Sa"]);
        assert_eq!(suggest("k", &dictionary, 10, 3), ["Kai'Sa", "Kayn"]);
    }
}
