// ==============================================================================
// Ranking Policy: Weighted Edit Distance
// ==============================================================================
//
// Raw edit distance alone ranks "ah" as close to "ashe" as to "ahri"; a user
// typing the start of a name expects the latter. The policy layers two
// bonuses on top of `levenshtein`:
//
//   - the candidate starts with the query:        distance - PREFIX_BONUS
//   - the candidate contains the query elsewhere: distance - SUBSTRING_BONUS
//
// The result is clamped at zero and compared against the configured
// threshold. Both inputs are expected to be `normalize`d already.

use std::cmp::Ordering;

use crate::suggest::levenshtein;

/// Subtracted from the distance when the candidate starts with the query.
pub const PREFIX_BONUS: usize = 2;

/// Subtracted from the distance when the candidate contains the query
/// anywhere other than at its start.
pub const SUBSTRING_BONUS: usize = 1;

/// Apply the prefix/substring bonus to a raw distance.
///
/// Never exceeds `distance` and never goes below zero.
pub fn weighted_distance(query: &str, candidate: &str, distance: usize) -> usize {
    let bonus = if candidate.starts_with(query) {
        PREFIX_BONUS
    } else if candidate.contains(query) {
        SUBSTRING_BONUS
    } else {
        0
    };
    distance.saturating_sub(bonus)
}

/// A dictionary entry that passed the threshold, with both distances kept
/// for tie-breaking and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored<'a> {
    /// Display name as stored in the dictionary (not normalized).
    pub name: &'a str,
    /// Pure Levenshtein distance between the normalized query and name.
    pub distance: usize,
    /// Distance after bonuses; the ranking key.
    pub weighted: usize,
}

impl Scored<'_> {
    /// Resolver order: ascending weighted distance, then ascending name.
    pub fn cmp_ascending(&self, other: &Self) -> Ordering {
        self.weighted
            .cmp(&other.weighted)
            .then_with(|| self.name.cmp(other.name))
    }

    /// Fuzzy autocomplete order: ascending weighted distance, then
    /// *descending* name. Existing clients depend on this ordering, so it
    /// deliberately differs from [`cmp_ascending`](Self::cmp_ascending).
    pub fn cmp_descending_name(&self, other: &Self) -> Ordering {
        self.weighted
            .cmp(&other.weighted)
            .then_with(|| other.name.cmp(self.name))
    }
}

/// Score the dictionary entry `name`, whose normalized form is
/// `normalized_name`, against an already-normalized `query`.
///
/// Returns `None` when the candidate is not admissible, i.e. its weighted
/// distance exceeds `threshold`. Candidates whose raw distance is beyond
/// `threshold + PREFIX_BONUS` are rejected before any bonus is computed,
/// since no bonus can bring them back under the threshold.
pub fn score_within<'a>(
    query: &str,
    normalized_name: &str,
    name: &'a str,
    threshold: usize,
) -> Option<Scored<'a>> {
    let distance = levenshtein(query, normalized_name);
    if distance > threshold + PREFIX_BONUS {
        return None;
    }
    let weighted = weighted_distance(query, normalized_name, distance);
    (weighted <= threshold).then_some(Scored {
        name,
        distance,
        weighted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::normalize;

    fn score<'a>(query: &str, name: &'a str, threshold: usize) -> Option<Scored<'a>> {
        score_within(query, &normalize(name), name, threshold)
    }

    #[test]
    fn prefix_bonus_applies() {
        // "ahr" -> "ahri" is one insertion, minus the prefix bonus.
        assert_eq!(weighted_distance("ahr", "ahri", 1), 0);
        assert_eq!(weighted_distance("ash", "ashe", 1), 0);
    }

    #[test]
    fn substring_bonus_applies_when_not_prefix() {
        // "ivia" is inside "anivia" but not at its start.
        assert_eq!(weighted_distance("ivia", "anivia", 2), 1);
    }

    #[test]
    fn prefix_bonus_takes_precedence_over_substring() {
        // "a" is both a prefix and a substring of "ahri"; only one bonus.
        assert_eq!(weighted_distance("a", "ahri", 3), 1);
    }

    #[test]
    fn no_bonus_without_literal_relation() {
        assert_eq!(weighted_distance("brom", "braum", 2), 2);
    }

    #[test]
    fn weighted_is_clamped_and_never_above_raw() {
        for (q, n) in [("a", "ahri"), ("ahri", "ahri"), ("zz", "ashe"), ("vi", "anivia")] {
            let d = levenshtein(q, n);
            let w = weighted_distance(q, n, d);
            assert!(w <= d, "weighted {w} > raw {d} for {q:?}/{n:?}");
        }
        // An exact match has distance 0; the bonus must not underflow.
        assert_eq!(weighted_distance("ahri", "ahri", 0), 0);
    }

    #[test]
    fn score_rejects_beyond_threshold() {
        assert_eq!(score("sah", "Azir", 3), None);
        let ashe = score("sah", "Ashe", 3).expect("Ashe is admissible");
        assert_eq!(ashe.distance, 3);
        assert_eq!(ashe.weighted, 3);
    }

    #[test]
    fn early_reject_ignores_prefix_relation() {
        // "mis" is a prefix of "missfortune", but eight insertions is beyond
        // threshold + PREFIX_BONUS.
        assert_eq!(score("mis", "Miss Fortune", 3), None);
    }

    #[test]
    fn score_admits_prefix_via_bonus() {
        let scored = score("kogm", "Kog'Maw", 0).expect("prefix bonus admits kogm");
        assert_eq!(scored.distance, 2);
        assert_eq!(scored.weighted, 0);
    }

    #[test]
    fn ascending_and_descending_tie_breaks_differ() {
        let ashe = Scored { name: "Ashe", distance: 3, weighted: 3 };
        let ahri = Scored { name: "Ahri", distance: 3, weighted: 3 };
        let braum = Scored { name: "Braum", distance: 2, weighted: 2 };

        let mut asc = vec![ashe.clone(), ahri.clone(), braum.clone()];
        asc.sort_by(Scored::cmp_ascending);
        let asc: Vec<_> = asc.iter().map(|s| s.name).collect();
        assert_eq!(asc, ["Braum", "Ahri", "Ashe"]);

        let mut desc = vec![ahri, braum, ashe];
        desc.sort_by(Scored::cmp_descending_name);
        let desc: Vec<_> = desc.iter().map(|s| s.name).collect();
        assert_eq!(desc, ["Braum", "Ashe", "Ahri"]);
    }
}
