// ==============================================================================
// Name Resolution: Free Text to Canonical Identifier
// ==============================================================================
//
// Maps whatever the user typed ("mundo", "kaisa", "asheee") to the identifier
// of the single best dictionary entry. Every entry is scored with the ranking
// policy; the lowest weighted distance wins, ties going to the alphabetically
// first display name so that resolution is deterministic.

use crate::model::NameDictionary;
use crate::rank::{Scored, score_within};
use crate::suggest::normalize;

/// Resolve `input` to the identifier of its best-matching dictionary entry.
///
/// Returns `None` when the normalized input is empty or when no entry's
/// weighted distance is within `threshold`.
pub fn resolve<'a>(input: &str, dictionary: &'a NameDictionary, threshold: usize) -> Option<&'a str> {
    let query = normalize(input);
    if query.is_empty() {
        return None;
    }

    dictionary
        .iter()
        .filter_map(|(name, id)| {
            score_within(&query, &normalize(name), name, threshold).map(|scored| (scored, id))
        })
        .min_by(|(a, _), (b, _)| Scored::cmp_ascending(a, b))
        .map(|(best, id)| {
            tracing::trace!(
                input,
                name = best.name,
                distance = best.distance,
                weighted = best.weighted,
                "resolved"
            );
            id.as_str()
        })
}
