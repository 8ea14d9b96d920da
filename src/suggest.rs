// ==============================================================================
// String Similarity Utilities
// ==============================================================================
//
// Canonicalization and edit distance, shared by the single-best resolver and
// the fuzzy stage of autocomplete. Both operate on `char`s so that the unit
// counted by `levenshtein` is the same unit `normalize` preserves.

/// Canonicalize text for comparison.
///
/// Lower-cases the input and keeps only Unicode letters and digits, in order.
/// Case, punctuation, and whitespace therefore never affect matching:
/// `"Kai'Sa"`, `"kai sa"` and `"KAISA"` all normalize to `"kaisa"`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic() || c.is_numeric())
        .collect()
}

/// Compute the Levenshtein edit distance between two strings.
///
/// Insertion, deletion, and substitution each cost 1. Distances are counted
/// in `char`s, not bytes. Uses the standard dynamic programming algorithm
/// with a two-row buffer, which is plenty for display names a few dozen
/// characters long.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let b_len = b.len();
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    // When `a` is empty the loop never runs and `prev_row[b_len] == b_len`.
    prev_row[b_len]
}
