//! Counts rhyming pairs by repeatedly claiming the longest shared suffix still available.
//!
//! The state is the prefix-size sequence built by [`prefix_profile`]: entry `i` is how many
//! trailing characters the `i-1`th and `i`th word (in reversed-sorted order) have in common,
//! and the first and last entries are zero sentinels. Each claim consumes one pair and removes
//! two entries, so the sequence always shrinks towards the lone trailing sentinel.
//!
//! When a pair is claimed from a plateau of equal maximal entries, every entry of the plateau
//! but the last gives up one character, since the longest suffix is now taken. The entry to the
//! right of the plateau is then bounded by its left neighbor: if A and B share `k` characters
//! and B and C share `m`, A and C share at least `min(k, m)`.

use crate::suffix::{normalize_suffixes, prefix_profile};

/// Position of the first maximal entry.
pub fn leftmost_max(prefix_sizes: &[usize]) -> usize {
    let mut best = 0;
    for idx in 1..prefix_sizes.len() {
        if prefix_sizes[idx] > prefix_sizes[best] {
            best = idx;
        }
    }
    best
}

/// Walks right from `start` across the run of entries equal to it, taking one character from
/// each entry that is followed by an equal one. Returns the position of the last entry of the
/// run, which is left as it was.
fn claim_plateau(prefix_sizes: &mut [usize], start: usize) -> usize {
    let mut pos = start;
    while prefix_sizes[pos + 1] == prefix_sizes[pos] {
        prefix_sizes[pos] -= 1;
        pos += 1;
    }
    pos
}

/// Claims one pair from the longest shared suffix. Returns `false` without touching the
/// sequence once no entry but the sentinels is positive.
pub fn claim_once(prefix_sizes: &mut Vec<usize>) -> bool {
    debug_assert!(prefix_sizes.first() == Some(&0), "leading sentinel lost: {:?}", prefix_sizes);

    let start = leftmost_max(prefix_sizes);
    if start == 0 {
        return false;
    }

    // The trailing sentinel is zero, so a positive plateau always has a right neighbor.
    let end = claim_plateau(prefix_sizes, start);
    let bound = ::std::cmp::min(prefix_sizes[end - 1], prefix_sizes[end + 1]);
    trace!(start, end, longest = prefix_sizes[end], bound, "claimed pair");
    prefix_sizes[end + 1] = bound;
    prefix_sizes.drain(end - 1..=end);
    true
}

/// Claims pairs until nothing positive remains. Returns the number of pairs claimed.
pub fn claim_pairs(prefix_sizes: &mut Vec<usize>) -> usize {
    let mut pairs = 0;
    while claim_once(prefix_sizes) {
        pairs += 1;
    }
    pairs
}

/// Most disjoint rhyming pairs that can be formed from `words`.
pub fn maximize_pairs<S: AsRef<str>>(words: &[S]) -> usize {
    let suffixes = normalize_suffixes(words);
    let mut prefix_sizes = prefix_profile(&suffixes);
    let initial_len = prefix_sizes.len();
    let pairs = claim_pairs(&mut prefix_sizes);

    // Every claim removed exactly two entries.
    debug_assert_eq!(initial_len - prefix_sizes.len(), 2 * pairs);
    debug_assert!(!prefix_sizes.is_empty());
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftmost_of_ties() {
        assert_eq!(leftmost_max(&[0, 1, 0, 1, 0]), 1);
        assert_eq!(leftmost_max(&[0, 1, 3, 3, 0]), 2);
        assert_eq!(leftmost_max(&[0, 0, 0]), 0);
    }

    #[test]
    fn single_claim() {
        let mut prefix_sizes = vec![0, 2, 0];
        assert!(claim_once(&mut prefix_sizes));
        assert_eq!(prefix_sizes, vec![0]);
        assert!(!claim_once(&mut prefix_sizes));
    }

    #[test]
    fn plateau_claims_once_per_suffix() {
        // Four copies of one single-letter word: only the suffix "a" exists.
        let mut prefix_sizes = vec![0, 1, 1, 1, 0];
        assert!(claim_once(&mut prefix_sizes));
        assert_eq!(prefix_sizes, vec![0, 0, 0]);
        assert!(!claim_once(&mut prefix_sizes));
    }

    #[test]
    fn plateau_leaves_shorter_suffix() {
        // Four copies of "ab": one pair on "ab", one on "b".
        let mut prefix_sizes = vec![0, 2, 2, 2, 0];
        assert!(claim_once(&mut prefix_sizes));
        assert_eq!(prefix_sizes, vec![0, 1, 0]);
        assert_eq!(claim_pairs(&mut prefix_sizes), 1);
        assert_eq!(prefix_sizes, vec![0]);
    }

    #[test]
    fn bound_carries_to_right_neighbor() {
        let mut prefix_sizes = vec![0, 2, 2, 1, 0];
        assert!(claim_once(&mut prefix_sizes));
        assert_eq!(prefix_sizes, vec![0, 1, 0]);

        let mut prefix_sizes = vec![0, 1, 3, 2, 0];
        assert!(claim_once(&mut prefix_sizes));
        assert_eq!(prefix_sizes, vec![0, 1, 0]);
    }

    #[test]
    fn all_zero_profile_terminates() {
        let mut prefix_sizes = vec![0, 0, 0, 0];
        assert_eq!(claim_pairs(&mut prefix_sizes), 0);
        assert_eq!(prefix_sizes, vec![0, 0, 0, 0]);
    }

    #[test]
    fn scenarios() {
        assert_eq!(maximize_pairs(&["abc", "bc"]), 1);
        assert_eq!(maximize_pairs(&["a", "a", "a"]), 1);
        assert_eq!(maximize_pairs(&["dog", "cat"]), 0);
        assert_eq!(maximize_pairs::<&str>(&[]), 0);
        assert_eq!(maximize_pairs(&["word"]), 0);
        assert_eq!(maximize_pairs(&["a", "a"]), 1);
        assert_eq!(maximize_pairs(&["a", "a", "a", "a"]), 1);
    }

    #[test]
    fn contest_sample() {
        assert_eq!(maximize_pairs(&["TARPOL", "PROL"]), 1);
        assert_eq!(maximize_pairs(&["TARPOR", "PROL", "TARPRO"]), 0);
        assert_eq!(
            maximize_pairs(&["CODEJAM", "JAM", "HAM", "NALAM", "HUM", "NOLOM"]),
            3
        );
        assert_eq!(maximize_pairs(&["PI", "HI", "WI", "FI"]), 1);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(maximize_pairs(&["xA", "ya"]), 0);
    }
}
