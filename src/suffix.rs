//! Turns a word list into the sequence of shared-suffix lengths between neighbors.

use crate::shared_prefix_len;

/// Reverses every word and sorts the results, so that words sharing a long suffix end up
/// next to each other. Equal reversed words stay adjacent.
pub fn normalize_suffixes<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut suffixes: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        suffixes.push(word.as_ref().chars().rev().collect());
    }
    suffixes.sort();
    suffixes
}

/// Shared-prefix lengths of each adjacent pair in `suffixes`, padded with a zero on both ends
/// as if an empty string sat before the first and after the last element.
///
/// For `n >= 1` suffixes the result has `n + 1` entries; for no suffixes at all it is still
/// the two sentinels.
pub fn prefix_profile(suffixes: &[String]) -> Vec<usize> {
    let mut prefix_sizes = Vec::with_capacity(suffixes.len().max(1) + 1);
    prefix_sizes.push(0);
    for pair in suffixes.windows(2) {
        prefix_sizes.push(shared_prefix_len(&pair[0], &pair[1]));
    }
    prefix_sizes.push(0);
    prefix_sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_then_sorts() {
        let suffixes = normalize_suffixes(&["abc", "bc", "dog"]);
        assert_eq!(suffixes, vec!["cb", "cba", "god"]);
    }

    #[test]
    fn duplicates_stay_adjacent() {
        let suffixes = normalize_suffixes(&["xa", "b", "ya", "xa"]);
        assert_eq!(suffixes, vec!["ax", "ax", "ay", "b"]);
    }

    #[test]
    fn leaves_input_alone() {
        let words = vec!["one".to_string(), "two".to_string()];
        let _ = normalize_suffixes(&words);
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn profile_has_sentinels() {
        let suffixes = normalize_suffixes(&["abc", "bc"]);
        assert_eq!(prefix_profile(&suffixes), vec![0, 2, 0]);

        let suffixes = normalize_suffixes(&["a", "a", "a"]);
        assert_eq!(prefix_profile(&suffixes), vec![0, 1, 1, 0]);

        let suffixes = normalize_suffixes(&["dog", "cat"]);
        assert_eq!(prefix_profile(&suffixes), vec![0, 0, 0]);
    }

    #[test]
    fn profile_of_tiny_inputs() {
        assert_eq!(prefix_profile(&[]), vec![0, 0]);
        assert_eq!(prefix_profile(&["a".to_string()]), vec![0, 0]);
    }

    #[test]
    fn profile_stops_at_shorter_word() {
        let suffixes = vec!["ab".to_string(), "abcd".to_string(), "abce".to_string()];
        assert_eq!(prefix_profile(&suffixes), vec![0, 2, 3, 0]);
    }
}
