//! Pairs up words that rhyme. Two words rhyme on a suffix they share; a pair claims that
//! suffix, and no suffix may be claimed by more than one pair. Given a word list, count the
//! most disjoint pairs that can be formed.
//!
//! Reversing every word turns shared suffixes into shared prefixes, and sorting the reversed
//! words makes the longest shared prefixes adjacent. [`greedy`] repeatedly claims the longest
//! adjacent prefix; [`trie`] computes the same count bottom-up over a radix trie.
//!
//! The `solve` binary reads the usual contest format (a case count, then per case a word count
//! and the words) and prints `Case #t: <pairs>` lines. `generate` writes random inputs and
//! `verify` checks the two maximizers against each other.
//!

extern crate radix_trie;
extern crate rand;
#[macro_use]
extern crate tracing;

pub mod driver;
pub mod error;
pub mod greedy;
pub mod input;
pub mod sample;
pub mod suffix;
pub mod trie;

pub use driver::{run, solve_case, write_answers, Count, Solver};
pub use error::InputError;
pub use input::{parse_cases, read_cases, TestCase};

/// Length of the run of equal leading characters of `a` and `b`.
pub fn shared_prefix_len(a: &str, b: &str) -> usize {
    let mut size = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            break;
        }
        size += 1;
    }
    size
}

#[test]
fn test_shared_prefix_len() {
    assert_eq!(shared_prefix_len("cba", "cb"), 2);
    assert_eq!(shared_prefix_len("god", "tac"), 0);
    assert_eq!(shared_prefix_len("", "abc"), 0);
    assert_eq!(shared_prefix_len("abc", "abc"), 3);
    assert_eq!(shared_prefix_len("Abc", "abc"), 0);
    assert_eq!(shared_prefix_len("éa", "éb"), 1);
}
