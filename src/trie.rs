//! Counts rhyming pairs bottom-up over a radix trie of reversed words.
//!
//! Every character depth on the path to a trie node is a distinct suffix, and each suffix can
//! host at most one pair. Pairing deep first never hurts: a pair left unformed at some depth
//! can only be formed higher up, where suffixes are scarcer.

use radix_trie::{Trie, TrieCommon, TrieKey};

/// A trie key holding a reversed word one `char` at a time. Each char is encoded as four
/// big-endian bytes, so a trie branch point always falls inside a single character's encoding
/// and the character depth of a node is its nibble depth divided by [`NIBBLES_PER_CHAR`].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SuffixKey(Vec<char>);

const NIBBLES_PER_CHAR: usize = 8;

impl SuffixKey {
    pub fn from_word(word: &str) -> SuffixKey {
        SuffixKey(word.chars().rev().collect())
    }
}

impl TrieKey for SuffixKey {
    fn encode_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.0.len() * 4);
        for c in &self.0 {
            bytes.extend_from_slice(&(*c as u32).to_be_bytes());
        }
        bytes
    }
}

/// Reversed words with their multiplicities.
pub struct SuffixTrie {
    trie: Trie<SuffixKey, usize>,
}

impl SuffixTrie {
    pub fn new<S: AsRef<str>>(words: &[S]) -> SuffixTrie {
        let mut trie: Trie<SuffixKey, usize> = Trie::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            let key = SuffixKey::from_word(word);
            let count = trie.get(&key).cloned().unwrap_or(0);
            trie.insert(key, count + 1);
        }
        SuffixTrie { trie }
    }

    /// Number of distinct reversed words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn max_pairs(&self) -> usize {
        let (pairs, _) = claim_subtree(&self.trie, 0);
        pairs
    }
}

/// Returns `(pairs, unpaired)` for the subtree at `node`, whose parent sits `parent_nibbles`
/// deep. The edge into `node` covers the character depths between its parent and itself.
fn claim_subtree<'a, T>(node: T, parent_nibbles: usize) -> (usize, usize)
where
    T: TrieCommon<'a, SuffixKey, usize> + Copy,
{
    let nibbles = parent_nibbles + node.prefix().len();
    let mut pairs = 0;
    let mut unpaired = node.value().cloned().unwrap_or(0);
    for child in node.children() {
        let (child_pairs, child_unpaired) = claim_subtree(&child, nibbles);
        pairs += child_pairs;
        unpaired += child_unpaired;
    }

    let depths = nibbles / NIBBLES_PER_CHAR - parent_nibbles / NIBBLES_PER_CHAR;
    let claimed = ::std::cmp::min(depths, unpaired / 2);
    (pairs + claimed, unpaired - 2 * claimed)
}

/// Most disjoint rhyming pairs that can be formed from `words`.
pub fn maximize_pairs<S: AsRef<str>>(words: &[S]) -> usize {
    SuffixTrie::new(words).max_pairs()
}
