//! Random word lists, for generating inputs and for testing the maximizers against each other.
//! Small alphabets and short words give lots of shared suffixes and ties.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::input::TestCase;

#[derive(Debug, Clone)]
pub struct WordSampler {
    alphabet: Vec<char>,
    max_len: usize,
}

impl WordSampler {
    /// Returns `None` for an empty alphabet or a zero `max_len`, which cannot produce words.
    pub fn new(alphabet: &str, max_len: usize) -> Option<WordSampler> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() || max_len == 0 {
            return None;
        }
        Some(WordSampler { alphabet, max_len })
    }

    /// A word of `1..=max_len` letters.
    pub fn word<R: Rng>(&self, rng: &mut R) -> String {
        let len = rng.gen_range(1..=self.max_len);
        let mut word = String::with_capacity(len);
        for _ in 0..len {
            if let Some(c) = self.alphabet.choose(rng) {
                word.push(*c);
            }
        }
        word
    }

    pub fn words<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.word(rng)).collect()
    }

    /// A case of `0..=max_words` words.
    pub fn case<R: Rng>(&self, rng: &mut R, max_words: usize) -> TestCase {
        let count = rng.gen_range(0..=max_words);
        TestCase { words: self.words(rng, count) }
    }
}

/// Writes `cases` in the puzzle input format, one case's words per line.
pub fn format_cases(cases: &[TestCase]) -> String {
    let mut text = format!("{}\n", cases.len());
    for case in cases {
        text.push_str(&format!("{}\n{}\n", case.words.len(), case.words.join(" ")));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_cases;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_useless_settings() {
        assert!(WordSampler::new("", 3).is_none());
        assert!(WordSampler::new("ab", 0).is_none());
    }

    #[test]
    fn words_use_alphabet() {
        let sampler = WordSampler::new("xy", 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for word in sampler.words(&mut rng, 200) {
            let len = word.chars().count();
            assert!((1..=4).contains(&len), "{:?}", word);
            assert!(word.chars().all(|c| c == 'x' || c == 'y'), "{:?}", word);
        }
    }

    #[test]
    fn same_seed_same_words() {
        let sampler = WordSampler::new("abc", 5).unwrap();
        let a = sampler.words(&mut StdRng::seed_from_u64(42), 20);
        let b = sampler.words(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn formatted_cases_parse_back() {
        let sampler = WordSampler::new("ab", 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let cases: Vec<TestCase> = (0..5).map(|_| sampler.case(&mut rng, 6)).collect();
        assert_eq!(parse_cases(&format_cases(&cases)).unwrap(), cases);
    }
}
