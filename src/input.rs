//! Reads puzzle input: a case count `T`, then for each case a word count `N` followed by `N`
//! words. Everything is whitespace separated; line breaks carry no meaning.

use std::io::Read;
use std::str::SplitWhitespace;

use crate::error::InputError;

/// One independent list of words to pair up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCase {
    pub words: Vec<String>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, expected: impl FnOnce() -> String) -> Result<&'a str, InputError> {
        match self.inner.next() {
            Some(token) => Ok(token),
            None => Err(InputError::MissingToken { expected: expected() }),
        }
    }

    fn count(&mut self, expected: impl Fn() -> String) -> Result<usize, InputError> {
        let token = self.next(&expected)?;
        token.parse().map_err(|_| InputError::InvalidCount {
            token: token.to_string(),
            expected: expected(),
        })
    }
}

pub fn parse_cases(text: &str) -> Result<Vec<TestCase>, InputError> {
    let mut tokens = Tokens { inner: text.split_whitespace() };
    let case_count = tokens.count(|| "number of test cases".to_string())?;

    let mut cases = Vec::new();
    for t in 1..=case_count {
        let word_count = tokens.count(|| format!("word count for case #{}", t))?;
        let mut words = Vec::new();
        for i in 1..=word_count {
            let word = tokens.next(|| format!("word {} of {} in case #{}", i, word_count, t))?;
            words.push(word.to_string());
        }
        cases.push(TestCase { words });
    }

    let leftover = tokens.inner.count();
    if leftover > 0 {
        warn!(leftover, "ignoring tokens after the last test case");
    }
    Ok(cases)
}

pub fn read_cases<R: Read>(mut input: R) -> Result<Vec<TestCase>, InputError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_cases(&text)
}
