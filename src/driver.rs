use std::io::{Read, Write};

use anyhow::Context;
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::input::{read_cases, TestCase};
use crate::{greedy, trie};

/// Sends log output to stderr, filtered by `RUST_LOG` (warnings and errors by default).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// True when `e` came from writing to a reader that went away, as in `solve | head`.
pub fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .map_or(false, |io| io.kind() == std::io::ErrorKind::BrokenPipe)
    })
}

/// Which maximizer computes the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Solver {
    /// claim the longest adjacent shared suffix, repeatedly
    #[default]
    Greedy,
    /// pair bottom-up over a radix trie of reversed words
    Trie,
}

/// What each `Case #t:` line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Count {
    /// disjoint rhyming pairs
    #[default]
    Pairs,
    /// words that end up in a pair
    Words,
}

impl Count {
    pub fn of(self, pairs: usize) -> usize {
        match self {
            Count::Pairs => pairs,
            Count::Words => 2 * pairs,
        }
    }
}

/// Number of pairs for one case.
pub fn solve_case(case: &TestCase, solver: Solver) -> usize {
    match solver {
        Solver::Greedy => greedy::maximize_pairs(&case.words),
        Solver::Trie => trie::maximize_pairs(&case.words),
    }
}

/// Writes one `Case #t: <answer>` line per case, numbering from 1.
pub fn write_answers<W: Write>(
    cases: &[TestCase],
    solver: Solver,
    count: Count,
    mut output: W,
) -> anyhow::Result<()> {
    for (idx, case) in cases.iter().enumerate() {
        let t = idx + 1;
        let pairs = solve_case(case, solver);
        debug!(case = t, words = case.words.len(), pairs, "solved");
        writeln!(output, "Case #{}: {}", t, count.of(pairs))?;
    }
    output.flush()?;
    Ok(())
}

/// Reads every case from `input`, then solves and reports them in order.
pub fn run<R: Read, W: Write>(
    input: R,
    output: W,
    solver: Solver,
    count: Count,
) -> anyhow::Result<()> {
    let cases = read_cases(input).context("malformed puzzle input")?;
    debug!(cases = cases.len(), ?solver, "read input");
    write_answers(&cases, solver, count, output)
}
