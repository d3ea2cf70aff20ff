//! Solves every case of a puzzle input with both maximizers and reports any case on which
//! they disagree. Exits non-zero if there is one.
//!

extern crate anyhow;
extern crate clap;
extern crate rhymepairs;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rhymepairs::driver::{init_logging, is_broken_pipe};
use rhymepairs::{read_cases, solve_case, Solver, TestCase};

#[derive(Parser)]
#[command(name = "verify")]
#[command(about = "Check the greedy and trie maximizers against each other")]
struct Cli {
    /// Input file; stdin when omitted or `-`
    input: Option<PathBuf>,
}

fn verify_cases(cases: &[TestCase]) -> usize {
    let mut mismatches = 0;
    for (idx, case) in cases.iter().enumerate() {
        let greedy = solve_case(case, Solver::Greedy);
        let trie = solve_case(case, Solver::Trie);
        if greedy != trie {
            println!("Case #{}: greedy {} != trie {} for {:?}", idx + 1, greedy, trie, case.words);
            mismatches += 1;
        }
    }
    mismatches
}

fn main_result() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cases = match cli.input {
        Some(ref path) if path.as_os_str() != "-" => {
            let file = ::std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_cases(file)
        }
        _ => read_cases(::std::io::stdin().lock()),
    }
    .context("malformed puzzle input")?;

    let mismatches = verify_cases(&cases);
    if mismatches > 0 {
        anyhow::bail!("{} of {} cases disagree", mismatches, cases.len());
    }
    println!("all {} cases agree", cases.len());
    Ok(())
}

pub fn main() {
    init_logging();
    match main_result() {
        Ok(()) => {}
        Err(ref e) if is_broken_pipe(e) => {}
        Err(e) => {
            eprintln!("error: {:#}", e);
            ::std::process::exit(1);
        }
    }
}
