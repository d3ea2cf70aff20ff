//! Reads puzzle input on stdin (or from a file) and writes `Case #t: <answer>` lines to stdout,
//! where the answer is the most disjoint rhyming pairs in that case's words.
//!

extern crate anyhow;
extern crate clap;
extern crate rhymepairs;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rhymepairs::driver::{init_logging, is_broken_pipe};
use rhymepairs::{Count, Solver};

#[derive(Parser)]
#[command(name = "solve")]
#[command(about = "Count the most disjoint rhyming pairs for each test case")]
struct Cli {
    /// Input file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Algorithm used to count pairs
    #[arg(long, value_enum, default_value_t = Solver::Greedy)]
    solver: Solver,

    /// Report pairs, or the number of paired words
    #[arg(long, value_enum, default_value_t = Count::Pairs)]
    count: Count,
}

fn main_result() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = ::std::io::stdout();
    let output = ::std::io::BufWriter::new(stdout.lock());

    match cli.input {
        Some(ref path) if path.as_os_str() != "-" => {
            let file = ::std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            rhymepairs::run(file, output, cli.solver, cli.count)
        }
        _ => {
            let stdin = ::std::io::stdin();
            rhymepairs::run(stdin.lock(), output, cli.solver, cli.count)
        }
    }
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
