//! Writes a random puzzle input to stdout. Defaults favor short words over a tiny alphabet,
//! which makes for long runs of tied suffixes.
//!

extern crate anyhow;
extern crate clap;
extern crate rand;
extern crate rhymepairs;

use std::io::Write;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rhymepairs::driver::{init_logging, is_broken_pipe};
use rhymepairs::sample::{format_cases, WordSampler};

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate random rhyme-pairing test cases")]
struct Cli {
    /// Number of test cases
    #[arg(long, default_value_t = 10)]
    cases: usize,

    /// Most words in one case
    #[arg(long, default_value_t = 20)]
    words: usize,

    /// Letters to build words from
    #[arg(long, default_value = "ab")]
    alphabet: String,

    /// Longest word
    #[arg(long, default_value_t = 6)]
    max_len: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main_result() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let sampler = match WordSampler::new(&cli.alphabet, cli.max_len) {
        Some(sampler) => sampler,
        None => anyhow::bail!("need a non-empty alphabet and a positive --max-len"),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cases: Vec<_> = (0..cli.cases).map(|_| sampler.case(&mut rng, cli.words)).collect();
    tracing::debug!(cases = cases.len(), seed = ?cli.seed, "generated");

    let stdout = ::std::io::stdout();
    let mut output = stdout.lock();
    output.write_all(format_cases(&cases).as_bytes())?;
    output.flush()?;
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
