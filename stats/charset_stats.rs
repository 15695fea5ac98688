//! Sampler uniformity check - prints per-character frequencies for generated output.
//!
//! Usage:
//!   ./charset_stats                               # all classes, 100k samples
//!   ./charset_stats --classes numbers -s 1000000  # digits only
//!   ./charset_stats --seed 42                     # reproducible run

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use passgen::pass::stats::Histogram;
use passgen::pass::{CharClasses, CharacterClass};

#[derive(Parser, Debug)]
#[command(name = "charset_stats", about = "Character frequency report for the password sampler")]
struct Args {
    /// Comma separated classes: lower, upper, numbers, symbols
    #[arg(short, long, value_delimiter = ',', default_value = "lower,upper,numbers,symbols")]
    classes: Vec<CharacterClass>,

    /// Number of characters to draw (at least 1)
    #[arg(short, long, default_value = "100000")]
    samples: NonZeroUsize,

    /// Seed for a reproducible run (default: thread RNG)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let classes: CharClasses = args.classes.iter().copied().collect();

    let samples = args.samples.get();
    let result = match args.seed {
        Some(seed) => Histogram::sample(classes, samples, &mut StdRng::seed_from_u64(seed)),
        None => Histogram::sample(classes, samples, &mut rand::rng()),
    };
    let hist = match result {
        Ok(h) => h,
        Err(e) => {
            eprintln!("charset_stats: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let expected = hist.expected();

    let _ = writeln!(
        out,
        "samples: {}  alphabet: {}  expected/char: {:.1}",
        hist.total(),
        hist.counts().len(),
        expected
    );
    for (c, &n) in hist.counts() {
        let dev = (n as f64 - expected) / expected * 100.0;
        let _ = writeln!(out, "  {c}  {n:>10}  {dev:>+7.2}%");
    }
    let _ = writeln!(
        out,
        "max deviation: {:.2}%  chi-square: {:.2} ({} dof)",
        hist.max_relative_deviation() * 100.0,
        hist.chi_square(),
        hist.degrees_of_freedom()
    );

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_samples_rejected() {
        assert!(Args::try_parse_from(["charset_stats", "-s", "0"]).is_err());
        let args = Args::try_parse_from(["charset_stats", "-s", "5"]).unwrap();
        assert_eq!(args.samples.get(), 5);
    }
}
