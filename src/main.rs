use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use dice_notation::{RollExpression, RollResult};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Rolled when no expressions are given.
const QUICK_ROLLS: [&str; 7] = ["d4", "d6", "d8", "d10", "d12", "d20", "d100"];

#[derive(Parser)]
#[command(name = "dice-notation")]
#[command(about = "Roll dice notation like `4x3d8-5 ; 2d6 & d4+1`", long_about = None)]
struct Cli {
    /// Expressions to roll, `name=expression` prints the name above the results
    expressions: Vec<String>,

    /// Read more expressions from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed the rng to get the same rolls every run
    #[arg(short, long)]
    seed: Option<u64>,

    /// How many times to roll every expression
    #[arg(short = 'n', long, default_value = "1")]
    times: u32,

    /// Print every die as it's rolled to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut entries = cli.expressions.clone();
    if let Some(path) = &cli.file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read input file {}", path.display()))?;
        entries.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    let entries = entries_or_quick_rolls(entries);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let all_rolled = roll_entries(
        &entries,
        cli.times,
        cli.verbose,
        &mut rng,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("Could not write the results")?;

    if !all_rolled {
        std::process::exit(1);
    }
    Ok(())
}

fn entries_or_quick_rolls(entries: Vec<String>) -> Vec<String> {
    if entries.is_empty() {
        return QUICK_ROLLS.iter().map(|dice| dice.to_string()).collect();
    }
    entries
}

/// Rolls every entry `times` times, results go to `out` and errors to `err`.
/// Entries that don't parse are reported and skipped, the return value tells if any were.
fn roll_entries<R: Rng>(
    entries: &[String],
    times: u32,
    verbose: bool,
    rng: &mut R,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_rolled = true;
    for entry in entries {
        let (name, notation) = split_entry(entry);

        let expressions = match dice_notation::parse(notation) {
            Ok(expressions) => expressions,
            Err(e) => {
                writeln!(err, "Invalid dice string {notation}: {e}")?;
                all_rolled = false;
                continue;
            }
        };

        for _ in 0..times {
            let prepend = match name {
                Some(name) => {
                    writeln!(out, "{name}")?;
                    " "
                }
                None => "",
            };

            for expression in &expressions {
                let rolled = expression.roll_with(rng);
                writeln!(out, "{prepend}{expression}  =>  {rolled}")?;

                if verbose {
                    trace_rolls(expression, &rolled, err)?;
                }
            }
        }
    }

    Ok(all_rolled)
}

/// Splits `name=expression`, the expression is whatever follows the last `=`.
fn split_entry(entry: &str) -> (Option<&str>, &str) {
    match entry.rsplit_once('=') {
        Some((name, notation)) => (Some(name.trim()), notation),
        None => (None, entry),
    }
}

fn trace_rolls(
    expression: &RollExpression,
    rolled: &RollResult,
    err: &mut impl Write,
) -> io::Result<()> {
    let mut faces = rolled.rolls().iter();
    for term in expression.terms() {
        for face in faces.by_ref().take(term.count() as usize) {
            writeln!(err, "{term}: rolled a {face}")?;
        }
    }
    Ok(())
}
