//! Print the best opening for an input document, see [scrabble_opening::io] for the format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scrabble_opening::io::Input;
use scrabble_opening::opening::SearchConfig;

#[derive(Parser, Debug)]
#[command(name = "scrabble-opening")]
#[command(version, about = "Find the highest scoring opening for a hand of tiles", long_about = None)]
struct Args {
    /// The input document.
    #[arg(default_value = "demos/EXAMPLE_INPUT.json")]
    input: PathBuf,

    /// Number of search threads, defaults to the number of cpus.
    #[arg(short, long)]
    threads: Option<usize>,

    /// Also print the chosen word, placement and score.
    #[arg(short, long)]
    summary: bool,

    /// Log the search stages.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = SearchConfig::default();
    if let Some(threads) = args.threads {
        config.threads = threads;
    }

    let input = Input::load(&args.input).with_context(|| format!("loading {}", args.input.display()))?;
    let search = input.into_opening();

    info!("searching with {} thread(s)", config.threads);
    let opening = search.find_with(&config).context("searching for the best opening")?;
    info!("found {}", opening);

    if args.summary {
        println!("{}", opening);
    }
    println!("{}", opening.board);

    Ok(())
}
