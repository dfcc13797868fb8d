use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_search::{input, Outcome, WordCount, WordSearch, WordSearchConfig};

#[derive(Parser, Debug)]
#[command(about = "Generate a word search from a list of words, one per line")]
struct Args {
    /// Word list file (or `-` for stdin)
    words: PathBuf,

    /// Side length of the grid
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,

    /// Number of words to use, or "all"
    #[arg(short, long, default_value = "all")]
    count: WordCount,

    /// Seed to regenerate a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Also print where each word is hidden
    #[arg(long)]
    answers: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let words = input::load_words(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;

    let size = usize::from(args.size);
    let requested = args.count.resolve(words.len());

    println!(
        "Generating {size} x {size} word search using {requested} out of {} words...",
        words.len()
    );
    println!();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding puzzle");

    let config = WordSearchConfig {
        count: args.count,
        ..WordSearchConfig::new(size, &words)
    };
    let word_search = WordSearch::with_rng(&config, &mut StdRng::seed_from_u64(seed))
        .context("word search could not be generated; try again with a new list")?;

    if let Outcome::Partial { placed, .. } = word_search.outcome() {
        println!("Due to space constraints, only {placed} words have been included in this puzzle.");
        println!();
    }

    print!("{word_search}");

    if args.answers {
        println!();
        println!("Answers:");
        for (word, placement) in word_search.placements() {
            println!(
                "{word}: column {}, row {}, {}",
                placement.begin.0 + 1,
                placement.begin.1 + 1,
                placement.direction
            );
        }
    }

    Ok(())
}
