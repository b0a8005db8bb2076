//! Scrabble Rack Solver - CLI
//!
//! Lists every playable word for a rack, highest score first.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrabbler::{
    commands::{BenchmarkConfig, SolveConfig, draw_racks, run_benchmark, score_breakdown, solve_rack},
    core::LetterScores,
    output::{print_benchmark_result, print_rack_result, print_score_breakdown},
    solver::{Dictionary, Solver},
    wordlists::{BUILTIN, loader},
};
use std::time::Duration;
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "scrabbler",
    about = "A scrabble solver: every word a rack can make, ranked by score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The scrabble characters to use ('_' is a blank tile)
    characters: Option<String>,

    /// Word list file, one word per line, or 'builtin' for the embedded list
    #[arg(
        short,
        long = "dict",
        global = true,
        env = "SCRABBLER_DICT",
        default_value = "sowpods.txt",
        value_name = "WORDLIST"
    )]
    dict: String,

    /// Only list words with at least this many letters
    #[arg(short = 'm', long, default_value = "1")]
    min_length: usize,

    /// Print at most this many words
    #[arg(short, long)]
    limit: Option<usize>,

    /// Stop searching after this many seconds and print what was found
    #[arg(short, long, value_name = "SECONDS")]
    time_limit: Option<f64>,

    /// Show debug logging and solve statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the letter-by-letter score of a word
    Score {
        /// Word to score
        word: String,
    },

    /// Solve random racks drawn from a standard tile bag
    Benchmark {
        /// Number of racks to solve
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Tiles per rack
        #[arg(short, long, default_value = "7")]
        rack_size: usize,

        /// Leave the two blanks out of the bag
        #[arg(long)]
        no_blanks: bool,

        /// Seed for reproducible racks
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the --dict flag
///
/// - "builtin": the embedded starter list
/// - "<path>": a word list file
fn load_dictionary(dict: &str) -> Result<Dictionary> {
    match dict {
        "builtin" => Ok(loader::dictionary_from_slice(BUILTIN)),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to open word list: {path}")),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scores = LetterScores::STANDARD;

    match cli.command {
        Some(Commands::Score { word }) => run_score_command(&word, &scores),
        Some(Commands::Benchmark {
            count,
            rack_size,
            no_blanks,
            seed,
        }) => {
            let dictionary = load_dictionary(&cli.dict)?;
            let config = BenchmarkConfig {
                count,
                rack_size,
                no_blanks,
                seed,
            };
            run_benchmark_command(&config, &dictionary, &scores);
            Ok(())
        }
        None => {
            let characters = cli
                .characters
                .context("No rack given; pass the scrabble characters to use (see --help)")?;
            let dictionary = load_dictionary(&cli.dict)?;
            info!(words = dictionary.len(), dict = %cli.dict, "dictionary ready");

            let time_limit = cli
                .time_limit
                .map(Duration::try_from_secs_f64)
                .transpose()
                .context("Invalid --time-limit")?;
            let config = SolveConfig {
                rack: characters,
                min_length: cli.min_length,
                limit: cli.limit,
                time_limit,
            };
            run_solve_command(config, &dictionary, &scores, cli.verbose)
        }
    }
}

fn run_solve_command(
    config: SolveConfig,
    dictionary: &Dictionary,
    scores: &LetterScores,
    verbose: bool,
) -> Result<()> {
    let solver = Solver::new(dictionary, scores);
    let result = solve_rack(config, &solver)?;
    print_rack_result(&result, verbose);
    Ok(())
}

fn run_score_command(word: &str, scores: &LetterScores) -> Result<()> {
    let result = score_breakdown(word, scores)?;
    print_score_breakdown(&result);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, dictionary: &Dictionary, scores: &LetterScores) {
    if let Some(seed) = config.seed {
        println!(
            "Running benchmark on {} random racks of {} tiles (seed {seed})...",
            config.count, config.rack_size
        );
    } else {
        println!(
            "Running benchmark on {} random racks of {} tiles...",
            config.count, config.rack_size
        );
    }

    let solver = Solver::new(dictionary, scores);
    let racks = draw_racks(config);
    let result = run_benchmark(&solver, &racks);
    print_benchmark_result(&result);
}
