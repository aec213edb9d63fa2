//! Wordle Split - CLI
//!
//! Letter-frequency Wordle solver: assist a real game, play one, or evaluate the solver.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_split::{
    commands::{
        BenchmarkConfig, SolveConfig, pick_target, run_assist, run_benchmark, run_play,
        score_word, select_targets, solve_word,
    },
    core::Word,
    output::{print_benchmark_report, print_score_result, print_solve_result},
    solver::MAX_ATTEMPTS,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_split",
    about = "Wordle solver ranking guesses by letter-frequency splits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a game played elsewhere (default)
    Assist,

    /// Play against a random hidden word
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a word scores as an opening guess
    Score {
        /// Word to score
        word: String,
    },

    /// Solve many targets and report statistics
    Benchmark {
        /// Solve a random sample of this many targets
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(long, default_value = "42")]
        seed: u64,

        /// File of targets to solve instead of the whole wordlist
        #[arg(short, long)]
        targets: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("Wordlist '{wordlist}' contains no five-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_wordlist(&cli.wordlist)?;

    // Default to Assist mode if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => {
            run_assist(&words, cli.max_attempts, io::stdin().lock(), io::stdout())?;
        }
        Commands::Play => {
            let target =
                pick_target(&words, &mut rand::rng()).context("Wordlist is empty")?;
            run_play(
                &words,
                target,
                cli.max_attempts,
                io::stdin().lock(),
                io::stdout(),
            )?;
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig {
                max_attempts: cli.max_attempts,
                ..SolveConfig::new(word)
            };
            let result = solve_word(&config, &words)?;
            print_solve_result(&result, verbose);
        }
        Commands::Score { word } => {
            let result = score_word(&word, &words)?;
            print_score_result(&result);
        }
        Commands::Benchmark {
            count,
            seed,
            targets,
            no_progress,
        } => {
            let target_words = targets
                .map(|path| {
                    load_from_file(&path)
                        .with_context(|| format!("Failed to read targets {}", path.display()))
                })
                .transpose()?;

            let config = BenchmarkConfig {
                max_attempts: cli.max_attempts,
                sample: count,
                seed,
                show_progress: !no_progress,
            };
            let selected = select_targets(&words, target_words.as_deref(), &config);

            println!("Solving {} targets...", selected.len());
            let report = run_benchmark(&words, &selected, &config);
            print_benchmark_report(&report);
        }
    }

    Ok(())
}
