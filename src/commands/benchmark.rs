//! Benchmark command
//!
//! Solves many targets in parallel and reports how the solver fared.

use crate::core::Word;
use crate::oracle::Game;
use crate::solver::{MAX_ATTEMPTS, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub max_attempts: usize,
    /// Solve a random sample of this many targets instead of all of them
    pub sample: Option<usize>,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            sample: None,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Result from solving a single target
#[derive(Debug, Clone)]
pub struct WordResult {
    pub target: String,
    pub guesses: Vec<String>,
    /// Solved, with the final guess equal to the target
    pub passed: bool,
    pub tie_broken: bool,
    pub error: Option<String>,
}

/// Aggregate statistics of a benchmark run
#[derive(Debug)]
pub struct BenchmarkReport {
    pub total: usize,
    pub passed: usize,
    /// Targets not solved, sorted
    pub failed: Vec<String>,
    /// Guesses needed, over passed targets
    pub histogram: BTreeMap<usize, usize>,
    pub average_attempts: f64,
    /// Targets whose solve used the overlap tie-break, sorted
    pub tie_broken: Vec<String>,
    pub duration: Duration,
    pub results: Vec<WordResult>,
}

impl BenchmarkReport {
    /// Fraction of targets passed, in `[0, 1]`
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }

    #[must_use]
    pub fn max_attempts_used(&self) -> usize {
        self.histogram.keys().next_back().copied().unwrap_or(0)
    }
}

/// Pick the targets to solve
///
/// Uses `targets` when given, otherwise the dictionary itself. With `config.sample`, a
/// reproducible random subset of that size is drawn using `config.seed`.
#[must_use]
pub fn select_targets<'a>(
    words: &'a [Word],
    targets: Option<&'a [Word]>,
    config: &BenchmarkConfig,
) -> Vec<&'a Word> {
    let pool = targets.unwrap_or(words);
    match config.sample {
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            pool.choose_multiple(&mut rng, count).collect()
        }
        None => pool.iter().collect(),
    }
}

/// Solve every target with a fresh game over `words`
pub fn run_benchmark(
    words: &[Word],
    targets: &[&Word],
    config: &BenchmarkConfig,
) -> BenchmarkReport {
    let start = Instant::now();
    let solver = Solver::new(words);

    let progress = if config.show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let mut results: Vec<WordResult> = targets
        .par_iter()
        .map(|&target| {
            let result = solve_target(&solver, words, target, config.max_attempts);
            progress.inc(1);
            result
        })
        .collect();
    progress.finish_with_message("done");

    results.sort_by(|a, b| a.target.cmp(&b.target));

    let mut histogram = BTreeMap::new();
    let mut failed = Vec::new();
    let mut tie_broken = Vec::new();
    for result in &results {
        if result.passed {
            *histogram.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed.push(result.target.clone());
        }
        if result.tie_broken {
            tie_broken.push(result.target.clone());
        }
    }

    let passed = results.len() - failed.len();
    let total_attempts: usize = histogram.iter().map(|(attempts, count)| attempts * count).sum();
    let average_attempts = if passed > 0 {
        total_attempts as f64 / passed as f64
    } else {
        0.0
    };

    BenchmarkReport {
        total: results.len(),
        passed,
        failed,
        histogram,
        average_attempts,
        tie_broken,
        duration: start.elapsed(),
        results,
    }
}

fn solve_target(
    solver: &Solver<'_>,
    words: &[Word],
    target: &Word,
    max_attempts: usize,
) -> WordResult {
    let failure = |error: String| {
        warn!("'{target}' failed: {error}");
        WordResult {
            target: target.text().to_string(),
            guesses: Vec::new(),
            passed: false,
            tie_broken: false,
            error: Some(error),
        }
    };

    let mut game = match Game::new(target, words) {
        Ok(game) => game.with_max_attempts(max_attempts),
        Err(err) => return failure(err.to_string()),
    };

    match solver.solve(&mut game) {
        Ok(outcome) => WordResult {
            target: target.text().to_string(),
            guesses: outcome
                .rounds
                .iter()
                .map(|round| round.guess.text().to_string())
                .collect(),
            passed: outcome.solved && outcome.final_guess == Some(target),
            tie_broken: outcome.used_tie_break(),
            error: None,
        },
        Err(err) => failure(err.to_string()),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        Ok(style) => progress.set_style(style.progress_chars("█▓▒░")),
        Err(err) => warn!("progress bar style rejected: {err}"),
    }
    progress
}
