//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{BenchmarkReport, ScoreResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  [{}]",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback),
            step.selection.as_str().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Score:      {score:.4}");
            }
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
    println!("\n{}", result.summary);
}

/// Print how a word scores as an opening guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER SCORE:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(result.score, result.best_score, 30);

    println!("\n📊 Against {} possible answers:", result.total);
    println!(
        "   Score:       [{}] {}",
        bar.green(),
        format!("{:.4}", result.score).bright_yellow()
    );
    println!("   Positional:  {:.4}", result.positional);
    println!("   Presence:    {:.4}", result.presence);
    println!("   Rank:        {} of {}", result.rank, result.total);
    println!(
        "   Best:        {} ({:.4})",
        result.best_word.to_uppercase(),
        result.best_score
    );
}

/// Print the report of a benchmark run
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total);
    println!(
        "   Passed:           {} {}",
        report.passed,
        format!("({:.1}%)", report.pass_rate() * 100.0).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", report.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_attempts_used()).yellow()
    );
    println!("   Tie-breaks:       {}", report.tie_broken.len());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = report.histogram.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &report.histogram {
        let pct = count as f64 / report.passed as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !report.failed.is_empty() {
        println!("\n😰 {}", "Failed:".red().bold());
        for word in &report.failed {
            println!("   {}", word.to_uppercase().red());
        }
    }
}
