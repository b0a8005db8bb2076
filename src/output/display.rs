//! Display functions for command results

use super::formatters::{create_progress_bar, format_entry, tile_row};
use crate::commands::{BenchmarkResult, RackResult, ScoreBreakdown};
use crate::core::WILDCARD;
use colored::Colorize;

/// Print the words found for a rack
///
/// The count line and the `<score> <word>` lines go to stdout uncolored so output can be piped.
pub fn print_rack_result(result: &RackResult, verbose: bool) {
    println!("Got number of words: {}", result.total_found);
    for entry in &result.words {
        println!("{}", format_entry(entry));
    }

    if result.words.len() < result.total_found {
        eprintln!(
            "{}",
            format!(
                "... {} more not shown",
                result.total_found - result.words.len()
            )
            .bright_black()
        );
    }

    if !result.complete {
        eprintln!(
            "{}",
            "⚠ Time limit reached: results are partial".yellow().bold()
        );
    }

    if verbose {
        eprintln!(
            "{} {} | {} candidates checked in {:.3}s",
            "Rack:".bright_cyan(),
            tile_row(&result.rack).bright_white().bold(),
            result.candidates_checked,
            result.duration.as_secs_f64()
        );
    }
}

/// Print a per-letter score breakdown
pub fn print_score_breakdown(result: &ScoreBreakdown) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        "SCORE:".bright_cyan().bold(),
        tile_row(&result.word).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for &(letter, value) in &result.letters {
        let label = if letter == WILDCARD {
            "blank".bright_black().to_string()
        } else {
            String::new()
        };
        println!("   {}  {value:>2} {label}", letter.to_ascii_uppercase());
    }

    println!(
        "\n   Total: {}",
        result.total.to_string().bright_green().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks solved:      {}", result.racks.len());
    println!(
        "   Average words:     {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Candidates tested: {}", result.total_candidates);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:      {:.1}", result.racks_per_second);

    let max_score = result
        .racks
        .iter()
        .filter_map(|r| r.best.as_ref().map(|b| b.score))
        .max()
        .unwrap_or(0);

    println!("\n🏆 {}", "Best play per rack:".bright_cyan().bold());
    for outcome in &result.racks {
        match &outcome.best {
            Some(best) => {
                let bar = create_progress_bar(f64::from(best.score), f64::from(max_score), 20);
                println!(
                    "   {:<8} {} {:>3} {}",
                    outcome.rack.to_uppercase(),
                    bar.green(),
                    best.score,
                    best.word.bright_white()
                );
            }
            None => println!(
                "   {:<8} {}",
                outcome.rack.to_uppercase(),
                "no words".bright_black()
            ),
        }
    }
}
