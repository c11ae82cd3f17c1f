//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{AnalysisResult, CheckResult};
use crate::core::ValidationOutcome;
use colored::Colorize;

/// Print the outcome of every submission in a check run
pub fn print_check_result(result: &CheckResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.outcome {
            Some(ValidationOutcome::Accepted(word)) => {
                println!(
                    "  {} {} {}",
                    "✓".green().bold(),
                    word.as_str().bright_white(),
                    length_badge(word.len())
                );
            }
            Some(ValidationOutcome::Rejected(kind)) => {
                println!(
                    "  {} {:<16} {}",
                    "✗".red().bold(),
                    step.input.trim(),
                    kind.title().red()
                );
                if verbose {
                    println!("      {}", kind.message(&result.root_word).bright_black());
                }
            }
            None => {
                if verbose {
                    println!("  {} (empty, ignored)", "·".bright_black());
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} accepted, {} rejected",
            result.accepted_count(),
            result.rejected_count()
        )
        .bold()
    );
    if !result.used_words.is_empty() {
        println!("Used words: {}", result.used_words.join(", "));
    }
}

/// Print the answers available for a root word
pub fn print_analysis_result(result: &AnalysisResult, show_words: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD ANALYSIS:".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} answers out of {} dictionary words",
        result.total().to_string().bright_yellow().bold(),
        result.vocabulary_size
    );
    if result.total() == 0 {
        return;
    }
    println!("   Longest answer: {} letters", result.longest());

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let max_count = result.by_length.values().copied().max().unwrap_or(1);
    for (len, count) in result.by_length.iter().rev() {
        let bar = create_progress_bar(*count as f64, max_count as f64, 30);
        println!("   {} {} {count:4}", length_badge(*len), bar.green());
    }

    if show_words {
        println!("\n📝 {}", "Answers:".bright_cyan().bold());
        for chunk in result.answers.chunks(8) {
            println!("   {}", chunk.join("  "));
        }
    }
}
