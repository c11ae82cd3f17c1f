//! Survey every root word
//!
//! Runs the analysis for each start word and summarizes how many answers each
//! root word offers.

use super::analyze::analyze_root;
use crate::validator::Dictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Statistics from surveying the root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Answers per root word, in start list order
    pub answer_counts: Vec<(String, usize)>,
    /// Total answers across all roots, by word length
    pub length_distribution: BTreeMap<usize, usize>,
    pub average_answers: f64,
    pub min_answers: usize,
    pub max_answers: usize,
    pub richest: Vec<(String, usize)>,
    pub poorest: Vec<(String, usize)>,
    /// Roots that offer no answer at all
    pub dead_roots: Vec<String>,
    pub total_time: Duration,
}

/// Analyze every start word (or the first `limit` of them)
pub fn run_survey<D: Dictionary + Sync + ?Sized>(
    start_words: &[String],
    vocabulary: &[String],
    dictionary: &D,
    language: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = start_words
        .iter()
        .take(limit.unwrap_or(start_words.len()))
        .collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut answer_counts: Vec<(String, usize)> = Vec::with_capacity(roots.len());
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for root in roots {
        let result = analyze_root(root, vocabulary, dictionary, language);
        debug!(root_word = %result.root_word, answers = result.total(), "root analyzed");

        for (&len, &count) in &result.by_length {
            *length_distribution.entry(len).or_insert(0) += count;
        }
        pb.set_message(result.root_word.clone());
        answer_counts.push((result.root_word, result.answers.len()));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(answer_counts, length_distribution, total_start.elapsed())
}

fn summarize(
    answer_counts: Vec<(String, usize)>,
    length_distribution: BTreeMap<usize, usize>,
    total_time: Duration,
) -> SurveyStatistics {
    let total_roots = answer_counts.len();
    let total_answers: usize = answer_counts.iter().map(|(_, n)| n).sum();
    let average_answers = if total_roots > 0 {
        total_answers as f64 / total_roots as f64
    } else {
        0.0
    };

    let min_answers = answer_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_answers = answer_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut ranked = answer_counts.clone();
    ranked.sort_by(|(wa, a), (wb, b)| b.cmp(a).then_with(|| wa.cmp(wb)));
    let richest: Vec<(String, usize)> = ranked.iter().take(5).cloned().collect();
    let poorest: Vec<(String, usize)> = ranked.iter().rev().take(5).cloned().collect();

    let dead_roots = answer_counts
        .iter()
        .filter(|(_, n)| *n == 0)
        .map(|(word, _)| word.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        answer_counts,
        length_distribution,
        average_answers,
        min_answers,
        max_answers,
        richest,
        poorest,
        dead_roots,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Root words surveyed: {}", stats.total_roots);
    println!(
        "  Average answers:     {}",
        format!("{:.1}", stats.average_answers).bright_yellow().bold()
    );
    println!("  Fewest answers:      {}", stats.min_answers);
    println!("  Most answers:        {}", stats.max_answers);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.length_distribution.is_empty() {
        println!("\n📈 {}", "Answers by Length".bright_cyan().bold());
        let max_count = *stats.length_distribution.values().max().unwrap_or(&1);
        for (len, count) in &stats.length_distribution {
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {len:2} letters: {bar} {count:5}");
        }
    }

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Root Words".green().bold());
        for (word, count) in &stats.richest {
            println!("  {} ({count} answers)", word.to_uppercase().bright_green());
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Root Words".yellow().bold());
        for (word, count) in &stats.poorest {
            println!("  {} ({count} answers)", word.to_uppercase().yellow());
        }
    }

    if !stats.dead_roots.is_empty() {
        println!(
            "\n❌ {} {}",
            "No answers:".red().bold(),
            stats.dead_roots.join(", ")
        );
    }
}
