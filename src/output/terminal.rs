// Colored terminal output for topic distributions.
//
// Rendering is split from printing: the `render_*` functions build the text
// (testable), the `display_*` functions print it.

use colored::Colorize;

use crate::topics::classifier::TopicDistribution;

use super::truncate_chars;

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 28;

/// The summary sentence shown under the table.
pub fn summary_sentence(distribution: &TopicDistribution) -> String {
    format!(
        "Your input aligns with {}, taking the culinary stage at {:.2}%.",
        distribution.dominant.name(),
        distribution.dominant_percentage()
    )
}

/// Dominant-topic row followed by one row per topic with a weight bar.
pub fn render_distribution(distribution: &TopicDistribution) -> String {
    let max = distribution
        .weights
        .iter()
        .copied()
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<LABEL_WIDTH$} {}\n",
        "Dominant Topic".bold(),
        distribution.dominant.name().bold()
    ));
    out.push_str(&format!("  {}\n", "-".repeat(LABEL_WIDTH + BAR_WIDTH + 16).dimmed()));

    for (label, weight) in distribution.iter() {
        let filled = if max > 0.0 {
            ((weight / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled));
        let line = format!("  {:<LABEL_WIDTH$} {:>12.10}  {}", label.name(), weight, bar);
        if label == distribution.dominant && max > 0.0 {
            out.push_str(&format!("{}\n", line.green()));
        } else {
            out.push_str(&format!("{line}\n"));
        }
    }
    out
}

/// Print the full classification result for one review.
pub fn display_distribution(distribution: &TopicDistribution) {
    println!("\n{}", "=== Topic Distribution ===".bold());
    println!();
    print!("{}", render_distribution(distribution));
    println!();
    println!("{}", summary_sentence(distribution));
}

/// Print one line of batch output: dominant topic, percentage, review preview.
pub fn display_batch_line(index: usize, review: &str, distribution: &TopicDistribution) {
    println!(
        "  {:>4}. {:<LABEL_WIDTH$} {:>6.2}%  {}",
        index,
        distribution.dominant.name(),
        distribution.dominant_percentage(),
        truncate_chars(review, 60).dimmed()
    );
}
