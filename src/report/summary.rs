//! @ai:module:intent Console summary tables for algorithm comparisons
//! @ai:module:layer presentation
//! @ai:module:public_api print_mean_summary, print_percentile_summary, mean_extremes
//! @ai:module:stateless true

use crate::metrics::{AlgorithmResults, SummaryStats};

const RULE_WIDTH: usize = 70;

/// @ai:intent Best and worst algorithm by mean response time
#[derive(Debug, Clone, PartialEq)]
pub struct MeanExtremes<'a> {
    pub best_algorithm: &'a str,
    pub best_mean: f64,
    pub worst_algorithm: &'a str,
    pub worst_mean: f64,
}

impl MeanExtremes<'_> {
    /// @ai:intent Percentage reduction in response time from worst to best
    /// @ai:effects pure
    pub fn improvement_percent(&self) -> f64 {
        if self.worst_mean == 0.0 {
            return 0.0;
        }

        (self.worst_mean - self.best_mean) / self.worst_mean * 100.0
    }
}

/// @ai:intent Identify the algorithms with minimum and maximum mean
/// @ai:effects pure
///
/// Algorithms with absent statistics (empty files) do not participate.
pub fn mean_extremes(results: &[AlgorithmResults]) -> Option<MeanExtremes<'_>> {
    let means: Vec<(&str, f64)> = results
        .iter()
        .filter_map(|r| r.all.as_ref().map(|s| (r.algorithm.as_str(), s.mean)))
        .collect();

    let (best_algorithm, best_mean) = means
        .iter()
        .copied()
        .min_by(|a, b| a.1.total_cmp(&b.1))?;
    let (worst_algorithm, worst_mean) = means
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))?;

    Some(MeanExtremes {
        best_algorithm,
        best_mean,
        worst_algorithm,
        worst_mean,
    })
}

/// @ai:intent Print the mean-mode comparison table with best/worst lines
/// @ai:effects io
pub fn print_mean_summary(results: &[AlgorithmResults]) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("RESPONSE TIME COMPARISON SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));

    for r in results {
        match &r.all {
            Some(stats) => println!("{:<15}: {:>8.2} ms", r.algorithm, stats.mean),
            None => println!("{:<15}: {:>8}", r.algorithm, "-"),
        }
    }

    println!("{}", "=".repeat(RULE_WIDTH));

    if let Some(extremes) = mean_extremes(results) {
        println!();
        println!(
            "Best Algorithm:  {} ({:.2} ms)",
            extremes.best_algorithm, extremes.best_mean
        );
        println!(
            "Worst Algorithm: {} ({:.2} ms)",
            extremes.worst_algorithm, extremes.worst_mean
        );

        if results.len() > 1 {
            println!(
                "Improvement:     {:.1}% reduction in response time",
                extremes.improvement_percent()
            );
        }
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

/// @ai:intent Print the percentile comparison table per task-size class
/// @ai:effects io
pub fn print_percentile_summary(results: &[AlgorithmResults]) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("RESPONSE TIME PERCENTILE SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{:<15} {:<8} {:>10} {:>10} {:>10}",
        "Algorithm", "Class", "Median", "P90", "P99"
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for r in results {
        print_class_row(&r.algorithm, "all", r.all.as_ref());
        print_class_row(&r.algorithm, "short", r.short.as_ref());
        print_class_row(&r.algorithm, "long", r.long.as_ref());
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

/// @ai:intent Print one table row; absent statistics render as dashes
/// @ai:effects io
fn print_class_row(algorithm: &str, class: &str, stats: Option<&SummaryStats>) {
    match stats {
        Some(s) => println!(
            "{:<15} {:<8} {:>10.2} {:>10.2} {:>10.2}",
            algorithm, class, s.median, s.p90, s.p99
        ),
        None => println!(
            "{:<15} {:<8} {:>10} {:>10} {:>10}",
            algorithm, class, "-", "-", "-"
        ),
    }
}
