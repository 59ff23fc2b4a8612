//! Plain-text report display
//!
//! Prints summaries and histograms as aligned tables on stdout.

use std::fmt::Display;

use dicestat_stats::summary::Summary;

const VALUES_PER_LINE: usize = 20;
const HISTOGRAM_BAR_WIDTH: usize = 50;
pub(crate) const MAX_HISTOGRAM_ROWS: usize = 60;

/// A row of the histogram: a label and the number of values it counts
pub(crate) struct HistogramRow {
    pub label: String,
    pub count: usize,
}

/// Print a labelled list of values, wrapped over several lines
pub(crate) fn print_values<T>(label: &str, values: &[T])
where
    T: Display,
{
    println!("{label}:");
    for chunk in values.chunks(VALUES_PER_LINE) {
        let line = chunk
            .iter()
            .map(|v| format!("{v:>4}"))
            .collect::<String>();
        println!("  {line}");
    }
}

/// Print the summary statistics table
pub(crate) fn print_summary<T>(summary: &Summary<T>)
where
    T: Display,
{
    let mode = summary
        .mode
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let truncated_label = format!("Truncated mean ({})", summary.trim_fraction);

    println!("  {:<24} {:>12}", "Statistic", "Value");
    println!("  {}", "-".repeat(37));
    println!("  {:<24} {:>12}", "Count", summary.count);
    println!("  {:<24} {:>12}", "Minimum", summary.min);
    println!("  {:<24} {:>12}", "Maximum", summary.max);
    println!("  {:<24} {:>12.4}", "Mean", summary.mean);
    println!("  {truncated_label:<24} {:>12.4}", summary.truncated_mean);
    println!("  {:<24} {:>12}", "Median", summary.median);
    println!("  {:<24} {:>12}", "Mode", mode);
    println!("  {:<24} {:>12.4}", "Std dev (sample)", summary.sample_std_dev);
    println!(
        "  {:<24} {:>12.4}",
        "Std dev (population)", summary.population_std_dev
    );
}

/// Print a horizontal bar histogram, bars scaled to the largest count
pub(crate) fn print_histogram(rows: &[HistogramRow]) {
    if rows.len() > MAX_HISTOGRAM_ROWS {
        print_histogram_skipped(rows.len() as u64);
        return;
    }

    let max_count = rows.iter().map(|row| row.count).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|row| row.label.len())
        .max()
        .unwrap_or(0)
        .max("Value".len());

    println!("  {:>label_width$} | Count", "Value");
    println!("  {}-+-{}", "-".repeat(label_width), "-".repeat(HISTOGRAM_BAR_WIDTH));
    for row in rows {
        let bar = "#".repeat(bar_width(row.count, max_count, HISTOGRAM_BAR_WIDTH));
        println!(
            "  {:>label_width$} | {bar:<bar_cells$} {}",
            row.label,
            row.count,
            bar_cells = HISTOGRAM_BAR_WIDTH,
        );
    }
}

/// Print the notice shown instead of a histogram with too many rows
pub(crate) fn print_histogram_skipped(num_rows: u64) {
    tracing::warn!(
        rows = num_rows,
        max = MAX_HISTOGRAM_ROWS,
        "histogram skipped"
    );
    println!("{}", histogram_skipped_message(num_rows));
}

fn histogram_skipped_message(num_rows: u64) -> String {
    format!("Too many histogram rows to show ({num_rows} > {MAX_HISTOGRAM_ROWS})")
}

/// Scale `count` to a bar of at most `width` cells.
///
/// Non-zero counts always get at least one cell so they stay visible.
fn bar_width(count: usize, max_count: usize, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count.saturating_mul(width) + max_count / 2) / max_count;
    scaled.clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scaling() {
        assert_eq!(bar_width(10, 10, 50), 50);
        assert_eq!(bar_width(5, 10, 50), 25);
        assert_eq!(bar_width(1, 3, 10), 3);
        assert_eq!(bar_width(2, 3, 10), 7);
    }

    #[test]
    fn test_bar_width_zero_count() {
        assert_eq!(bar_width(0, 10, 50), 0);
        assert_eq!(bar_width(0, 0, 50), 0);
    }

    #[test]
    fn test_histogram_skipped_message() {
        assert_eq!(
            histogram_skipped_message(9_999_900_001),
            "Too many histogram rows to show (9999900001 > 60)"
        );
    }

    #[test]
    fn test_bar_width_small_count_visible() {
        assert_eq!(bar_width(1, 1000, 50), 1);
    }
}
