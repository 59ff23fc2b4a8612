use anyhow::Context as _;
use dicestat_dice::{DiceRoller, DiceSeed, DiceSpec};
use dicestat_stats::{histogram::FrequencyTable, summary::Summary};
use rand::Rng as _;
use serde::Serialize;

use crate::{
    command::ReportArg,
    report::{self, HistogramRow},
    util::Output,
};

const DEFAULT_COUNT: usize = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RollArg {
    /// Number of dice rolls to generate
    #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT, value_parser = parse_count)]
    count: usize,
    /// Dice to roll, in NdM notation
    #[arg(long, default_value_t = DiceSpec::TWO_D6)]
    dice: DiceSpec,
    /// Seed for reproducible rolls (up to 32 hex digits)
    #[arg(long)]
    seed: Option<DiceSeed>,
    /// Print the rolled values, unsorted and sorted
    #[arg(long)]
    show_values: bool,
    #[clap(flatten)]
    report: ReportArg,
}

impl Default for RollArg {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            dice: DiceSpec::TWO_D6,
            seed: None,
            show_values: false,
            report: ReportArg::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RollReport<'a> {
    dice: DiceSpec,
    seed: DiceSeed,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'a [u64]>,
    summary: &'a Summary<u64>,
}

fn parse_count(s: &str) -> Result<usize, String> {
    let count = s
        .parse::<usize>()
        .map_err(|e| format!("invalid number of values '{s}': {e}"))?;
    if count <= 1 {
        return Err(format!(
            "invalid number of values {count}: must be greater than 1"
        ));
    }
    Ok(count)
}

/// Whether one histogram row per possible total stays within the display limit
fn fits_histogram(dice: DiceSpec) -> bool {
    let num_rows = dice.max_total() - dice.min_total() + 1;
    usize::try_from(num_rows).is_ok_and(|n| n <= report::MAX_HISTOGRAM_ROWS)
}

/// One row per possible total, including totals never rolled
fn total_rows(dice: DiceSpec, frequencies: &FrequencyTable<u64>) -> Vec<HistogramRow> {
    let mut bins = frequencies.bins().iter().peekable();
    (dice.min_total()..=dice.max_total())
        .map(|total| HistogramRow {
            label: total.to_string(),
            count: bins
                .next_if(|bin| bin.value == total)
                .map_or(0, |bin| bin.count),
        })
        .collect()
}

pub(crate) fn run(arg: &RollArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    tracing::debug!(%seed, dice = %arg.dice, count = arg.count, "rolling dice");

    let mut roller = DiceRoller::with_seed(seed, arg.dice);
    let values = roller.roll_many(arg.count);
    let summary = Summary::new(&values, arg.report.trim_fraction)
        .context("Failed to summarize dice rolls")?;

    if arg.report.json {
        let report = RollReport {
            dice: arg.dice,
            seed,
            values: arg.show_values.then_some(values.as_slice()),
            summary: &summary,
        };
        return Output::save_json(&report, arg.report.output.clone());
    }

    println!("Rolled {} x {} (seed {seed})", arg.count, arg.dice);
    println!();
    if arg.show_values {
        report::print_values("Values", &values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        report::print_values("Sorted", &sorted);
        println!();
    }
    report::print_summary(&summary);
    println!();

    if fits_histogram(arg.dice) {
        report::print_histogram(&total_rows(arg.dice, &summary.frequencies));
    } else {
        report::print_histogram_skipped(arg.dice.max_total() - arg.dice.min_total() + 1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("2"), Ok(2));
        assert_eq!(parse_count("1000"), Ok(1000));
        assert!(parse_count("1").is_err());
        assert!(parse_count("0").is_err());
        assert!(parse_count("-5").is_err());
        assert!(parse_count("many").is_err());
    }

    #[test]
    fn test_total_rows_include_unrolled_totals() {
        let frequencies = FrequencyTable::new(&[3_u64, 7, 7, 12]);
        let rows = total_rows(DiceSpec::TWO_D6, &frequencies)
            .into_iter()
            .map(|row| (row.label, row.count))
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], ("2".to_owned(), 0));
        assert_eq!(rows[1], ("3".to_owned(), 1));
        assert_eq!(rows[5], ("7".to_owned(), 2));
        assert_eq!(rows[10], ("12".to_owned(), 1));
        assert_eq!(rows.iter().map(|(_, count)| count).sum::<usize>(), 4);
    }

    #[test]
    fn test_fits_histogram() {
        assert!(fits_histogram(DiceSpec::TWO_D6));
        assert!(fits_histogram(DiceSpec::new(1, 60).unwrap()));
        assert!(!fits_histogram(DiceSpec::new(1, 61).unwrap()));
        assert!(!fits_histogram(DiceSpec::new(100_000, 100_000).unwrap()));
    }

    #[test]
    fn test_run_with_huge_dice_range() {
        let arg = RollArg {
            count: 2,
            dice: "100000d100000".parse().unwrap(),
            seed: Some(DiceSeed::from(3)),
            ..RollArg::default()
        };
        run(&arg).unwrap();
    }

    #[test]
    fn test_report_omits_values_unless_requested() {
        let values = DiceRoller::with_seed(DiceSeed::from(9), DiceSpec::TWO_D6).roll_many(10);
        let summary = Summary::new(&values, 0.1).unwrap();
        let report = RollReport {
            dice: DiceSpec::TWO_D6,
            seed: DiceSeed::from(9),
            values: None,
            summary: &summary,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("values").is_none());
        assert_eq!(json["dice"], serde_json::json!({ "count": 2, "sides": 6 }));
        assert_eq!(json["summary"]["count"], 10);
    }
}
