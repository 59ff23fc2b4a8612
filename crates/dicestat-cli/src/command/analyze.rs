use std::path::PathBuf;

use anyhow::Context as _;
use dicestat_stats::summary::Summary;
use serde::Serialize;

use crate::{
    command::ReportArg,
    report::{self, HistogramRow},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// File with numbers separated by whitespace or commas ("-" or omitted for stdin)
    input: Option<PathBuf>,
    #[clap(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    source: String,
    summary: &'a Summary<f64>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let (source, text) = util::read_input(arg.input.as_deref())?;
    let values = util::parse_values(&text)
        .with_context(|| format!("Failed to parse numbers from {source}"))?;
    tracing::debug!(%source, count = values.len(), "read values");

    let summary = Summary::new(&values, arg.report.trim_fraction)
        .with_context(|| format!("Failed to summarize numbers from {source}"))?;

    if arg.report.json {
        let report = AnalyzeReport {
            source,
            summary: &summary,
        };
        return Output::save_json(&report, arg.report.output.clone());
    }

    println!("Analyzed {} values from {source}", summary.count);
    println!();
    report::print_summary(&summary);
    println!();

    let rows = summary
        .frequencies
        .bins()
        .iter()
        .map(|bin| HistogramRow {
            label: bin.value.to_string(),
            count: bin.count,
        })
        .collect::<Vec<_>>();
    report::print_histogram(&rows);

    Ok(())
}
