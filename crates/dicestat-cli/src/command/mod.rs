use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use self::{analyze::AnalyzeArg, roll::RollArg};

mod analyze;
mod roll;

const DEFAULT_TRIM_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Roll dice and summarize the totals
    Roll(#[clap(flatten)] RollArg),
    /// Summarize numbers read from a file or stdin
    Analyze(#[clap(flatten)] AnalyzeArg),
}

/// Options shared by every command that prints a statistics report.
#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Fraction of values to discard from each end for the truncated mean
    #[arg(long, default_value_t = DEFAULT_TRIM_FRACTION, value_parser = parse_trim_fraction)]
    pub trim_fraction: f64,
    /// Write the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Output file path for the JSON report (defaults to stdout)
    #[arg(long, requires = "json")]
    pub output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            trim_fraction: DEFAULT_TRIM_FRACTION,
            json: false,
            output: None,
        }
    }
}

fn parse_trim_fraction(s: &str) -> Result<f64, String> {
    let fraction = s
        .parse::<f64>()
        .map_err(|e| format!("invalid discard fraction '{s}': {e}"))?;
    if !(0.0..0.5).contains(&fraction) {
        return Err(format!(
            "invalid discard fraction {fraction}: must be at least 0 and less than 0.5"
        ));
    }
    Ok(fraction)
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);

    match args.mode.unwrap_or(Mode::Roll(RollArg::default())) {
        Mode::Roll(arg) => roll::run(&arg)?,
        Mode::Analyze(arg) => analyze::run(&arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_trim_fraction() {
        assert_eq!(parse_trim_fraction("0"), Ok(0.0));
        assert_eq!(parse_trim_fraction("0.25"), Ok(0.25));
        assert!(parse_trim_fraction("0.5").is_err());
        assert!(parse_trim_fraction("-0.1").is_err());
        assert!(parse_trim_fraction("NaN").is_err());
        assert!(parse_trim_fraction("ten percent").is_err());
    }

    #[test]
    fn test_default_mode_is_roll() {
        let args = CommandArgs::try_parse_from(["dicestat"]).unwrap();
        assert!(args.mode.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_output_requires_json() {
        assert!(CommandArgs::try_parse_from(["dicestat", "roll", "--output", "out.json"]).is_err());
        assert!(
            CommandArgs::try_parse_from(["dicestat", "roll", "--json", "--output", "out.json"])
                .is_ok()
        );
    }
}
