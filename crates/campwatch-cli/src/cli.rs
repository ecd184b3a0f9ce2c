use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `campwatch dataset check --help`.
/// Describes the dataset layout every command expects.
pub const DATASET_CHECK_AFTER_HELP: &str = "\
Dataset layout:
  Campwatch reads one delimited text file per run. The header row must
  contain exactly these columns, in any order:

    date,amount,donor,party,region

  CSV example (header + rows):
  date,amount,donor,party,region
  2024-01-15,2500.00,Acme Holdings,Unity Party,Nairobi
  2024-01-16,900,J. Mwangi,Unity Party,Mombasa

Field rules:
  date (required):
    Date only, exactly `YYYY-MM-DD`. Rows with unparseable dates fail
    validation and are reported with their row numbers.

  amount (required column, lenient values):
    A decimal number in one currency unit. Values that do not parse as a
    non-negative number are loaded as 0 and counted, never dropped.

  donor, party, region (required):
    Non-empty identifier strings. Keep spellings stable across files so
    filters and groupings line up.

What to do next:
  1. Run `campwatch dataset check <path>` and fix any reported issues.
  2. Run `campwatch summary <path>` for spending rollups.
  3. Run `campwatch risk <path>` for the full risk assessment.

  Pass `-` as <path> to read the dataset from stdin.
";

#[derive(Debug, Parser)]
#[command(
    name = "campwatch",
    version,
    about = "campaign finance risk analytics",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct FilterFlags {
    /// Restrict to one or more parties (repeat the flag per value)
    #[arg(long = "party", value_name = "PARTY")]
    pub parties: Vec<String>,
    /// Restrict to one or more regions (repeat the flag per value)
    #[arg(long = "region", value_name = "REGION")]
    pub regions: Vec<String>,
    /// Restrict to one or more donors (repeat the flag per value)
    #[arg(long = "donor", value_name = "DONOR")]
    pub donors: Vec<String>,
    /// Start date filter, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub from: Option<IsoDate>,
    /// End date filter, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub to: Option<IsoDate>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and describe a contributions dataset
    #[command(arg_required_else_help = true)]
    Dataset {
        #[command(subcommand)]
        command: DatasetCommand,
    },
    /// Show total spending and donor rollups for a filtered view
    Summary {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        filter: FilterFlags,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Assess donor concentration and spending spike risk
    Risk {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        filter: FilterFlags,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Break the risk metrics down per party
    Parties {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        filter: FilterFlags,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Show per-date spending totals with anomaly flags
    Trend {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        filter: FilterFlags,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Produce the downloadable campaign risk report
    Report {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        filter: FilterFlags,
        /// Write the report to this file or directory instead of stdout only
        #[arg(long, value_name = "PATH")]
        out: Option<String>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DatasetCommand {
    /// Load and validate a dataset without running any analysis
    #[command(after_long_help = DATASET_CHECK_AFTER_HELP)]
    Check {
        /// Path to the contributions dataset (use `-` for stdin)
        path: Option<String>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, DatasetCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 14] = [
            vec!["campwatch", "dataset", "check", "data.csv"],
            vec!["campwatch", "dataset", "check", "data.csv", "--json"],
            vec!["campwatch", "summary", "data.csv"],
            vec!["campwatch", "summary", "data.csv", "--region", "North"],
            vec!["campwatch", "risk", "data.csv"],
            vec!["campwatch", "risk", "-", "--json"],
            vec![
                "campwatch",
                "risk",
                "data.csv",
                "--from",
                "2024-01-01",
                "--to",
                "2024-02-01",
            ],
            vec!["campwatch", "risk", "data.csv", "--party", "P1", "--party", "P2"],
            vec!["campwatch", "parties", "data.csv"],
            vec!["campwatch", "parties", "data.csv", "--json"],
            vec!["campwatch", "trend", "data.csv", "--donor", "D1"],
            vec!["campwatch", "trend", "data.csv", "--json"],
            vec!["campwatch", "report", "data.csv"],
            vec!["campwatch", "report", "data.csv", "--out", "./reports"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn repeated_party_flags_accumulate() {
        let parsed = parse_from([
            "campwatch", "risk", "data.csv", "--party", "P1", "--party", "P2",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed
            && let Commands::Risk { filter, .. } = cli.command
        {
            assert_eq!(filter.parties, vec!["P1".to_string(), "P2".to_string()]);
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = parse_from(["campwatch", "risk", "data.csv", "--from", "2024-99-01"]);
        assert!(parsed.is_err());

        let sloppy = parse_from(["campwatch", "risk", "data.csv", "--from", "2024-1-1"]);
        assert!(sloppy.is_err());
    }

    #[test]
    fn parse_dataset_check_subcommand() {
        let parsed = parse_from(["campwatch", "dataset", "check", "data.csv", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Dataset {
                    command: DatasetCommand::Check { json: true, .. }
                }
            ));
        }
    }

    #[test]
    fn bare_dataset_shows_help() {
        let parsed = parse_from(["campwatch", "dataset"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(
                err.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }

    #[test]
    fn parse_json_flags() {
        let risk = parse_from(["campwatch", "risk", "data.csv", "--json"]);
        assert!(risk.is_ok());
        if let Ok(cli) = risk {
            assert!(matches!(cli.command, Commands::Risk { json: true, .. }));
        }

        let report = parse_from(["campwatch", "report", "data.csv", "--json"]);
        assert!(report.is_ok());
        if let Ok(cli) = report {
            assert!(matches!(cli.command, Commands::Report { json: true, .. }));
        }
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["campwatch", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["campwatch", "risk", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parsed = parse_from(["campwatch", "donors"]);
        assert!(parsed.is_err());
    }
}
