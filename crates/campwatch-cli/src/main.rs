mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use campwatch_client::ClientError;
use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Campwatch - campaign finance risk analytics

Usage:
  campwatch <command>

Start here:
  campwatch dataset check <path>
  campwatch risk <path>
  campwatch report <path>
";

const TOP_LEVEL_HELP: &str = "Campwatch — campaign finance risk analytics

USAGE: campwatch <command>

Check your dataset:
  1. campwatch dataset check --help                       Read the expected dataset layout
  2. campwatch dataset check <path>                       Validate a contributions file

Explore a filtered view (all filters combine; repeat flags for multiple values):
  campwatch summary <path> [--party P] [--region R]       Spending and donor rollups
  campwatch trend <path> [--from D] [--to D]              Daily totals with anomaly flags

Assess risk:
  campwatch risk <path>                                   HHI, spike z-score, risk level
  campwatch parties <path>                                 Per-party risk table
  campwatch report <path> [--out DIR]                     Downloadable plain-text report

Every analysis command accepts --party/--region/--donor (repeatable),
--from/--to (YYYY-MM-DD, inclusive), and --json for machine output.
Pass `-` as <path> to read the dataset from stdin.

Having issues or errors?
  Run `campwatch dataset check --help` for dataset layout guidance,
  or `campwatch <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if is_top_level_help_request(&raw_args) {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["dataset", "check", ..] => Some("dataset check"),
        ["dataset", ..] => Some("dataset"),
        ["summary", ..] => Some("summary"),
        ["risk", ..] => Some("risk"),
        ["parties", ..] => Some("parties"),
        ["trend", ..] => Some("trend"),
        ["report", ..] => Some("report"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn command_path_skips_flag_arguments() {
        let hint = command_path_from_args(&args(&[
            "campwatch",
            "risk",
            "data.csv",
            "--from",
            "2024-01-99",
        ]));
        assert_eq!(hint.as_deref(), Some("risk"));
    }

    #[test]
    fn dataset_check_hint_keeps_the_full_path() {
        let hint = command_path_from_args(&args(&["campwatch", "dataset", "check"]));
        assert_eq!(hint.as_deref(), Some("dataset check"));
    }

    #[test]
    fn unknown_commands_produce_no_hint() {
        let hint = command_path_from_args(&args(&["campwatch", "donors"]));
        assert!(hint.is_none());
    }

    #[test]
    fn clap_usage_boilerplate_is_stripped() {
        let message = "error: invalid value\n\nUsage: campwatch risk <PATH>\n";
        assert_eq!(strip_clap_boilerplate(message), "error: invalid value");
    }
}
