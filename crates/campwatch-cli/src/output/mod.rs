mod analytics_text;
mod dataset_text;
mod error_text;
mod format;
mod json;
mod mode;
mod report_text;

use std::io;

use campwatch_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "dataset check" => dataset_text::render_dataset_check(&success.data),
        "summary" => analytics_text::render_summary(&success.data),
        "risk" => analytics_text::render_risk(&success.data),
        "parties" => analytics_text::render_parties(&success.data),
        "trend" => analytics_text::render_trend(&success.data),
        "report" => report_text::render_report(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
