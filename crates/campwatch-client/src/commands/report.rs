use std::fs;
use std::path::{Path, PathBuf};

use crate::analytics::filter::apply_filter;
use crate::analytics::report::{REPORT_FILE_NAME, REPORT_MEDIA_TYPE, render_report_body};
use crate::analytics::risk::assess;
use crate::commands::common::{FilterArgs, build_filter_spec};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ReportData;
use crate::dataset::load_dataset;
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct ReportRunOptions {
    pub path: Option<String>,
    pub filter: FilterArgs,
    pub out: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, filter: FilterArgs, out: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ReportRunOptions {
        path: path.map(std::string::ToString::to_string),
        filter,
        out: out.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ReportRunOptions) -> ClientResult<SuccessEnvelope> {
    let dataset = load_dataset(options.path, options.stdin_override)?;
    let filter = build_filter_spec(&options.filter, "report")?;
    let filtered = apply_filter(&dataset.store, &filter);
    let assessment = assess(&filtered);
    let body = render_report_body(&assessment);

    let written_to = match options.out {
        Some(out) => Some(write_report(&out, &body)?),
        None => None,
    };

    let data = ReportData {
        file_name: REPORT_FILE_NAME.to_string(),
        media_type: REPORT_MEDIA_TYPE.to_string(),
        body,
        written_to,
        hhi: assessment.hhi,
        z_score: assessment.z_score,
        risk_level: assessment.level.as_str().to_string(),
    };

    success("report", data)
}

fn write_report(out: &str, body: &str) -> ClientResult<String> {
    let target = resolve_target(Path::new(out));
    fs::write(&target, body)
        .map_err(|error| ClientError::report_write_failed(&target, &error.to_string()))?;
    Ok(target.display().to_string())
}

// A directory target gets the conventional file name appended.
fn resolve_target(out: &Path) -> PathBuf {
    if out.is_dir() {
        return out.join(REPORT_FILE_NAME);
    }
    out.to_path_buf()
}
