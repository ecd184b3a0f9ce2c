use crate::ClientResult;
use crate::analytics::date::format_iso_date;
use crate::analytics::filter::apply_filter;
use crate::analytics::risk::score_date_series;
use crate::commands::common::{FilterArgs, build_filter_spec, bound_strings, data_range_hint};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TrendData, TrendPoint};
use crate::dataset::load_dataset;

#[derive(Debug, Default)]
pub struct TrendRunOptions {
    pub path: Option<String>,
    pub filter: FilterArgs,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, filter: FilterArgs) -> ClientResult<SuccessEnvelope> {
    run_with_options(TrendRunOptions {
        path: path.map(std::string::ToString::to_string),
        filter,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TrendRunOptions) -> ClientResult<SuccessEnvelope> {
    let dataset = load_dataset(options.path, options.stdin_override)?;
    let filter = build_filter_spec(&options.filter, "trend")?;
    let filtered = apply_filter(&dataset.store, &filter);
    let (from, to) = bound_strings(&filter);

    let rows = score_date_series(&filtered)
        .into_iter()
        .map(|point| TrendPoint {
            date: format_iso_date(&point.date),
            total: point.total,
            z_score: point.z_score,
            anomalous: point.anomalous,
        })
        .collect::<Vec<TrendPoint>>();

    let data = TrendData {
        from,
        to,
        rows,
        data_range_hint: data_range_hint(&dataset.store.date_range()),
    };

    success("trend", data)
}
