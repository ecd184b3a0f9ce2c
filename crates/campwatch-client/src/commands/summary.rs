use crate::ClientResult;
use crate::analytics::aggregate::{total_spending, unique_donors};
use crate::analytics::filter::apply_filter;
use crate::commands::common::{FilterArgs, build_filter_spec, bound_strings, data_range_hint};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::dataset::load_dataset;

#[derive(Debug, Default)]
pub struct SummaryRunOptions {
    pub path: Option<String>,
    pub filter: FilterArgs,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, filter: FilterArgs) -> ClientResult<SuccessEnvelope> {
    run_with_options(SummaryRunOptions {
        path: path.map(std::string::ToString::to_string),
        filter,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryRunOptions) -> ClientResult<SuccessEnvelope> {
    let dataset = load_dataset(options.path, options.stdin_override)?;
    let filter = build_filter_spec(&options.filter, "summary")?;
    let filtered = apply_filter(&dataset.store, &filter);
    let (from, to) = bound_strings(&filter);

    let data = SummaryData {
        from,
        to,
        total_spending: total_spending(&filtered),
        unique_donors: unique_donors(&filtered) as i64,
        transactions: filtered.len() as i64,
        data_range_hint: data_range_hint(&dataset.store.date_range()),
    };

    success("summary", data)
}
