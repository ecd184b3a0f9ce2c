use crate::ClientResult;
use crate::analytics::filter::apply_filter;
use crate::analytics::report::party_breakdown;
use crate::commands::common::{FilterArgs, build_filter_spec, bound_strings};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PartiesData, PartyRiskRow};
use crate::dataset::load_dataset;

#[derive(Debug, Default)]
pub struct PartiesRunOptions {
    pub path: Option<String>,
    pub filter: FilterArgs,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, filter: FilterArgs) -> ClientResult<SuccessEnvelope> {
    run_with_options(PartiesRunOptions {
        path: path.map(std::string::ToString::to_string),
        filter,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: PartiesRunOptions) -> ClientResult<SuccessEnvelope> {
    let dataset = load_dataset(options.path, options.stdin_override)?;
    let filter = build_filter_spec(&options.filter, "parties")?;
    let filtered = apply_filter(&dataset.store, &filter);
    let (from, to) = bound_strings(&filter);

    let rows = party_breakdown(&filtered)
        .into_iter()
        .map(|entry| PartyRiskRow {
            party: entry.party,
            hhi: entry.assessment.hhi,
            z_score: entry.assessment.z_score,
            risk_level: entry.assessment.level.as_str().to_string(),
        })
        .collect::<Vec<PartyRiskRow>>();

    let data = PartiesData { from, to, rows };

    success("parties", data)
}
