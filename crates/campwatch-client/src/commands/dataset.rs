use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::DatasetCheckData;
use crate::dataset::load_dataset;

#[derive(Debug, Default)]
pub struct DatasetCheckOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn check(path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    check_with_options(DatasetCheckOptions {
        path: path.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn check_with_options(options: DatasetCheckOptions) -> ClientResult<SuccessEnvelope> {
    let dataset = load_dataset(options.path, options.stdin_override)?;

    let data = DatasetCheckData {
        path: dataset.path,
        summary: dataset.summary,
        data_range: dataset.store.date_range(),
        parties: dataset.store.parties().into_iter().collect(),
        regions: dataset.store.regions().into_iter().collect(),
        donor_count: dataset.store.donors().len() as i64,
    };

    success("dataset check", data)
}
