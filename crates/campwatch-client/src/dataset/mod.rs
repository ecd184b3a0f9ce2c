pub(crate) mod input;
pub(crate) mod parse;
pub(crate) mod validate;

use crate::ClientResult;
use crate::contracts::types::DatasetSummary;
use crate::store::TransactionStore;

#[derive(Debug)]
pub(crate) struct LoadedDataset {
    pub(crate) store: TransactionStore,
    pub(crate) summary: DatasetSummary,
    pub(crate) path: Option<String>,
}

/// One-shot load: resolve the source, parse the delimited table, validate
/// rows, and hand back an immutable store. Called once per invocation before
/// any filter or aggregation work.
pub(crate) fn load_dataset(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<LoadedDataset> {
    let source = input::resolve_source(path, stdin_override)?;
    let parsed_rows = parse::parse_source(&source.content)?;
    let validated = validate::validate_rows(parsed_rows)?;

    Ok(LoadedDataset {
        store: TransactionStore::from_rows(validated.rows),
        summary: validated.summary,
        path: source.source_ref,
    })
}
