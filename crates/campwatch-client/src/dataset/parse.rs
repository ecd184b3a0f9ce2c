use std::collections::HashMap;

use crate::{ClientError, ClientResult};

pub(crate) const DATASET_HEADERS: [&str; 5] = ["date", "amount", "donor", "party", "region"];

#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) date: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) donor: Option<String>,
    pub(crate) party: Option<String>,
    pub(crate) region: Option<String>,
}

pub(crate) fn parse_source(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::dataset_empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(trimmed.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::invalid_argument("Dataset header row is missing or unreadable.")
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::dataset_schema_mismatch(
            expected_headers(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|_| {
            ClientError::invalid_argument("Dataset rows are malformed or not UTF-8.")
        })?;

        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            date: value_for(&record, &index_by_name, "date"),
            amount: value_for(&record, &index_by_name, "amount"),
            donor: value_for(&record, &index_by_name, "donor"),
            party: value_for(&record, &index_by_name, "party"),
            region: value_for(&record, &index_by_name, "region"),
        });
    }

    Ok(rows)
}

pub(crate) fn expected_headers() -> Vec<String> {
    DATASET_HEADERS
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

fn headers_are_valid(headers: &[String]) -> bool {
    let all_known = headers
        .iter()
        .all(|header| DATASET_HEADERS.contains(&header.as_str()));
    let all_present = DATASET_HEADERS
        .iter()
        .all(|required| headers.iter().any(|header| header == required));
    all_known && all_present
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}
