use std::collections::HashSet;

use chrono::NaiveDate;

use crate::analytics::date::parse_row_date;
use crate::contracts::types::{DatasetIssue, DatasetSummary};
use crate::store::Transaction;
use crate::{ClientError, ClientResult};

use super::parse::ParsedRow;

#[derive(Debug)]
pub(crate) struct ValidatedRows {
    pub(crate) rows: Vec<Transaction>,
    pub(crate) summary: DatasetSummary,
}

pub(crate) fn validate_rows(parsed_rows: Vec<ParsedRow>) -> ClientResult<ValidatedRows> {
    let total_rows = parsed_rows.len();
    let mut rows = Vec::new();
    let mut issues = Vec::new();
    let mut amounts_coerced = 0i64;

    for raw in parsed_rows {
        let mut row_issues = Vec::new();

        let date = validate_date(raw.row, raw.date, &mut row_issues);
        let (amount, coerced) = normalize_amount(raw.amount);
        let donor = validate_required_string(
            raw.row,
            "donor",
            raw.donor,
            &mut row_issues,
            "donor must be present and non-empty.",
        );
        let party = validate_required_string(
            raw.row,
            "party",
            raw.party,
            &mut row_issues,
            "party must be present and non-empty.",
        );
        let region = validate_required_string(
            raw.row,
            "region",
            raw.region,
            &mut row_issues,
            "region must be present and non-empty.",
        );

        if row_issues.is_empty() {
            if coerced {
                amounts_coerced += 1;
            }
            rows.push(Transaction {
                date: date.unwrap_or(NaiveDate::MIN),
                amount,
                donor: donor.unwrap_or_default(),
                party: party.unwrap_or_default(),
                region: region.unwrap_or_default(),
            });
        } else {
            issues.extend(row_issues);
        }
    }

    let summary = DatasetSummary {
        rows_read: total_rows as i64,
        rows_loaded: rows.len() as i64,
        rows_invalid: issues
            .iter()
            .map(|issue| issue.row)
            .collect::<HashSet<i64>>()
            .len() as i64,
        amounts_coerced,
    };

    if !issues.is_empty() {
        return Err(ClientError::dataset_validation_failed(summary, issues));
    }

    Ok(ValidatedRows { rows, summary })
}

/// A contribution row is never dropped for an amount problem: non-numeric,
/// empty, and negative values all normalize to zero.
fn normalize_amount(value: Option<String>) -> (f64, bool) {
    let Some(raw) = normalize_optional(value) else {
        return (0.0, true);
    };

    let Ok(parsed) = raw.parse::<f64>() else {
        return (0.0, true);
    };

    if !parsed.is_finite() || parsed < 0.0 {
        return (0.0, true);
    }

    (parsed, false)
}

fn validate_date(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<DatasetIssue>,
) -> Option<NaiveDate> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        issues.push(DatasetIssue {
            row,
            field: "date".to_string(),
            code: "missing_required_field".to_string(),
            description: "date must be present and non-empty.".to_string(),
            expected: Some("YYYY-MM-DD".to_string()),
            received: Some(String::new()),
        });
        return None;
    };

    let Some(parsed) = parse_row_date(&candidate) else {
        issues.push(DatasetIssue {
            row,
            field: "date".to_string(),
            code: "invalid_date".to_string(),
            description: "date must be a real calendar date in YYYY-MM-DD format.".to_string(),
            expected: Some("YYYY-MM-DD".to_string()),
            received: Some(candidate),
        });
        return None;
    };

    Some(parsed)
}

fn validate_required_string(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<DatasetIssue>,
    description: &str,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(DatasetIssue {
            row,
            field: field.to_string(),
            code: "missing_required_field".to_string(),
            description: description.to_string(),
            expected: Some("non-empty string".to_string()),
            received: Some(String::new()),
        });
    }
    normalized
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}
