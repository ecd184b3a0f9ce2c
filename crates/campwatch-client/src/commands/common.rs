use std::collections::BTreeSet;

use crate::ClientResult;
use crate::analytics::date::{build_date_bounds, format_iso_date};
use crate::analytics::filter::FilterSpec;
use crate::contracts::types::{DataRange, DataRangeHint};

/// Raw filter selections as they arrive from the presentation layer. Empty
/// vectors mean "no flag given", which defaults the dimension to the full
/// domain.
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub parties: Vec<String>,
    pub regions: Vec<String>,
    pub donors: Vec<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub(crate) fn build_filter_spec(args: &FilterArgs, command: &str) -> ClientResult<FilterSpec> {
    let bounds = build_date_bounds(args.from.as_deref(), args.to.as_deref(), command)?;

    Ok(FilterSpec {
        parties: selection(&args.parties),
        regions: selection(&args.regions),
        donors: selection(&args.donors),
        from: bounds.from,
        to: bounds.to,
    })
}

pub(crate) fn bound_strings(filter: &FilterSpec) -> (Option<String>, Option<String>) {
    (
        filter.from.as_ref().map(format_iso_date),
        filter.to.as_ref().map(format_iso_date),
    )
}

pub fn data_range_hint(data_range: &DataRange) -> DataRangeHint {
    DataRangeHint {
        earliest: data_range.earliest.clone(),
        latest: data_range.latest.clone(),
    }
}

fn selection(values: &[String]) -> Option<BTreeSet<String>> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::{FilterArgs, build_filter_spec};

    #[test]
    fn absent_flags_leave_every_dimension_inactive() {
        let spec = build_filter_spec(&FilterArgs::default(), "risk");
        assert!(spec.is_ok());
        if let Ok(spec) = spec {
            assert!(spec.parties.is_none());
            assert!(spec.regions.is_none());
            assert!(spec.donors.is_none());
            assert!(spec.from.is_none());
            assert!(spec.to.is_none());
        }
    }

    #[test]
    fn repeated_selections_become_a_set() {
        let args = FilterArgs {
            parties: vec!["P1".to_string(), "P2".to_string(), "P1".to_string()],
            ..FilterArgs::default()
        };

        let spec = build_filter_spec(&args, "risk");
        assert!(spec.is_ok());
        if let Ok(spec) = spec {
            assert_eq!(spec.parties.map(|set| set.len()), Some(2));
        }
    }

    #[test]
    fn inverted_date_bounds_are_rejected() {
        let args = FilterArgs {
            from: Some("2024-02-01".to_string()),
            to: Some("2024-01-01".to_string()),
            ..FilterArgs::default()
        };

        assert!(build_filter_spec(&args, "risk").is_err());
    }
}
