use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::store::{Transaction, TransactionStore};

/// Conjunctive filter over the four contribution dimensions.
///
/// `None` means the dimension is inactive (the caller selected the full
/// domain); `Some` holds an explicit selection, so `Some(empty)` excludes
/// every record. Date bounds are inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub parties: Option<BTreeSet<String>>,
    pub regions: Option<BTreeSet<String>>,
    pub donors: Option<BTreeSet<String>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FilterSpec {
    fn matches(&self, row: &Transaction) -> bool {
        if let Some(parties) = &self.parties
            && !parties.contains(&row.party)
        {
            return false;
        }
        if let Some(regions) = &self.regions
            && !regions.contains(&row.region)
        {
            return false;
        }
        if let Some(donors) = &self.donors
            && !donors.contains(&row.donor)
        {
            return false;
        }
        if let Some(from) = self.from
            && row.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && row.date > to
        {
            return false;
        }
        true
    }
}

pub fn apply_filter(store: &TransactionStore, filter: &FilterSpec) -> Vec<Transaction> {
    store
        .rows()
        .iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use crate::store::{Transaction, TransactionStore};

    use super::{FilterSpec, apply_filter};

    fn row(date: &str, amount: f64, donor: &str, party: &str, region: &str) -> Transaction {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .unwrap_or(NaiveDate::MIN);
        Transaction {
            date: parsed,
            amount,
            donor: donor.to_string(),
            party: party.to_string(),
            region: region.to_string(),
        }
    }

    fn sample_store() -> TransactionStore {
        TransactionStore::from_rows(vec![
            row("2024-01-01", 100.0, "D1", "P1", "North"),
            row("2024-01-02", 200.0, "D2", "P1", "South"),
            row("2024-01-03", 300.0, "D3", "P2", "North"),
            row("2024-01-04", 400.0, "D1", "P2", "South"),
        ])
    }

    fn selection(values: &[&str]) -> Option<BTreeSet<String>> {
        Some(values.iter().map(|value| (*value).to_string()).collect())
    }

    #[test]
    fn inactive_filter_keeps_every_row() {
        let filtered = apply_filter(&sample_store(), &FilterSpec::default());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let filter = FilterSpec {
            parties: selection(&["P1"]),
            regions: selection(&["North"]),
            ..FilterSpec::default()
        };

        let filtered = apply_filter(&sample_store(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].donor, "D1");
    }

    #[test]
    fn empty_selection_excludes_all_rows() {
        let filter = FilterSpec {
            donors: Some(BTreeSet::new()),
            ..FilterSpec::default()
        };

        let filtered = apply_filter(&sample_store(), &filter);
        assert!(filtered.is_empty());
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let filter = FilterSpec {
            from: NaiveDate::from_ymd_opt(2024, 1, 2),
            to: NaiveDate::from_ymd_opt(2024, 1, 3),
            ..FilterSpec::default()
        };

        let filtered = apply_filter(&sample_store(), &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].donor, "D2");
        assert_eq!(filtered[1].donor, "D3");
    }

    #[test]
    fn filtering_does_not_mutate_the_store() {
        let store = sample_store();
        let filter = FilterSpec {
            parties: selection(&["P1"]),
            ..FilterSpec::default()
        };

        let _ = apply_filter(&store, &filter);
        assert_eq!(store.len(), 4);
    }
}
