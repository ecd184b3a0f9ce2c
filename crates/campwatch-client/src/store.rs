use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::contracts::types::DataRange;

#[derive(Debug, Clone)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub donor: String,
    pub party: String,
    pub region: String,
}

/// Sole owner of the canonical contribution records for one invocation.
/// Built once by the dataset loader; read-only afterwards. Every filtered
/// view is an owned copy with no back-reference to the store.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    rows: Vec<Transaction>,
}

impl TransactionStore {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn parties(&self) -> BTreeSet<String> {
        self.rows.iter().map(|row| row.party.clone()).collect()
    }

    pub fn regions(&self) -> BTreeSet<String> {
        self.rows.iter().map(|row| row.region.clone()).collect()
    }

    pub fn donors(&self) -> BTreeSet<String> {
        self.rows.iter().map(|row| row.donor.clone()).collect()
    }

    pub fn date_range(&self) -> DataRange {
        let earliest = self.rows.iter().map(|row| row.date).min();
        let latest = self.rows.iter().map(|row| row.date).max();
        DataRange {
            earliest: earliest.map(|date| date.format("%Y-%m-%d").to_string()),
            latest: latest.map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Transaction, TransactionStore};

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

    #[test]
    fn store_reports_distinct_domains_sorted() {
        let store = TransactionStore::from_rows(vec![
            row("2024-01-02", 100.0, "D2", "P2", "North"),
            row("2024-01-01", 50.0, "D1", "P1", "South"),
            row("2024-01-03", 25.0, "D1", "P1", "North"),
        ]);

        let parties = store.parties().into_iter().collect::<Vec<String>>();
        assert_eq!(parties, vec!["P1".to_string(), "P2".to_string()]);
        assert_eq!(store.donors().len(), 2);
        assert_eq!(store.regions().len(), 2);
    }

    #[test]
    fn date_range_spans_earliest_to_latest() {
        let store = TransactionStore::from_rows(vec![
            row("2024-01-02", 100.0, "D2", "P2", "North"),
            row("2024-01-01", 50.0, "D1", "P1", "South"),
        ]);

        let range = store.date_range();
        assert_eq!(range.earliest, Some("2024-01-01".to_string()));
        assert_eq!(range.latest, Some("2024-01-02".to_string()));
    }

    #[test]
    fn empty_store_has_open_date_range() {
        let store = TransactionStore::from_rows(Vec::new());
        let range = store.date_range();
        assert!(range.earliest.is_none());
        assert!(range.latest.is_none());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
