use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::store::Transaction;

pub fn totals_by_donor(rows: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.donor.clone()).or_insert(0.0) += row.amount;
    }
    totals
}

pub fn totals_by_party(rows: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.party.clone()).or_insert(0.0) += row.amount;
    }
    totals
}

/// Per-date totals, keyed chronologically. Spike detection relies on the
/// iteration order of this map.
pub fn totals_by_date(rows: &[Transaction]) -> BTreeMap<NaiveDate, f64> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.date).or_insert(0.0) += row.amount;
    }
    totals
}

pub fn total_spending(rows: &[Transaction]) -> f64 {
    rows.iter().map(|row| row.amount).sum()
}

pub fn unique_donors(rows: &[Transaction]) -> usize {
    rows.iter()
        .map(|row| row.donor.as_str())
        .collect::<BTreeSet<&str>>()
        .len()
}
