use chrono::NaiveDate;

use crate::analytics::aggregate::{totals_by_date, totals_by_donor};
use crate::store::Transaction;

/// Fixed policy thresholds. Compatibility requires these exact values.
pub const HHI_CONCENTRATION_THRESHOLD: f64 = 0.25;
pub const SPIKE_Z_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RiskAssessment {
    pub hhi: f64,
    pub z_score: f64,
    pub level: RiskLevel,
}

/// Herfindahl-Hirschman index of donor concentration: sum of squared donor
/// shares of total contributions. 1.0 means a single donor supplies all
/// funds; a zero total defines the index as 0 by policy.
pub fn calculate_hhi(rows: &[Transaction]) -> f64 {
    let donor_totals = totals_by_donor(rows);
    let total: f64 = donor_totals.values().sum();
    if total == 0.0 {
        return 0.0;
    }

    let hhi = donor_totals
        .values()
        .map(|donor_total| {
            let share = donor_total / total;
            share * share
        })
        .sum::<f64>();
    round_to(hhi, 4)
}

/// Z-score of the chronologically last date's total against the mean and
/// sample standard deviation of the per-date series. "Latest" is the maximum
/// date present in the filtered set, not wall-clock today.
pub fn detect_spike(rows: &[Transaction]) -> f64 {
    let daily = totals_by_date(rows);
    if daily.len() < 2 {
        return 0.0;
    }

    let values = daily.values().copied().collect::<Vec<f64>>();
    let Some(stats) = series_stats(&values) else {
        return 0.0;
    };
    let Some(latest) = values.last() else {
        return 0.0;
    };

    round_to((latest - stats.mean) / stats.std, 2)
}

/// Additive threshold rule, not a statistical model: one point for donor
/// concentration above 0.25, one for spike magnitude above 2.
pub fn classify_risk(hhi: f64, z_score: f64) -> RiskLevel {
    let mut score = 0;
    if hhi > HHI_CONCENTRATION_THRESHOLD {
        score += 1;
    }
    if z_score.abs() > SPIKE_Z_THRESHOLD {
        score += 1;
    }

    match score {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

pub fn assess(rows: &[Transaction]) -> RiskAssessment {
    let hhi = calculate_hhi(rows);
    let z_score = detect_spike(rows);
    RiskAssessment {
        hhi,
        z_score,
        level: classify_risk(hhi, z_score),
    }
}

#[derive(Debug, Clone)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub total: f64,
    pub z_score: f64,
    pub anomalous: bool,
}

/// Scores every date's total against the mean/std of the entire filtered
/// series. Distinct from `detect_spike`, which only evaluates the latest
/// date; both statistics are intentional.
pub fn score_date_series(rows: &[Transaction]) -> Vec<DatePoint> {
    let daily = totals_by_date(rows);
    let values = daily.values().copied().collect::<Vec<f64>>();
    let stats = if daily.len() < 2 {
        None
    } else {
        series_stats(&values)
    };

    daily
        .iter()
        .map(|(date, total)| {
            let z_score = match &stats {
                Some(stats) => round_to((total - stats.mean) / stats.std, 2),
                None => 0.0,
            };
            DatePoint {
                date: *date,
                total: *total,
                z_score,
                anomalous: z_score.abs() > SPIKE_Z_THRESHOLD,
            }
        })
        .collect()
}

struct SeriesStats {
    mean: f64,
    std: f64,
}

// Sample standard deviation (divide by N-1). Returns None when the series is
// degenerate: fewer than 2 points, identical totals, or zero spread.
fn series_stats(values: &[f64]) -> Option<SeriesStats> {
    let count = values.len();
    if count < 2 {
        return None;
    }
    let first = values[0];
    if values.iter().all(|value| *value == first) {
        return None;
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = values
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / (count as f64 - 1.0);
    let std = variance.sqrt();
    if std == 0.0 {
        return None;
    }

    Some(SeriesStats { mean, std })
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(2);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
