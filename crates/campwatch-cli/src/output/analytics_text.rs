use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let mut lines = vec![
        heading("Spending summary", data),
        String::new(),
        "Rollups:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Total spending:", format_total(data.get("total_spending"))),
            ("Unique donors:", format_count(data.get("unique_donors"))),
            ("Transactions:", format_count(data.get("transactions"))),
        ],
        2,
    ));
    lines.extend(coverage_lines(data));

    Ok(lines.join("\n"))
}

pub fn render_risk(data: &Value) -> io::Result<String> {
    let mut lines = vec![
        heading("Campaign risk", data),
        String::new(),
        "Metrics:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Donor concentration (HHI):", format_hhi(data.get("hhi"))),
            ("Spending spike (Z-score):", format_z(data.get("z_score"))),
            (
                "Overall risk level:",
                data.get("risk_level")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push("Rollups:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Total spending:", format_total(data.get("total_spending"))),
            ("Unique donors:", format_count(data.get("unique_donors"))),
            ("Transactions:", format_count(data.get("transactions"))),
        ],
        2,
    ));
    lines.extend(coverage_lines(data));

    Ok(lines.join("\n"))
}

pub fn render_parties(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("parties output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No parties matched the current filters.",
            "",
            "Loosen the filter flags, or run `campwatch dataset check <path>`",
            "to see which parties the dataset contains.",
        ]
        .join("\n"));
    }

    let mut lines = vec![
        heading(&format!("{} parties assessed", rows.len()), data),
        String::new(),
        "Per-party risk:".to_string(),
    ];

    let columns = [
        Column {
            name: "Party",
            align: Align::Left,
        },
        Column {
            name: "HHI",
            align: Align::Right,
        },
        Column {
            name: "Z-score",
            align: Align::Right,
        },
        Column {
            name: "Risk Level",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("party")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                format_hhi(row.get("hhi")),
                format_z(row.get("z_score")),
                row.get("risk_level")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));

    Ok(lines.join("\n"))
}

pub fn render_trend(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("trend output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No dated spending matched the current filters.",
            "",
            "Loosen the filter flags, or run `campwatch dataset check <path>`",
            "to confirm the dataset's date coverage.",
        ]
        .join("\n"));
    }

    let anomaly_count = rows
        .iter()
        .filter(|row| row.get("anomalous") == Some(&Value::Bool(true)))
        .count();

    let mut lines = vec![
        heading(
            &format!("{} spending days, {anomaly_count} anomalous", rows.len()),
            data,
        ),
        String::new(),
        "Daily totals:".to_string(),
    ];

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Total",
            align: Align::Right,
        },
        Column {
            name: "Z-score",
            align: Align::Right,
        },
        Column {
            name: "Anomaly",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            let anomalous = row.get("anomalous") == Some(&Value::Bool(true));
            vec![
                row.get("date")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                format_total(row.get("total")),
                format_z(row.get("z_score")),
                if anomalous { "yes" } else { "" }.to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    lines.extend(coverage_lines(data));

    Ok(lines.join("\n"))
}

fn heading(subject: &str, data: &Value) -> String {
    let from = data.get("from").and_then(Value::as_str);
    let to = data.get("to").and_then(Value::as_str);

    match (from, to) {
        (Some(start), Some(end)) => format!("{subject} from {start} to {end}."),
        (Some(start), None) => format!("{subject} from {start} onward."),
        (None, Some(end)) => format!("{subject} up to {end}."),
        (None, None) => format!("{subject} across the full dataset."),
    }
}

fn coverage_lines(data: &Value) -> Vec<String> {
    let Some(range_hint) = data.get("data_range_hint") else {
        return Vec::new();
    };

    let earliest = range_hint.get("earliest").and_then(Value::as_str);
    let latest = range_hint.get("latest").and_then(Value::as_str);
    if earliest.is_none() && latest.is_none() {
        return Vec::new();
    }

    vec![
        String::new(),
        "Summary:".to_string(),
        format!(
            "  Data covers:  {} to {}",
            earliest.unwrap_or("unknown"),
            latest.unwrap_or("unknown")
        ),
    ]
}

fn format_hhi(value: Option<&Value>) -> String {
    let number = value.and_then(Value::as_f64).unwrap_or(0.0);
    format!("{number:.4}")
}

fn format_z(value: Option<&Value>) -> String {
    let number = value.and_then(Value::as_f64).unwrap_or(0.0);
    format!("{number:.2}")
}

fn format_total(value: Option<&Value>) -> String {
    let number = value.and_then(Value::as_f64).unwrap_or(0.0);
    format!("{number:.2}")
}

fn format_count(value: Option<&Value>) -> String {
    value.and_then(Value::as_i64).unwrap_or(0).to_string()
}
