use std::io;

use serde_json::Value;

use super::format;

pub fn render_dataset_check(data: &Value) -> io::Result<String> {
    let summary = data
        .get("summary")
        .ok_or_else(|| io::Error::other("dataset check output requires a summary"))?;

    let rows_loaded = summary.get("rows_loaded").and_then(Value::as_i64).unwrap_or(0);
    let mut lines = vec![
        format!("Dataset OK: {rows_loaded} rows loaded."),
        String::new(),
        "Rows:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Rows read:", count(summary.get("rows_read"))),
            ("Rows loaded:", count(summary.get("rows_loaded"))),
            ("Amounts coerced:", count(summary.get("amounts_coerced"))),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Coverage:".to_string());
    let range = data.get("data_range");
    let earliest = range
        .and_then(|value| value.get("earliest"))
        .and_then(Value::as_str)
        .unwrap_or("none");
    let latest = range
        .and_then(|value| value.get("latest"))
        .and_then(Value::as_str)
        .unwrap_or("none");
    lines.extend(format::key_value_rows(
        &[
            ("Data covers:", format!("{earliest} to {latest}")),
            ("Parties:", joined_list(data.get("parties"))),
            ("Regions:", joined_list(data.get("regions"))),
            ("Donors:", count(data.get("donor_count"))),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

fn count(value: Option<&Value>) -> String {
    value.and_then(Value::as_i64).unwrap_or(0).to_string()
}

fn joined_list(value: Option<&Value>) -> String {
    let entries = value
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<&str>>()
        })
        .unwrap_or_default();

    if entries.is_empty() {
        return "none".to_string();
    }
    entries.join(", ")
}
