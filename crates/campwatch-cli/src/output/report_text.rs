use std::io;

use serde_json::Value;

pub fn render_report(data: &Value) -> io::Result<String> {
    let body = data
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("report output requires a body"))?;

    let mut text = body.trim_end_matches('\n').to_string();
    if let Some(written_to) = data.get("written_to").and_then(Value::as_str) {
        text.push_str("\n\n");
        text.push_str(&format!("Saved to: {written_to}"));
    }

    Ok(text)
}
