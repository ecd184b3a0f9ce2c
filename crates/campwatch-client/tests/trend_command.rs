use std::fs;
use std::path::{Path, PathBuf};

use campwatch_client::commands::common::FilterArgs;
use campwatch_client::commands::risk::{self, RiskRunOptions};
use campwatch_client::commands::trend::{self, TrendRunOptions};
use serde_json::Value;
use tempfile::{Builder, TempDir};

fn temp_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir_in("/tmp")
}

fn write_fixture_csv(base: &Path, name: &str, rows: &[&str]) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    let mut body = String::from("date,amount,donor,party,region\n");
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(&path, body)?;
    Ok(path)
}

fn trend_rows(path: &Path, filter: FilterArgs) -> Vec<Value> {
    let response = trend::run_with_options(TrendRunOptions {
        path: Some(path.display().to_string()),
        filter,
        stdin_override: None,
    });
    assert!(response.is_ok());
    if let Ok(success) = response {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value["data"]["rows"].as_array().cloned().unwrap_or_default();
        }
    }
    Vec::new()
}

fn mid_series_spike_rows() -> Vec<&'static str> {
    vec![
        "2024-01-01,100,D1,P1,R1",
        "2024-01-02,100,D2,P1,R1",
        "2024-01-03,100,D3,P1,R1",
        "2024-01-04,100,D4,P1,R1",
        "2024-01-05,100,D5,P1,R1",
        "2024-01-06,100,D6,P1,R1",
        "2024-01-07,100,D7,P1,R1",
        "2024-01-08,100,D8,P1,R1",
        "2024-01-09,2000,D9,P1,R1",
        "2024-01-10,100,D10,P1,R1",
    ]
}

#[test]
fn trend_rows_are_chronological_date_totals() {
    let dir = temp_dir("campwatch-trend");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let fixture = write_fixture_csv(
            dir.path(),
            "contributions.csv",
            &[
                "2024-01-03,300,D3,P1,R1",
                "2024-01-01,60,D1,P1,R1",
                "2024-01-01,40,D2,P1,R1",
                "2024-01-02,200,D2,P1,R1",
            ],
        );
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let rows = trend_rows(&path, FilterArgs::default());
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[0]["date"], "2024-01-01");
            assert_eq!(rows[0]["total"], 100.0);
            assert_eq!(rows[1]["date"], "2024-01-02");
            assert_eq!(rows[2]["date"], "2024-01-03");
            assert_eq!(rows[2]["total"], 300.0);
        }
    }
}

#[test]
fn mid_series_spike_is_flagged_by_trend_but_not_by_the_latest_date_score() {
    let dir = temp_dir("campwatch-trend-spike");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let fixture = write_fixture_csv(dir.path(), "contributions.csv", &mid_series_spike_rows());
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let rows = trend_rows(&path, FilterArgs::default());
            let flagged = rows
                .iter()
                .filter(|row| row["anomalous"] == Value::Bool(true))
                .collect::<Vec<&Value>>();
            assert_eq!(flagged.len(), 1);
            assert_eq!(flagged[0]["date"], "2024-01-09");

            // The same dataset's latest-day score stays below the spike
            // threshold, so the two statistics must not be conflated.
            let risk_response = risk::run_with_options(RiskRunOptions {
                path: Some(path.display().to_string()),
                filter: FilterArgs::default(),
                stdin_override: None,
            });
            assert!(risk_response.is_ok());
            if let Ok(success) = risk_response {
                let payload = serde_json::to_value(success);
                assert!(payload.is_ok());
                if let Ok(value) = payload {
                    let z = value["data"]["z_score"].as_f64().unwrap_or(f64::MAX);
                    assert!(z.abs() < 2.0);
                }
            }
        }
    }
}

#[test]
fn flat_series_has_no_anomalies() {
    let dir = temp_dir("campwatch-trend-flat");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let fixture = write_fixture_csv(
            dir.path(),
            "contributions.csv",
            &[
                "2024-01-01,250,D1,P1,R1",
                "2024-01-02,250,D2,P1,R1",
                "2024-01-03,250,D3,P1,R1",
            ],
        );
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let rows = trend_rows(&path, FilterArgs::default());
            assert_eq!(rows.len(), 3);
            for row in rows {
                assert_eq!(row["z_score"], 0.0);
                assert_eq!(row["anomalous"], Value::Bool(false));
            }
        }
    }
}
