use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DataRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataRangeHint {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows_read: i64,
    pub rows_loaded: i64,
    pub rows_invalid: i64,
    pub amounts_coerced: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetCheckData {
    pub path: Option<String>,
    pub summary: DatasetSummary,
    pub data_range: DataRange,
    pub parties: Vec<String>,
    pub regions: Vec<String>,
    pub donor_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub total_spending: f64,
    pub unique_donors: i64,
    pub transactions: i64,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub hhi: f64,
    pub z_score: f64,
    pub risk_level: String,
    pub total_spending: f64,
    pub unique_donors: i64,
    pub transactions: i64,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyRiskRow {
    pub party: String,
    pub hhi: f64,
    pub z_score: f64,
    pub risk_level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartiesData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub rows: Vec<PartyRiskRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub total: f64,
    pub z_score: f64,
    pub anomalous: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub rows: Vec<TrendPoint>,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub file_name: String,
    pub media_type: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
    pub hhi: f64,
    pub z_score: f64,
    pub risk_level: String,
}
