use std::collections::BTreeMap;

use crate::analytics::risk::{RiskAssessment, assess};
use crate::store::Transaction;

pub const REPORT_FILE_NAME: &str = "campaign_risk_report.txt";
pub const REPORT_MEDIA_TYPE: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct PartyRisk {
    pub party: String,
    pub assessment: RiskAssessment,
}

/// One row per distinct party present in the filtered set, each assessed
/// over that party's transactions alone.
pub fn party_breakdown(rows: &[Transaction]) -> Vec<PartyRisk> {
    let mut by_party: BTreeMap<&str, Vec<Transaction>> = BTreeMap::new();
    for row in rows {
        by_party
            .entry(row.party.as_str())
            .or_default()
            .push(row.clone());
    }

    by_party
        .into_iter()
        .map(|(party, party_rows)| PartyRisk {
            party: party.to_string(),
            assessment: assess(&party_rows),
        })
        .collect()
}

/// The downloadable plain-text narrative. Layout is a published contract;
/// keep it byte-stable.
pub fn render_report_body(assessment: &RiskAssessment) -> String {
    format!(
        "Campaign Risk Assessment:\n\
         \n\
         - Donor Concentration (HHI): {hhi}\n\
         - Spending Spike (Z-score): {z_score}\n\
         - Overall Risk Level: {level}\n\
         \n\
         Interpretation:\n\
         Higher HHI indicates funding concentration among few donors.\n\
         Z-score above 2 suggests abnormal spending spike.\n",
        hhi = assessment.hhi,
        z_score = assessment.z_score,
        level = assessment.level.as_str(),
    )
}
