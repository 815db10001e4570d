use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_parties: i64,
    pub total_candidates: i64,
    pub total_voters: i64,
    pub total_elections: i64,
    pub chart_data: ChartData,
}

/// Candidates per party, as parallel label/value series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}
