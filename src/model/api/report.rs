use serde::{Deserialize, Serialize};

/// The payload of one canned report, shaped as the dashboard expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Report 1.
    TopParty(TopParty),
    /// Report 2.
    VoterChange(VoterChange),
    /// Report 2 when either year has no data.
    Unavailable { error: String },
    /// Report 3.
    AuthorityHistory { authorities: Vec<AuthorityYears> },
    /// Report 4.
    NonVoters { non_voters: Vec<NonVoter> },
    /// Report 5.
    TopCandidates { top_candidates: Vec<CandidateVotes> },
    /// Report 6.
    Turnout { turnout: Vec<ElectionTurnout> },
    /// Any report number that doesn't exist.
    Empty {},
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopParty {
    pub party: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterChange {
    pub voters_2010: i64,
    pub voters_2015: i64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityYears {
    pub name: String,
    /// Distinct years in which this authority's voters voted, ascending.
    pub years: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonVoter {
    pub name: String,
    pub aadhaar: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVotes {
    pub name: String,
    pub vote_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionTurnout {
    pub id: i64,
    pub expected: i64,
    pub actual: i64,
    /// Percentage to two decimal places; `None` if no voters were expected.
    pub turnout: Option<f64>,
}
