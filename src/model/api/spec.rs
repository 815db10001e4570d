//! Request bodies for creating and replacing records.
//!
//! Every field is required; a body missing one, or carrying one of the wrong
//! type, is rejected before any handler runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::db::{NewCandidate, NewElection, NewParty, NewVote, NewVoter};

/// A party specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySpec {
    pub name: String,
    pub symbol: String,
}

impl From<PartySpec> for NewParty {
    fn from(spec: PartySpec) -> Self {
        Self {
            name: spec.name,
            symbol: spec.symbol,
        }
    }
}

/// A candidate specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSpec {
    pub name: String,
    pub party_id: i64,
    pub election_id: i64,
}

impl From<CandidateSpec> for NewCandidate {
    fn from(spec: CandidateSpec) -> Self {
        Self {
            name: spec.name,
            party_id: spec.party_id,
            election_id: spec.election_id,
        }
    }
}

/// A voter registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterSpec {
    pub name: String,
    pub sex: String,
    pub authority_id: i64,
    pub aadhaar: i64,
}

impl From<VoterSpec> for NewVoter {
    fn from(spec: VoterSpec) -> Self {
        Self {
            name: spec.name,
            sex: spec.sex,
            authority_id: spec.authority_id,
            aadhaar: spec.aadhaar,
        }
    }
}

/// An election specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSpec {
    /// Expected number of voters.
    pub voters: i64,
    pub participants: i64,
    /// `YYYY-MM-DD`.
    pub result_date: NaiveDate,
    pub ruling: String,
    pub authority_id: i64,
}

impl From<ElectionSpec> for NewElection {
    fn from(spec: ElectionSpec) -> Self {
        Self {
            voters: spec.voters,
            participants: spec.participants,
            result_date: spec.result_date,
            ruling: spec.ruling,
            authority_id: spec.authority_id,
        }
    }
}

/// A ballot cast by a voter for a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSpec {
    pub candidate_id: i64,
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub election_id: i64,
    pub voter_id: i64,
}

impl From<VoteSpec> for NewVote {
    fn from(spec: VoteSpec) -> Self {
        Self {
            candidate_id: spec.candidate_id,
            date: spec.date,
            election_id: spec.election_id,
            voter_id: spec.voter_id,
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl PartySpec {
        pub fn example() -> Self {
            Self {
                name: "Green".into(),
                symbol: "Leaf".into(),
            }
        }
    }

    impl CandidateSpec {
        pub fn example() -> Self {
            Self {
                name: "Asha".into(),
                party_id: 1,
                election_id: 101,
            }
        }
    }

    impl VoterSpec {
        pub fn example() -> Self {
            Self {
                name: "Meera".into(),
                sex: "F".into(),
                authority_id: 10,
                aadhaar: 4242,
            }
        }
    }

    impl ElectionSpec {
        pub fn example() -> Self {
            Self {
                voters: 1000,
                participants: 4,
                result_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
                ruling: "5".into(),
                authority_id: 10,
            }
        }
    }

    impl VoteSpec {
        pub fn example(voter_id: i64, election_id: i64) -> Self {
            Self {
                candidate_id: 5,
                date: NaiveDate::from_ymd_opt(2024, 4, 19).unwrap(),
                election_id,
                voter_id,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn bodies_use_camel_case() {
        let spec: CandidateSpec =
            serde_json::from_str(r#"{"name": "Asha", "partyId": 4, "electionId": 103}"#).unwrap();
        assert_eq!(
            spec,
            CandidateSpec {
                name: "Asha".into(),
                party_id: 4,
                election_id: 103
            }
        );

        let spec: ElectionSpec = serde_json::from_str(
            r#"{"voters": 10, "participants": 2, "resultDate": "2020-02-29", "ruling": "4", "authorityId": 30}"#,
        )
        .unwrap();
        assert_eq!(
            spec.result_date,
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn missing_or_mistyped_fields_are_rejected() {
        assert!(serde_json::from_str::<PartySpec>(r#"{"name": "Solo"}"#).is_err());
        assert!(serde_json::from_str::<VoterSpec>(
            r#"{"name": "A", "sex": "F", "authorityId": "ten", "aadhaar": 1}"#
        )
        .is_err());
        assert!(serde_json::from_str::<VoteSpec>(
            r#"{"candidateId": 1, "date": "2021-02-30", "electionId": 1, "voterId": 1}"#
        )
        .is_err());
    }
}
