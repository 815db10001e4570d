//! The six canned reports. Aggregation happens in SQL; Rust only reshapes rows.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::model::api::report::{
    AuthorityYears, CandidateVotes, ElectionTurnout, NonVoter, Report, TopParty, VoterChange,
};

/// Votes on or after this date count towards report 1.
fn top_party_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1989, 1, 1).expect("valid calendar date")
}

impl Report {
    /// Run report `number`. Numbers without a report give [`Report::Empty`].
    pub fn run(conn: &Connection, number: i64) -> Result<Self> {
        Ok(match number {
            1 => Self::TopParty(top_party_since(conn, top_party_cutoff())?),
            2 => match expected_voters_in_year(conn, 2010)?
                .zip(expected_voters_in_year(conn, 2015)?)
                .and_then(|(earlier, later)| VoterChange::between(earlier, later))
            {
                Some(change) => Self::VoterChange(change),
                None => Self::Unavailable {
                    error: "Data not available".to_string(),
                },
            },
            3 => Self::AuthorityHistory {
                authorities: authority_vote_years(conn)?,
            },
            4 => Self::NonVoters {
                non_voters: non_voting_citizens(conn)?,
            },
            5 => Self::TopCandidates {
                top_candidates: top_candidates(conn, 3)?,
            },
            6 => Self::Turnout {
                turnout: election_turnout(conn)?,
            },
            _ => Self::Empty {},
        })
    }
}

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl VoterChange {
    /// Percentage change in expected voters. `None` if either count is zero.
    pub fn between(voters_2010: i64, voters_2015: i64) -> Option<Self> {
        if voters_2010 == 0 || voters_2015 == 0 {
            return None;
        }
        let change = (voters_2015 - voters_2010) as f64 / voters_2010 as f64 * 100.0;
        Some(Self {
            voters_2010,
            voters_2015,
            change_percent: round2(change),
        })
    }
}

/// The party whose candidates drew the most votes since `cutoff`.
/// Ties go to the lowest party ID.
fn top_party_since(conn: &Connection, cutoff: NaiveDate) -> Result<TopParty> {
    let top = conn
        .query_row(
            "SELECT p.name, COUNT(v.id) AS vote_count
             FROM parties p
             JOIN candidates c ON p.id = c.party_id
             JOIN votes v ON c.id = v.candidate_id
             WHERE v.date >= ?1
             GROUP BY p.id, p.name
             ORDER BY vote_count DESC, p.id
             LIMIT 1",
            [cutoff],
            |row| {
                Ok(TopParty {
                    party: row.get(0)?,
                    count: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(top.unwrap_or_else(|| TopParty {
        party: "No data".to_string(),
        count: 0,
    }))
}

/// Expected voters of the election behind the earliest recorded vote cast in `year`.
fn expected_voters_in_year(conn: &Connection, year: i32) -> Result<Option<i64>> {
    let voters = conn
        .query_row(
            "SELECT e.voters
             FROM elections e
             JOIN votes v ON e.id = v.election_id
             WHERE strftime('%Y', v.date) = ?1
             ORDER BY v.id
             LIMIT 1",
            [format!("{year:04}")],
            |row| row.get(0),
        )
        .optional()?;
    Ok(voters)
}

/// Per authority, the distinct years in which its voters cast votes.
/// Authorities whose voters never voted are left out.
fn authority_vote_years(conn: &Connection) -> Result<Vec<AuthorityYears>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT a.id, a.name, strftime('%Y', v.date) AS year
         FROM authorities a
         JOIN voters vo ON a.id = vo.authority_id
         JOIN votes v ON vo.id = v.voter_id
         WHERE strftime('%Y', v.date) IS NOT NULL
         ORDER BY a.id, year",
    )?;
    let mut rows = stmt.query([])?;

    let mut history: Vec<(i64, AuthorityYears)> = Vec::new();
    while let Some(row) = rows.next()? {
        let id: i64 = row.get(0)?;
        let year: String = row.get(2)?;
        match history.last_mut() {
            Some((last_id, entry)) if *last_id == id => entry.years.push(year),
            _ => history.push((
                id,
                AuthorityYears {
                    name: row.get(1)?,
                    years: vec![year],
                },
            )),
        }
    }
    Ok(history.into_iter().map(|(_, entry)| entry).collect())
}

/// Citizens whose national ID number is not on the voter roll.
fn non_voting_citizens(conn: &Connection) -> Result<Vec<NonVoter>> {
    let mut stmt = conn.prepare(
        "SELECT c.name, c.aadhaar
         FROM citizens c
         WHERE c.aadhaar NOT IN (SELECT aadhaar FROM voters)
         ORDER BY c.aadhaar",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(NonVoter {
                name: row.get(0)?,
                aadhaar: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// The `limit` candidates with the most votes. Ties go to the lowest candidate ID.
fn top_candidates(conn: &Connection, limit: i64) -> Result<Vec<CandidateVotes>> {
    let mut stmt = conn.prepare(
        "SELECT c.name, COUNT(v.id) AS vote_count
         FROM candidates c
         LEFT JOIN votes v ON c.id = v.candidate_id
         GROUP BY c.id, c.name
         ORDER BY vote_count DESC, c.id
         LIMIT ?1",
    )?;
    let rows = stmt
        .query_map([limit], |row| {
            Ok(CandidateVotes {
                name: row.get(0)?,
                vote_count: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Votes cast against expected voters, per election.
fn election_turnout(conn: &Connection) -> Result<Vec<ElectionTurnout>> {
    // SQLite yields NULL when dividing by zero expected voters.
    let mut stmt = conn.prepare(
        "SELECT e.id, e.voters AS expected, COUNT(v.id) AS actual,
                ROUND(COUNT(v.id) * 100.0 / e.voters, 2) AS turnout
         FROM elections e
         LEFT JOIN votes v ON e.id = v.election_id
         GROUP BY e.id, e.voters
         ORDER BY e.id",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ElectionTurnout {
                id: row.get(0)?,
                expected: row.get(1)?,
                actual: row.get(2)?,
                turnout: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
