use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::sqlite::SqlTable;

pub const ALREADY_VOTED: &str = "Voter has already voted in this election";

/// Core vote data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCore {
    pub candidate_id: i64,
    pub date: NaiveDate,
    pub election_id: i64,
    pub voter_id: i64,
}

/// A vote without an ID.
pub type NewVote = VoteCore;

impl NewVote {
    /// Record the vote, returning the generated ID.
    ///
    /// A voter gets one vote per election. The unique index on
    /// `(voter_id, election_id)` rejects the insert itself, so two racing
    /// submissions can never both succeed.
    pub fn insert(&self, conn: &Connection) -> Result<i64> {
        let result = conn.execute(
            "INSERT INTO votes (candidate_id, date, election_id, voter_id) VALUES (?1, ?2, ?3, ?4)",
            params![self.candidate_id, self.date, self.election_id, self.voter_id],
        );
        match result.map_err(Error::from) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(err) if err.is_unique_violation() => Err(Error::bad_request(ALREADY_VOTED)),
            Err(err) => Err(err),
        }
    }
}

/// A vote from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: i64,
    #[serde(flatten)]
    pub vote: VoteCore,
}

impl Vote {
    /// Insert keeping the existing ID.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO votes (id, candidate_id, date, election_id, voter_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.id,
                self.candidate_id,
                self.date,
                self.election_id,
                self.voter_id
            ],
        )?;
        Ok(())
    }
}

impl Deref for Vote {
    type Target = VoteCore;

    fn deref(&self) -> &Self::Target {
        &self.vote
    }
}

impl DerefMut for Vote {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vote
    }
}

impl SqlTable for Vote {
    const NAME: &'static str = "votes";
    const COLUMNS: &'static str = "id, candidate_id, date, election_id, voter_id";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            vote: VoteCore {
                candidate_id: row.get(1)?,
                date: row.get(2)?,
                election_id: row.get(3)?,
                voter_id: row.get(4)?,
            },
        })
    }
}

/// A vote as listed, with candidate and voter names where those rows still exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteListing {
    #[serde(flatten)]
    pub vote: Vote,
    pub candidate_name: Option<String>,
    pub voter_name: Option<String>,
}

impl VoteListing {
    pub fn list(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT v.id, v.candidate_id, v.date, v.election_id, v.voter_id, c.name, vo.name
             FROM votes v
             LEFT JOIN candidates c ON v.candidate_id = c.id
             LEFT JOIN voters vo ON v.voter_id = vo.id
             ORDER BY v.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Self {
                    vote: Vote::from_row(row)?,
                    candidate_name: row.get(5)?,
                    voter_name: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
