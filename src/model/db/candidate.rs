use std::ops::{Deref, DerefMut};

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// Core candidate data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCore {
    pub name: String,
    pub party_id: i64,
    pub election_id: i64,
}

/// A candidate without an ID.
pub type NewCandidate = CandidateCore;

impl NewCandidate {
    /// Insert as a new row, returning the generated ID.
    pub fn insert(&self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO candidates (name, party_id, election_id) VALUES (?1, ?2, ?3)",
            params![self.name, self.party_id, self.election_id],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every field of the candidate with the given ID.
    pub fn replace(&self, conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE candidates SET name = ?1, party_id = ?2, election_id = ?3 WHERE id = ?4",
            params![self.name, self.party_id, self.election_id, id],
        )?;
        Ok(())
    }
}

/// A candidate from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    #[serde(flatten)]
    pub candidate: CandidateCore,
}

impl Candidate {
    /// Insert keeping the existing ID.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO candidates (id, name, party_id, election_id) VALUES (?1, ?2, ?3, ?4)",
            params![self.id, self.name, self.party_id, self.election_id],
        )?;
        Ok(())
    }
}

impl Deref for Candidate {
    type Target = CandidateCore;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}

impl DerefMut for Candidate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.candidate
    }
}

impl SqlTable for Candidate {
    const NAME: &'static str = "candidates";
    const COLUMNS: &'static str = "id, name, party_id, election_id";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            candidate: CandidateCore {
                name: row.get(1)?,
                party_id: row.get(2)?,
                election_id: row.get(3)?,
            },
        })
    }
}

/// A candidate as listed, with their party's name if the party still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateListing {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub party_name: Option<String>,
}

impl CandidateListing {
    pub fn list(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT c.id, c.name, c.party_id, c.election_id, p.name
             FROM candidates c
             LEFT JOIN parties p ON c.party_id = p.id
             ORDER BY c.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Self {
                    candidate: Candidate::from_row(row)?,
                    party_name: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl CandidateCore {
        pub fn example(party_id: i64, election_id: i64) -> Self {
            Self {
                name: "Asha".into(),
                party_id,
                election_id,
            }
        }
    }
}
