use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// Core election data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionCore {
    /// Expected number of voters.
    pub voters: i64,
    pub participants: i64,
    pub result_date: NaiveDate,
    /// Free-form ruling code; not checked against any fixed set.
    pub ruling: String,
    pub authority_id: i64,
}

/// An election without an ID.
pub type NewElection = ElectionCore;

impl NewElection {
    /// Insert as a new row, returning the generated ID.
    pub fn insert(&self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO elections (voters, participants, result_date, ruling, authority_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.voters,
                self.participants,
                self.result_date,
                self.ruling,
                self.authority_id
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every field of the election with the given ID.
    pub fn replace(&self, conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE elections
             SET voters = ?1, participants = ?2, result_date = ?3, ruling = ?4, authority_id = ?5
             WHERE id = ?6",
            params![
                self.voters,
                self.participants,
                self.result_date,
                self.ruling,
                self.authority_id,
                id
            ],
        )?;
        Ok(())
    }
}

/// An election from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub id: i64,
    #[serde(flatten)]
    pub election: ElectionCore,
}

impl Election {
    /// Insert keeping the existing ID.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO elections (id, voters, participants, result_date, ruling, authority_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                self.id,
                self.voters,
                self.participants,
                self.result_date,
                self.ruling,
                self.authority_id
            ],
        )?;
        Ok(())
    }
}

impl Deref for Election {
    type Target = ElectionCore;

    fn deref(&self) -> &Self::Target {
        &self.election
    }
}

impl DerefMut for Election {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.election
    }
}

impl SqlTable for Election {
    const NAME: &'static str = "elections";
    const COLUMNS: &'static str = "id, voters, participants, result_date, ruling, authority_id";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            election: ElectionCore {
                voters: row.get(1)?,
                participants: row.get(2)?,
                result_date: row.get(3)?,
                ruling: row.get(4)?,
                authority_id: row.get(5)?,
            },
        })
    }
}

/// An election as listed, with the name of its authority if that still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionListing {
    #[serde(flatten)]
    pub election: Election,
    pub authority_name: Option<String>,
}

impl ElectionListing {
    pub fn list(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT e.id, e.voters, e.participants, e.result_date, e.ruling, e.authority_id, a.name
             FROM elections e
             LEFT JOIN authorities a ON e.authority_id = a.id
             ORDER BY e.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Self {
                    election: Election::from_row(row)?,
                    authority_name: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
