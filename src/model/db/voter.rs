use std::ops::{Deref, DerefMut};

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// Core voter registration data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterCore {
    pub name: String,
    pub sex: String,
    pub authority_id: i64,
    /// National ID number. Neither unique nor checked against the citizen registry.
    pub aadhaar: i64,
}

/// A voter without an ID.
pub type NewVoter = VoterCore;

impl NewVoter {
    /// Insert as a new row, returning the generated ID.
    pub fn insert(&self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO voters (name, sex, authority_id, aadhaar) VALUES (?1, ?2, ?3, ?4)",
            params![self.name, self.sex, self.authority_id, self.aadhaar],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every field of the voter with the given ID.
    pub fn replace(&self, conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE voters SET name = ?1, sex = ?2, authority_id = ?3, aadhaar = ?4 WHERE id = ?5",
            params![self.name, self.sex, self.authority_id, self.aadhaar, id],
        )?;
        Ok(())
    }
}

/// A registered voter from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: i64,
    #[serde(flatten)]
    pub voter: VoterCore,
}

impl Voter {
    /// Insert keeping the existing ID.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO voters (id, name, sex, authority_id, aadhaar) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![self.id, self.name, self.sex, self.authority_id, self.aadhaar],
        )?;
        Ok(())
    }
}

impl Deref for Voter {
    type Target = VoterCore;

    fn deref(&self) -> &Self::Target {
        &self.voter
    }
}

impl DerefMut for Voter {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.voter
    }
}

impl SqlTable for Voter {
    const NAME: &'static str = "voters";
    const COLUMNS: &'static str = "id, name, sex, authority_id, aadhaar";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            voter: VoterCore {
                name: row.get(1)?,
                sex: row.get(2)?,
                authority_id: row.get(3)?,
                aadhaar: row.get(4)?,
            },
        })
    }
}
