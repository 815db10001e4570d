use std::ops::{Deref, DerefMut};

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// Core party data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCore {
    pub name: String,
    /// The party's ballot symbol, e.g. "Lotus".
    pub symbol: String,
}

/// A party without an ID.
pub type NewParty = PartyCore;

impl NewParty {
    /// Insert as a new row, returning the generated ID.
    pub fn insert(&self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO parties (name, symbol) VALUES (?1, ?2)",
            params![self.name, self.symbol],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every field of the party with the given ID.
    pub fn replace(&self, conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE parties SET name = ?1, symbol = ?2 WHERE id = ?3",
            params![self.name, self.symbol, id],
        )?;
        Ok(())
    }
}

/// A party from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    #[serde(flatten)]
    pub party: PartyCore,
}

impl Party {
    /// Insert keeping the existing ID.
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO parties (id, name, symbol) VALUES (?1, ?2, ?3)",
            params![self.id, self.name, self.symbol],
        )?;
        Ok(())
    }
}

impl Deref for Party {
    type Target = PartyCore;

    fn deref(&self) -> &Self::Target {
        &self.party
    }
}

impl DerefMut for Party {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.party
    }
}

impl SqlTable for Party {
    const NAME: &'static str = "parties";
    const COLUMNS: &'static str = "id, name, symbol";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            party: PartyCore {
                name: row.get(1)?,
                symbol: row.get(2)?,
            },
        })
    }
}

/// A party as listed, with the number of candidates standing for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyListing {
    #[serde(flatten)]
    pub party: Party,
    pub candidate_count: i64,
}

impl PartyListing {
    pub fn list(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT p.id, p.name, p.symbol, COUNT(c.id)
             FROM parties p
             LEFT JOIN candidates c ON p.id = c.party_id
             GROUP BY p.id
             ORDER BY p.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Self {
                    party: Party::from_row(row)?,
                    candidate_count: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
