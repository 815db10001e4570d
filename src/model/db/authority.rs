use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// An administrative body that runs elections and registers voters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub id: i64,
    pub name: String,
    pub chief: String,
    /// "Y" or "N"; stored as given.
    pub experience: String,
    pub established: NaiveDate,
}

impl Authority {
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO authorities (id, name, chief, experience, established)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.id,
                self.name,
                self.chief,
                self.experience,
                self.established
            ],
        )?;
        Ok(())
    }
}

impl SqlTable for Authority {
    const NAME: &'static str = "authorities";
    const COLUMNS: &'static str = "id, name, chief, experience, established";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            chief: row.get(2)?,
            experience: row.get(3)?,
            established: row.get(4)?,
        })
    }
}
