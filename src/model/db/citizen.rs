use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::sqlite::SqlTable;

/// An entry in the population registry. Not every citizen is a registered voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    pub aadhaar: i64,
    pub name: String,
    pub dob: NaiveDate,
    pub age: i64,
    pub gender: String,
}

impl Citizen {
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO citizens (aadhaar, name, dob, age, gender) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![self.aadhaar, self.name, self.dob, self.age, self.gender],
        )?;
        Ok(())
    }
}

impl SqlTable for Citizen {
    const NAME: &'static str = "citizens";
    const KEY: &'static str = "aadhaar";
    const COLUMNS: &'static str = "aadhaar, name, dob, age, gender";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            aadhaar: row.get(0)?,
            name: row.get(1)?,
            dob: row.get(2)?,
            age: row.get(3)?,
            gender: row.get(4)?,
        })
    }
}
