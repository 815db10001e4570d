use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rusqlite::Connection;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::sqlite::{select_all, SqlTable};

use super::{Candidate, Election, Party, Vote, Voter};

pub const INVALID_TABLE: &str = "Invalid table name";

/// The tables that may be dumped wholesale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportTable {
    Parties,
    Candidates,
    Voters,
    Elections,
    Votes,
}

impl ExportTable {
    pub const ALL: [ExportTable; 5] = [
        Self::Parties,
        Self::Candidates,
        Self::Voters,
        Self::Elections,
        Self::Votes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Parties => Party::NAME,
            Self::Candidates => Candidate::NAME,
            Self::Voters => Voter::NAME,
            Self::Elections => Election::NAME,
            Self::Votes => Vote::NAME,
        }
    }

    /// Every row of the table, exactly as stored.
    pub fn dump(self, conn: &Connection) -> Result<TableDump> {
        Ok(match self {
            Self::Parties => TableDump::Parties(select_all(conn)?),
            Self::Candidates => TableDump::Candidates(select_all(conn)?),
            Self::Voters => TableDump::Voters(select_all(conn)?),
            Self::Elections => TableDump::Elections(select_all(conn)?),
            Self::Votes => TableDump::Votes(select_all(conn)?),
        })
    }
}

impl FromStr for ExportTable {
    type Err = Error;

    /// Only the exact names on the allow-list are accepted.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == s)
            .ok_or_else(|| Error::bad_request(INVALID_TABLE))
    }
}

impl Display for ExportTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The rows of one exported table; serialises as a plain array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableDump {
    Parties(Vec<Party>),
    Candidates(Vec<Candidate>),
    Voters(Vec<Voter>),
    Elections(Vec<Election>),
    Votes(Vec<Vote>),
}

#[cfg(test)]
impl TableDump {
    fn len(&self) -> usize {
        match self {
            Self::Parties(rows) => rows.len(),
            Self::Candidates(rows) => rows.len(),
            Self::Voters(rows) => rows.len(),
            Self::Elections(rows) => rows.len(),
            Self::Votes(rows) => rows.len(),
        }
    }
}
