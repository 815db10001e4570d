use rusqlite::Connection;

use crate::error::Result;
use crate::model::api::dashboard::{ChartData, Dashboard};
use crate::model::sqlite::count;

use super::{Candidate, Election, Party, Voter};

impl Dashboard {
    /// Gather table totals and the candidates-per-party chart.
    pub fn gather(conn: &Connection) -> Result<Self> {
        Ok(Self {
            total_parties: count::<Party>(conn)?,
            total_candidates: count::<Candidate>(conn)?,
            total_voters: count::<Voter>(conn)?,
            total_elections: count::<Election>(conn)?,
            chart_data: ChartData::candidates_per_party(conn)?,
        })
    }
}

impl ChartData {
    /// Parties with no candidates are included with a count of zero.
    pub fn candidates_per_party(conn: &Connection) -> Result<Self> {
        let mut stmt = conn.prepare(
            "SELECT p.name, COUNT(c.id)
             FROM parties p
             LEFT JOIN candidates c ON p.id = c.party_id
             GROUP BY p.id, p.name
             ORDER BY p.id",
        )?;
        let mut rows = stmt.query([])?;
        let mut chart = Self::default();
        while let Some(row) = rows.next()? {
            chart.labels.push(row.get(0)?);
            chart.values.push(row.get(1)?);
        }
        Ok(chart)
    }
}
