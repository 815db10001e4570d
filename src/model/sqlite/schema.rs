use rusqlite::Connection;

use crate::error::Result;

/// Table definitions, in dependency order.
///
/// Foreign keys are declared for documentation only. [`relax_foreign_keys`]
/// switches enforcement off on every connection, so deleting a referenced row
/// leaves its dependents in place and rows may point at missing ones.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS parties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    symbol TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS elections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    voters INTEGER NOT NULL,
    participants INTEGER NOT NULL,
    result_date TEXT NOT NULL,
    ruling TEXT NOT NULL,
    authority_id INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS candidates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    party_id INTEGER NOT NULL,
    election_id INTEGER NOT NULL,
    FOREIGN KEY (party_id) REFERENCES parties(id),
    FOREIGN KEY (election_id) REFERENCES elections(id)
);

CREATE TABLE IF NOT EXISTS voters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    sex TEXT NOT NULL,
    authority_id INTEGER NOT NULL,
    aadhaar INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS votes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    election_id INTEGER NOT NULL,
    voter_id INTEGER NOT NULL,
    FOREIGN KEY (candidate_id) REFERENCES candidates(id),
    FOREIGN KEY (election_id) REFERENCES elections(id),
    FOREIGN KEY (voter_id) REFERENCES voters(id)
);

CREATE UNIQUE INDEX IF NOT EXISTS votes_one_per_voter_election
    ON votes (voter_id, election_id);

CREATE TABLE IF NOT EXISTS citizens (
    aadhaar INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    dob TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS authorities (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    chief TEXT NOT NULL,
    experience TEXT NOT NULL,
    established TEXT NOT NULL
);
";

/// Turn off foreign key enforcement for this connection. The bundled SQLite
/// is built with enforcement on by default, so this has to be explicit.
pub fn relax_foreign_keys(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", false)?;
    Ok(())
}

/// Create every table (and the one-vote-per-election index) that doesn't exist yet.
pub fn ensure_schema_exists(conn: &Connection) -> Result<()> {
    relax_foreign_keys(conn)?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema_exists(&conn).unwrap();
        ensure_schema_exists(&conn).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(
            tables,
            [
                "authorities",
                "candidates",
                "citizens",
                "elections",
                "parties",
                "voters",
                "votes"
            ]
        );
    }

    #[test]
    fn second_vote_for_same_election_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema_exists(&conn).unwrap();
        let insert = "INSERT INTO votes (candidate_id, date, election_id, voter_id) VALUES (?1, '2020-01-01', ?2, ?3)";
        conn.execute(insert, (1, 101, 7)).unwrap();
        // Same voter, different election is fine.
        conn.execute(insert, (2, 102, 7)).unwrap();
        assert!(conn.execute(insert, (3, 101, 7)).is_err());
    }

    fn foreign_keys_enabled(conn: &Connection) -> bool {
        conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn foreign_keys_are_not_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", true).unwrap();
        assert!(foreign_keys_enabled(&conn));

        ensure_schema_exists(&conn).unwrap();
        assert!(!foreign_keys_enabled(&conn));

        // Dangling references are accepted, and referenced rows can be deleted.
        conn.execute("INSERT INTO parties (id, name, symbol) VALUES (6, 'TDP', 'Plough')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO candidates (name, party_id, election_id) VALUES ('Akshay', 6, 999)",
            [],
        )
        .unwrap();
        assert_eq!(conn.execute("DELETE FROM parties WHERE id = 6", []).unwrap(), 1);
        let candidates: i64 = conn
            .query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))
            .unwrap();
        assert_eq!(candidates, 1);
    }
}
