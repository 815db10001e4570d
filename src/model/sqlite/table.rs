use rusqlite::{Connection, Row};

use crate::error::Result;

/// A type that maps one-to-one onto the rows of a database table.
pub trait SqlTable: Sized {
    /// The name of the table.
    const NAME: &'static str;
    /// The primary key column.
    const KEY: &'static str = "id";
    /// The columns read by [`SqlTable::from_row`], in order.
    const COLUMNS: &'static str;

    /// Decode a row selected with [`SqlTable::COLUMNS`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Every row of the table, in key order.
pub fn select_all<T: SqlTable>(conn: &Connection) -> Result<Vec<T>> {
    let sql = format!("SELECT {} FROM {} ORDER BY {}", T::COLUMNS, T::NAME, T::KEY);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], T::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Number of rows in the table.
pub fn count<T: SqlTable>(conn: &Connection) -> Result<i64> {
    count_rows(conn, T::NAME)
}

/// Number of rows in the named table. `table` must be a trusted identifier.
pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

/// Delete the row with the given key. Returns the number of rows removed,
/// which is zero if there was no such row.
pub fn delete_by_key<T: SqlTable>(conn: &Connection, key: i64) -> Result<usize> {
    let sql = format!("DELETE FROM {} WHERE {} = ?1", T::NAME, T::KEY);
    Ok(conn.execute(&sql, [key])?)
}
