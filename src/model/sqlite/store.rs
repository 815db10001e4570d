use std::path::{Path, PathBuf};
use std::time::Duration;

use rocket::tokio::task;
use rusqlite::Connection;

use crate::error::Result;

use super::{ensure_schema_exists, ensure_seed_data_exists, schema::relax_foreign_keys};

/// Handle on the election records database file.
///
/// The store never holds a connection itself: every unit of work opens a
/// fresh one and drops it when done, so requests share nothing but the file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, busy_timeout: Duration) -> Self {
        Self {
            path: path.into(),
            busy_timeout,
        }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection to the database, creating the file if needed.
    pub fn connect(&self) -> Result<Connection> {
        open(&self.path, self.busy_timeout)
    }

    /// Run blocking database work on a fresh connection, off the async workers.
    pub async fn run<F, T>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        let busy_timeout = self.busy_timeout;
        task::spawn_blocking(move || {
            let mut conn = open(&path, busy_timeout)?;
            work(&mut conn)
        })
        .await?
    }

    /// Create any missing tables and, if asked and the database is empty,
    /// load the sample dataset. Safe to call on every startup.
    pub async fn bootstrap(&self, seed: bool) -> Result<()> {
        self.run(move |conn| {
            ensure_schema_exists(conn)?;
            if seed {
                ensure_seed_data_exists(conn)?;
            }
            Ok(())
        })
        .await
    }
}

fn open(path: &Path, busy_timeout: Duration) -> Result<Connection> {
    let conn = Connection::open(path)?;
    // Concurrent writers wait on the file lock instead of failing outright.
    conn.busy_timeout(busy_timeout)?;
    relax_foreign_keys(&conn)?;
    Ok(conn)
}
