use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    fs::relative,
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::sqlite::Store;

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    db_path: PathBuf,
    #[serde(default = "default_seed")]
    seed: bool,
    #[serde(default = "default_busy_timeout_ms")]
    busy_timeout_ms: u64,
    #[serde(default = "default_static_dir")]
    static_dir: PathBuf,
}

impl Config {
    /// The SQLite database file, created on demand.
    /// Configured via `DB_PATH`.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether to load the sample dataset into an empty database.
    /// Configured via `SEED`.
    pub fn seed(&self) -> bool {
        self.seed
    }

    /// How long a connection waits on a locked database before giving up.
    /// Configured via `BUSY_TIMEOUT_MS`.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Directory holding the dashboard page and its assets.
    /// Configured via `STATIC_DIR`.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("election.db")
}

fn default_seed() -> bool {
    true
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

pub(crate) fn default_static_dir() -> PathBuf {
    PathBuf::from(relative!("static"))
}

/// A fairing that loads the application config and puts it in managed state.
/// This could easily be achieved using `AdHoc::config`, but is written out
/// explicitly for symmetry with the database fairing and control over error
/// messages.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that opens the SQLite store named by the config, creates any
/// missing tables, seeds an empty database if configured to, and places the
/// `Store` into managed state. Must be attached after [`ConfigFairing`].
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "SQLite",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let (store, seed) = match rocket.state::<Config>() {
            Some(config) => (
                Store::new(config.db_path(), config.busy_timeout()),
                config.seed(),
            ),
            None => {
                error!("Database fairing ran before the config was loaded");
                return Err(rocket);
            }
        };
        info!(
            "Opening database {}, bootstrapping...",
            store.path().display()
        );

        // Ensure the tables (and, optionally, the sample data) exist.
        if let Err(e) = store.bootstrap(seed).await {
            error!("Failed to bootstrap database: {e}");
            return Err(rocket);
        }
        info!("...database online!");

        // Manage the state.
        rocket = rocket.manage(store);
        Ok(rocket)
    }
}
