#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use std::path::PathBuf;

use rocket::{
    fs::{FileServer, Options},
    Build, Rocket,
};

use crate::config::{ConfigFairing, DatabaseFairing};
use crate::logging::LoggerFairing;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

/// Build the server from `Rocket.toml` and the `ROCKET_*` environment.
pub fn build() -> Rocket<Build> {
    assemble(rocket::build())
}

/// Build a server backed by the given database file, with logging silenced.
#[cfg(test)]
pub(crate) fn rocket_for_db(db_path: &std::path::Path, seed: bool) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("db_path", db_path))
        .merge(("seed", seed))
        .merge(("log_level", "off"));
    assemble(rocket::custom(figment))
}

fn assemble(rocket: Rocket<Build>) -> Rocket<Build> {
    // The file server is mounted before ignition, so read its root directly.
    let static_dir = rocket
        .figment()
        .extract_inner::<PathBuf>("static_dir")
        .unwrap_or_else(|_| config::default_static_dir());

    rocket
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .mount("/", api::routes())
        .mount("/static", FileServer::new(static_dir, Options::Missing))
        .register("/", api::catchers())
}
