//! A command-line tool for working with an election records database directly.
//! It shares the server's store, report and export code, so its output matches
//! what the corresponding API endpoints return.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rocket::serde::json::serde_json;
use serde::Serialize;

use election_records::error::Error as StoreError;
use election_records::model::{
    api::report::Report,
    db::ExportTable,
    sqlite::{count_rows, ensure_schema_exists, ensure_seed_data_exists, Store},
};

const PROGRAM_NAME: &str = "records-cli";

const ABOUT_TEXT: &str = "Initialise, report on, and export an election records database.

EXIT CODES:
     0: Success.
     1: Error.";

const DB_PATH: &str = "DB_PATH";
const NO_SEED: &str = "NO_SEED";
const REPORT_NUMBER: &str = "REPORT_NUMBER";
const TABLE: &str = "TABLE";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .arg(
            Arg::new(DB_PATH)
                .long("db")
                .value_name("PATH")
                .help("The SQLite database file")
                .value_parser(value_parser!(PathBuf))
                .default_value("election.db"),
        )
        .subcommand(
            Command::new("init")
                .about("Create any missing tables and load the sample data into an empty database")
                .arg(
                    Arg::new(NO_SEED)
                        .long("no-seed")
                        .help("Only create the tables")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Print one of the canned reports as JSON")
                .arg(
                    Arg::new(REPORT_NUMBER)
                        .help("Which report to run, 1 to 6")
                        .value_parser(value_parser!(i64).range(1..=6))
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Print every row of a table as JSON")
                .arg(
                    Arg::new(TABLE)
                        .help("One of parties, candidates, voters, elections, votes")
                        .required(true),
                ),
        )
}

/// Errors that this program may produce.
#[derive(Debug)]
enum Error {
    /// No database file exists at the given path.
    Missing(PathBuf),
    /// The store failed, or the input was rejected.
    Store(StoreError),
    /// Failed to encode the output.
    Format(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "No database at {}", path.display()),
            Self::Store(err) => write!(f, "{err}"),
            Self::Format(msg) => write!(f, "Failed to encode output: {msg}"),
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Create the tables, optionally seed, and summarise what the database holds.
fn init(store: &Store, seed: bool) -> Result<String, Error> {
    let mut conn = store.connect()?;
    ensure_schema_exists(&conn)?;
    if seed {
        ensure_seed_data_exists(&mut conn)?;
    }

    let mut summary = format!("Database {} is ready:", store.path().display());
    for table in ExportTable::ALL.iter().map(|t| t.name()).chain(["citizens", "authorities"]) {
        let rows = count_rows(&conn, table)?;
        summary.push_str(&format!("\n  {table}: {rows}"));
    }
    Ok(summary)
}

fn report(store: &Store, number: i64) -> Result<String, Error> {
    let conn = open_existing(store)?;
    to_json(&Report::run(&conn, number)?)
}

fn export(store: &Store, table_name: &str) -> Result<String, Error> {
    // Reject the name before touching the database.
    let table: ExportTable = table_name.parse()?;
    let conn = open_existing(store)?;
    to_json(&table.dump(&conn)?)
}

/// Reading commands shouldn't leave an empty database file behind.
fn open_existing(store: &Store) -> Result<rusqlite::Connection, Error> {
    if !store.path().exists() {
        return Err(Error::Missing(store.path().to_path_buf()));
    }
    Ok(store.connect()?)
}

fn to_json(value: &impl Serialize) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|err| Error::Format(err.to_string()))
}

/// Run the chosen subcommand, print its output, and return the exit code.
fn run(args: &ArgMatches) -> u8 {
    let db_path: &PathBuf = args.get_one(DB_PATH).unwrap(); // Argument has a default.
    let store = Store::new(db_path, BUSY_TIMEOUT);

    let result = match args.subcommand() {
        Some(("init", sub)) => init(&store, !sub.get_flag(NO_SEED)),
        Some(("report", sub)) => report(&store, *sub.get_one::<i64>(REPORT_NUMBER).unwrap()),
        Some(("export", sub)) => export(&store, sub.get_one::<String>(TABLE).unwrap()),
        _ => unreachable!("a subcommand is required"),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}
