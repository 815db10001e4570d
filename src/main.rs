use log::{error, info, LevelFilter};
use rocket::Error as RocketError;
use thiserror::Error;

/// Where the logging setup is read from, relative to the working directory.
const LOG_CONFIG: &str = "log4rs.yaml";

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
enum Error {
    #[error("Failed to read logging config {LOG_CONFIG}: {0}")]
    Logging(String),
    #[error(transparent)]
    Rocket(#[from] RocketError),
}

fn init_logging() -> Result<(), Error> {
    log4rs::init_file(LOG_CONFIG, log4rs_dynamic_filters::default_deserializers())
        .map_err(|err| Error::Logging(err.to_string()))
}

async fn serve() -> Result<(), Error> {
    info!("Configuring election records server...");
    let rocket = election_records::build().ignite().await?;
    info!("...server configured with {} routes", rocket.routes().count());
    // Rocket's own launch chatter is only useful up to this point.
    log4rs_dynamic_filters::DynamicLevelFilter::set("rocket", LevelFilter::Off);
    let _ = rocket.launch().await?;
    Ok(())
}

#[rocket::main]
async fn main() {
    if let Err(err) = init_logging() {
        eprintln!("{err}");
        std::process::exit(1)
    }
    info!("Initialised logging");

    if let Err(err) = serve().await {
        error!("{err}");
        error!("Critical failure, shutting down");
        std::process::exit(1)
    }
}
