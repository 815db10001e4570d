//! Request and response logging, plus a per-request ID that handlers can use
//! to tag their own log lines.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{info, log, warn, Level};
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Status, StatusClass},
    request::{FromRequest, Outcome},
    Data, Orbit, Request, Response, Rocket,
};

use crate::Config;

/// Identifies one request in the logs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestId(pub usize);

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RequestId {
    /// Wraps back to zero on overflow.
    fn next() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// What the logger remembers between a request arriving and its response leaving.
struct Trace {
    id: RequestId,
    started: Instant,
}

impl Trace {
    fn start() -> Self {
        Self {
            id: RequestId::next(),
            started: Instant::now(),
        }
    }
}

/// The trace for this request, started on first use.
fn trace<'r>(req: &'r Request<'_>) -> &'r Trace {
    req.local_cache(Trace::start)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r RequestId {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(&trace(req).id)
    }
}

fn is_static_asset(req: &Request<'_>) -> bool {
    req.uri().path().as_str().starts_with("/static/")
}

/// Failures are always visible. Successful asset loads only show at debug so
/// the dashboard's page loads don't bury API traffic.
fn level_for(req: &Request<'_>, status: Status) -> Level {
    match status.class() {
        StatusClass::ServerError => Level::Error,
        StatusClass::ClientError => Level::Warn,
        _ if is_static_asset(req) => Level::Debug,
        _ => Level::Info,
    }
}

/// A rocket fairing that logs every request and response with its ID and timing.
#[derive(Debug, Copy, Clone)]
pub struct LoggerFairing;

#[rocket::async_trait]
impl Fairing for LoggerFairing {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Liftoff | Kind::Request | Kind::Response | Kind::Shutdown,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let protocol = if rocket.config().tls_enabled() {
            "https"
        } else {
            "http"
        };
        let ip = &rocket.config().address;
        let port = &rocket.config().port;
        match rocket.state::<Config>() {
            Some(config) => info!(
                "Serving election records from {} on {protocol}://{ip}:{port}",
                config.db_path().display()
            ),
            None => info!("Server launched on {protocol}://{ip}:{port}"),
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let id = trace(req).id;
        let level = if is_static_asset(req) {
            Level::Debug
        } else {
            Level::Info
        };
        log!(level, "->req{id} {} {}", req.method(), req.uri());
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let trace = trace(req);
        let status = res.status();
        let route = match req.route() {
            Some(r) => match r.name {
                Some(ref name) => format!("{name} ({})", r.uri),
                None => r.uri.to_string(),
            },
            None => "UNKNOWN ROUTE".to_string(),
        };
        let elapsed = trace.started.elapsed().as_millis();
        log!(
            level_for(req, status),
            "<-rsp{} {status} {route} in {elapsed}ms",
            trace.id
        );
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        warn!("Shutdown requested, stopping gracefully...");
    }
}

#[cfg(test)]
mod tests {
    use rocket::local::asynchronous::Client;

    use super::*;

    #[test]
    fn request_ids_increase() {
        let first = RequestId::next();
        let second = RequestId::next();
        assert!(second > first);
        assert_eq!(RequestId(7).to_string(), "7");
    }

    #[backend_test]
    async fn one_trace_per_request(client: Client) {
        let first = client.get("/api/parties");
        let second = client.get("/api/parties");
        assert_eq!(trace(first.inner()).id, trace(first.inner()).id);
        assert_ne!(trace(first.inner()).id, trace(second.inner()).id);
    }

    #[backend_test]
    async fn assets_log_quietly(client: Client) {
        let asset = client.get("/static/app.js");
        let api = client.get("/api/dashboard");
        assert_eq!(level_for(asset.inner(), Status::Ok), Level::Debug);
        assert_eq!(level_for(api.inner(), Status::Ok), Level::Info);
        assert_eq!(level_for(asset.inner(), Status::NotFound), Level::Warn);
        assert_eq!(level_for(api.inner(), Status::InternalServerError), Level::Error);
    }
}
