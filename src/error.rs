use log::error;
use rocket::{
    http::{Status, StatusClass},
    response::{self, status::Custom, Responder},
    serde::json::Json,
    tokio::task::JoinError,
    Request,
};
use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

use crate::model::api::ErrorBody;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
    #[error("Blocking database task failed: {0}")]
    Task(#[from] JoinError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> Status {
        match self {
            Self::BadRequest(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Db(_) | Self::Task(_) => Status::InternalServerError,
        }
    }

    /// Does this error come from a UNIQUE constraint rejecting an insert?
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::Db(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation
                    && err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        // Internal details stay in the log, not the response.
        let message = if status.class() == StatusClass::ServerError {
            error!("{self}");
            status.reason_lossy().to_string()
        } else {
            self.to_string()
        };
        Custom(status, Json(ErrorBody::new(message))).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn unique_violation_is_detected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (x INTEGER UNIQUE); INSERT INTO t VALUES (1);")
            .unwrap();
        let err: Error = conn
            .execute("INSERT INTO t VALUES (1)", [])
            .unwrap_err()
            .into();
        assert!(err.is_unique_violation());
        assert_eq!(err.status(), Status::InternalServerError);
    }

    #[test]
    fn not_null_violation_is_not_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (x INTEGER NOT NULL);")
            .unwrap();
        let err: Error = conn
            .execute("INSERT INTO t VALUES (NULL)", [])
            .unwrap_err()
            .into();
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = Error::bad_request("Invalid table name");
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.to_string(), "Invalid table name");
        assert_eq!(Error::not_found("x").status(), Status::NotFound);
    }
}
