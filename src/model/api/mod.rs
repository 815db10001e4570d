//! API-compatible types.
//!
//! The types in this module are serialised in an API-friendly way, e.g.:
//!
//! - Request bodies use camelCase field names.
//! - Dates are `YYYY-MM-DD` strings.

pub mod dashboard;
pub mod report;
pub mod response;
pub mod spec;

pub use response::{Created, ErrorBody, Message};
