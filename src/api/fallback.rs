//! Low-ranked catch-alls for `/api/`. A route whose path segment fails to
//! parse (`/api/query/latest`, `/api/parties/abc`) forwards with 422; these
//! answer it with the same 404 an unmatched path gets.

use rocket::{http::uri::Origin, http::Method, Route};

use crate::error::Error;

pub fn routes() -> Vec<Route> {
    routes![get_fallback, put_fallback, delete_fallback]
}

fn no_route(method: Method, uri: &Origin<'_>) -> Error {
    Error::not_found(format!("No route for {method} {uri}"))
}

#[get("/api/<_..>", rank = 100)]
fn get_fallback(uri: &Origin<'_>) -> Error {
    no_route(Method::Get, uri)
}

#[put("/api/<_..>", rank = 100)]
fn put_fallback(uri: &Origin<'_>) -> Error {
    no_route(Method::Put, uri)
}

#[delete("/api/<_..>", rank = 100)]
fn delete_fallback(uri: &Origin<'_>) -> Error {
    no_route(Method::Delete, uri)
}
