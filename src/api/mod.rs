use rocket::{Catcher, Route};

mod authority;
mod candidate;
mod catchers;
mod dashboard;
mod election;
mod export;
mod fallback;
mod party;
mod query;
mod ui;
mod vote;
mod voter;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(ui::routes());
    routes.extend(dashboard::routes());
    routes.extend(party::routes());
    routes.extend(candidate::routes());
    routes.extend(voter::routes());
    routes.extend(election::routes());
    routes.extend(vote::routes());
    routes.extend(authority::routes());
    routes.extend(query::routes());
    routes.extend(export::routes());
    routes.extend(fallback::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers::catchers()
}
