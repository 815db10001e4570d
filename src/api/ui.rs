use rocket::{fs::NamedFile, Route, State};

use crate::{
    error::{Error, Result},
    Config,
};

pub fn routes() -> Vec<Route> {
    routes![index]
}

/// The single-page dashboard. Its scripts and styles come from `/static`.
#[get("/")]
async fn index(config: &State<Config>) -> Result<NamedFile> {
    let page = config.static_dir().join("index.html");
    NamedFile::open(&page)
        .await
        .map_err(|_| Error::not_found(format!("Dashboard page {} is missing", page.display())))
}
