use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{api::dashboard::Dashboard, sqlite::Store},
};

pub fn routes() -> Vec<Route> {
    routes![dashboard]
}

#[get("/api/dashboard")]
async fn dashboard(store: &State<Store>) -> Result<Json<Dashboard>> {
    let dashboard = store.run(|conn| Dashboard::gather(conn)).await?;
    Ok(Json(dashboard))
}
