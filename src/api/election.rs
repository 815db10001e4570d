use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{spec::ElectionSpec, Created, Message},
        db::{Election, ElectionListing, NewElection},
        sqlite::{delete_by_key, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        list_elections,
        create_election,
        replace_election,
        delete_election
    ]
}

#[get("/api/elections")]
async fn list_elections(store: &State<Store>) -> Result<Json<Vec<ElectionListing>>> {
    let elections = store.run(|conn| ElectionListing::list(conn)).await?;
    Ok(Json(elections))
}

#[post("/api/elections", data = "<spec>", format = "json")]
async fn create_election(
    spec: Json<ElectionSpec>,
    store: &State<Store>,
) -> Result<Json<Created>> {
    let election: NewElection = spec.0.into();
    let id = store.run(move |conn| election.insert(conn)).await?;
    Ok(Json(Created::new(id, "Election created successfully")))
}

#[put("/api/elections/<id>", data = "<spec>", format = "json")]
async fn replace_election(
    id: i64,
    spec: Json<ElectionSpec>,
    store: &State<Store>,
) -> Result<Json<Message>> {
    let election: NewElection = spec.0.into();
    store.run(move |conn| election.replace(conn, id)).await?;
    Ok(Json(Message::new("Election updated successfully")))
}

#[delete("/api/elections/<id>")]
async fn delete_election(id: i64, store: &State<Store>) -> Result<Json<Message>> {
    store
        .run(move |conn| delete_by_key::<Election>(conn, id))
        .await?;
    Ok(Json(Message::new("Election deleted successfully")))
}
