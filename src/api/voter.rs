use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{spec::VoterSpec, Created, Message},
        db::{NewVoter, Voter},
        sqlite::{delete_by_key, select_all, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![list_voters, register_voter, replace_voter, delete_voter]
}

#[get("/api/voters")]
async fn list_voters(store: &State<Store>) -> Result<Json<Vec<Voter>>> {
    let voters = store.run(|conn| select_all::<Voter>(conn)).await?;
    Ok(Json(voters))
}

#[post("/api/voters", data = "<spec>", format = "json")]
async fn register_voter(spec: Json<VoterSpec>, store: &State<Store>) -> Result<Json<Created>> {
    let voter: NewVoter = spec.0.into();
    let id = store.run(move |conn| voter.insert(conn)).await?;
    Ok(Json(Created::new(id, "Voter registered successfully")))
}

#[put("/api/voters/<id>", data = "<spec>", format = "json")]
async fn replace_voter(
    id: i64,
    spec: Json<VoterSpec>,
    store: &State<Store>,
) -> Result<Json<Message>> {
    let voter: NewVoter = spec.0.into();
    store.run(move |conn| voter.replace(conn, id)).await?;
    Ok(Json(Message::new("Voter updated successfully")))
}

#[delete("/api/voters/<id>")]
async fn delete_voter(id: i64, store: &State<Store>) -> Result<Json<Message>> {
    store
        .run(move |conn| delete_by_key::<Voter>(conn, id))
        .await?;
    Ok(Json(Message::new("Voter deleted successfully")))
}
