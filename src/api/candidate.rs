use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{spec::CandidateSpec, Created, Message},
        db::{Candidate, CandidateListing, NewCandidate},
        sqlite::{delete_by_key, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        list_candidates,
        create_candidate,
        replace_candidate,
        delete_candidate
    ]
}

#[get("/api/candidates")]
async fn list_candidates(store: &State<Store>) -> Result<Json<Vec<CandidateListing>>> {
    let candidates = store.run(|conn| CandidateListing::list(conn)).await?;
    Ok(Json(candidates))
}

#[post("/api/candidates", data = "<spec>", format = "json")]
async fn create_candidate(
    spec: Json<CandidateSpec>,
    store: &State<Store>,
) -> Result<Json<Created>> {
    let candidate: NewCandidate = spec.0.into();
    let id = store.run(move |conn| candidate.insert(conn)).await?;
    Ok(Json(Created::new(id, "Candidate added successfully")))
}

#[put("/api/candidates/<id>", data = "<spec>", format = "json")]
async fn replace_candidate(
    id: i64,
    spec: Json<CandidateSpec>,
    store: &State<Store>,
) -> Result<Json<Message>> {
    let candidate: NewCandidate = spec.0.into();
    store.run(move |conn| candidate.replace(conn, id)).await?;
    Ok(Json(Message::new("Candidate updated successfully")))
}

#[delete("/api/candidates/<id>")]
async fn delete_candidate(id: i64, store: &State<Store>) -> Result<Json<Message>> {
    store
        .run(move |conn| delete_by_key::<Candidate>(conn, id))
        .await?;
    Ok(Json(Message::new("Candidate deleted successfully")))
}
