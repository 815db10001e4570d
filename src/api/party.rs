use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{spec::PartySpec, Created, Message},
        db::{NewParty, Party, PartyListing},
        sqlite::{delete_by_key, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![list_parties, create_party, replace_party, delete_party]
}

#[get("/api/parties")]
async fn list_parties(store: &State<Store>) -> Result<Json<Vec<PartyListing>>> {
    let parties = store.run(|conn| PartyListing::list(conn)).await?;
    Ok(Json(parties))
}

#[post("/api/parties", data = "<spec>", format = "json")]
async fn create_party(spec: Json<PartySpec>, store: &State<Store>) -> Result<Json<Created>> {
    let party: NewParty = spec.0.into();
    let id = store.run(move |conn| party.insert(conn)).await?;
    Ok(Json(Created::new(id, "Party added successfully")))
}

#[put("/api/parties/<id>", data = "<spec>", format = "json")]
async fn replace_party(
    id: i64,
    spec: Json<PartySpec>,
    store: &State<Store>,
) -> Result<Json<Message>> {
    let party: NewParty = spec.0.into();
    store.run(move |conn| party.replace(conn, id)).await?;
    Ok(Json(Message::new("Party updated successfully")))
}

#[delete("/api/parties/<id>")]
async fn delete_party(id: i64, store: &State<Store>) -> Result<Json<Message>> {
    store
        .run(move |conn| delete_by_key::<Party>(conn, id))
        .await?;
    Ok(Json(Message::new("Party deleted successfully")))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{Method, Status},
        local::asynchronous::Client,
    };

    use crate::api::test_util::{expect_json, send_json};
    use crate::model::sqlite::{count, select_all};

    use super::*;

    #[backend_test]
    async fn create_then_list(client: Client, store: Store) {
        let response = send_json(
            &client,
            Method::Post,
            uri!(create_party).to_string(),
            &PartySpec::example(),
        )
        .await;
        let created: Created = expect_json(response, Status::Ok).await;
        assert_eq!(created.message, "Party added successfully");

        let response = client.get(uri!(list_parties)).dispatch().await;
        let parties: Vec<PartyListing> = expect_json(response, Status::Ok).await;
        let listed = parties
            .iter()
            .find(|p| p.party.id == created.id)
            .expect("new party is listed");
        assert_eq!(listed.party.name, PartySpec::example().name);
        assert_eq!(listed.candidate_count, 0);

        let total = store.run(|conn| count::<Party>(conn)).await.unwrap();
        assert_eq!(total, parties.len() as i64);
    }

    #[backend_test]
    async fn listing_counts_seeded_candidates(client: Client) {
        let response = client.get(uri!(list_parties)).dispatch().await;
        let parties: Vec<PartyListing> = expect_json(response, Status::Ok).await;
        let counts: Vec<_> = parties
            .iter()
            .map(|p| (p.party.name.as_str(), p.candidate_count))
            .collect();
        assert_eq!(
            counts,
            vec![("BJP", 3), ("Congress", 2), ("AAP", 3), ("YCP", 1), ("TDP", 1)]
        );
    }

    #[backend_test]
    async fn replace_overwrites_row(client: Client, store: Store) {
        let spec = PartySpec {
            name: "Bharatiya Janata Party".into(),
            symbol: "Lotus".into(),
        };
        let response = send_json(
            &client,
            Method::Put,
            uri!(replace_party(1)).to_string(),
            &spec,
        )
        .await;
        let message: Message = expect_json(response, Status::Ok).await;
        assert_eq!(message.message, "Party updated successfully");

        let parties: Vec<Party> = store.run(|conn| select_all(conn)).await.unwrap();
        assert_eq!(parties[0].id, 1);
        assert_eq!(parties[0].name, "Bharatiya Janata Party");
    }

    #[backend_test]
    async fn delete_is_unconditional(client: Client, store: Store) {
        let response = client.delete(uri!(delete_party(6))).dispatch().await;
        let message: Message = expect_json(response, Status::Ok).await;
        assert_eq!(message.message, "Party deleted successfully");
        let total = store.run(|conn| count::<Party>(conn)).await.unwrap();
        assert_eq!(total, 4);

        // Deleting it again still succeeds.
        let response = client.delete(uri!(delete_party(6))).dispatch().await;
        let message: Message = expect_json(response, Status::Ok).await;
        assert_eq!(message.message, "Party deleted successfully");
        let total = store.run(|conn| count::<Party>(conn)).await.unwrap();
        assert_eq!(total, 4);
    }

    #[backend_test(empty)]
    async fn empty_database_lists_nothing(client: Client) {
        let response = client.get(uri!(list_parties)).dispatch().await;
        let parties: Vec<PartyListing> = expect_json(response, Status::Ok).await;
        assert!(parties.is_empty());
    }
}
