use log::warn;
use rocket::{serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    logging::RequestId,
    model::{
        api::{spec::VoteSpec, Created, Message},
        db::{NewVote, Vote, VoteListing},
        sqlite::{delete_by_key, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![list_votes, cast_vote, delete_vote]
}

#[get("/api/votes")]
async fn list_votes(store: &State<Store>) -> Result<Json<Vec<VoteListing>>> {
    let votes = store.run(|conn| VoteListing::list(conn)).await?;
    Ok(Json(votes))
}

#[post("/api/votes", data = "<spec>", format = "json")]
async fn cast_vote(
    spec: Json<VoteSpec>,
    store: &State<Store>,
    req_id: &RequestId,
) -> Result<Json<Created>> {
    let vote: NewVote = spec.0.into();
    let (voter_id, election_id) = (vote.voter_id, vote.election_id);
    match store.run(move |conn| vote.insert(conn)).await {
        Ok(id) => Ok(Json(Created::new(id, "Vote recorded successfully"))),
        Err(err @ Error::BadRequest(_)) => {
            warn!("req{req_id} rejected repeat vote by voter {voter_id} in election {election_id}");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

#[delete("/api/votes/<id>")]
async fn delete_vote(id: i64, store: &State<Store>) -> Result<Json<Message>> {
    store
        .run(move |conn| delete_by_key::<Vote>(conn, id))
        .await?;
    Ok(Json(Message::new("Vote deleted successfully")))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{Method, Status},
        local::asynchronous::Client,
        tokio,
    };

    use crate::api::test_util::{expect_json, send_json};
    use crate::model::api::ErrorBody;
    use crate::model::db::ALREADY_VOTED;
    use crate::model::sqlite::{count, select_all};

    use super::*;

    #[backend_test]
    async fn cast_then_list_with_names(client: Client) {
        // Voter 1 (Bhargavi) has only voted in election 103.
        let response = send_json(
            &client,
            Method::Post,
            uri!(cast_vote).to_string(),
            &VoteSpec::example(1, 101),
        )
        .await;
        let created: Created = expect_json(response, Status::Ok).await;
        assert_eq!(created.message, "Vote recorded successfully");

        let response = client.get(uri!(list_votes)).dispatch().await;
        let votes: Vec<VoteListing> = expect_json(response, Status::Ok).await;
        assert_eq!(votes.len(), 9);
        let listed = votes.iter().find(|v| v.vote.id == created.id).unwrap();
        assert_eq!(listed.candidate_name.as_deref(), Some("Guru"));
        assert_eq!(listed.voter_name.as_deref(), Some("Bhargavi"));
    }

    #[backend_test]
    async fn second_vote_in_election_is_rejected(client: Client, store: Store) {
        let response = send_json(
            &client,
            Method::Post,
            uri!(cast_vote).to_string(),
            &VoteSpec::example(1, 103),
        )
        .await;
        let body: ErrorBody = expect_json(response, Status::BadRequest).await;
        assert_eq!(body.error, ALREADY_VOTED);

        let total = store.run(|conn| count::<Vote>(conn)).await.unwrap();
        assert_eq!(total, 8);
    }

    #[backend_test(empty)]
    async fn concurrent_votes_yield_one_row(client: Client, store: Store) {
        let spec = VoteSpec::example(7, 101);
        let uri = uri!(cast_vote).to_string();
        let (first, second, third) = tokio::join!(
            send_json(&client, Method::Post, uri.clone(), &spec),
            send_json(&client, Method::Post, uri.clone(), &spec),
            send_json(&client, Method::Post, uri.clone(), &spec),
        );
        let mut statuses = vec![first.status(), second.status(), third.status()];
        statuses.sort_by_key(|status| status.code);
        assert_eq!(
            statuses,
            vec![Status::Ok, Status::BadRequest, Status::BadRequest]
        );

        let votes: Vec<Vote> = store.run(|conn| select_all(conn)).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].voter_id, 7);
    }

    #[backend_test]
    async fn same_voter_other_election_is_fine(client: Client) {
        for election_id in [101, 102] {
            let response = send_json(
                &client,
                Method::Post,
                uri!(cast_vote).to_string(),
                &VoteSpec::example(2, election_id),
            )
            .await;
            assert_eq!(response.status(), Status::Ok);
        }
    }

    #[backend_test]
    async fn delete_frees_the_pair(client: Client) {
        let response = client.delete(uri!(delete_vote(11))).dispatch().await;
        let message: Message = expect_json(response, Status::Ok).await;
        assert_eq!(message.message, "Vote deleted successfully");

        // Vote 11 was voter 1 in election 103.
        let response = send_json(
            &client,
            Method::Post,
            uri!(cast_vote).to_string(),
            &VoteSpec::example(1, 103),
        )
        .await;
        assert_eq!(response.status(), Status::Ok);
    }
}
