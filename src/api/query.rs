use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{api::report::Report, sqlite::Store},
};

pub fn routes() -> Vec<Route> {
    routes![run_report]
}

/// Run one of the canned reports. Unknown numbers answer `{}`; a segment that
/// isn't an integer doesn't match at all.
#[get("/api/query/<number>")]
async fn run_report(number: i64, store: &State<Store>) -> Result<Json<Report>> {
    let report = store.run(move |conn| Report::run(conn, number)).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rocket::{
        http::{Method, Status},
        local::asynchronous::Client,
        serde::json::{json, Value},
    };

    use crate::api::test_util::{get_value, send_json};
    use crate::model::api::spec::{ElectionSpec, VoteSpec};
    use crate::model::api::Created;

    use super::*;

    #[backend_test]
    async fn seeded_reports(client: Client) {
        let top_party = get_value(&client, uri!(run_report(1)).to_string()).await;
        assert_eq!(top_party, json!({ "party": "AAP", "count": 3 }));

        let change = get_value(&client, uri!(run_report(2)).to_string()).await;
        assert_eq!(
            change,
            json!({ "voters_2010": 7000, "voters_2015": 9500, "change_percent": 35.71 })
        );

        let history = get_value(&client, uri!(run_report(3)).to_string()).await;
        assert_eq!(
            history,
            json!({ "authorities": [
                { "name": "IEC", "years": ["1990", "2005", "2020"] },
                { "name": "MCC", "years": ["1995", "2000", "2015"] },
                { "name": "AEC", "years": ["2005", "2010"] },
            ] })
        );

        let non_voters = get_value(&client, uri!(run_report(4)).to_string()).await;
        assert_eq!(
            non_voters,
            json!({ "non_voters": [{ "name": "Bala", "aadhaar": 1493 }] })
        );

        let top = get_value(&client, uri!(run_report(5)).to_string()).await;
        assert_eq!(
            top,
            json!({ "top_candidates": [
                { "name": "Bhargavi", "vote_count": 1 },
                { "name": "Sakshi", "vote_count": 1 },
                { "name": "Shivanjali", "vote_count": 1 },
            ] })
        );

        let turnout = get_value(&client, uri!(run_report(6)).to_string()).await;
        assert_eq!(turnout["turnout"].as_array().map(Vec::len), Some(9));
        assert_eq!(
            turnout["turnout"][0],
            json!({ "id": 101, "expected": 1000, "actual": 1, "turnout": 0.1 })
        );
    }

    #[backend_test]
    async fn unknown_report_is_empty_object(client: Client) {
        for number in [0i64, 7, -1] {
            let report = get_value(&client, uri!(run_report(number)).to_string()).await;
            assert_eq!(report, json!({}));
        }
    }

    #[backend_test]
    async fn non_integer_report_is_not_found(client: Client) {
        let response = client.get("/api/query/latest").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[backend_test]
    async fn voter_change_follows_the_votes(client: Client) {
        // Move the 2010 vote from election 104 (7000 voters) to 106 (9000 voters).
        let response = client.delete("/api/votes/111").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let vote = VoteSpec {
            date: NaiveDate::from_ymd_opt(2010, 1, 26).unwrap(),
            ..VoteSpec::example(11, 106)
        };
        let response = send_json(&client, Method::Post, "/api/votes".to_string(), &vote).await;
        assert_eq!(response.status(), Status::Ok);

        let change = get_value(&client, uri!(run_report(2)).to_string()).await;
        assert_eq!(
            change,
            json!({ "voters_2010": 9000, "voters_2015": 9500, "change_percent": 5.56 })
        );

        // Without a 2015 vote there is nothing to compare.
        let response = client.delete("/api/votes/112").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let change = get_value(&client, uri!(run_report(2)).to_string()).await;
        assert_eq!(change, json!({ "error": "Data not available" }));
    }

    #[backend_test(empty)]
    async fn turnout_counts_votes_per_election(client: Client) {
        let mut election_ids = vec![];
        for _ in 0..2 {
            let response = send_json(
                &client,
                Method::Post,
                "/api/elections".to_string(),
                &ElectionSpec::example(),
            )
            .await;
            let created: Created = response.into_json().await.unwrap();
            election_ids.push(created.id);
        }
        for voter_id in [1, 2] {
            let vote = VoteSpec::example(voter_id, election_ids[0]);
            let response = send_json(&client, Method::Post, "/api/votes".to_string(), &vote).await;
            assert_eq!(response.status(), Status::Ok);
        }

        let report = get_value(&client, uri!(run_report(6)).to_string()).await;
        let turnout: Vec<Value> = report["turnout"].as_array().unwrap().clone();
        assert_eq!(
            turnout,
            vec![
                json!({ "id": election_ids[0], "expected": 1000, "actual": 2, "turnout": 0.2 }),
                json!({ "id": election_ids[1], "expected": 1000, "actual": 0, "turnout": 0.0 }),
            ]
        );
    }

    #[backend_test(empty)]
    async fn empty_database_reports(client: Client) {
        let top_party = get_value(&client, uri!(run_report(1)).to_string()).await;
        assert_eq!(top_party, json!({ "party": "No data", "count": 0 }));
        let change = get_value(&client, uri!(run_report(2)).to_string()).await;
        assert_eq!(change, json!({ "error": "Data not available" }));
        let top = get_value(&client, uri!(run_report(5)).to_string()).await;
        assert_eq!(top, json!({ "top_candidates": [] }));
    }
}
