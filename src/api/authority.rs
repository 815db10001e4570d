use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        db::Authority,
        sqlite::{select_all, Store},
    },
};

pub fn routes() -> Vec<Route> {
    routes![list_authorities]
}

/// Authorities are read-only through the API; they only arrive with the sample data.
#[get("/api/authorities")]
async fn list_authorities(store: &State<Store>) -> Result<Json<Vec<Authority>>> {
    let authorities = store.run(|conn| select_all::<Authority>(conn)).await?;
    Ok(Json(authorities))
}

#[cfg(test)]
mod tests {
    use rocket::{http::Status, local::asynchronous::Client};

    use crate::api::test_util::expect_json;

    use super::*;

    #[backend_test]
    async fn lists_seeded_authorities(client: Client) {
        let response = client.get(uri!(list_authorities)).dispatch().await;
        let authorities: Vec<Authority> = expect_json(response, Status::Ok).await;
        let names: Vec<_> = authorities.iter().map(|a| (a.id, a.name.as_str())).collect();
        assert_eq!(names, vec![(10, "IEC"), (20, "MCC"), (30, "AEC")]);
        assert_eq!(authorities[1].chief, "Sitaraman");
    }

    #[backend_test(empty)]
    async fn empty_without_seed(client: Client) {
        let response = client.get(uri!(list_authorities)).dispatch().await;
        let authorities: Vec<Authority> = expect_json(response, Status::Ok).await;
        assert!(authorities.is_empty());
    }
}
