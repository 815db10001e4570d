//! Error pages, rendered as the same `{"error": ...}` JSON the handlers return.

use rocket::{http::Status, serde::json::Json, Catcher, Request};

use crate::model::api::ErrorBody;

pub fn catchers() -> Vec<Catcher> {
    catchers![bad_request, not_found, unprocessable_entity, default_catcher]
}

#[catch(400)]
fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Request body is not valid JSON"))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody::new(format!("No route for {} {}", req.method(), req.uri())))
}

/// A JSON body that parses but doesn't fit the expected shape.
#[catch(422)]
fn unprocessable_entity() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Request body is missing a field or has a field of the wrong type",
    ))
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<ErrorBody>) {
    let reason = status.reason().unwrap_or("Unknown error");
    (status, Json(ErrorBody::new(reason)))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
    };

    use crate::api::test_util::expect_json;
    use crate::model::api::ErrorBody;

    #[backend_test]
    async fn unknown_route_is_json_404(client: Client) {
        let response = client.get("/api/nothing-here").dispatch().await;
        let body: ErrorBody = expect_json(response, Status::NotFound).await;
        assert_eq!(body.error, "No route for GET /api/nothing-here");
    }

    #[backend_test]
    async fn malformed_body_is_json_400(client: Client) {
        let response = client
            .post("/api/parties")
            .header(ContentType::JSON)
            .body("{not json")
            .dispatch()
            .await;
        let body: ErrorBody = expect_json(response, Status::BadRequest).await;
        assert_eq!(body.error, "Request body is not valid JSON");
    }

    #[backend_test]
    async fn missing_field_is_json_422(client: Client) {
        let response = client
            .post("/api/parties")
            .header(ContentType::JSON)
            .body(r#"{"name": "Nameless"}"#)
            .dispatch()
            .await;
        let body: ErrorBody = expect_json(response, Status::UnprocessableEntity).await;
        assert!(body.error.contains("missing a field"));
    }
}
