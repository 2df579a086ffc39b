mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use common::{author_payload, create_author, seed_authors, test_server};
use serde_json::{Value, json};
use uuid::Uuid;

fn accept(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::ACCEPT, HeaderValue::from_static(value))
}

#[tokio::test]
async fn test_create_author_with_courses_assigns_fresh_ids() {
    let server = test_server();
    let mut payload = author_payload("Jaimy", "Johnson", "1981-07-11T00:00:00Z", "Navigation");
    payload["courses"] = json!([
        { "title": "Reading the stars", "description": "Celestial navigation" },
        { "title": "Charts", "description": "Maps of the sea" }
    ]);

    let response = server.post("/api/authors").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    let author_id = body["id"].as_str().unwrap().to_string();
    assert!(!Uuid::parse_str(&author_id).unwrap().is_nil());
    assert_eq!(body["name"], "Jaimy Johnson");
    assert_eq!(body["mainCategory"], "Navigation");
    assert_eq!(body["links"].as_array().unwrap().len(), 4);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        format!("/api/authors/{}", author_id).as_str()
    );

    let courses = server
        .get(&format!("/api/authors/{}/courses", author_id))
        .await
        .json::<Vec<Value>>();
    assert_eq!(courses.len(), 2);
    let first = courses[0]["id"].as_str().unwrap();
    let second = courses[1]["id"].as_str().unwrap();
    assert_ne!(first, second);
    assert_ne!(first, author_id);
    assert!(courses.iter().all(|c| c["authorId"] == author_id.as_str()));
}

#[tokio::test]
async fn test_create_author_with_date_of_death_media_type() {
    let server = test_server();
    let mut payload = author_payload("Arnold", "Bones", "1702-03-06T00:00:00Z", "Singing");
    payload["dateOfDeath"] = json!("1762-06-15T00:00:00Z");

    let response = server
        .post("/api/authors")
        .json(&payload)
        .content_type("application/vnd.marvin.authorforcreationwithdateofdeath+json")
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    assert_eq!(response.json::<Value>()["age"], 60);

    let (name, value) = accept("application/vnd.marvin.author.full+json");
    let full = server
        .get(&format!("/api/authors/{}", id))
        .add_header(name, value)
        .await;

    full.assert_status_ok();
    assert_eq!(
        full.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.marvin.author.full+json"
    );
    let body = full.json::<Value>();
    assert_eq!(body["firstName"], "Arnold");
    assert!(body["dateOfDeath"].is_string());
}

#[tokio::test]
async fn test_standard_creation_ignores_date_of_death() {
    let server = test_server();
    let mut payload = author_payload("Arnold", "Bones", "1702-03-06T00:00:00Z", "Singing");
    payload["dateOfDeath"] = json!("1762-06-15T00:00:00Z");

    let id = create_author(&server, payload).await;

    let (name, value) = accept("application/vnd.marvin.author.full+json");
    let body = server
        .get(&format!("/api/authors/{}", id))
        .add_header(name, value)
        .await
        .json::<Value>();
    assert!(body["dateOfDeath"].is_null());
}

#[tokio::test]
async fn test_create_author_rejects_unsupported_content_type() {
    let server = test_server();

    let response = server
        .post("/api/authors")
        .json(&author_payload("A", "B", "1990-01-01T00:00:00Z", "C"))
        .content_type("text/plain")
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_author_validation_problem() {
    let server = test_server();
    let mut payload = author_payload("", "Bones", "1990-01-01T00:00:00Z", "Singing");
    payload["courses"] = json!([{ "title": "" }]);

    let response = server.post("/api/authors").json(&payload).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    let problem = response.json::<Value>();
    assert_eq!(problem["type"], "https://courselibrary.com/modelvalidationproblem");
    assert_eq!(problem["title"], "One or more validation errors occurred.");
    assert_eq!(problem["instance"], "/api/authors");
    assert!(problem["errors"]["firstName"].is_array());
    assert!(problem["errors"]["courses[0].title"].is_array());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/authors")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["title"],
        "One or more errors on input occurred."
    );
}

#[tokio::test]
async fn test_list_authors_with_paging_header() {
    let server = test_server();
    seed_authors(&server).await;

    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", 2)
        .add_query_param("pageNumber", 2)
        .await;

    response.assert_status_ok();
    let pagination: Value = serde_json::from_str(
        response
            .headers()
            .get("x-pagination")
            .unwrap()
            .to_str()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(
        pagination,
        json!({ "totalCount": 3, "pageSize": 2, "currentPage": 2, "totalPages": 2 })
    );
    let authors = response.json::<Vec<Value>>();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "Eli Ivory Bones Sweet");
}

#[tokio::test]
async fn test_page_beyond_end_is_empty() {
    let server = test_server();
    seed_authors(&server).await;

    let response = server
        .get("/api/authors")
        .add_query_param("pageNumber", 7)
        .await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_order_by_age_desc_lists_oldest_first() {
    let server = test_server();
    seed_authors(&server).await;

    let authors = server
        .get("/api/authors")
        .add_query_param("orderBy", "Age desc")
        .await
        .json::<Vec<Value>>();

    let names = authors
        .iter()
        .map(|a| a["name"].as_str().unwrap().split(' ').next().unwrap().to_string())
        .collect::<Vec<String>>();
    assert_eq!(names, vec!["Eli", "Nancy", "Berry"]);
}

#[tokio::test]
async fn test_filter_and_search() {
    let server = test_server();
    seed_authors(&server).await;

    let ships = server
        .get("/api/authors")
        .add_query_param("mainCategory", " Ships ")
        .await
        .json::<Vec<Value>>();
    assert_eq!(ships.len(), 2);

    let searched = server
        .get("/api/authors")
        .add_query_param("searchQuery", "Rye")
        .await
        .json::<Vec<Value>>();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0]["mainCategory"], "Rum");
}

#[tokio::test]
async fn test_unknown_order_by_or_fields_is_bad_request() {
    let server = test_server();

    server
        .get("/api/authors")
        .add_query_param("orderBy", "shoeSize")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/api/authors")
        .add_query_param("fields", "id,shoeSize")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fields_shape_the_list() {
    let server = test_server();
    seed_authors(&server).await;

    let authors = server
        .get("/api/authors")
        .add_query_param("fields", "Name, id")
        .await
        .json::<Vec<Value>>();

    let keys = authors[0]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect::<Vec<String>>();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"name".to_string()));
    assert!(keys.contains(&"id".to_string()));
}

#[tokio::test]
async fn test_hateoas_list_envelope() {
    let server = test_server();
    seed_authors(&server).await;

    let (name, value) = accept("application/vnd.marvin.hateoas+json");
    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", 1)
        .add_query_param("pageNumber", 2)
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["value"].as_array().unwrap().len(), 1);
    assert_eq!(body["value"][0]["links"].as_array().unwrap().len(), 4);
    let rels = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["rel"].as_str().unwrap().to_string())
        .collect::<Vec<String>>();
    assert_eq!(rels, vec!["self", "nextPage", "previousPage"]);
}

#[tokio::test]
async fn test_get_author_representations() {
    let server = test_server();
    let ids = seed_authors(&server).await;
    let path = format!("/api/authors/{}", ids[0]);

    let friendly = server.get(&path).await.json::<Value>();
    assert_eq!(friendly["name"], "Berry Griffin Beak Eldritch");
    assert!(friendly.get("links").is_none());

    let (name, value) = accept("application/vnd.marvin.author.friendly.hateoas+json");
    let with_links = server
        .get(&path)
        .add_query_param("fields", "id")
        .add_header(name, value)
        .await
        .json::<Value>();
    assert_eq!(with_links.as_object().unwrap().len(), 2);
    assert_eq!(
        with_links["links"][0]["href"],
        format!("{}?fields=id", path).as_str()
    );
}

#[tokio::test]
async fn test_get_author_negotiation_failures() {
    let server = test_server();
    let ids = seed_authors(&server).await;
    let path = format!("/api/authors/{}", ids[0]);

    let (name, value) = accept("text/html");
    server
        .get(&path)
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);

    let (name, value) = accept("garbage");
    server
        .get(&path)
        .add_header(name, value)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get(&format!("/api/authors/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_author() {
    let server = test_server();
    let mut payload = author_payload("Jaimy", "Johnson", "1981-07-11T00:00:00Z", "Navigation");
    payload["courses"] = json!([{ "title": "Reading the stars" }]);
    let id = create_author(&server, payload).await;

    server
        .delete(&format!("/api/authors/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete(&format!("/api/authors/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/authors/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/api/authors/{}/courses", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_options() {
    let server = test_server();

    let response = server.method(axum::http::Method::OPTIONS, "/api/authors").await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ALLOW).unwrap(),
        "GET,OPTIONS,POST"
    );
}

#[tokio::test]
async fn test_head_returns_headers_only() {
    let server = test_server();
    seed_authors(&server).await;

    let response = server.method(axum::http::Method::HEAD, "/api/authors").await;

    response.assert_status_ok();
    assert!(response.headers().contains_key("x-pagination"));
    assert!(response.as_bytes().is_empty());
}
