#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use course_library_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use course_library_core::{
    application::in_memory_service,
    domain::query::property_mapping::PropertyMappingService,
    infrastructure::in_memory::InMemoryDatabase,
};
use serde_json::{Value, json};

pub fn test_server() -> TestServer {
    let service = in_memory_service(
        InMemoryDatabase::new(),
        Arc::new(PropertyMappingService::with_defaults()),
    );
    let state = AppState::new(Arc::new(Args::default()), service);

    TestServer::try_new(router(state).expect("router")).expect("test server")
}

pub fn author_payload(first_name: &str, last_name: &str, date_of_birth: &str, main_category: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "dateOfBirth": date_of_birth,
        "mainCategory": main_category,
    })
}

/// Create an author and return its id.
pub async fn create_author(server: &TestServer, payload: Value) -> String {
    let response = server.post("/api/authors").json(&payload).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["id"]
        .as_str()
        .expect("author id")
        .to_string()
}

/// Three authors: Berry (1980, Ships), Nancy (1978, Rum), Eli (1957, Ships).
pub async fn seed_authors(server: &TestServer) -> Vec<String> {
    let mut ids = Vec::new();
    for payload in [
        author_payload("Berry", "Griffin Beak Eldritch", "1980-07-23T00:00:00Z", "Ships"),
        author_payload("Nancy", "Swashbuckler Rye", "1978-05-21T00:00:00Z", "Rum"),
        author_payload("Eli", "Ivory Bones Sweet", "1957-12-16T00:00:00Z", "Ships"),
    ] {
        ids.push(create_author(server, payload).await);
    }
    ids
}
