//! Gallery access registration integration tests.
//!
//! Run with: `cargo test -p gala-api --test access_test`

mod helpers;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use gala_core::AccessGate;
use helpers::fakes::FakeDrive;
use helpers::{setup_test_app, test_config};
use serde_json::json;

fn registration_body() -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "subscribeToNewsletter": true
    })
}

#[tokio::test]
async fn valid_registration_is_accepted_and_recorded() {
    let app = setup_test_app();

    let response = app.server.post("/gallery/access").json(&registration_body()).await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["isExistingUser"], false);
    assert!(body["message"].as_str().unwrap().len() > 0);

    let submissions = app.registration.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].email, "ada@example.com");
    assert!(submissions[0].subscribe_to_newsletter);
}

#[tokio::test]
async fn known_email_reports_existing_user() {
    let app = setup_test_app();
    app.registration.seed_email("ada@example.com");

    let response = app.server.post("/gallery/access").json(&registration_body()).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<serde_json::Value>()["isExistingUser"], true);
}

#[tokio::test]
async fn missing_or_invalid_fields_are_rejected() {
    let app = setup_test_app();

    let mut no_first_name = registration_body();
    no_first_name["firstName"] = json!("");
    let response = app.server.post("/gallery/access").json(&no_first_name).await;
    assert_eq!(response.status_code(), 400);

    let mut bad_email = registration_body();
    bad_email["email"] = json!("not-an-email");
    let response = app.server.post("/gallery/access").json(&bad_email).await;
    assert_eq!(response.status_code(), 400);

    // Absent required field fails JSON extraction with the same error shape.
    let response = app
        .server
        .post("/gallery/access")
        .json(&json!({"firstName": "Ada", "lastName": "Lovelace"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn opt_in_defaults_to_false_when_omitted() {
    let app = setup_test_app();

    let mut body = registration_body();
    body.as_object_mut().unwrap().remove("subscribeToNewsletter");
    let response = app.server.post("/gallery/access").json(&body).await;
    assert_eq!(response.status_code(), 200);

    let submissions = app.registration.submissions.lock().unwrap();
    assert!(!submissions[0].subscribe_to_newsletter);
}

#[tokio::test]
async fn backend_failure_is_a_server_error() {
    let app = setup_test_app();
    app.registration.failing.store(true, Ordering::SeqCst);

    let response = app.server.post("/gallery/access").json(&registration_body()).await;
    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn unconfigured_backend_is_a_server_error() {
    let config = test_config();
    let store = Arc::new(FakeDrive::event_tree());
    let state = gala_api::setup::build_state(&config, store, None);
    let router = gala_api::setup::routes::setup_routes(&config, state).unwrap();
    let server = axum_test::TestServer::new(router).unwrap();

    let response = server.post("/gallery/access").json(&registration_body()).await;
    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "CONFIGURATION_MISSING");
}

#[tokio::test]
async fn client_gate_unlocks_once_per_session() {
    // The browser half of the flow: a fresh session is locked, flips after
    // one accepted submission, and stays unlocked for the session.
    let app = setup_test_app();
    let mut gate = AccessGate::new();
    assert!(!gate.is_unlocked());

    let response = app.server.post("/gallery/access").json(&registration_body()).await;
    assert_eq!(response.status_code(), 200);
    gate.unlock();
    assert!(gate.is_unlocked());

    // A new session starts locked again.
    assert!(!AccessGate::new().is_unlocked());
}
