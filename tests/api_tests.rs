//! API integration tests
//!
//! Require a running server (either backend) with a reachable database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

async fn create_book(client: &Client, title: &str) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Integration Test",
            "desc": "Created by the test suite"
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_then_get_by_id() {
    let client = Client::new();
    let created = create_book(&client, "Create Then Get").await;
    let id = created["id"].as_i64().expect("No book ID");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Create Then Get");
    assert_eq!(body["author"], "Integration Test");
    assert_eq!(body["desc"], "Created by the test suite");

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_id_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "NOT FOUND");
    assert_eq!(body["message"], "Book with ID 999999 not found");
}

#[tokio::test]
#[ignore]
async fn test_get_non_numeric_id_returns_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/abc", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_malformed_body_returns_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("content-type", "application/json")
        .body(r#"{"title": 42}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_changes_fields_and_keeps_id() {
    let client = Client::new();
    let created = create_book(&client, "Before Update").await;
    let id = created["id"].as_i64().expect("No book ID");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "title": "After Update",
            "author": "Integration Test",
            "desc": "Updated by the test suite"
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["title"], "After Update");

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_id_returns_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/999999", BASE_URL))
        .json(&json!({
            "title": "t",
            "author": "a",
            "desc": "d"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "NOT FOUND");
}

#[tokio::test]
#[ignore]
async fn test_delete_then_get_returns_404() {
    let client = Client::new();
    let created = create_book(&client, "To Be Deleted").await;
    let id = created["id"].as_i64().expect("No book ID");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    assert_eq!(
        body["message"],
        format!("Book with ID {} deleted", id)
    );

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_double_delete_returns_404() {
    let client = Client::new();
    let created = create_book(&client, "Deleted Twice").await;
    let id = created["id"].as_i64().expect("No book ID");

    let first = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 200);

    let second = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 404);
}
