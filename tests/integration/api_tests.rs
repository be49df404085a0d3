//! API integration tests against a running server with a live database

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its id
async fn create_book(client: &Client, status: &str) -> String {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "status": status
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse create response");
    body["id"].as_str().expect("No book ID").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let id = create_book(&client, "available").await;
    assert!(!id.is_empty());
    let url = format!("{}/books/{}", BASE_URL, id);

    let response = client.get(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"id": id, "title": "Dune", "author": "Herbert", "isbn": "123", "status": "available"})
    );

    let response = client
        .put(&url)
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "status": "checked_out"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = client
        .get(&url)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["status"], "checked_out");

    let response = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();
    let id = create_book(&client, "available").await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert!(books.iter().any(|b| b["id"] == id));

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_is_accepted() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/{}", BASE_URL, i32::MAX))
        .json(&json!({
            "title": "Ghost",
            "author": "Nobody",
            "isbn": "000",
            "status": "lost"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_invalid_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/not-a-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
