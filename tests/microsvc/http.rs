//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::json;
use student_registry::microsvc;

use crate::support::{ana, empty_facade, service};

/// Bind to port 0 and return the actual address.
async fn start_server() -> String {
    let app = microsvc::router(Arc::new(service(empty_facade())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_lists_commands() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["commands"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn add_and_count() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/student.add"))
        .json(&ana())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let resp = client
        .post(format!("{base}/student.count"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "count": 1 }));
}

#[tokio::test]
async fn duplicate_mail_is_200_with_success_false() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for expected in [true, false] {
        let resp = client
            .post(format!("{base}/student.add"))
            .json(&ana())
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["success"], expected);
    }
}

#[tokio::test]
async fn missing_fields_are_200_with_success_false() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/student.add"))
        .json(&json!({ "name": "Ana" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["record"].is_null());
    assert_eq!(body["message"], "missing required field(s): lastname, mail");
}

#[tokio::test]
async fn wrongly_typed_body_returns_400_with_error() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/student.find"))
        .json(&json!({ "name": 42 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("decode failed"));
}

#[tokio::test]
async fn unknown_command_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/nonexistent"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
