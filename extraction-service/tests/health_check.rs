mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Document Intelligence API");
    assert!(
        body["timestamp"].as_str().is_some(),
        "Health response should carry a timestamp"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn index_lists_endpoints() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["service"], "ERPNext Document Intelligence API");
    assert!(body["endpoints"]["/upload/invoice"].is_string());
    assert!(body["endpoints"]["/upload/po"].is_string());

    app.cleanup().await;
}
