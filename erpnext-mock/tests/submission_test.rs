mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_sales_invoice_assigns_series_name() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/resource/Sales%20Invoice", app.address))
        .json(&json!({ "customer": "Test Customer", "docstatus": 0 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "SINV-2026-00001");
    assert_eq!(body["data"]["docstatus"], 0);

    // The series advances per create.
    let response = client
        .post(format!("{}/api/resource/Sales%20Invoice", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "SINV-2026-00002");
}

#[tokio::test]
async fn put_submits_a_created_draft() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/api/resource/Purchase%20Order", app.address))
        .json(&json!({ "supplier": "ABC Supplier" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let name = created["data"]["name"].as_str().unwrap().to_string();
    assert_eq!(name, "PO-2026-00001");

    let response = client
        .put(format!(
            "{}/api/resource/Purchase%20Order/{}",
            app.address, name
        ))
        .json(&json!({ "docstatus": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "PO-2026-00001");
    assert_eq!(body["data"]["docstatus"], 1);

    // The stored doc reflects the submission.
    let fetched: serde_json::Value = client
        .get(format!(
            "{}/api/resource/Purchase%20Order/{}",
            app.address, name
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["data"]["docstatus"], 1);
}

#[tokio::test]
async fn frappe_client_submit_marks_docstatus() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/api/resource/Sales%20Invoice", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let name = created["data"]["name"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/api/method/frappe.client.submit", app.address))
        .json(&json!({ "doc": { "doctype": "Sales Invoice", "name": name } }))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["docstatus"], 1);
}

#[tokio::test]
async fn client_submit_accepts_json_encoded_doc() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/api/resource/Sales%20Invoice", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let name = created["data"]["name"].as_str().unwrap();

    let encoded = format!(r#"{{"doctype": "Sales Invoice", "name": "{}"}}"#, name);
    let response = client
        .post(format!("{}/api/method/frappe.client.submit", app.address))
        .json(&json!({ "doc": encoded }))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.status());
}

#[tokio::test]
async fn unknown_lookups_return_erpnext_not_found() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/resource/Customer/Nobody", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["exc"], "Not Found");
}

#[tokio::test]
async fn company_lookup_always_resolves_with_currency() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/resource/Company/DEMO", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "DEMO");
    assert_eq!(body["data"]["default_currency"], "USD");
}

#[tokio::test]
async fn created_entities_are_found_by_name() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/resource/Customer", app.address))
        .json(&json!({ "name": "Test Customer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Test Customer");

    let response = client
        .get(format!("{}/api/resource/Customer/Test%20Customer", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(StatusCode::OK, response.status());
}

#[tokio::test]
async fn unknown_doctype_is_rejected() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/resource/Delivery%20Note", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["exc"], "Not Found");
}

#[tokio::test]
async fn submitting_an_unknown_document_fails() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!(
            "{}/api/resource/Sales%20Invoice/SINV-2026-99999",
            app.address
        ))
        .json(&json!({ "docstatus": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
