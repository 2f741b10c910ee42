use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "Document Intelligence API",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

pub async fn service_index() -> impl IntoResponse {
    Json(json!({
        "service": "ERPNext Document Intelligence API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/upload/invoice": "POST - Upload and process invoice PDF",
            "/upload/po": "POST - Upload and process purchase order PDF",
            "/health": "GET - Health check"
        }
    }))
}
