use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::handlers::not_found;
use crate::models::DocType;
use crate::startup::AppState;

/// POST /api/method/frappe.client.submit — submit the document named in
/// the body. The `doc` field arrives either as a JSON object or as a
/// JSON-encoded string.
pub async fn client_submit(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let doc = match body.get("doc") {
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => parsed,
            Err(_) => return not_found(),
        },
        Some(other) => other.clone(),
        None => return not_found(),
    };

    let doctype = doc
        .get("doctype")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<DocType>().ok());
    let name = doc.get("name").and_then(Value::as_str);

    let (Some(doctype), Some(name)) = (doctype, name) else {
        return not_found();
    };

    match state.store.submit(doctype, name) {
        Some(doc) => {
            tracing::info!(doctype = doctype.as_str(), name = %doc.name, "client.submit");
            Json(json!({ "data": doc })).into_response()
        }
        None => not_found(),
    }
}
