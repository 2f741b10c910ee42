use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::handlers::not_found;
use crate::models::DocType;
use crate::startup::AppState;

/// POST /api/resource/{doctype} — create a draft document or entity.
pub async fn create_resource(
    State(state): State<AppState>,
    Path(doctype): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Ok(doctype) = doctype.parse::<DocType>() else {
        return not_found();
    };

    let requested_name = body
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);
    let doc = state.store.create(doctype, requested_name);

    tracing::info!(doctype = doctype.as_str(), name = %doc.name, "resource created");
    Json(json!({ "data": doc })).into_response()
}

/// GET /api/resource/{doctype}/{name} — look up a stored document.
/// Companies always resolve and carry their default currency.
pub async fn get_resource(
    State(state): State<AppState>,
    Path((doctype, name)): Path<(String, String)>,
) -> Response {
    let Ok(doctype) = doctype.parse::<DocType>() else {
        return not_found();
    };

    if doctype == DocType::Company {
        return Json(json!({
            "data": { "name": name, "default_currency": "USD" }
        }))
        .into_response();
    }

    match state.store.get(doctype, &name) {
        Some(doc) => Json(json!({ "data": doc })).into_response(),
        None => not_found(),
    }
}

/// PUT /api/resource/{doctype}/{name} — submit a stored draft.
pub async fn submit_resource(
    State(state): State<AppState>,
    Path((doctype, name)): Path<(String, String)>,
) -> Response {
    let Ok(doctype) = doctype.parse::<DocType>() else {
        return not_found();
    };

    match state.store.submit(doctype, &name) {
        Some(doc) => {
            tracing::info!(doctype = doctype.as_str(), name = %doc.name, "resource submitted");
            Json(json!({ "data": doc })).into_response()
        }
        None => not_found(),
    }
}
