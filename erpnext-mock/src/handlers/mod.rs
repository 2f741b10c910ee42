mod method;
mod resource;

pub use method::client_submit;
pub use resource::{create_resource, get_resource, submit_resource};

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;

/// The not-found shape ERPNext clients expect.
pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "exc": "Not Found" }))).into_response()
}
