use crate::dtos::{InvoiceUploadResponse, PoUploadResponse};
use crate::mock_data;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;

struct PdfUpload {
    original_name: String,
    data: Vec<u8>,
}

/// Pull the `file` part out of the multipart body, enforcing the upload
/// contract: the part must exist, carry a filename, and end in `.pdf`.
async fn read_pdf_field(mut multipart: Multipart, max_bytes: usize) -> Result<PdfUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("").to_string();
        if original_name.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!("No file selected")));
        }
        if !original_name.ends_with(".pdf") {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Only PDF files are accepted"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
            .to_vec();

        if data.len() > max_bytes {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "File too large (max 16MB)"
            )));
        }

        return Ok(PdfUpload {
            original_name,
            data,
        });
    }

    Err(AppError::BadRequest(anyhow::anyhow!("No file provided")))
}

fn stored_filename(prefix: &str, original_name: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().format("%Y%m%d_%H%M%S"),
        original_name
    )
}

pub async fn upload_invoice(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_pdf_field(multipart, state.config.upload.max_bytes).await?;

    let filename = stored_filename("invoice", &upload.original_name);
    let size = upload.data.len();
    state.storage.save(&filename, upload.data).await?;

    tracing::info!(filename = %filename, size, "Invoice uploaded");

    Ok(Json(InvoiceUploadResponse {
        confidence: 0.85,
        data: mock_data::sample_invoice(),
        prediction_time: 2.5,
        filename,
    }))
}

pub async fn upload_po(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_pdf_field(multipart, state.config.upload.max_bytes).await?;

    let filename = stored_filename("po", &upload.original_name);
    let size = upload.data.len();
    state.storage.save(&filename, upload.data).await?;

    tracing::info!(filename = %filename, size, "Purchase Order uploaded");

    Ok(Json(PoUploadResponse {
        data: mock_data::sample_purchase_order(),
        filename,
    }))
}
