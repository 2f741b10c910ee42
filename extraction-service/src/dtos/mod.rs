use docintel_core::models::{InvoiceExtraction, PurchaseOrderExtraction};
use serde::Serialize;

/// Body of a successful invoice upload.
#[derive(Debug, Serialize)]
pub struct InvoiceUploadResponse {
    pub confidence: f64,
    pub data: InvoiceExtraction,
    #[serde(rename = "predictionTime")]
    pub prediction_time: f64,
    pub filename: String,
}

/// Body of a successful purchase order upload: the extraction fields flat
/// at the top level, plus the stored filename.
#[derive(Debug, Serialize)]
pub struct PoUploadResponse {
    #[serde(flatten)]
    pub data: PurchaseOrderExtraction,
    pub filename: String,
}
