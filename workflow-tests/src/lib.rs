//! End-to-end workflow test infrastructure.
//!
//! Each test spawns its own extraction-service and erpnext-mock on
//! ephemeral ports and drives the document lifecycle through HTTP-backed
//! implementations of the core collaborator traits, exactly as a frontend
//! would. Nothing is shared between tests; teardown aborts both servers.

use std::sync::Once;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use uuid::Uuid;

use docintel_core::models::{
    InvoiceDocument, InvoiceExtraction, PurchaseOrderDocument, PurchaseOrderExtraction,
};
use docintel_core::{
    CompanyDirectory, DocumentRef, DocumentSink, Extractor, SubmissionReply,
};
use erpnext_mock::config::ErpNextConfig;
use extraction_service::config::ExtractionConfig;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// HTTP-backed extraction collaborator: uploads the file as multipart
/// `file` and parses the canned payload out of the response.
pub struct HttpExtractor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExtractor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post_pdf(&self, path: &str, filename: &str, bytes: Vec<u8>) -> Result<Value> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await
            .context("extraction request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body["error"].as_str().unwrap_or("upload rejected");
            return Err(anyhow!("{} ({})", message, status));
        }

        Ok(response.json().await.context("invalid extraction body")?)
    }
}

#[async_trait]
impl Extractor<InvoiceDocument> for HttpExtractor {
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<InvoiceExtraction> {
        let body = self.post_pdf("/upload/invoice", filename, bytes).await?;
        let extraction = serde_json::from_value(body["data"].clone())
            .context("invoice extraction schema mismatch")?;
        Ok(extraction)
    }
}

#[async_trait]
impl Extractor<PurchaseOrderDocument> for HttpExtractor {
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<PurchaseOrderExtraction> {
        let body = self.post_pdf("/upload/po", filename, bytes).await?;
        let extraction =
            serde_json::from_value(body).context("purchase order extraction schema mismatch")?;
        Ok(extraction)
    }
}

/// HTTP-backed document-system collaborator: runs the create-then-submit
/// sequence against the ERPNext surface and reports whatever came back.
pub struct ErpNextClient {
    client: reqwest::Client,
    base_url: String,
}

impl ErpNextClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn failure_reason(response: reqwest::Response) -> String {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        body["exc"]
            .as_str()
            .or_else(|| body["error"].as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {}", status))
    }

    async fn create_then_submit(&self, doctype_path: &str, payload: Value) -> SubmissionReply {
        let create_url = format!("{}/api/resource/{}", self.base_url, doctype_path);
        let response = match self.client.post(&create_url).json(&payload).send().await {
            Ok(response) => response,
            Err(err) => {
                return SubmissionReply::Failed {
                    reason: err.to_string(),
                    created: None,
                }
            }
        };
        if !response.status().is_success() {
            return SubmissionReply::Failed {
                reason: Self::failure_reason(response).await,
                created: None,
            };
        }
        let created = match response.json::<DataEnvelope<DocumentRef>>().await {
            Ok(envelope) => envelope.data,
            Err(err) => {
                return SubmissionReply::Failed {
                    reason: format!("invalid create response: {}", err),
                    created: None,
                }
            }
        };

        let submit_url = format!("{}/{}", create_url, created.name);
        let response = match self
            .client
            .put(&submit_url)
            .json(&json!({ "docstatus": 1 }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return SubmissionReply::Failed {
                    reason: err.to_string(),
                    created: Some(created),
                }
            }
        };
        if !response.status().is_success() {
            let reason = Self::failure_reason(response).await;
            return SubmissionReply::Failed {
                reason,
                created: Some(created),
            };
        }
        match response.json::<DataEnvelope<DocumentRef>>().await {
            Ok(envelope) => SubmissionReply::Submitted {
                created,
                submitted: envelope.data,
            },
            Err(err) => SubmissionReply::Failed {
                reason: format!("invalid submit response: {}", err),
                created: Some(created),
            },
        }
    }
}

#[async_trait]
impl CompanyDirectory for ErpNextClient {
    async fn default_currency(&self, company: &str) -> Result<String> {
        let url = format!("{}/api/resource/Company/{}", self.base_url, company);
        let body: Value = self
            .client
            .get(&url)
            .send()
            .await
            .context("company lookup failed")?
            .json()
            .await
            .context("invalid company body")?;
        body["data"]["default_currency"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("company {} has no default currency", company))
    }
}

#[async_trait]
impl DocumentSink<InvoiceDocument> for ErpNextClient {
    async fn submit(&self, document: &InvoiceDocument) -> SubmissionReply {
        let payload = json!({
            "customer": document.customer_name,
            "company": document.company_name,
            "currency": document.currency(),
            "items": document.items(),
            "shipping_cost": document.shipping_cost(),
            "tax": document.tax(),
            "grand_total": document.total(),
        });
        self.create_then_submit("Sales%20Invoice", payload).await
    }
}

#[async_trait]
impl DocumentSink<PurchaseOrderDocument> for ErpNextClient {
    async fn submit(&self, document: &PurchaseOrderDocument) -> SubmissionReply {
        let payload = json!({
            "supplier": document.supplier_name,
            "company": document.company_name,
            "currency": document.currency,
            "schedule_date": document.delivery_date,
            "items": document.items(),
            "grand_total": document.total_amount(),
        });
        self.create_then_submit("Purchase%20Order", payload).await
    }
}

/// One test's worth of infrastructure: both servers on ephemeral ports,
/// torn down with the harness.
pub struct TestHarness {
    pub extraction_url: String,
    pub erpnext_url: String,
    upload_dir: String,
    extraction_handle: JoinHandle<()>,
    erpnext_handle: JoinHandle<()>,
}

impl TestHarness {
    pub async fn spawn() -> Result<Self> {
        init_tracing();

        let upload_dir = format!("target/test-uploads-{}", Uuid::new_v4());

        let mut extraction_config =
            ExtractionConfig::load().context("failed to load extraction configuration")?;
        extraction_config.common.port = 0;
        extraction_config.upload.dir = upload_dir.clone();

        let extraction_app = extraction_service::startup::Application::build(extraction_config)
            .await
            .map_err(|e| anyhow!("failed to build extraction-service: {}", e))?;
        let extraction_url = format!("http://127.0.0.1:{}", extraction_app.port());
        let extraction_handle = tokio::spawn(async move {
            extraction_app.run_until_stopped().await.ok();
        });

        let erpnext_app = erpnext_mock::startup::Application::build(ErpNextConfig { port: 0 })
            .await
            .map_err(|e| anyhow!("failed to build erpnext-mock: {}", e))?;
        let erpnext_url = format!("http://127.0.0.1:{}", erpnext_app.port());
        let erpnext_handle = tokio::spawn(async move {
            erpnext_app.run_until_stopped().await.ok();
        });

        let harness = Self {
            extraction_url,
            erpnext_url,
            upload_dir,
            extraction_handle,
            erpnext_handle,
        };
        harness.wait_until_healthy().await?;
        tracing::info!(
            extraction = %harness.extraction_url,
            erpnext = %harness.erpnext_url,
            "workflow harness ready"
        );
        Ok(harness)
    }

    async fn wait_until_healthy(&self) -> Result<()> {
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", self.extraction_url);
        for _ in 0..50 {
            if let Ok(response) = client.get(&health_url).send().await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
        Err(anyhow!("extraction-service never became healthy"))
    }

    pub fn extractor(&self) -> HttpExtractor {
        HttpExtractor::new(self.extraction_url.clone())
    }

    pub fn erpnext(&self) -> ErpNextClient {
        ErpNextClient::new(self.erpnext_url.clone())
    }

    /// Stop both servers and remove the per-test upload directory.
    pub async fn teardown(self) {
        self.extraction_handle.abort();
        self.erpnext_handle.abort();
        let _ = tokio::fs::remove_dir_all(&self.upload_dir).await;
    }
}
