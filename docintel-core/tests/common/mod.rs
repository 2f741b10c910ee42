//! Shared fixtures and in-memory collaborators for docintel-core tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use docintel_core::models::{
    FormDocument, InvoiceDocument, InvoiceExtraction, InvoiceItemExtraction, PoItemExtraction,
    PurchaseOrderDocument, PurchaseOrderExtraction,
};
use docintel_core::{DocumentRef, DocumentSession, DocumentSink, Extractor, SubmissionReply};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}

/// The invoice payload the mock extraction API answers with.
pub fn sample_invoice_extraction() -> InvoiceExtraction {
    InvoiceExtraction {
        invoice_id: "INV-2026-001".to_string(),
        vendor_name: "Test Customer".to_string(),
        invoice_date: date(2026, 1, 29),
        due_date: Some(date(2026, 2, 28)),
        billing_address_recipient: "Test Customer".to_string(),
        shipping_address: "123 Test St".to_string(),
        currency: Some("USD".to_string()),
        sub_total: dec("200"),
        shipping_cost: dec("15"),
        tax: dec("35"),
        invoice_total: dec("250"),
        items: vec![InvoiceItemExtraction {
            description: "Test Item 1".to_string(),
            category: "Electronics".to_string(),
            quantity: dec("2"),
            rate: dec("100"),
            amount: dec("200"),
        }],
    }
}

/// The purchase order payload the mock extraction API answers with. Its
/// total_amount (292.50) disagrees with the single 250.00 line on purpose:
/// population must recompute totals instead of trusting it.
pub fn sample_po_extraction() -> PurchaseOrderExtraction {
    PurchaseOrderExtraction {
        po_number: "PO-2026-00001".to_string(),
        date: date(2026, 1, 29),
        delivery_date: Some(date(2026, 2, 15)),
        supplier_name: "ABC Supplier".to_string(),
        company_name: "My Company".to_string(),
        currency: Some("USD".to_string()),
        total_amount: dec("292.50"),
        status: "Draft".to_string(),
        items: vec![PoItemExtraction {
            item_code: "ITEM-001".to_string(),
            description: "Steel Rod".to_string(),
            quantity: dec("10"),
            unit_price: dec("25"),
            total: dec("250"),
        }],
    }
}

/// Extractor that always answers with the canned invoice payload.
pub struct StaticInvoiceExtractor;

#[async_trait]
impl Extractor<InvoiceDocument> for StaticInvoiceExtractor {
    async fn extract(&self, _filename: &str, _bytes: Vec<u8>) -> anyhow::Result<InvoiceExtraction> {
        Ok(sample_invoice_extraction())
    }
}

/// Extractor that always answers with the canned purchase order payload.
pub struct StaticPoExtractor;

#[async_trait]
impl Extractor<PurchaseOrderDocument> for StaticPoExtractor {
    async fn extract(
        &self,
        _filename: &str,
        _bytes: Vec<u8>,
    ) -> anyhow::Result<PurchaseOrderExtraction> {
        Ok(sample_po_extraction())
    }
}

/// Extractor that fails every call.
pub struct FailingExtractor;

#[async_trait]
impl Extractor<InvoiceDocument> for FailingExtractor {
    async fn extract(&self, _filename: &str, _bytes: Vec<u8>) -> anyhow::Result<InvoiceExtraction> {
        anyhow::bail!("extraction service unavailable")
    }
}

/// Sink that replays a fixed reply, whatever the document.
pub struct ScriptedSink {
    pub reply: SubmissionReply,
}

#[async_trait]
impl<D: FormDocument> DocumentSink<D> for ScriptedSink {
    async fn submit(&self, _document: &D) -> SubmissionReply {
        self.reply.clone()
    }
}

/// Sink whose submit never resolves, for in-flight behavior tests.
pub struct PendingSink;

#[async_trait]
impl<D: FormDocument> DocumentSink<D> for PendingSink {
    async fn submit(&self, _document: &D) -> SubmissionReply {
        futures::future::pending::<SubmissionReply>().await
    }
}

pub fn submitted_reply(name: &str) -> SubmissionReply {
    SubmissionReply::Submitted {
        created: DocumentRef {
            name: name.to_string(),
            docstatus: 0,
        },
        submitted: DocumentRef {
            name: name.to_string(),
            docstatus: 1,
        },
    }
}

/// Upload the canned invoice and fill in the fields a user supplies before
/// submitting (company, currency from company).
pub async fn populated_invoice_session() -> DocumentSession<InvoiceDocument> {
    let mut session = DocumentSession::new();
    session
        .upload(&StaticInvoiceExtractor, "test_invoice.pdf", vec![0u8; 16])
        .await
        .expect("upload should populate the session");
    let doc = session.edit().expect("populated document is editable");
    doc.company_name = "DEMO".to_string();
    doc.set_currency_from_company("USD");
    session
}
