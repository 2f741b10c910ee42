//! Document models: raw extraction schemas and the editable form documents
//! built from them.

mod extraction;
mod invoice;
mod purchase_order;

pub use extraction::{
    InvoiceExtraction, InvoiceItemExtraction, PoItemExtraction, PurchaseOrderExtraction,
};
pub use invoice::{InvoiceDocument, InvoiceLineItem};
pub use purchase_order::{PoLineItem, PoStatus, PurchaseOrderDocument};

use crate::validation::ValidationError;
use thiserror::Error;

/// Returned by line-item mutators when the index does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line item {0} does not exist")]
pub struct NoSuchLineItem(pub usize);

/// The two document kinds the harness understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Invoice,
    PurchaseOrder,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::PurchaseOrder => "purchase_order",
        }
    }

    /// Reference-number prefixes the document system assigns on creation.
    pub fn reference_prefixes(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Invoice => &["SINV-", "ACC-SINV-"],
            DocumentKind::PurchaseOrder => &["PO-"],
        }
    }
}

/// An editable form document that can be bulk-populated from an extraction
/// result and validated for submission.
pub trait FormDocument: Send + Sync + Sized {
    type Extraction: Send + Sync;

    const KIND: DocumentKind;

    fn from_extraction(result: &Self::Extraction) -> Self;

    fn validate(&self) -> Result<(), ValidationError>;
}
