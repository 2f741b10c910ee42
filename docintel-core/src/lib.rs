//! docintel-core: domain layer for the document intelligence harness.
//!
//! Everything a form frontend needs to honor the document contract lives
//! here: the raw extraction schemas, the editable invoice and purchase
//! order documents with their derived totals, first-violation-wins
//! validation, the three-way submission outcome classification, and the
//! upload/process/submit lifecycle that ties them together.

pub mod lifecycle;
pub mod models;
pub mod outcome;
pub mod totals;
pub mod validation;

pub use lifecycle::{
    CompanyDirectory, DocumentSession, DocumentSink, DocumentState, Extractor, LifecycleError,
};
pub use models::{
    DocumentKind, FormDocument, InvoiceDocument, InvoiceExtraction, InvoiceLineItem, NoSuchLineItem,
    PoLineItem, PoStatus, PurchaseOrderDocument, PurchaseOrderExtraction,
};
pub use outcome::{resolve_outcome, DocumentRef, SubmissionOutcome, SubmissionReply};
pub use validation::ValidationError;
