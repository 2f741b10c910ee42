//! First-violation-wins form validation.
//!
//! Each document kind carries a fixed, ordered list of predicate+message
//! rules. Validation walks the list and stops at the first rule that
//! fails, so the surfaced message is deterministic even when several
//! fields are invalid at once.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{InvoiceDocument, PurchaseOrderDocument};

pub const INVOICE_COMPANY_REQUIRED: &str =
    "Please specify a company before creating the invoice.";
pub const INVOICE_CUSTOMER_REQUIRED: &str = "Customer name is required";
pub const PO_COMPANY_REQUIRED: &str = "Company name is required";
pub const PO_SUPPLIER_REQUIRED: &str = "Supplier name is required";
pub const PO_DELIVERY_DATE_INVALID: &str = "Delivery date must be on or after the order date";

/// A single failed rule, carrying the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

type Rule<D> = fn(&D) -> Option<String>;

fn run_rules<D>(doc: &D, rules: &[Rule<D>]) -> Result<(), ValidationError> {
    for rule in rules {
        if let Some(message) = rule(doc) {
            return Err(ValidationError(message));
        }
    }
    Ok(())
}

fn quantity_violation(index: usize, quantity: Decimal) -> Option<String> {
    if quantity <= Decimal::ZERO {
        Some(format!(
            "Item {}: Quantity must be greater than zero",
            index + 1
        ))
    } else {
        None
    }
}

const INVOICE_RULES: &[Rule<InvoiceDocument>] = &[
    |doc| {
        doc.company_name
            .trim()
            .is_empty()
            .then(|| INVOICE_COMPANY_REQUIRED.to_string())
    },
    |doc| {
        doc.customer_name
            .trim()
            .is_empty()
            .then(|| INVOICE_CUSTOMER_REQUIRED.to_string())
    },
    |doc| {
        doc.items()
            .iter()
            .enumerate()
            .find_map(|(i, item)| quantity_violation(i, item.quantity()))
    },
];

const PO_RULES: &[Rule<PurchaseOrderDocument>] = &[
    |doc| {
        doc.company_name
            .trim()
            .is_empty()
            .then(|| PO_COMPANY_REQUIRED.to_string())
    },
    |doc| {
        doc.supplier_name
            .trim()
            .is_empty()
            .then(|| PO_SUPPLIER_REQUIRED.to_string())
    },
    |doc| {
        doc.items()
            .iter()
            .enumerate()
            .find_map(|(i, item)| quantity_violation(i, item.quantity()))
    },
    |doc| match (doc.delivery_date, doc.order_date) {
        (None, _) => Some(PO_DELIVERY_DATE_INVALID.to_string()),
        (Some(delivery), Some(order)) if delivery < order => {
            Some(PO_DELIVERY_DATE_INVALID.to_string())
        }
        _ => None,
    },
];

/// Validate a sales invoice. An empty items list passes the quantity rule
/// vacuously; whether a zero-item document should be submittable at all is
/// an open product question, so it is not rejected here.
pub fn validate_invoice(doc: &InvoiceDocument) -> Result<(), ValidationError> {
    run_rules(doc, INVOICE_RULES)
}

/// Validate a purchase order.
pub fn validate_purchase_order(doc: &PurchaseOrderDocument) -> Result<(), ValidationError> {
    run_rules(doc, PO_RULES)
}
