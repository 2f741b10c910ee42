use serde::Serialize;

/// Doctypes the mock understands. Anything else is a 404, never a
/// best-effort match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    SalesInvoice,
    PurchaseOrder,
    Customer,
    Supplier,
    Item,
    Company,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::SalesInvoice => "Sales Invoice",
            DocType::PurchaseOrder => "Purchase Order",
            DocType::Customer => "Customer",
            DocType::Supplier => "Supplier",
            DocType::Item => "Item",
            DocType::Company => "Company",
        }
    }

    /// Name series for submittable documents; entity doctypes are named by
    /// the caller instead.
    pub fn series_prefix(&self) -> Option<&'static str> {
        match self {
            DocType::SalesInvoice => Some("SINV-2026-"),
            DocType::PurchaseOrder => Some("PO-2026-"),
            _ => None,
        }
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sales Invoice" => Ok(DocType::SalesInvoice),
            "Purchase Order" => Ok(DocType::PurchaseOrder),
            "Customer" => Ok(DocType::Customer),
            "Supplier" => Ok(DocType::Supplier),
            "Item" => Ok(DocType::Item),
            "Company" => Ok(DocType::Company),
            _ => Err(format!("Unknown doctype: {}", s)),
        }
    }
}

/// A stored document: its assigned name and docstatus (0 = draft,
/// 1 = submitted).
#[derive(Debug, Clone, Serialize)]
pub struct StoredDoc {
    pub name: String,
    pub docstatus: i32,
}
