//! Raw extraction result schemas returned by the Document Intelligence API.
//!
//! Field names follow the extraction vendor's wire schema and are
//! case-sensitive: invoices use PascalCase keys, purchase orders snake_case.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One extracted invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItemExtraction {
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Invoice extraction payload (the `data` object of an upload response).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceExtraction {
    #[serde(rename = "InvoiceId")]
    pub invoice_id: String,
    #[serde(rename = "VendorName")]
    pub vendor_name: String,
    #[serde(rename = "InvoiceDate")]
    pub invoice_date: NaiveDate,
    #[serde(rename = "DueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "BillingAddressRecipient")]
    pub billing_address_recipient: String,
    #[serde(rename = "ShippingAddress")]
    pub shipping_address: String,
    #[serde(rename = "Currency", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "SubTotal")]
    pub sub_total: Decimal,
    #[serde(rename = "ShippingCost")]
    pub shipping_cost: Decimal,
    #[serde(rename = "Tax")]
    pub tax: Decimal,
    #[serde(rename = "InvoiceTotal")]
    pub invoice_total: Decimal,
    #[serde(rename = "Items")]
    pub items: Vec<InvoiceItemExtraction>,
}

/// One extracted purchase order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoItemExtraction {
    #[serde(default)]
    pub item_code: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Purchase order extraction payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderExtraction {
    pub po_number: String,
    pub date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub supplier_name: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub total_amount: Decimal,
    pub status: String,
    pub items: Vec<PoItemExtraction>,
}
