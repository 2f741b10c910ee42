//! Canned extraction payloads.
//!
//! These stand in for the real document intelligence backend: every upload
//! of a given kind answers with the same structured data, dated today.

use chrono::{NaiveDate, Utc};
use docintel_core::models::{
    InvoiceExtraction, InvoiceItemExtraction, PoItemExtraction, PurchaseOrderExtraction,
};
use rust_decimal::Decimal;

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn sample_invoice() -> InvoiceExtraction {
    InvoiceExtraction {
        invoice_id: "INV-2026-001".to_string(),
        vendor_name: "Sample Vendor Inc".to_string(),
        invoice_date: Utc::now().date_naive(),
        due_date: None,
        billing_address_recipient: "John Doe".to_string(),
        shipping_address: "123 Main St, City, State 12345".to_string(),
        currency: None,
        sub_total: money(100_000),
        shipping_cost: money(5_000),
        tax: money(5_000),
        invoice_total: money(110_000),
        items: vec![
            InvoiceItemExtraction {
                description: "Sample Product 1".to_string(),
                category: "Category A".to_string(),
                quantity: Decimal::from(2),
                rate: money(30_000),
                amount: money(60_000),
            },
            InvoiceItemExtraction {
                description: "Sample Product 2".to_string(),
                category: "Category B".to_string(),
                quantity: Decimal::from(1),
                rate: money(40_000),
                amount: money(40_000),
            },
        ],
    }
}

pub fn sample_purchase_order() -> PurchaseOrderExtraction {
    PurchaseOrderExtraction {
        po_number: "PO-2026-001".to_string(),
        date: Utc::now().date_naive(),
        delivery_date: NaiveDate::from_ymd_opt(2026, 2, 15),
        supplier_name: "ABC Suppliers Inc".to_string(),
        company_name: "My Company".to_string(),
        currency: Some("USD".to_string()),
        // The advertised total disagrees with the line sum, as real
        // extraction output sometimes does; consumers recompute.
        total_amount: money(152_000),
        status: "Pending".to_string(),
        items: vec![
            PoItemExtraction {
                item_code: String::new(),
                description: "Ergonomic Office Chair".to_string(),
                quantity: Decimal::from(5),
                unit_price: money(15_000),
                total: money(75_000),
            },
            PoItemExtraction {
                item_code: String::new(),
                description: "Standing Desk - Adjustable".to_string(),
                quantity: Decimal::from(3),
                unit_price: money(25_000),
                total: money(75_000),
            },
            PoItemExtraction {
                item_code: String::new(),
                description: "Monitor Arm Mount".to_string(),
                quantity: Decimal::from(4),
                unit_price: money(8_000),
                total: money(32_000),
            },
        ],
    }
}
