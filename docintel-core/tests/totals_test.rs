//! Derived-field calculator tests: per-line amounts, subtotals, grand
//! totals, and the recompute-on-every-edit invariant.

mod common;

use common::{dec, sample_invoice_extraction, sample_po_extraction};
use docintel_core::models::{FormDocument, InvoiceDocument, InvoiceLineItem, PurchaseOrderDocument};
use docintel_core::totals::{format_money, grand_total, items_subtotal, line_amount, round_money};

#[test]
fn line_amount_is_quantity_times_rate() {
    assert_eq!(format_money(line_amount(dec("2"), dec("100"))), "200");
    assert_eq!(format_money(line_amount(dec("2.5"), dec("100"))), "250");
    assert_eq!(format_money(line_amount(dec("3"), dec("0"))), "0");
}

#[test]
fn monetary_rounding_is_half_to_even() {
    // 2.345 and 2.355 land on opposite sides under banker's rounding.
    assert_eq!(round_money(dec("2.345")).to_string(), "2.34");
    assert_eq!(round_money(dec("2.355")).to_string(), "2.36");
    assert_eq!(format_money(line_amount(dec("0.03"), dec("78.5"))), "2.36");
}

#[test]
fn invoice_totals_match_reference_scenario() {
    // items=[{quantity: 2, rate: 100}], shipping 15, tax 35
    let extraction = sample_invoice_extraction();
    let doc = InvoiceDocument::from_extraction(&extraction);

    assert_eq!(format_money(doc.subtotal()), "200");
    assert_eq!(format_money(doc.total()), "250");
}

#[test]
fn totals_recompute_after_each_edit() {
    let mut doc = InvoiceDocument::from_extraction(&sample_invoice_extraction());

    doc.set_item_quantity(0, dec("3")).unwrap();
    assert_eq!(format_money(doc.items()[0].amount()), "300");
    assert_eq!(format_money(doc.subtotal()), "300");
    assert_eq!(format_money(doc.total()), "350");

    doc.set_item_rate(0, dec("50")).unwrap();
    assert_eq!(format_money(doc.subtotal()), "150");
    assert_eq!(format_money(doc.total()), "200");

    doc.set_shipping_cost(dec("10"));
    doc.set_tax(dec("0"));
    assert_eq!(format_money(doc.total()), "160");

    // Re-applying the same quantity leaves the derived fields unchanged.
    doc.set_item_quantity(0, dec("3")).unwrap();
    assert_eq!(format_money(doc.subtotal()), "150");
    assert_eq!(format_money(doc.total()), "160");
}

#[test]
fn adding_and_removing_items_updates_subtotal() {
    let mut doc = InvoiceDocument::from_extraction(&sample_invoice_extraction());
    doc.add_item(InvoiceLineItem::new(
        "Test Item 2",
        "Office",
        dec("3"),
        dec("200"),
    ));

    assert_eq!(doc.items().len(), 2);
    assert_eq!(format_money(doc.subtotal()), "800");
    assert_eq!(format_money(doc.total()), "850");

    let removed = doc.remove_item(1).unwrap();
    assert_eq!(removed.description, "Test Item 2");
    assert_eq!(format_money(doc.subtotal()), "200");

    assert!(doc.remove_item(5).is_err());
}

#[test]
fn po_total_is_recomputed_from_items_not_extraction() {
    // The canned extraction claims 292.50 but carries a single 10 x 25 line.
    let doc = PurchaseOrderDocument::from_extraction(&sample_po_extraction());

    assert_eq!(format_money(doc.items()[0].total()), "250");
    assert_eq!(format_money(doc.total_amount()), "250");
}

#[test]
fn po_total_tracks_item_edits() {
    let mut doc = PurchaseOrderDocument::from_extraction(&sample_po_extraction());

    doc.set_item_unit_price(0, dec("29.25")).unwrap();
    assert_eq!(format_money(doc.total_amount()), "292.5");

    doc.set_item_quantity(0, dec("4")).unwrap();
    assert_eq!(format_money(doc.total_amount()), "117");
}

#[test]
fn subtotal_sums_every_line() {
    let amounts = [dec("600"), dec("400"), dec("0.01")];
    assert_eq!(format_money(items_subtotal(amounts)), "1000.01");
    assert_eq!(
        format_money(grand_total(dec("1000"), dec("50"), dec("50"))),
        "1100"
    );
}
