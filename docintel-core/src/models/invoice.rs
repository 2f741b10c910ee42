//! Editable sales invoice document.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{DocumentKind, FormDocument, InvoiceExtraction, NoSuchLineItem};
use crate::totals;
use crate::validation::{self, ValidationError};

/// One invoice line. The amount is derived from quantity and rate and is
/// recomputed on every mutation; it cannot be set independently.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceLineItem {
    pub description: String,
    pub category: String,
    quantity: Decimal,
    rate: Decimal,
    amount: Decimal,
}

impl InvoiceLineItem {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            quantity,
            rate,
            amount: totals::line_amount(quantity, rate),
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.amount = totals::line_amount(self.quantity, self.rate);
    }

    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = rate;
        self.amount = totals::line_amount(self.quantity, self.rate);
    }
}

/// Sales invoice form document.
///
/// Subtotal and total are derived from the line items and adjustments and
/// are recomputed by every mutator. The currency is applied once from the
/// company record and is read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDocument {
    pub invoice_id: String,
    pub vendor_name: String,
    pub customer_name: String,
    pub company_name: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub billing_address: String,
    pub shipping_address: String,
    currency: Option<String>,
    items: Vec<InvoiceLineItem>,
    shipping_cost: Decimal,
    tax: Decimal,
    subtotal: Decimal,
    total: Decimal,
}

impl InvoiceDocument {
    pub fn new() -> Self {
        Self {
            invoice_id: String::new(),
            vendor_name: String::new(),
            customer_name: String::new(),
            company_name: String::new(),
            invoice_date: None,
            due_date: None,
            billing_address: String::new(),
            shipping_address: String::new(),
            currency: None,
            items: Vec::new(),
            shipping_cost: Decimal::ZERO,
            tax: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    pub fn items(&self) -> &[InvoiceLineItem] {
        &self.items
    }

    pub fn shipping_cost(&self) -> Decimal {
        self.shipping_cost
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Apply the company's default currency. First write wins; the field is
    /// read-only once set.
    pub fn set_currency_from_company(&mut self, currency: impl Into<String>) {
        if self.currency.is_none() {
            self.currency = Some(currency.into());
        }
    }

    pub fn add_item(&mut self, item: InvoiceLineItem) {
        self.items.push(item);
        self.recompute_totals();
    }

    pub fn remove_item(&mut self, index: usize) -> Result<InvoiceLineItem, NoSuchLineItem> {
        if index >= self.items.len() {
            return Err(NoSuchLineItem(index));
        }
        let removed = self.items.remove(index);
        self.recompute_totals();
        Ok(removed)
    }

    pub fn set_item_quantity(
        &mut self,
        index: usize,
        quantity: Decimal,
    ) -> Result<(), NoSuchLineItem> {
        let item = self.items.get_mut(index).ok_or(NoSuchLineItem(index))?;
        item.set_quantity(quantity);
        self.recompute_totals();
        Ok(())
    }

    pub fn set_item_rate(&mut self, index: usize, rate: Decimal) -> Result<(), NoSuchLineItem> {
        let item = self.items.get_mut(index).ok_or(NoSuchLineItem(index))?;
        item.set_rate(rate);
        self.recompute_totals();
        Ok(())
    }

    pub fn set_shipping_cost(&mut self, shipping_cost: Decimal) {
        self.shipping_cost = shipping_cost;
        self.recompute_totals();
    }

    pub fn set_tax(&mut self, tax: Decimal) {
        self.tax = tax;
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        self.subtotal = totals::items_subtotal(self.items.iter().map(|i| i.amount()));
        self.total = totals::grand_total(self.subtotal, self.shipping_cost, self.tax);
    }
}

impl Default for InvoiceDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument for InvoiceDocument {
    type Extraction = InvoiceExtraction;

    const KIND: DocumentKind = DocumentKind::Invoice;

    /// Bulk-assign every field from an extraction result. Extraction-supplied
    /// amounts and totals are discarded and recomputed from the line items.
    fn from_extraction(result: &InvoiceExtraction) -> Self {
        let mut doc = Self::new();
        doc.invoice_id = result.invoice_id.clone();
        doc.vendor_name = result.vendor_name.clone();
        doc.customer_name = result.billing_address_recipient.clone();
        doc.invoice_date = Some(result.invoice_date);
        doc.due_date = result.due_date;
        doc.billing_address = result.billing_address_recipient.clone();
        doc.shipping_address = result.shipping_address.clone();
        doc.shipping_cost = result.shipping_cost;
        doc.tax = result.tax;
        doc.items = result
            .items
            .iter()
            .map(|item| {
                InvoiceLineItem::new(
                    item.description.clone(),
                    item.category.clone(),
                    item.quantity,
                    item.rate,
                )
            })
            .collect();
        doc.recompute_totals();
        doc
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_invoice(self)
    }
}
