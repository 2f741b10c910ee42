//! Editable purchase order document.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DocumentKind, FormDocument, NoSuchLineItem, PurchaseOrderExtraction};
use crate::totals;
use crate::validation::{self, ValidationError};

/// Purchase order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoStatus {
    Draft,
    Pending,
    Submitted,
}

impl PoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoStatus::Draft => "Draft",
            PoStatus::Pending => "Pending",
            PoStatus::Submitted => "Submitted",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "Pending" => PoStatus::Pending,
            "Submitted" => PoStatus::Submitted,
            _ => PoStatus::Draft,
        }
    }
}

/// One purchase order line. The total is derived from quantity and unit
/// price and recomputed on every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct PoLineItem {
    pub item_code: String,
    pub description: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Decimal,
}

impl PoLineItem {
    pub fn new(
        item_code: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            description: description.into(),
            quantity,
            unit_price,
            total: totals::line_amount(quantity, unit_price),
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.total = totals::line_amount(self.quantity, self.unit_price);
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
        self.total = totals::line_amount(self.quantity, self.unit_price);
    }
}

/// Purchase order form document.
///
/// The total amount is derived from the line items and recomputed by every
/// mutator. Currency is prefilled from the extraction result but stays
/// editable, unlike the invoice's company-locked currency.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseOrderDocument {
    pub po_number: String,
    pub order_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub supplier_name: String,
    pub company_name: String,
    pub currency: String,
    pub status: PoStatus,
    items: Vec<PoLineItem>,
    total_amount: Decimal,
}

impl PurchaseOrderDocument {
    pub fn new() -> Self {
        Self {
            po_number: String::new(),
            order_date: None,
            delivery_date: None,
            supplier_name: String::new(),
            company_name: String::new(),
            currency: String::new(),
            status: PoStatus::Draft,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    pub fn items(&self) -> &[PoLineItem] {
        &self.items
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn add_item(&mut self, item: PoLineItem) {
        self.items.push(item);
        self.recompute_totals();
    }

    pub fn remove_item(&mut self, index: usize) -> Result<PoLineItem, NoSuchLineItem> {
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

    pub fn set_item_unit_price(
        &mut self,
        index: usize,
        unit_price: Decimal,
    ) -> Result<(), NoSuchLineItem> {
        let item = self.items.get_mut(index).ok_or(NoSuchLineItem(index))?;
        item.set_unit_price(unit_price);
        self.recompute_totals();
        Ok(())
    }

    fn recompute_totals(&mut self) {
        self.total_amount = totals::items_subtotal(self.items.iter().map(|i| i.total()));
    }
}

impl Default for PurchaseOrderDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument for PurchaseOrderDocument {
    type Extraction = PurchaseOrderExtraction;

    const KIND: DocumentKind = DocumentKind::PurchaseOrder;

    /// Bulk-assign every field from an extraction result. The extraction's
    /// own line totals and total_amount are discarded and recomputed.
    fn from_extraction(result: &PurchaseOrderExtraction) -> Self {
        let mut doc = Self::new();
        doc.po_number = result.po_number.clone();
        doc.order_date = Some(result.date);
        doc.delivery_date = result.delivery_date;
        doc.supplier_name = result.supplier_name.clone();
        doc.company_name = result.company_name.clone();
        doc.currency = result.currency.clone().unwrap_or_default();
        doc.status = PoStatus::from_string(&result.status);
        doc.items = result
            .items
            .iter()
            .map(|item| {
                PoLineItem::new(
                    item.item_code.clone(),
                    item.description.clone(),
                    item.quantity,
                    item.unit_price,
                )
            })
            .collect();
        doc.recompute_totals();
        doc
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_purchase_order(self)
    }
}
