//! Derived-field computation for document forms.
//!
//! All monetary derivations round to 2 decimal places using
//! round-half-to-even (the `Decimal::round_dp` default). UI-facing
//! comparisons use the normalized string form, never raw floats.

use rust_decimal::Decimal;

/// Round a monetary value to 2 decimal places, half-to-even.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Derived per-line amount: quantity * rate.
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    round_money(quantity * rate)
}

/// Sum of per-line derived amounts.
pub fn items_subtotal(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    round_money(amounts.into_iter().sum())
}

/// Invoice grand total: subtotal plus shipping and tax adjustments.
pub fn grand_total(subtotal: Decimal, shipping_cost: Decimal, tax: Decimal) -> Decimal {
    round_money(subtotal + shipping_cost + tax)
}

/// The string form shown in the UI: trailing zeros stripped ("250", "292.5").
pub fn format_money(value: Decimal) -> String {
    value.normalize().to_string()
}
