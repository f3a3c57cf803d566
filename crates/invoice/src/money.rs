//! Fixed-point money arithmetic and the one display locale.
//!
//! Amounts are whole euro cents. Totals are derived once per render from
//! the same cents values that end up on the page, so the printed net, tax
//! and gross rows cannot drift apart through per-row rounding.

use crate::record::LineItem;

/// An amount in whole euro cents. May be negative for credit lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Round a decimal euro amount to whole cents.
    pub fn from_eur(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }
}

impl std::ops::Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

/// Derived invoice totals, recomputed on every render and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub net: Cents,
    pub tax: Cents,
    pub gross: Cents,
}

impl Totals {
    /// Net is the sum of line totals, tax is derived from the net at
    /// `tax_rate` percent, and gross is their exact integer sum.
    pub fn compute(items: &[LineItem], tax_rate: f64) -> Totals {
        let net = items.iter().map(LineItem::total).fold(Cents::ZERO, std::ops::Add::add);
        let tax = Cents((net.0 as f64 * tax_rate / 100.0).round() as i64);
        Totals { net, tax, gross: net + tax }
    }
}

/// `1234567 -> "12,345.67"`, sign preserved.
fn format_amount(cents: Cents) -> String {
    let sign = if cents.0 < 0 { "-" } else { "" };
    let abs = cents.0.unsigned_abs();
    let whole = (abs / 100).to_string();
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{}.{:02}", sign, grouped, abs % 100)
}

/// Currency display: two decimals, thousands separators, fixed code.
pub fn format_eur(cents: Cents) -> String {
    format!("{} EUR", format_amount(cents))
}

/// Quantity display: two decimals, fixed unit.
pub fn format_quantity(quantity: f64) -> String {
    format!("{:.2} Stk", quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, price: f64) -> LineItem {
        LineItem { description: "Consulting".to_string(), quantity, price }
    }

    #[test]
    fn line_total_is_quantity_times_price_at_two_decimals() {
        assert_eq!(item(2.0, 100.0).total(), Cents(20000));
        assert_eq!(item(0.5, 99.99).total(), Cents(5000));
        assert_eq!(item(3.0, -10.0).total(), Cents(-3000));
    }

    #[test]
    fn reference_example_totals() {
        // services = [{Consulting, 2, 100}], taxRate 19
        let totals = Totals::compute(&[item(2.0, 100.0)], 19.0);
        assert_eq!(totals.net, Cents(20000));
        assert_eq!(totals.tax, Cents(3800));
        assert_eq!(totals.gross, Cents(23800));
    }

    #[test]
    fn empty_invoice_totals_are_zero() {
        let totals = Totals::compute(&[], 19.0);
        assert_eq!(totals.net, Cents::ZERO);
        assert_eq!(totals.tax, Cents::ZERO);
        assert_eq!(totals.gross, Cents::ZERO);
    }

    #[test]
    fn zero_rate_makes_gross_equal_net() {
        let totals = Totals::compute(&[item(1.0, 123.45)], 0.0);
        assert_eq!(totals.tax, Cents::ZERO);
        assert_eq!(totals.gross, totals.net);
    }

    #[test]
    fn gross_is_exactly_net_plus_tax_even_when_the_rate_rounds() {
        let totals = Totals::compute(&[item(1.0, 99.99)], 19.0);
        assert_eq!(totals.net, Cents(9999));
        assert_eq!(totals.tax, Cents(1900));
        assert_eq!(totals.gross.0, totals.net.0 + totals.tax.0);
    }

    #[test]
    fn amounts_group_thousands_and_keep_two_decimals() {
        assert_eq!(format_eur(Cents(0)), "0.00 EUR");
        assert_eq!(format_eur(Cents(23800)), "238.00 EUR");
        assert_eq!(format_eur(Cents(123_456_789)), "1,234,567.89 EUR");
        assert_eq!(format_eur(Cents(-123_456)), "-1,234.56 EUR");
    }

    #[test]
    fn quantities_use_two_decimals_and_the_piece_unit() {
        assert_eq!(format_quantity(2.0), "2.00 Stk");
        assert_eq!(format_quantity(0.25), "0.25 Stk");
    }
}
