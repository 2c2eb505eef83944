use serde::{Deserialize, Serialize};

use billforge_core::{Decimal, Money, ValueObject};
use billforge_products::SharedProduct;

/// A single billed entry on an invoice.
///
/// Value-like: an edit replaces the whole line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product: SharedProduct,
    rate: Money,
    quantity: u32,
}

impl LineItem {
    pub fn new(product: SharedProduct, rate: Money, quantity: u32) -> Self {
        Self {
            product,
            rate,
            quantity,
        }
    }

    pub fn product(&self) -> &SharedProduct {
        &self.product
    }

    pub fn rate(&self) -> Money {
        self.rate
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `rate * quantity`.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `Decimal`. Use
    /// [`checked_line_total`](Self::checked_line_total) for untrusted amounts.
    pub fn line_total(&self) -> Money {
        self.rate * Decimal::from(self.quantity)
    }

    /// `rate * quantity`, or `None` on overflow.
    pub fn checked_line_total(&self) -> Option<Money> {
        self.rate.checked_mul(Decimal::from(self.quantity))
    }
}

impl ValueObject for LineItem {}

/// Total for one line: `rate * quantity`.
pub fn calculate_line_total(item: &LineItem) -> Money {
    item.line_total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_products::Product;

    fn widget() -> SharedProduct {
        Product::new("Widget", "A small widget").shared()
    }

    #[test]
    fn line_total_is_rate_times_quantity() {
        let item = LineItem::new(widget(), Decimal::new(3, 0), 2);
        assert_eq!(calculate_line_total(&item), Decimal::new(6, 0));
    }

    #[test]
    fn zero_quantity_yields_zero() {
        let item = LineItem::new(widget(), Decimal::new(1999, 2), 0);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn fractional_rates_stay_exact() {
        let item = LineItem::new(widget(), Decimal::new(10, 2), 3);
        assert_eq!(item.line_total(), Decimal::new(30, 2));
        assert_eq!(item.line_total().to_string(), "0.30");
    }

    #[test]
    fn negative_rate_propagates_arithmetically() {
        let item = LineItem::new(widget(), Decimal::new(-5, 0), 2);
        assert_eq!(item.line_total(), Decimal::new(-10, 0));
    }

    #[test]
    fn checked_line_total_reports_overflow() {
        let item = LineItem::new(widget(), Decimal::MAX, 2);
        assert_eq!(item.checked_line_total(), None);

        let item = LineItem::new(widget(), Decimal::new(3, 0), 2);
        assert_eq!(item.checked_line_total(), Some(Decimal::new(6, 0)));
    }

    #[test]
    fn line_items_compare_by_product_value() {
        let a = LineItem::new(widget(), Decimal::ONE, 1);
        let b = LineItem::new(widget(), Decimal::ONE, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn rate_serializes_as_string() {
        let item = LineItem::new(widget(), Decimal::new(1050, 2), 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["rate"], serde_json::json!("10.50"));
        assert_eq!(json["quantity"], serde_json::json!(1));
        assert_eq!(json["product"]["name"], serde_json::json!("Widget"));
    }
}
