//! Cart pricing calculations.
//!
//! Tax is charged on the item subtotal; the discount is then taken off the
//! taxed amount. Tax rates are stored as fractions, discounts as percentages.

use crate::cart::LineItem;
use crate::ids::LineItemId;
use serde::{Deserialize, Serialize};

/// Tax owed on `amount` at a fractional `rate` (0.08 for 8%).
pub fn calculate_tax(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Discount on `amount` at `percent` (10.0 for 10%).
pub fn calculate_discount(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

/// Whether a discount percentage takes effect.
///
/// Zero and anything above 100 contribute nothing.
pub fn discount_applies(percent: f64) -> bool {
    percent > 0.0 && percent <= 100.0
}

/// Final total for a single line item.
pub fn calculate_item_total(item: &LineItem) -> f64 {
    ItemPricing::for_item(item).total
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPricing {
    /// Line item ID.
    pub line_item_id: LineItemId,
    /// Price times quantity.
    pub subtotal: f64,
    /// Tax added to the subtotal.
    pub tax: f64,
    /// Discount taken off the taxed amount.
    pub discount: f64,
    /// Subtotal plus tax minus discount.
    pub total: f64,
}

impl ItemPricing {
    /// Price a line item.
    pub fn for_item(item: &LineItem) -> Self {
        let subtotal = item.price * f64::from(item.quantity);
        let mut running = subtotal;

        let tax = if item.taxable {
            calculate_tax(subtotal, item.tax_rate)
        } else {
            0.0
        };
        running += tax;

        let discount = if discount_applies(item.discount) {
            calculate_discount(running, item.discount)
        } else {
            0.0
        };
        running -= discount;

        Self {
            line_item_id: item.id.clone(),
            subtotal,
            tax,
            discount,
            total: running,
        }
    }
}

/// Pricing breakdown for a whole cart, in list order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartPricing {
    /// Sum of item subtotals.
    pub subtotal: f64,
    /// Sum of item taxes.
    pub tax_total: f64,
    /// Sum of item discounts.
    pub discount_total: f64,
    /// Sum of item totals.
    pub grand_total: f64,
    /// Per-item breakdown.
    pub line_items: Vec<ItemPricing>,
}

impl CartPricing {
    /// Price every item in order.
    pub fn for_items<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Self {
        items
            .into_iter()
            .map(ItemPricing::for_item)
            .fold(CartPricing::default(), |mut acc, line| {
                acc.subtotal += line.subtotal;
                acc.tax_total += line.tax;
                acc.discount_total += line.discount;
                acc.grand_total += line.total;
                acc.line_items.push(line);
                acc
            })
    }

    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        self.discount_total > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn item(price: f64, quantity: u32, tax_rate: Option<f64>, discount: f64) -> LineItem {
        LineItem {
            id: LineItemId::generate(),
            name: "Item".to_string(),
            price,
            quantity,
            taxable: tax_rate.is_some(),
            tax_rate: tax_rate.unwrap_or(0.0),
            discount,
        }
    }

    #[test]
    fn test_tax_then_discount() {
        let pricing = ItemPricing::for_item(&item(20.0, 2, Some(0.08), 10.0));
        assert!((pricing.subtotal - 40.0).abs() < EPSILON);
        assert!((pricing.tax - 3.2).abs() < EPSILON);
        assert!((pricing.discount - 4.32).abs() < EPSILON);
        assert!((pricing.total - 38.88).abs() < EPSILON);
    }

    #[test]
    fn test_untaxed_item() {
        let total = calculate_item_total(&item(10.0, 3, None, 0.0));
        assert!((total - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_rate_ignored_when_not_taxable() {
        let mut it = item(10.0, 1, None, 0.0);
        it.tax_rate = 0.5;
        assert!((calculate_item_total(&it) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_discount_ignored() {
        assert!((calculate_item_total(&item(10.0, 1, None, 0.0)) - 10.0).abs() < EPSILON);
        assert!((calculate_item_total(&item(10.0, 1, None, 150.0)) - 10.0).abs() < EPSILON);
        assert!((calculate_item_total(&item(10.0, 1, None, -5.0)) - 10.0).abs() < EPSILON);
        assert!(calculate_item_total(&item(10.0, 1, None, 100.0)).abs() < EPSILON);
    }

    #[test]
    fn test_cart_pricing_sums_lines() {
        let items = vec![
            item(20.0, 2, Some(0.08), 10.0),
            item(5.0, 4, None, 0.0),
        ];
        let pricing = CartPricing::for_items(&items);
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[1].line_item_id, items[1].id);
        assert!((pricing.subtotal - 60.0).abs() < EPSILON);
        assert!((pricing.tax_total - 3.2).abs() < EPSILON);
        assert!((pricing.grand_total - 58.88).abs() < EPSILON);
        assert!(pricing.has_discounts());
    }

    #[test]
    fn test_empty_cart_pricing() {
        let items: Vec<LineItem> = Vec::new();
        let pricing = CartPricing::for_items(&items);
        assert_eq!(pricing, CartPricing::default());
        assert!(!pricing.has_discounts());
    }
}
