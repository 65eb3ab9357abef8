//! Line items and the pending entry form.

use crate::ids::LineItemId;
use serde::{Deserialize, Serialize};

/// A validated entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier, assigned on first add.
    pub id: LineItemId,
    /// Item name, never blank.
    pub name: String,
    /// Unit price, `>= 0`.
    pub price: f64,
    /// Quantity, `>= 1`.
    pub quantity: u32,
    /// Whether tax applies to this item.
    pub taxable: bool,
    /// Tax rate as a fraction in `0..=1`; zero when not taxable.
    pub tax_rate: f64,
    /// Discount percentage in `0..=100`; zero means none.
    pub discount: f64,
}

/// Raw, unvalidated form state for the item being composed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEntry {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub taxable: bool,
    /// Tax rate as a percentage, e.g. `"8"`.
    pub tax_rate: String,
    /// Discount percentage; empty means no discount.
    pub discount: String,
}

impl PendingEntry {
    /// Render a line item back into its raw form.
    ///
    /// The stored tax fraction is shown as a percentage again.
    pub fn from_item(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
            taxable: item.taxable,
            tax_rate: display_percent(item.tax_rate),
            discount: item.discount.to_string(),
        }
    }

    /// Whether every field is at its default.
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }
}

/// Render a stored tax fraction as percentage text.
///
/// Scaling by 100 leaves noise such as `7.000000000000001`; the cleaned text
/// is used only when dividing it by 100 again yields the stored fraction.
fn display_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    let cleaned = (percent * 1e10).round() / 1e10;
    if cleaned.is_finite() && cleaned / 100.0 == fraction {
        cleaned.to_string()
    } else {
        percent.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, tax_rate: f64, discount: f64) -> LineItem {
        LineItem {
            id: LineItemId::new("item-1"),
            name: "Widget".to_string(),
            price,
            quantity: 3,
            taxable: tax_rate > 0.0,
            tax_rate,
            discount,
        }
    }

    #[test]
    fn test_from_item_renders_raw_fields() {
        let entry = PendingEntry::from_item(&item(10.5, 0.08, 5.0));
        assert_eq!(entry.name, "Widget");
        assert_eq!(entry.price, "10.5");
        assert_eq!(entry.quantity, "3");
        assert!(entry.taxable);
        assert_eq!(entry.tax_rate, "8");
        assert_eq!(entry.discount, "5");
    }

    #[test]
    fn test_from_item_hides_float_noise() {
        let entry = PendingEntry::from_item(&item(10.0, 0.07, 0.0));
        assert_eq!(entry.tax_rate, "7");
        assert_eq!(entry.price, "10");
        assert_eq!(entry.discount, "0");
    }

    #[test]
    fn test_from_item_keeps_extreme_prices() {
        let entry = PendingEntry::from_item(&item(1e300, 0.0, 0.0));
        assert_eq!(entry.price.parse::<f64>().unwrap(), 1e300);

        let entry = PendingEntry::from_item(&item(4e-11, 0.0, 0.0));
        assert_eq!(entry.price, "0.00000000004");
    }

    #[test]
    fn test_tax_percent_falls_back_to_raw_text() {
        // Too small for the cleanup, which would round it to "0".
        let fraction = 1e-15;
        let entry = PendingEntry::from_item(&item(1.0, fraction, 0.0));
        assert_ne!(entry.tax_rate, "0");
        let percent = entry.tax_rate.parse::<f64>().unwrap();
        assert!((percent / 100.0 - fraction).abs() < 1e-25);
    }

    #[test]
    fn test_default_is_blank() {
        assert!(PendingEntry::default().is_blank());
        let entry = PendingEntry {
            name: "x".to_string(),
            ..Default::default()
        };
        assert!(!entry.is_blank());
    }
}
