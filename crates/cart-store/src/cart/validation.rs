//! Field validation for the pending entry.

use crate::cart::{LineItem, PendingEntry};
use crate::error::CartError;
use crate::ids::LineItemId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The validated fields of a pending entry, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Price,
    Quantity,
    TaxRate,
    Discount,
}

impl FieldKind {
    /// All kinds, in the order failures are reported.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Price,
        FieldKind::Quantity,
        FieldKind::TaxRate,
        FieldKind::Discount,
    ];

    /// Check a raw value for this field.
    pub fn validate(&self, raw: &str) -> bool {
        match self {
            FieldKind::Name => !raw.trim().is_empty(),
            FieldKind::Price => parse_number(raw).is_some_and(|v| v >= 0.0),
            FieldKind::Quantity => parse_quantity(raw).is_some(),
            FieldKind::TaxRate | FieldKind::Discount => parse_percent(raw).is_some(),
        }
    }

    /// Message shown when this field fails validation.
    pub fn error_message(&self) -> &'static str {
        match self {
            FieldKind::Name => "Please enter a valid name.",
            FieldKind::Price => "Please enter a valid price.",
            FieldKind::Quantity => "Please enter a valid quantity.",
            FieldKind::TaxRate => "Please enter a valid tax rate (0-100).",
            FieldKind::Discount => "Please enter a valid discount rate (0-100).",
        }
    }

    /// Field name as used in scripts and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Price => "price",
            FieldKind::Quantity => "quantity",
            FieldKind::TaxRate => "tax_rate",
            FieldKind::Discount => "discount",
        }
    }
}

impl FromStr for FieldKind {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(FieldKind::Name),
            "price" => Ok(FieldKind::Price),
            "quantity" => Ok(FieldKind::Quantity),
            "tax_rate" | "tax-rate" | "taxRate" => Ok(FieldKind::TaxRate),
            "discount" => Ok(FieldKind::Discount),
            other => Err(CartError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a raw value for the given field.
pub fn validate_field(kind: FieldKind, raw: &str) -> bool {
    kind.validate(raw)
}

/// The failing fields of a rejected submit.
///
/// Kinds are kept in [`FieldKind::ALL`] order; the display form joins their
/// messages with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    kinds: Vec<FieldKind>,
}

impl ValidationErrors {
    /// Failing field kinds, in reporting order.
    pub fn kinds(&self) -> &[FieldKind] {
        &self.kinds
    }

    /// Whether the given field failed.
    pub fn contains(&self, kind: FieldKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Aggregated human-readable message.
    pub fn message(&self) -> String {
        self.kinds
            .iter()
            .map(FieldKind::error_message)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationErrors {}

/// A pending entry whose fields all passed validation, in parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub taxable: bool,
    /// Tax rate as a fraction; zero when not taxable.
    pub tax_rate: f64,
    /// Discount percentage; zero when none was entered.
    pub discount: f64,
}

impl ValidatedEntry {
    /// Build a line item carrying the given id.
    pub fn into_line_item(self, id: LineItemId) -> LineItem {
        LineItem {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            taxable: self.taxable,
            tax_rate: self.tax_rate,
            discount: self.discount,
        }
    }
}

/// Validate and parse a whole pending entry.
///
/// Tax rate is only checked for taxable entries, and discount only when
/// one was entered.
pub fn validate_entry(entry: &PendingEntry) -> Result<ValidatedEntry, ValidationErrors> {
    let name = Some(&entry.name).filter(|name| !name.trim().is_empty());
    let price = parse_number(&entry.price).filter(|price| *price >= 0.0);
    let quantity = parse_quantity(&entry.quantity);
    let tax_rate = if entry.taxable {
        parse_percent(&entry.tax_rate).map(|rate| rate / 100.0)
    } else {
        Some(0.0)
    };
    let discount = if entry.discount.is_empty() {
        Some(0.0)
    } else {
        parse_percent(&entry.discount)
    };

    match (name, price, quantity, tax_rate, discount) {
        (Some(name), Some(price), Some(quantity), Some(tax_rate), Some(discount)) => {
            Ok(ValidatedEntry {
                name: name.clone(),
                price,
                quantity,
                taxable: entry.taxable,
                tax_rate,
                discount,
            })
        }
        _ => {
            let checks = [
                (FieldKind::Name, name.is_some()),
                (FieldKind::Price, price.is_some()),
                (FieldKind::Quantity, quantity.is_some()),
                (FieldKind::TaxRate, tax_rate.is_some()),
                (FieldKind::Discount, discount.is_some()),
            ];
            let kinds = checks
                .into_iter()
                .filter(|(_, passed)| !passed)
                .map(|(kind, _)| kind)
                .collect();
            Err(ValidationErrors { kinds })
        }
    }
}

/// Parse numeric text: trimmed, non-empty, finite.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a quantity from numeric text.
///
/// The quantity is the leading integer part of the text, so `"2.5"` is 2 and
/// `"1e3"` is 1. Text that is not numeric as a whole is rejected.
pub(crate) fn parse_quantity(raw: &str) -> Option<u32> {
    parse_number(raw)?;
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity >= 1)
}

/// Parse a percentage in `0..=100`.
pub(crate) fn parse_percent(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| (0.0..=100.0).contains(v))
}
