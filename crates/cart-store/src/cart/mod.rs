//! Shopping cart module.
//!
//! Contains the cart store, line items, validation and pricing.

mod item;
mod pricing;
mod store;
mod validation;

pub use item::{LineItem, PendingEntry};
pub use pricing::{
    calculate_discount, calculate_item_total, calculate_tax, discount_applies, CartPricing,
    ItemPricing,
};
pub use store::{CartSnapshot, CartStore, SubmitOutcome};
pub use validation::{validate_entry, validate_field, FieldKind, ValidatedEntry, ValidationErrors};
