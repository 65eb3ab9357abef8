//! In-memory shopping cart state.
//!
//! A [`CartStore`] holds a list of line items and a pending entry form.
//! Raw field values are staged with setters, validated on submit, and
//! committed either as a new item or as an in-place replacement of the
//! item being edited.
//!
//! - **Validation**: a closed set of [`FieldKind`]s with fixed messages
//! - **Pricing**: tax on the subtotal first, then the discount on the taxed amount
//! - **Errors**: rejected submits are reported through [`CartStore::error`],
//!   not as `Err` values
//!
//! # Example
//!
//! ```
//! use cart_store::prelude::*;
//!
//! let mut store = CartStore::new();
//! store.set_name("Item 1");
//! store.set_price("20");
//! store.set_quantity("2");
//! store.set_taxable(true);
//! store.set_tax_rate("8");
//! store.set_discount("10");
//!
//! assert!(store.submit().is_accepted());
//! assert_eq!(store.formatted_total(), "$38.88");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;

pub use cart::{CartStore, FieldKind, LineItem, PendingEntry, SubmitOutcome};
pub use config::StoreConfig;
pub use error::CartError;
pub use ids::LineItemId;
pub use money::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CartError;
    pub use crate::ids::LineItemId;
    pub use crate::money::{format_amount, Currency};

    pub use crate::cart::{
        CartPricing, CartSnapshot, CartStore, FieldKind, ItemPricing, LineItem, PendingEntry,
        SubmitOutcome, ValidationErrors,
    };
}
