//! The cart store: line items plus the pending entry form.

use crate::cart::pricing::{self, CartPricing};
use crate::cart::validation::{self, FieldKind, ValidationErrors};
use crate::cart::{LineItem, PendingEntry};
use crate::config::StoreConfig;
use crate::error::CartError;
use crate::ids::LineItemId;
use crate::money::format_amount;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Result of [`CartStore::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new item was appended.
    Added(LineItemId),
    /// The item being edited was replaced in place.
    Updated(LineItemId),
    /// Validation failed; the cart and pending entry are unchanged.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    /// Id of the added or updated item.
    pub fn id(&self) -> Option<&LineItemId> {
        match self {
            SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) => Some(id),
            SubmitOutcome::Rejected(_) => None,
        }
    }

    /// Whether the submit was accepted.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// In-memory cart state.
///
/// Field setters stage raw values on the pending entry; [`submit`](Self::submit)
/// validates them and either appends a new line item or, while an edit is in
/// progress, replaces the edited item in place.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    pending: PendingEntry,
    edit_target: Option<LineItemId>,
    error: Option<String>,
    config: StoreConfig,
}

impl CartStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // Pending entry setters. Nothing is validated until submit.

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.pending.name = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.pending.price = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.pending.quantity = value.into();
    }

    pub fn set_taxable(&mut self, value: bool) {
        self.pending.taxable = value;
    }

    pub fn set_tax_rate(&mut self, value: impl Into<String>) {
        self.pending.tax_rate = value.into();
    }

    pub fn set_discount(&mut self, value: impl Into<String>) {
        self.pending.discount = value.into();
    }

    /// Set a text field of the pending entry by kind.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %kind, value = %value, "set pending field");
        match kind {
            FieldKind::Name => self.pending.name = value,
            FieldKind::Price => self.pending.price = value,
            FieldKind::Quantity => self.pending.quantity = value,
            FieldKind::TaxRate => self.pending.tax_rate = value,
            FieldKind::Discount => self.pending.discount = value,
        }
    }

    /// Replace the whole pending entry.
    pub fn set_pending(&mut self, entry: PendingEntry) {
        self.pending = entry;
    }

    /// Check a raw value for the given field.
    pub fn validate_field(&self, kind: FieldKind, raw: &str) -> bool {
        validation::validate_field(kind, raw)
    }

    /// Validate the pending entry and commit it.
    ///
    /// On failure the aggregated message is stored in [`error`](Self::error)
    /// and nothing else changes. On success the pending entry is reset and
    /// the error cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        let valid = match validation::validate_entry(&self.pending) {
            Ok(valid) => valid,
            Err(errors) => {
                let message = errors.message();
                warn!(error = %message, "cart entry rejected");
                self.error = Some(message);
                return SubmitOutcome::Rejected(errors);
            }
        };

        let target = self
            .edit_target
            .take()
            .and_then(|id| self.items.iter().position(|item| item.id == id));

        let outcome = match target {
            Some(index) => {
                let id = self.items[index].id.clone();
                self.items[index] = valid.into_line_item(id.clone());
                info!(id = %id, "cart item updated");
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = LineItemId::generate();
                self.items.push(valid.into_line_item(id.clone()));
                info!(id = %id, count = self.items.len(), "cart item added");
                SubmitOutcome::Added(id)
            }
        };

        self.pending = PendingEntry::default();
        self.error = None;
        outcome
    }

    /// Alias of [`submit`](Self::submit).
    pub fn add_item(&mut self) -> SubmitOutcome {
        self.submit()
    }

    /// Remove an item. Unknown ids are ignored.
    ///
    /// Returns whether an item was removed.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            if self.edit_target.as_ref() == Some(id) {
                self.edit_target = None;
            }
            info!(id = %id, count = self.items.len(), "cart item removed");
        }
        removed
    }

    /// Load an item into the pending entry and mark it as the edit target.
    ///
    /// The list is untouched until the next [`submit`](Self::submit).
    /// Unknown ids are ignored; returns whether the edit started.
    pub fn edit_item(&mut self, id: &LineItemId) -> bool {
        let Some(entry) = self.get_item(id).map(PendingEntry::from_item) else {
            return false;
        };
        self.pending = entry;
        self.edit_target = Some(id.clone());
        debug!(id = %id, "editing cart item");
        true
    }

    /// Abandon the current edit, resetting the pending entry.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit_target.take() {
            debug!(id = %id, "edit cancelled");
        }
        self.pending = PendingEntry::default();
        self.error = None;
    }

    /// Remove every item and reset the form.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pending = PendingEntry::default();
        self.edit_target = None;
        self.error = None;
    }

    /// Total for a single item: subtotal, plus tax, minus discount.
    pub fn calculate_item_total(&self, item: &LineItem) -> f64 {
        pricing::calculate_item_total(item)
    }

    /// Sum of all item totals, in list order.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(pricing::calculate_item_total).sum()
    }

    /// Per-item and aggregate pricing breakdown.
    pub fn pricing(&self) -> CartPricing {
        CartPricing::for_items(&self.items)
    }

    /// Cart total rendered in the configured currency (e.g., "$38.88").
    pub fn formatted_total(&self) -> String {
        format_amount(self.calculate_total(), self.config.currency)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    /// Message from the last rejected submit, if not yet cleared.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn edit_target(&self) -> Option<&LineItemId> {
        self.edit_target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Id of the item at a 1-based list position.
    pub fn id_at(&self, position: usize) -> Result<&LineItemId, CartError> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(|item| &item.id)
            .ok_or_else(|| CartError::ItemNotFound(format!("position {}", position)))
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            pending: self.pending.clone(),
            edit_target: self.edit_target.clone(),
            error: self.error.clone(),
            pricing: self.pricing(),
            total: self.formatted_total(),
        }
    }
}

/// Point-in-time view of a [`CartStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub pending: PendingEntry,
    pub edit_target: Option<LineItemId>,
    pub error: Option<String>,
    pub pricing: CartPricing,
    /// Formatted grand total.
    pub total: String,
}

impl CartSnapshot {
    /// Format as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
