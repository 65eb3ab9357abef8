//! Session scripts: a recorded sequence of cart form actions.
//!
//! ```toml
//! [[steps]]
//! action = "add"
//! name = "Item 1"
//! price = "20"
//! quantity = "2"
//! taxable = true
//! tax_rate = "8"
//! discount = "10"
//!
//! [[steps]]
//! action = "edit"
//! item = 1
//! quantity = "3"
//!
//! [[steps]]
//! action = "remove"
//! item = 1
//! ```
//!
//! Items are referenced by their 1-based position in the cart at the time
//! the step runs. Field values are raw text, exactly as typed into a form.

use anyhow::{Context, Result};
use cart_store::{CartStore, LineItemId, PendingEntry, SubmitOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A parsed session script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse session script")
    }

    /// Load a script file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        let script = Self::parse(&content)
            .with_context(|| format!("Invalid script: {}", path.display()))?;
        info!(path = %path.display(), steps = script.steps.len(), "loaded session script");
        Ok(script)
    }
}

/// One action in a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Fill the form with these fields and submit.
    Add(Fields),
    /// Load an item into the form, override fields, and submit.
    Edit(EditStep),
    /// Remove an item.
    Remove { item: usize },
    /// Start editing an item without submitting.
    Select { item: usize },
    /// Abandon the current edit.
    Cancel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditStep {
    pub item: usize,
    #[serde(flatten)]
    pub fields: Fields,
}

/// Raw form values; missing fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fields {
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub taxable: Option<bool>,
    pub tax_rate: Option<String>,
    pub discount: Option<String>,
}

impl Fields {
    /// Stage these values on the store's pending entry.
    fn apply(&self, store: &mut CartStore) {
        if let Some(name) = &self.name {
            store.set_name(name.as_str());
        }
        if let Some(price) = &self.price {
            store.set_price(price.as_str());
        }
        if let Some(quantity) = &self.quantity {
            store.set_quantity(quantity.as_str());
        }
        if let Some(taxable) = self.taxable {
            store.set_taxable(taxable);
        }
        if let Some(tax_rate) = &self.tax_rate {
            store.set_tax_rate(tax_rate.as_str());
        }
        if let Some(discount) = &self.discount {
            store.set_discount(discount.as_str());
        }
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StepReport {
    Added { id: LineItemId },
    Updated { id: LineItemId },
    Rejected { message: String },
    Removed { id: LineItemId },
    Editing { id: LineItemId },
    Cancelled,
    /// The referenced position held no item; the step was skipped.
    Missing { item: usize },
}

impl StepReport {
    fn from_outcome(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Added(id) => StepReport::Added { id },
            SubmitOutcome::Updated(id) => StepReport::Updated { id },
            SubmitOutcome::Rejected(errors) => StepReport::Rejected {
                message: errors.message(),
            },
        }
    }
}

/// Run every step in order against the store.
pub fn replay(script: &Script, store: &mut CartStore) -> Vec<StepReport> {
    script
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let report = apply(step, store);
            debug!(step = i + 1, ?report, "replayed step");
            report
        })
        .collect()
}

fn apply(step: &Step, store: &mut CartStore) -> StepReport {
    match step {
        Step::Add(fields) => {
            store.set_pending(PendingEntry::default());
            fields.apply(store);
            StepReport::from_outcome(store.submit())
        }
        Step::Edit(edit) => {
            let Some(id) = resolve(store, edit.item) else {
                return StepReport::Missing { item: edit.item };
            };
            store.edit_item(&id);
            edit.fields.apply(store);
            StepReport::from_outcome(store.submit())
        }
        Step::Remove { item } => match resolve(store, *item) {
            Some(id) => {
                store.remove_item(&id);
                StepReport::Removed { id }
            }
            None => StepReport::Missing { item: *item },
        },
        Step::Select { item } => match resolve(store, *item) {
            Some(id) => {
                store.edit_item(&id);
                StepReport::Editing { id }
            }
            None => StepReport::Missing { item: *item },
        },
        Step::Cancel => {
            store.cancel_edit();
            StepReport::Cancelled
        }
    }
}

fn resolve(store: &CartStore, position: usize) -> Option<LineItemId> {
    store.id_at(position).ok().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"
[[steps]]
action = "add"
name = "Item 1"
price = "20"
quantity = "2"
taxable = true
tax_rate = "8"
discount = "10"

[[steps]]
action = "add"
name = ""
price = "abc"
quantity = "0"

[[steps]]
action = "add"
name = "Item 2"
price = "5"
quantity = "1"

[[steps]]
action = "edit"
item = 2
quantity = "3"

[[steps]]
action = "remove"
item = 7
"#;

    #[test]
    fn test_parse_steps() {
        let script = Script::parse(SESSION).unwrap();
        assert_eq!(script.steps.len(), 5);
        assert!(matches!(script.steps[0], Step::Add(ref f) if f.taxable == Some(true)));
        assert!(
            matches!(script.steps[3], Step::Edit(ref e) if e.item == 2 && e.fields.quantity.as_deref() == Some("3"))
        );
        assert!(matches!(script.steps[4], Step::Remove { item: 7 }));
    }

    #[test]
    fn test_replay_session() {
        let script = Script::parse(SESSION).unwrap();
        let mut store = CartStore::new();
        let reports = replay(&script, &mut store);

        assert!(matches!(reports[0], StepReport::Added { .. }));
        assert_eq!(
            reports[1],
            StepReport::Rejected {
                message: "Please enter a valid name. Please enter a valid price. \
                          Please enter a valid quantity."
                    .to_string()
            }
        );
        assert!(matches!(reports[2], StepReport::Added { .. }));
        assert!(matches!(reports[3], StepReport::Updated { .. }));
        assert_eq!(reports[4], StepReport::Missing { item: 7 });

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].quantity, 3);
        assert!((store.calculate_total() - 53.88).abs() < 1e-9);
    }

    #[test]
    fn test_add_starts_from_blank_form() {
        let script = Script::parse(
            r#"
[[steps]]
action = "add"
name = "Taxed"
price = "10"
quantity = "1"
taxable = true
tax_rate = "10"

[[steps]]
action = "add"
name = "Plain"
price = "10"
quantity = "1"
"#,
        )
        .unwrap();
        let mut store = CartStore::new();
        replay(&script, &mut store);

        assert!(!store.items()[1].taxable);
        assert!((store.calculate_total() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_and_cancel() {
        let script = Script::parse(
            r#"
[[steps]]
action = "add"
name = "Item"
price = "1"
quantity = "1"

[[steps]]
action = "select"
item = 1

[[steps]]
action = "cancel"
"#,
        )
        .unwrap();
        let mut store = CartStore::new();
        let reports = replay(&script, &mut store);

        assert!(matches!(reports[1], StepReport::Editing { .. }));
        assert_eq!(reports[2], StepReport::Cancelled);
        assert!(!store.is_editing());
        assert!(store.pending().is_blank());
    }

    #[test]
    fn test_unknown_action_is_error() {
        let err = Script::parse("[[steps]]\naction = \"explode\"\n").unwrap_err();
        assert!(format!("{:#}", err).contains("session script"));
    }

    #[test]
    fn test_report_serializes_with_tag() {
        let report = StepReport::Missing { item: 3 };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"], "missing");
        assert_eq!(json["item"], 3);
    }
}
