//! Terminal rendering of carts, step reports and field checks.

use cart_store::money::format_amount;
use cart_store::{CartStore, Currency, LineItem};
use console::style;
use serde::Serialize;

use crate::script::StepReport;

/// Output handler for CLI messages.
///
/// In JSON mode only [`json`](Self::json) and errors are printed.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Verbose-only detail.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print numbered step outcomes; rejected steps are highlighted.
    pub fn steps(&self, reports: &[StepReport]) {
        if self.json {
            return;
        }
        println!("\n{}", style("Steps").bold().underlined());
        for (i, report) in reports.iter().enumerate() {
            let counter = style(format!("[{}/{}]", i + 1, reports.len())).dim();
            let line = step_line(report);
            match report {
                StepReport::Rejected { .. } | StepReport::Missing { .. } => {
                    println!("{} {}", counter, style(line).yellow())
                }
                _ => println!("{} {}", counter, line),
            }
        }
    }

    /// Print the cart's items and its pricing summary.
    pub fn cart(&self, store: &CartStore) {
        if self.json {
            return;
        }
        let currency = store.config().currency;
        println!("\n{}", style("Cart").bold().underlined());
        if store.is_empty() {
            println!("  {}", style("(empty)").dim());
        }
        for item in store.items() {
            let line = item_line(item, store.calculate_item_total(item), currency);
            println!("  {} {}", style("•").dim(), line);
        }

        let pricing = store.pricing();
        let rows = [
            ("Items", store.item_count().to_string()),
            ("Subtotal", format_amount(pricing.subtotal, currency)),
            ("Tax", format_amount(pricing.tax_total, currency)),
            ("Discount", format_amount(pricing.discount_total, currency)),
        ];
        for (key, value) in rows {
            println!("  {}: {}", style(key).dim(), value);
        }
        println!(
            "  {}: {}",
            style("Total").bold(),
            style(store.formatted_total()).bold()
        );
    }
}

/// One cart line, e.g. `Item 1 - $20.00 x 2, tax 8.00%, discount 10% = $38.88`.
pub fn item_line(item: &LineItem, total: f64, currency: Currency) -> String {
    let mut line = format!(
        "{} - {} x {}",
        item.name,
        format_amount(item.price, currency),
        item.quantity
    );
    if item.taxable {
        line.push_str(&format!(", tax {:.2}%", item.tax_rate * 100.0));
    }
    if item.discount > 0.0 {
        line.push_str(&format!(", discount {}%", item.discount));
    }
    line.push_str(&format!(" = {}", format_amount(total, currency)));
    line
}

/// One-line description of a replayed step.
pub fn step_line(report: &StepReport) -> String {
    match report {
        StepReport::Added { id } => format!("added {}", id),
        StepReport::Updated { id } => format!("updated {}", id),
        StepReport::Rejected { message } => format!("rejected: {}", message),
        StepReport::Removed { id } => format!("removed {}", id),
        StepReport::Editing { id } => format!("editing {}", id),
        StepReport::Cancelled => "edit cancelled".to_string(),
        StepReport::Missing { item } => format!("no item at position {}", item),
    }
}
