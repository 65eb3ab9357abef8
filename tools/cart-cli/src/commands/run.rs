//! Run command - replay a session script against a fresh cart.

use std::path::Path;

use anyhow::Result;
use cart_store::cart::CartSnapshot;
use cart_store::CartStore;
use serde::Serialize;
use tracing::info;

use super::RunArgs;
use crate::config::CliConfig;
use crate::output::Output;
use crate::script::{self, Script, StepReport};

/// Everything a replay produced, as printed in JSON mode.
#[derive(Serialize)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
    pub cart: CartSnapshot,
}

/// Replay `script` on a fresh store built from `config`.
pub fn replay(script: &Script, config: &CliConfig) -> (CartStore, Vec<StepReport>) {
    let mut store = CartStore::with_config(config.store.clone());
    let steps = script::replay(script, &mut store);
    info!(
        steps = steps.len(),
        items = store.len(),
        total = %store.formatted_total(),
        "replayed session"
    );
    (store, steps)
}

/// Run the replay command.
pub fn run(args: RunArgs, config: &CliConfig, output: &Output) -> Result<()> {
    output.debug(&format!("Loading script {}", args.script));
    let script = Script::load(Path::new(&args.script))?;
    let (store, steps) = replay(&script, config);

    if output.is_json() {
        output.json(&RunReport {
            steps,
            cart: store.snapshot(),
        });
        return Ok(());
    }

    if args.steps {
        output.steps(&steps);
    }

    let rejected = steps
        .iter()
        .filter(|report| matches!(report, StepReport::Rejected { .. }))
        .count();
    if rejected > 0 {
        output.warn(&format!("{} of {} steps were rejected", rejected, steps.len()));
    }

    output.cart(&store);

    if let Some(error) = store.error() {
        output.warn(&format!("Pending error: {}", error));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_store::Currency;

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
name = "Broken"
price = "-1"
quantity = "1"
"#;

    fn report(config: &CliConfig) -> serde_json::Value {
        let script = Script::parse(SESSION).unwrap();
        let (store, steps) = replay(&script, config);
        serde_json::to_value(RunReport {
            steps,
            cart: store.snapshot(),
        })
        .unwrap()
    }

    #[test]
    fn test_report_shape() {
        let json = report(&CliConfig::default());

        let steps = json["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["result"], "added");
        assert!(steps[0]["id"].is_string());
        assert_eq!(steps[1]["result"], "rejected");
        assert_eq!(steps[1]["message"], "Please enter a valid price.");

        let cart = &json["cart"];
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);
        assert_eq!(cart["items"][0]["name"], "Item 1");
        assert_eq!(cart["total"], "$38.88");
        assert_eq!(cart["error"], "Please enter a valid price.");
    }

    #[test]
    fn test_report_uses_configured_currency() {
        let mut config = CliConfig::default();
        config.store.currency = Currency::EUR;
        let json = report(&config);
        assert_eq!(json["cart"]["total"], "\u{20ac}38.88");
    }

    #[test]
    fn test_missing_script_fails() {
        let args = RunArgs {
            script: "no-such-session.toml".to_string(),
            steps: false,
        };
        let err = run(args, &CliConfig::default(), &Output::new(false, true)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read script"));
    }
}
