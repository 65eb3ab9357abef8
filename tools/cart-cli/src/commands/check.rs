//! Check command - validate a single raw field value.

use anyhow::Result;
use cart_store::FieldKind;
use serde::Serialize;
use tracing::debug;

use super::CheckArgs;
use crate::output::Output;

/// Verdict for one raw field value.
#[derive(Debug, PartialEq, Serialize)]
pub struct CheckReport {
    pub field: FieldKind,
    pub value: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Validate `value` as the named field.
pub fn check(field: &str, value: &str) -> Result<CheckReport> {
    let field: FieldKind = field.parse()?;
    let valid = field.validate(value);
    debug!(%field, value, valid, "checked field");
    Ok(CheckReport {
        field,
        value: value.to_string(),
        valid,
        message: (!valid).then(|| field.error_message()),
    })
}

/// Run the check command.
pub fn run(args: CheckArgs, output: &Output) -> Result<()> {
    let report = check(&args.field, &args.value)?;

    if output.is_json() {
        output.json(&report);
        return Ok(());
    }

    match report.message {
        None => output.success(&format!("{} {:?} is valid", report.field, report.value)),
        Some(message) => output.warn(message),
    }

    Ok(())
}
