//! CLI command implementations.

pub mod check;
pub mod run;

use clap::Args;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Path to the session script (TOML).
    pub script: String,

    /// Print each step's outcome.
    #[arg(short, long)]
    pub steps: bool,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Field to check (name, price, quantity, tax_rate, discount).
    pub field: String,

    /// Raw value, as it would be typed into the form.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}
